pub mod domain;

pub use domain::entities::CatalogEntry;
