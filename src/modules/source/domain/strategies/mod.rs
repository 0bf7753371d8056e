pub mod catalog_strategy;

pub use catalog_strategy::CatalogStrategy;
#[cfg(test)]
pub use catalog_strategy::MockCatalogStrategy;
