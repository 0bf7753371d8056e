pub mod catalog_cache;
pub mod file_store;
pub mod memory_store;

pub use catalog_cache::{CachedCatalog, CatalogCache};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
