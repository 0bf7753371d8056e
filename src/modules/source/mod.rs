pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::{
    CatalogSource, EventLevel, LoggingObserver, RecordingObserver, RetrievalEvent,
    RetrievalObserver,
};
pub use domain::entities::{RetrievalOutcome, StrategyKind};
pub use domain::errors::{RetrievalError, RetrievalResult};
pub use domain::repositories::KeyValueStore;
pub use domain::strategies::CatalogStrategy;
pub use infrastructure::gviz::{SheetView, SheetsClient};
pub use infrastructure::store::{CachedCatalog, CatalogCache, FileStore, MemoryStore};
pub use infrastructure::strategies::{
    sample_entries, BuiltInCatalogStrategy, CachedCatalogStrategy, RemoteSheetStrategy,
    RemoteTarget,
};
