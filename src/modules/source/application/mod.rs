pub mod catalog_source;
pub mod observer;

pub use catalog_source::CatalogSource;
pub use observer::{
    EventLevel, LoggingObserver, RecordingObserver, RetrievalEvent, RetrievalObserver,
};
