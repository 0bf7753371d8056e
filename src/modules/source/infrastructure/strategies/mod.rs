pub mod builtin;
pub mod cached;
pub mod remote;

pub use builtin::{sample_entries, BuiltInCatalogStrategy};
pub use cached::CachedCatalogStrategy;
pub use remote::{RemoteSheetStrategy, RemoteTarget};
