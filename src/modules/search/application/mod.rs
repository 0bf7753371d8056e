pub mod debounced_search;

pub use debounced_search::QueryDebouncer;
