pub mod gviz;
pub mod store;
pub mod strategies;
