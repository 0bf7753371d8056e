pub mod key_value_store;

pub use key_value_store::KeyValueStore;
#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
