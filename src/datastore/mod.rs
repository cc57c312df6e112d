mod datastore;
mod error;
mod memory;
mod mysql;

pub use datastore::TaskDataStore;
pub use error::DataStoreError;
pub use memory::MemoryTaskStore;
pub use mysql::{connect, MySqlTaskStore};
