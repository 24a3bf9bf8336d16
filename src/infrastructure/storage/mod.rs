//! Session storage adapters.

mod file_storage;
mod memory_storage;

pub use file_storage::{FileSessionStorage, SESSION_FILE_NAME};
pub use memory_storage::MemorySessionStorage;
