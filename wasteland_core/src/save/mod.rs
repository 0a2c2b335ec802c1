//! Save games - JSON blobs in a key-value string store
//!
//! The store abstraction stands in for the host's key-value persistence
//! (browser local storage, a save directory, an in-memory map in tests).

mod manager;
mod store;

pub use manager::{SaveGame, SaveManager, SaveSlot, SAVE_FORMAT};
pub use store::{FileSaveStore, MemorySaveStore, SaveStore};

use thiserror::Error;

/// Persistence error
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corrupt save in slot {slot}: {reason}")]
    Corrupt { slot: u32, reason: String },
    #[error("No save in slot {0}")]
    Empty(u32),
    #[error("Failed to serialize save: {0}")]
    Serialize(#[from] serde_json::Error),
}
