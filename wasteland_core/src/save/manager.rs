//! SaveManager - slot-based JSON persistence of the player record

use super::store::SaveStore;
use super::SaveError;
use crate::character::Player;
use serde::{Deserialize, Serialize};

/// Format marker checked on load; there is no migration machinery
pub const SAVE_FORMAT: &str = "wasteland-save-1";

/// The persisted blob
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveGame {
    pub format: String,
    pub slot: u32,
    /// Caller-supplied wall clock, milliseconds since the epoch
    pub saved_at_ms: u64,
    pub player: Player,
}

/// Listing entry; the player blob stays on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveSlot {
    pub slot: u32,
    pub saved_at_ms: u64,
    pub player_name: String,
    pub player_level: u32,
}

/// Slot-based save/load over any [`SaveStore`]
pub struct SaveManager<S: SaveStore> {
    store: S,
}

impl<S: SaveStore> SaveManager<S> {
    pub fn new(store: S) -> Self {
        SaveManager { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn key_for(slot: u32) -> String {
        format!("slot_{}", slot)
    }

    /// Write the player into a slot, replacing any previous save
    pub fn save(&mut self, slot: u32, player: &Player, now_ms: u64) -> Result<(), SaveError> {
        let save = SaveGame {
            format: SAVE_FORMAT.to_string(),
            slot,
            saved_at_ms: now_ms,
            player: player.clone(),
        };
        let blob = serde_json::to_string(&save)?;
        self.store.write(&Self::key_for(slot), &blob)?;
        log::info!("Saved '{}' to slot {}", player.name, slot);
        Ok(())
    }

    /// Load the player from a slot
    pub fn load(&self, slot: u32) -> Result<SaveGame, SaveError> {
        let blob = self
            .store
            .read(&Self::key_for(slot))?
            .ok_or(SaveError::Empty(slot))?;

        let save: SaveGame = serde_json::from_str(&blob).map_err(|error| SaveError::Corrupt {
            slot,
            reason: error.to_string(),
        })?;
        if save.format != SAVE_FORMAT {
            return Err(SaveError::Corrupt {
                slot,
                reason: format!("unknown format '{}'", save.format),
            });
        }
        Ok(save)
    }

    pub fn delete(&mut self, slot: u32) -> Result<(), SaveError> {
        self.store.remove(&Self::key_for(slot))
    }

    /// List every readable slot; unreadable blobs are logged and skipped
    pub fn list(&self) -> Result<Vec<SaveSlot>, SaveError> {
        let mut slots = Vec::new();
        for key in self.store.keys()? {
            let Some(slot) = key
                .strip_prefix("slot_")
                .and_then(|n| n.parse::<u32>().ok())
            else {
                continue;
            };
            match self.load(slot) {
                Ok(save) => slots.push(SaveSlot {
                    slot,
                    saved_at_ms: save.saved_at_ms,
                    player_name: save.player.name,
                    player_level: save.player.level,
                }),
                Err(error) => log::warn!("Skipping unreadable slot {}: {}", slot, error),
            }
        }
        slots.sort_by_key(|s| s.slot);
        Ok(slots)
    }
}
