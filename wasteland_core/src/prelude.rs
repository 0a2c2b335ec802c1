//! Prelude module for convenient imports
//!
//! ```rust
//! use wasteland_core::prelude::*;
//! ```

// Core types
pub use crate::types::{AmmoKind, EnemyKind, SkillKind};

// Characters
pub use crate::character::{
    add_experience, Defence, Enemy, EnemyAttack, LevelUpReport, Player, SkillSet,
};

// Combat
pub use crate::combat::{AttackOutcome, CombatEngine, CombatError};

// Reference data
pub use crate::config::{ArmorDb, ArmorInfo, DamageRange, GameConstants, Weapon, WeaponDb};

// Assets
pub use crate::assets::{
    AssetCache, AssetFetcher, AssetKind, AssetPipeline, AssetRequest, LoadOptions, LoadPriority,
    LoadReport, ProgressUpdate,
};

// Saves
pub use crate::save::{FileSaveStore, MemorySaveStore, SaveGame, SaveManager, SaveStore};
