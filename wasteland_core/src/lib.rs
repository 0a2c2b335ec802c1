//! wasteland_core - Game logic for a turn-based wasteland RPG
//!
//! This library provides:
//! - Combat resolution: hit, damage, and experience calculators behind
//!   a [`combat::CombatEngine`] façade
//! - Reference data: weapon and armor tables plus tunable constants,
//!   loadable from TOML
//! - Character records: the player, enemies, and level progression
//! - An asset loading pipeline with validation, cache skip, priority
//!   ordering, progress tracking, and bounded-concurrency retrying loads
//! - Slot-based JSON save games over a pluggable key-value store

pub mod assets;
pub mod character;
pub mod combat;
pub mod config;
pub mod prelude;
pub mod save;
pub mod types;

// Re-export core types for convenience
pub use character::{Enemy, Player, SkillSet};
pub use combat::{AttackOutcome, CombatEngine, CombatError};
pub use config::{ArmorDb, ArmorInfo, ConfigError, GameConstants, Weapon, WeaponDb};
pub use save::{SaveError, SaveManager};
pub use types::{AmmoKind, EnemyKind, SkillKind};
