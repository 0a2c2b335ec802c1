//! Player and enemy records plus the mutation operations that act on them

mod enemy;
mod player;
mod progression;

pub use enemy::{Defence, Enemy, EnemyAttack};
pub use player::{Player, SkillSet, STIMPAK_HEAL};
pub use progression::{add_experience, experience_to_next, LevelUpReport};

use thiserror::Error;

/// Errors from character mutation operations
#[derive(Error, Debug)]
pub enum CharacterError {
    #[error("No stimpaks left")]
    NoStimpaks,
    #[error("Already at full health")]
    AlreadyAtFullHealth,
    #[error("Weapon not in inventory: {0}")]
    WeaponNotOwned(String),
}
