//! AttackOutcome - transient record of one resolved attack

use crate::character::LevelUpReport;
use serde::{Deserialize, Serialize};

/// Result of one attack, not persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub attacker: String,
    pub target: String,
    pub is_hit: bool,
    /// Total damage dealt across all shots
    pub damage: u32,
    /// Whether any shot in the attack landed a critical
    pub is_critical: bool,
    /// Shots actually fired (can fall short of the weapon's rate when
    /// ammunition runs low mid-attack)
    pub shots_fired: u32,
    pub remaining_health: i32,
    pub target_defeated: bool,
    /// Experience awarded for a kill, if any
    pub experience_awarded: Option<u32>,
    /// Level-up processing for a kill, if any
    pub level_up: Option<LevelUpReport>,
    pub message: String,
}

impl AttackOutcome {
    /// A missed attack
    pub fn miss(attacker: impl Into<String>, target: impl Into<String>, remaining_health: i32) -> Self {
        AttackOutcome {
            attacker: attacker.into(),
            target: target.into(),
            is_hit: false,
            damage: 0,
            is_critical: false,
            shots_fired: 0,
            remaining_health,
            target_defeated: false,
            experience_awarded: None,
            level_up: None,
            message: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_shape() {
        let outcome = AttackOutcome::miss("Raider", "Vault Dweller", 30);
        assert!(!outcome.is_hit);
        assert_eq!(outcome.damage, 0);
        assert!(!outcome.target_defeated);
        assert!(outcome.experience_awarded.is_none());
    }
}
