//! Enemy records - construct, mutate during one encounter, discard

use crate::config::DamageRange;
use crate::types::EnemyKind;
use serde::{Deserialize, Serialize};

/// Defensive block of an enemy
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Defence {
    /// Reduces incoming hit chance
    pub armor_class: i32,
    /// Flat damage subtracted before resistance
    pub damage_threshold: u32,
    /// Fractional damage reduction in [0, 1]
    pub damage_resistance: f64,
}

impl Defence {
    /// Defenceless baseline
    pub fn none() -> Self {
        Defence {
            armor_class: 0,
            damage_threshold: 0,
            damage_resistance: 0.0,
        }
    }
}

/// Offensive block of an enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyAttack {
    /// Raw to-hit chance in percent, clamped at resolution time
    pub hit_chance: f64,
    pub weapon_name: String,
    pub damage: DamageRange,
    pub shots: u32,
}

/// Enemy record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: String,
    pub name: String,
    pub kind: EnemyKind,
    pub level: u32,
    pub health: i32,
    pub defence: Defence,
    pub attack: EnemyAttack,
    /// Experience yardstick before the level-difference falloff
    pub base_experience: u32,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply damage, clamping at zero. Returns remaining health.
    pub fn take_damage(&mut self, amount: u32) -> i32 {
        self.health = (self.health - amount as i32).max(0);
        self.health
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_radroach() -> Enemy {
        Enemy {
            id: "radroach_1".to_string(),
            name: "Radroach".to_string(),
            kind: EnemyKind::Critter,
            level: 1,
            health: 10,
            defence: Defence::none(),
            attack: EnemyAttack {
                hit_chance: 40.0,
                weapon_name: "Mandibles".to_string(),
                damage: DamageRange::new(1, 3),
                shots: 1,
            },
            base_experience: 25,
        }
    }

    #[test]
    fn test_take_damage() {
        let mut enemy = make_radroach();
        assert_eq!(enemy.take_damage(4), 6);
        assert!(enemy.is_alive());
        assert_eq!(enemy.take_damage(100), 0);
        assert!(!enemy.is_alive());
    }
}
