//! Tunable game constants

use serde::{Deserialize, Serialize};

/// Tunable constants for combat, progression, and asset loading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub combat: CombatConstants,
    #[serde(default)]
    pub progression: ProgressionConstants,
    #[serde(default)]
    pub loader: LoaderConstants,
}

impl Default for GameConstants {
    fn default() -> Self {
        GameConstants {
            combat: CombatConstants::default(),
            progression: ProgressionConstants::default(),
            loader: LoaderConstants::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Floor of the to-hit chance after all modifiers
    #[serde(default = "default_min_hit_chance")]
    pub min_hit_chance: f64,
    /// Ceiling of the to-hit chance after all modifiers
    #[serde(default = "default_max_hit_chance")]
    pub max_hit_chance: f64,
    /// Damage multiplier on a critical hit
    #[serde(default = "default_critical_multiplier")]
    pub critical_multiplier: f64,
    /// Skill score above this grants bonus damage
    #[serde(default = "default_skill_bonus_offset")]
    pub skill_bonus_offset: u32,
    /// Bonus damage per this many skill points over the offset
    #[serde(default = "default_skill_bonus_divisor")]
    pub skill_bonus_divisor: u32,
    /// Armor class up to this value does not reduce hit chance
    #[serde(default = "default_armor_class_grace")]
    pub armor_class_grace: i32,
    /// Hit chance lost per point of armor class over the grace value
    #[serde(default = "default_armor_class_penalty")]
    pub armor_class_penalty: f64,
    /// A landed hit always deals at least this much
    #[serde(default = "default_minimum_damage")]
    pub minimum_damage: u32,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            min_hit_chance: 5.0,
            max_hit_chance: 95.0,
            critical_multiplier: 2.0,
            skill_bonus_offset: 50,
            skill_bonus_divisor: 10,
            armor_class_grace: 5,
            armor_class_penalty: 2.0,
            minimum_damage: 1,
        }
    }
}

fn default_min_hit_chance() -> f64 {
    5.0
}
fn default_max_hit_chance() -> f64 {
    95.0
}
fn default_critical_multiplier() -> f64 {
    2.0
}
fn default_skill_bonus_offset() -> u32 {
    50
}
fn default_skill_bonus_divisor() -> u32 {
    10
}
fn default_armor_class_grace() -> i32 {
    5
}
fn default_armor_class_penalty() -> f64 {
    2.0
}
fn default_minimum_damage() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionConstants {
    /// Experience needed per level: threshold = level * this
    #[serde(default = "default_experience_per_level")]
    pub experience_per_level: u32,
    /// Reward reduction per level the player is above the enemy
    #[serde(default = "default_level_difference_falloff")]
    pub level_difference_falloff: f64,
    /// A kill always awards at least this much experience
    #[serde(default = "default_minimum_experience")]
    pub minimum_experience: u32,
}

impl Default for ProgressionConstants {
    fn default() -> Self {
        ProgressionConstants {
            experience_per_level: 1000,
            level_difference_falloff: 0.1,
            minimum_experience: 1,
        }
    }
}

fn default_experience_per_level() -> u32 {
    1000
}
fn default_level_difference_falloff() -> f64 {
    0.1
}
fn default_minimum_experience() -> u32 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConstants {
    /// Assets fetched concurrently
    #[serde(default = "default_max_parallel")]
    pub max_parallel: usize,
    /// Fetch attempts per asset before giving up
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Fixed delay between retry attempts, in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// Per-asset fetch deadline, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for LoaderConstants {
    fn default() -> Self {
        LoaderConstants {
            max_parallel: 4,
            max_retries: 3,
            retry_delay_ms: 250,
            timeout_ms: 10_000,
        }
    }
}

fn default_max_parallel() -> usize {
    4
}
fn default_max_retries() -> u32 {
    3
}
fn default_retry_delay_ms() -> u64 {
    250
}
fn default_timeout_ms() -> u64 {
    10_000
}
