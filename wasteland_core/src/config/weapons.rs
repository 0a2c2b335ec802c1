//! Weapon reference data - immutable, loaded once

use crate::types::{AmmoKind, SkillKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inclusive damage roll bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

impl DamageRange {
    pub fn new(min: u32, max: u32) -> Self {
        DamageRange { min, max }
    }

    /// Midpoint of the range, for non-random projections
    pub fn average(&self) -> f64 {
        (self.min + self.max) as f64 / 2.0
    }
}

/// Weapon record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub skill: SkillKind,
    pub ammo: AmmoKind,
    /// Minimum time between attacks, in milliseconds
    pub cooldown_ms: u64,
    pub damage: DamageRange,
    pub clip_size: u32,
    pub shots_per_attack: u32,
    /// Chance to land a critical hit, in percent
    pub critical_chance: f64,
}

impl Weapon {
    /// Accuracy bonus contributed to hit chance (half the critical chance)
    pub fn accuracy_bonus(&self) -> f64 {
        self.critical_chance / 2.0
    }

    /// Whether attacks consume ammunition
    pub fn uses_ammo(&self) -> bool {
        self.ammo.is_consumable()
    }
}

/// Immutable weapon database keyed by weapon name
///
/// Ships a built-in table; entries can be replaced or extended from TOML.
#[derive(Debug, Clone)]
pub struct WeaponDb {
    weapons: HashMap<String, Weapon>,
}

/// TOML shape: a list of weapon tables
#[derive(Debug, Deserialize)]
struct WeaponFile {
    #[serde(rename = "weapon")]
    weapons: Vec<Weapon>,
}

impl WeaponDb {
    /// Build the database with the built-in weapon table
    pub fn builtin() -> Self {
        let mut db = WeaponDb {
            weapons: HashMap::new(),
        };
        for weapon in default_weapons() {
            db.insert(weapon);
        }
        db
    }

    /// Parse additional weapons from a TOML string, replacing same-name entries
    pub fn extend_from_toml(&mut self, content: &str) -> Result<(), super::ConfigError> {
        let file: WeaponFile = super::parse_toml(content)?;
        for weapon in file.weapons {
            self.insert(weapon);
        }
        Ok(())
    }

    fn insert(&mut self, weapon: Weapon) {
        self.weapons.insert(weapon.name.clone(), weapon);
    }

    /// Get a weapon by name
    pub fn get(&self, name: &str) -> Option<&Weapon> {
        self.weapons.get(name)
    }

    /// Get a weapon by name, or a typed error
    pub fn require(&self, name: &str) -> Result<&Weapon, super::ConfigError> {
        self.weapons
            .get(name)
            .ok_or_else(|| super::ConfigError::UnknownWeapon(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.weapons.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// Name every starting character can fall back to
    pub fn default_weapon_name() -> &'static str {
        "Fists"
    }
}

fn default_weapons() -> Vec<Weapon> {
    vec![
        Weapon {
            name: "Fists".to_string(),
            skill: SkillKind::Unarmed,
            ammo: AmmoKind::None,
            cooldown_ms: 800,
            damage: DamageRange::new(1, 4),
            clip_size: 0,
            shots_per_attack: 1,
            critical_chance: 5.0,
        },
        Weapon {
            name: "Combat Knife".to_string(),
            skill: SkillKind::MeleeWeapons,
            ammo: AmmoKind::None,
            cooldown_ms: 900,
            damage: DamageRange::new(3, 10),
            clip_size: 0,
            shots_per_attack: 1,
            critical_chance: 8.0,
        },
        Weapon {
            name: "9mm Pistol".to_string(),
            skill: SkillKind::SmallGuns,
            ammo: AmmoKind::Mm9,
            cooldown_ms: 1000,
            damage: DamageRange::new(5, 12),
            clip_size: 12,
            shots_per_attack: 1,
            critical_chance: 10.0,
        },
        Weapon {
            name: "10mm SMG".to_string(),
            skill: SkillKind::SmallGuns,
            ammo: AmmoKind::Mm10,
            cooldown_ms: 1200,
            damage: DamageRange::new(4, 9),
            clip_size: 30,
            shots_per_attack: 3,
            critical_chance: 6.0,
        },
        Weapon {
            name: "Hunting Rifle".to_string(),
            skill: SkillKind::SmallGuns,
            ammo: AmmoKind::Mm556,
            cooldown_ms: 1600,
            damage: DamageRange::new(8, 20),
            clip_size: 10,
            shots_per_attack: 1,
            critical_chance: 12.0,
        },
        Weapon {
            name: "Combat Shotgun".to_string(),
            skill: SkillKind::BigGuns,
            ammo: AmmoKind::ShotgunShell,
            cooldown_ms: 1400,
            damage: DamageRange::new(12, 24),
            clip_size: 8,
            shots_per_attack: 1,
            critical_chance: 8.0,
        },
        Weapon {
            name: "Laser Pistol".to_string(),
            skill: SkillKind::EnergyWeapons,
            ammo: AmmoKind::EnergyCell,
            cooldown_ms: 1100,
            damage: DamageRange::new(10, 22),
            clip_size: 12,
            shots_per_attack: 1,
            critical_chance: 14.0,
        },
        Weapon {
            name: "Throwing Spear".to_string(),
            skill: SkillKind::Throwing,
            ammo: AmmoKind::None,
            cooldown_ms: 1500,
            damage: DamageRange::new(6, 14),
            clip_size: 0,
            shots_per_attack: 1,
            critical_chance: 7.0,
        },
    ]
}
