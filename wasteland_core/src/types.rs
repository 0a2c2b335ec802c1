//! Core types shared across the wasteland_core modules

use serde::{Deserialize, Serialize};
use std::fmt;

/// Combat-relevant skills a character is scored on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillKind {
    SmallGuns,
    BigGuns,
    EnergyWeapons,
    Unarmed,
    MeleeWeapons,
    Throwing,
    FirstAid,
    Sneak,
    Lockpick,
    Science,
    Repair,
    Barter,
}

impl SkillKind {
    /// Get all skills
    pub fn all() -> &'static [SkillKind] {
        &[
            SkillKind::SmallGuns,
            SkillKind::BigGuns,
            SkillKind::EnergyWeapons,
            SkillKind::Unarmed,
            SkillKind::MeleeWeapons,
            SkillKind::Throwing,
            SkillKind::FirstAid,
            SkillKind::Sneak,
            SkillKind::Lockpick,
            SkillKind::Science,
            SkillKind::Repair,
            SkillKind::Barter,
        ]
    }

    /// Display name for combat log output
    pub fn display_name(&self) -> &'static str {
        match self {
            SkillKind::SmallGuns => "Small Guns",
            SkillKind::BigGuns => "Big Guns",
            SkillKind::EnergyWeapons => "Energy Weapons",
            SkillKind::Unarmed => "Unarmed",
            SkillKind::MeleeWeapons => "Melee Weapons",
            SkillKind::Throwing => "Throwing",
            SkillKind::FirstAid => "First Aid",
            SkillKind::Sneak => "Sneak",
            SkillKind::Lockpick => "Lockpick",
            SkillKind::Science => "Science",
            SkillKind::Repair => "Repair",
            SkillKind::Barter => "Barter",
        }
    }
}

impl fmt::Display for SkillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Ammunition families weapons draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmmoKind {
    /// Melee and unarmed weapons consume nothing
    None,
    Mm9,
    Mm10,
    Mm556,
    ShotgunShell,
    EnergyCell,
}

impl AmmoKind {
    /// Get all ammo kinds that occupy pouch space
    pub fn all_consumable() -> &'static [AmmoKind] {
        &[
            AmmoKind::Mm9,
            AmmoKind::Mm10,
            AmmoKind::Mm556,
            AmmoKind::ShotgunShell,
            AmmoKind::EnergyCell,
        ]
    }

    /// Whether attacks with this ammo kind deplete the pouch
    pub fn is_consumable(&self) -> bool {
        !matches!(self, AmmoKind::None)
    }
}

/// Broad enemy categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyKind {
    Critter,
    Raider,
    Mutant,
    Robot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_skills() {
        assert_eq!(SkillKind::all().len(), 12);
    }

    #[test]
    fn test_skill_serde_snake_case() {
        let json = serde_json::to_string(&SkillKind::SmallGuns).unwrap();
        assert_eq!(json, "\"small_guns\"");
    }

    #[test]
    fn test_melee_ammo_not_consumable() {
        assert!(!AmmoKind::None.is_consumable());
        assert!(AmmoKind::Mm10.is_consumable());
    }
}
