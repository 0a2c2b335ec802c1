//! Player character - the one record mutated in place across a session

use super::CharacterError;
use crate::config::{ArmorDb, ConfigError, WeaponDb};
use crate::types::{AmmoKind, SkillKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Health restored by one stimpak
pub const STIMPAK_HEAL: i32 = 25;

/// Default score for an untrained skill
const BASE_SKILL_SCORE: u32 = 25;

/// Skill scores, one per [`SkillKind`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSet {
    scores: HashMap<SkillKind, u32>,
}

impl Default for SkillSet {
    fn default() -> Self {
        let scores = SkillKind::all()
            .iter()
            .map(|&kind| (kind, BASE_SKILL_SCORE))
            .collect();
        SkillSet { scores }
    }
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for a skill (untrained baseline if never set)
    pub fn score(&self, kind: SkillKind) -> u32 {
        self.scores.get(&kind).copied().unwrap_or(BASE_SKILL_SCORE)
    }

    pub fn set(&mut self, kind: SkillKind, score: u32) {
        self.scores.insert(kind, score);
    }

    pub fn raise(&mut self, kind: SkillKind, by: u32) {
        let current = self.score(kind);
        self.scores.insert(kind, current + by);
    }
}

/// Player character record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub level: u32,
    pub experience: u32,
    pub skills: SkillSet,
    /// Name of the equipped weapon (resolved against the weapon database)
    pub equipped_weapon: String,
    /// Name of the worn armor (resolved against the armor database)
    pub equipped_armor: String,
    /// Weapon names the player carries
    pub weapons: Vec<String>,
    ammo: HashMap<AmmoKind, u32>,
    pub stimpaks: u32,
}

impl Player {
    /// Create a level-1 character with bare fists and no armor
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let starting_weapon = WeaponDb::default_weapon_name().to_string();
        Player {
            id: id.into(),
            name: name.into(),
            health: 30,
            max_health: 30,
            level: 1,
            experience: 0,
            skills: SkillSet::new(),
            equipped_weapon: starting_weapon.clone(),
            equipped_armor: "None".to_string(),
            weapons: vec![starting_weapon],
            ammo: HashMap::new(),
            stimpaks: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply damage, clamping at zero. Returns remaining health.
    pub fn take_damage(&mut self, amount: u32) -> i32 {
        self.health = (self.health - amount as i32).max(0);
        self.health
    }

    /// Restore health up to the maximum. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = (self.health + amount as i32).min(self.max_health);
        (self.health - before) as u32
    }

    /// Consume a stimpak. Returns the amount healed.
    pub fn use_stimpak(&mut self) -> Result<u32, CharacterError> {
        if self.stimpaks == 0 {
            return Err(CharacterError::NoStimpaks);
        }
        if self.health >= self.max_health {
            return Err(CharacterError::AlreadyAtFullHealth);
        }
        self.stimpaks -= 1;
        Ok(self.heal(STIMPAK_HEAL as u32))
    }

    // === Equipment ===

    /// Add a weapon to the inventory (duplicates are kept)
    pub fn add_weapon(&mut self, name: impl Into<String>) {
        self.weapons.push(name.into());
    }

    /// Equip a carried weapon
    pub fn equip_weapon(&mut self, name: &str) -> Result<(), CharacterError> {
        if !self.weapons.iter().any(|w| w == name) {
            return Err(CharacterError::WeaponNotOwned(name.to_string()));
        }
        self.equipped_weapon = name.to_string();
        Ok(())
    }

    /// Wear an armor known to the database
    pub fn equip_armor(&mut self, armors: &ArmorDb, name: &str) -> Result<(), ConfigError> {
        armors.require(name)?;
        self.equipped_armor = name.to_string();
        Ok(())
    }

    // === Ammunition ===

    pub fn ammo_count(&self, kind: AmmoKind) -> u32 {
        self.ammo.get(&kind).copied().unwrap_or(0)
    }

    pub fn add_ammo(&mut self, kind: AmmoKind, count: u32) {
        if !kind.is_consumable() {
            return;
        }
        *self.ammo.entry(kind).or_insert(0) += count;
    }

    /// Consume up to `shots` rounds. Returns how many were actually taken;
    /// non-consumable kinds always report the full request.
    pub fn take_ammo(&mut self, kind: AmmoKind, shots: u32) -> u32 {
        if !kind.is_consumable() {
            return shots;
        }
        let available = self.ammo.entry(kind).or_insert(0);
        let taken = shots.min(*available);
        *available -= taken;
        taken
    }
}
