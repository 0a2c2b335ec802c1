//! Hit chance - skill and weapon accuracy against armor class
//!
//! Formula:
//! `chance = skill + crit_chance/2 - max(0, armor_class - grace) * penalty`
//! clamped to `[min_hit_chance, max_hit_chance]`.

use crate::config::CombatConstants;
use rand::Rng;

/// Calculate the chance (in percent) for an attack to land
///
/// # Arguments
/// * `skill_score` - The attacker's score in the weapon's governing skill
/// * `weapon_critical_chance` - The weapon's critical chance in percent;
///   half of it doubles as the weapon's accuracy bonus
/// * `armor_class` - The defender's armor class
pub fn calculate_hit_chance(
    skill_score: u32,
    weapon_critical_chance: f64,
    armor_class: i32,
    constants: &CombatConstants,
) -> f64 {
    let accuracy_bonus = weapon_critical_chance / 2.0;
    let ac_over_grace = (armor_class - constants.armor_class_grace).max(0) as f64;
    let ac_penalty = ac_over_grace * constants.armor_class_penalty;

    let chance = skill_score as f64 + accuracy_bonus - ac_penalty;
    clamp_hit_chance(chance, constants)
}

/// Clamp a raw chance into the playable band
pub fn clamp_hit_chance(chance: f64, constants: &CombatConstants) -> f64 {
    chance.clamp(constants.min_hit_chance, constants.max_hit_chance)
}

/// Decide an attack with a uniform draw in [0, 100)
pub fn roll_hit(chance: f64, rng: &mut impl Rng) -> bool {
    rng.gen_range(0.0..100.0) < chance
}
