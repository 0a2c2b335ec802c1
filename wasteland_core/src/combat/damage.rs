//! Damage - roll, critical doubling, skill bonus, then threshold and resistance
//!
//! Formula:
//! `raw = roll(min..=max) * (2 if critical) + max(0, (skill - 50) / 10)`
//! `final = floor(max(0, raw - threshold) * (1 - resistance))`, minimum 1.

use crate::config::{CombatConstants, DamageRange};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Breakdown of a single damage roll
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DamageRoll {
    /// Damage before the defender's mitigation
    pub raw: u32,
    /// Amount removed by threshold and resistance
    pub mitigated: u32,
    /// Damage actually dealt
    pub amount: u32,
    pub is_critical: bool,
}

/// Flat bonus damage from skill training over the offset
pub fn skill_bonus(skill_score: u32, constants: &CombatConstants) -> u32 {
    skill_score.saturating_sub(constants.skill_bonus_offset) / constants.skill_bonus_divisor
}

/// Reduce raw damage by flat threshold, then fractional resistance.
///
/// Never returns less than `minimum_damage`: a landed hit always hurts.
pub fn apply_mitigation(raw: u32, threshold: u32, resistance: f64, constants: &CombatConstants) -> u32 {
    let after_threshold = raw.saturating_sub(threshold);
    let after_resistance = (after_threshold as f64 * (1.0 - resistance.clamp(0.0, 1.0))).floor();
    (after_resistance as u32).max(constants.minimum_damage)
}

/// Roll one shot's damage against a defender's threshold and resistance
///
/// The critical draw happens here: a critical doubles the base roll before
/// the skill bonus is added.
pub fn roll_damage(
    damage: DamageRange,
    critical_chance: f64,
    skill_score: u32,
    threshold: u32,
    resistance: f64,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> DamageRoll {
    let rolled = if damage.min >= damage.max {
        damage.max
    } else {
        rng.gen_range(damage.min..=damage.max)
    };

    let is_critical = critical_chance > 0.0 && rng.gen_range(0.0..100.0) < critical_chance;
    let multiplier = if is_critical {
        constants.critical_multiplier
    } else {
        1.0
    };

    let raw = (rolled as f64 * multiplier) as u32 + skill_bonus(skill_score, constants);
    let amount = apply_mitigation(raw, threshold, resistance, constants);

    DamageRoll {
        raw,
        mitigated: raw.saturating_sub(amount),
        amount,
        is_critical,
    }
}
