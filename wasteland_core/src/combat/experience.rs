//! Experience rewards - base XP scaled down as the player outlevels the enemy

use crate::config::ProgressionConstants;

/// Calculate the experience a kill is worth
///
/// `reward = floor(base_xp * max(0, 1 - falloff * (player_level - enemy_level)))`
/// with a floor of `minimum_experience`. An enemy above the player's level
/// produces a factor greater than 1, i.e. a bonus.
pub fn calculate_experience(
    base_experience: u32,
    player_level: u32,
    enemy_level: u32,
    constants: &ProgressionConstants,
) -> u32 {
    let level_difference = player_level as i64 - enemy_level as i64;
    let factor = (1.0 - constants.level_difference_falloff * level_difference as f64).max(0.0);
    let reward = (base_experience as f64 * factor).floor() as u32;
    reward.max(constants.minimum_experience)
}
