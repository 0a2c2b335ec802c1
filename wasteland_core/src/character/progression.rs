//! Level progression - experience thresholds and level-up processing

use super::Player;
use crate::config::ProgressionConstants;
use serde::{Deserialize, Serialize};

/// Outcome of an experience award
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelUpReport {
    /// Experience added by this award
    pub gained: u32,
    /// Levels gained (0 when no threshold was crossed)
    pub levels_gained: u32,
    pub new_level: u32,
    /// Experience remaining toward the next level after carryover
    pub experience: u32,
}

/// Experience still needed to reach the next level
///
/// The threshold for leaving `level` is `level * experience_per_level`.
pub fn experience_to_next(level: u32, experience: u32, constants: &ProgressionConstants) -> u32 {
    let threshold = level * constants.experience_per_level;
    threshold.saturating_sub(experience)
}

/// Add experience to a player, applying as many level-ups as the total earns.
///
/// Surplus experience carries over into the next level; a large award can
/// cross several thresholds at once.
pub fn add_experience(
    player: &mut Player,
    amount: u32,
    constants: &ProgressionConstants,
) -> LevelUpReport {
    player.experience += amount;

    let mut levels_gained = 0;
    loop {
        let threshold = player.level * constants.experience_per_level;
        if player.experience < threshold {
            break;
        }
        player.experience -= threshold;
        player.level += 1;
        levels_gained += 1;
    }

    if levels_gained > 0 {
        log::info!(
            "{} reached level {} ({} level-ups)",
            player.name,
            player.level,
            levels_gained
        );
    }

    LevelUpReport {
        gained: amount,
        levels_gained,
        new_level: player.level,
        experience: player.experience,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constants() -> ProgressionConstants {
        ProgressionConstants::default()
    }

    #[test]
    fn test_no_level_up_below_threshold() {
        let mut player = Player::new("p1", "Vault Dweller");
        let report = add_experience(&mut player, 999, &constants());
        assert_eq!(report.levels_gained, 0);
        assert_eq!(player.level, 1);
        assert_eq!(player.experience, 999);
    }

    #[test]
    fn test_level_up_exactly_at_threshold() {
        let mut player = Player::new("p1", "Vault Dweller");
        let report = add_experience(&mut player, 1000, &constants());
        assert_eq!(report.levels_gained, 1);
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 0);
    }

    #[test]
    fn test_surplus_carries_over() {
        let mut player = Player::new("p1", "Vault Dweller");
        add_experience(&mut player, 1250, &constants());
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 250);
    }

    #[test]
    fn test_multi_level_award() {
        let mut player = Player::new("p1", "Vault Dweller");
        // 1000 to leave level 1, 2000 to leave level 2, 100 left over
        let report = add_experience(&mut player, 3100, &constants());
        assert_eq!(report.levels_gained, 2);
        assert_eq!(player.level, 3);
        assert_eq!(player.experience, 100);
    }

    #[test]
    fn test_experience_to_next() {
        let c = constants();
        assert_eq!(experience_to_next(1, 0, &c), 1000);
        assert_eq!(experience_to_next(1, 400, &c), 600);
        assert_eq!(experience_to_next(3, 2999, &c), 1);
        // Already past the threshold (transiently): nothing further needed
        assert_eq!(experience_to_next(2, 2500, &c), 0);
    }
}
