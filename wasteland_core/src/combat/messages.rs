//! Combat log lines assembled from attack outcomes

/// Line for a landed attack
pub fn hit_message(attacker: &str, target: &str, damage: u32, critical: bool) -> String {
    if critical {
        format!("{} critically hits {} for {} damage!", attacker, target, damage)
    } else {
        format!("{} hits {} for {} damage.", attacker, target, damage)
    }
}

/// Line for a miss
pub fn miss_message(attacker: &str, target: &str) -> String {
    format!("{} misses {}.", attacker, target)
}

/// Line for a kill, with the experience earned
pub fn defeat_message(target: &str, experience: u32) -> String {
    format!("{} is defeated! +{} XP", target, experience)
}

/// Line for a level-up
pub fn level_up_message(name: &str, level: u32) -> String {
    format!("{} reaches level {}!", name, level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_variants() {
        let plain = hit_message("Vault Dweller", "Raider", 12, false);
        assert!(plain.contains("hits"));
        assert!(plain.contains("12"));

        let crit = hit_message("Vault Dweller", "Raider", 24, true);
        assert!(crit.contains("critically"));
    }

    #[test]
    fn test_defeat_includes_experience() {
        let line = defeat_message("Raider", 85);
        assert!(line.contains("+85 XP"));
    }
}
