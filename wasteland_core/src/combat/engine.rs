//! CombatEngine - orchestrates weapon lookup, gating, rolls, and rewards

use super::damage::roll_damage;
use super::experience::calculate_experience;
use super::hit::{calculate_hit_chance, clamp_hit_chance, roll_hit};
use super::messages::{defeat_message, hit_message, level_up_message, miss_message};
use super::result::AttackOutcome;
use crate::character::{add_experience, Enemy, Player};
use crate::config::{ArmorDb, ConfigError, GameConstants, WeaponDb};
use rand::Rng;
use std::collections::HashMap;
use thiserror::Error;

/// Errors an attack can be rejected with before any dice are rolled
#[derive(Error, Debug)]
pub enum CombatError {
    #[error("Weapon on cooldown for another {remaining_ms}ms")]
    OnCooldown { remaining_ms: u64 },
    #[error("Out of ammo for {weapon}")]
    OutOfAmmo { weapon: String },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Combat façade owning the reference databases and per-player cooldowns
///
/// All timing is caller-supplied (`now_ms`); the engine holds no clock and
/// is fully deterministic under the `_with_rng` entry points.
pub struct CombatEngine {
    weapons: WeaponDb,
    armors: ArmorDb,
    constants: GameConstants,
    /// Player id -> timestamp of the last attack, in caller milliseconds
    last_attack_ms: HashMap<String, u64>,
}

impl CombatEngine {
    pub fn new(weapons: WeaponDb, armors: ArmorDb, constants: GameConstants) -> Self {
        CombatEngine {
            weapons,
            armors,
            constants,
            last_attack_ms: HashMap::new(),
        }
    }

    /// Engine with the built-in reference tables and default constants
    pub fn with_builtin_tables() -> Self {
        Self::new(WeaponDb::builtin(), ArmorDb::builtin(), GameConstants::default())
    }

    pub fn weapons(&self) -> &WeaponDb {
        &self.weapons
    }

    pub fn armors(&self) -> &ArmorDb {
        &self.armors
    }

    pub fn constants(&self) -> &GameConstants {
        &self.constants
    }

    /// Milliseconds until the player's equipped weapon is ready again
    pub fn cooldown_remaining(&self, player: &Player, now_ms: u64) -> Result<u64, ConfigError> {
        let weapon = self.weapons.require(&player.equipped_weapon)?;
        let ready_at = self
            .last_attack_ms
            .get(&player.id)
            .map(|last| last + weapon.cooldown_ms)
            .unwrap_or(0);
        Ok(ready_at.saturating_sub(now_ms))
    }

    /// Resolve a player's attack on an enemy
    pub fn player_attack(
        &mut self,
        player: &mut Player,
        enemy: &mut Enemy,
        now_ms: u64,
    ) -> Result<AttackOutcome, CombatError> {
        let mut rng = rand::thread_rng();
        self.player_attack_with_rng(player, enemy, now_ms, &mut rng)
    }

    /// Resolve a player's attack with a provided RNG (for deterministic testing)
    pub fn player_attack_with_rng(
        &mut self,
        player: &mut Player,
        enemy: &mut Enemy,
        now_ms: u64,
        rng: &mut impl Rng,
    ) -> Result<AttackOutcome, CombatError> {
        let weapon = self.weapons.require(&player.equipped_weapon)?.clone();

        // Cooldown gate
        if let Some(&last) = self.last_attack_ms.get(&player.id) {
            let ready_at = last + weapon.cooldown_ms;
            if now_ms < ready_at {
                return Err(CombatError::OnCooldown {
                    remaining_ms: ready_at - now_ms,
                });
            }
        }

        // Ammo gate: fire what the pouch allows
        let shots_fired = player.take_ammo(weapon.ammo, weapon.shots_per_attack);
        if weapon.uses_ammo() && shots_fired == 0 {
            return Err(CombatError::OutOfAmmo {
                weapon: weapon.name.clone(),
            });
        }
        self.last_attack_ms.insert(player.id.clone(), now_ms);

        let combat = &self.constants.combat;
        let skill_score = player.skills.score(weapon.skill);
        let chance = calculate_hit_chance(
            skill_score,
            weapon.critical_chance,
            enemy.defence.armor_class,
            combat,
        );

        if !roll_hit(chance, rng) {
            log::debug!("{} misses {} (chance {:.0}%)", player.name, enemy.name, chance);
            let mut outcome = AttackOutcome::miss(&player.name, &enemy.name, enemy.health);
            outcome.shots_fired = shots_fired;
            outcome.message = miss_message(&player.name, &enemy.name);
            return Ok(outcome);
        }

        // One damage roll per shot that actually left the barrel
        let mut total_damage = 0;
        let mut any_critical = false;
        for _ in 0..shots_fired {
            let roll = roll_damage(
                weapon.damage,
                weapon.critical_chance,
                skill_score,
                enemy.defence.damage_threshold,
                enemy.defence.damage_resistance,
                combat,
                rng,
            );
            total_damage += roll.amount;
            any_critical |= roll.is_critical;
        }

        let remaining_health = enemy.take_damage(total_damage);
        let mut message = hit_message(&player.name, &enemy.name, total_damage, any_critical);

        let mut experience_awarded = None;
        let mut level_up = None;
        let target_defeated = !enemy.is_alive();
        if target_defeated {
            let reward = calculate_experience(
                enemy.base_experience,
                player.level,
                enemy.level,
                &self.constants.progression,
            );
            let report = add_experience(player, reward, &self.constants.progression);
            message.push(' ');
            message.push_str(&defeat_message(&enemy.name, reward));
            if report.levels_gained > 0 {
                message.push(' ');
                message.push_str(&level_up_message(&player.name, report.new_level));
            }
            experience_awarded = Some(reward);
            level_up = Some(report);
        }

        Ok(AttackOutcome {
            attacker: player.name.clone(),
            target: enemy.name.clone(),
            is_hit: true,
            damage: total_damage,
            is_critical: any_critical,
            shots_fired,
            remaining_health,
            target_defeated,
            experience_awarded,
            level_up,
            message,
        })
    }

    /// Resolve an enemy's attack on the player
    pub fn enemy_attack(
        &self,
        enemy: &Enemy,
        player: &mut Player,
    ) -> Result<AttackOutcome, CombatError> {
        let mut rng = rand::thread_rng();
        self.enemy_attack_with_rng(enemy, player, &mut rng)
    }

    /// Resolve an enemy's attack with a provided RNG (for deterministic testing)
    ///
    /// Enemies use their own flat hit chance, reduced by the player's armor
    /// class past the grace value, and never land criticals.
    pub fn enemy_attack_with_rng(
        &self,
        enemy: &Enemy,
        player: &mut Player,
        rng: &mut impl Rng,
    ) -> Result<AttackOutcome, CombatError> {
        let armor = self.armors.require(&player.equipped_armor)?.clone();
        let combat = &self.constants.combat;

        let ac_over_grace = (armor.armor_class - combat.armor_class_grace).max(0) as f64;
        let chance = clamp_hit_chance(
            enemy.attack.hit_chance - ac_over_grace * combat.armor_class_penalty,
            combat,
        );

        if !roll_hit(chance, rng) {
            let mut outcome = AttackOutcome::miss(&enemy.name, &player.name, player.health);
            outcome.message = miss_message(&enemy.name, &player.name);
            return Ok(outcome);
        }

        let mut total_damage = 0;
        for _ in 0..enemy.attack.shots {
            let roll = roll_damage(
                enemy.attack.damage,
                0.0,
                0,
                armor.damage_threshold,
                armor.damage_resistance,
                combat,
                rng,
            );
            total_damage += roll.amount;
        }

        let remaining_health = player.take_damage(total_damage);
        let target_defeated = !player.is_alive();
        let message = hit_message(&enemy.name, &player.name, total_damage, false);

        Ok(AttackOutcome {
            attacker: enemy.name.clone(),
            target: player.name.clone(),
            is_hit: true,
            damage: total_damage,
            is_critical: false,
            shots_fired: enemy.attack.shots,
            remaining_health,
            target_defeated,
            experience_awarded: None,
            level_up: None,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Defence, EnemyAttack};
    use crate::config::DamageRange;
    use crate::types::{AmmoKind, EnemyKind, SkillKind};
    use rand::SeedableRng;

    fn make_test_rng() -> rand::rngs::StdRng {
        rand::rngs::StdRng::seed_from_u64(42)
    }

    fn make_player() -> Player {
        let mut player = Player::new("p1", "Vault Dweller");
        player.skills.set(SkillKind::SmallGuns, 80);
        player.add_weapon("9mm Pistol");
        player.equip_weapon("9mm Pistol").unwrap();
        player.add_ammo(AmmoKind::Mm9, 24);
        player
    }

    fn make_raider(health: i32) -> Enemy {
        Enemy {
            id: "raider_1".to_string(),
            name: "Raider".to_string(),
            kind: EnemyKind::Raider,
            level: 1,
            health,
            defence: Defence {
                armor_class: 6,
                damage_threshold: 1,
                damage_resistance: 0.1,
            },
            attack: EnemyAttack {
                hit_chance: 55.0,
                weapon_name: "Pipe Pistol".to_string(),
                damage: DamageRange::new(2, 6),
                shots: 1,
            },
            base_experience: 50,
        }
    }

    #[test]
    fn test_attack_consumes_ammo_and_sets_cooldown() {
        let mut engine = CombatEngine::with_builtin_tables();
        let mut player = make_player();
        let mut enemy = make_raider(100);
        let mut rng = make_test_rng();

        engine
            .player_attack_with_rng(&mut player, &mut enemy, 1000, &mut rng)
            .unwrap();
        assert_eq!(player.ammo_count(AmmoKind::Mm9), 23);

        // Immediately attacking again trips the cooldown gate
        let err = engine
            .player_attack_with_rng(&mut player, &mut enemy, 1100, &mut rng)
            .unwrap_err();
        assert!(matches!(err, CombatError::OnCooldown { .. }));
        // Ammo is not spent on a rejected attack
        assert_eq!(player.ammo_count(AmmoKind::Mm9), 23);
    }

    #[test]
    fn test_cooldown_expires() {
        let mut engine = CombatEngine::with_builtin_tables();
        let mut player = make_player();
        let mut enemy = make_raider(1000);
        let mut rng = make_test_rng();

        engine
            .player_attack_with_rng(&mut player, &mut enemy, 1000, &mut rng)
            .unwrap();
        // 9mm Pistol cooldown is 1000ms
        assert!(engine
            .player_attack_with_rng(&mut player, &mut enemy, 2000, &mut rng)
            .is_ok());
    }

    #[test]
    fn test_out_of_ammo() {
        let mut engine = CombatEngine::with_builtin_tables();
        let mut player = make_player();
        player.take_ammo(AmmoKind::Mm9, 24);
        let mut enemy = make_raider(100);
        let mut rng = make_test_rng();

        let err = engine
            .player_attack_with_rng(&mut player, &mut enemy, 1000, &mut rng)
            .unwrap_err();
        assert!(matches!(err, CombatError::OutOfAmmo { .. }));
    }

    #[test]
    fn test_melee_never_runs_dry() {
        let mut engine = CombatEngine::with_builtin_tables();
        let mut player = make_player();
        player.equip_weapon("Fists").unwrap();
        let mut enemy = make_raider(100);
        let mut rng = make_test_rng();

        for i in 0..10 {
            let result =
                engine.player_attack_with_rng(&mut player, &mut enemy, i * 10_000, &mut rng);
            assert!(result.is_ok());
        }
    }

    #[test]
    fn test_kill_awards_experience() {
        let mut engine = CombatEngine::with_builtin_tables();
        let mut player = make_player();
        let mut enemy = make_raider(1);
        let mut rng = make_test_rng();

        // Keep swinging until the hit lands
        let mut now = 0;
        loop {
            now += 10_000;
            let outcome = engine
                .player_attack_with_rng(&mut player, &mut enemy, now, &mut rng)
                .unwrap();
            if outcome.is_hit {
                assert!(outcome.target_defeated);
                assert_eq!(outcome.experience_awarded, Some(50));
                assert!(outcome.message.contains("+50 XP"));
                break;
            }
        }
        assert_eq!(player.experience, 50);
    }

    #[test]
    fn test_enemy_attack_mitigated_by_armor() {
        let engine = CombatEngine::with_builtin_tables();
        let armors = ArmorDb::builtin();
        let enemy = make_raider(100);
        let mut rng = make_test_rng();

        // Deal many attacks against heavy armor; every landed hit must still
        // deal at least 1 and no hit can exceed the unmitigated maximum
        let mut player = make_player();
        player.equip_armor(&armors, "Power Armor").unwrap();
        for _ in 0..100 {
            player.health = player.max_health;
            let outcome = engine
                .enemy_attack_with_rng(&enemy, &mut player, &mut rng)
                .unwrap();
            if outcome.is_hit {
                assert!(outcome.damage >= 1);
                assert!(outcome.damage <= 6);
                assert!(!outcome.is_critical);
            }
        }
    }

    #[test]
    fn test_unknown_equipped_weapon_is_config_error() {
        let mut engine = CombatEngine::with_builtin_tables();
        let mut player = make_player();
        player.weapons.push("Alien Blaster".to_string());
        player.equip_weapon("Alien Blaster").unwrap();
        let mut enemy = make_raider(10);
        let mut rng = make_test_rng();

        let err = engine
            .player_attack_with_rng(&mut player, &mut enemy, 0, &mut rng)
            .unwrap_err();
        assert!(matches!(err, CombatError::Config(_)));
    }
}
