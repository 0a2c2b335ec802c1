//! Example Game - a scripted wasteland encounter demonstrating wasteland_core
//!
//! The demo shows:
//! - Loading a level's assets through the pipeline (with progress output)
//! - Turn-based combat against a pack of enemies
//! - Stimpak use, ammo depletion, and level progression
//! - Saving the survivor to disk and reading the slot listing back

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use wasteland_core::assets::{
    AssetFetcher, AssetKind, AssetPipeline, AssetRequest, FetchFailure, FetchedAsset, LoadOptions,
};
use wasteland_core::character::{Defence, Enemy, EnemyAttack, Player};
use wasteland_core::combat::{CombatEngine, CombatError};
use wasteland_core::config::{DamageRange, GameConstants};
use wasteland_core::save::{FileSaveStore, SaveManager};
use wasteland_core::types::{AmmoKind, EnemyKind, SkillKind};

/// Stand-in for the host engine's asset backend: everything "loads",
/// except a texture that only exists at its fallback path
struct DemoFetcher {
    fetches: AtomicUsize,
}

impl AssetFetcher for DemoFetcher {
    fn fetch(&self, request: &AssetRequest) -> Result<FetchedAsset, FetchFailure> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if request.url == "img/mutant.png" {
            return Err(FetchFailure::NotFound {
                url: request.url.clone(),
            });
        }
        Ok(FetchedAsset {
            key: request.key.clone(),
            byte_len: 2048,
        })
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn make_enemies() -> Vec<Enemy> {
    vec![
        Enemy {
            id: "radroach_1".to_string(),
            name: "Radroach".to_string(),
            kind: EnemyKind::Critter,
            level: 1,
            health: 10,
            defence: Defence::none(),
            attack: EnemyAttack {
                hit_chance: 40.0,
                weapon_name: "Mandibles".to_string(),
                damage: DamageRange::new(1, 3),
                shots: 1,
            },
            base_experience: 25,
        },
        Enemy {
            id: "raider_1".to_string(),
            name: "Raider Scum".to_string(),
            kind: EnemyKind::Raider,
            level: 2,
            health: 30,
            defence: Defence {
                armor_class: 8,
                damage_threshold: 1,
                damage_resistance: 0.15,
            },
            attack: EnemyAttack {
                hit_chance: 55.0,
                weapon_name: "Pipe Pistol".to_string(),
                damage: DamageRange::new(3, 7),
                shots: 1,
            },
            base_experience: 400,
        },
        Enemy {
            id: "mutant_1".to_string(),
            name: "Super Mutant".to_string(),
            kind: EnemyKind::Mutant,
            level: 4,
            health: 60,
            defence: Defence {
                armor_class: 12,
                damage_threshold: 4,
                damage_resistance: 0.25,
            },
            attack: EnemyAttack {
                hit_chance: 60.0,
                weapon_name: "Board with Nail".to_string(),
                damage: DamageRange::new(5, 12),
                shots: 1,
            },
            base_experience: 900,
        },
    ]
}

fn load_level_assets() {
    println!("== Loading assets ==");

    let mut constants = GameConstants::default().loader;
    constants.retry_delay_ms = 50;
    let pipeline = AssetPipeline::new(
        DemoFetcher {
            fetches: AtomicUsize::new(0),
        },
        constants,
    );

    let requests = vec![
        AssetRequest::new("wasteland_theme", "audio/wasteland_theme.ogg", AssetKind::Audio),
        AssetRequest::new("level_manifest", "data/level_manifest.json", AssetKind::Manifest),
        AssetRequest::new("terrain_atlas", "img/terrain_atlas.json", AssetKind::Atlas),
        AssetRequest::new("mutant_sprite", "img/mutant.png", AssetKind::Image)
            .with_fallback("img/placeholder.png"),
        AssetRequest::new("pipboy_font", "fonts/pipboy.ttf", AssetKind::Font),
    ];

    let report = pipeline.load_with_progress(requests, None, &LoadOptions::default(), |update| {
        println!(
            "  [{:>5.1}%] {:?}: {}",
            update.percent, update.event, update.key
        );
    });

    for asset in &report.loaded {
        if asset.from_fallback {
            println!("  note: '{}' came from fallback {}", asset.key, asset.url);
        }
    }
    for failure in &report.failed {
        println!("  failed: '{}': {}", failure.key, failure.error);
    }
    println!();
}

fn main() {
    env_logger::init();

    // Fixed seed so runs are reproducible; change it for a different fight
    let mut rng = ChaCha8Rng::seed_from_u64(0xFA110);

    load_level_assets();

    let mut engine = CombatEngine::with_builtin_tables();

    let mut player = Player::new("player_1", "Vault Dweller");
    player.max_health = 50;
    player.health = 50;
    player.skills.set(SkillKind::SmallGuns, 85);
    player.skills.set(SkillKind::BigGuns, 40);
    player.add_weapon("9mm Pistol");
    player.add_weapon("Combat Shotgun");
    player.equip_weapon("9mm Pistol").unwrap();
    player.add_ammo(AmmoKind::Mm9, 48);
    player.add_ammo(AmmoKind::ShotgunShell, 16);
    player.stimpaks = 4;
    player
        .equip_armor(engine.armors(), "Leather Armor")
        .unwrap();

    println!("== {} enters the ruins ==", player.name);

    let mut clock = now_ms();
    for mut enemy in make_enemies() {
        println!("\n-- A wild {} (Lv {}) appears! --", enemy.name, enemy.level);

        // Bring the shotgun out for the big one
        if enemy.kind == EnemyKind::Mutant {
            player.equip_weapon("Combat Shotgun").unwrap();
            println!("{} readies the Combat Shotgun.", player.name);
        }

        while enemy.is_alive() && player.is_alive() {
            clock += 2_000;
            match engine.player_attack_with_rng(&mut player, &mut enemy, clock, &mut rng) {
                Ok(outcome) => println!("{}", outcome.message),
                Err(CombatError::OutOfAmmo { weapon }) => {
                    println!("*click* The {} is empty! Falling back to fists.", weapon);
                    player.equip_weapon("Fists").unwrap();
                    continue;
                }
                Err(CombatError::OnCooldown { remaining_ms }) => {
                    clock += remaining_ms;
                    continue;
                }
                Err(error) => {
                    eprintln!("combat error: {}", error);
                    return;
                }
            }
            if !enemy.is_alive() {
                break;
            }

            let reply = engine
                .enemy_attack_with_rng(&enemy, &mut player, &mut rng)
                .expect("enemy attack should resolve");
            println!("{}", reply.message);

            if player.health < 15 {
                match player.use_stimpak() {
                    Ok(healed) => println!(
                        "{} jams in a stimpak (+{} HP, {} left)",
                        player.name, healed, player.stimpaks
                    ),
                    Err(error) => println!("No help coming: {}", error),
                }
            }
        }

        if !player.is_alive() {
            println!("\n{} has died in the wasteland. War never changes.", player.name);
            return;
        }
    }

    println!(
        "\n== The ruins are quiet. {} stands at level {} with {} XP banked ==",
        player.name, player.level, player.experience
    );

    let store = FileSaveStore::open("saves").expect("saves directory should be writable");
    let mut saves = SaveManager::new(store);
    saves
        .save(1, &player, now_ms())
        .expect("save should serialize");

    for slot in saves.list().expect("slot listing should be readable") {
        println!(
            "slot {}: {} (Lv {})",
            slot.slot, slot.player_name, slot.player_level
        );
    }
}
