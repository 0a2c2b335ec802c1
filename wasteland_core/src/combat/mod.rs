//! Combat resolution - hit, damage, and experience calculators behind one engine

mod damage;
mod engine;
mod experience;
mod hit;
mod messages;
mod result;

pub use damage::{apply_mitigation, roll_damage, skill_bonus, DamageRoll};
pub use engine::{CombatEngine, CombatError};
pub use experience::calculate_experience;
pub use hit::{calculate_hit_chance, clamp_hit_chance, roll_hit};
pub use messages::{
    defeat_message, hit_message, level_up_message, miss_message,
};
pub use result::AttackOutcome;
