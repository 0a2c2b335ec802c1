//! Armor reference data - static lookup table

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Armor record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArmorInfo {
    pub name: String,
    /// Reduces incoming hit chance
    pub armor_class: i32,
    /// Flat damage subtracted before resistance
    pub damage_threshold: u32,
    /// Fractional damage reduction in [0, 1], applied after threshold
    pub damage_resistance: f64,
}

impl ArmorInfo {
    /// The unarmored baseline
    pub fn none() -> Self {
        ArmorInfo {
            name: "None".to_string(),
            armor_class: 0,
            damage_threshold: 0,
            damage_resistance: 0.0,
        }
    }
}

/// Immutable armor database keyed by armor name
#[derive(Debug, Clone)]
pub struct ArmorDb {
    armors: HashMap<String, ArmorInfo>,
}

#[derive(Debug, Deserialize)]
struct ArmorFile {
    #[serde(rename = "armor")]
    armors: Vec<ArmorInfo>,
}

impl ArmorDb {
    /// Build the database with the built-in armor table
    pub fn builtin() -> Self {
        let mut db = ArmorDb {
            armors: HashMap::new(),
        };
        for armor in default_armors() {
            db.insert(armor);
        }
        db
    }

    /// Parse additional armors from a TOML string, replacing same-name entries
    pub fn extend_from_toml(&mut self, content: &str) -> Result<(), super::ConfigError> {
        let file: ArmorFile = super::parse_toml(content)?;
        for armor in file.armors {
            self.insert(armor);
        }
        Ok(())
    }

    fn insert(&mut self, armor: ArmorInfo) {
        self.armors.insert(armor.name.clone(), armor);
    }

    /// Get an armor by name
    pub fn get(&self, name: &str) -> Option<&ArmorInfo> {
        self.armors.get(name)
    }

    /// Get an armor by name, or a typed error
    pub fn require(&self, name: &str) -> Result<&ArmorInfo, super::ConfigError> {
        self.armors
            .get(name)
            .ok_or_else(|| super::ConfigError::UnknownArmor(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.armors.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.armors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.armors.is_empty()
    }
}

fn default_armors() -> Vec<ArmorInfo> {
    vec![
        ArmorInfo::none(),
        ArmorInfo {
            name: "Leather Jacket".to_string(),
            armor_class: 8,
            damage_threshold: 0,
            damage_resistance: 0.20,
        },
        ArmorInfo {
            name: "Leather Armor".to_string(),
            armor_class: 15,
            damage_threshold: 2,
            damage_resistance: 0.25,
        },
        ArmorInfo {
            name: "Metal Armor".to_string(),
            armor_class: 10,
            damage_threshold: 4,
            damage_resistance: 0.30,
        },
        ArmorInfo {
            name: "Combat Armor".to_string(),
            armor_class: 20,
            damage_threshold: 5,
            damage_resistance: 0.40,
        },
        ArmorInfo {
            name: "Power Armor".to_string(),
            armor_class: 25,
            damage_threshold: 12,
            damage_resistance: 0.40,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let db = ArmorDb::builtin();
        assert!(db.len() >= 6);
        assert!(db.contains("None"));
        assert!(db.contains("Power Armor"));
    }

    #[test]
    fn test_resistance_is_fractional() {
        let db = ArmorDb::builtin();
        for name in ["Leather Jacket", "Metal Armor", "Power Armor"] {
            let armor = db.get(name).unwrap();
            assert!(armor.damage_resistance >= 0.0 && armor.damage_resistance <= 1.0);
        }
    }

    #[test]
    fn test_none_baseline() {
        let none = ArmorInfo::none();
        assert_eq!(none.armor_class, 0);
        assert_eq!(none.damage_threshold, 0);
        assert!((none.damage_resistance - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extend_from_toml() {
        let mut db = ArmorDb::builtin();
        let toml = r#"
[[armor]]
name = "Tesla Armor"
armor_class = 15
damage_threshold = 7
damage_resistance = 0.5
"#;
        db.extend_from_toml(toml).unwrap();
        assert!(db.contains("Tesla Armor"));
    }
}
