//! Config file upgrades: fill in keys added after the file was first
//! written, without touching the values the user already set.

use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::io;
use std::path::Path;

const REQUIRED_KEYS: [(&str, &str); 4] = [
    ("database", ""),
    ("default_sport", "foot"),
    ("default_radius_km", "10.0"),
    ("separator_char", "-"),
];

/// Report the required keys missing from the config file.
pub fn missing_fields(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| io::Error::other(format!("Failed to parse {:?}: {}", path, e)))?;

    let mut missing = Vec::new();
    if let Some(map) = yaml.as_mapping() {
        for (key, _) in REQUIRED_KEYS {
            if !map.contains_key(&Value::String(key.to_string())) {
                missing.push(key.to_string());
            }
        }
    }

    Ok(missing)
}

/// Add missing keys with their defaults. Returns true when the file
/// was modified.
pub fn migrate_config_file(path: &Path) -> io::Result<bool> {
    let content = fs::read_to_string(path)?;

    let mut yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| io::Error::other(format!("Failed to parse {:?}: {}", path, e)))?;

    let Some(map) = yaml.as_mapping_mut() else {
        return Err(io::Error::other("Config file is not a YAML mapping"));
    };

    let mut changed = false;
    for (key, default) in REQUIRED_KEYS {
        let k = Value::String(key.to_string());
        if !map.contains_key(&k) {
            info(format!("Adding missing config key '{}'", key));
            let v = match key {
                "default_radius_km" => Value::Number(
                    serde_yaml::Number::from(default.parse::<f64>().unwrap_or(10.0)),
                ),
                _ => Value::String(default.to_string()),
            };
            map.insert(k, v);
            changed = true;
        }
    }

    if changed {
        let serialized = serde_yaml::to_string(&yaml)
            .map_err(|e| io::Error::other(format!("Failed to serialize {:?}: {}", path, e)))?;
        fs::write(path, serialized)?;
        success("Configuration file migrated.");
    }

    Ok(changed)
}
