use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Tunables for generation, search and hierarchy checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub default_speed: u8,
    pub default_intensity: u8,
    pub default_brightness: u8,
    pub max_palette_results: usize,
    pub max_folder_results: usize,
    pub max_pattern_results: usize,
    /// Longest parent chain accepted before the walk is treated as corrupt
    pub max_hierarchy_depth: usize,
    pub default_universal_appeal: f64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_speed: 128,
            default_intensity: 128,
            default_brightness: 255,
            max_palette_results: 10,
            max_folder_results: 5,
            max_pattern_results: 10,
            max_hierarchy_depth: 32,
            default_universal_appeal: 0.5,
        }
    }
}

impl EngineSettings {
    /// Read settings from a flat string map, the shape they take in the
    /// host's settings table. Missing or unparsable values keep their default.
    pub fn from_map(map: &HashMap<String, String>) -> Self {
        let defaults = Self::default();
        let depth = map
            .get("max_hierarchy_depth")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(defaults.max_hierarchy_depth);

        Self {
            default_speed: map
                .get("default_speed")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_speed),
            default_intensity: map
                .get("default_intensity")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_intensity),
            default_brightness: map
                .get("default_brightness")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_brightness),
            max_palette_results: map
                .get("max_palette_results")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_palette_results),
            max_folder_results: map
                .get("max_folder_results")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_folder_results),
            max_pattern_results: map
                .get("max_pattern_results")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_pattern_results),
            max_hierarchy_depth: depth,
            default_universal_appeal: map
                .get("default_universal_appeal")
                .and_then(|v| v.parse::<f64>().ok())
                .map(|v| v.clamp(0.0, 1.0))
                .unwrap_or(defaults.default_universal_appeal),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: Self =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse settings: {}", e))?;
        if settings.max_hierarchy_depth == 0 {
            return Err("max_hierarchy_depth must be at least 1".to_string());
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_values_override_defaults() {
        let mut map = HashMap::new();
        map.insert("default_speed".to_string(), "200".to_string());
        map.insert("max_palette_results".to_string(), "3".to_string());
        map.insert("default_intensity".to_string(), "not a number".to_string());
        map.insert("default_universal_appeal".to_string(), "4.0".to_string());

        let settings = EngineSettings::from_map(&map);
        assert_eq!(settings.default_speed, 200);
        assert_eq!(settings.max_palette_results, 3);
        assert_eq!(settings.default_intensity, 128);
        assert_eq!(settings.default_universal_appeal, 1.0);
    }

    #[test]
    fn zero_depth_falls_back() {
        let mut map = HashMap::new();
        map.insert("max_hierarchy_depth".to_string(), "0".to_string());
        assert_eq!(EngineSettings::from_map(&map).max_hierarchy_depth, 32);
        assert!(EngineSettings::from_json(r#"{"max_hierarchy_depth": 0}"#).is_err());
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let settings = EngineSettings::from_json(r#"{"max_folder_results": 2}"#).unwrap();
        assert_eq!(settings.max_folder_results, 2);
        assert_eq!(settings.default_brightness, 255);
    }
}
