use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Deserialize, Serialize, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchScheme {
    Exact,
    Patterns,
    Categories,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchOptions {
    #[serde(default = "default_match_scheme")]
    pub scheme: MatchScheme,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            scheme: default_match_scheme(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FeedbackOptions {
    /// Seed for the example picker used in missing-class feedback.
    /// None => a fresh OS-entropy draw per validation.
    #[serde(default)]
    pub example_seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameOptions {
    /// Points per level; the session levels up every `level_step` points.
    #[serde(default = "default_level_step")]
    pub level_step: u32,

    #[serde(default = "default_points_per_match")]
    pub points_per_match: u32,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            level_step: default_level_step(),
            points_per_match: default_points_per_match(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub matching: MatchOptions,

    #[serde(default)]
    pub feedback: FeedbackOptions,

    #[serde(default)]
    pub game: GameOptions,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl ValidationConfig {
    pub fn default_config() -> Self {
        ValidationConfig {
            matching: MatchOptions::default(),
            feedback: FeedbackOptions::default(),
            game: GameOptions::default(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, String> {
        let file_contents = fs::read_to_string(path)
            .map_err(|_| format!("Failed to read config file at {path:?}"))?;

        serde_json::from_str(&file_contents).map_err(|_| "Invalid config JSON format".to_string())
    }

    /// Loads the config named by the `MATCHER_CONFIG` env var.
    /// Unset, unreadable or malformed => defaults, so callers always get a
    /// usable config.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        match env::var("MATCHER_CONFIG") {
            Ok(path) => match Self::from_file(Path::new(&path)) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!("{}; falling back to default validation config", e);
                    Self::default_config()
                }
            },
            Err(_) => Self::default_config(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        // Ensure directory exists
        if let Some(dir) = path.parent() {
            if let Err(e) = fs::create_dir_all(dir) {
                return Err(format!("Failed to create config directory: {e:?}"));
            }
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config to JSON: {e}"))?;

        fs::write(path, json).map_err(|e| format!("Failed to write config file to disk: {e:?}"))?;

        Ok(())
    }
}

//Default Functions

fn default_match_scheme() -> MatchScheme {
    MatchScheme::Exact
}

fn default_level_step() -> u32 {
    100
}

fn default_points_per_match() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_values() {
        let cfg = ValidationConfig::default_config();
        assert_eq!(cfg.matching.scheme, MatchScheme::Exact);
        assert_eq!(cfg.feedback.example_seed, None);
        assert_eq!(cfg.game.level_step, 100);
        assert_eq!(cfg.game.points_per_match, 10);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{ "matching": { "scheme": "patterns" } }"#;
        let cfg: ValidationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.matching.scheme, MatchScheme::Patterns);
        assert_eq!(cfg.feedback.example_seed, None);
        assert_eq!(cfg.game.level_step, 100);
    }

    #[test]
    fn test_scheme_names_are_lowercase() {
        let json = serde_json::to_string(&MatchScheme::Categories).unwrap();
        assert_eq!(json, r#""categories""#);
        let parsed: MatchScheme = serde_json::from_str(r#""exact""#).unwrap();
        assert_eq!(parsed, MatchScheme::Exact);
    }

    #[test]
    fn test_save_and_from_file_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.json");

        let mut cfg = ValidationConfig::default_config();
        cfg.matching.scheme = MatchScheme::Categories;
        cfg.feedback.example_seed = Some(42);
        cfg.game.level_step = 250;

        cfg.save(&path).expect("Saving config should succeed");

        let loaded = ValidationConfig::from_file(&path).expect("Loading config should succeed");
        assert_eq!(loaded.matching.scheme, MatchScheme::Categories);
        assert_eq!(loaded.feedback.example_seed, Some(42));
        assert_eq!(loaded.game.level_step, 250);
        assert_eq!(loaded.game.points_per_match, 10);
    }

    #[test]
    fn test_from_file_missing_and_malformed() {
        let tmp = TempDir::new().unwrap();

        let missing = tmp.path().join("nope.json");
        assert!(ValidationConfig::from_file(&missing).is_err());

        let bad = tmp.path().join("bad.json");
        std::fs::write(&bad, "{ not json").unwrap();
        let err = ValidationConfig::from_file(&bad).unwrap_err();
        assert_eq!(err, "Invalid config JSON format");
    }

    #[test]
    #[serial]
    fn test_from_env_reads_configured_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        let mut cfg = ValidationConfig::default_config();
        cfg.matching.scheme = MatchScheme::Patterns;
        cfg.save(&path).unwrap();

        unsafe {
            std::env::set_var("MATCHER_CONFIG", &path);
        }
        let loaded = ValidationConfig::from_env();
        unsafe {
            std::env::remove_var("MATCHER_CONFIG");
        }

        assert_eq!(loaded.matching.scheme, MatchScheme::Patterns);
    }

    #[test]
    #[serial]
    fn test_from_env_falls_back_to_defaults() {
        unsafe {
            std::env::remove_var("MATCHER_CONFIG");
        }
        let cfg = ValidationConfig::from_env();
        assert_eq!(cfg.matching.scheme, MatchScheme::Exact);

        unsafe {
            std::env::set_var("MATCHER_CONFIG", "/definitely/not/here.json");
        }
        let cfg = ValidationConfig::from_env();
        unsafe {
            std::env::remove_var("MATCHER_CONFIG");
        }
        assert_eq!(cfg.matching.scheme, MatchScheme::Exact);
    }
}
