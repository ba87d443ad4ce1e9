use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{
    fmt, fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::error;

/// Semantic bucket for a utility class token.
///
/// Declaration order is the categorizer's rule priority, and `Ord` follows
/// it, so requirement maps keyed by category iterate in priority order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Background,
    Padding,
    Margin,
    Width,
    Height,
    Display,
    Flex,
    Grid,
    Typography,
    Border,
    Shadow,
    Position,
    Overflow,
    Animation,
    Misc,
}

impl Category {
    /// Lowercase name used in feedback lines and JSON keys.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Background => "background",
            Category::Padding => "padding",
            Category::Margin => "margin",
            Category::Width => "width",
            Category::Height => "height",
            Category::Display => "display",
            Category::Flex => "flex",
            Category::Grid => "grid",
            Category::Typography => "typography",
            Category::Border => "border",
            Category::Shadow => "shadow",
            Category::Position => "position",
            Category::Overflow => "overflow",
            Category::Animation => "animation",
            Category::Misc => "misc",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What one category must contribute for an input to pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRequirement {
    pub required: bool,
    /// When non-empty, at least one token in the category must contain one
    /// of these substrings.
    #[serde(default)]
    pub specific_values: Vec<String>,
    /// Wording shown for this requirement in missing-item feedback.
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Challenge {
    pub number: i64,
    pub name: String,
    pub prompt: String,
    /// Accepted class combinations, each a whole class string.
    pub answers: Vec<String>,
    /// Explicit pattern list; derived from `answers` when absent.
    #[serde(default)]
    pub patterns: Option<Vec<String>>,
    /// Per-category requirements for category-based validation.
    #[serde(default)]
    pub categories: Option<BTreeMap<Category, CategoryRequirement>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChallengeSet {
    pub generated_at: DateTime<Utc>,
    pub challenges: Vec<Challenge>,
}

impl ChallengeSet {
    pub fn new_now(challenges: Vec<Challenge>) -> Self {
        ChallengeSet {
            generated_at: Utc::now(),
            challenges,
        }
    }
}

/// Read a challenge set from disk.
pub fn load_challenges(path: &Path) -> Result<ChallengeSet, String> {
    use std::io::ErrorKind;

    // Short, standardized I/O errors
    let s = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            let msg = match e.kind() {
                ErrorKind::NotFound => "File not found".to_string(),
                ErrorKind::PermissionDenied => {
                    "Permission denied reading challenge set".to_string()
                }
                ErrorKind::InvalidData => "Challenge file is not valid UTF-8".to_string(),
                _ => format!("Failed to read challenge set ({})", e.kind()),
            };
            error!("Failed to load challenge set at {:?}: {}", path, msg);
            return Err(msg);
        }
    };

    // Short parse error
    serde_json::from_str::<ChallengeSet>(&s).map_err(|_| "Invalid challenge JSON".to_string())
}

/// Save a challenge set (atomic-ish write).
pub fn save_challenges(path: &Path, set: &ChallengeSet) -> Result<(), String> {
    use std::io::ErrorKind;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => {
                "Permission denied creating challenge directory".to_string()
            }
            _ => "Failed to prepare challenge directory".to_string(),
        })?;
    }

    let pretty = serde_json::to_string_pretty(set)
        .map_err(|_| "Failed to serialize challenge set".to_string())?;

    let tmp = temp_path(path);
    {
        let mut f = fs::File::create(&tmp).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => "Permission denied creating temp file".to_string(),
            _ => "Failed to create temp file".to_string(),
        })?;
        f.write_all(pretty.as_bytes())
            .map_err(|_| "Failed to write temp file".to_string())?;
        f.flush()
            .map_err(|_| "Failed to flush temp file".to_string())?;
    }
    fs::rename(&tmp, path).map_err(|_| "Failed to move temp file into place".to_string())?;
    Ok(())
}

fn temp_path(final_path: &Path) -> PathBuf {
    let mut tmp = final_path.to_path_buf();
    let fname = final_path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("challenges.json");
    tmp.set_file_name(format!("{fname}.tmp"));
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_challenge() -> Challenge {
        Challenge {
            number: 1,
            name: "Center a div".to_string(),
            prompt: "Center the content horizontally and vertically".to_string(),
            answers: vec!["flex items-center justify-center".to_string()],
            patterns: None,
            categories: None,
        }
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("challenges").join("set.json");

        let mut requirements = BTreeMap::new();
        requirements.insert(
            Category::Background,
            CategoryRequirement {
                required: true,
                specific_values: vec!["blue".to_string()],
                description: Some("background color class".to_string()),
            },
        );

        let mut challenge = sample_challenge();
        challenge.patterns = Some(vec!["flex".to_string(), "items-".to_string()]);
        challenge.categories = Some(requirements);

        let set = ChallengeSet::new_now(vec![challenge]);
        save_challenges(&path, &set).expect("Saving challenge set should succeed");

        let loaded = load_challenges(&path).expect("Loading challenge set should succeed");
        assert_eq!(loaded, set);
        assert!(!path.with_file_name("set.json.tmp").exists());
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = load_challenges(&tmp.path().join("absent.json")).unwrap_err();
        assert_eq!(err, "File not found");
    }

    #[test]
    fn test_load_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{ definitely not json").unwrap();

        let err = load_challenges(&path).unwrap_err();
        assert_eq!(err, "Invalid challenge JSON");
    }

    #[test]
    fn test_category_keys_serialize_lowercase() {
        let json = serde_json::to_string(&Category::Typography).unwrap();
        assert_eq!(json, r#""typography""#);

        let parsed: Category = serde_json::from_str(r#""misc""#).unwrap();
        assert_eq!(parsed, Category::Misc);
    }

    #[test]
    fn test_category_order_follows_declaration() {
        assert!(Category::Background < Category::Padding);
        assert!(Category::Position < Category::Misc);

        let mut map = BTreeMap::new();
        map.insert(Category::Misc, 0);
        map.insert(Category::Display, 1);
        map.insert(Category::Background, 2);
        let keys: Vec<Category> = map.keys().copied().collect();
        assert_eq!(
            keys,
            vec![Category::Background, Category::Display, Category::Misc]
        );
    }

    #[test]
    fn test_requirement_defaults_from_partial_json() {
        let json = r#"{ "required": true }"#;
        let req: CategoryRequirement = serde_json::from_str(json).unwrap();
        assert!(req.required);
        assert!(req.specific_values.is_empty());
        assert_eq!(req.description, None);
    }

    #[test]
    fn test_optional_challenge_fields_default_to_none() {
        let json = r#"{
            "number": 3,
            "name": "Card",
            "prompt": "Build a card",
            "answers": ["bg-white rounded-lg shadow-md p-6"]
        }"#;
        let challenge: Challenge = serde_json::from_str(json).unwrap();
        assert_eq!(challenge.patterns, None);
        assert_eq!(challenge.categories, None);
        assert_eq!(challenge.answers.len(), 1);
    }
}
