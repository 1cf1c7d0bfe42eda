use crate::commands::ALL_TYPES;
use crate::error::{DocTrackError, Result};
use crate::model::{DocumentType, OTHER};
use crate::status::{EXPIRING_SOON_DAYS, NO_EXPIRY_LABEL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Table columns that can be hidden. Name and actions are always shown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Columns {
    pub doc_type: bool,
    pub expiry_date: bool,
    pub status: bool,
    pub updated_by: bool,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            doc_type: true,
            expiry_date: true,
            status: true,
            updated_by: true,
        }
    }
}

impl Columns {
    /// Flips the named column. Returns false for an unknown name.
    pub fn toggle(&mut self, name: &str) -> bool {
        let slot = match name.to_ascii_lowercase().as_str() {
            "type" => &mut self.doc_type,
            "expiry" | "expires" => &mut self.expiry_date,
            "status" => &mut self.status,
            "by" | "updated-by" => &mut self.updated_by,
            _ => return false,
        };
        *slot = !*slot;
        true
    }
}

/// Tracker settings, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Days ahead of the reference date that count as "expiring soon"
    #[serde(default = "default_window")]
    pub expiring_soon_days: i64,

    #[serde(default = "default_no_expiry_label")]
    pub no_expiry_label: String,

    /// Start each session with the sample documents
    #[serde(default = "default_true")]
    pub seed_samples: bool,

    /// Category used when `add` is given no `--type`
    #[serde(default = "default_type")]
    pub default_type: String,

    #[serde(default)]
    pub columns: Columns,
}

fn default_window() -> i64 {
    EXPIRING_SOON_DAYS
}

fn default_no_expiry_label() -> String {
    NO_EXPIRY_LABEL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_type() -> String {
    OTHER.to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            expiring_soon_days: default_window(),
            no_expiry_label: default_no_expiry_label(),
            seed_samples: true,
            default_type: default_type(),
            columns: Columns::default(),
        }
    }
}

impl TrackerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DocTrackError::Io)?;
        let config: TrackerConfig =
            serde_json::from_str(&content).map_err(DocTrackError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DocTrackError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(DocTrackError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(DocTrackError::Io)?;
        Ok(())
    }

    /// The category for records added without one. Falls back to `Other` when the
    /// configured value could not name a category.
    pub fn default_category(&self) -> DocumentType {
        let configured = self.default_type.trim();
        if configured.is_empty() || configured.eq_ignore_ascii_case(ALL_TYPES) {
            DocumentType::default()
        } else {
            DocumentType::new(configured)
        }
    }

    fn validate(&self) -> Result<()> {
        if self.expiring_soon_days < 0 {
            return Err(DocTrackError::Validation(format!(
                "expiring_soon_days must not be negative (got {})",
                self.expiring_soon_days
            )));
        }

        let default_type = self.default_type.trim();
        if default_type.is_empty() || default_type.eq_ignore_ascii_case(ALL_TYPES) {
            return Err(DocTrackError::Validation(format!(
                "default_type must name a category (got '{}')",
                self.default_type
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.expiring_soon_days, 30);
        assert_eq!(config.no_expiry_label, "No expiry");
        assert!(config.seed_samples);
        assert_eq!(config.default_type, "Other");
        assert_eq!(config.columns, Columns::default());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = TrackerConfig::load(dir.path()).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("doctrack");

        let mut config = TrackerConfig {
            expiring_soon_days: 14,
            seed_samples: false,
            ..Default::default()
        };
        config.columns.toggle("by");
        config.save(&nested).unwrap();

        let loaded = TrackerConfig::load(&nested).unwrap();
        assert_eq!(loaded, config);
        assert!(!loaded.columns.updated_by);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "expiring_soon_days": 7, "columns": { "status": false } }"#,
        )
        .unwrap();

        let config = TrackerConfig::load(dir.path()).unwrap();
        assert_eq!(config.expiring_soon_days, 7);
        assert_eq!(config.no_expiry_label, "No expiry");
        assert!(!config.columns.status);
        assert!(config.columns.doc_type);
    }

    #[test]
    fn test_negative_window_rejected() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "expiring_soon_days": -1 }"#,
        )
        .unwrap();

        assert!(matches!(
            TrackerConfig::load(dir.path()),
            Err(DocTrackError::Validation(_))
        ));
    }

    #[test]
    fn test_filter_sentinel_rejected_as_default_type() {
        for value in ["All", "all", "", "   "] {
            let dir = tempdir().unwrap();
            fs::write(
                dir.path().join(CONFIG_FILENAME),
                format!(r#"{{ "default_type": "{}" }}"#, value),
            )
            .unwrap();

            assert!(
                matches!(
                    TrackerConfig::load(dir.path()),
                    Err(DocTrackError::Validation(_))
                ),
                "expected default_type '{}' to be rejected",
                value
            );
        }
    }

    #[test]
    fn test_custom_default_type_accepted() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "default_type": "Contract" }"#,
        )
        .unwrap();
        assert_eq!(
            TrackerConfig::load(dir.path()).unwrap().default_type,
            "Contract"
        );
    }

    #[test]
    fn test_default_category_never_uses_filter_sentinel() {
        let config = TrackerConfig {
            default_type: "All".into(),
            ..Default::default()
        };
        assert_eq!(config.default_category().as_str(), OTHER);

        let config = TrackerConfig {
            default_type: " Contract ".into(),
            ..Default::default()
        };
        assert_eq!(config.default_category().as_str(), "Contract");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            TrackerConfig::load(dir.path()),
            Err(DocTrackError::Serialization(_))
        ));
    }

    #[test]
    fn test_toggle_columns() {
        let mut columns = Columns::default();
        assert!(columns.toggle("TYPE"));
        assert!(!columns.doc_type);
        assert!(columns.toggle("type"));
        assert!(columns.doc_type);
        assert!(!columns.toggle("name"));
    }
}
