use crate::error::{Result, SiftError};
use crate::model::{Category, Tab};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: [&str; 3] = ["tab-order", "hidden", "catalog"];

/// Configuration for sift, stored in <sift home>/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiftConfig {
    /// Order of the tab row. Always lists every tab exactly once.
    #[serde(default = "default_tab_order")]
    pub tab_order: Vec<Tab>,

    /// Categories hidden when a session starts
    #[serde(default)]
    pub hidden: Vec<Category>,

    /// Catalog file to load; the demo catalog is used when unset
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

fn default_tab_order() -> Vec<Tab> {
    Tab::ALL_TABS.to_vec()
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            tab_order: default_tab_order(),
            hidden: Vec::new(),
            catalog: None,
        }
    }
}

impl SiftConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SiftError::Io)?;
        let config: SiftConfig =
            serde_json::from_str(&content).map_err(SiftError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but a stored tab order that is not a full permutation is
    /// replaced by the default one. The error it would have raised is returned alongside.
    pub fn load_repairing<P: AsRef<Path>>(config_dir: P) -> Result<(Self, Option<SiftError>)> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok((Self::default(), None));
        }

        let content = fs::read_to_string(&config_path).map_err(SiftError::Io)?;
        let mut config: SiftConfig =
            serde_json::from_str(&content).map_err(SiftError::Serialization)?;
        match config.validate() {
            Ok(()) => Ok((config, None)),
            Err(e) => {
                config.tab_order = default_tab_order();
                Ok((config, Some(e)))
            }
        }
    }

    fn validate(&self) -> Result<()> {
        validate_tab_order(&self.tab_order)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SiftError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SiftError::Serialization)?;
        fs::write(config_path, content).map_err(SiftError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "tab-order" => Some(join(self.tab_order.iter())),
            "hidden" => Some(join(self.hidden.iter())),
            "catalog" => Some(
                self.catalog
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Set a key from its textual form. Lists are comma separated.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "tab-order" => {
                let order = split_list(value)
                    .map(str::parse::<Tab>)
                    .collect::<Result<Vec<Tab>>>()?;
                validate_tab_order(&order)?;
                self.tab_order = order;
            }
            "hidden" => {
                let mut hidden = Vec::new();
                for category in split_list(value).map(str::parse::<Category>) {
                    let category = category?;
                    if !hidden.contains(&category) {
                        hidden.push(category);
                    }
                }
                self.hidden = hidden;
            }
            "catalog" => {
                self.catalog = match value.trim() {
                    "" | "none" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            _ => return Err(SiftError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "none")
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|i| i.to_string()).collect::<Vec<_>>().join(",")
}

fn validate_tab_order(order: &[Tab]) -> Result<()> {
    let unique: HashSet<&Tab> = order.iter().collect();
    if order.len() != Tab::ALL_TABS.len() || unique.len() != order.len() {
        return Err(SiftError::Config(
            "tab-order must list All, People, Files and Chats exactly once".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiftConfig::default();
        assert_eq!(
            config.tab_order,
            vec![Tab::All, Tab::FILES, Tab::PEOPLE, Tab::CHATS]
        );
        assert!(config.hidden.is_empty());
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = SiftConfig::load(temp_dir.path().join("nope")).unwrap();
        assert_eq!(config, SiftConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let mut config = SiftConfig::default();
        config.set("hidden", "files, chats").unwrap();
        config.set("catalog", "/tmp/records.json").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = SiftConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.hidden, vec![Category::Files, Category::Chats]);
        assert_eq!(loaded.catalog, Some(PathBuf::from("/tmp/records.json")));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"hidden": ["people"]}"#).unwrap();

        let loaded = SiftConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.hidden, vec![Category::People]);
        assert_eq!(loaded.tab_order, Tab::ALL_TABS.to_vec());
    }

    #[test]
    fn test_set_tab_order() {
        let mut config = SiftConfig::default();
        config.set("tab-order", "people,chats,files,all").unwrap();
        assert_eq!(config.get("tab-order").unwrap(), "People,Chats,Files,All");
    }

    #[test]
    fn test_tab_order_must_be_complete() {
        let mut config = SiftConfig::default();
        let err = config.set("tab-order", "people,files,chats").unwrap_err();
        assert!(matches!(err, SiftError::Config(_)));

        let err = config.set("tab-order", "all,all,files,chats").unwrap_err();
        assert!(matches!(err, SiftError::Config(_)));

        assert_eq!(config.tab_order, Tab::ALL_TABS.to_vec());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut config = SiftConfig::default();
        let err = config.set("hidden", "files,lists").unwrap_err();
        assert!(matches!(err, SiftError::InvalidCategory(ref s) if s == "lists"));
        assert!(config.hidden.is_empty());
    }

    #[test]
    fn test_hidden_none_clears() {
        let mut config = SiftConfig::default();
        config.set("hidden", "people,people").unwrap();
        assert_eq!(config.hidden, vec![Category::People]);
        config.set("hidden", "none").unwrap();
        assert!(config.hidden.is_empty());
        assert_eq!(config.get("hidden").unwrap(), "");
    }

    #[test]
    fn test_unknown_key() {
        let mut config = SiftConfig::default();
        assert!(config.get("color").is_none());
        assert!(matches!(
            config.set("color", "red"),
            Err(SiftError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_tab_order_on_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"tab_order": ["Files"]}"#,
        )
        .unwrap();
        assert!(matches!(
            SiftConfig::load(temp_dir.path()),
            Err(SiftError::Config(_))
        ));
    }

    #[test]
    fn test_load_repairing_resets_bad_tab_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"tab_order": ["Files"], "hidden": ["chats"]}"#,
        )
        .unwrap();

        let (config, problem) = SiftConfig::load_repairing(temp_dir.path()).unwrap();
        assert!(matches!(problem, Some(SiftError::Config(_))));
        assert_eq!(config.tab_order, Tab::ALL_TABS.to_vec());
        assert_eq!(config.hidden, vec![Category::Chats]);
    }
}
