use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::words::DEFAULT_MAX_WORDS;

/// Names a JSON config file to read at startup.
pub const CONFIG_ENV: &str = "AIRLINE_DASHBOARD_CONFIG";
/// Overrides `data_path`.
pub const DATA_ENV: &str = "AIRLINE_DASHBOARD_DATA";
/// Overrides `max_words`.
pub const MAX_WORDS_ENV: &str = "AIRLINE_DASHBOARD_MAX_WORDS";

/// Dashboard settings. Every field has a default, so an empty config is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Dataset loaded at startup.
    pub data_path: PathBuf,
    /// Terms shown in the word cloud.
    pub max_words: usize,
    /// Rows shown in the tweet table.
    pub table_rows: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("Data/Cleaned_Tweets.csv"),
            max_words: DEFAULT_MAX_WORDS,
            table_rows: 200,
        }
    }
}

impl DashboardConfig {
    /// Load from the optional config file, then apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Apply `AIRLINE_DASHBOARD_*` overrides looked up through `var`.
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var(DATA_ENV).filter(|p| !p.trim().is_empty()) {
            self.data_path = PathBuf::from(path);
        }
        if let Some(raw) = var(MAX_WORDS_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(n) => self.max_words = n,
                Err(_) => log::warn!("Ignoring {MAX_WORDS_ENV}={raw:?}: not a count"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_point_at_cleaned_tweets() {
        let config = DashboardConfig::default();
        assert_eq!(config.data_path, PathBuf::from("Data/Cleaned_Tweets.csv"));
        assert_eq!(config.max_words, 50);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = DashboardConfig::from_json(r#"{ "max_words": 25 }"#).unwrap();
        assert_eq!(config.max_words, 25);
        assert_eq!(config.table_rows, 200);
        assert_eq!(config.data_path, DashboardConfig::default().data_path);
    }

    #[test]
    fn environment_overrides_file_values() {
        let mut config = DashboardConfig::default();
        config.apply_overrides(vars(&[(DATA_ENV, "tweets.parquet"), (MAX_WORDS_ENV, "10")]));
        assert_eq!(config.data_path, PathBuf::from("tweets.parquet"));
        assert_eq!(config.max_words, 10);
    }

    #[test]
    fn bad_override_is_ignored() {
        let mut config = DashboardConfig::default();
        config.apply_overrides(vars(&[(MAX_WORDS_ENV, "lots"), (DATA_ENV, "  ")]));
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DashboardConfig::from_file(&dir.path().join("nope.json")).is_err());
    }
}
