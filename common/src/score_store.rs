use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::{
    ConfigContentProvider, ConfigManager, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};
use crate::defaults::HIGH_SCORE_KEY;

/// Persistent home of the high score. Errors are plain messages; the engine
/// logs them and keeps playing.
pub trait ScoreStore: Send {
    fn get(&self) -> Result<Option<u32>, String>;
    fn put(&mut self, score: u32) -> Result<(), String>;
}

/// Key to integer table as stored on disk, e.g. `high_score: 300`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTable(BTreeMap<String, u32>);

impl ScoreTable {
    pub fn get(&self, key: &str) -> Option<u32> {
        self.0.get(key).copied()
    }

    pub fn insert(&mut self, key: &str, value: u32) {
        self.0.insert(key.to_string(), value);
    }
}

impl Validate for ScoreTable {
    fn validate(&self) -> Result<(), String> {
        if self.0.keys().any(|key| key.is_empty()) {
            return Err("score keys must not be empty".to_string());
        }
        Ok(())
    }
}

pub struct ConfigScoreStore<TContentProvider>
where
    TContentProvider: ConfigContentProvider,
{
    manager: ConfigManager<TContentProvider, ScoreTable, YamlConfigSerializer>,
    key: String,
}

impl ConfigScoreStore<FileContentConfigProvider> {
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(file_path))
    }
}

impl<TContentProvider> ConfigScoreStore<TContentProvider>
where
    TContentProvider: ConfigContentProvider,
{
    pub fn new(content_provider: TContentProvider) -> Self {
        Self::with_key(content_provider, HIGH_SCORE_KEY)
    }

    pub fn with_key(content_provider: TContentProvider, key: &str) -> Self {
        Self {
            manager: ConfigManager::new(content_provider, YamlConfigSerializer::new()),
            key: key.to_string(),
        }
    }
}

impl<TContentProvider> ScoreStore for ConfigScoreStore<TContentProvider>
where
    TContentProvider: ConfigContentProvider,
{
    fn get(&self) -> Result<Option<u32>, String> {
        let table = self.manager.get_config()?;
        Ok(table.get(&self.key))
    }

    fn put(&mut self, score: u32) -> Result<(), String> {
        // Entries under other keys survive; an unreadable table is replaced.
        let mut table = self.manager.get_config().unwrap_or_default();
        table.insert(&self.key, score);
        self.manager.set_config(&table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InMemoryContentProvider;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("snake_highscore_{}.yaml", random_number))
    }

    #[test]
    fn test_empty_store_has_no_high_score() {
        let store = ConfigScoreStore::new(InMemoryContentProvider::new());

        assert_eq!(store.get(), Ok(None));
    }

    #[test]
    fn test_put_then_get() {
        let provider = InMemoryContentProvider::new();
        let mut store = ConfigScoreStore::new(provider.clone());

        store.put(300).unwrap();

        assert_eq!(store.get(), Ok(Some(300)));
        assert_eq!(provider.content(), Some("high_score: 300\n".to_string()));
    }

    #[test]
    fn test_put_keeps_other_keys() {
        let provider = InMemoryContentProvider::with_content("best_time: 42\nhigh_score: 100\n");
        let mut store = ConfigScoreStore::new(provider.clone());

        store.put(500).unwrap();

        let content = provider.content().unwrap();
        assert!(content.contains("best_time: 42"));
        assert!(content.contains("high_score: 500"));
    }

    #[test]
    fn test_corrupt_content_is_an_error_and_put_repairs_it() {
        let provider = InMemoryContentProvider::with_content("high_score: [not a number");
        let mut store = ConfigScoreStore::new(provider);

        assert!(store.get().is_err());

        store.put(200).unwrap();

        assert_eq!(store.get(), Ok(Some(200)));
    }

    #[test]
    fn test_high_score_survives_reopening_the_file() {
        let path = get_temp_file_path();
        let mut store = ConfigScoreStore::from_yaml_file(path.clone());
        store.put(700).unwrap();

        let reopened = ConfigScoreStore::from_yaml_file(path.clone());

        assert_eq!(reopened.get(), Ok(Some(700)));
        let _ = std::fs::remove_file(path);
    }
}
