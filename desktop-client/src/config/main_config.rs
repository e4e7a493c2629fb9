use serde::{Deserialize, Serialize};
use snake_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use snake_common::defaults::HIGH_SCORE_FILE_NAME;
use std::path::PathBuf;

use super::{SnakeGameConfig, WindowConfig};

const CONFIG_FILE_NAME: &str = "snake_client_config.yaml";

fn exe_dir_path(file_name: &str) -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name);
    }
    PathBuf::from(file_name)
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(exe_dir_path(CONFIG_FILE_NAME))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub game: SnakeGameConfig,
    /// Relative paths are resolved next to the executable.
    pub high_score_file: String,
}

impl Config {
    pub fn high_score_path(&self) -> PathBuf {
        let path = PathBuf::from(&self.high_score_file);
        if path.is_absolute() {
            path
        } else {
            exe_dir_path(&self.high_score_file)
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.game.validate()?;
        if self.high_score_file.is_empty() {
            return Err("high_score_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            game: SnakeGameConfig::default(),
            high_score_file: HIGH_SCORE_FILE_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_snake_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized_string = serializer.serialize(&default_config).unwrap();
        let deserialized_config: Config = serializer.deserialize(&serialized_string).unwrap();

        assert_eq!(default_config, deserialized_config);
    }

    #[test]
    fn test_config_round_trips_through_manager() {
        let config = Config {
            high_score_file: "scores/best.yaml".to_string(),
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager: ConfigManager<_, Config, _> = ConfigManager::new(
            FileContentConfigProvider::new(file_path.clone()),
            YamlConfigSerializer::new(),
        );

        manager.set_config(&config).unwrap();
        let loaded_config = manager.get_config().unwrap();

        assert_eq!(config, loaded_config);
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let content_provider = FileContentConfigProvider::new(get_temp_file_path());
        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());

        assert_eq!(manager.get_config(), Ok(Config::default()));
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content("high_score_file: best.yaml\n")
            .unwrap();
        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());

        let loaded = manager.get_config().unwrap();

        assert_eq!(loaded.game, SnakeGameConfig::default());
        assert_eq!(loaded.window, WindowConfig::default());
        assert_eq!(loaded.high_score_file, "best.yaml");
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            window:
              width: 800
              height: 800
            game:
              field_width: 3
              field_height: 20
              tick_interval_ms: 100
              score_per_food: 100
            high_score_file: highscore.yaml
        "#;
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();
        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());

        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_absolute_high_score_path_is_kept() {
        let absolute = std::env::temp_dir().join("best.yaml");
        let config = Config {
            high_score_file: absolute.to_string_lossy().into_owned(),
            ..Config::default()
        };

        assert_eq!(config.high_score_path(), absolute);
    }
}
