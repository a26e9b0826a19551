use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Light
    }
}

/// Settings file under the user config directory. Doubles as the secret store
/// for the API credentials; the environment variables are the fallback source
/// when the stored values are absent or empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    pub default_keyword: String,
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            default_keyword: global_constants::DEFAULT_SEARCH_KEYWORD.to_string(),
            theme_mode: ThemeMode::default(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save()?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(&settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Default keyword: {}", settings.default_keyword);

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;

        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_mode_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_mode_display() {
        assert_eq!(format!("{}", ThemeMode::Dark), "Dark");
        assert_eq!(format!("{}", ThemeMode::Light), "Light");
    }

    #[test]
    fn test_default_settings_have_no_credentials() {
        let settings = UserSettings::default();

        assert!(settings.client_id.is_none());
        assert!(settings.client_secret.is_none());
        assert_eq!(
            settings.default_keyword,
            global_constants::DEFAULT_SEARCH_KEYWORD
        );
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let settings = UserSettings {
            client_id: Some("id-123".to_string()),
            client_secret: Some("secret-456".to_string()),
            default_keyword: "반도체".to_string(),
            theme_mode: ThemeMode::Dark,
        };

        let serialized = serde_json::to_string(&settings).unwrap();
        let deserialized: UserSettings = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.client_id, settings.client_id);
        assert_eq!(deserialized.client_secret, settings.client_secret);
        assert_eq!(deserialized.default_keyword, settings.default_keyword);
        assert_eq!(deserialized.theme_mode, settings.theme_mode);
    }

    #[test]
    fn test_deserialization_with_missing_credential_fields() {
        let json = r#"{"default_keyword": "포스코"}"#;

        let settings: UserSettings = serde_json::from_str(json).unwrap();

        assert!(settings.client_id.is_none());
        assert!(settings.client_secret.is_none());
        assert_eq!(settings.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn test_settings_save_and_load_roundtrip_on_disk() {
        let temp_dir = tempfile::tempdir().unwrap();

        let original = UserSettings {
            client_id: Some("disk-id".to_string()),
            client_secret: None,
            default_keyword: "조선".to_string(),
            theme_mode: ThemeMode::Dark,
        };

        let test_file = temp_dir.path().join("settings.json");
        let contents = serde_json::to_string_pretty(&original).unwrap();
        std::fs::write(&test_file, contents).unwrap();

        let loaded_contents = std::fs::read_to_string(&test_file).unwrap();
        let loaded: UserSettings = serde_json::from_str(&loaded_contents).unwrap();

        assert_eq!(loaded.client_id, original.client_id);
        assert_eq!(loaded.client_secret, original.client_secret);
        assert_eq!(loaded.default_keyword, original.default_keyword);
        assert_eq!(loaded.theme_mode, original.theme_mode);
    }
}
