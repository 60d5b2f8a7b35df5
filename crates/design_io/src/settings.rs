//! Engine settings management
//!
//! Settings persist as a JSON file in the bridge's data directory. A missing
//! or unreadable file is not an error: defaults are used instead.

use crate::export::ExportOptions;
use crate::parser::ParserConfig;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the settings file inside the data directory
pub const SETTINGS_FILE_NAME: &str = "design-bridge.json";

/// All tunable engine behavior
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    /// Envelope handling for incoming payloads
    pub parser: ParserConfig,
    /// Snapshot preparation for outgoing payloads
    pub export: ExportOptions,
}

/// Loads, saves and updates [`EngineSettings`]
pub struct SettingsManager {
    settings_path: PathBuf,
    current: EngineSettings,
}

impl SettingsManager {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            settings_path: data_dir.as_ref().join(SETTINGS_FILE_NAME),
            current: EngineSettings::default(),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Load settings from disk, or defaults if the file doesn't exist
    pub async fn load(&mut self) -> Result<&EngineSettings> {
        self.current = if self.settings_path.exists() {
            let content = tokio::fs::read_to_string(&self.settings_path).await?;
            parse_or_default(&content)
        } else {
            EngineSettings::default()
        };
        Ok(&self.current)
    }

    /// Load settings synchronously (for use during startup)
    pub fn load_sync(&mut self) -> Result<&EngineSettings> {
        self.current = if self.settings_path.exists() {
            let content = std::fs::read_to_string(&self.settings_path)?;
            parse_or_default(&content)
        } else {
            EngineSettings::default()
        };
        Ok(&self.current)
    }

    pub async fn save(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(&self.current)?;
        tokio::fs::write(&self.settings_path, content).await?;
        Ok(())
    }

    pub fn save_sync(&self) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.current)?;
        std::fs::write(&self.settings_path, content)?;
        Ok(())
    }

    pub fn get(&self) -> &EngineSettings {
        &self.current
    }

    /// Replace settings and save to disk
    pub async fn update(&mut self, settings: EngineSettings) -> Result<()> {
        self.current = settings;
        self.save().await
    }

    pub fn update_sync(&mut self, settings: EngineSettings) -> Result<()> {
        self.current = settings;
        self.save_sync()
    }
}

fn parse_or_default(content: &str) -> EngineSettings {
    match serde_json::from_str::<EngineSettings>(content) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to parse settings file, using defaults: {}", e);
            EngineSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = EngineSettings::default();
        assert_eq!(settings.parser.envelope_keys, vec!["data", "design", "result"]);
        assert!(settings.parser.promote_multi_page);
        assert!(settings.export.stamp_layer_indices);
        assert_eq!(settings.export.round_precision, Some(6));
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let settings: EngineSettings =
            serde_json::from_str(r#"{"export": {"roundPrecision": 3}}"#).unwrap();
        assert_eq!(settings.export.round_precision, Some(3));
        assert!(settings.export.stamp_layer_indices);
        assert_eq!(settings.parser, ParserConfig::default());
    }

    #[test]
    fn test_load_save_sync() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path());

        assert_eq!(manager.load_sync().unwrap(), &EngineSettings::default());

        let mut settings = EngineSettings::default();
        settings.parser.promote_multi_page = false;
        settings.export.round_precision = None;
        manager.update_sync(settings.clone()).unwrap();

        let mut reloaded = SettingsManager::new(temp_dir.path());
        assert_eq!(reloaded.load_sync().unwrap(), &settings);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(SETTINGS_FILE_NAME), "{ not json").unwrap();

        let mut manager = SettingsManager::new(temp_dir.path());
        assert_eq!(manager.load_sync().unwrap(), &EngineSettings::default());
    }

    #[tokio::test]
    async fn test_load_save_async() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = SettingsManager::new(temp_dir.path().join("nested"));

        manager.load().await.unwrap();

        let mut settings = EngineSettings::default();
        settings.parser.ai_envelope_keys = vec!["output".into()];
        manager.update(settings).await.unwrap();

        let mut reloaded = SettingsManager::new(temp_dir.path().join("nested"));
        let loaded = reloaded.load().await.unwrap();
        assert_eq!(loaded.parser.ai_envelope_keys, vec!["output"]);
    }
}
