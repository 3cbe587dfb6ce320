use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECONDS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub endpoint: String,
    pub request_timeout_secs: u64,
    pub last_input_dir: Option<PathBuf>,
    pub last_save_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECONDS,
            last_input_dir: None,
            last_save_dir: None,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("pdf2pptx").join("config.json");

            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = serde_json::from_str::<AppConfig>(&content) {
                        return config;
                    }
                    tracing::warn!("unreadable config at {:?}, using defaults", config_path);
                }
            }
        }

        Self::default()
    }

    pub fn save(&self) {
        if let Some(config_dir) = dirs::config_dir() {
            let app_config_dir = config_dir.join("pdf2pptx");

            if let Ok(()) = std::fs::create_dir_all(&app_config_dir) {
                let config_path = app_config_dir.join("config.json");

                if let Ok(content) = serde_json::to_string_pretty(self) {
                    let _ = std::fs::write(&config_path, content);
                }
            }
        }
    }

    pub fn update_last_input_dir(&mut self, picked_file: &Path) {
        self.last_input_dir = picked_file.parent().map(|p| p.to_path_buf());
        self.save();
    }

    pub fn update_last_save_dir(&mut self, saved_file: &Path) {
        self.last_save_dir = saved_file.parent().map(|p| p.to_path_buf());
        self.save();
    }
}
