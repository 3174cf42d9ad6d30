use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub last_pos: Option<(f32, f32)>,
    #[serde(default)]
    pub last_size: Option<(f32, f32)>,
}

impl AppConfig {
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "quick_list", "quick_list")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn load() -> Self {
        if let Some(config_dir) = Self::config_dir() {
            let config_path = config_dir.join("config.json");
            if config_path.exists() {
                if let Ok(file) = std::fs::File::open(config_path) {
                    if let Ok(config) = serde_json::from_reader(file) {
                        return config;
                    } else {
                        warn!("Failed to parse config, using default");
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) {
        if let Some(config_dir) = Self::config_dir() {
            if std::fs::create_dir_all(&config_dir).is_ok() {
                let config_path = config_dir.join("config.json");
                if let Ok(file) = std::fs::File::create(config_path) {
                    let _ = serde_json::to_writer_pretty(file, self);
                }
            }
        }
    }
}
