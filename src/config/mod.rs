use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use crate::utils::ranking_utils::DEFAULT_RECOMMENDATION_LIMIT;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub cors_allowed_origins: Vec<String>,
    pub data_path: String,
    pub song_sheet_file: String,
    pub gimmick_sheet_file: String,
    pub recommendation_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:ddr_skill.db".to_string()),
            max_connections: env::var("MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| v.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or_else(|_| vec!["*".to_string()]),
            data_path: env::var("DATA_PATH").unwrap_or_else(|_| "data".to_string()),
            song_sheet_file: env::var("SONG_SHEET_FILE").unwrap_or_else(|_| "songs.csv".to_string()),
            gimmick_sheet_file: env::var("GIMMICK_SHEET_FILE").unwrap_or_else(|_| "gimmicks.csv".to_string()),
            recommendation_limit: env::var("RECOMMENDATION_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RECOMMENDATION_LIMIT),
        }
    }
}

impl AppConfig {
    pub fn song_sheet_path(&self) -> PathBuf {
        PathBuf::from(&self.data_path).join(&self.song_sheet_file)
    }

    pub fn gimmick_sheet_path(&self) -> PathBuf {
        PathBuf::from(&self.data_path).join(&self.gimmick_sheet_file)
    }
}

lazy_static! {
    pub static ref CONFIG: Arc<AppConfig> = Arc::new(AppConfig::default());
}
