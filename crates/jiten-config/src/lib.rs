use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the four base dataset files
    pub base_dir: PathBuf,
    /// Root of the per-language translation tree
    pub translation_dir: PathBuf,
    /// Where the merged snapshot artifact is written
    pub snapshot_path: PathBuf,
    pub database_url: String,
    /// Rows per insert statement
    pub chunk_size: usize,
}

impl Config {
    pub fn new() -> Self {
        let base_dir = env::var("JITEN_BASE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("database/base"));

        let translation_dir = env::var("JITEN_TRANSLATION_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("database/translation"));

        let snapshot_path = env::var("JITEN_SNAPSHOT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("out/database.json"));

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://out/jiten.db?mode=rwc".to_string());

        let chunk_size = env::var("JITEN_CHUNK_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n > 0)
            .unwrap_or(100);

        Config {
            base_dir,
            translation_dir,
            snapshot_path,
            database_url,
            chunk_size,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
