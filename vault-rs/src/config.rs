use crate::chunker::DEFAULT_MAX_CHUNK_CHARS;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub archive: ArchiveConfig,
    pub vault: VaultConfig,
    pub chunking: ChunkingConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArchiveConfig {
    pub mbox_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VaultConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    pub max_chunk_chars: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::VaultError::Config(e.to_string()))?;

        toml::from_str(&content).map_err(|e| crate::error::VaultError::Config(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            archive: ArchiveConfig {
                mbox_path: "./mbox".to_string(),
            },
            vault: VaultConfig {
                path: "vault.txt".to_string(),
            },
            chunking: ChunkingConfig {
                max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}
