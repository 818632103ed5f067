use anyhow::Result;
use std::path::{Path, PathBuf};

/// Overrides the configuration directory (useful in containers and tests)
pub const CONFIG_DIR_ENV: &str = "MOVIECRITIC_CONFIG_DIR";

pub struct PathManager {
    config_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("moviecritic");

        Ok(Self::with_base(base_dir))
    }

    pub fn with_base(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: base_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            if !dir.trim().is_empty() {
                return Self::with_base(dir);
            }
        }

        // Platform-specific paths (e.g., ~/.config/moviecritic on Linux),
        // falling back to the working directory
        Self::new().unwrap_or_else(|_| Self::with_base(".moviecritic"))
    }
}
