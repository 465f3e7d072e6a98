use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const DB_FILE_NAME: &str = "weight_tracker.db";

pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// Resolve the database location. An explicit path wins over the
    /// platform data directory.
    pub fn load(db_override: Option<PathBuf>) -> Result<Self> {
        let db_path = match db_override {
            Some(path) => path,
            None => {
                let proj_dirs = ProjectDirs::from("", "", "scalesync")
                    .context("Could not determine home directory")?;
                proj_dirs.data_dir().join(DB_FILE_NAME)
            }
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(parent)?;
        }

        Ok(Config { db_path })
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create data directory: {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_override_path_is_used() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("w.db");
        let config = Config::load(Some(path.clone())).unwrap();
        assert_eq!(config.db_path, path);
        assert!(dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_bare_file_name_override() {
        let config = Config::load(Some(PathBuf::from("w.db"))).unwrap();
        assert_eq!(config.db_path, PathBuf::from("w.db"));
    }
}
