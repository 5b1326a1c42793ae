use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SnippetsConfig {
    pub database: Option<String>,
    pub log_file: Option<String>,
}

impl SnippetsConfig {
    /// Config written by `snippets init`
    pub fn starter() -> Self {
        Self {
            database: Some(default_database_path().display().to_string()),
            log_file: Some(default_log_path().display().to_string()),
        }
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("snippets.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("snippets.db")
}

pub fn default_log_path() -> PathBuf {
    PathBuf::from("snippets.log")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<SnippetsConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: SnippetsConfig = toml::from_str(&contents)
        .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &SnippetsConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Database path: CLI flag, then config file, then `snippets.db`
pub fn resolve_database(cli: Option<PathBuf>, config: Option<&SnippetsConfig>) -> PathBuf {
    cli.or_else(|| config.and_then(|c| c.database.as_ref()).map(PathBuf::from))
        .unwrap_or_else(default_database_path)
}

/// Log path: CLI flag, then config file, then `snippets.log`
pub fn resolve_log_file(cli: Option<PathBuf>, config: Option<&SnippetsConfig>) -> PathBuf {
    cli.or_else(|| config.and_then(|c| c.log_file.as_ref()).map(PathBuf::from))
        .unwrap_or_else(default_log_path)
}
