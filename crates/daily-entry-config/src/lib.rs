use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File extensions accepted for the entry file
const MARKDOWN_EXTENSIONS: [&str; 2] = ["md", "markdown"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error(
        "Entry path {entry_path} in {config_path} is not a markdown file (expected .md or .markdown)"
    )]
    EntryNotMarkdown {
        config_path: PathBuf,
        entry_path: PathBuf,
    },
}

/// Desktop host settings
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Markdown file that seeds the entry editor. `~` and `$VARS` are expanded on load.
    pub entry_path: PathBuf,
}

impl Config {
    /// `Ok(None)` when there is no config file; the host then starts with an empty entry
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::ConfigReadError {
                    config_path: config_path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.entry_path = expand_path(&config.entry_path);

        if !is_markdown(&config.entry_path) {
            return Err(ConfigError::EntryNotMarkdown {
                config_path: config_path.to_path_buf(),
                entry_path: config.entry_path,
            });
        }
        let entry_dir = config.entry_path.parent();
        if entry_dir.is_some_and(|dir| !dir.as_os_str().is_empty() && !dir.is_dir()) {
            log::warn!(
                "Entry directory for {} does not exist yet",
                config.entry_path.display()
            );
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/daily-entry");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}

/// Expands `~` and environment variables, leaving the path as written if a variable is unset
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
