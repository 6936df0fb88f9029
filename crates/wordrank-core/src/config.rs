use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_URL: &str = "https://www.gutenberg.org/cache/epub/16317/pg16317.txt";
const DEFAULT_START_RANK: usize = 10;
const DEFAULT_END_RANK: usize = 20;

/// Global configuration loaded from `~/.config/wordrank/config.toml`.
///
/// CLI flags override these values; the built-in defaults point at a
/// public Project Gutenberg text and report ranks 10 through 20.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordrankConfig {
    /// Source document URL (plain text, UTF-8).
    pub url: String,
    /// First rank to report (1-indexed).
    pub start_rank: usize,
    /// Last rank to report (inclusive).
    pub end_rank: usize,
}

impl Default for WordrankConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            start_rank: DEFAULT_START_RANK,
            end_rank: DEFAULT_END_RANK,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wordrank")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WordrankConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WordrankConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: WordrankConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = WordrankConfig::default();
        assert_eq!(cfg.url, DEFAULT_URL);
        assert_eq!(cfg.start_rank, 10);
        assert_eq!(cfg.end_rank, 20);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = WordrankConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: WordrankConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.url, cfg.url);
        assert_eq!(parsed.start_rank, cfg.start_rank);
        assert_eq!(parsed.end_rank, cfg.end_rank);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            url = "https://example.com/corpus.txt"
            start_rank = 1
            end_rank = 5
        "#;
        let cfg: WordrankConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.url, "https://example.com/corpus.txt");
        assert_eq!(cfg.start_rank, 1);
        assert_eq!(cfg.end_rank, 5);
    }
}
