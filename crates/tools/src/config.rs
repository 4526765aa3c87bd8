use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Origin used to absolutize `wp-content/...` paths
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "target/site-tools".to_string(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[site]
base_url = "https://opingenieria.com"

[output]
dir = "target/site-tools"
"#;

const CONFIG_FILE_NAME: &str = "site-tools.toml";

/// Load configuration
///
/// Search order:
/// 1. Explicit `--config` path
/// 2. `site-tools.toml` next to the executable
/// 3. Embedded default config
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        tracing::info!("Loading config from: {}", path.display());
        return read_config(path);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join(CONFIG_FILE_NAME);

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return read_config(&config_path);
            } else {
                tracing::debug!("{} not found at: {}", CONFIG_FILE_NAME, config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("invalid config {}", path.display()))
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    config.site.base_url = config.site.base_url.trim_end_matches('/').to_string();
    if config.site.base_url.is_empty() {
        anyhow::bail!("[site] base_url must not be empty");
    }
    Ok(config)
}

/// Path of an output file; relative output dirs resolve against the current directory
pub fn output_path(config: &Config, file_name: &str) -> PathBuf {
    Path::new(&config.output.dir).join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.site.base_url, "https://opingenieria.com");
        assert_eq!(config.output.dir, "target/site-tools");
        assert_eq!(
            output_path(&config, "extracted-images.json"),
            Path::new("target/site-tools").join("extracted-images.json")
        );
    }

    #[test]
    fn test_output_section_is_optional_and_base_url_trimmed() {
        let config = parse_config("[site]\nbase_url = \"https://example.com/\"\n").unwrap();
        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.output.dir, "target/site-tools");
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        assert!(parse_config("[site]\nbase_url = \"\"\n").is_err());
        assert!(parse_config("[output]\ndir = \"x\"\n").is_err());
    }
}
