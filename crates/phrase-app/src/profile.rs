use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use phrase_config::Config;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "PHRASE_BRIDGE_CONFIG";

/// Load a JSON config file; missing sections take their defaults
pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

/// Explicit path first, then `PHRASE_BRIDGE_CONFIG`, then the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let path = path
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));

    match path {
        Some(path) => load_config_file(&path),
        None => Ok(Config::new()),
    }
}

/// Write the effective environment config as a starting point for a file
pub fn write_config(path: &Path, config: &Config) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    tracing::info!("Wrote config to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.ui.target_language = "German".to_string();
        config.translator.timeout_seconds = 3;
        write_config(&path, &config).unwrap();

        let loaded = load_config(Some(&path)).unwrap();
        assert_eq!(loaded.ui.target_language, "German");
        assert_eq!(loaded.translator.timeout_seconds, 3);
    }

    #[test]
    fn test_bad_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));
    }
}
