use std::{fs, path::Path};

use anyhow::{Context, Result};
use config::{Config, Environment};
use log::info;

use super::NetkiConfig;

pub fn get_default_config() -> &'static str {
    include_str!("../../resources/config.toml")
}

/// Loads the partner configuration from `path`, writing the default file
/// first if it does not exist yet. `NETKI_*` environment variables win over
/// file values.
pub fn load_configuration(path: &Path) -> Result<NetkiConfig> {
    if !path.exists() {
        write_config_to(path, get_default_config()).context("Could not create default config")?;
        info!(path:% = path.display(); "Created new configuration file");
    }

    let filename = path.to_str().context("Invalid config file path")?;

    let cfg = Config::builder()
        .add_source(config::File::with_name(filename).format(config::FileFormat::Toml))
        .add_source(Environment::with_prefix("NETKI").prefix_separator("_").separator("__"))
        .build()
        .context("Could not build config")?;

    cfg.try_deserialize().context("Invalid partner configuration")
}

/// Writes `contents` to `path` as a partner config file, creating missing
/// parent directories.
pub fn write_config_to(path: &Path, contents: &str) -> Result<()> {
    let dir = path.parent().filter(|dir| !dir.as_os_str().is_empty());
    if let Some(dir) = dir {
        fs::create_dir_all(dir).with_context(|| format!("Could not create config directory {}", dir.display()))?;
    }

    let mut text = contents.trim_end().to_string();
    text.push('\n');
    fs::write(path, text).with_context(|| format!("Could not write config file {}", path.display()))
}
