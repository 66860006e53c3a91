use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result, bail};
use log::{debug, info};
use log4rs::{
    Config,
    config::{Deserializers, RawConfig},
};

const EXTERNAL_CONFIG: &str = "netki_log4rs.yml";

/// Initializes logging.
///
/// Uses `netki_log4rs.yml` from the working directory when present, the
/// embedded console-only defaults otherwise. Fails if a logger is already
/// installed.
pub fn init_logging() -> Result<()> {
    let path = Path::new(EXTERNAL_CONFIG);

    if path.exists() {
        log4rs::init_file(path, Deserializers::default())
            .with_context(|| format!("Failed to load external {}", EXTERNAL_CONFIG))?;
        info!(path = EXTERNAL_CONFIG; "Logging initialized from external configuration");
        return Ok(());
    }

    let yaml_content = include_str!("../../resources/default_log4rs.yml");
    let raw_config: RawConfig =
        serde_yaml::from_str(yaml_content).context("Embedded logging configuration is invalid YAML")?;

    let (appenders, errors) = raw_config.appenders_lossy(&Deserializers::default());
    if !errors.is_empty() {
        bail!("Errors parsing embedded appenders: {:?}", errors);
    }

    let config = Config::builder()
        .appenders(appenders)
        .loggers(raw_config.loggers())
        .build(raw_config.root())
        .context("Failed to build logging config")?;

    log4rs::init_config(config).context("Failed to initialize logging from embedded config")?;

    debug!("Logging initialized from embedded defaults (no external {} found)", EXTERNAL_CONFIG);
    Ok(())
}

const REVEAL_PII_VAR: &str = "REVEAL_PII";

/// Whether `REVEAL_PII` is set to `true` or `1`. Read once per process.
fn reveal_pii() -> bool {
    static REVEAL: OnceLock<bool> = OnceLock::new();

    *REVEAL.get_or_init(|| {
        std::env::var(REVEAL_PII_VAR)
            .is_ok_and(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1"))
    })
}

/// Masks a secret or address, showing only start and end characters.
/// With `REVEAL_PII` set, returns the string unchanged.
pub fn mask_string(s: &str) -> String {
    if reveal_pii() {
        return s.to_string();
    }

    if s.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 12 {
        return "***".to_string();
    }

    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{}...{}", head, tail)
}
