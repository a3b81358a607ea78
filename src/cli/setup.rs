use crate::config::AppConfig;
use anyhow::Context;

/// Writes a commented default configuration file, refusing to overwrite an
/// existing one.
pub fn run() -> anyhow::Result<()> {
    let path = AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
provider:
  base_url: "https://www.tefas.gov.tr"
  # Fetch timeout in seconds; expiry counts as a fetch failure.
  timeout_secs: 10
  # Extra attempts after the first. 0 = single attempt.
  retries: 0
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
