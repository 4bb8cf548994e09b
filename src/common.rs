use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use log::{debug, info};

pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");
pub const PROJECT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable to override the config directory.
///
/// Example usage in tests:
///   export STAKEHOLDER_CONFIG_DIR="/tmp/test-config/stakeholder"
const ENV_CONFIG_DIR_OVERRIDE: &str = "STAKEHOLDER_CONFIG_DIR";

/// Returns the project data directory (log files), creating it if needed.
///
/// Returns: Path to `~/.local/share/stakeholder` (or equivalent)
pub fn project_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow!(
            "Unable to determine data directory. Ensure XDG_DATA_HOME or HOME environment variable is set"
        )
    })?;

    let project_data_dir = data_dir.join(PROJECT_NAME);
    ensure_directory(&project_data_dir)?;

    Ok(project_data_dir)
}

/// Returns the project config directory without creating it.
///
/// `STAKEHOLDER_CONFIG_DIR` wins when set; it must be absolute.
///
/// Returns: Path to `~/.config/stakeholder` (or platform equivalent)
pub fn project_config_dir() -> Result<PathBuf> {
    if let Ok(override_dir) = env::var(ENV_CONFIG_DIR_OVERRIDE) {
        let path = PathBuf::from(&override_dir);

        if !path.is_absolute() {
            bail!("{ENV_CONFIG_DIR_OVERRIDE} must be an absolute path: {override_dir}");
        }

        info!(
            "Using config directory override from {ENV_CONFIG_DIR_OVERRIDE}: {}",
            path.display()
        );
        return Ok(path);
    }

    let config_dir = dirs::config_dir().ok_or_else(|| {
        anyhow!(
            "Unable to determine config directory. Ensure XDG_CONFIG_HOME or HOME environment variable is set"
        )
    })?;

    Ok(config_dir.join(PROJECT_NAME))
}

/// Creates `dir` and any missing parents. Idempotent.
fn ensure_directory(dir: &std::path::Path) -> Result<()> {
    debug!("ensuring directory: {}", dir.display());
    fs::create_dir_all(dir)
        .with_context(|| format!("Unable to create directory: {}", dir.display()))?;
    Ok(())
}
