//! Site config location, resolved from the environment.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable naming the directory that holds the site config.
pub const CONFIG_DIR_ENV: &str = "DEVFLAGS_CONFIG_DIR";

/// File name of the flag config inside the site config directory.
pub const CONFIG_FILE_NAME: &str = "devflags.yaml";

/// Flag config path inside a site config directory.
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Resolve the flag config path from `$DEVFLAGS_CONFIG_DIR`.
///
/// An unset variable is fatal before any operation runs.
pub fn config_path_from_env() -> Result<PathBuf> {
    let dir = env::var_os(CONFIG_DIR_ENV).ok_or(Error::EnvironmentMissing {
        name: CONFIG_DIR_ENV,
    })?;
    Ok(config_path(Path::new(&dir)))
}
