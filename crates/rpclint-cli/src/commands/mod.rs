pub mod rules;
pub mod validate;

use std::path::{Path, PathBuf};

use rpclint_core::config::{LintConfig, CONFIG_FILE_NAME};

/// Resolve the config for a command. An explicit path must exist; otherwise
/// `rpclint.json` in the working directory is used when present.
pub(crate) fn load_config(cmd: &str, explicit: Option<&Path>) -> Result<LintConfig, i32> {
    let path: PathBuf = match explicit {
        Some(p) => {
            if !p.exists() {
                eprintln!("rpclint {}: config file not found: {}", cmd, p.display());
                return Err(2);
            }
            p.to_path_buf()
        }
        None => match std::env::current_dir() {
            Ok(cwd) => cwd.join(CONFIG_FILE_NAME),
            Err(e) => {
                eprintln!("rpclint {}: failed to get current directory: {}", cmd, e);
                return Err(2);
            }
        },
    };
    tracing::debug!(path = %path.display(), "loading config");
    Ok(LintConfig::load(&path))
}
