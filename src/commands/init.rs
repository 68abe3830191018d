//! Init and set commands - create and update the configuration file

use std::path::PathBuf;

use dialoguer::Confirm;

use crate::config::SorterConfig;
use crate::{Result, SortrError};

/// Execute the init command - create a fresh configuration file
///
/// # Errors
/// Returns an error if the watch directory does not exist, the ignore
/// character is invalid, or the file cannot be written.
pub fn execute(
    watch_dir: PathBuf,
    ignore_char: &str,
    ignored_names: Vec<String>,
    quiet: bool,
) -> Result<()> {
    let watch_dir = canonical_dir(watch_dir)?;

    let config_path = SorterConfig::config_path()?;
    if config_path.exists() && !quiet {
        let overwrite = Confirm::new()
            .with_prompt(format!(
                "A config file already exists at {}. Overwrite it?",
                config_path.display()
            ))
            .default(false)
            .interact()
            .map_err(|e| SortrError::InvalidInput(e.to_string()))?;
        if !overwrite {
            return Ok(());
        }
    }

    let config = SorterConfig::new(watch_dir, ignore_char, ignored_names)?;
    config.save()?;

    if !quiet {
        println!("Config file successfully created at {}", config_path.display());
    }
    Ok(())
}

/// Execute the set command - update configuration values in place.
///
/// `ignored_names` are appended, the other fields replaced. The caller saves.
///
/// # Errors
/// Returns an error if a new watch directory does not exist or the new
/// ignore character is invalid.
pub fn set(
    config: &mut SorterConfig,
    watch_dir: Option<PathBuf>,
    ignore_char: Option<String>,
    ignored_names: Vec<String>,
    quiet: bool,
) -> Result<()> {
    if let Some(dir) = watch_dir {
        config.watch_dir = canonical_dir(dir)?;
    }

    if let Some(symbol) = ignore_char {
        if symbol.chars().count() != 1 {
            return Err(SortrError::InvalidInput(format!(
                "The ignore character must be exactly one character long, got '{symbol}'"
            )));
        }
        config.ignore_char = symbol;
    }

    config.ignored_names.extend(ignored_names);

    if !quiet {
        println!("Configuration updated.");
    }
    Ok(())
}

/// Resolve a user-supplied path and require it to be an existing directory
pub(crate) fn canonical_dir(path: PathBuf) -> Result<PathBuf> {
    let resolved = path.canonicalize().map_err(|e| {
        SortrError::InvalidInput(format!("Cannot access path '{}': {e}", path.display()))
    })?;
    if !resolved.is_dir() {
        return Err(SortrError::InvalidInput(format!(
            "'{}' is not a directory",
            resolved.display()
        )));
    }
    Ok(resolved)
}
