//! CLI configuration parsed from environment variables.

use std::path::PathBuf;

use board::config::{ConfigError, EditorConfig};

pub const AUTOSAVE_DIR_VAR: &str = "PINBOARD_AUTOSAVE_DIR";
pub const DEFAULT_AUTOSAVE_DIR: &str = ".pinboard";

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub editor: EditorConfig,
    /// Directory holding the file-backed auto-save slot.
    pub autosave_dir: PathBuf,
}

impl CliConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PINBOARD_AUTOSAVE_DIR`: default `.pinboard`
    /// - the editor variables read by [`EditorConfig::from_lookup`]
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownHitPolicy`] for an unrecognized
    /// `PINBOARD_HIT_POLICY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let editor = EditorConfig::from_lookup(|key| std::env::var(key).ok())?;
        let autosave_dir = std::env::var(AUTOSAVE_DIR_VAR)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_AUTOSAVE_DIR), PathBuf::from);
        Ok(Self { editor, autosave_dir })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
