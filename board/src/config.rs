//! Editor tuning: pick radii, drag threshold, and auto-save cadence.

use std::time::Duration;

use tracing::warn;

use crate::consts::{AUTOSAVE_INTERVAL_SECS, AUTOSAVE_KEY, DRAG_THRESHOLD_PX};
use crate::hit::{HitConfig, HitPolicy};

pub const HIT_POLICY_VAR: &str = "PINBOARD_HIT_POLICY";
pub const DRAG_THRESHOLD_VAR: &str = "PINBOARD_DRAG_THRESHOLD_PX";
pub const AUTOSAVE_SECS_VAR: &str = "PINBOARD_AUTOSAVE_SECS";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown {var}: {value} (expected 'first_match' or 'nearest')")]
    UnknownHitPolicy { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub hit: HitConfig,
    /// Screen pixels a held press must travel before it becomes a drag.
    pub drag_threshold_px: f64,
    pub autosave_interval: Duration,
    pub autosave_key: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit: HitConfig::default(),
            drag_threshold_px: DRAG_THRESHOLD_PX,
            autosave_interval: Duration::from_secs(AUTOSAVE_INTERVAL_SECS),
            autosave_key: AUTOSAVE_KEY.to_string(),
        }
    }
}

impl EditorConfig {
    /// Build config from named variables, using `lookup` to read them.
    ///
    /// Optional:
    /// - `PINBOARD_HIT_POLICY`: `first_match` (default) or `nearest`
    /// - `PINBOARD_DRAG_THRESHOLD_PX`: default 3
    /// - `PINBOARD_AUTOSAVE_SECS`: default 30
    ///
    /// Unparseable numbers fall back to their defaults with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownHitPolicy`] for an unrecognized policy.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let policy = parse_hit_policy(lookup(HIT_POLICY_VAR).as_deref())?;
        let drag_threshold_px = lookup(DRAG_THRESHOLD_VAR)
            .and_then(|raw| parse_or_warn::<f64>(DRAG_THRESHOLD_VAR, &raw))
            .filter(|v| v.is_finite() && *v >= 0.0)
            .unwrap_or(defaults.drag_threshold_px);
        let autosave_interval = lookup(AUTOSAVE_SECS_VAR)
            .and_then(|raw| parse_or_warn::<u64>(AUTOSAVE_SECS_VAR, &raw))
            .filter(|secs| *secs > 0)
            .map_or(defaults.autosave_interval, Duration::from_secs);

        Ok(Self { hit: HitConfig { policy, ..defaults.hit }, drag_threshold_px, autosave_interval, ..defaults })
    }
}

fn parse_or_warn<T: std::str::FromStr>(var: &str, raw: &str) -> Option<T> {
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(var, value = raw, "ignoring unparseable setting");
            None
        }
    }
}

fn parse_hit_policy(raw: Option<&str>) -> Result<HitPolicy, ConfigError> {
    match raw.map(str::trim).unwrap_or("first_match") {
        "first_match" | "" => Ok(HitPolicy::FirstMatch),
        "nearest" => Ok(HitPolicy::Nearest),
        other => Err(ConfigError::UnknownHitPolicy { var: HIT_POLICY_VAR, value: other.to_string() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
