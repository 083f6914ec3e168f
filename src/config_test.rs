use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use board::config::{AUTOSAVE_SECS_VAR, DRAG_THRESHOLD_VAR, HIT_POLICY_VAR};
use board::hit::HitPolicy;

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that touch the process environment.
fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_guard`].
unsafe fn clear_pinboard_env() {
    unsafe {
        std::env::remove_var(AUTOSAVE_DIR_VAR);
        std::env::remove_var(HIT_POLICY_VAR);
        std::env::remove_var(DRAG_THRESHOLD_VAR);
        std::env::remove_var(AUTOSAVE_SECS_VAR);
    }
}

#[test]
fn from_env_defaults() {
    let _env = env_guard();
    unsafe { clear_pinboard_env() };

    let cfg = CliConfig::from_env().unwrap();
    assert_eq!(cfg.editor, EditorConfig::default());
    assert_eq!(cfg.autosave_dir, PathBuf::from(".pinboard"));
}

#[test]
fn from_env_reads_overrides() {
    let _env = env_guard();
    unsafe {
        clear_pinboard_env();
        std::env::set_var(AUTOSAVE_DIR_VAR, "/tmp/pinboard-slots");
        std::env::set_var(HIT_POLICY_VAR, "nearest");
        std::env::set_var(AUTOSAVE_SECS_VAR, "5");
    }

    let cfg = CliConfig::from_env().unwrap();
    assert_eq!(cfg.autosave_dir, PathBuf::from("/tmp/pinboard-slots"));
    assert_eq!(cfg.editor.hit.policy, HitPolicy::Nearest);
    assert_eq!(cfg.editor.autosave_interval, Duration::from_secs(5));

    unsafe { clear_pinboard_env() };
}

#[test]
fn from_env_unknown_policy_errors() {
    let _env = env_guard();
    unsafe {
        clear_pinboard_env();
        std::env::set_var(HIT_POLICY_VAR, "random");
    }

    let err = CliConfig::from_env().unwrap_err().to_string();
    assert!(err.contains("unknown PINBOARD_HIT_POLICY"));

    unsafe { clear_pinboard_env() };
}

#[test]
fn blank_autosave_dir_uses_default() {
    let _env = env_guard();
    unsafe {
        clear_pinboard_env();
        std::env::set_var(AUTOSAVE_DIR_VAR, "  ");
    }

    let cfg = CliConfig::from_env().unwrap();
    assert_eq!(cfg.autosave_dir, PathBuf::from(DEFAULT_AUTOSAVE_DIR));

    unsafe { clear_pinboard_env() };
}
