use super::*;
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_guard() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers must hold [`env_guard`] so env mutations do not race.
unsafe fn clear_log_env() {
    unsafe {
        std::env::remove_var("LOG_DIR");
        std::env::remove_var("LOG_MAX_FILES");
    }
}

#[test]
fn log_config_defaults() {
    let _guard = env_guard();
    unsafe { clear_log_env() };

    let cfg = LogConfig::from_env();
    assert_eq!(cfg.dir, PathBuf::from(DEFAULT_LOG_DIR));
    assert_eq!(cfg.max_files, DEFAULT_LOG_MAX_FILES);
}

#[test]
fn log_config_reads_overrides_and_ignores_zero() {
    let _guard = env_guard();
    unsafe {
        clear_log_env();
        std::env::set_var("LOG_DIR", "/var/log/crm-assistant");
        std::env::set_var("LOG_MAX_FILES", "3");
    }

    let cfg = LogConfig::from_env();
    assert_eq!(cfg.dir, PathBuf::from("/var/log/crm-assistant"));
    assert_eq!(cfg.max_files, 3);

    unsafe { std::env::set_var("LOG_MAX_FILES", "0") };
    assert_eq!(LogConfig::from_env().max_files, DEFAULT_LOG_MAX_FILES);

    unsafe { clear_log_env() };
}

#[test]
fn file_appender_creates_directory_and_app_log() {
    let dir = std::env::temp_dir().join(format!("crm-assistant-logs-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let cfg = LogConfig { dir: dir.clone(), max_files: 2 };

    let mut appender = file_appender(&cfg).unwrap();
    appender.write_all(b"application startup\n").unwrap();
    appender.flush().unwrap();

    let names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert!(
        names.iter().any(|n| n.starts_with("app.") && n.ends_with(".log")),
        "unexpected log files: {names:?}"
    );

    let _ = std::fs::remove_dir_all(&dir);
}
