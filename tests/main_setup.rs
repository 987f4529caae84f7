use campus_portal::{AppConfig, config::Env, error::ConfigError};
use serial_test::serial;
use std::{env, net::SocketAddr, panic};

const CONFIG_VARS: [&str; 3] = ["APP_ENV", "BIND_ADDR", "SEED_DEMO_DATA"];

// --- Setup/Teardown Utilities ---

/// Utility to run a test function and restore environment variables afterward
fn run_with_env<T, R>(test: T, cleanup_vars: Vec<&'static str>) -> R
where
    T: FnOnce() -> R + panic::UnwindSafe,
{
    // Save current environment variables
    let originals: Vec<(String, Option<String>)> = cleanup_vars
        .iter()
        .map(|&var| (var.to_string(), env::var(var).ok()))
        .collect();

    let result = panic::catch_unwind(test);

    // Restore original environment variables
    for (key, original_value) in originals.into_iter().rev() {
        unsafe {
            if let Some(val) = original_value {
                env::set_var(&key, val);
            } else {
                env::remove_var(&key);
            }
        }
    }

    match result {
        Ok(value) => value,
        Err(e) => panic::resume_unwind(e),
    }
}

/// Loads the config with exactly `vars` set among the config variables.
fn load_with(vars: &'static [(&'static str, &'static str)]) -> Result<AppConfig, ConfigError> {
    run_with_env(
        move || {
            unsafe {
                for var in CONFIG_VARS {
                    env::remove_var(var);
                }
                for (key, value) in vars {
                    env::set_var(key, value);
                }
            }
            AppConfig::load()
        },
        CONFIG_VARS.to_vec(),
    )
}

// --- Tests ---

#[test]
#[serial]
fn test_app_config_local_env_defaults() {
    let config = load_with(&[]).unwrap();

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
    assert!(config.seed_demo_data);
}

#[test]
#[serial]
fn test_app_config_production_starts_empty() {
    let config = load_with(&[("APP_ENV", "production")]).unwrap();

    assert_eq!(config.env, Env::Production);
    assert!(!config.seed_demo_data);
}

#[test]
#[serial]
fn test_app_config_explicit_overrides() {
    let config = load_with(&[
        ("APP_ENV", "Production"),
        ("BIND_ADDR", "127.0.0.1:8080"),
        ("SEED_DEMO_DATA", "yes"),
    ])
    .unwrap();

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.bind_addr.port(), 8080);
    assert!(config.seed_demo_data);
}

#[test]
#[serial]
fn test_app_config_rejects_unknown_env() {
    let err = load_with(&[("APP_ENV", "staging")]).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidValue { key: "APP_ENV", .. }));
}

#[test]
#[serial]
fn test_app_config_rejects_bad_bind_addr() {
    let err = load_with(&[("BIND_ADDR", "localhost")]).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidValue { key: "BIND_ADDR", .. }));
    assert!(err.to_string().contains("BIND_ADDR"));
}

#[test]
#[serial]
fn test_app_config_rejects_bad_seed_flag() {
    let err = load_with(&[("SEED_DEMO_DATA", "maybe")]).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidValue { key: "SEED_DEMO_DATA", .. }));
}

#[test]
fn test_app_config_default_needs_no_environment() {
    let config = AppConfig::default();

    assert_eq!(config.env, Env::Local);
    assert!(config.seed_demo_data);
    assert_eq!(config.bind_addr.port(), 3000);
}
