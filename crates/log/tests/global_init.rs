//! Global subscriber installation, kept in its own test binary

use strata_log::{Config, LogError};

#[test]
fn test_init_installs_once() {
    let config = Config {
        silent: true,
        ..Config::default()
    };

    let guard = strata_log::init_with(config.clone()).unwrap();
    assert!(guard.logger().is_silent());
    strata_log::info!("dropped by the silent logger");

    let err = strata_log::init_with(config).unwrap_err();
    assert!(matches!(err, LogError::Init(_)));
}
