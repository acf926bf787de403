//! Configuration read from the real process environment, kept in its own
//! test binary so no other test observes the variables

use strata_log::{Config, Format, Level, LogError};

fn set(key: &str, value: &str) {
    // SAFETY: this binary holds a single test, so no other thread reads the
    // environment concurrently.
    unsafe { std::env::set_var(key, value) };
}

#[test]
fn test_from_env_reads_process_environment() {
    set("LOG_LEVEL", "verbose");
    set("LOG_FORMAT", "simple");
    set("LOG_SILENT", "no");
    set("LOG_COLORS", "");

    let config = Config::from_env();
    assert_eq!(config.level, "verbose");
    assert_eq!(config.format, Format::Simple);
    assert!(!config.silent);
    assert!(!config.colors);

    let logger = strata_log::from_env().unwrap();
    assert_eq!(logger.level(), Level::Verbose);
    assert_eq!(logger.pipeline().renderer(), Format::Simple);
    assert_eq!(logger.pipeline().formatter_names(), vec!["errors", "timestamp"]);

    set("LOG_LEVEL", "loud");
    let err = strata_log::from_env().unwrap_err();
    assert!(matches!(err, LogError::Level(_)));
}
