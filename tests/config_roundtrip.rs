// File: tests/config_roundtrip.rs
use orthotrack::config::Config;
use orthotrack::context::{AppContext, TestContext};
use std::fs;

#[test]
fn test_missing_config_is_detected() {
    let ctx = TestContext::new();
    let err = Config::load(&ctx).unwrap_err();
    assert!(Config::is_missing_config_error(&err));
}

#[test]
fn test_load_or_init_writes_defaults() {
    let ctx = TestContext::new();
    let cfg = Config::load_or_init(&ctx).unwrap();
    assert_eq!(cfg, Config::default());
    assert!(ctx.get_config_file_path().unwrap().exists());

    let reloaded = Config::load(&ctx).unwrap();
    assert_eq!(reloaded, cfg);
}

#[test]
fn test_partial_file_uses_field_defaults() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    fs::write(&path, "forecast_horizon = 5\nrng_seed = 9\n").unwrap();

    let cfg = Config::load(&ctx).unwrap();
    assert_eq!(cfg.forecast_horizon, 5);
    assert_eq!(cfg.rng_seed, Some(9));
    assert_eq!(cfg.synthetic_count, 50);
    assert_eq!(cfg.staff_top_n, 10);
    assert_eq!(cfg.staff.len(), 14);
    assert!(!cfg.seed_on_start);
}

#[test]
fn test_malformed_file_is_an_error_not_missing() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    fs::write(&path, "forecast_horizon = \"three\"").unwrap();

    let err = Config::load_or_init(&ctx).unwrap_err();
    assert!(!Config::is_missing_config_error(&err));
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_save_then_load_roundtrip() {
    let ctx = TestContext::new();
    let cfg = Config {
        staff: vec!["ZED".to_string()],
        log_level: "debug".to_string(),
        ..Config::default()
    };
    cfg.save(&ctx).unwrap();

    let loaded = Config::load(&ctx).unwrap();
    assert_eq!(loaded.staff, vec!["ZED".to_string()]);
    assert_eq!(loaded.log_level_filter(), log::LevelFilter::Debug);
}

#[test]
fn test_unknown_log_level_falls_back_to_info() {
    let cfg = Config {
        log_level: "loud".to_string(),
        ..Config::default()
    };
    assert_eq!(cfg.log_level_filter(), log::LevelFilter::Info);
}

#[test]
fn test_unwritable_default_config_is_reported() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    // A directory squatting on the temp name makes the write fail
    fs::create_dir_all(path.with_extension("toml.tmp")).unwrap();

    let err = Config::load_or_init(&ctx).unwrap_err();
    assert!(err.to_string().contains("Failed to write default config"));
    assert!(!path.exists());
}
