mod common;
use common::{temp_file, temp_path};
use prodmetrics::config::{Config, DAILY_CAPACITY_MINUTES, MissingDatePolicy};
use prodmetrics::models::JobType;
use std::path::Path;

#[test]
fn missing_file_loads_defaults() {
    let path = temp_path("cfg_missing", "conf");
    let cfg = Config::load(Path::new(&path)).expect("defaults");
    assert_eq!(cfg.daily_capacity_minutes, DAILY_CAPACITY_MINUTES);
    assert_eq!(cfg.missing_date_policy, MissingDatePolicy::CountInTotals);

    let metrics = cfg.metrics();
    assert_eq!(metrics.daily_capacity_minutes, 400.0);
    assert_eq!(metrics.default_job_type, JobType::LiveJob);
}

#[test]
fn partial_file_fills_defaults_and_reports_missing_keys() {
    let path = temp_file(
        "cfg_partial",
        "conf",
        "daily_capacity_minutes: 450\nmissing_date_policy: exclude\n",
    );
    let cfg = Config::load(Path::new(&path)).expect("valid config");
    assert_eq!(cfg.daily_capacity_minutes, 450.0);
    assert_eq!(cfg.missing_date_policy, MissingDatePolicy::Exclude);
    assert_eq!(cfg.default_job_type, "Live Job");

    let missing = Config::missing_fields(Path::new(&path)).expect("readable");
    assert_eq!(missing, vec!["data_file", "default_job_type", "log_level"]);
}

#[test]
fn negative_capacity_is_rejected() {
    let path = temp_file("cfg_negative", "conf", "daily_capacity_minutes: -10\n");
    assert!(Config::load(Path::new(&path)).is_err());
}

#[test]
fn malformed_file_is_an_error_not_a_panic() {
    let path = temp_file("cfg_malformed", "conf", "missing_date_policy: [oops\n");
    assert!(Config::load(Path::new(&path)).is_err());
}

#[test]
fn init_writes_defaults_and_refuses_to_overwrite() {
    let path = temp_path("cfg_init", "conf");
    let p = Path::new(&path);

    Config::init(p, false).expect("first init");
    assert!(Config::missing_fields(p).expect("readable").is_empty());
    assert!(Config::init(p, false).is_err());
    Config::init(p, true).expect("forced init");

    let cfg = Config::load(p).expect("reload");
    assert_eq!(cfg.log_level, "warn");
}
