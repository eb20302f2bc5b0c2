use crate::errors::{AppError, AppResult};
use crate::models::{JobRecord, JobType};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Nominal full working day, in minutes.
pub const DAILY_CAPACITY_MINUTES: f64 = 400.0;

/// Whether records without a date still count toward raw totals
/// (ticket counts, time and size sums). They never count toward man-days
/// or idle time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDatePolicy {
    #[default]
    CountInTotals,
    Exclude,
}

impl MissingDatePolicy {
    pub fn counts_in_totals(self) -> bool {
        self == MissingDatePolicy::CountInTotals
    }
}

/// The knobs the metrics core takes as input.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsConfig {
    pub daily_capacity_minutes: f64,
    pub missing_date_policy: MissingDatePolicy,
    pub default_job_type: JobType,
}

impl MetricsConfig {
    /// Whether a record takes part in aggregates under the missing-date policy.
    pub fn includes(&self, r: &JobRecord) -> bool {
        r.date.is_some() || self.missing_date_policy.counts_in_totals()
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            daily_capacity_minutes: DAILY_CAPACITY_MINUTES,
            missing_date_policy: MissingDatePolicy::default(),
            default_job_type: JobType::LiveJob,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default job-records CSV, used when `--input` is not given.
    #[serde(default)]
    pub data_file: String,
    #[serde(default = "default_daily_capacity")]
    pub daily_capacity_minutes: f64,
    #[serde(default)]
    pub missing_date_policy: MissingDatePolicy,
    #[serde(default = "default_job_type")]
    pub default_job_type: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_daily_capacity() -> f64 {
    DAILY_CAPACITY_MINUTES
}
fn default_job_type() -> String {
    JobType::LiveJob.label().to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: String::new(),
            daily_capacity_minutes: default_daily_capacity(),
            missing_date_policy: MissingDatePolicy::default(),
            default_job_type: default_job_type(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Top-level keys of the configuration file.
    pub const FIELDS: [&'static str; 5] = [
        "data_file",
        "daily_capacity_minutes",
        "missing_date_policy",
        "default_job_type",
        "log_level",
    ];

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("prodmetrics")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".prodmetrics")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("prodmetrics.conf")
    }

    /// Load the configuration, or the defaults when the file does not exist.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Write the default configuration file. Existing files are kept unless `force`.
    pub fn init(path: &Path, force: bool) -> AppResult<Self> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let cfg = Self::default();
        fs::write(path, serde_yaml::to_string(&cfg)?)?;
        Ok(cfg)
    }

    /// Keys absent from an existing file (they silently take their defaults).
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let yaml: Value = serde_yaml::from_str(&content)?;

        let Some(map) = yaml.as_mapping() else {
            return Ok(Self::FIELDS.to_vec());
        };

        Ok(Self::FIELDS
            .into_iter()
            .filter(|key| !map.contains_key(*key))
            .collect())
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.daily_capacity_minutes.is_finite() || self.daily_capacity_minutes < 0.0 {
            return Err(AppError::Config(format!(
                "daily_capacity_minutes must be a non-negative number, got {}",
                self.daily_capacity_minutes
            )));
        }
        Ok(())
    }

    pub fn metrics(&self) -> MetricsConfig {
        MetricsConfig {
            daily_capacity_minutes: self.daily_capacity_minutes,
            missing_date_policy: self.missing_date_policy,
            default_job_type: JobType::from_label(&self.default_job_type),
        }
    }
}
