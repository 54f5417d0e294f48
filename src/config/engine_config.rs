// ==========================================
// Citizenship Eligibility - Engine Configuration
// ==========================================
// Responsibility: rule thresholds, statutory cutoff dates, step cost table
// Storage: optional JSON file; every key falls back to its default
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::eligibility::{CostRange, TimeRange};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "citizenship-eligibility";
pub const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// RuleThresholds
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleThresholds {
    /// Births strictly before this date use the father-only rule
    pub father_route_cutoff: NaiveDate,
    /// Births strictly before this date use the mother declaration rule
    pub mother_route_cutoff: NaiveDate,
    pub min_schooling_years: u32,
    pub min_birth_schooling_years: u32,
    pub min_residence_years: u32,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            father_route_cutoff: ymd(1982, 7, 18),
            mother_route_cutoff: ymd(1984, 5, 8),
            min_schooling_years: 6,
            min_birth_schooling_years: 1,
            min_residence_years: 7,
        }
    }
}

// ==========================================
// StepEstimate / PathCostTable
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEstimate {
    pub cost: CostRange,
    pub time: TimeRange,
}

impl StepEstimate {
    pub const fn new(cost: (u32, u32), months: (u32, u32)) -> Self {
        Self {
            cost: CostRange::new(cost.0, cost.1),
            time: TimeRange::new(months.0, months.1),
        }
    }
}

/// Cost/time per filing kind used to build path steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathCostTable {
    pub direct_filing: StepEstimate,
    pub parent_filing: StepEstimate,
    pub posthumous_recognition: StepEstimate,
    pub ancestry_naturalization: StepEstimate,
    pub ancestry_great_grandparent: StepEstimate,
}

impl Default for PathCostTable {
    fn default() -> Self {
        Self {
            direct_filing: StepEstimate::new((150, 400), (6, 18)),
            parent_filing: StepEstimate::new((150, 400), (6, 18)),
            posthumous_recognition: StepEstimate::new((1500, 4000), (18, 36)),
            ancestry_naturalization: StepEstimate::new((500, 1500), (24, 48)),
            ancestry_great_grandparent: StepEstimate::new((700, 2000), (30, 60)),
        }
    }
}

// ==========================================
// EngineConfig
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rules: RuleThresholds,
    pub costs: PathCostTable,
}

impl EngineConfig {
    /// Loads and validates a JSON config file
    ///
    /// # Parameters
    /// - path: config file path; missing keys take their defaults
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: shown.clone(),
            source,
        })?;
        let config: EngineConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: shown.clone(),
                source,
            })?;

        config.validate()?;
        info!(path = %shown, "engine config loaded");
        Ok(config)
    }

    /// Explicit path → must load; otherwise the default location if present,
    /// else built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        if let Some(p) = path {
            return Self::load_from_file(p);
        }

        match default_config_path() {
            Some(p) if p.is_file() => Self::load_from_file(p),
            _ => {
                debug!("no config file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// Rejects inverted ranges and cutoff ordering mistakes
    pub fn validate(&self) -> ConfigResult<()> {
        let rules = &self.rules;
        if rules.mother_route_cutoff < rules.father_route_cutoff {
            return Err(ConfigError::InvalidValue {
                key: "rules.mother_route_cutoff".to_string(),
                message: format!(
                    "{} precedes father_route_cutoff {}",
                    rules.mother_route_cutoff, rules.father_route_cutoff
                ),
            });
        }
        if rules.min_residence_years == 0 {
            return Err(ConfigError::InvalidValue {
                key: "rules.min_residence_years".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        let costs = &self.costs;
        let steps = [
            ("costs.direct_filing", &costs.direct_filing),
            ("costs.parent_filing", &costs.parent_filing),
            ("costs.posthumous_recognition", &costs.posthumous_recognition),
            ("costs.ancestry_naturalization", &costs.ancestry_naturalization),
            ("costs.ancestry_great_grandparent", &costs.ancestry_great_grandparent),
        ];
        for (key, step) in steps {
            if step.cost.min_eur > step.cost.max_eur || step.time.min_months > step.time.max_months
            {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "min exceeds max".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// `<platform config dir>/citizenship-eligibility/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}
