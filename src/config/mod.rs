// ==========================================
// Citizenship Eligibility - Configuration Layer
// ==========================================
// Responsibility: thresholds and cost table shared by the engines
// Storage: optional JSON file, built-in defaults otherwise
// ==========================================

pub mod engine_config;
pub mod error;

pub use engine_config::{
    default_config_path, EngineConfig, PathCostTable, RuleThresholds, StepEstimate,
};
pub use error::{ConfigError, ConfigResult};
