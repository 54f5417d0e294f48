// ==========================================
// Citizenship Eligibility - Core Library
// ==========================================
// Positioning: decision support only; the case store and the form
// layer live outside this crate
// ==========================================

// ==========================================
// Modules
// ==========================================

// Domain layer - data shapes
pub mod domain;

// Engine layer - rules
pub mod engine;

// Input boundary - raw case records
pub mod importer;

// Configuration layer
pub mod config;

// Logging
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

pub use domain::types::{
    Complexity, Confidence, Flag, MaritalStatus, NameChangeReason, ProofStrength, Relation, Side,
    SpecialCase, VitalStatus,
};

pub use domain::{
    CategoryId, ChainAnalysis, DocumentRequirementMap, EligibilityResult, FamilyGraph, Path,
    PathPlan, Person,
};

pub use engine::{
    AncestryChainAnalyzer, CategoryClassifier, DocumentConditions, DocumentResolver,
    EligibilityOrchestrator, EvaluationReport, PathOptimizer,
};

pub use config::EngineConfig;
pub use importer::{CaseNormalizer, ImportError, RawCaseRecord};

// ==========================================
// Constants
// ==========================================

// Crate version, stamped into every EvaluationReport
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Greek Citizenship Eligibility Engine";
