// ==========================================
// Citizenship Eligibility - Engine Layer
// ==========================================
// Responsibility: pure rule evaluation over one FamilyGraph snapshot
// Rule: no I/O, no shared mutable state, every result carries a reason
// ==========================================

pub mod chain_analyzer;
pub mod classifier;
pub mod documents;
pub mod orchestrator;
pub mod path_optimizer;

pub use chain_analyzer::AncestryChainAnalyzer;
pub use classifier::CategoryClassifier;
pub use documents::{DocumentConditions, DocumentResolver};
pub use orchestrator::{EligibilityOrchestrator, EvaluationReport};
pub use path_optimizer::PathOptimizer;
