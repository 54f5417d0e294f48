// ==========================================
// Citizenship Eligibility - Domain Layer
// ==========================================
// Responsibility: data shapes consumed by the engines
// Rule: no rule logic, no I/O
// ==========================================

pub mod category;
pub mod document;
pub mod eligibility;
pub mod family;
pub mod person;
pub mod types;

// Core re-exports
pub use category::{category, priority_rank, CategoryId, EligibilityCategory, CATEGORY_CATALOG};
pub use document::{DocumentRequirement, DocumentRequirementMap, DocumentSection};
pub use eligibility::{
    ChainAnalysis, ChainGap, CostRange, DeceasedInChain, EligibilityResult, Path, PathKind,
    PathPlan, PathStep, TimeRange,
};
pub use family::{
    ApplicantFacts, DivorceInfo, FamilyGraph, GrandparentSlots, GreatGrandparentSlots,
    NameChangeInfo,
};
pub use person::Person;
pub use types::{
    Complexity, Confidence, Flag, MaritalStatus, NameChangeReason, ProofStrength, Relation, Side,
    SpecialCase, VitalStatus,
};
