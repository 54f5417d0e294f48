// ==========================================
// Citizenship Eligibility - Input Boundary
// ==========================================
// Responsibility: raw case record parsing + normalization to FamilyGraph
// Rule: textual flags never cross into the engine layer
// ==========================================

pub mod error;
pub mod normalizer;
pub mod raw_record;

pub use error::{ImportError, ImportResult};
pub use normalizer::CaseNormalizer;
pub use raw_record::{RawCaseRecord, RawPerson, RawScalar};
