// ==========================================
// Citizenship Eligibility - Input Errors
// ==========================================
// Only structural problems are errors; bad values inside a
// well-formed record are tolerated (see normalizer).
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("case record is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("case record must be a JSON object, got {0}")]
    NotAnObject(String),

    #[error("case identifier is present but blank")]
    BlankCaseId,

    #[error("case identifier must be a string or a number, got {0}")]
    InvalidCaseId(&'static str),
}

pub type ImportResult<T> = Result<T, ImportError>;
