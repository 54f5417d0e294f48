// ==========================================
// Citizenship Eligibility - Document Requirements
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Section of the application file; declaration order is output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSection {
    Applicant,
    Parent,
    Spouse,
    Children,
    Ancestry,
    General,
}

impl fmt::Display for DocumentSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSection::Applicant => write!(f, "applicant"),
            DocumentSection::Parent => write!(f, "parent"),
            DocumentSection::Spouse => write!(f, "spouse"),
            DocumentSection::Children => write!(f, "children"),
            DocumentSection::Ancestry => write!(f, "ancestry"),
            DocumentSection::General => write!(f, "general"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequirement {
    pub id: String,
    pub name: String,
    pub required: bool,
    pub legal_ref: String,
    pub is_foreign_issued: bool,
    pub alternatives: Vec<String>,
}

pub type DocumentRequirementMap = BTreeMap<DocumentSection, Vec<DocumentRequirement>>;
