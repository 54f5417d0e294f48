// ==========================================
// Citizenship Eligibility - Person
// ==========================================
// Every ancestor slot holds one of these; absent input becomes
// `Person::default()` (unknown nationality, unknown vital status).
// ==========================================

use crate::domain::types::{Flag, VitalStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: Option<String>,
    pub birth_place: Option<String>,
    pub nationality_flag: Flag,         // holds Greek citizenship
    pub vital_status: VitalStatus,
    pub death_date: Option<NaiveDate>,
    pub death_place: Option<String>,
    pub has_documentation: Option<bool>, // caller-reported, not verified
}

impl Person {
    /// Builds a person with only the nationality flag set
    pub fn with_nationality(flag: Flag) -> Self {
        Self {
            nationality_flag: flag,
            ..Self::default()
        }
    }

    /// A person qualifies only on an asserted-true nationality flag
    pub fn qualifies(&self) -> bool {
        self.nationality_flag.is_yes()
    }

    pub fn is_deceased(&self) -> bool {
        matches!(self.vital_status, VitalStatus::Deceased)
    }
}
