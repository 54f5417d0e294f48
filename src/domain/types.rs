// ==========================================
// Citizenship Eligibility - Domain Types
// ==========================================
// Closed enumerations shared by every engine.
// Rule: unknown is a first-class value, never coerced to false/true
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Tri-state flag
// ==========================================
// Only `Yes` qualifies; `No` and `Unknown` both fail a rule check,
// but are kept apart so callers can tell "asserted false" from "never asked".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flag {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Flag {
    pub fn is_yes(self) -> bool {
        matches!(self, Flag::Yes)
    }

    /// Parse a textual flag encoding.
    ///
    /// # Rules
    /// - "true" / "yes" / "y" / "1" → Yes
    /// - "false" / "no" / "n" / "0" → No
    /// - anything else (including "" and "unknown") → Unknown
    pub fn from_text(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Flag::Yes,
            "false" | "no" | "n" | "0" => Flag::No,
            _ => Flag::Unknown,
        }
    }
}

impl From<bool> for Flag {
    fn from(value: bool) -> Self {
        if value {
            Flag::Yes
        } else {
            Flag::No
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flag::Yes => write!(f, "YES"),
            Flag::No => write!(f, "NO"),
            Flag::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ==========================================
// Vital status
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VitalStatus {
    Alive,
    Deceased,
    #[default]
    Unknown,
}

impl VitalStatus {
    pub fn from_text(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "alive" | "living" => VitalStatus::Alive,
            "deceased" | "dead" => VitalStatus::Deceased,
            _ => VitalStatus::Unknown,
        }
    }
}

impl fmt::Display for VitalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VitalStatus::Alive => write!(f, "ALIVE"),
            VitalStatus::Deceased => write!(f, "DECEASED"),
            VitalStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ==========================================
// Side of the family
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    Paternal,
    Maternal,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Paternal, Side::Maternal];

    /// The parent standing between the applicant and this side's grandparents
    pub fn parent(self) -> Relation {
        match self {
            Side::Paternal => Relation::Father,
            Side::Maternal => Relation::Mother,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Paternal => write!(f, "PATERNAL"),
            Side::Maternal => write!(f, "MATERNAL"),
        }
    }
}

// ==========================================
// Relation to the applicant (fixed slot names)
// ==========================================
// Great-grandparent slots are the fathers of the four grandparents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Relation {
    Applicant,
    Father,
    Mother,
    PaternalGrandfather,
    PaternalGrandmother,
    MaternalGrandfather,
    MaternalGrandmother,
    PaternalGrandfatherFather,
    PaternalGrandmotherFather,
    MaternalGrandfatherFather,
    MaternalGrandmotherFather,
}

impl Relation {
    /// Fixed grandparent scan order
    pub const GRANDPARENTS: [Relation; 4] = [
        Relation::PaternalGrandfather,
        Relation::PaternalGrandmother,
        Relation::MaternalGrandfather,
        Relation::MaternalGrandmother,
    ];

    /// Fixed great-grandparent scan order
    pub const GREAT_GRANDPARENTS: [Relation; 4] = [
        Relation::PaternalGrandfatherFather,
        Relation::PaternalGrandmotherFather,
        Relation::MaternalGrandfatherFather,
        Relation::MaternalGrandmotherFather,
    ];

    /// Generation distance from the applicant (0 = applicant)
    pub fn generation(self) -> u8 {
        match self {
            Relation::Applicant => 0,
            Relation::Father | Relation::Mother => 1,
            Relation::PaternalGrandfather
            | Relation::PaternalGrandmother
            | Relation::MaternalGrandfather
            | Relation::MaternalGrandmother => 2,
            _ => 3,
        }
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Relation::Applicant => None,
            Relation::Father
            | Relation::PaternalGrandfather
            | Relation::PaternalGrandmother
            | Relation::PaternalGrandfatherFather
            | Relation::PaternalGrandmotherFather => Some(Side::Paternal),
            _ => Some(Side::Maternal),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Relation::Applicant => "applicant",
            Relation::Father => "father",
            Relation::Mother => "mother",
            Relation::PaternalGrandfather => "paternal grandfather",
            Relation::PaternalGrandmother => "paternal grandmother",
            Relation::MaternalGrandfather => "maternal grandfather",
            Relation::MaternalGrandmother => "maternal grandmother",
            Relation::PaternalGrandfatherFather => "father of the paternal grandfather",
            Relation::PaternalGrandmotherFather => "father of the paternal grandmother",
            Relation::MaternalGrandfatherFather => "father of the maternal grandfather",
            Relation::MaternalGrandmotherFather => "father of the maternal grandmother",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// Confidence
// ==========================================
// Order: Low < Medium < High
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Confidence::Low => write!(f, "low"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::High => write!(f, "high"),
        }
    }
}

// ==========================================
// Special case attached to the ancestry result
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecialCase {
    #[default]
    None,
    ParentCanApplyFirst,
    DeceasedParentInChain,
}

impl fmt::Display for SpecialCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecialCase::None => write!(f, "NONE"),
            SpecialCase::ParentCanApplyFirst => write!(f, "PARENT_CAN_APPLY_FIRST"),
            SpecialCase::DeceasedParentInChain => write!(f, "DECEASED_PARENT_IN_CHAIN"),
        }
    }
}

// ==========================================
// Path complexity
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

// ==========================================
// Parents' marital status
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaritalStatus {
    Married,
    Divorced,
    NeverMarried,
    Widowed,
    #[default]
    Unknown,
}

impl MaritalStatus {
    pub fn from_text(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "married" => MaritalStatus::Married,
            "divorced" => MaritalStatus::Divorced,
            "never_married" | "unmarried" | "single" | "not_married" => {
                MaritalStatus::NeverMarried
            }
            "widowed" => MaritalStatus::Widowed,
            _ => MaritalStatus::Unknown,
        }
    }
}

// ==========================================
// Name change metadata
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NameChangeReason {
    Naturalization,
    Marriage,
    CourtOrder,
    Immigration,
    #[default]
    Other,
}

impl NameChangeReason {
    pub fn from_text(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "naturalization" | "naturalisation" => NameChangeReason::Naturalization,
            "marriage" => NameChangeReason::Marriage,
            "court_order" | "court" => NameChangeReason::CourtOrder,
            "immigration" => NameChangeReason::Immigration,
            _ => NameChangeReason::Other,
        }
    }
}

// ==========================================
// Caller-supplied hint on the strength of ancestry proof
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProofStrength {
    Strong,
    #[default]
    Moderate,
    Weak,
}

impl ProofStrength {
    pub fn from_text(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strong" => Some(ProofStrength::Strong),
            "moderate" | "medium" => Some(ProofStrength::Moderate),
            "weak" => Some(ProofStrength::Weak),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_from_text() {
        assert_eq!(Flag::from_text("true"), Flag::Yes);
        assert_eq!(Flag::from_text(" YES "), Flag::Yes);
        assert_eq!(Flag::from_text("1"), Flag::Yes);
        assert_eq!(Flag::from_text("false"), Flag::No);
        assert_eq!(Flag::from_text("n"), Flag::No);
        assert_eq!(Flag::from_text(""), Flag::Unknown);
        assert_eq!(Flag::from_text("maybe"), Flag::Unknown);
    }

    #[test]
    fn test_relation_generation_and_side() {
        assert_eq!(Relation::Father.generation(), 1);
        assert_eq!(Relation::MaternalGrandmother.generation(), 2);
        assert_eq!(Relation::PaternalGrandmotherFather.generation(), 3);
        assert_eq!(Relation::PaternalGrandmotherFather.side(), Some(Side::Paternal));
        assert_eq!(Relation::MaternalGrandfather.side(), Some(Side::Maternal));
        assert_eq!(Relation::Applicant.side(), None);
    }

    #[test]
    fn test_marital_status_aliases() {
        assert_eq!(MaritalStatus::from_text("never-married"), MaritalStatus::NeverMarried);
        assert_eq!(MaritalStatus::from_text("Single"), MaritalStatus::NeverMarried);
        assert_eq!(MaritalStatus::from_text("DIVORCED"), MaritalStatus::Divorced);
        assert_eq!(MaritalStatus::from_text("???"), MaritalStatus::Unknown);
    }

    #[test]
    fn test_name_change_reason_defaults_to_other() {
        assert_eq!(NameChangeReason::from_text("court order"), NameChangeReason::CourtOrder);
        assert_eq!(NameChangeReason::from_text("anglicised"), NameChangeReason::Other);
    }
}
