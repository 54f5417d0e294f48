// ==========================================
// Citizenship Eligibility - Category Catalog
// ==========================================
// Statutory acquisition routes under the Greek Citizenship Code
// (L.3284/2004 as codified) plus the transitional provisions for
// births before the 1982/1984 reforms.
// Rule: the catalog is a compile-time table, never mutated at runtime
// ==========================================

use crate::domain::eligibility::{CostRange, TimeRange};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    BirthFatherPre1982,
    BirthMotherPre1984,
    BirthGreekParent,
    RecognitionByGreek,
    AdoptionByGreek,
    AncestryGrandparent,
    AncestryGreatGrandparent,
    PosthumousParentRecognition,
    BirthAndSchoolingInGreece,
    SchoolingInGreece,
    GreekUniversityGraduate,
    SpouseOfGreekWithChild,
    RefugeeOrStateless,
    GeneralNaturalization,
    Reacquisition,
}

impl CategoryId {
    pub const ALL: [CategoryId; 15] = [
        CategoryId::BirthFatherPre1982,
        CategoryId::BirthMotherPre1984,
        CategoryId::BirthGreekParent,
        CategoryId::RecognitionByGreek,
        CategoryId::AdoptionByGreek,
        CategoryId::AncestryGrandparent,
        CategoryId::AncestryGreatGrandparent,
        CategoryId::PosthumousParentRecognition,
        CategoryId::BirthAndSchoolingInGreece,
        CategoryId::SchoolingInGreece,
        CategoryId::GreekUniversityGraduate,
        CategoryId::SpouseOfGreekWithChild,
        CategoryId::RefugeeOrStateless,
        CategoryId::GeneralNaturalization,
        CategoryId::Reacquisition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::BirthFatherPre1982 => "birth_father_pre1982",
            CategoryId::BirthMotherPre1984 => "birth_mother_pre1984",
            CategoryId::BirthGreekParent => "birth_greek_parent",
            CategoryId::RecognitionByGreek => "recognition_by_greek",
            CategoryId::AdoptionByGreek => "adoption_by_greek",
            CategoryId::AncestryGrandparent => "ancestry_grandparent",
            CategoryId::AncestryGreatGrandparent => "ancestry_great_grandparent",
            CategoryId::PosthumousParentRecognition => "posthumous_parent_recognition",
            CategoryId::BirthAndSchoolingInGreece => "birth_and_schooling_in_greece",
            CategoryId::SchoolingInGreece => "schooling_in_greece",
            CategoryId::GreekUniversityGraduate => "greek_university_graduate",
            CategoryId::SpouseOfGreekWithChild => "spouse_of_greek_with_child",
            CategoryId::RefugeeOrStateless => "refugee_or_stateless",
            CategoryId::GeneralNaturalization => "general_naturalization",
            CategoryId::Reacquisition => "reacquisition",
        }
    }

    /// True for the ancestry-based naturalization tiers
    pub fn is_ancestry(&self) -> bool {
        matches!(
            self,
            CategoryId::AncestryGrandparent | CategoryId::AncestryGreatGrandparent
        )
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace('-', "_");
        CategoryId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == needle)
            .ok_or_else(|| format!("unknown category id: {}", s))
    }
}

// ==========================================
// EligibilityCategory - one catalog entry
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityCategory {
    pub id: CategoryId,
    pub legal_citation: &'static str,
    pub description: &'static str,
    pub cost_range: CostRange,
    pub estimated_duration: TimeRange,
    /// Rank in the result ordering (1 = first); None sorts after every ranked entry
    pub priority: Option<u8>,
}

const fn entry(
    id: CategoryId,
    legal_citation: &'static str,
    description: &'static str,
    cost: (u32, u32),
    months: (u32, u32),
    priority: Option<u8>,
) -> EligibilityCategory {
    EligibilityCategory {
        id,
        legal_citation,
        description,
        cost_range: CostRange::new(cost.0, cost.1),
        estimated_duration: TimeRange::new(months.0, months.1),
        priority,
    }
}

// Order: direct birth → recognition/adoption → ancestry tiers →
// schooling/declaratory → general naturalization → reacquisition
pub static CATEGORY_CATALOG: [EligibilityCategory; 15] = [
    entry(
        CategoryId::BirthFatherPre1982,
        "Art. 1 L.D. 3370/1955 (text before L.1250/1982)",
        "Born before 18 July 1982 to a Greek father",
        (150, 400),
        (6, 18),
        Some(1),
    ),
    entry(
        CategoryId::BirthMotherPre1984,
        "Art. 14 par. 2 L.1438/1984",
        "Born before 8 May 1984 to a Greek mother (declaration route)",
        (150, 400),
        (6, 18),
        Some(2),
    ),
    entry(
        CategoryId::BirthGreekParent,
        "Art. 1 par. 1 L.3284/2004",
        "Born to a Greek parent (acquired by birth)",
        (150, 400),
        (6, 18),
        Some(3),
    ),
    entry(
        CategoryId::RecognitionByGreek,
        "Art. 2 L.3284/2004",
        "Recognized as the child of a Greek citizen",
        (200, 600),
        (6, 18),
        Some(4),
    ),
    entry(
        CategoryId::AdoptionByGreek,
        "Art. 3 L.3284/2004",
        "Adopted as a minor by a Greek citizen",
        (200, 600),
        (6, 18),
        Some(5),
    ),
    entry(
        CategoryId::AncestryGrandparent,
        "Art. 10 L.3284/2004",
        "Naturalization of a person of Greek descent through a Greek grandparent",
        (500, 1500),
        (24, 48),
        Some(6),
    ),
    entry(
        CategoryId::AncestryGreatGrandparent,
        "Art. 10 L.3284/2004",
        "Naturalization of a person of Greek descent through a Greek great-grandparent",
        (700, 2000),
        (30, 60),
        Some(7),
    ),
    entry(
        CategoryId::PosthumousParentRecognition,
        "Art. 25 L.3284/2004",
        "Determination of the Greek citizenship of a deceased parent",
        (1500, 4000),
        (18, 36),
        None,
    ),
    entry(
        CategoryId::BirthAndSchoolingInGreece,
        "Art. 1A par. 1 L.3284/2004",
        "Born in Greece and enrolled in Greek primary school",
        (0, 200),
        (6, 12),
        Some(8),
    ),
    entry(
        CategoryId::SchoolingInGreece,
        "Art. 1A par. 2 L.3284/2004",
        "Successful attendance of six or more years of Greek schooling",
        (0, 200),
        (6, 12),
        Some(9),
    ),
    entry(
        CategoryId::GreekUniversityGraduate,
        "Art. 1A par. 3 L.3284/2004",
        "Graduate of a Greek higher-education institution",
        (0, 200),
        (6, 12),
        Some(10),
    ),
    entry(
        CategoryId::SpouseOfGreekWithChild,
        "Art. 5 par. 1(b) L.3284/2004",
        "Spouse of a Greek citizen with a child of the marriage",
        (700, 1500),
        (12, 36),
        Some(11),
    ),
    entry(
        CategoryId::RefugeeOrStateless,
        "Art. 5 par. 1(d) L.3284/2004",
        "Recognized refugee or stateless person",
        (100, 500),
        (12, 36),
        Some(12),
    ),
    entry(
        CategoryId::GeneralNaturalization,
        "Art. 5 par. 1(d) and Art. 5A L.3284/2004",
        "Naturalization after seven years of lawful residence",
        (1000, 2500),
        (24, 48),
        Some(13),
    ),
    entry(
        CategoryId::Reacquisition,
        "Art. 21 L.3284/2004",
        "Reacquisition of Greek citizenship previously lost",
        (300, 800),
        (12, 24),
        Some(14),
    ),
];

/// Catalog lookup; entries are laid out in `CategoryId` declaration order
pub fn category(id: CategoryId) -> &'static EligibilityCategory {
    &CATEGORY_CATALOG[id as usize]
}

/// Sort key for result ordering; unranked categories sort last
pub fn priority_rank(id: CategoryId) -> u16 {
    category(id)
        .priority
        .map(u16::from)
        .unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_id_once() {
        for id in CategoryId::ALL {
            let count = CATEGORY_CATALOG.iter().filter(|c| c.id == id).count();
            assert_eq!(count, 1, "{} must appear exactly once", id);
            assert_eq!(category(id).id, id);
        }
    }

    #[test]
    fn test_catalog_is_in_declaration_order() {
        for (index, id) in CategoryId::ALL.iter().enumerate() {
            assert_eq!(*id as usize, index);
            assert_eq!(CATEGORY_CATALOG[index].id, *id);
        }
    }

    #[test]
    fn test_priority_ranks_are_unique() {
        let mut ranks: Vec<u8> = CATEGORY_CATALOG.iter().filter_map(|c| c.priority).collect();
        let before = ranks.len();
        ranks.sort_unstable();
        ranks.dedup();
        assert_eq!(ranks.len(), before);
    }

    #[test]
    fn test_reacquisition_is_last_ranked() {
        let max = CATEGORY_CATALOG.iter().filter_map(|c| c.priority).max();
        assert_eq!(category(CategoryId::Reacquisition).priority, max);
        assert_eq!(priority_rank(CategoryId::PosthumousParentRecognition), u16::MAX);
    }

    #[test]
    fn test_category_id_round_trips_through_str() {
        for id in CategoryId::ALL {
            assert_eq!(id.as_str().parse::<CategoryId>(), Ok(id));
        }
        assert!("ancestry-grandparent".parse::<CategoryId>().is_ok());
        assert!("nope".parse::<CategoryId>().is_err());
    }
}
