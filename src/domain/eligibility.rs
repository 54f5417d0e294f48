// ==========================================
// Citizenship Eligibility - Engine Output Shapes
// ==========================================
// Produced fresh per evaluation; never persisted or cached here.
// ==========================================

use crate::domain::category::CategoryId;
use crate::domain::types::{Complexity, Confidence, Relation, Side, SpecialCase, VitalStatus};
use serde::{Deserialize, Serialize};
use std::ops::Add;

// ==========================================
// CostRange / TimeRange
// ==========================================
// EUR and months, inclusive bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CostRange {
    pub min_eur: u32,
    pub max_eur: u32,
}

impl CostRange {
    pub const fn new(min_eur: u32, max_eur: u32) -> Self {
        Self { min_eur, max_eur }
    }

    pub fn midpoint(&self) -> u32 {
        midpoint(self.min_eur, self.max_eur)
    }
}

impl Add for CostRange {
    type Output = CostRange;

    fn add(self, rhs: CostRange) -> CostRange {
        CostRange::new(
            self.min_eur.saturating_add(rhs.min_eur),
            self.max_eur.saturating_add(rhs.max_eur),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeRange {
    pub min_months: u32,
    pub max_months: u32,
}

impl TimeRange {
    pub const fn new(min_months: u32, max_months: u32) -> Self {
        Self {
            min_months,
            max_months,
        }
    }

    pub fn midpoint(&self) -> u32 {
        midpoint(self.min_months, self.max_months)
    }
}

impl Add for TimeRange {
    type Output = TimeRange;

    fn add(self, rhs: TimeRange) -> TimeRange {
        TimeRange::new(
            self.min_months.saturating_add(rhs.min_months),
            self.max_months.saturating_add(rhs.max_months),
        )
    }
}

/// Overflow-free midpoint; bounds given in either order
fn midpoint(a: u32, b: u32) -> u32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo + (hi - lo) / 2
}

// ==========================================
// Chain analysis
// ==========================================

/// A grandparent qualifies but the parent between them does not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainGap {
    pub side: Side,
    pub missing_relation_parent_status: VitalStatus,
    pub greek_ancestor_relation: Relation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeceasedInChain {
    pub relation: Relation,
    pub side: Side,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainAnalysis {
    pub greek_father: bool,
    pub greek_mother: bool,
    pub has_greek_parent: bool,
    pub has_greek_grandparent: bool,
    pub has_greek_great_grandparent: bool,
    pub closest_greek_ancestor: Option<Relation>,
    pub chain_gaps: Vec<ChainGap>,
    pub deceased_in_chain: Vec<DeceasedInChain>,
}

impl ChainAnalysis {
    /// Some ancestor qualifies but no parent does
    pub fn ancestry_only(&self) -> bool {
        !self.has_greek_parent && self.closest_greek_ancestor.is_some()
    }

    pub fn gap_on(&self, side: Side) -> Option<&ChainGap> {
        self.chain_gaps.iter().find(|g| g.side == side)
    }
}

// ==========================================
// Paths
// ==========================================

/// Which generation rule produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PathKind {
    DirectParent,
    ParentFilesFirst { side: Side },
    PosthumousRecognition { side: Side },
    AncestryFallback { side: Side },
    AncestryOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStep {
    /// Who files this step
    pub actor: Relation,
    /// Whose status the filing relies on, relative to the applicant
    pub relation_to_applicant: Relation,
    pub category_id: CategoryId,
    pub cost_estimate: CostRange,
    pub time_estimate: TimeRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    pub kind: PathKind,
    pub steps: Vec<PathStep>,
    pub total_cost: CostRange,
    pub total_time: TimeRange,
    pub complexity: Complexity,
    pub recommended: bool,
    pub savings_note: Option<String>,
    pub notes: Vec<String>,
}

impl Path {
    /// Builds a path, summing step estimates into the totals
    pub fn from_steps(
        kind: PathKind,
        steps: Vec<PathStep>,
        complexity: Complexity,
        recommended: bool,
    ) -> Self {
        let total_cost = steps
            .iter()
            .fold(CostRange::default(), |acc, s| acc + s.cost_estimate);
        let total_time = steps
            .iter()
            .fold(TimeRange::default(), |acc, s| acc + s.time_estimate);
        Self {
            kind,
            steps,
            total_cost,
            total_time,
            complexity,
            recommended,
            savings_note: None,
            notes: Vec::new(),
        }
    }

    pub fn with_savings_note(mut self, note: String) -> Self {
        self.savings_note = Some(note);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// Candidates after selection: first recommended candidate is primary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPlan {
    pub primary: Option<Path>,
    pub alternatives: Vec<Path>,
}

impl PathPlan {
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.alternatives.is_empty()
    }

    /// Primary first, then alternatives in generation order
    pub fn all(&self) -> impl Iterator<Item = &Path> {
        self.primary.iter().chain(self.alternatives.iter())
    }
}

// ==========================================
// EligibilityResult - one matched category
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub category_id: CategoryId,
    pub confidence: Confidence,
    pub reason: String,
    pub recommendation: Option<String>,
    pub alternative_path: Option<Path>,
    pub warnings: Vec<String>,
    pub special_case: SpecialCase,
}

impl EligibilityResult {
    pub fn new(category_id: CategoryId, confidence: Confidence, reason: impl Into<String>) -> Self {
        Self {
            category_id,
            confidence,
            reason: reason.into(),
            recommendation: None,
            alternative_path: None,
            warnings: Vec::new(),
            special_case: SpecialCase::None,
        }
    }
}
