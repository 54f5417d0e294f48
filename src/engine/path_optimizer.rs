// ==========================================
// Citizenship Eligibility - Path Optimizer
// ==========================================
// Responsibility: chain analysis → ranked multi-step acquisition paths
// Input: ChainAnalysis
// Output: PathPlan (primary + alternatives)
// Rule: rule-priority selection, not cost minimization; the first
//       recommended candidate in generation order is primary
// Rule: unknown parent vital status is handled as alive
// ==========================================

use crate::config::{EngineConfig, StepEstimate};
use crate::domain::category::CategoryId;
use crate::domain::eligibility::{ChainAnalysis, ChainGap, Path, PathKind, PathPlan, PathStep};
use crate::domain::types::{Complexity, Relation, VitalStatus};
use std::sync::Arc;
use tracing::debug;

pub const NOTE_UNKNOWN_STATUS_ASSUMED_ALIVE: &str =
    "Parent's vital status is unknown; this route assumes the parent is alive and can file";
pub const NOTE_EXAMS_REQUIRED: &str =
    "Requires passing the Greek language and history examinations";
pub const NOTE_SOLE_OPTION: &str =
    "Only available route: no parent or grandparent holds Greek citizenship";

pub struct PathOptimizer {
    config: Arc<EngineConfig>,
}

impl PathOptimizer {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    /// Generates candidates and selects the primary path
    pub fn optimize(&self, analysis: &ChainAnalysis) -> PathPlan {
        Self::select(self.generate(analysis))
    }

    /// Generates candidate paths, in rule-priority order
    ///
    /// # Rules (non-exclusive)
    /// 1. Greek parent → one-step direct filing (recommended, Low)
    /// 2. gap with alive/unknown parent → parent files, then applicant (recommended)
    /// 3. gap with deceased parent → posthumous recognition route (recommended)
    ///    + direct ancestry fallback (not recommended)
    /// 4. only a great-grandparent qualifies → one-step ancestry (recommended, High)
    pub fn generate(&self, analysis: &ChainAnalysis) -> Vec<Path> {
        let mut candidates = Vec::new();

        // Rule 1
        if analysis.has_greek_parent {
            let parent = if analysis.greek_father {
                Relation::Father
            } else {
                Relation::Mother
            };
            candidates.push(Path::from_steps(
                PathKind::DirectParent,
                vec![self.step(
                    Relation::Applicant,
                    parent,
                    CategoryId::BirthGreekParent,
                    &self.config.costs.direct_filing,
                )],
                Complexity::Low,
                true,
            ));
        }

        // Rules 2 and 3, in gap order (paternal before maternal)
        for gap in &analysis.chain_gaps {
            match gap.missing_relation_parent_status {
                VitalStatus::Alive | VitalStatus::Unknown => {
                    candidates.push(self.parent_files_first(gap));
                }
                VitalStatus::Deceased => {
                    candidates.push(self.posthumous_route(gap));
                    candidates.push(self.ancestry_fallback(gap));
                }
            }
        }

        // Rule 4
        if analysis.has_greek_great_grandparent
            && !analysis.has_greek_grandparent
            && !analysis.has_greek_parent
        {
            if let Some(ancestor) = analysis.closest_greek_ancestor {
                candidates.push(
                    self.ancestry_only_path(ancestor)
                        .with_note(NOTE_SOLE_OPTION)
                        .with_note(NOTE_EXAMS_REQUIRED),
                );
            }
        }

        debug!(candidates = candidates.len(), "path candidates generated");
        candidates
    }

    /// First recommended candidate → primary; all others → alternatives
    pub fn select(candidates: Vec<Path>) -> PathPlan {
        let mut plan = PathPlan::default();
        for path in candidates {
            if plan.primary.is_none() && path.recommended {
                plan.primary = Some(path);
            } else {
                plan.alternatives.push(path);
            }
        }
        plan
    }

    /// One-step ancestry naturalization through `ancestor`
    ///
    /// Also the baseline for savings notes.
    pub fn ancestry_only_path(&self, ancestor: Relation) -> Path {
        let (category, estimate) = if ancestor.generation() >= 3 {
            (
                CategoryId::AncestryGreatGrandparent,
                &self.config.costs.ancestry_great_grandparent,
            )
        } else {
            (
                CategoryId::AncestryGrandparent,
                &self.config.costs.ancestry_naturalization,
            )
        };
        Path::from_steps(
            PathKind::AncestryOnly,
            vec![self.step(Relation::Applicant, ancestor, category, estimate)],
            Complexity::High,
            true,
        )
    }

    fn parent_files_first(&self, gap: &ChainGap) -> Path {
        let parent = gap.side.parent();
        let costs = &self.config.costs;
        let path = Path::from_steps(
            PathKind::ParentFilesFirst { side: gap.side },
            vec![
                self.step(
                    parent,
                    gap.greek_ancestor_relation,
                    CategoryId::BirthGreekParent,
                    &costs.parent_filing,
                ),
                self.step(
                    Relation::Applicant,
                    parent,
                    CategoryId::BirthGreekParent,
                    &costs.direct_filing,
                ),
            ],
            Complexity::Medium,
            true,
        );

        let baseline = self.ancestry_only_path(gap.greek_ancestor_relation);
        let note = savings_note(&path, &baseline);
        let path = path.with_savings_note(note).with_note(format!(
            "The {} first registers as the child of the Greek {}; the applicant then files as the child of a Greek {}",
            parent.label(),
            gap.greek_ancestor_relation.label(),
            parent.label()
        ));

        if gap.missing_relation_parent_status == VitalStatus::Unknown {
            path.with_note(NOTE_UNKNOWN_STATUS_ASSUMED_ALIVE)
        } else {
            path
        }
    }

    fn posthumous_route(&self, gap: &ChainGap) -> Path {
        let parent = gap.side.parent();
        let costs = &self.config.costs;
        Path::from_steps(
            PathKind::PosthumousRecognition { side: gap.side },
            vec![
                self.step(
                    Relation::Applicant,
                    parent,
                    CategoryId::PosthumousParentRecognition,
                    &costs.posthumous_recognition,
                ),
                self.step(
                    Relation::Applicant,
                    parent,
                    CategoryId::BirthGreekParent,
                    &costs.direct_filing,
                ),
            ],
            Complexity::High,
            true,
        )
        .with_note(format!(
            "Requires sufficient evidence that the deceased {} held Greek citizenship through the {}",
            parent.label(),
            gap.greek_ancestor_relation.label()
        ))
    }

    fn ancestry_fallback(&self, gap: &ChainGap) -> Path {
        let mut path = self.ancestry_only_path(gap.greek_ancestor_relation);
        path.kind = PathKind::AncestryFallback { side: gap.side };
        path.recommended = false;
        path.with_note(NOTE_EXAMS_REQUIRED)
    }

    fn step(
        &self,
        actor: Relation,
        relation_to_applicant: Relation,
        category_id: CategoryId,
        estimate: &StepEstimate,
    ) -> PathStep {
        PathStep {
            actor,
            relation_to_applicant,
            category_id,
            cost_estimate: estimate.cost,
            time_estimate: estimate.time,
        }
    }
}

/// Midpoint comparison of `path` against `baseline`
fn savings_note(path: &Path, baseline: &Path) -> String {
    let eur = baseline
        .total_cost
        .midpoint()
        .saturating_sub(path.total_cost.midpoint());
    let months = baseline
        .total_time
        .midpoint()
        .saturating_sub(path.total_time.midpoint());

    if eur == 0 && months == 0 {
        "No expected saving compared with ancestry-based naturalization, but the result is citizenship by birth".to_string()
    } else {
        format!(
            "Saves about EUR {} and {} months compared with ancestry-based naturalization, and avoids the language and history examinations",
            eur, months
        )
    }
}
