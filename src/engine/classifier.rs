// ==========================================
// Citizenship Eligibility - Category Classifier
// ==========================================
// Responsibility: statutory rule battery → ordered EligibilityResult list
// Input: FamilyGraph + ChainAnalysis + PathPlan
// Output: results sorted by the catalog priority table (may be empty)
// Rule: every rule is evaluated; rules are independent and non-exclusive
// Rule: ancestry-only fires only when NO parent qualifies
// Rule: absent birth date skips the date-cutoff rules
// ==========================================

use crate::config::EngineConfig;
use crate::domain::category::{category, priority_rank, CategoryId};
use crate::domain::eligibility::{ChainAnalysis, EligibilityResult, PathKind, PathPlan};
use crate::domain::family::FamilyGraph;
use crate::domain::types::{Confidence, ProofStrength, Relation, SpecialCase, VitalStatus};
use std::sync::Arc;
use tracing::debug;

pub const WARN_WEAK_PROOF: &str =
    "Ancestry evidence was reported as weak; the consulate may request additional records";
pub const WARN_UNKNOWN_PARENT_STATUS: &str =
    "Parent's vital status is unknown and was assumed alive; confirm before filing";

/// Everything a rule may look at, borrowed for one evaluation
struct RuleContext<'a> {
    graph: &'a FamilyGraph,
    analysis: &'a ChainAnalysis,
    plan: &'a PathPlan,
}

type Rule = fn(&CategoryClassifier, &RuleContext<'_>) -> Option<EligibilityResult>;

pub struct CategoryClassifier {
    config: Arc<EngineConfig>,
}

impl CategoryClassifier {
    /// Rule battery in declaration order; output order comes from the priority sort
    const RULES: [Rule; 13] = [
        Self::rule_father_pre_1982,
        Self::rule_mother_pre_1984,
        Self::rule_greek_parent,
        Self::rule_recognition,
        Self::rule_adoption,
        Self::rule_ancestry_only,
        Self::rule_birth_and_schooling,
        Self::rule_schooling,
        Self::rule_university,
        Self::rule_spouse_with_child,
        Self::rule_refugee_or_stateless,
        Self::rule_residence,
        Self::rule_reacquisition,
    ];

    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    /// Classifies the case
    ///
    /// # Returns
    /// - matching categories, ordered by catalog priority (stable on ties)
    /// - empty Vec when no rule fires (valid outcome)
    pub fn classify(
        &self,
        graph: &FamilyGraph,
        analysis: &ChainAnalysis,
        plan: &PathPlan,
    ) -> Vec<EligibilityResult> {
        let ctx = RuleContext {
            graph,
            analysis,
            plan,
        };

        let mut results: Vec<EligibilityResult> = Self::RULES
            .iter()
            .filter_map(|rule| rule(self, &ctx))
            .inspect(|r| {
                debug!(
                    category = %r.category_id,
                    citation = category(r.category_id).legal_citation,
                    confidence = %r.confidence,
                    "rule fired"
                )
            })
            .collect();

        results.sort_by_key(|r| priority_rank(r.category_id));
        results
    }

    // ==========================================
    // Direct birth routes
    // ==========================================

    fn rule_father_pre_1982(&self, ctx: &RuleContext<'_>) -> Option<EligibilityResult> {
        let birth = ctx.graph.applicant.birth_date?;
        let cutoff = self.config.rules.father_route_cutoff;
        if birth < cutoff && ctx.analysis.greek_father {
            return Some(EligibilityResult::new(
                CategoryId::BirthFatherPre1982,
                Confidence::High,
                format!("Born {} (before {}) to a Greek father", birth, cutoff),
            ));
        }
        None
    }

    fn rule_mother_pre_1984(&self, ctx: &RuleContext<'_>) -> Option<EligibilityResult> {
        let birth = ctx.graph.applicant.birth_date?;
        let cutoff = self.config.rules.mother_route_cutoff;
        if birth < cutoff && ctx.analysis.greek_mother && !ctx.analysis.greek_father {
            return Some(EligibilityResult::new(
                CategoryId::BirthMotherPre1984,
                Confidence::High,
                format!(
                    "Born {} (before {}) to a Greek mother and a non-Greek father",
                    birth, cutoff
                ),
            ));
        }
        None
    }

    fn rule_greek_parent(&self, ctx: &RuleContext<'_>) -> Option<EligibilityResult> {
        let a = ctx.analysis;
        if !a.has_greek_parent {
            return None;
        }
        let who = match (a.greek_father, a.greek_mother) {
            (true, true) => "Both parents hold",
            (true, false) => "Father holds",
            _ => "Mother holds",
        };
        Some(EligibilityResult::new(
            CategoryId::BirthGreekParent,
            Confidence::High,
            format!("{} Greek citizenship", who),
        ))
    }

    // ==========================================
    // Recognition / adoption
    // ==========================================

    fn rule_recognition(&self, ctx: &RuleContext<'_>) -> Option<EligibilityResult> {
        ctx.graph.applicant.recognized_by_greek.is_yes().then(|| {
            EligibilityResult::new(
                CategoryId::RecognitionByGreek,
                Confidence::High,
                "Recognized as the child of a Greek citizen",
            )
        })
    }

    fn rule_adoption(&self, ctx: &RuleContext<'_>) -> Option<EligibilityResult> {
        ctx.graph.applicant.adopted_by_greek.is_yes().then(|| {
            EligibilityResult::new(
                CategoryId::AdoptionByGreek,
                Confidence::High,
                "Adopted by a Greek citizen",
            )
        })
    }

    // ==========================================
    // Ancestry-only naturalization
    // ==========================================

    /// Fires only when an ancestor qualifies and no parent does
    ///
    /// # Rules
    /// - tier: grandparent → AncestryGrandparent, great-grandparent → AncestryGreatGrandparent
    /// - special case follows the primary path (parent-files-first / posthumous / none)
    /// - confidence Medium, Low on a weak proof hint
    fn rule_ancestry_only(&self, ctx: &RuleContext<'_>) -> Option<EligibilityResult> {
        let a = ctx.analysis;
        if !a.ancestry_only() {
            return None;
        }
        let ancestor = a.closest_greek_ancestor?;

        let category = if ancestor.generation() >= 3 {
            CategoryId::AncestryGreatGrandparent
        } else {
            CategoryId::AncestryGrandparent
        };

        let confidence = match ctx.graph.ancestry_proof_strength {
            Some(ProofStrength::Weak) => Confidence::Low,
            _ => Confidence::Medium,
        };

        let mut result = EligibilityResult::new(
            category,
            confidence,
            format!("Greek descent through the {}", ancestor.label()),
        );

        let primary = ctx.plan.primary.as_ref();
        result.special_case = match primary.map(|p| p.kind) {
            Some(PathKind::ParentFilesFirst { .. }) => SpecialCase::ParentCanApplyFirst,
            Some(PathKind::PosthumousRecognition { .. }) => SpecialCase::DeceasedParentInChain,
            _ => SpecialCase::None,
        };

        let first_step = primary.and_then(|p| p.steps.first());
        result.recommendation = Some(match (result.special_case, first_step) {
            (SpecialCase::ParentCanApplyFirst, Some(step)) => format!(
                "The {} can register first as the child of the Greek {}; the applicant then applies as the child of a Greek parent instead of naturalizing",
                step.actor.label(),
                step.relation_to_applicant.label()
            ),
            (SpecialCase::DeceasedParentInChain, Some(step)) => format!(
                "Seek posthumous determination of the deceased {}'s Greek citizenship, then register as the child of a Greek parent; ancestry-based naturalization remains the fallback",
                step.relation_to_applicant.label()
            ),
            _ => format!(
                "Apply for naturalization as a person of Greek descent through the {}",
                ancestor.label()
            ),
        });

        if result.special_case != SpecialCase::None {
            result.alternative_path = primary.cloned();
        }

        result.warnings = self.ancestry_warnings(ctx, ancestor);
        Some(result)
    }

    fn ancestry_warnings(&self, ctx: &RuleContext<'_>, ancestor: Relation) -> Vec<String> {
        let a = ctx.analysis;
        let mut warnings = Vec::new();

        if a
            .chain_gaps
            .iter()
            .any(|g| g.missing_relation_parent_status == VitalStatus::Unknown)
        {
            warnings.push(WARN_UNKNOWN_PARENT_STATUS.to_string());
        }

        for entry in &a.deceased_in_chain {
            warnings.push(format!(
                "{}; sufficient evidence of the {}'s status is required",
                entry.note,
                entry.relation.label()
            ));
        }

        if ctx.graph.ancestry_proof_strength == Some(ProofStrength::Weak) {
            warnings.push(WARN_WEAK_PROOF.to_string());
        }

        if let Some(false) = ctx
            .graph
            .person(ancestor)
            .and_then(|p| p.has_documentation)
        {
            warnings.push(format!(
                "No documentation reported for the {}",
                ancestor.label()
            ));
        }

        warnings
    }

    // ==========================================
    // Schooling / declaratory routes
    // ==========================================

    fn rule_birth_and_schooling(&self, ctx: &RuleContext<'_>) -> Option<EligibilityResult> {
        let app = &ctx.graph.applicant;
        let years = app.years_schooled_in_greece?;
        if app.born_in_greece.is_yes() && years >= self.config.rules.min_birth_schooling_years {
            return Some(EligibilityResult::new(
                CategoryId::BirthAndSchoolingInGreece,
                Confidence::Medium,
                format!("Born in Greece with {} year(s) of Greek schooling", years),
            ));
        }
        None
    }

    fn rule_schooling(&self, ctx: &RuleContext<'_>) -> Option<EligibilityResult> {
        let years = ctx.graph.applicant.years_schooled_in_greece?;
        (years >= self.config.rules.min_schooling_years).then(|| {
            EligibilityResult::new(
                CategoryId::SchoolingInGreece,
                Confidence::Medium,
                format!("{} years of schooling in Greece", years),
            )
        })
    }

    fn rule_university(&self, ctx: &RuleContext<'_>) -> Option<EligibilityResult> {
        ctx.graph
            .applicant
            .greek_university_graduate
            .is_yes()
            .then(|| {
                EligibilityResult::new(
                    CategoryId::GreekUniversityGraduate,
                    Confidence::Medium,
                    "Graduate of a Greek university",
                )
            })
    }

    // ==========================================
    // Naturalization
    // ==========================================

    fn rule_spouse_with_child(&self, ctx: &RuleContext<'_>) -> Option<EligibilityResult> {
        let app = &ctx.graph.applicant;
        (app.married_to_greek.is_yes() && app.has_child_with_greek_spouse.is_yes()).then(|| {
            EligibilityResult::new(
                CategoryId::SpouseOfGreekWithChild,
                Confidence::Medium,
                "Married to a Greek citizen with a child of the marriage",
            )
        })
    }

    fn rule_refugee_or_stateless(&self, ctx: &RuleContext<'_>) -> Option<EligibilityResult> {
        ctx.graph.applicant.refugee_or_stateless.is_yes().then(|| {
            EligibilityResult::new(
                CategoryId::RefugeeOrStateless,
                Confidence::Medium,
                "Recognized refugee or stateless person",
            )
        })
    }

    fn rule_residence(&self, ctx: &RuleContext<'_>) -> Option<EligibilityResult> {
        let years = ctx.graph.applicant.years_resident_in_greece?;
        (years >= self.config.rules.min_residence_years).then(|| {
            EligibilityResult::new(
                CategoryId::GeneralNaturalization,
                Confidence::Medium,
                format!("{} years of lawful residence in Greece", years),
            )
        })
    }

    fn rule_reacquisition(&self, ctx: &RuleContext<'_>) -> Option<EligibilityResult> {
        ctx.graph.applicant.previously_greek.is_yes().then(|| {
            EligibilityResult::new(
                CategoryId::Reacquisition,
                Confidence::Medium,
                "Previously held Greek citizenship and lost it",
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::eligibility::Path;
    use crate::domain::person::Person;
    use crate::domain::types::{Complexity, Flag, Side};
    use crate::engine::{AncestryChainAnalyzer, PathOptimizer};
    use chrono::NaiveDate;

    fn run(graph: &FamilyGraph) -> Vec<EligibilityResult> {
        let config = Arc::new(EngineConfig::default());
        let analysis = AncestryChainAnalyzer::new().analyze(graph);
        let plan = PathOptimizer::new(config.clone()).optimize(&analysis);
        CategoryClassifier::new(config).classify(graph, &analysis, &plan)
    }

    fn ids(results: &[EligibilityResult]) -> Vec<CategoryId> {
        results.iter().map(|r| r.category_id).collect()
    }

    #[test]
    fn test_empty_graph_yields_no_results() {
        assert!(run(&FamilyGraph::default()).is_empty());
    }

    #[test]
    fn test_mother_rule_suppressed_by_greek_father() {
        let mut graph = FamilyGraph::default();
        graph.applicant.birth_date = NaiveDate::from_ymd_opt(1983, 3, 1);
        graph.mother = Person::with_nationality(Flag::Yes);

        assert_eq!(
            ids(&run(&graph)),
            vec![CategoryId::BirthMotherPre1984, CategoryId::BirthGreekParent]
        );

        graph.father = Person::with_nationality(Flag::Yes);
        // 1983 is after the father cutoff, mother rule is suppressed
        assert_eq!(ids(&run(&graph)), vec![CategoryId::BirthGreekParent]);
    }

    #[test]
    fn test_missing_birth_date_skips_cutoff_rules() {
        let mut graph = FamilyGraph::default();
        graph.father = Person::with_nationality(Flag::Yes);
        assert_eq!(ids(&run(&graph)), vec![CategoryId::BirthGreekParent]);
    }

    #[test]
    fn test_cutoff_date_itself_is_excluded() {
        let mut graph = FamilyGraph::default();
        graph.father = Person::with_nationality(Flag::Yes);
        graph.applicant.birth_date = NaiveDate::from_ymd_opt(1982, 7, 18);
        assert!(!ids(&run(&graph)).contains(&CategoryId::BirthFatherPre1982));
    }

    #[test]
    fn test_weak_proof_downgrades_ancestry_confidence() {
        let mut graph = FamilyGraph::default();
        graph.grandparents.maternal_grandmother = Person::with_nationality(Flag::Yes);
        graph.ancestry_proof_strength = Some(ProofStrength::Weak);

        let results = run(&graph);
        let ancestry = results
            .iter()
            .find(|r| r.category_id == CategoryId::AncestryGrandparent)
            .unwrap();
        assert_eq!(ancestry.confidence, Confidence::Low);
        assert!(ancestry.warnings.iter().any(|w| w == WARN_WEAK_PROOF));
    }

    #[test]
    fn test_spouse_requires_shared_child() {
        let mut graph = FamilyGraph::default();
        graph.applicant.married_to_greek = Flag::Yes;
        assert!(run(&graph).is_empty());

        graph.applicant.has_child_with_greek_spouse = Flag::Yes;
        assert_eq!(ids(&run(&graph)), vec![CategoryId::SpouseOfGreekWithChild]);
    }

    #[test]
    fn test_stepless_primary_falls_back_to_generic_recommendation() {
        let mut graph = FamilyGraph::default();
        graph.grandparents.paternal_grandfather = Person::with_nationality(Flag::Yes);
        let analysis = AncestryChainAnalyzer::new().analyze(&graph);
        let plan = PathPlan {
            primary: Some(Path::from_steps(
                PathKind::ParentFilesFirst { side: Side::Paternal },
                vec![],
                Complexity::Medium,
                true,
            )),
            alternatives: vec![],
        };

        let results = CategoryClassifier::new(Arc::new(EngineConfig::default()))
            .classify(&graph, &analysis, &plan);
        let ancestry = &results[0];
        assert_eq!(ancestry.special_case, SpecialCase::ParentCanApplyFirst);
        assert!(ancestry
            .recommendation
            .as_deref()
            .unwrap()
            .starts_with("Apply for naturalization"));
    }

    #[test]
    fn test_textual_false_never_fires() {
        let mut graph = FamilyGraph::default();
        graph.applicant.refugee_or_stateless = Flag::No;
        graph.applicant.previously_greek = Flag::Unknown;
        assert!(run(&graph).is_empty());
    }
}
