// ==========================================
// CategoryClassifier integration tests
// ==========================================
// Target: rule battery, priority ordering, ancestry special cases
// ==========================================


use citizenship_eligibility::domain::priority_rank;
use citizenship_eligibility::engine::classifier::{WARN_UNKNOWN_PARENT_STATUS, WARN_WEAK_PROOF};
use citizenship_eligibility::{
    CategoryId, Confidence, EligibilityResult, Person, ProofStrength, Relation, SpecialCase,
    VitalStatus,
};
use test_helpers::{classify, CaseBuilder};

fn ids(results: &[EligibilityResult]) -> Vec<CategoryId> {
    results.iter().map(|r| r.category_id).collect()
}

#[test]
fn test_ancestry_rule_never_fires_with_greek_parent() {
    let graph = CaseBuilder::new()
        .greek(Relation::Father)
        .greek(Relation::PaternalGrandfather)
        .greek(Relation::MaternalGrandmother)
        .greek(Relation::MaternalGrandfatherFather)
        .build();
    let results = classify(&graph);

    assert!(results.iter().all(|r| !r.category_id.is_ancestry()));
    assert!(ids(&results).contains(&CategoryId::BirthGreekParent));
}

#[test]
fn test_ordering_follows_priority_table() {
    let graph = CaseBuilder::new()
        .born(1975, 1, 1)
        .greek(Relation::Father)
        .previously_greek()
        .residence_years(12)
        .refugee()
        .spouse_with_child()
        .university_graduate()
        .schooling_years(9)
        .born_in_greece()
        .adopted()
        .recognized()
        .build();
    let results = classify(&graph);

    assert_eq!(
        ids(&results),
        vec![
            CategoryId::BirthFatherPre1982,
            CategoryId::BirthGreekParent,
            CategoryId::RecognitionByGreek,
            CategoryId::AdoptionByGreek,
            CategoryId::BirthAndSchoolingInGreece,
            CategoryId::SchoolingInGreece,
            CategoryId::GreekUniversityGraduate,
            CategoryId::SpouseOfGreekWithChild,
            CategoryId::RefugeeOrStateless,
            CategoryId::GeneralNaturalization,
            CategoryId::Reacquisition,
        ]
    );

    let ranks: Vec<u16> = results.iter().map(|r| priority_rank(r.category_id)).collect();
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_direct_routes_are_high_confidence() {
    let graph = CaseBuilder::new()
        .born(1980, 5, 5)
        .greek(Relation::Father)
        .recognized()
        .adopted()
        .build();
    for result in classify(&graph) {
        assert_eq!(result.confidence, Confidence::High, "{}", result.category_id);
    }
}

#[test]
fn test_parent_can_apply_first_special_case() {
    let graph = CaseBuilder::new()
        .not_greek(Relation::Father, VitalStatus::Alive)
        .not_greek(Relation::Mother, VitalStatus::Alive)
        .greek(Relation::PaternalGrandfather)
        .build();
    let results = classify(&graph);

    assert_eq!(ids(&results), vec![CategoryId::AncestryGrandparent]);
    let ancestry = &results[0];
    assert_eq!(ancestry.confidence, Confidence::Medium);
    assert_eq!(ancestry.special_case, SpecialCase::ParentCanApplyFirst);
    assert!(ancestry.alternative_path.is_some());
    assert!(ancestry
        .recommendation
        .as_deref()
        .unwrap()
        .contains("can register first"));
}

#[test]
fn test_deceased_parent_special_case_and_warning() {
    let graph = CaseBuilder::new()
        .not_greek(Relation::Mother, VitalStatus::Deceased)
        .greek(Relation::MaternalGrandmother)
        .build();
    let results = classify(&graph);

    let ancestry = &results[0];
    assert_eq!(ancestry.special_case, SpecialCase::DeceasedParentInChain);
    assert!(ancestry
        .warnings
        .iter()
        .any(|w| w.contains("died without exercising it")));
}

#[test]
fn test_unknown_parent_status_warns() {
    let graph = CaseBuilder::new()
        .greek(Relation::MaternalGrandfather)
        .build();
    let results = classify(&graph);

    assert_eq!(results[0].special_case, SpecialCase::ParentCanApplyFirst);
    assert!(results[0]
        .warnings
        .iter()
        .any(|w| w == WARN_UNKNOWN_PARENT_STATUS));
}

#[test]
fn test_proof_strength_only_downgrades() {
    let base = CaseBuilder::new().greek(Relation::PaternalGrandmother);

    let strong = classify(&base.proof(ProofStrength::Strong).build());
    assert_eq!(strong[0].confidence, Confidence::Medium);

    let weak = classify(
        &CaseBuilder::new()
            .greek(Relation::PaternalGrandmother)
            .proof(ProofStrength::Weak)
            .build(),
    );
    assert_eq!(weak[0].confidence, Confidence::Low);
    assert!(weak[0].warnings.iter().any(|w| w == WARN_WEAK_PROOF));
}

#[test]
fn test_great_grandparent_tier() {
    let graph = CaseBuilder::new()
        .not_greek(Relation::Father, VitalStatus::Alive)
        .not_greek(Relation::Mother, VitalStatus::Alive)
        .greek(Relation::PaternalGrandfatherFather)
        .build();
    let results = classify(&graph);

    assert_eq!(ids(&results), vec![CategoryId::AncestryGreatGrandparent]);
    assert_eq!(results[0].special_case, SpecialCase::None);
    assert!(results[0].alternative_path.is_none());
}

#[test]
fn test_undocumented_ancestor_warns() {
    let ancestor = Person {
        has_documentation: Some(false),
        ..test_helpers::greek()
    };
    let graph = CaseBuilder::new()
        .not_greek(Relation::Father, VitalStatus::Alive)
        .person(Relation::PaternalGrandfather, ancestor)
        .build();
    let results = classify(&graph);

    assert!(results[0]
        .warnings
        .iter()
        .any(|w| w.starts_with("No documentation reported")));
}

#[test]
fn test_thresholds_are_inclusive() {
    let at = classify(&CaseBuilder::new().residence_years(7).schooling_years(6).build());
    assert_eq!(
        ids(&at),
        vec![CategoryId::SchoolingInGreece, CategoryId::GeneralNaturalization]
    );

    let below = classify(&CaseBuilder::new().residence_years(6).schooling_years(5).build());
    assert!(below.is_empty());
}

#[test]
fn test_birth_and_schooling_needs_birth_in_greece() {
    let abroad = classify(&CaseBuilder::new().schooling_years(2).build());
    assert!(abroad.is_empty());

    let local = classify(&CaseBuilder::new().born_in_greece().schooling_years(1).build());
    assert_eq!(ids(&local), vec![CategoryId::BirthAndSchoolingInGreece]);
}

#[test]
fn test_spouse_rule_needs_child() {
    let mut graph = CaseBuilder::new().spouse_with_child().build();
    assert_eq!(ids(&classify(&graph)), vec![CategoryId::SpouseOfGreekWithChild]);

    graph.applicant.has_child_with_greek_spouse = citizenship_eligibility::Flag::No;
    assert!(classify(&graph).is_empty());
}
