// ==========================================
// DocumentResolver integration tests
// ==========================================
// Target: base sets, condition blocks, additive composition
// ==========================================


use citizenship_eligibility::domain::{DocumentRequirementMap, DocumentSection};
use citizenship_eligibility::{
    CategoryId, DocumentConditions, DocumentResolver, EligibilityOrchestrator, MaritalStatus,
    NameChangeReason,
};
use test_helpers::{default_config, CaseBuilder, DIVORCE_AND_NAME_CHANGE_JSON};

const RECOGNITION_ID: &str = "parentage_recognition_act";

fn has(map: &DocumentRequirementMap, section: DocumentSection, id: &str) -> bool {
    map.get(&section)
        .map(|docs| docs.iter().any(|d| d.id == id))
        .unwrap_or(false)
}

fn conditions(status: MaritalStatus, born_after_divorce: Option<bool>) -> DocumentConditions {
    DocumentConditions {
        parents_marital_status: status,
        born_after_divorce,
        ..DocumentConditions::default()
    }
}

#[test]
fn test_recognition_block_rules_for_every_category() {
    let resolver = DocumentResolver::new();
    for category in CategoryId::ALL {
        let divorced_after =
            resolver.resolve(category, &conditions(MaritalStatus::Divorced, Some(true)));
        let never_married =
            resolver.resolve(category, &conditions(MaritalStatus::NeverMarried, None));
        let married = resolver.resolve(category, &conditions(MaritalStatus::Married, None));

        assert!(has(&divorced_after, DocumentSection::Parent, RECOGNITION_ID), "{}", category);
        assert!(has(&never_married, DocumentSection::Parent, RECOGNITION_ID), "{}", category);
        assert!(!has(&married, DocumentSection::Parent, RECOGNITION_ID), "{}", category);
    }
}

#[test]
fn test_divorced_before_birth_skips_recognition() {
    let resolver = DocumentResolver::new();
    let map = resolver.resolve(
        CategoryId::BirthGreekParent,
        &conditions(MaritalStatus::Divorced, Some(false)),
    );
    assert!(has(&map, DocumentSection::Parent, "divorce_decree"));
    assert!(!has(&map, DocumentSection::Parent, RECOGNITION_ID));
    assert!(!has(&map, DocumentSection::Parent, "prior_marriage_certificates"));
}

#[test]
fn test_base_set_is_never_removed() {
    let resolver = DocumentResolver::new();
    let rich = DocumentConditions {
        parents_marital_status: MaritalStatus::Divorced,
        born_after_divorce: Some(true),
        parent_had_prior_marriages: true,
        parent_name_changed: true,
        ancestor_name_changed: true,
        name_change_reason: NameChangeReason::CourtOrder,
    };

    for category in CategoryId::ALL {
        let base = resolver.resolve(category, &DocumentConditions::default());
        let full = resolver.resolve(category, &rich);
        for (section, docs) in &base {
            let extended = &full[section];
            assert!(extended.len() >= docs.len());
            assert_eq!(&extended[..docs.len()], &docs[..], "{} / {}", category, section);
        }
    }
}

#[test]
fn test_each_reason_selects_its_own_block() {
    let resolver = DocumentResolver::new();
    let expected = [
        (NameChangeReason::Naturalization, "naturalization_certificate_name_change"),
        (NameChangeReason::Marriage, "marriage_certificate_name_change"),
        (NameChangeReason::CourtOrder, "court_order_name_change"),
        (NameChangeReason::Immigration, "immigration_arrival_record"),
        (NameChangeReason::Other, "name_change_affidavit"),
    ];
    for (reason, id) in expected {
        let map = resolver.resolve(
            CategoryId::BirthGreekParent,
            &DocumentConditions {
                parent_name_changed: true,
                name_change_reason: reason,
                ..DocumentConditions::default()
            },
        );
        assert!(has(&map, DocumentSection::Parent, id), "{:?}", reason);
        assert!(has(&map, DocumentSection::Parent, "legacy_identity_document"));
    }
}

#[test]
fn test_conditions_from_normalized_case() {
    let report = EligibilityOrchestrator::new(default_config())
        .evaluate_json(DIVORCE_AND_NAME_CHANGE_JSON)
        .unwrap();

    assert_eq!(report.results[0].category_id, CategoryId::BirthGreekParent);
    let docs = &report.documents;
    assert!(has(docs, DocumentSection::Parent, "divorce_decree"));
    assert!(has(docs, DocumentSection::Parent, "prior_marriage_certificates"));
    assert!(has(docs, DocumentSection::Parent, RECOGNITION_ID));
    assert!(has(docs, DocumentSection::Ancestry, "immigration_arrival_record"));
    assert!(has(docs, DocumentSection::Ancestry, "legacy_identity_document"));
}

#[test]
fn test_born_after_divorce_unknown_without_dates() {
    let graph = CaseBuilder::new()
        .marital_status(MaritalStatus::Divorced)
        .build();
    let conditions = DocumentConditions::from_graph(&graph);
    assert_eq!(conditions.born_after_divorce, None);

    let map = DocumentResolver::new().resolve(CategoryId::BirthGreekParent, &conditions);
    assert!(!has(&map, DocumentSection::Parent, RECOGNITION_ID));
}

#[test]
fn test_requirement_fields_are_populated() {
    let map = DocumentResolver::new().resolve(
        CategoryId::AncestryGrandparent,
        &DocumentConditions::default(),
    );
    for docs in map.values() {
        for doc in docs {
            assert!(!doc.id.is_empty());
            assert!(!doc.name.is_empty());
            assert!(!doc.legal_ref.is_empty());
        }
    }
    assert!(map.contains_key(&DocumentSection::Ancestry));
}
