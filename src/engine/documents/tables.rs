// ==========================================
// Document tables (compile-time, never mutated)
// ==========================================

use crate::domain::category::CategoryId;
use crate::domain::document::{DocumentRequirement, DocumentSection};
use crate::domain::types::NameChangeReason;

#[derive(Debug, Clone, Copy)]
pub(super) struct DocumentSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub required: bool,
    pub legal_ref: &'static str,
    pub foreign: bool,
    pub alternatives: &'static [&'static str],
}

impl From<&DocumentSpec> for DocumentRequirement {
    fn from(spec: &DocumentSpec) -> Self {
        DocumentRequirement {
            id: spec.id.to_string(),
            name: spec.name.to_string(),
            required: spec.required,
            legal_ref: spec.legal_ref.to_string(),
            is_foreign_issued: spec.foreign,
            alternatives: spec.alternatives.iter().map(|s| s.to_string()).collect(),
        }
    }
}

const fn doc(
    id: &'static str,
    name: &'static str,
    required: bool,
    legal_ref: &'static str,
    foreign: bool,
    alternatives: &'static [&'static str],
) -> DocumentSpec {
    DocumentSpec {
        id,
        name,
        required,
        legal_ref,
        foreign,
        alternatives,
    }
}

// ==========================================
// Applicant
// ==========================================
const APPLICANT_BIRTH_CERTIFICATE: DocumentSpec = doc(
    "applicant_birth_certificate",
    "Applicant's birth certificate, apostilled and officially translated",
    true,
    "Art. 6 L.3284/2004",
    true,
    &["Consular birth registration extract"],
);
const APPLICANT_PASSPORT: DocumentSpec = doc(
    "applicant_passport",
    "Valid passport",
    true,
    "Art. 6 L.3284/2004",
    true,
    &["National identity card"],
);
const CRIMINAL_RECORD: DocumentSpec = doc(
    "criminal_record_certificate",
    "Criminal record certificate from the country of residence",
    true,
    "Art. 5 par. 1(b) L.3284/2004",
    true,
    &[],
);
const RESIDENCE_PERMIT: DocumentSpec = doc(
    "residence_permit",
    "Valid residence permit",
    true,
    "Art. 5 par. 1(d) L.3284/2004",
    false,
    &["Long-term resident card"],
);
const TAX_RETURNS: DocumentSpec = doc(
    "tax_returns",
    "Greek tax returns covering the qualifying residence period",
    true,
    "Art. 5A L.3284/2004",
    false,
    &[],
);
const NATURALIZATION_EXAM_CERTIFICATE: DocumentSpec = doc(
    "naturalization_exam_certificate",
    "Certificate of adequate knowledge of Greek language and history for naturalization",
    true,
    "Art. 5A L.3284/2004",
    false,
    &["Greek secondary-school leaving certificate"],
);
const PRIMARY_SCHOOL_ENROLLMENT: DocumentSpec = doc(
    "primary_school_enrollment",
    "Proof of enrollment in the first grade of a Greek primary school",
    true,
    "Art. 1A par. 1 L.3284/2004",
    false,
    &[],
);
const GREEK_SCHOOL_CERTIFICATES: DocumentSpec = doc(
    "greek_school_certificates",
    "Certificates of successful attendance at Greek schools",
    true,
    "Art. 1A par. 2 L.3284/2004",
    false,
    &[],
);
const GREEK_UNIVERSITY_DEGREE: DocumentSpec = doc(
    "greek_university_degree",
    "Degree from a Greek higher-education institution",
    true,
    "Art. 1A par. 3 L.3284/2004",
    false,
    &[],
);
const PROTECTION_STATUS_DECISION: DocumentSpec = doc(
    "protection_status_decision",
    "Decision recognizing refugee or stateless status",
    true,
    "Art. 5 par. 1(d) L.3284/2004",
    false,
    &["UNHCR mandate certificate"],
);
const TRAVEL_DOCUMENT: DocumentSpec = doc(
    "travel_document",
    "Refugee or stateless person travel document",
    true,
    "Art. 28 Geneva Convention 1951",
    false,
    &[],
);
const FORMER_CITIZENSHIP_EVIDENCE: DocumentSpec = doc(
    "former_citizenship_evidence",
    "Evidence of former Greek citizenship",
    true,
    "Art. 21 L.3284/2004",
    false,
    &["Expired Greek passport", "Former Greek identity card", "Old municipal registry extract"],
);
const LOSS_OF_CITIZENSHIP_ACT: DocumentSpec = doc(
    "loss_of_citizenship_act",
    "Act or decision by which Greek citizenship was lost",
    true,
    "Art. 21 L.3284/2004",
    false,
    &["Foreign naturalization certificate"],
);

// ==========================================
// Parent
// ==========================================
const PARENT_REGISTRY_EXTRACT: DocumentSpec = doc(
    "parent_registry_extract",
    "Municipal registry family status certificate of the Greek parent",
    true,
    "Art. 1 par. 1 L.3284/2004",
    false,
    &["Male registry extract", "Greek passport or identity card of the parent"],
);
const PARENT_BIRTH_CERTIFICATE: DocumentSpec = doc(
    "parent_birth_certificate",
    "Birth certificate of the parent in the line of descent",
    true,
    "Art. 10 L.3284/2004",
    true,
    &["Baptism certificate"],
);
const PARENTS_MARRIAGE_CERTIFICATE: DocumentSpec = doc(
    "parents_marriage_certificate",
    "Parents' marriage certificate",
    true,
    "Art. 1 par. 1 L.3284/2004",
    true,
    &["Church marriage record"],
);
const RECOGNITION_ACT: DocumentSpec = doc(
    "recognition_act",
    "Act of voluntary recognition by the Greek parent",
    true,
    "Art. 2 L.3284/2004",
    true,
    &["Court judgment establishing parentage"],
);
const ADOPTION_DECREE: DocumentSpec = doc(
    "adoption_decree",
    "Adoption decree",
    true,
    "Art. 3 L.3284/2004",
    true,
    &[],
);
const ADOPTION_FINALITY: DocumentSpec = doc(
    "adoption_finality_certificate",
    "Certificate that the adoption decree is final",
    true,
    "Art. 3 L.3284/2004",
    true,
    &[],
);
const PARENT_DEATH_CERTIFICATE: DocumentSpec = doc(
    "parent_death_certificate",
    "Death certificate of the deceased parent",
    true,
    "Art. 25 L.3284/2004",
    true,
    &[],
);
const DECEASED_PARENT_STATUS_EVIDENCE: DocumentSpec = doc(
    "deceased_parent_status_evidence",
    "Evidence that the deceased parent descended from the Greek ancestor",
    true,
    "Art. 25 L.3284/2004",
    true,
    &["Birth certificate naming the Greek ancestor", "Consular registration records"],
);

// ==========================================
// Spouse / children
// ==========================================
const MARRIAGE_CERTIFICATE: DocumentSpec = doc(
    "marriage_certificate",
    "Certificate of marriage to the Greek spouse",
    true,
    "Art. 5 par. 1(b) L.3284/2004",
    true,
    &["Greek marriage registry extract"],
);
const SPOUSE_REGISTRY_EXTRACT: DocumentSpec = doc(
    "spouse_registry_extract",
    "Family status certificate of the Greek spouse",
    true,
    "Art. 5 par. 1(b) L.3284/2004",
    false,
    &[],
);
const CHILD_BIRTH_CERTIFICATE: DocumentSpec = doc(
    "child_birth_certificate",
    "Birth certificate of the child of the marriage",
    true,
    "Art. 5 par. 1(b) L.3284/2004",
    true,
    &["Greek municipal registry entry of the child"],
);

// ==========================================
// Ancestry
// ==========================================
const ANCESTOR_BIRTH_RECORD: DocumentSpec = doc(
    "ancestor_birth_record",
    "Birth or baptism record of the Greek ancestor",
    true,
    "Art. 10 L.3284/2004",
    false,
    &["Church baptism record", "Municipal birth register entry"],
);
const ANCESTOR_REGISTRY_EXTRACT: DocumentSpec = doc(
    "ancestor_registry_extract",
    "Greek municipal or male registry entry of the ancestor",
    true,
    "Art. 10 L.3284/2004",
    false,
    &["Military service record", "Consular registration", "Greek passport of the ancestor"],
);
const INTERMEDIATE_BIRTH_CERTIFICATES: DocumentSpec = doc(
    "intermediate_generation_birth_certificates",
    "Birth certificates linking every generation to the ancestor",
    true,
    "Art. 10 L.3284/2004",
    true,
    &[],
);

// ==========================================
// General
// ==========================================
const APPLICATION_FORM: DocumentSpec = doc(
    "application_form",
    "Signed application",
    true,
    "Art. 6 L.3284/2004",
    false,
    &[],
);
const BIRTH_REGISTRATION_REQUEST: DocumentSpec = doc(
    "birth_registration_request",
    "Request for registration in the Greek municipal registry",
    true,
    "Art. 1 par. 1 L.3284/2004",
    false,
    &[],
);
const CITIZENSHIP_DECLARATION: DocumentSpec = doc(
    "citizenship_declaration",
    "Declaration of intent to acquire Greek citizenship",
    true,
    "Art. 14 par. 2 L.1438/1984",
    false,
    &[],
);
const FEE_RECEIPT: DocumentSpec = doc(
    "fee_receipt",
    "Electronic fee payment receipt",
    true,
    "Art. 6 par. 2 L.3284/2004",
    false,
    &[],
);
const PASSPORT_PHOTOS: DocumentSpec = doc(
    "passport_photos",
    "Recent passport-style photographs",
    true,
    "Art. 6 L.3284/2004",
    false,
    &[],
);
const CONSULAR_INTERVIEW: DocumentSpec = doc(
    "consular_interview_record",
    "Record of the consular interview on Greek descent",
    true,
    "Art. 10 par. 2 L.3284/2004",
    false,
    &[],
);
const WITNESS_STATEMENTS: DocumentSpec = doc(
    "witness_statements",
    "Statements of two Greek citizen witnesses",
    false,
    "Art. 10 L.3284/2004",
    false,
    &[],
);

// ==========================================
// Condition blocks
// ==========================================
pub(super) const DIVORCE_BLOCK: &[DocumentSpec] = &[
    doc(
        "divorce_decree",
        "Divorce decree of the parents",
        true,
        "Art. 1 par. 1 L.3284/2004",
        true,
        &["Court judgment dissolving the marriage"],
    ),
    doc(
        "divorce_finality_certificate",
        "Certificate that the divorce decree is final",
        true,
        "Art. 1 par. 1 L.3284/2004",
        true,
        &["Apostille on the final judgment"],
    ),
];

pub(super) const PRIOR_MARRIAGES_BLOCK: &[DocumentSpec] = &[
    doc(
        "prior_marriage_certificates",
        "Certificates of every prior marriage of the parent",
        true,
        "Art. 1 par. 1 L.3284/2004",
        true,
        &[],
    ),
    doc(
        "prior_marriage_dissolution",
        "Proof that each prior marriage was dissolved",
        true,
        "Art. 1 par. 1 L.3284/2004",
        true,
        &["Divorce decree", "Death certificate of the former spouse"],
    ),
];

pub(super) const RECOGNITION_BLOCK: &[DocumentSpec] = &[doc(
    "parentage_recognition_act",
    "Act of paternity or maternity recognition",
    true,
    "Art. 2 L.3284/2004",
    true,
    &["Notarial recognition deed", "Court judgment establishing parentage"],
)];

pub(super) const LEGACY_IDENTITY_DOCUMENT: DocumentSpec = doc(
    "legacy_identity_document",
    "Identity document issued under the former name",
    true,
    "Art. 10 L.3284/2004",
    true,
    &["Old passport", "Old identity card", "Military discharge papers"],
);

pub(super) fn name_change_block(reason: NameChangeReason) -> &'static [DocumentSpec] {
    const NATURALIZATION: &[DocumentSpec] = &[doc(
        "naturalization_certificate_name_change",
        "Naturalization certificate showing the changed name",
        true,
        "Art. 10 L.3284/2004",
        true,
        &["Naturalization petition"],
    )];
    const MARRIAGE: &[DocumentSpec] = &[doc(
        "marriage_certificate_name_change",
        "Marriage certificate showing the names before and after marriage",
        true,
        "Art. 10 L.3284/2004",
        true,
        &[],
    )];
    const COURT_ORDER: &[DocumentSpec] = &[doc(
        "court_order_name_change",
        "Court order authorizing the name change",
        true,
        "Art. 10 L.3284/2004",
        true,
        &[],
    )];
    const IMMIGRATION: &[DocumentSpec] = &[doc(
        "immigration_arrival_record",
        "Immigration or arrival record under the original name",
        true,
        "Art. 10 L.3284/2004",
        true,
        &["Ship passenger manifest", "Alien registration record"],
    )];
    const OTHER: &[DocumentSpec] = &[
        doc(
            "name_change_affidavit",
            "Sworn declaration explaining the name discrepancy",
            true,
            "Art. 10 L.3284/2004",
            false,
            &["Published notice of the name change"],
        ),
        doc(
            "name_continuity_evidence",
            "Documents bearing both the former and the current name",
            false,
            "Art. 10 L.3284/2004",
            true,
            &[],
        ),
    ];

    match reason {
        NameChangeReason::Naturalization => NATURALIZATION,
        NameChangeReason::Marriage => MARRIAGE,
        NameChangeReason::CourtOrder => COURT_ORDER,
        NameChangeReason::Immigration => IMMIGRATION,
        NameChangeReason::Other => OTHER,
    }
}

// ==========================================
// Base sets per category
// ==========================================
type BaseSet = &'static [(DocumentSection, &'static [DocumentSpec])];

const BIRTH_ROUTE: BaseSet = &[
    (DocumentSection::Applicant, &[APPLICANT_BIRTH_CERTIFICATE, APPLICANT_PASSPORT]),
    (DocumentSection::Parent, &[PARENT_REGISTRY_EXTRACT, PARENTS_MARRIAGE_CERTIFICATE]),
    (DocumentSection::General, &[BIRTH_REGISTRATION_REQUEST, APPLICATION_FORM]),
];

const MOTHER_DECLARATION_ROUTE: BaseSet = &[
    (DocumentSection::Applicant, &[APPLICANT_BIRTH_CERTIFICATE, APPLICANT_PASSPORT]),
    (DocumentSection::Parent, &[PARENT_REGISTRY_EXTRACT, PARENTS_MARRIAGE_CERTIFICATE]),
    (DocumentSection::General, &[CITIZENSHIP_DECLARATION, APPLICATION_FORM]),
];

const RECOGNITION: BaseSet = &[
    (DocumentSection::Applicant, &[APPLICANT_BIRTH_CERTIFICATE, APPLICANT_PASSPORT]),
    (DocumentSection::Parent, &[RECOGNITION_ACT, PARENT_REGISTRY_EXTRACT]),
    (DocumentSection::General, &[BIRTH_REGISTRATION_REQUEST, APPLICATION_FORM]),
];

const ADOPTION: BaseSet = &[
    (DocumentSection::Applicant, &[APPLICANT_BIRTH_CERTIFICATE, APPLICANT_PASSPORT]),
    (
        DocumentSection::Parent,
        &[ADOPTION_DECREE, ADOPTION_FINALITY, PARENT_REGISTRY_EXTRACT],
    ),
    (DocumentSection::General, &[BIRTH_REGISTRATION_REQUEST, APPLICATION_FORM]),
];

const ANCESTRY_GRANDPARENT: BaseSet = &[
    (
        DocumentSection::Applicant,
        &[APPLICANT_BIRTH_CERTIFICATE, APPLICANT_PASSPORT, CRIMINAL_RECORD],
    ),
    (DocumentSection::Parent, &[PARENT_BIRTH_CERTIFICATE, PARENTS_MARRIAGE_CERTIFICATE]),
    (DocumentSection::Ancestry, &[ANCESTOR_BIRTH_RECORD, ANCESTOR_REGISTRY_EXTRACT]),
    (
        DocumentSection::General,
        &[APPLICATION_FORM, FEE_RECEIPT, PASSPORT_PHOTOS, CONSULAR_INTERVIEW, WITNESS_STATEMENTS],
    ),
];

const ANCESTRY_GREAT_GRANDPARENT: BaseSet = &[
    (
        DocumentSection::Applicant,
        &[APPLICANT_BIRTH_CERTIFICATE, APPLICANT_PASSPORT, CRIMINAL_RECORD],
    ),
    (DocumentSection::Parent, &[PARENT_BIRTH_CERTIFICATE, PARENTS_MARRIAGE_CERTIFICATE]),
    (
        DocumentSection::Ancestry,
        &[ANCESTOR_BIRTH_RECORD, ANCESTOR_REGISTRY_EXTRACT, INTERMEDIATE_BIRTH_CERTIFICATES],
    ),
    (
        DocumentSection::General,
        &[APPLICATION_FORM, FEE_RECEIPT, PASSPORT_PHOTOS, CONSULAR_INTERVIEW, WITNESS_STATEMENTS],
    ),
];

const POSTHUMOUS: BaseSet = &[
    (
        DocumentSection::Parent,
        &[PARENT_DEATH_CERTIFICATE, PARENT_BIRTH_CERTIFICATE, DECEASED_PARENT_STATUS_EVIDENCE],
    ),
    (DocumentSection::Ancestry, &[ANCESTOR_REGISTRY_EXTRACT, ANCESTOR_BIRTH_RECORD]),
    (DocumentSection::General, &[APPLICATION_FORM, FEE_RECEIPT]),
];

const BIRTH_AND_SCHOOLING: BaseSet = &[
    (
        DocumentSection::Applicant,
        &[APPLICANT_BIRTH_CERTIFICATE, PRIMARY_SCHOOL_ENROLLMENT, RESIDENCE_PERMIT],
    ),
    (DocumentSection::General, &[APPLICATION_FORM]),
];

const SCHOOLING: BaseSet = &[
    (
        DocumentSection::Applicant,
        &[APPLICANT_BIRTH_CERTIFICATE, GREEK_SCHOOL_CERTIFICATES, RESIDENCE_PERMIT],
    ),
    (DocumentSection::General, &[APPLICATION_FORM]),
];

const UNIVERSITY: BaseSet = &[
    (
        DocumentSection::Applicant,
        &[APPLICANT_PASSPORT, GREEK_UNIVERSITY_DEGREE, RESIDENCE_PERMIT],
    ),
    (DocumentSection::General, &[APPLICATION_FORM]),
];

const SPOUSE: BaseSet = &[
    (
        DocumentSection::Applicant,
        &[APPLICANT_PASSPORT, CRIMINAL_RECORD, RESIDENCE_PERMIT, NATURALIZATION_EXAM_CERTIFICATE],
    ),
    (DocumentSection::Spouse, &[MARRIAGE_CERTIFICATE, SPOUSE_REGISTRY_EXTRACT]),
    (DocumentSection::Children, &[CHILD_BIRTH_CERTIFICATE]),
    (DocumentSection::General, &[APPLICATION_FORM, FEE_RECEIPT, PASSPORT_PHOTOS]),
];

const REFUGEE: BaseSet = &[
    (
        DocumentSection::Applicant,
        &[
            PROTECTION_STATUS_DECISION,
            TRAVEL_DOCUMENT,
            RESIDENCE_PERMIT,
            CRIMINAL_RECORD,
            NATURALIZATION_EXAM_CERTIFICATE,
        ],
    ),
    (DocumentSection::General, &[APPLICATION_FORM, FEE_RECEIPT, PASSPORT_PHOTOS]),
];

const GENERAL_NATURALIZATION: BaseSet = &[
    (
        DocumentSection::Applicant,
        &[
            APPLICANT_PASSPORT,
            RESIDENCE_PERMIT,
            TAX_RETURNS,
            CRIMINAL_RECORD,
            NATURALIZATION_EXAM_CERTIFICATE,
        ],
    ),
    (DocumentSection::General, &[APPLICATION_FORM, FEE_RECEIPT, PASSPORT_PHOTOS]),
];

const REACQUISITION: BaseSet = &[
    (
        DocumentSection::Applicant,
        &[
            APPLICANT_PASSPORT,
            FORMER_CITIZENSHIP_EVIDENCE,
            LOSS_OF_CITIZENSHIP_ACT,
            CRIMINAL_RECORD,
        ],
    ),
    (DocumentSection::General, &[APPLICATION_FORM, FEE_RECEIPT]),
];

pub(super) fn base_set(category: CategoryId) -> BaseSet {
    match category {
        CategoryId::BirthFatherPre1982 | CategoryId::BirthGreekParent => BIRTH_ROUTE,
        CategoryId::BirthMotherPre1984 => MOTHER_DECLARATION_ROUTE,
        CategoryId::RecognitionByGreek => RECOGNITION,
        CategoryId::AdoptionByGreek => ADOPTION,
        CategoryId::AncestryGrandparent => ANCESTRY_GRANDPARENT,
        CategoryId::AncestryGreatGrandparent => ANCESTRY_GREAT_GRANDPARENT,
        CategoryId::PosthumousParentRecognition => POSTHUMOUS,
        CategoryId::BirthAndSchoolingInGreece => BIRTH_AND_SCHOOLING,
        CategoryId::SchoolingInGreece => SCHOOLING,
        CategoryId::GreekUniversityGraduate => UNIVERSITY,
        CategoryId::SpouseOfGreekWithChild => SPOUSE,
        CategoryId::RefugeeOrStateless => REFUGEE,
        CategoryId::GeneralNaturalization => GENERAL_NATURALIZATION,
        CategoryId::Reacquisition => REACQUISITION,
    }
}
