// ==========================================
// Citizenship Eligibility - Case Normalizer
// ==========================================
// Responsibility: RawCaseRecord → FamilyGraph, one pass at the boundary
// Rule: after this pass no engine sees a textual flag
// Rule: bad values become absent/unknown with a warning, never an error
// ==========================================

use crate::domain::family::{
    ApplicantFacts, DivorceInfo, FamilyGraph, GrandparentSlots, GreatGrandparentSlots,
    NameChangeInfo,
};
use crate::domain::person::Person;
use crate::domain::types::{Flag, MaritalStatus, NameChangeReason, ProofStrength, VitalStatus};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::raw_record::{RawCaseRecord, RawPerson, RawScalar};
use chrono::NaiveDate;
use tracing::warn;

/// Accepted date layouts, tried in order
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%Y%m%d"];

pub struct CaseNormalizer;

impl CaseNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalizes a raw record into a strongly typed snapshot
    ///
    /// # Errors
    /// - BlankCaseId: `caseId` present but empty (the result cannot be keyed)
    /// - InvalidCaseId: `caseId` is a boolean, array or object
    pub fn normalize(&self, raw: &RawCaseRecord) -> ImportResult<FamilyGraph> {
        let case_id = match &raw.case_id {
            None => None,
            Some(RawScalar::Bool(_)) => return Err(ImportError::InvalidCaseId("boolean")),
            Some(RawScalar::Other(_)) => return Err(ImportError::InvalidCaseId("structure")),
            Some(v) => match self.text(Some(v)) {
                Some(id) => Some(id),
                None => return Err(ImportError::BlankCaseId),
            },
        };

        let applicant = ApplicantFacts {
            name: self.text(raw.applicant_name.as_ref()),
            birth_date: self.date(raw.birth_date.as_ref(), "birthDate"),
            birth_place: self.text(raw.birth_place.as_ref()),
            born_in_greece: self.flag(raw.born_in_greece.as_ref()),
            years_schooled_in_greece: self
                .count(raw.years_schooled_in_greece.as_ref(), "yearsSchooledInGreece"),
            years_resident_in_greece: self
                .count(raw.years_resident_in_greece.as_ref(), "yearsResidentInGreece"),
            greek_university_graduate: self.flag(raw.greek_university_graduate.as_ref()),
            married_to_greek: self.flag(raw.married_to_greek.as_ref()),
            has_child_with_greek_spouse: self.flag(raw.has_child_with_greek_spouse.as_ref()),
            recognized_by_greek: self.flag(raw.recognized_by_greek.as_ref()),
            adopted_by_greek: self.flag(raw.adopted_by_greek.as_ref()),
            previously_greek: self.flag(raw.previously_greek.as_ref()),
            refugee_or_stateless: self.flag(raw.refugee_or_stateless.as_ref()),
        };

        let parents_marital_status = self
            .text(raw.parents_marital_status.as_ref())
            .map(|s| MaritalStatus::from_text(&s))
            .unwrap_or_default();

        let divorce = DivorceInfo {
            divorce_date: self.date(raw.divorce_date.as_ref(), "divorceDate"),
            born_after_divorce: self.flag(raw.born_after_divorce.as_ref()),
            parent_had_prior_marriages: self.flag(raw.parent_had_prior_marriages.as_ref()),
        };

        let name_change = NameChangeInfo {
            parent_name_changed: self.flag(raw.parent_name_changed.as_ref()),
            ancestor_name_changed: self.flag(raw.ancestor_name_changed.as_ref()),
            reason: self
                .text(raw.name_change_reason.as_ref())
                .map(|s| NameChangeReason::from_text(&s)),
        };

        let ancestry_proof_strength = self
            .text(raw.ancestry_proof_strength.as_ref())
            .and_then(|s| {
                let parsed = ProofStrength::from_text(&s);
                if parsed.is_none() {
                    warn!(value = %s, "unrecognized ancestryProofStrength ignored");
                }
                parsed
            });

        Ok(FamilyGraph {
            case_id,
            applicant,
            parents_marital_status,
            divorce,
            name_change,
            ancestry_proof_strength,
            father: self.person(raw.father.as_ref()),
            mother: self.person(raw.mother.as_ref()),
            grandparents: GrandparentSlots {
                paternal_grandfather: self.person(raw.paternal_grandfather.as_ref()),
                paternal_grandmother: self.person(raw.paternal_grandmother.as_ref()),
                maternal_grandfather: self.person(raw.maternal_grandfather.as_ref()),
                maternal_grandmother: self.person(raw.maternal_grandmother.as_ref()),
            },
            great_grandparents: GreatGrandparentSlots {
                paternal_grandfather_father: self.person(raw.paternal_grandfather_father.as_ref()),
                paternal_grandmother_father: self.person(raw.paternal_grandmother_father.as_ref()),
                maternal_grandfather_father: self.person(raw.maternal_grandfather_father.as_ref()),
                maternal_grandmother_father: self.person(raw.maternal_grandmother_father.as_ref()),
            },
        })
    }

    /// Missing sub-record → default unknown/non-qualifying person
    fn person(&self, raw: Option<&RawPerson>) -> Person {
        let raw = match raw {
            Some(p) => p,
            None => return Person::default(),
        };

        Person {
            name: self.text(raw.name.as_ref()),
            birth_place: self.text(raw.birth_place.as_ref()),
            nationality_flag: self.flag(raw.nationality_flag.as_ref()),
            vital_status: self
                .text(raw.vital_status.as_ref())
                .map(|s| VitalStatus::from_text(&s))
                .unwrap_or_default(),
            death_date: self.date(raw.death_date.as_ref(), "deathDate"),
            death_place: self.text(raw.death_place.as_ref()),
            has_documentation: match self.flag(raw.has_documentation.as_ref()) {
                Flag::Yes => Some(true),
                Flag::No => Some(false),
                Flag::Unknown => None,
            },
        }
    }

    /// Three-valued flag coercion
    ///
    /// # Rules
    /// - bool → Yes/No
    /// - 1/0 → Yes/No, other numbers → Unknown
    /// - text → `Flag::from_text`
    /// - absent or any other shape → Unknown
    pub fn flag(&self, value: Option<&RawScalar>) -> Flag {
        match value {
            Some(RawScalar::Bool(b)) => Flag::from(*b),
            Some(RawScalar::Int(1)) => Flag::Yes,
            Some(RawScalar::Int(0)) => Flag::No,
            Some(RawScalar::Text(s)) => Flag::from_text(s),
            _ => Flag::Unknown,
        }
    }

    /// Non-empty trimmed text; numbers are rendered as text
    pub fn text(&self, value: Option<&RawScalar>) -> Option<String> {
        let s = match value? {
            RawScalar::Text(s) => s.trim().to_string(),
            RawScalar::Int(i) => i.to_string(),
            RawScalar::Float(f) => f.to_string(),
            RawScalar::Bool(_) | RawScalar::Other(_) => return None,
        };
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    }

    /// Non-negative whole count (years); fractional values truncate
    pub fn count(&self, value: Option<&RawScalar>, field: &str) -> Option<u32> {
        let parsed = match value? {
            RawScalar::Int(i) => u32::try_from(*i).ok(),
            RawScalar::Float(f) if f.is_finite() && *f >= 0.0 => Some(f.trunc() as u32),
            RawScalar::Text(s) if s.trim().is_empty() => return None,
            RawScalar::Text(s) => {
                let t = s.trim();
                t.parse::<u32>().ok().or_else(|| {
                    t.parse::<f64>()
                        .ok()
                        .filter(|f| f.is_finite() && *f >= 0.0)
                        .map(|f| f.trunc() as u32)
                })
            }
            _ => None,
        };

        if parsed.is_none() {
            warn!(field = %field, "unparseable count treated as absent");
        }
        parsed
    }

    /// Date in one of `DATE_FORMATS`; unparseable → None (date rules skip)
    pub fn date(&self, value: Option<&RawScalar>, field: &str) -> Option<NaiveDate> {
        let s = self.text(value)?;
        let parsed = DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(&s, fmt).ok());

        if parsed.is_none() {
            warn!(field = %field, value = %s, "unparseable date treated as absent");
        }
        parsed
    }
}

impl Default for CaseNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n() -> CaseNormalizer {
        CaseNormalizer::new()
    }

    #[test]
    fn test_flag_encodings() {
        assert_eq!(n().flag(Some(&RawScalar::Bool(true))), Flag::Yes);
        assert_eq!(n().flag(Some(&RawScalar::Text("false".into()))), Flag::No);
        assert_eq!(n().flag(Some(&RawScalar::Int(1))), Flag::Yes);
        assert_eq!(n().flag(Some(&RawScalar::Int(7))), Flag::Unknown);
        assert_eq!(n().flag(None), Flag::Unknown);
    }

    #[test]
    fn test_count_parsing() {
        assert_eq!(n().count(Some(&RawScalar::Int(7)), "x"), Some(7));
        assert_eq!(n().count(Some(&RawScalar::Text(" 6 ".into())), "x"), Some(6));
        assert_eq!(n().count(Some(&RawScalar::Float(6.9)), "x"), Some(6));
        assert_eq!(n().count(Some(&RawScalar::Int(-1)), "x"), None);
        assert_eq!(n().count(Some(&RawScalar::Text("many".into())), "x"), None);
    }

    #[test]
    fn test_date_formats() {
        let expected = NaiveDate::from_ymd_opt(1975, 1, 31);
        assert_eq!(n().date(Some(&"1975-01-31".into()), "d"), expected);
        assert_eq!(n().date(Some(&"31/01/1975".into()), "d"), expected);
        assert_eq!(n().date(Some(&"19750131".into()), "d"), expected);
        assert_eq!(n().date(Some(&RawScalar::Int(19750131)), "d"), expected);
        assert_eq!(n().date(Some(&"sometime in 1975".into()), "d"), None);
    }

    #[test]
    fn test_blank_case_id_is_an_error() {
        let raw = RawCaseRecord {
            case_id: Some("   ".into()),
            ..RawCaseRecord::default()
        };
        assert!(matches!(n().normalize(&raw), Err(ImportError::BlankCaseId)));
    }

    #[test]
    fn test_non_text_case_id_is_not_reported_as_blank() {
        let raw = RawCaseRecord {
            case_id: Some(true.into()),
            ..RawCaseRecord::default()
        };
        assert!(matches!(
            n().normalize(&raw),
            Err(ImportError::InvalidCaseId("boolean"))
        ));

        let numeric = RawCaseRecord {
            case_id: Some(42i64.into()),
            ..RawCaseRecord::default()
        };
        assert_eq!(n().normalize(&numeric).unwrap().case_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_missing_ancestors_default_to_unknown() {
        let graph = n().normalize(&RawCaseRecord::default()).unwrap();
        assert_eq!(graph.father, Person::default());
        assert_eq!(graph.grandparents.maternal_grandmother.vital_status, VitalStatus::Unknown);
        assert_eq!(graph.parents_marital_status, MaritalStatus::Unknown);
        assert!(graph.case_id.is_none());
    }
}
