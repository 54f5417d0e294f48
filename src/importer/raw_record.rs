// ==========================================
// Citizenship Eligibility - Raw Case Record
// ==========================================
// Wire shape handed over by the form layer: camelCase JSON, every
// field optional, scalars in native or textual encoding.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

/// Any scalar as it arrived; coerced by `CaseNormalizer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Other(Value),
}

impl From<bool> for RawScalar {
    fn from(value: bool) -> Self {
        RawScalar::Bool(value)
    }
}

impl From<&str> for RawScalar {
    fn from(value: &str) -> Self {
        RawScalar::Text(value.to_string())
    }
}

impl From<i64> for RawScalar {
    fn from(value: i64) -> Self {
        RawScalar::Int(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPerson {
    pub name: Option<RawScalar>,
    pub birth_place: Option<RawScalar>,
    #[serde(alias = "isGreek", alias = "greek")]
    pub nationality_flag: Option<RawScalar>,
    #[serde(alias = "status")]
    pub vital_status: Option<RawScalar>,
    pub death_date: Option<RawScalar>,
    pub death_place: Option<RawScalar>,
    pub has_documentation: Option<RawScalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCaseRecord {
    pub case_id: Option<RawScalar>,

    // ===== Applicant =====
    #[serde(alias = "name")]
    pub applicant_name: Option<RawScalar>,
    pub birth_date: Option<RawScalar>,
    pub birth_place: Option<RawScalar>,
    pub born_in_greece: Option<RawScalar>,
    pub years_schooled_in_greece: Option<RawScalar>,
    pub years_resident_in_greece: Option<RawScalar>,
    pub greek_university_graduate: Option<RawScalar>,
    pub married_to_greek: Option<RawScalar>,
    pub has_child_with_greek_spouse: Option<RawScalar>,
    pub recognized_by_greek: Option<RawScalar>,
    pub adopted_by_greek: Option<RawScalar>,
    pub previously_greek: Option<RawScalar>,
    pub refugee_or_stateless: Option<RawScalar>,

    // ===== Case conditions =====
    pub parents_marital_status: Option<RawScalar>,
    pub divorce_date: Option<RawScalar>,
    pub born_after_divorce: Option<RawScalar>,
    pub parent_had_prior_marriages: Option<RawScalar>,
    pub parent_name_changed: Option<RawScalar>,
    pub ancestor_name_changed: Option<RawScalar>,
    pub name_change_reason: Option<RawScalar>,
    pub ancestry_proof_strength: Option<RawScalar>,

    // ===== Ancestors =====
    // A slot that is not an object counts as a missing sub-record
    #[serde(deserialize_with = "lenient_person")]
    pub father: Option<RawPerson>,
    #[serde(deserialize_with = "lenient_person")]
    pub mother: Option<RawPerson>,
    #[serde(deserialize_with = "lenient_person")]
    pub paternal_grandfather: Option<RawPerson>,
    #[serde(deserialize_with = "lenient_person")]
    pub paternal_grandmother: Option<RawPerson>,
    #[serde(deserialize_with = "lenient_person")]
    pub maternal_grandfather: Option<RawPerson>,
    #[serde(deserialize_with = "lenient_person")]
    pub maternal_grandmother: Option<RawPerson>,
    #[serde(deserialize_with = "lenient_person")]
    pub paternal_grandfather_father: Option<RawPerson>,
    #[serde(deserialize_with = "lenient_person")]
    pub paternal_grandmother_father: Option<RawPerson>,
    #[serde(deserialize_with = "lenient_person")]
    pub maternal_grandfather_father: Option<RawPerson>,
    #[serde(deserialize_with = "lenient_person")]
    pub maternal_grandmother_father: Option<RawPerson>,
}

impl RawCaseRecord {
    /// Parses a case record from JSON text
    ///
    /// # Errors
    /// - MalformedJson: not JSON
    /// - NotAnObject: top-level value is not an object
    pub fn from_json(text: &str) -> ImportResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> ImportResult<Self> {
        if !value.is_object() {
            return Err(ImportError::NotAnObject(json_type_name(&value).to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Case id as sent, for log context only (not normalized)
    pub fn case_id_hint(&self) -> Option<&str> {
        match &self.case_id {
            Some(RawScalar::Text(id)) => Some(id.as_str()),
            _ => None,
        }
    }
}

/// Ancestor slot: object → RawPerson; null or any other shape → None
fn lenient_person<'de, D>(deserializer: D) -> Result<Option<RawPerson>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        other => {
            warn!(
                found = json_type_name(&other),
                "ancestor sub-record is not an object, treated as missing"
            );
            Ok(None)
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_valid() {
        let record = RawCaseRecord::from_json("{}").unwrap();
        assert_eq!(record, RawCaseRecord::default());
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = RawCaseRecord::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, ImportError::NotAnObject(ref t) if t == "array"));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = RawCaseRecord::from_json("{not json").unwrap_err();
        assert!(matches!(err, ImportError::MalformedJson(_)));
    }

    #[test]
    fn test_non_object_ancestor_slot_is_missing() {
        let record = RawCaseRecord::from_json(
            r#"{"yearsResidentInGreece": 7, "father": "", "mother": false,
                "paternalGrandfather": null, "maternalGrandfather": [1],
                "maternalGrandmother": {"isGreek": true}}"#,
        )
        .unwrap();
        assert!(record.father.is_none());
        assert!(record.mother.is_none());
        assert!(record.paternal_grandfather.is_none());
        assert!(record.maternal_grandfather.is_none());
        assert_eq!(
            record.maternal_grandmother.unwrap().nationality_flag,
            Some(RawScalar::Bool(true))
        );
        assert_eq!(record.years_resident_in_greece, Some(RawScalar::Int(7)));
    }

    #[test]
    fn test_scalar_encodings_are_kept_as_sent() {
        let record = RawCaseRecord::from_json(
            r#"{"bornInGreece": "true", "marriedToGreek": false, "yearsResidentInGreece": 7,
                "father": {"isGreek": "false", "status": "alive"}}"#,
        )
        .unwrap();
        assert_eq!(record.born_in_greece, Some(RawScalar::Text("true".into())));
        assert_eq!(record.married_to_greek, Some(RawScalar::Bool(false)));
        assert_eq!(record.years_resident_in_greece, Some(RawScalar::Int(7)));
        let father = record.father.unwrap();
        assert_eq!(father.nationality_flag, Some(RawScalar::Text("false".into())));
        assert_eq!(father.vital_status, Some(RawScalar::Text("alive".into())));
    }
}
