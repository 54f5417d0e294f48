// ==========================================
// Citizenship Eligibility - Family Graph
// ==========================================
// Fixed-depth snapshot: applicant, 2 parents, 4 grandparents,
// up to 4 great-grandparents (fathers of the grandparents).
// Rule: engines take `&FamilyGraph`; nothing mutates it during an evaluation
// Rule: no slot is ever inferred from a descendant's value
// ==========================================

use crate::domain::person::Person;
use crate::domain::types::{Flag, MaritalStatus, NameChangeReason, ProofStrength, Relation};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ApplicantFacts - applicant scalar attributes
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantFacts {
    pub name: Option<String>,
    pub birth_date: Option<NaiveDate>, // None when absent or unparseable
    pub birth_place: Option<String>,
    pub born_in_greece: Flag,
    pub years_schooled_in_greece: Option<u32>,
    pub years_resident_in_greece: Option<u32>,
    pub greek_university_graduate: Flag,
    pub married_to_greek: Flag,
    pub has_child_with_greek_spouse: Flag,
    pub recognized_by_greek: Flag,
    pub adopted_by_greek: Flag,
    pub previously_greek: Flag, // held and lost Greek citizenship
    pub refugee_or_stateless: Flag,
}

// ==========================================
// DivorceInfo - parents' divorce metadata
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivorceInfo {
    pub divorce_date: Option<NaiveDate>,
    pub born_after_divorce: Flag, // explicit answer wins over the date comparison
    pub parent_had_prior_marriages: Flag,
}

// ==========================================
// NameChangeInfo - name change in the line of descent
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameChangeInfo {
    pub parent_name_changed: Flag,
    pub ancestor_name_changed: Flag,
    pub reason: Option<NameChangeReason>,
}

// ==========================================
// GrandparentSlots / GreatGrandparentSlots
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrandparentSlots {
    pub paternal_grandfather: Person,
    pub paternal_grandmother: Person,
    pub maternal_grandfather: Person,
    pub maternal_grandmother: Person,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreatGrandparentSlots {
    pub paternal_grandfather_father: Person,
    pub paternal_grandmother_father: Person,
    pub maternal_grandfather_father: Person,
    pub maternal_grandmother_father: Person,
}

// ==========================================
// FamilyGraph - normalized case snapshot
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyGraph {
    pub case_id: Option<String>,
    pub applicant: ApplicantFacts,
    pub parents_marital_status: MaritalStatus,
    pub divorce: DivorceInfo,
    pub name_change: NameChangeInfo,
    pub ancestry_proof_strength: Option<ProofStrength>,
    pub father: Person,
    pub mother: Person,
    pub grandparents: GrandparentSlots,
    pub great_grandparents: GreatGrandparentSlots,
}

impl FamilyGraph {
    /// Looks up a fixed slot by its relation to the applicant
    ///
    /// # Returns
    /// - Some(&Person) for every ancestor slot
    /// - None for `Relation::Applicant` (the applicant is not a `Person` slot)
    pub fn person(&self, relation: Relation) -> Option<&Person> {
        let gp = &self.grandparents;
        let ggp = &self.great_grandparents;
        match relation {
            Relation::Applicant => None,
            Relation::Father => Some(&self.father),
            Relation::Mother => Some(&self.mother),
            Relation::PaternalGrandfather => Some(&gp.paternal_grandfather),
            Relation::PaternalGrandmother => Some(&gp.paternal_grandmother),
            Relation::MaternalGrandfather => Some(&gp.maternal_grandfather),
            Relation::MaternalGrandmother => Some(&gp.maternal_grandmother),
            Relation::PaternalGrandfatherFather => Some(&ggp.paternal_grandfather_father),
            Relation::PaternalGrandmotherFather => Some(&ggp.paternal_grandmother_father),
            Relation::MaternalGrandfatherFather => Some(&ggp.maternal_grandfather_father),
            Relation::MaternalGrandmotherFather => Some(&ggp.maternal_grandmother_father),
        }
    }

    pub fn qualifies(&self, relation: Relation) -> bool {
        self.person(relation).map_or(false, Person::qualifies)
    }

    pub fn person_mut(&mut self, relation: Relation) -> Option<&mut Person> {
        let gp = &mut self.grandparents;
        let ggp = &mut self.great_grandparents;
        match relation {
            Relation::Applicant => None,
            Relation::Father => Some(&mut self.father),
            Relation::Mother => Some(&mut self.mother),
            Relation::PaternalGrandfather => Some(&mut gp.paternal_grandfather),
            Relation::PaternalGrandmother => Some(&mut gp.paternal_grandmother),
            Relation::MaternalGrandfather => Some(&mut gp.maternal_grandfather),
            Relation::MaternalGrandmother => Some(&mut gp.maternal_grandmother),
            Relation::PaternalGrandfatherFather => Some(&mut ggp.paternal_grandfather_father),
            Relation::PaternalGrandmotherFather => Some(&mut ggp.paternal_grandmother_father),
            Relation::MaternalGrandfatherFather => Some(&mut ggp.maternal_grandfather_father),
            Relation::MaternalGrandmotherFather => Some(&mut ggp.maternal_grandmother_father),
        }
    }
}
