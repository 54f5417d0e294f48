// ==========================================
// Citizenship Eligibility - Document Requirement Resolver
// ==========================================
// Responsibility: category + case conditions → document set per section
// Rule: base set first, condition blocks are appended after it
// Rule: appends never remove or overwrite a base entry
// ==========================================

mod tables;

use crate::domain::category::CategoryId;
use crate::domain::document::{DocumentRequirement, DocumentRequirementMap, DocumentSection};
use crate::domain::family::FamilyGraph;
use crate::domain::types::{Flag, MaritalStatus, NameChangeReason};
use serde::{Deserialize, Serialize};
use tables::DocumentSpec;
use tracing::debug;

// ==========================================
// DocumentConditions - case-specific circumstances
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentConditions {
    pub parents_marital_status: MaritalStatus,
    /// None when neither an explicit answer nor both dates are available
    pub born_after_divorce: Option<bool>,
    pub parent_had_prior_marriages: bool,
    pub parent_name_changed: bool,
    pub ancestor_name_changed: bool,
    pub name_change_reason: NameChangeReason,
}

impl DocumentConditions {
    /// Derives the conditions from a normalized graph
    ///
    /// # Rules
    /// - born_after_divorce: explicit flag wins; otherwise birth date > divorce date
    /// - missing name change reason → Other
    pub fn from_graph(graph: &FamilyGraph) -> Self {
        let born_after_divorce = match graph.divorce.born_after_divorce {
            Flag::Yes => Some(true),
            Flag::No => Some(false),
            Flag::Unknown => match (graph.applicant.birth_date, graph.divorce.divorce_date) {
                (Some(birth), Some(divorce)) => Some(birth > divorce),
                _ => None,
            },
        };

        Self {
            parents_marital_status: graph.parents_marital_status,
            born_after_divorce,
            parent_had_prior_marriages: graph.divorce.parent_had_prior_marriages.is_yes(),
            parent_name_changed: graph.name_change.parent_name_changed.is_yes(),
            ancestor_name_changed: graph.name_change.ancestor_name_changed.is_yes(),
            name_change_reason: graph.name_change.reason.unwrap_or_default(),
        }
    }
}

// ==========================================
// DocumentResolver
// ==========================================
pub struct DocumentResolver;

impl DocumentResolver {
    pub fn new() -> Self {
        Self
    }

    /// Composes the document set
    ///
    /// # Rules
    /// 1. base set of the category
    /// 2. divorced → divorce block (+ prior marriages, + recognition if born after divorce)
    /// 3. never married → recognition block
    /// 4. name change (parent and/or ancestor) → reason block + legacy identity document
    pub fn resolve(
        &self,
        category: CategoryId,
        conditions: &DocumentConditions,
    ) -> DocumentRequirementMap {
        let mut map = DocumentRequirementMap::new();

        for (section, specs) in tables::base_set(category) {
            append(&mut map, *section, specs);
        }

        match conditions.parents_marital_status {
            MaritalStatus::Divorced => {
                append(&mut map, DocumentSection::Parent, tables::DIVORCE_BLOCK);
                if conditions.parent_had_prior_marriages {
                    append(&mut map, DocumentSection::Parent, tables::PRIOR_MARRIAGES_BLOCK);
                }
                if conditions.born_after_divorce == Some(true) {
                    append(&mut map, DocumentSection::Parent, tables::RECOGNITION_BLOCK);
                }
            }
            MaritalStatus::NeverMarried => {
                append(&mut map, DocumentSection::Parent, tables::RECOGNITION_BLOCK);
            }
            _ => {}
        }

        let reason = conditions.name_change_reason;
        if conditions.parent_name_changed {
            self.append_name_change(&mut map, DocumentSection::Parent, reason);
        }
        if conditions.ancestor_name_changed {
            self.append_name_change(&mut map, DocumentSection::Ancestry, reason);
        }

        debug!(
            category = %category,
            sections = map.len(),
            documents = map.values().map(Vec::len).sum::<usize>(),
            "document set resolved"
        );
        map
    }

    fn append_name_change(
        &self,
        map: &mut DocumentRequirementMap,
        section: DocumentSection,
        reason: NameChangeReason,
    ) {
        append(map, section, tables::name_change_block(reason));
        append(map, section, &[tables::LEGACY_IDENTITY_DOCUMENT]);
    }
}

impl Default for DocumentResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends specs to a section, skipping ids already present there
fn append(map: &mut DocumentRequirementMap, section: DocumentSection, specs: &[DocumentSpec]) {
    let entries = map.entry(section).or_default();
    for spec in specs {
        if entries.iter().all(|d| d.id != spec.id) {
            entries.push(DocumentRequirement::from(spec));
        }
    }
}
