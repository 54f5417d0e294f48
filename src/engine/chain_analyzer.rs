// ==========================================
// Citizenship Eligibility - Ancestry Chain Analyzer
// ==========================================
// Responsibility: closest Greek ancestor + chain gaps + deceased-in-chain
// Input: &FamilyGraph
// Output: ChainAnalysis
// Rule: fixed scan order, so ties always resolve the same way
// Rule: stateless, no side effects, no I/O
// ==========================================

use crate::domain::eligibility::{ChainAnalysis, ChainGap, DeceasedInChain};
use crate::domain::family::FamilyGraph;
use crate::domain::types::{Relation, Side, VitalStatus};
use tracing::debug;

pub struct AncestryChainAnalyzer;

impl AncestryChainAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyzes the ancestry chain
    ///
    /// # Rules
    /// 1. father/mother checked directly
    /// 2. no Greek parent → first qualifying grandparent in fixed order
    /// 3. no Greek grandparent either → first qualifying great-grandparent
    /// 4. per side: grandparent qualifies, parent does not → ChainGap
    ///    (deceased parent additionally → DeceasedInChain)
    pub fn analyze(&self, graph: &FamilyGraph) -> ChainAnalysis {
        let greek_father = graph.father.qualifies();
        let greek_mother = graph.mother.qualifies();
        let has_greek_parent = greek_father || greek_mother;

        let first_grandparent = Self::first_qualifying(graph, &Relation::GRANDPARENTS);
        let first_great_grandparent = Self::first_qualifying(graph, &Relation::GREAT_GRANDPARENTS);

        let closest_greek_ancestor = if greek_father {
            Some(Relation::Father)
        } else if greek_mother {
            Some(Relation::Mother)
        } else {
            first_grandparent.or(first_great_grandparent)
        };

        let mut chain_gaps = Vec::new();
        let mut deceased_in_chain = Vec::new();

        for side in Side::ALL {
            let Some(gap) = Self::gap_on_side(graph, side) else {
                continue;
            };

            if gap.missing_relation_parent_status == VitalStatus::Deceased {
                let parent = side.parent();
                deceased_in_chain.push(DeceasedInChain {
                    relation: parent,
                    side,
                    note: format!(
                        "The {} held a right to citizenship through the {} but died without exercising it",
                        parent.label(),
                        gap.greek_ancestor_relation.label()
                    ),
                });
            }

            debug!(
                side = %side,
                parent_status = %gap.missing_relation_parent_status,
                ancestor = %gap.greek_ancestor_relation,
                "chain gap detected"
            );
            chain_gaps.push(gap);
        }

        ChainAnalysis {
            greek_father,
            greek_mother,
            has_greek_parent,
            has_greek_grandparent: first_grandparent.is_some(),
            has_greek_great_grandparent: first_great_grandparent.is_some(),
            closest_greek_ancestor,
            chain_gaps,
            deceased_in_chain,
        }
    }

    fn first_qualifying(graph: &FamilyGraph, order: &[Relation]) -> Option<Relation> {
        order.iter().copied().find(|r| graph.qualifies(*r))
    }

    /// At most one gap per side; grandfather wins over grandmother
    fn gap_on_side(graph: &FamilyGraph, side: Side) -> Option<ChainGap> {
        let parent = graph.person(side.parent())?;
        if parent.qualifies() {
            return None;
        }

        Relation::GRANDPARENTS
            .iter()
            .copied()
            .filter(|r| r.side() == Some(side))
            .find(|r| graph.qualifies(*r))
            .map(|ancestor| ChainGap {
                side,
                missing_relation_parent_status: parent.vital_status,
                greek_ancestor_relation: ancestor,
            })
    }
}

impl Default for AncestryChainAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::Person;
    use crate::domain::types::Flag;

    fn greek() -> Person {
        Person::with_nationality(Flag::Yes)
    }

    fn not_greek(status: VitalStatus) -> Person {
        Person {
            nationality_flag: Flag::No,
            vital_status: status,
            ..Person::default()
        }
    }

    #[test]
    fn test_greek_father_is_closest_and_blocks_paternal_gap() {
        let mut graph = FamilyGraph::default();
        graph.father = greek();
        graph.grandparents.paternal_grandfather = greek();

        let analysis = AncestryChainAnalyzer::new().analyze(&graph);
        assert!(analysis.has_greek_parent);
        assert_eq!(analysis.closest_greek_ancestor, Some(Relation::Father));
        assert!(analysis.gap_on(Side::Paternal).is_none());
        assert!(analysis.has_greek_grandparent);
    }

    #[test]
    fn test_grandparent_scan_order() {
        let mut graph = FamilyGraph::default();
        graph.grandparents.paternal_grandmother = greek();
        graph.grandparents.maternal_grandfather = greek();

        let analysis = AncestryChainAnalyzer::new().analyze(&graph);
        assert_eq!(
            analysis.closest_greek_ancestor,
            Some(Relation::PaternalGrandmother)
        );
        assert_eq!(analysis.chain_gaps.len(), 2);
        assert_eq!(analysis.chain_gaps[0].side, Side::Paternal);
        assert_eq!(analysis.chain_gaps[1].side, Side::Maternal);
    }

    #[test]
    fn test_one_gap_per_side_even_with_two_greek_grandparents() {
        let mut graph = FamilyGraph::default();
        graph.mother = not_greek(VitalStatus::Alive);
        graph.grandparents.maternal_grandfather = greek();
        graph.grandparents.maternal_grandmother = greek();

        let analysis = AncestryChainAnalyzer::new().analyze(&graph);
        assert_eq!(analysis.chain_gaps.len(), 1);
        let gap = analysis.chain_gaps[0];
        assert_eq!(gap.side, Side::Maternal);
        assert_eq!(gap.greek_ancestor_relation, Relation::MaternalGrandfather);
        assert_eq!(gap.missing_relation_parent_status, VitalStatus::Alive);
    }

    #[test]
    fn test_deceased_parent_produces_deceased_entry() {
        let mut graph = FamilyGraph::default();
        graph.father = not_greek(VitalStatus::Deceased);
        graph.grandparents.paternal_grandfather = greek();

        let analysis = AncestryChainAnalyzer::new().analyze(&graph);
        assert_eq!(analysis.deceased_in_chain.len(), 1);
        let entry = &analysis.deceased_in_chain[0];
        assert_eq!(entry.relation, Relation::Father);
        assert!(entry.note.contains("died without exercising it"));
    }

    #[test]
    fn test_great_grandparent_only_when_no_grandparent() {
        let mut graph = FamilyGraph::default();
        graph.great_grandparents.maternal_grandmother_father = greek();

        let analysis = AncestryChainAnalyzer::new().analyze(&graph);
        assert!(analysis.has_greek_great_grandparent);
        assert!(!analysis.has_greek_grandparent);
        assert_eq!(
            analysis.closest_greek_ancestor,
            Some(Relation::MaternalGrandmotherFather)
        );
        assert!(analysis.chain_gaps.is_empty());

        graph.grandparents.maternal_grandfather = greek();
        let analysis = AncestryChainAnalyzer::new().analyze(&graph);
        assert_eq!(
            analysis.closest_greek_ancestor,
            Some(Relation::MaternalGrandfather)
        );
        assert!(analysis.has_greek_great_grandparent);
    }

    #[test]
    fn test_unknown_flag_does_not_qualify() {
        let mut graph = FamilyGraph::default();
        graph.grandparents.paternal_grandfather = Person::with_nationality(Flag::Unknown);

        let analysis = AncestryChainAnalyzer::new().analyze(&graph);
        assert!(analysis.closest_greek_ancestor.is_none());
        assert!(analysis.chain_gaps.is_empty());
    }
}
