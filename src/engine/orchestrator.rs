// ==========================================
// Citizenship Eligibility - Evaluation Orchestrator
// ==========================================
// Flow: normalize → chain analysis → path optimization → classification → documents
// Rule: one immutable FamilyGraph per evaluation, never written back
// ==========================================

use crate::config::EngineConfig;
use crate::domain::document::DocumentRequirementMap;
use crate::domain::eligibility::{ChainAnalysis, EligibilityResult, PathPlan};
use crate::domain::family::FamilyGraph;
use crate::engine::{
    AncestryChainAnalyzer, CategoryClassifier, DocumentConditions, DocumentResolver,
    PathOptimizer,
};
use crate::importer::{CaseNormalizer, ImportResult, RawCaseRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

// ==========================================
// EvaluationReport - full output of one evaluation
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub case_id: Option<String>,
    pub chain_analysis: ChainAnalysis,
    pub paths: PathPlan,
    /// Ordered by catalog priority
    pub results: Vec<EligibilityResult>,
    /// Documents for the top-ranked category; empty when nothing matched
    pub documents: DocumentRequirementMap,
    pub evaluated_with: String,
}

impl EvaluationReport {
    pub fn top_result(&self) -> Option<&EligibilityResult> {
        self.results.first()
    }
}

// ==========================================
// EligibilityOrchestrator
// ==========================================
pub struct EligibilityOrchestrator {
    normalizer: CaseNormalizer,
    analyzer: AncestryChainAnalyzer,
    optimizer: PathOptimizer,
    classifier: CategoryClassifier,
    resolver: DocumentResolver,
}

impl EligibilityOrchestrator {
    /// # Parameters
    /// - config: shared engine configuration
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            normalizer: CaseNormalizer::new(),
            analyzer: AncestryChainAnalyzer::new(),
            optimizer: PathOptimizer::new(config.clone()),
            classifier: CategoryClassifier::new(config),
            resolver: DocumentResolver::new(),
        }
    }

    /// Parses and evaluates a JSON case record
    pub fn evaluate_json(&self, text: &str) -> ImportResult<EvaluationReport> {
        let raw = RawCaseRecord::from_json(text)?;
        self.evaluate(&raw)
    }

    /// Normalizes and evaluates a raw case record
    ///
    /// # Returns
    /// - Err only for structural input problems (see ImportError)
    #[instrument(skip_all, fields(case_id = raw.case_id_hint().unwrap_or("-")))]
    pub fn evaluate(&self, raw: &RawCaseRecord) -> ImportResult<EvaluationReport> {
        let graph = self.normalizer.normalize(raw)?;
        let report = self.evaluate_graph(&graph);

        info!(
            results = report.results.len(),
            top = report.top_result().map(|r| r.category_id.as_str()).unwrap_or("none"),
            primary_path = report.paths.primary.is_some(),
            alternatives = report.paths.alternatives.len(),
            "case evaluated"
        );
        Ok(report)
    }

    /// Runs the engines over an already-normalized graph
    pub fn evaluate_graph(&self, graph: &FamilyGraph) -> EvaluationReport {
        let chain_analysis = self.analyzer.analyze(graph);
        let paths = self.optimizer.optimize(&chain_analysis);
        let results = self.classifier.classify(graph, &chain_analysis, &paths);

        let documents = match results.first() {
            Some(top) => self
                .resolver
                .resolve(top.category_id, &DocumentConditions::from_graph(graph)),
            None => DocumentRequirementMap::new(),
        };

        EvaluationReport {
            case_id: graph.case_id.clone(),
            chain_analysis,
            paths,
            results,
            documents,
            evaluated_with: crate::VERSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::CategoryId;

    fn orchestrator() -> EligibilityOrchestrator {
        EligibilityOrchestrator::new(Arc::new(EngineConfig::default()))
    }

    #[test]
    fn test_empty_record_yields_empty_report() {
        let report = orchestrator().evaluate_json("{}").unwrap();
        assert!(report.results.is_empty());
        assert!(report.documents.is_empty());
        assert!(report.paths.is_empty());
        assert_eq!(report.evaluated_with, crate::VERSION);
    }

    #[test]
    fn test_documents_follow_top_result() {
        let report = orchestrator()
            .evaluate_json(
                r#"{"caseId":"c-1","birthDate":"1975-01-01","father":{"nationalityFlag":true}}"#,
            )
            .unwrap();
        assert_eq!(report.case_id.as_deref(), Some("c-1"));
        let top = report.top_result().unwrap();
        assert_eq!(top.category_id, CategoryId::BirthFatherPre1982);
        assert!(!report.documents.is_empty());
    }

    #[test]
    fn test_structural_errors_propagate() {
        assert!(orchestrator().evaluate_json("[1, 2]").is_err());
        assert!(orchestrator().evaluate_json("{not json").is_err());
    }
}
