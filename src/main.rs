// ==========================================
// Citizenship Eligibility - CLI entry
// ==========================================
// Usage: citizenship-eligibility <case.json> [config.json]
// Report → stdout (pretty JSON), logs → stderr
// ==========================================

use anyhow::{bail, Context, Result};
use citizenship_eligibility::{logging, EligibilityOrchestrator, EngineConfig, APP_NAME, VERSION};
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> Result<()> {
    logging::init();

    let mut args = std::env::args_os().skip(1);
    let Some(case_path) = args.next().map(PathBuf::from) else {
        bail!("usage: citizenship-eligibility <case.json> [config.json]");
    };
    let config_path = args.next().map(PathBuf::from);

    tracing::info!("{} v{}", APP_NAME, VERSION);

    let config = EngineConfig::load_or_default(config_path.as_deref())
        .context("failed to load engine configuration")?;

    let text = std::fs::read_to_string(&case_path)
        .with_context(|| format!("failed to read case file {}", case_path.display()))?;

    let orchestrator = EligibilityOrchestrator::new(Arc::new(config));
    let report = orchestrator
        .evaluate_json(&text)
        .with_context(|| format!("failed to evaluate {}", case_path.display()))?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
