use anyhow::{anyhow, Result};
use std::fs;
use std::path::Path;

use crate::cli::ui;
use crate::config::CheckerConfig;
use crate::errors::FactCheckError;
use crate::implementations::checker::CheckPipeline;
use crate::models::claim::Claim;
use crate::traits::fact_checker::FactChecker;

/// Run one check cycle for a single claim
pub async fn execute(
    config: &CheckerConfig,
    claim_arg: Option<&str>,
    file: Option<&Path>,
    output_format: &str,
) -> Result<()> {
    let raw = load_claim_text(claim_arg, file)?;

    // Input validation happens before any processing
    let claim = match Claim::new(&raw) {
        Ok(claim) => claim,
        Err(e) => {
            ui::print_error(&e.to_string());
            return Err(anyhow!("{}", e));
        }
    };

    let mut pipeline = CheckPipeline::from_config(config)?;

    let spinner = ui::spinner_with_message("Checking facts...");
    let outcome = pipeline.check(&claim).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(outcome) => {
            if output_format == "json" {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                ui::render_outcome(&outcome);
            }
            Ok(())
        }
        Err(e @ FactCheckError::BackendError { .. }) | Err(e @ FactCheckError::TransportError(_)) => {
            // Strict mode: backend failures reach the user directly
            ui::print_error(&e.to_string());
            Err(anyhow!("{}", e))
        }
        Err(e) => {
            ui::print_error("Failed to check facts. Please try again.");
            Err(anyhow!("{}", e))
        }
    }
}

fn load_claim_text(claim_arg: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (claim_arg, file) {
        (Some(text), _) => Ok(text.to_string()),
        (None, Some(path)) => fs::read_to_string(path)
            .map(|content| content.trim().to_string())
            .map_err(|e| anyhow!("Failed to read claim file {}: {}", path.display(), e)),
        (None, None) => Err(anyhow!("Provide a claim as an argument or with --file")),
    }
}
