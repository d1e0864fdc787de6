use anyhow::Result;

use crate::cli::ui;
use crate::config::CheckerConfig;
use crate::implementations::checker::CheckPipeline;
use crate::models::claim::Claim;
use crate::traits::fact_checker::FactChecker;

/// Prompt for claims in a loop until the user enters an empty line.
///
/// The prompt validates the minimum length inline, so a too-short claim
/// never starts a check. One check runs at a time.
pub async fn execute(config: &CheckerConfig) -> Result<()> {
    ui::print_header("Claimcheck Interactive");
    ui::print_info("Enter a claim to check. Results may be locally simulated if no backend is reachable.");

    let mut pipeline = CheckPipeline::from_config(config)?;

    loop {
        let raw = match ui::prompt_claim()? {
            Some(text) => text,
            None => break,
        };

        // The prompt already enforced the length, but the claim type is the
        // final authority
        let claim = match Claim::new(&raw) {
            Ok(claim) => claim,
            Err(e) => {
                ui::print_error(&e.to_string());
                continue;
            }
        };

        let spinner = ui::spinner_with_message("Checking facts...");
        let outcome = pipeline.check(&claim).await;
        spinner.finish_and_clear();

        match outcome {
            Ok(outcome) => ui::render_outcome(&outcome),
            Err(e) => {
                ui::print_error("Failed to check facts. Please try again.");
                log::error!("Check failed: {}", e);
            }
        }
    }

    ui::print_info("Goodbye.");
    Ok(())
}
