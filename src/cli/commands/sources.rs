use anyhow::Result;
use colored::*;

use crate::cli::ui;
use crate::config::CheckerConfig;

/// List the curated source catalog
pub fn execute(config: &CheckerConfig, output_format: &str) -> Result<()> {
    if output_format == "json" {
        println!("{}", serde_json::to_string_pretty(&config.catalog)?);
        return Ok(());
    }

    ui::print_header("Curated Source Catalog");
    for source in &config.catalog {
        println!(
            "  {:<28} {:<18} {:>3}% credible  [{}]",
            source.name.bold(),
            source.base_url,
            source.credibility_score,
            source.category
        );
    }
    println!("\n{} sources total", config.catalog.len());
    Ok(())
}
