use colored::*;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use textwrap::wrap;

use crate::models::claim::MIN_CLAIM_LEN;
use crate::models::source::MatchedSource;
use crate::models::verdict::{CheckOutcome, CheckResult, RemoteReport, VerdictCategory};

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result line
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Print text with proper wrapping for the terminal width
pub fn print_wrapped(text: &str) {
    let width = Term::stdout().size().1 as usize;
    for line in wrap(text, width.saturating_sub(10)) {
        println!("  {}", line);
    }
}

/// Display a spinner while a check is in flight
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Prompt for a claim, enforcing the minimum length inline. An empty entry
/// returns None so callers can exit the loop.
pub fn prompt_claim() -> std::io::Result<Option<String>> {
    let claim: String = Input::with_theme(&get_theme())
        .with_prompt("Claim to check (empty to quit)")
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            if input.is_empty() || input.trim().chars().count() >= MIN_CLAIM_LEN {
                Ok(())
            } else {
                Err(format!(
                    "Please enter a claim with at least {} characters",
                    MIN_CLAIM_LEN
                ))
            }
        })
        .interact_text()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    if claim.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(claim))
    }
}

fn verdict_colored(category: VerdictCategory, label: &str) -> ColoredString {
    match category {
        VerdictCategory::True => label.green().bold(),
        VerdictCategory::Mixed => label.yellow().bold(),
        VerdictCategory::Unverified => label.cyan().bold(),
        VerdictCategory::False => label.red().bold(),
    }
}

/// Narrative paragraph shown under the verdict label
fn verdict_narrative(category: VerdictCategory, source_count: usize) -> String {
    match category {
        VerdictCategory::True => format!(
            "Based on our analysis of {} credible sources, this claim appears to be accurate. \
             The information aligns with verified facts from reputable sources and expert analysis.",
            source_count
        ),
        VerdictCategory::False => format!(
            "Our fact-checking process using {} credible sources indicates this claim is likely false. \
             The available evidence contradicts the key assertions made in this statement.",
            source_count
        ),
        VerdictCategory::Mixed => format!(
            "This claim contains both accurate and inaccurate elements. Our analysis of {} sources shows \
             that while some aspects are supported by evidence, other parts lack verification or are \
             contradicted by credible sources.",
            source_count
        ),
        VerdictCategory::Unverified => "We could not find sufficient evidence from credible sources to verify this claim. \
             This may be due to the claim being too recent, too specific, or relating to information \
             that is not yet publicly available from reliable sources."
            .to_string(),
    }
}

fn render_confidence_bar(percent: u8) {
    let width = 40usize;
    let filled = (percent as usize * width) / 100;
    let bar = format!(
        "[{}{}]",
        "#".repeat(filled),
        "-".repeat(width.saturating_sub(filled))
    );
    println!("{} {} {}%", "Confidence:".bold(), bar.cyan(), percent);
}

fn render_source(source: &MatchedSource) {
    println!(
        "  {} {}",
        "•".blue(),
        source.title.bold()
    );
    println!(
        "    {} - {} ({}% credible)",
        source.name(),
        source.url.underline(),
        source.credibility_score()
    );
    print_wrapped(&source.excerpt);
    println!(
        "    Published: {} | Relevance: {}%",
        source.publish_date, source.relevance_score
    );
}

/// Render a simulated check result
pub fn render_simulated(result: &CheckResult) {
    print_header("Fact Check Result");
    print_warning("Backend unavailable - this result is a local simulation, not verified data.");

    println!(
        "\n{} {}",
        "Verdict:".bold(),
        verdict_colored(result.verdict.category, &result.verdict.label)
    );
    print_result("Claim", result.claim.text());

    println!();
    print_result("Claim Type", &result.analysis.topic.to_string());
    print_result("Key Topics", &result.analysis.keywords.join(", "));
    print_result("Sentiment", &result.analysis.sentiment.to_string());
    print_result("Complexity", &result.analysis.complexity.to_string());
    print_result(
        "Analysis completed on",
        &result.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );

    println!("\n{}", "Sources:".bold());
    for source in &result.sources {
        render_source(source);
    }

    println!();
    render_confidence_bar(result.confidence_percent);
    println!(
        "  Based on {} credible sources and comprehensive analysis",
        result.sources.len()
    );

    println!();
    print_wrapped(&verdict_narrative(result.verdict.category, result.sources.len()));
}

/// Render a backend-produced report
pub fn render_remote(report: &RemoteReport) {
    print_header("Fact Check Result");
    print_info("Result produced by the configured backend.");

    println!();
    render_confidence_bar(report.credibility_score);

    if !report.ai_analysis.is_empty() {
        println!("\n{}", "Analysis:".bold());
        print_wrapped(&report.ai_analysis);
    }

    if !report.entities.is_empty() {
        println!("\n{}", "Entities:".bold());
        for (category, values) in &report.entities {
            print_result(category, &values.join(", "));
        }
    }

    if !report.related_articles.is_empty() {
        println!("\n{}", "Related Articles:".bold());
        for article in &report.related_articles {
            println!("  {} {}", "•".blue(), article.title.bold());
            println!("    {} - {}", article.source, article.url.underline());
            if !article.description.is_empty() {
                print_wrapped(&article.description);
            }
            if !article.published_at.is_empty() {
                println!("    Published: {}", article.published_at);
            }
        }
    }

    if !report.timestamp.is_empty() {
        println!();
        print_result("Checked at", &report.timestamp);
    }
}

/// Render either outcome variant
pub fn render_outcome(outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::Remote(report) => render_remote(report),
        CheckOutcome::Simulated(result) => render_simulated(result),
    }
}
