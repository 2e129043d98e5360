// Colored terminal output for verdicts and the lexicon table.
//
// This module handles all terminal-specific formatting. The CLI commands in
// main.rs delegate here.

use colored::Colorize;

use crate::pipeline::verdict::Assessment;
use crate::summary::traits::SummaryOutcome;
use crate::toxicity::lexicon::{Category, Lexicon};
use crate::toxicity::traits::TOXIC_THRESHOLD;

/// Longest censored text shown before truncating.
const PREVIEW_CHARS: usize = 400;

/// Display a full assessment: verdict, matched terms and summary.
pub fn display_assessment(assessment: &Assessment) {
    let verdict = &assessment.verdict;

    let heading = if verdict.is_toxic {
        "=== Toxic ===".red().bold()
    } else {
        "=== Not toxic ===".green().bold()
    };
    println!("\n{heading}");
    println!(
        "  Score: {}  (threshold {:.2})",
        colorize_score(verdict.score),
        TOXIC_THRESHOLD
    );
    println!("  {}", verdict.message);

    if !verdict.detected_patterns.is_empty() {
        let names: Vec<String> = verdict
            .detected_patterns
            .iter()
            .map(|c| c.as_str().yellow().to_string())
            .collect();
        println!("  Categories: {}", names.join(", "));
    }

    if !assessment.scoring.terms.is_empty() {
        let terms: Vec<&str> = assessment.scoring.terms.iter().map(String::as_str).collect();
        println!("  Matched terms: {}", terms.join(", ").dimmed());
    }

    println!("\n  {}", "Censored text:".bold());
    println!("    {}", super::truncate_chars(&verdict.censored_text, PREVIEW_CHARS));

    match &assessment.summary {
        SummaryOutcome::Summary(summary) => {
            println!("\n  {}", "Summary:".bold());
            println!("    {summary}");
        }
        SummaryOutcome::Failed(reason) => {
            println!(
                "\n  {} summary unavailable: {}",
                "Warning:".yellow(),
                reason
            );
        }
        SummaryOutcome::Skipped => {}
    }
    println!();
}

/// Display every category with its weight and rule count.
pub fn display_lexicon(lexicon: &Lexicon) {
    println!(
        "\n{}",
        format!("=== Lexicon ({} rules) ===", lexicon.rules().len()).bold()
    );
    println!();
    println!(
        "  {:<20} {:>6}  {:>5}",
        "Category".dimmed(),
        "Weight".dimmed(),
        "Rules".dimmed(),
    );
    println!("  {}", "-".repeat(34).dimmed());

    for category in Category::ALL {
        println!(
            "  {:<20} {:>6.1}  {:>5}",
            category.as_str(),
            category.weight(),
            lexicon.rule_count(category),
        );
    }
    println!();
}

/// Colorize a score by how far past the threshold it is.
fn colorize_score(score: f64) -> colored::ColoredString {
    let text = format!("{score:.2}");
    if score >= 0.7 {
        text.red().bold()
    } else if score > TOXIC_THRESHOLD {
        text.bright_red()
    } else if score > 0.0 {
        text.yellow()
    } else {
        text.green()
    }
}
