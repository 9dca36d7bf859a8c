//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use ppca_core::{AnalysisResult, Severity, VerificationResult};

/// Print an analysis result.
pub fn print_analysis(result: &AnalysisResult) {
    if result.has_errors {
        println!(
            "{} {} ({} severity)",
            "✗".red().bold(),
            "Problems found".bold(),
            severity_colored(result.severity)
        );
    } else {
        println!("{} {}", "✓".green().bold(), "No errors detected".bold());
    }

    print_list("Errors", &result.errors);

    if !result.corrected_code.is_empty() {
        println!();
        println!("{}", "Corrected Code".bold());
        for line in result.corrected_code.lines() {
            println!("  {}", line.cyan());
        }
    }

    print_list("Changes", &result.changes);

    println!();
    println!("{}", "Explanation".bold());
    println!("  {}", result.explanation);

    print_list("Best Practices", &result.best_practices);
}

/// Print a verification result.
pub fn print_verification(result: &VerificationResult) {
    if result.is_valid {
        println!("{} {}", "✓".green().bold(), result.message.bold());
    } else {
        println!("{} {}", "✗".red().bold(), result.message.bold());
    }

    print_list("Remaining Issues", &result.remaining_issues);
    print_list("Suggestions", &result.suggestions);
    print_list("Notes", &result.notes);
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("{}", title.bold());
    for item in items {
        println!("  {} {}", "•".dimmed(), item);
    }
}

fn severity_colored(severity: Severity) -> ColoredString {
    match severity {
        Severity::Low => "low".normal(),
        Severity::Medium => "medium".yellow(),
        Severity::High => "high".red().bold(),
    }
}
