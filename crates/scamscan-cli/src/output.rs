//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use scamscan_core::UrlCategory;

/// Print the model's message for a checked file.
pub fn print_content_verdict(message: &str) {
    println!();
    println!("{}", "Verdict".bold());
    println!("{}", message);
}

/// Print the category for a checked URL.
pub fn print_url_category(url: &str, category: UrlCategory) {
    println!();
    println!("{}: {}", "URL".bold(), url);
    println!("{}: {}", "Category".bold(), category_colored(category));
    if category.is_threat() {
        println!("{}", "Do not open this link or enter any details on it.".red());
    }
}

fn category_colored(category: UrlCategory) -> ColoredString {
    match category {
        UrlCategory::Benign => category.as_str().green().bold(),
        UrlCategory::Phishing => category.as_str().red().bold(),
        UrlCategory::Malware => category.as_str().red().bold(),
        UrlCategory::Defacement => category.as_str().yellow().bold(),
    }
}
