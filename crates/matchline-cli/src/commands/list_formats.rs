//! List formats command implementation.

use matchline_core::OutputFormat;

/// Runs the list-formats command.
pub fn run() {
    println!("Available formats:\n");
    println!("{:<10} Description", "Name");
    println!("{}", "-".repeat(60));

    for format in OutputFormat::ALL {
        let marker = if format == OutputFormat::default() {
            " (default)"
        } else {
            ""
        };
        println!("{:<10} {}{marker}", format.to_string(), format.description());
    }

    println!("\nUse --format to pick one, e.g.:");
    println!("  matchline format --format emacs findings.json");
    println!("  matchline format --format json -o out.json findings.json");
}
