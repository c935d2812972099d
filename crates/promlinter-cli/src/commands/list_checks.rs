//! List checks command implementation.

use promlinter::rules::all_checks;

/// Runs the list-checks command.
pub fn run() {
    println!("Available checks:\n");
    println!("{:<8} {:<28} Description", "Code", "Name");
    println!("{}", "-".repeat(72));

    for check in all_checks() {
        println!(
            "{:<8} {:<28} {}",
            check.code(),
            check.name(),
            check.description()
        );
    }

    println!("\nDisable checks by name or code, e.g.:");
    println!("  promlinter lint --disable unit-abbreviations,PL001");
}
