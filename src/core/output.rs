//! Message formatting for output printed outside the interactive frame.
//!
//! The interactive loop owns the terminal while it runs; these helpers are only
//! used before it starts or after it has released the cursor.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}
