//! Status character coloring for entry rows.
//!
//! # Color Scheme
//! - **Index column**: Green when the change is staged, red otherwise
//! - **Work tree column**: Always red
//!
//! Only the two status characters are colored; paths are printed as-is.

use crate::core::status_code::StatusCode;
use colored::*;

/// Returns a closure that applies the index column color for a staging state
pub fn get_index_color_style(staged: bool) -> Box<dyn Fn(&str) -> ColoredString> {
    if staged {
        Box::new(|text: &str| text.green())
    } else {
        Box::new(|text: &str| text.red())
    }
}

/// Colored index status character
pub fn index_status_colored(code: StatusCode, staged: bool) -> ColoredString {
    let color_fn = get_index_color_style(staged);
    color_fn(&code.to_string())
}

/// Colored work tree status character
pub fn worktree_status_colored(code: StatusCode) -> ColoredString {
    code.to_string().red()
}
