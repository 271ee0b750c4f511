use std::fmt::Display;

use itertools::Itertools;

/// Format items as a bulleted list, one item per line.
///
/// Continuation lines of multi-line items (like `git` error output) are indented to line up
/// with the text after the bullet, so nested lists stay readable.
pub fn format_bulleted_list(items: impl IntoIterator<Item = impl Display>) -> String {
    items
        .into_iter()
        .map(|item| format!("• {}", item.to_string().lines().join("\n  ")))
        .join("\n")
}
