//! Terminal output utilities.
//!
//! Provides formatting helpers for the report columns.

/// Format a value right-aligned to `width` characters.
///
/// Values longer than `width` are kept whole.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    format!("{value_str:>width$}")
}

/// Render addresses as a bracketed, quoted list: `['10.0.0.1', '10.0.0.2']`.
pub fn format_list<T: AsRef<str>>(items: &[T]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("'{}'", item.as_ref()))
        .collect();
    format!("[{}]", quoted.join(", "))
}
