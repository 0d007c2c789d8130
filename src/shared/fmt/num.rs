//! Number formatting utilities for human-readable display.
//!
//! Grouping only; rounding is the caller's job. For money, use the `currency`
//! sibling module.

/// Insert `,` every three digits of an unsigned digit string.
///
/// The input must be the integer digits only, without sign or fraction.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a count with thousands separators.
pub fn display_count(n: u64) -> String {
    group_thousands(&n.to_string())
}
