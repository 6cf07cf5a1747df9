// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! String helpers.

/// Return `fallback` when `value` is empty, otherwise `value`.
///
/// Whitespace is not trimmed: `" "` is a value.
///
/// ```rust
/// use record_core::text::value_or_default;
///
/// assert_eq!(value_or_default("", "guest"), "guest");
/// assert_eq!(value_or_default("alice", "guest"), "alice");
/// ```
pub fn value_or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_uses_fallback() {
        assert_eq!(value_or_default("", "x"), "x");
    }

    #[test]
    fn non_empty_wins() {
        assert_eq!(value_or_default("y", "x"), "y");
        assert_eq!(value_or_default(" ", "x"), " ");
    }

    #[test]
    fn both_empty() {
        assert_eq!(value_or_default("", ""), "");
    }
}
