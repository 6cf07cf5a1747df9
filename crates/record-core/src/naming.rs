// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Storage column naming.
//!
//! The embedding application decides how field names become column names,
//! usually to match its persistence layer. This crate only consumes that
//! decision through [`NamingStrategy`].

use convert_case::{Case, Casing};

/// Converts a field name into a storage column name.
///
/// Implemented for any `Fn(&str, &str) -> String`, so a closure is enough for
/// tests and one-off conventions:
///
/// ```rust
/// use record_core::NamingStrategy;
///
/// let upper = |_table: &str, field: &str| field.to_uppercase();
/// assert_eq!(upper.column_name("", "email"), "EMAIL");
/// ```
pub trait NamingStrategy {
    /// Column name for `field` in `table`.
    ///
    /// Mapper operations always pass an empty `table`.
    fn column_name(&self, table: &str, field: &str) -> String;
}

impl<F> NamingStrategy for F
where
    F: Fn(&str, &str) -> String
{
    fn column_name(&self, table: &str, field: &str) -> String {
        self(table, field)
    }
}

/// Snake case column naming.
///
/// `UserName` and `userName` both become `user_name`; names that are already
/// snake case pass through unchanged. The table argument is ignored.
///
/// # Example
///
/// ```rust
/// use record_core::{NamingStrategy, SnakeCaseNamer};
///
/// let namer = SnakeCaseNamer::new();
/// assert_eq!(namer.column_name("", "CreatedAt"), "created_at");
///
/// let verbatim = SnakeCaseNamer::new().no_lower_case(true);
/// assert_eq!(verbatim.column_name("", "CreatedAt"), "CreatedAt");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnakeCaseNamer {
    no_lower_case: bool
}

impl SnakeCaseNamer {
    /// Create a namer that converts to snake case.
    pub const fn new() -> Self {
        Self {
            no_lower_case: false
        }
    }

    /// Keep field names verbatim instead of converting them.
    #[must_use]
    pub const fn no_lower_case(mut self, enabled: bool) -> Self {
        self.no_lower_case = enabled;
        self
    }
}

impl NamingStrategy for SnakeCaseNamer {
    fn column_name(&self, _table: &str, field: &str) -> String {
        if self.no_lower_case {
            field.to_owned()
        } else {
            field.to_case(Case::Snake)
        }
    }
}
