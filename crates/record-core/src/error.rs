// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for mapper operations.

use thiserror::Error;

use crate::value::ValueKind;

/// Result alias for mapper operations.
pub type Result<T, E = MapperError> = std::result::Result<T, E>;

/// Error returned by mapper and registry operations.
///
/// Nothing is retried or rolled back. Operations that mutate a destination
/// field by field may leave earlier fields updated when a later field fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapperError {
    /// Input has the wrong shape: not a registered record, or two records of
    /// different types where one type is required.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human readable description of the offending input.
        reason: String
    },

    /// A dictionary value cannot be stored in the field's type.
    #[error("cannot assign {found} value to field `{field}` of type `{expected}`")]
    TypeMismatch {
        /// Declared field name.
        field:    &'static str,
        /// Rust type name of the field.
        expected: &'static str,
        /// Kind of the rejected value.
        found:    ValueKind
    }
}

impl MapperError {
    /// Create an [`MapperError::InvalidArgument`].
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into()
        }
    }

    /// Create a [`MapperError::TypeMismatch`].
    pub const fn type_mismatch(
        field: &'static str,
        expected: &'static str,
        found: ValueKind
    ) -> Self {
        Self::TypeMismatch {
            field,
            expected,
            found
        }
    }

    /// Check if this is an invalid argument error.
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if this is a type mismatch error.
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}
