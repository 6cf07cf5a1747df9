// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use record_core::prelude::*;
//! ```

pub use crate::{
    Dict, FieldDescriptor, FieldValue, MapperError, NamingStrategy, Record, RecordRegistry,
    RecordType, SnakeCaseNamer, Value, ValueKind,
    mapper::{
        Diff, assign, column_name, diff, fields, fields_diff, fields_diff_of, fields_of, get_name,
        map_from_dict, map_from_dict_using_namer
    },
    text::value_or_default
};
