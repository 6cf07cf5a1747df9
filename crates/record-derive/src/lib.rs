// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # record-derive
//!
//! One crate, all features. Re-exports:
//! - [`Record`](macro@Record) derive macro from `record-derive-impl`
//! - All types and operations from `record-core` ([`Record`](trait@Record),
//!   [`Value`], [`Diff`], [`RecordRegistry`], [`password`], [`text`])
//!
//! # Quick Start
//!
//! ```rust
//! use record_derive::{Dict, Record, SnakeCaseNamer, Value, map_from_dict_using_namer};
//!
//! #[derive(Record, Debug, Default)]
//! pub struct Profile {
//!     #[record(column = "user_name")]
//!     pub name: String,
//!     pub bio:  Option<String>
//! }
//!
//! let mut row = Dict::new();
//! row.insert("user_name".into(), Value::from("alice"));
//! row.insert("bio".into(), Value::Null);
//! row.insert("extra".into(), Value::from(1));
//!
//! let mut profile = Profile::default();
//! let rest = map_from_dict_using_namer(row, &mut profile, &SnakeCaseNamer::new())?;
//!
//! assert_eq!(profile.name, "alice");
//! assert_eq!(profile.bio, None);
//! assert_eq!(rest.len(), 1);
//! assert!(rest.contains_key("extra"));
//! # Ok::<(), record_derive::MapperError>(())
//! ```
//!
//! # Crate Path
//!
//! Generated code refers to `::record_core`. Crates that depend on
//! `record-derive` alone point it here instead:
//!
//! ```rust,ignore
//! #[derive(Record)]
//! #[record(crate = "::record_derive")]
//! pub struct User { /* ... */ }
//! ```
//!
//! # Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `password` | Yes | [`password`] module (bcrypt) |
//! | `serde` | No | `Serialize` / `Deserialize` for [`Value`] |
//! | `json` | No | `json` module, `serde_json` conversions |

pub use record_core::*;
pub use record_derive_impl::Record;
