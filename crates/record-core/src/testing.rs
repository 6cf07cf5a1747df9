// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Hand-written records shared by unit tests.
//!
//! The derive macro lives in another crate, so these implement [`Record`]
//! the way a manual implementation would.

use std::any::Any;

use crate::{
    error::Result,
    record::{FieldDescriptor, Record, RecordType},
    value::{FieldValue, Value, convert}
};

macro_rules! describe {
    ($d:expr;) => {
        $d
    };
    ($d:expr; read_only) => {
        $d.read_only()
    };
    ($d:expr; tag $t:literal) => {
        $d.with_tag($t)
    };
}

macro_rules! record {
    ($name:ident { $($field:ident: $ty:ty [$($opt:tt)*]),* $(,)? }) => {
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(pub $field: $ty),*
        }

        impl RecordType for $name {
            const NAME: &'static str = stringify!($name);

            fn descriptors() -> Vec<FieldDescriptor> {
                let mut fields = vec![
                    $(describe!(FieldDescriptor::new::<$ty>(0, stringify!($field)); $($opt)*)),*
                ];
                for (index, field) in fields.iter_mut().enumerate() {
                    field.index = index;
                }
                fields
            }
        }

        impl Record for $name {
            fn record_name(&self) -> &'static str {
                Self::NAME
            }

            fn field_descriptors(&self) -> Vec<FieldDescriptor> {
                Self::descriptors()
            }

            fn field_any(&self, name: &str) -> Option<&dyn Any> {
                match name {
                    $(stringify!($field) => Some(&self.$field),)*
                    _ => None
                }
            }

            fn field_value(&self, name: &str) -> Option<Value> {
                match name {
                    $(stringify!($field) => Some(self.$field.to_value()),)*
                    _ => None
                }
            }

            fn field_eq(&self, name: &str, other: &dyn Any) -> Option<bool> {
                match name {
                    $(stringify!($field) => other
                        .downcast_ref::<$ty>()
                        .map(|theirs| self.$field == *theirs),)*
                    _ => None
                }
            }

            fn assign_field(&mut self, name: &str, src: &dyn Any) -> bool {
                if !writable::<Self>(name) {
                    return false;
                }
                match name {
                    $(stringify!($field) => match src.downcast_ref::<$ty>() {
                        Some(v) => {
                            self.$field = v.clone();
                            true
                        }
                        None => false
                    },)*
                    _ => false
                }
            }

            fn set_field(&mut self, name: &str, value: Value) -> Result<bool> {
                if !writable::<Self>(name) {
                    return Ok(false);
                }
                match name {
                    $(stringify!($field) => {
                        self.$field = convert(stringify!($field), value)?;
                        Ok(true)
                    })*
                    _ => Ok(false)
                }
            }
        }
    };
}

fn writable<T: RecordType>(name: &str) -> bool {
    T::descriptors()
        .iter()
        .any(|field| field.name == name && field.writable)
}

record!(Account {
    id: u64 [],
    name: String [],
    email: Option<String> [],
    age: u8 [],
    tags: Vec<String> [],
    revision: u32 [read_only],
});

record!(AccountForm {
    name: String [],
    email: Option<String> [],
    age: String [],
});

record!(UpdateAccount {
    name: String [],
    email: Option<String> [],
});

record!(Profile {
    name: String [tag "column:user_name"],
    bio: Option<String> [],
    nickname: Option<String> [],
});

record!(Patch {
    id: u64 [],
    nickname: Option<Option<String>> [],
    raw: Option<Value> [],
});
