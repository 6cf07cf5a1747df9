// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use record_derive::{Dict, Record, SnakeCaseNamer, Value, diff, map_from_dict_using_namer};
use uuid::Uuid;

#[derive(Record, Debug, Clone, PartialEq)]
pub struct Session {
    pub id:         Uuid,
    pub owner:      Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub expires_on: NaiveDate
}

fn main() {
    let id = Uuid::new_v4();
    let mut session = Session {
        id,
        owner: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        expires_on: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    };
    let before = session.clone();

    let mut row = Dict::new();
    row.insert("owner".to_owned(), Value::from(id.to_string()));
    row.insert("created_at".to_owned(), Value::from("2024-06-01T12:00:00Z"));
    let rest = map_from_dict_using_namer(row, &mut session, &SnakeCaseNamer::new()).unwrap();

    assert!(rest.is_empty());
    assert_eq!(session.owner, Some(id));
    assert_eq!(
        session.created_at,
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    );
    assert_eq!(diff(&session, &before).unwrap().fields, ["owner", "created_at"]);
}
