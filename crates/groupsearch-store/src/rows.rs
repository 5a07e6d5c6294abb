//! Row decoding — maps a `groups` row to a [`Group`].
//!
//! Timestamps are stored as RFC 3339 text. A row that fails to decode is a
//! [`StoreError::Decode`], never a silent default.

use chrono::{DateTime, Utc};
use groupsearch_core::Group;
use r2d2_sqlite::rusqlite::{self, Row};

use crate::error::{StoreError, StoreResult};

pub fn decode_group(row: &Row<'_>) -> StoreResult<Group> {
    let column = |e: rusqlite::Error| StoreError::Decode(e.to_string());

    let created: String = row.get("created_at").map_err(column)?;
    let created_at = DateTime::parse_from_rfc3339(&created)
        .map_err(|e| StoreError::Decode(format!("created_at {created:?}: {e}")))?
        .with_timezone(&Utc);

    Ok(Group {
        id: row.get("id").map_err(column)?,
        name: row.get("name").map_err(column)?,
        description: row.get("description").map_err(column)?,
        created_at,
    })
}

pub fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339()
}
