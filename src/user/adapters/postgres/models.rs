//! Diesel row models for user persistence.

use super::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// Identity-provider subject identifier.
    pub id: String,
    /// First sign-in timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for user records; the timestamp defaults in the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    /// Identity-provider subject identifier.
    pub id: &'a str,
}
