//! Diesel row models for project persistence.

use super::schema::{projects, sql_types};
use crate::normalize::CanonicalValue;
use crate::project::domain::ProjectPriority;
use chrono::{DateTime, Utc};
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use std::io::Write;

/// Column wrapper mapping [`ProjectPriority`] onto the `project_priority` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[diesel(sql_type = sql_types::ProjectPriority)]
pub struct PriorityColumn(pub ProjectPriority);

impl ToSql<sql_types::ProjectPriority, Pg> for PriorityColumn {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.0.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<sql_types::ProjectPriority, Pg> for PriorityColumn {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let label = std::str::from_utf8(bytes.as_bytes())?;
        Ok(Self(ProjectPriority::try_from(label)?))
    }
}

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Owning identity.
    pub owner_id: String,
    /// Project title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Canonical priority.
    pub priority: PriorityColumn,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for project records; id and timestamp default in the
/// database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow<'a> {
    /// Owning identity.
    pub owner_id: &'a str,
    /// Project title.
    pub title: &'a str,
    /// Free-form description.
    pub description: &'a str,
    /// Canonical priority.
    pub priority: PriorityColumn,
}

/// Changeset replacing the mutable project fields.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = projects)]
pub struct ProjectChangesRow<'a> {
    /// Project title.
    pub title: &'a str,
    /// Free-form description.
    pub description: &'a str,
    /// Canonical priority.
    pub priority: PriorityColumn,
}
