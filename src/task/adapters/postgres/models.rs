//! Diesel row models for task persistence.

use super::schema::{sql_types, tasks};
use crate::normalize::CanonicalValue;
use crate::task::domain::TaskStatus;
use chrono::{DateTime, Utc};
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use std::io::Write;

/// Column wrapper mapping [`TaskStatus`] onto the `task_status` enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[diesel(sql_type = sql_types::TaskStatus)]
pub struct StatusColumn(pub TaskStatus);

impl ToSql<sql_types::TaskStatus, Pg> for StatusColumn {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.0.as_str().as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<sql_types::TaskStatus, Pg> for StatusColumn {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        let label = std::str::from_utf8(bytes.as_bytes())?;
        Ok(Self(TaskStatus::try_from(label)?))
    }
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Storage-assigned identifier.
    pub id: String,
    /// Owning project.
    pub project_id: i32,
    /// Task title.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// Canonical status.
    pub status: StatusColumn,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records; id and timestamp default in the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow<'a> {
    /// Owning project.
    pub project_id: i32,
    /// Task title.
    pub title: &'a str,
    /// Free-form description.
    pub description: &'a str,
    /// Canonical status.
    pub status: StatusColumn,
}

/// Changeset replacing every mutable task field.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangesRow<'a> {
    /// Owning project.
    pub project_id: i32,
    /// Task title.
    pub title: &'a str,
    /// Free-form description.
    pub description: &'a str,
    /// Canonical status.
    pub status: StatusColumn,
}
