//! Diesel schema for project persistence.

/// Custom SQL types used by the projects table.
pub mod sql_types {
    /// The `project_priority` database enum.
    #[derive(diesel::query_builder::QueryId, Clone, diesel::sql_types::SqlType)]
    #[diesel(postgres_type(name = "project_priority"))]
    pub struct ProjectPriority;
}

diesel::table! {
    use diesel::sql_types::*;
    use super::sql_types::ProjectPriority;

    /// Owner-scoped project records.
    projects (id) {
        /// Storage-assigned identifier.
        id -> Int4,
        /// Identity-provider subject owning the project.
        #[max_length = 255]
        owner_id -> Varchar,
        /// Project title.
        #[max_length = 255]
        title -> Varchar,
        /// Free-form description.
        description -> Text,
        /// Canonical priority.
        priority -> ProjectPriority,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
