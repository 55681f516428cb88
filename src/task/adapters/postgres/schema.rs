//! Diesel schema for task persistence.

/// Custom SQL types used by the tasks table.
pub mod sql_types {
    /// The `task_status` database enum.
    #[derive(diesel::query_builder::QueryId, Clone, diesel::sql_types::SqlType)]
    #[diesel(postgres_type(name = "task_status"))]
    pub struct TaskStatus;
}

diesel::table! {
    use diesel::sql_types::*;
    use super::sql_types::TaskStatus;

    /// Project task records.
    tasks (id) {
        /// Storage-assigned identifier.
        id -> Text,
        /// Owning project.
        project_id -> Int4,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Free-form description.
        description -> Text,
        /// Canonical status.
        status -> TaskStatus,
        /// Creation timestamp.
        created_at -> Timestamptz,
    }
}
