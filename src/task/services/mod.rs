//! Application services for project tasks.

mod tasks;

pub use tasks::{CreateTaskRequest, TaskService};
