//! Domain model for project tasks.
//!
//! Status is the only field with canonical values; infrastructure concerns
//! stay outside the domain boundary.

mod error;
mod ids;
mod status;
mod task;

pub use error::ParseTaskStatusError;
pub use ids::TaskId;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task, TaskDraft};
