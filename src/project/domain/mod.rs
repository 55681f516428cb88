//! Domain model for projects.
//!
//! Priority is the only field with canonical values; everything else is
//! stored as received.

mod error;
mod ids;
mod priority;
mod project;

pub use error::ParsePriorityError;
pub use ids::ProjectId;
pub use priority::ProjectPriority;
pub use project::{PersistedProjectData, Project, ProjectDraft};
