//! In-memory adapters for projects.

mod project;

pub use project::InMemoryProjectRepository;
