//! ttracker: a small task and project tracking backend.
//!
//! The crate normalizes inbound requests (task status, project priority) to
//! canonical values and persists tasks, projects and user identities through
//! per-entity storage ports. Projects are scoped to the identity that owns
//! them.
//!
//! # Architecture
//!
//! ttracker follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for persistence
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//!
//! # Modules
//!
//! - [`task`]: Project tasks with normalized status
//! - [`project`]: Owner-scoped projects with normalized priority
//! - [`user`]: Identity records created on first sign-in
//! - [`normalize`]: Alias tables for enum-valued request fields
//! - [`storage`]: Connection pool and schema bootstrap
//! - [`config`] and [`log`]: Runtime configuration and logging setup

pub mod config;
pub mod log;
pub mod normalize;
pub mod project;
pub mod storage;
pub mod task;
pub mod user;

#[cfg(test)]
mod test_support;
