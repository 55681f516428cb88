//! Step definitions for project ownership scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
