//! Owner-scoped projects for ttracker.
//!
//! Projects belong to a single identity-provider subject. Reads, updates, and
//! deletes are scoped by that owner at the storage query level, and the
//! priority field is normalized before anything is persisted. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
