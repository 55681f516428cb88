//! In-memory adapters for user identities.

mod user;

pub use user::InMemoryUserRepository;
