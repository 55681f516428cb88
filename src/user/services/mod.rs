//! Application services for user identities.

mod accounts;

pub use accounts::UserService;
