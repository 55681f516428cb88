//! Domain model for user identities.

mod ids;
mod user;

pub use ids::UserId;
pub use user::User;
