//! Diesel schema for user persistence.

diesel::table! {
    /// Identity-provider subjects that have signed in.
    users (id) {
        /// Identity-provider subject identifier.
        #[max_length = 255]
        id -> Varchar,
        /// First sign-in timestamp.
        created_at -> Timestamptz,
    }
}
