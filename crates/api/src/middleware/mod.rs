//! Request extractors that gate handlers.
//!
//! - [`auth::RequireAuth`] -- rejects requests without a valid bearer token.

pub mod auth;
