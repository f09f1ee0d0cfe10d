//! Authentication primitives.
//!
//! - [`jwt`] -- access-token generation and validation for the auth gate.

pub mod jwt;
