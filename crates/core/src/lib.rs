//! Domain primitives shared by the MotorHub store and HTTP layers.
//!
//! Nothing in this crate touches the network or a database.

pub mod error;
pub mod types;
pub mod validation;
