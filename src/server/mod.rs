//! HTTP response surface
//!
//! Transport stays with the caller; this module only turns resolved links
//! and errors into axum responses.

pub mod response;

pub use response::{LinkedResource, LinkedResult};
