//! Axum extractors for request handling
//!
//! Custom extractors for bearer authentication and path parameters.

mod auth;
mod path;

pub use auth::{AuthUser, OptionalAuthUser};
pub use path::{TuitPath, UserPath, UserTuitPath};
