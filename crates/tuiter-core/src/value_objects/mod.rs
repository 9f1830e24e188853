//! Value objects - immutable types that represent domain concepts

mod id;
mod user_ref;

pub use id::{Id, IdParseError};
pub use user_ref::UserRef;
