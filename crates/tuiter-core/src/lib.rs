//! # tuiter-core
//!
//! Domain layer containing tuits, like/dislike reactions, value objects and
//! repository traits. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Reaction, ReactionKind, ReactionState, Tuit, TuitStats};
pub use error::DomainError;
pub use traits::{ReactionRepository, RepoResult, TuitRepository};
pub use value_objects::{Id, IdParseError, UserRef};
