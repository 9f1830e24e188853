//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in tuiter-core.

mod error;
mod reaction;
mod tuit;

pub use reaction::PgReactionRepository;
pub use tuit::PgTuitRepository;
