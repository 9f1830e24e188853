//! Database models - SQLx-compatible structs for PostgreSQL tables

mod reaction;
mod tuit;

pub use reaction::ReactionModel;
pub use tuit::TuitModel;
