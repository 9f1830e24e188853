//! Domain entities - core business objects

mod reaction;
mod state;
mod tuit;

pub use reaction::{Reaction, ReactionKind};
pub use state::ReactionState;
pub use tuit::{Tuit, TuitStats};
