//! Route handlers
//!
//! `likes` and `dislikes` are thin per-kind entry points over the shared
//! logic in `reactions`.

pub mod dislikes;
pub mod health;
pub mod likes;
pub mod reactions;
pub mod tuits;
