//! Business logic services
//!
//! Services borrow a [`ServiceContext`] for the duration of one operation
//! and reach the stores through it.

pub mod context;
pub mod error;
pub mod reaction;
pub mod toggle;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reaction::ReactionService;
pub use toggle::{ToggleOutcome, ToggleReconciler};
