//! # tuiter-service
//!
//! Application layer: the toggle reconciler that keeps likes, dislikes and
//! tuit counters consistent, the plain reaction queries and commands, and the
//! DTOs the HTTP layer serializes.

pub mod dto;
pub mod services;

pub use services::{
    ReactionService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    ToggleOutcome, ToggleReconciler,
};
