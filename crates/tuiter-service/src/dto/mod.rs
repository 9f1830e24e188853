//! Data transfer objects for API responses
//!
//! Response DTOs for serializing API outputs and the mappers that build them
//! from domain entities.

pub mod mappers;
pub mod responses;

pub use responses::{
    HealthChecks, HealthResponse, ReactionResponse, ReactionStateResponse, ReadinessResponse,
    ToggleResponse, TuitResponse, TuitStatsResponse,
};
