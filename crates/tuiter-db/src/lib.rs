//! # tuiter-db
//!
//! Persistence layer implementing the repository traits from `tuiter-core`.
//!
//! ## Overview
//!
//! - PostgreSQL repositories via SQLx, one reaction repository per
//!   collection (`likes`, `dislikes`) plus the tuit repository
//! - Database models with SQLx `FromRow` derives and model → entity mappers
//! - [`MemoryStore`], an in-process implementation of the same traits used
//!   for development and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tuiter_core::ReactionKind;
//! use tuiter_db::{create_pool, DatabaseConfig, PgReactionRepository, PgTuitRepository};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::new("postgres://localhost/tuiter", 10, 1)).await?;
//!     let dislikes = PgReactionRepository::new(pool.clone(), ReactionKind::Dislike);
//!     let tuits = PgTuitRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryReactionRepository, MemoryStore, MemoryTuitRepository};
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{PgReactionRepository, PgTuitRepository};
