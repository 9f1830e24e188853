//! Model → entity mappers
//!
//! Convert database rows into domain objects.

mod reaction;
mod tuit;
