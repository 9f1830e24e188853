//! User reference taken from a route segment
//!
//! Routes address users either by id or by the `me` alias, which stands for
//! whoever is making the request.

use super::id::{Id, IdParseError};

/// Path alias that refers to the authenticated caller
pub const ME: &str = "me";

/// A user as named in a request path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRef {
    /// The caller (`me`)
    Me,
    /// An explicit user id
    Id(Id),
}

impl UserRef {
    /// Parse a path segment
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        if s == ME {
            Ok(Self::Me)
        } else {
            Id::parse(s).map(Self::Id)
        }
    }

    /// Resolve to a concrete id given the caller's identity, if any.
    ///
    /// Returns `None` for `me` when there is no caller.
    pub fn resolve(self, caller: Option<Id>) -> Option<Id> {
        match self {
            Self::Me => caller,
            Self::Id(id) => Some(id),
        }
    }
}
