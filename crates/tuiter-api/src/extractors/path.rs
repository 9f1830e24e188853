//! Path parameter extractors
//!
//! `uid` segments accept an id or `me`; `tid` segments accept an id.

use serde::Deserialize;
use tuiter_core::{Id, UserRef};

use crate::response::ApiError;

fn parse_user(uid: &str) -> Result<UserRef, ApiError> {
    UserRef::parse(uid).map_err(|_| ApiError::invalid_path("Invalid uid format"))
}

fn parse_tuit(tid: &str) -> Result<Id, ApiError> {
    Id::parse(tid).map_err(|_| ApiError::invalid_path("Invalid tid format"))
}

/// Path parameters with uid
#[derive(Debug, Deserialize)]
pub struct UserPath {
    pub uid: String,
}

impl UserPath {
    /// Parse uid as a user reference
    pub fn user(&self) -> Result<UserRef, ApiError> {
        parse_user(&self.uid)
    }
}

/// Path parameters with tid
#[derive(Debug, Deserialize)]
pub struct TuitPath {
    pub tid: String,
}

impl TuitPath {
    /// Parse tid as an Id
    pub fn tuit_id(&self) -> Result<Id, ApiError> {
        parse_tuit(&self.tid)
    }
}

/// Path parameters with uid and tid
#[derive(Debug, Deserialize)]
pub struct UserTuitPath {
    pub uid: String,
    pub tid: String,
}

impl UserTuitPath {
    /// Parse uid as a user reference
    pub fn user(&self) -> Result<UserRef, ApiError> {
        parse_user(&self.uid)
    }

    /// Parse tid as an Id
    pub fn tuit_id(&self) -> Result<Id, ApiError> {
        parse_tuit(&self.tid)
    }
}
