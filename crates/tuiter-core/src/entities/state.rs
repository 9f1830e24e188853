//! Per (user, tuit) reaction state machine

use serde::{Deserialize, Serialize};

use super::reaction::ReactionKind;

/// Derived reaction state of one user towards one tuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionState {
    #[default]
    Neutral,
    Liked,
    Disliked,
}

impl ReactionState {
    /// Derive the state from which records exist.
    ///
    /// Both records existing breaks mutual exclusion; that case reports
    /// `Disliked`.
    pub fn from_records(liked: bool, disliked: bool) -> Self {
        match (liked, disliked) {
            (_, true) => Self::Disliked,
            (true, false) => Self::Liked,
            (false, false) => Self::Neutral,
        }
    }

    /// State held after reacting with `kind`
    pub const fn holding(kind: ReactionKind) -> Self {
        match kind {
            ReactionKind::Like => Self::Liked,
            ReactionKind::Dislike => Self::Disliked,
        }
    }

    /// Whether this state holds a reaction of `kind`
    pub fn holds(self, kind: ReactionKind) -> bool {
        self == Self::holding(kind)
    }

    /// Transition on a toggle of `kind`
    pub fn toggled(self, kind: ReactionKind) -> Self {
        if self.holds(kind) {
            Self::Neutral
        } else {
            Self::holding(kind)
        }
    }
}
