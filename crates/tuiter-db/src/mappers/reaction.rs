//! Reaction model -> entity mapper

use tuiter_core::{Id, Reaction, ReactionKind};

use crate::models::ReactionModel;

impl ReactionModel {
    /// Convert a row into a Reaction. The kind comes from the table it was read from.
    pub fn into_reaction(self, kind: ReactionKind) -> Reaction {
        Reaction {
            kind,
            tuit_id: Id::new(self.tuit_id),
            user_id: Id::new(self.user_id),
            created_at: self.created_at,
        }
    }
}
