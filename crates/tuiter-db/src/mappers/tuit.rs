//! Tuit model -> entity mapper

use tuiter_core::{Id, Tuit, TuitStats};

use crate::models::TuitModel;

/// Convert TuitModel to Tuit entity
impl From<TuitModel> for Tuit {
    fn from(model: TuitModel) -> Self {
        Tuit {
            id: Id::new(model.id),
            tuit: model.tuit,
            posted_by: Id::new(model.posted_by),
            posted_on: model.posted_on,
            stats: TuitStats::new(model.likes_count, model.dislikes_count),
        }
    }
}
