use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use time::OffsetDateTime;

use crate::entity::{CommentId, LikeId, PostId, UserId};

/// A user's approval of a single post or comment.
///
/// Immutable once persisted, except for deletion.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: LikeId,
    /// Absent when the supplied author id did not resolve to a user.
    pub author: Option<UserId>,
    /// Absent when neither supplied target id resolved.
    pub target: Option<LikeTarget>,
    #[serde(with = "time::serde::rfc3339")]
    pub date_created: OffsetDateTime,
}

/// The one thing a like is attached to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LikeTarget {
    Post(PostId),
    Comment(CommentId),
}

impl Like {
    pub fn post(&self) -> Option<PostId> {
        match self.target {
            Some(LikeTarget::Post(id)) => Some(id),
            _ => None,
        }
    }

    pub fn comment(&self) -> Option<CommentId> {
        match self.target {
            Some(LikeTarget::Comment(id)) => Some(id),
            _ => None,
        }
    }
}

/// Insert form for a like. Associations are already resolved;
/// the store assigns the id (honoring `id` only if it is free).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLike {
    pub id: Option<LikeId>,
    pub author: Option<UserId>,
    pub target: Option<LikeTarget>,
    pub date_created: OffsetDateTime,
}
