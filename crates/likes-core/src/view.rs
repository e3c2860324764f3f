use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use time::OffsetDateTime;

use crate::{
    entity::{CommentId, LikeId, Post, PostId, UserId},
    like::Like,
};

/// Flattened transfer view of a [`Like`].
///
/// Carries ids only, never nested entities, so serializing a like can
/// never recurse back through its post or comment.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LikeView {
    pub id: LikeId,
    pub author_id: Option<UserId>,
    pub post_id: Option<PostId>,
    pub comment_id: Option<CommentId>,
    #[serde(with = "time::serde::rfc3339")]
    pub date_created: OffsetDateTime,
}

impl From<&Like> for LikeView {
    fn from(like: &Like) -> Self {
        Self {
            id: like.id,
            author_id: like.author,
            post_id: like.post(),
            comment_id: like.comment(),
            date_created: like.date_created,
        }
    }
}

/// Flattened transfer view of a [`Post`].
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: PostId,
    pub author_id: Option<UserId>,
    pub body: String,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            author_id: post.author,
            body: post.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::like::LikeTarget;

    use super::*;

    #[test]
    fn test_like_view_flattens_target() {
        let like = Like {
            id: LikeId(1),
            author: Some(UserId(7)),
            target: Some(LikeTarget::Post(PostId(3))),
            date_created: OffsetDateTime::now_utc(),
        };

        let view = LikeView::from(&like);
        assert_eq!(view.id, like.id);
        assert_eq!(view.author_id, Some(UserId(7)));
        assert_eq!(view.post_id, Some(PostId(3)));
        assert_eq!(view.comment_id, None);
        assert_eq!(view.date_created, like.date_created);
    }

    #[test]
    fn test_absent_fields_omitted_from_json() {
        let like = Like {
            id: LikeId(2),
            author: None,
            target: Some(LikeTarget::Comment(CommentId(5))),
            date_created: OffsetDateTime::now_utc(),
        };

        let value = serde_json::to_value(LikeView::from(&like)).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["id"], 2);
        assert_eq!(obj["commentId"], 5);
        assert!(!obj.contains_key("authorId"));
        assert!(!obj.contains_key("postId"));
        assert!(obj.contains_key("dateCreated"));
    }
}
