//! The Like service of a small social-content application.
//!
//! Users attach a [`Like`](likes_core::like::Like) to a post or a comment.
//! Association ids supplied by callers are resolved best-effort: a missing,
//! stale, or unknown reference becomes an absent field instead of failing
//! the request. Reads are projected into flat, id-only views.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//!
//! use likes::{CreateLike, LikeService};
//! use likes_core::entity::{Post, PostId, User, UserId};
//! use likes_mem::MemStore;
//!
//! let store = MemStore::new();
//! store
//!     .add_user(User {
//!         id: UserId(7),
//!         username: "alex".to_string(),
//!     })
//!     .unwrap();
//! store
//!     .add_post(Post {
//!         id: PostId(3),
//!         author: Some(UserId(7)),
//!         body: "Hello, world!".to_string(),
//!     })
//!     .unwrap();
//!
//! let service = LikeService::new(
//!     Arc::new(store.clone()),
//!     Arc::new(store.clone()),
//!     Arc::new(store.clone()),
//!     Arc::new(store),
//! );
//!
//! // Like the post.
//! let like = service
//!     .create_like(CreateLike {
//!         author_id: Some(UserId(7)),
//!         post_id: Some(PostId(3)),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! // Read it back as a flat view.
//! let view = service.get_like(like.id).unwrap();
//! assert_eq!(view.author_id, Some(UserId(7)));
//! assert_eq!(view.post_id, Some(PostId(3)));
//! assert_eq!(view.comment_id, None);
//! ```

use std::sync::Arc;

use likes_core::{
    entity::{CommentId, LikeId, PostId, UserId},
    like::{Like, LikeTarget, NewLike},
    store::{CommentStore, LikeStore, PostStore, StoreError, UserStore},
    view::{LikeView, PostView},
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;
use time::OffsetDateTime;
use tracing::debug;

pub mod resolve;

use resolve::resolve;

#[derive(Error, Debug)]
pub enum LikeError {
    #[error("like {0} not found")]
    NotFound(LikeId),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Creation payload. Every association id is optional; ids that do not
/// resolve are tolerated and stored as absent.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateLike {
    /// Requested id, honored only if free. Kept for older callers;
    /// leave unset to let the store assign one.
    pub id: Option<LikeId>,
    pub author_id: Option<UserId>,
    pub post_id: Option<PostId>,
    pub comment_id: Option<CommentId>,
}

/// Entry point for all like state. Stateless besides its store handles,
/// which are injected at construction.
#[derive(Clone)]
pub struct LikeService {
    pub users: Arc<dyn UserStore>,
    pub posts: Arc<dyn PostStore>,
    pub comments: Arc<dyn CommentStore>,
    pub likes: Arc<dyn LikeStore>,
}

impl LikeService {
    pub fn new(
        users: Arc<dyn UserStore>,
        posts: Arc<dyn PostStore>,
        comments: Arc<dyn CommentStore>,
        likes: Arc<dyn LikeStore>,
    ) -> Self {
        Self {
            users,
            posts,
            comments,
            likes,
        }
    }

    /// Resolves the payload's associations, stamps the creation time, and
    /// persists the like. Unresolvable associations become absent fields;
    /// only a store fault fails the call.
    pub fn create_like(&self, payload: CreateLike) -> Result<Like, LikeError> {
        let author = resolve("user", payload.author_id, |id| self.users.user_by_id(id));
        let post = resolve("post", payload.post_id, |id| self.posts.post_by_id(id));
        let comment = resolve("comment", payload.comment_id, |id| {
            self.comments.comment_by_id(id)
        });

        let target = match (post, comment) {
            (Some(post), Some(comment)) => {
                debug!(
                    "both targets resolved, keeping post {} over comment {}",
                    post.id, comment.id
                );
                Some(LikeTarget::Post(post.id))
            }
            (Some(post), None) => Some(LikeTarget::Post(post.id)),
            (None, Some(comment)) => Some(LikeTarget::Comment(comment.id)),
            (None, None) => None,
        };

        let like = self.likes.insert(NewLike {
            id: payload.id,
            author: author.map(|u| u.id),
            target,
            date_created: OffsetDateTime::now_utc(),
        })?;

        Ok(like)
    }

    pub fn get_like(&self, id: LikeId) -> Result<LikeView, LikeError> {
        let like = self
            .likes
            .like_by_id(id)?
            .ok_or(LikeError::NotFound(id))?;
        Ok(LikeView::from(&like))
    }

    pub fn list_likes(&self) -> Result<Vec<LikeView>, LikeError> {
        Ok(self.likes.likes()?.iter().map(LikeView::from).collect())
    }

    pub fn list_likes_by_user(&self, author: UserId) -> Result<Vec<LikeView>, LikeError> {
        Ok(self
            .likes
            .likes_by_author(author)?
            .iter()
            .map(LikeView::from)
            .collect())
    }

    pub fn list_likes_by_post(&self, post: PostId) -> Result<Vec<LikeView>, LikeError> {
        Ok(self
            .likes
            .likes_by_post(post)?
            .iter()
            .map(LikeView::from)
            .collect())
    }

    pub fn list_likes_by_comment(&self, comment: CommentId) -> Result<Vec<LikeView>, LikeError> {
        Ok(self
            .likes
            .likes_by_comment(comment)?
            .iter()
            .map(LikeView::from)
            .collect())
    }

    /// Deletes a like. Unknown ids are a no-op success, which also covers
    /// two callers racing on the same id.
    pub fn delete_like(&self, id: LikeId) -> Result<(), LikeError> {
        if !self.likes.delete_by_id(id)? {
            debug!("like {} already gone, nothing to delete", id);
        }
        Ok(())
    }

    pub fn list_posts(&self) -> Result<Vec<PostView>, LikeError> {
        Ok(self.posts.posts()?.iter().map(PostView::from).collect())
    }

    pub fn list_posts_by_author(&self, author: UserId) -> Result<Vec<PostView>, LikeError> {
        Ok(self
            .posts
            .posts_by_author(author)?
            .iter()
            .map(PostView::from)
            .collect())
    }
}
