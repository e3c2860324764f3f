use thiserror::Error;

use crate::{
    entity::{Comment, CommentId, LikeId, Post, PostId, User, UserId},
    like::{Like, NewLike},
};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Lookup of users by id. Read-only from this subsystem.
pub trait UserStore: Send + Sync {
    fn user_by_id(&self, id: UserId) -> Result<Option<User>, StoreError>;
}

/// Lookup and listing of posts. Read-only from this subsystem.
pub trait PostStore: Send + Sync {
    fn post_by_id(&self, id: PostId) -> Result<Option<Post>, StoreError>;
    fn posts(&self) -> Result<Vec<Post>, StoreError>;
    fn posts_by_author(&self, author: UserId) -> Result<Vec<Post>, StoreError>;
}

/// Lookup of comments by id. Read-only from this subsystem.
pub trait CommentStore: Send + Sync {
    fn comment_by_id(&self, id: CommentId) -> Result<Option<Comment>, StoreError>;
}

/// Persistence for likes. The sole mutator of like state.
pub trait LikeStore: Send + Sync {
    /// Persists a new like, returning it with its assigned id.
    fn insert(&self, like: NewLike) -> Result<Like, StoreError>;
    fn like_by_id(&self, id: LikeId) -> Result<Option<Like>, StoreError>;
    /// All likes, in insertion order.
    fn likes(&self) -> Result<Vec<Like>, StoreError>;
    fn likes_by_author(&self, author: UserId) -> Result<Vec<Like>, StoreError>;
    fn likes_by_post(&self, post: PostId) -> Result<Vec<Like>, StoreError>;
    fn likes_by_comment(&self, comment: CommentId) -> Result<Vec<Like>, StoreError>;
    /// Removes a like. Returns whether a like was actually removed.
    fn delete_by_id(&self, id: LikeId) -> Result<bool, StoreError>;
}
