//! In-memory backend implementing every store contract of
//! [likes-core](likes_core), for tests and embedders that need no
//! external database.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use likes_core::{
    entity::{Comment, CommentId, LikeId, Post, User, UserId},
    like::Like,
    store::StoreError,
};

mod entity_store;
mod like_store;

#[derive(Clone, Default)]
pub struct MemStore(Arc<RwLock<Inner>>);

#[derive(Default)]
struct Inner {
    users: HashMap<UserId, User>,
    posts: Vec<Post>,
    comments: HashMap<CommentId, Comment>,
    /// Insertion order is the scan order.
    likes: Vec<Like>,
    next_like_id: i64,
}

impl Inner {
    fn like_index(&self, id: LikeId) -> Option<usize> {
        self.likes.iter().position(|l| l.id == id)
    }
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, user: User) -> Result<(), StoreError> {
        self.write()?.users.insert(user.id, user);
        Ok(())
    }

    pub fn add_post(&self, post: Post) -> Result<(), StoreError> {
        self.write()?.posts.push(post);
        Ok(())
    }

    pub fn add_comment(&self, comment: Comment) -> Result<(), StoreError> {
        self.write()?.comments.insert(comment.id, comment);
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.0.read().map_err(|e| StoreError::Backend(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.0.write().map_err(|e| StoreError::Backend(e.to_string()))
    }
}
