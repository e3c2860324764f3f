use likes_core::{
    entity::{Comment, CommentId, Post, PostId, User, UserId},
    store::{CommentStore, PostStore, StoreError, UserStore},
};
use tracing::debug;

use crate::MemStore;

impl UserStore for MemStore {
    fn user_by_id(&self, id: UserId) -> Result<Option<User>, StoreError> {
        debug!("reading user {}", id);
        Ok(self.read()?.users.get(&id).cloned())
    }
}

impl PostStore for MemStore {
    fn post_by_id(&self, id: PostId) -> Result<Option<Post>, StoreError> {
        debug!("reading post {}", id);
        Ok(self.read()?.posts.iter().find(|p| p.id == id).cloned())
    }

    fn posts(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.read()?.posts.clone())
    }

    fn posts_by_author(&self, author: UserId) -> Result<Vec<Post>, StoreError> {
        Ok(self
            .read()?
            .posts
            .iter()
            .filter(|p| p.author == Some(author))
            .cloned()
            .collect())
    }
}

impl CommentStore for MemStore {
    fn comment_by_id(&self, id: CommentId) -> Result<Option<Comment>, StoreError> {
        debug!("reading comment {}", id);
        Ok(self.read()?.comments.get(&id).cloned())
    }
}
