use likes_core::{
    entity::{CommentId, LikeId, PostId, UserId},
    like::{Like, NewLike},
    store::{LikeStore, StoreError},
};
use tracing::debug;

use crate::MemStore;

impl LikeStore for MemStore {
    fn insert(&self, like: NewLike) -> Result<Like, StoreError> {
        let mut inner = self.write()?;

        // A requested id is honored only if nothing occupies it;
        // an existing like is never overwritten.
        let id = match like.id {
            Some(requested) if inner.like_index(requested).is_none() => requested,
            _ => {
                let mut next = inner.next_like_id.max(1);
                while inner.like_index(LikeId(next)).is_some() {
                    next += 1;
                }
                inner.next_like_id = next + 1;
                LikeId(next)
            }
        };

        debug!("inserting like {}", id);

        let like = Like {
            id,
            author: like.author,
            target: like.target,
            date_created: like.date_created,
        };
        inner.likes.push(like.clone());

        Ok(like)
    }

    fn like_by_id(&self, id: LikeId) -> Result<Option<Like>, StoreError> {
        debug!("reading like {}", id);
        let inner = self.read()?;
        Ok(inner.like_index(id).map(|i| inner.likes[i].clone()))
    }

    fn likes(&self) -> Result<Vec<Like>, StoreError> {
        Ok(self.read()?.likes.clone())
    }

    fn likes_by_author(&self, author: UserId) -> Result<Vec<Like>, StoreError> {
        Ok(self
            .read()?
            .likes
            .iter()
            .filter(|l| l.author == Some(author))
            .cloned()
            .collect())
    }

    fn likes_by_post(&self, post: PostId) -> Result<Vec<Like>, StoreError> {
        Ok(self
            .read()?
            .likes
            .iter()
            .filter(|l| l.post() == Some(post))
            .cloned()
            .collect())
    }

    fn likes_by_comment(&self, comment: CommentId) -> Result<Vec<Like>, StoreError> {
        Ok(self
            .read()?
            .likes
            .iter()
            .filter(|l| l.comment() == Some(comment))
            .cloned()
            .collect())
    }

    fn delete_by_id(&self, id: LikeId) -> Result<bool, StoreError> {
        debug!("deleting like {}", id);
        let mut inner = self.write()?;
        match inner.like_index(id) {
            Some(i) => {
                inner.likes.remove(i);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
