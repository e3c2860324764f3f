use likes_core::{
    entity::{CommentId, LikeId, PostId, UserId},
    like::{LikeTarget, NewLike},
    store::LikeStore,
};
use likes_mem::MemStore;
use time::OffsetDateTime;

fn new_like(id: Option<LikeId>, target: Option<LikeTarget>) -> NewLike {
    NewLike {
        id,
        author: Some(UserId(1)),
        target,
        date_created: OffsetDateTime::now_utc(),
    }
}

#[test]
fn test_insert_assigns_sequential_ids() {
    let store = MemStore::new();

    let a = store.insert(new_like(None, None)).unwrap();
    let b = store.insert(new_like(None, None)).unwrap();
    assert_ne!(a.id, b.id);

    let found = store.like_by_id(a.id).unwrap().unwrap();
    assert_eq!(found, a);
}

#[test]
fn test_insert_never_overwrites_requested_id() {
    let store = MemStore::new();

    let a = store
        .insert(new_like(Some(LikeId(42)), None))
        .unwrap();
    assert_eq!(a.id, LikeId(42));

    // Same requested id lands somewhere free instead of clobbering.
    let b = store
        .insert(new_like(Some(LikeId(42)), None))
        .unwrap();
    assert_ne!(b.id, LikeId(42));
    assert_eq!(store.likes().unwrap().len(), 2);
}

#[test]
fn test_scan_is_insertion_ordered() {
    let store = MemStore::new();

    let ids: Vec<_> = (0..3)
        .map(|_| store.insert(new_like(None, None)).unwrap().id)
        .collect();

    let scanned: Vec<_> = store.likes().unwrap().iter().map(|l| l.id).collect();
    assert_eq!(scanned, ids);
}

#[test]
fn test_filters_by_target() {
    let store = MemStore::new();

    store
        .insert(new_like(None, Some(LikeTarget::Post(PostId(3)))))
        .unwrap();
    store
        .insert(new_like(None, Some(LikeTarget::Comment(CommentId(5)))))
        .unwrap();
    store.insert(new_like(None, None)).unwrap();

    let by_post = store.likes_by_post(PostId(3)).unwrap();
    assert_eq!(by_post.len(), 1);
    assert_eq!(by_post[0].post(), Some(PostId(3)));

    let by_comment = store.likes_by_comment(CommentId(5)).unwrap();
    assert_eq!(by_comment.len(), 1);
    assert_eq!(by_comment[0].comment(), Some(CommentId(5)));

    assert!(store.likes_by_post(PostId(999)).unwrap().is_empty());
}

#[test]
fn test_delete_reports_removal() {
    let store = MemStore::new();

    let like = store.insert(new_like(None, None)).unwrap();
    assert!(store.delete_by_id(like.id).unwrap());
    assert!(!store.delete_by_id(like.id).unwrap());
    assert!(store.like_by_id(like.id).unwrap().is_none());
}
