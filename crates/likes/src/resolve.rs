use std::fmt::Display;

use likes_core::store::StoreError;
use tracing::{debug, warn};

/// Best-effort association lookup.
///
/// Returns the entity only when an id was supplied and the store found a
/// match. A missing id, an unknown id, and a failed lookup all degrade to
/// `None`; no error crosses this boundary.
pub fn resolve<Id, E>(
    kind: &str,
    id: Option<Id>,
    find: impl FnOnce(Id) -> Result<Option<E>, StoreError>,
) -> Option<E>
where
    Id: Display + Copy,
{
    let id = id?;
    match find(id) {
        Ok(Some(entity)) => Some(entity),
        Ok(None) => {
            debug!("{} {} not found, reference stored as absent", kind, id);
            None
        }
        Err(e) => {
            warn!("{} {} lookup failed, degrading to absent: {}", kind, id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn test_missing_id_is_absent() {
        let resolved = resolve("user", None::<i64>, |_| {
            Ok(Some(()))
        });
        assert!(resolved.is_none());
    }

    #[test]
    fn test_found_entity_is_returned() {
        let resolved = resolve("user", Some(7), |id| Ok(Some(id * 2)));
        assert_eq!(resolved, Some(14));
    }

    #[traced_test]
    #[test]
    fn test_unknown_id_is_absent() {
        let resolved = resolve("post", Some(999), |_| Ok(None::<()>));
        assert!(resolved.is_none());
        assert!(logs_contain("post 999 not found"));
    }

    #[traced_test]
    #[test]
    fn test_store_failure_is_swallowed() {
        let resolved = resolve("comment", Some(5), |_| {
            Err::<Option<()>, _>(StoreError::Backend("connection lost".to_string()))
        });
        assert!(resolved.is_none());
        assert!(logs_contain("comment 5 lookup failed"));
    }
}
