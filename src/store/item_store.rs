use crate::models::{Item, ItemFields};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error};

/// Store handle shared with the router as axum state
pub type SharedStore = Arc<ItemStore>;

#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    NotFound(u64),
    /// A writer panicked while holding the lock
    Unavailable,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "Item {} not found", id),
            StoreError::Unavailable => write!(f, "Item store is unavailable"),
        }
    }
}

impl std::error::Error for StoreError {}

struct StoreInner {
    next_id: u64,
    // Ids only grow, so key order is insertion order
    items: BTreeMap<u64, Item>,
}

/// In-memory item collection guarded by a single mutex
pub struct ItemStore {
    inner: Mutex<StoreInner>,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                next_id: 1,
                items: BTreeMap::new(),
            }),
        }
    }

    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreInner>, StoreError> {
        self.inner.lock().map_err(|_| {
            error!("Item store lock is poisoned");
            StoreError::Unavailable
        })
    }

    /// Insert a new item under the next unused id
    pub fn create(&self, fields: ItemFields) -> Result<Item, StoreError> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        inner.next_id += 1;

        let item = fields.into_item(id);
        inner.items.insert(id, item.clone());
        debug!("Created item {}", id);
        Ok(item)
    }

    pub fn get(&self, id: u64) -> Result<Item, StoreError> {
        let inner = self.lock()?;
        inner.items.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    /// All items in insertion order
    pub fn list(&self) -> Result<Vec<Item>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.items.values().cloned().collect())
    }

    /// Replace every mutable field of an existing item
    pub fn update(&self, id: u64, fields: ItemFields) -> Result<Item, StoreError> {
        let mut inner = self.lock()?;
        let slot = inner.items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = fields.into_item(id);
        debug!("Updated item {}", id);
        Ok(slot.clone())
    }

    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        match inner.items.remove(&id) {
            Some(_) => {
                debug!("Deleted item {}", id);
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    fn fields(name: &str, price: f64) -> ItemFields {
        ItemFields {
            name: name.to_string(),
            description: None,
            price,
        }
    }

    #[test]
    fn create_then_get_returns_same_fields() {
        let store = ItemStore::new();
        let input = ItemFields {
            name: "Lamp".to_string(),
            description: Some("Desk lamp".to_string()),
            price: 12.5,
        };

        let created = store.create(input.clone()).unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(store.get(created.id).unwrap(), input.into_item(1));
    }

    #[test]
    fn ids_are_never_reused_after_delete() {
        let store = ItemStore::new();
        let mut seen = HashSet::new();

        for round in 0..5 {
            let a = store.create(fields("a", 1.0)).unwrap();
            let b = store.create(fields("b", 2.0)).unwrap();
            assert!(seen.insert(a.id), "id {} reissued in round {}", a.id, round);
            assert!(seen.insert(b.id), "id {} reissued in round {}", b.id, round);
            store.delete(a.id).unwrap();
        }

        // Deleting the newest item must not roll the counter back
        let last = *seen.iter().max().unwrap();
        store.delete(last).unwrap();
        assert_eq!(store.create(fields("c", 3.0)).unwrap().id, last + 1);
    }

    #[test]
    fn update_missing_id_does_not_create() {
        let store = ItemStore::new();
        assert_eq!(store.update(7, fields("x", 1.0)), Err(StoreError::NotFound(7)));
        assert_eq!(store.len().unwrap(), 0);
        assert!(store.get(7).is_err());
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let store = ItemStore::new();
        store.create(fields("first", 1.0)).unwrap();
        store
            .create(ItemFields {
                name: "second".to_string(),
                description: Some("old".to_string()),
                price: 2.0,
            })
            .unwrap();
        store.create(fields("third", 3.0)).unwrap();

        let updated = store.update(2, fields("second-b", 20.0)).unwrap();
        assert_eq!(updated.id, 2);
        assert_eq!(updated.description, None);

        let names: Vec<String> = store.list().unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["first", "second-b", "third"]);
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let store = ItemStore::new();
        let item = store.create(fields("gone", 1.0)).unwrap();
        store.delete(item.id).unwrap();

        assert_eq!(store.get(item.id), Err(StoreError::NotFound(item.id)));
        assert_eq!(store.delete(item.id), Err(StoreError::NotFound(item.id)));
    }

    #[test]
    fn list_length_tracks_creates_minus_deletes() {
        let store = ItemStore::new();
        let ids: Vec<u64> = (0..6)
            .map(|i| store.create(fields("n", i as f64)).unwrap().id)
            .collect();
        store.delete(ids[1]).unwrap();
        store.delete(ids[4]).unwrap();
        let _ = store.delete(ids[4]);

        assert_eq!(store.list().unwrap().len(), 4);
        assert_eq!(store.len().unwrap(), 4);
    }

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        let store = ItemStore::shared();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || {
                    (0..50)
                        .map(|_| store.create(fields("t", 1.0)).unwrap().id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id));
            }
        }
        assert_eq!(ids.len(), 400);
        assert_eq!(store.len().unwrap(), 400);
    }

    #[test]
    fn poisoned_lock_reports_unavailable() {
        let store = ItemStore::shared();
        let poisoner = store.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison the store");
        })
        .join();

        assert_eq!(store.list(), Err(StoreError::Unavailable));
    }
}
