use hd_core::{Customer, Ticket, User};

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Anything the cache can key by id.
pub trait CacheEntry: Clone {
    fn cache_key(&self) -> i64;
}

impl CacheEntry for Ticket {
    fn cache_key(&self) -> i64 {
        self.id
    }
}

impl CacheEntry for User {
    fn cache_key(&self) -> i64 {
        self.id
    }
}

impl CacheEntry for Customer {
    fn cache_key(&self) -> i64 {
        self.id
    }
}

struct CacheInner<T> {
    list: Option<Vec<T>>,
    details: HashMap<i64, T>,
}

/// One resource type's local cache: the last known collection plus per-id
/// detail entries. Effects are applied in completion-arrival order; there
/// is no reconciliation with writes made by other processes.
pub struct ResourceCache<T> {
    inner: RwLock<CacheInner<T>>,
}

impl<T: CacheEntry> ResourceCache<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CacheInner {
                list: None,
                details: HashMap::new(),
            }),
        }
    }

    /// The cached collection, if one has been fetched.
    pub fn list(&self) -> Option<Vec<T>> {
        self.read_lock().list.clone()
    }

    pub fn set_list(&self, items: Vec<T>) {
        self.write_lock().list = Some(items);
    }

    /// Insert or replace `item` and surface it at index 0 of the cached
    /// list. Any existing copy with the same id is removed first, so the
    /// record appears exactly once. The detail entry is refreshed too.
    pub fn upsert_front(&self, item: T) {
        let key = item.cache_key();
        let mut inner = self.write_lock();

        if let Some(list) = inner.list.as_mut() {
            list.retain(|entry| entry.cache_key() != key);
            list.insert(0, item.clone());
        }

        inner.details.insert(key, item);
    }

    /// Drop `id` from both the cached list and the detail map.
    pub fn remove(&self, id: i64) {
        let mut inner = self.write_lock();

        if let Some(list) = inner.list.as_mut() {
            list.retain(|entry| entry.cache_key() != id);
        }

        inner.details.remove(&id);
    }

    /// The cached record for `id`: the detail entry first, the list copy as
    /// a fallback.
    pub fn detail(&self, id: i64) -> Option<T> {
        let inner = self.read_lock();

        if let Some(entry) = inner.details.get(&id) {
            return Some(entry.clone());
        }

        inner
            .list
            .as_ref()
            .and_then(|list| list.iter().find(|entry| entry.cache_key() == id))
            .cloned()
    }

    pub fn put_detail(&self, item: T) {
        let mut inner = self.write_lock();
        inner.details.insert(item.cache_key(), item);
    }

    /// Forget everything; the next read refetches.
    pub fn invalidate(&self) {
        let mut inner = self.write_lock();
        inner.list = None;
        inner.details.clear();
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, CacheInner<T>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, CacheInner<T>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl<T: CacheEntry> Default for ResourceCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
