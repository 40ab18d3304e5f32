//! Crossfade instance groups.
//!
//! Hosts run up to [`INSTANCE_GROUP_SIZE`] synchronized playback instances
//! of one generator so edits can crossfade between old and new render
//! state. Siblings share group data through an `Arc` handed out by the
//! registry; whichever sibling drops last frees the data, exactly once,
//! and an in-flight render call keeps its `Arc` alive so the data cannot
//! vanish mid-block.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

/// Synchronized playback instances per group.
pub const INSTANCE_GROUP_SIZE: usize = 4;

pub type GroupId = i32;

/// Hands out shared group data by id.
///
/// Holds only `Weak` references, so the registry never keeps group data
/// alive on its own.
pub struct InstanceGroupRegistry<T> {
    groups: Mutex<HashMap<GroupId, Weak<T>>>,
}

impl<T> InstanceGroupRegistry<T> {
    pub fn new() -> Self {
        Self {
            groups: Mutex::new(HashMap::new()),
        }
    }

    /// Join `group`, creating its shared data with `init` if this is the
    /// first living member.
    pub fn acquire(&self, group: GroupId, init: impl FnOnce() -> T) -> Arc<T> {
        let mut groups = self.groups.lock();

        if let Some(existing) = groups.get(&group).and_then(Weak::upgrade) {
            return existing;
        }

        let data = Arc::new(init());
        groups.insert(group, Arc::downgrade(&data));
        groups.retain(|_, weak| weak.strong_count() > 0);

        data
    }

    /// Peek at a group without joining it.
    pub fn get(&self, group: GroupId) -> Option<Arc<T>> {
        self.groups.lock().get(&group).and_then(Weak::upgrade)
    }

    /// Number of groups with at least one living member.
    pub fn len(&self) -> usize {
        self.groups
            .lock()
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for InstanceGroupRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_siblings_share_group_data() {
        let registry = InstanceGroupRegistry::new();

        let a = registry.acquire(7, || vec![1, 2, 3]);
        let b = registry.acquire(7, || unreachable!("group already initialized"));

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(Arc::strong_count(&a), 2);
    }

    #[test]
    fn test_distinct_groups_are_independent() {
        let registry = InstanceGroupRegistry::new();

        let a = registry.acquire(1, || 10);
        let b = registry.acquire(2, || 20);

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_last_sibling_frees_the_group() {
        let registry = InstanceGroupRegistry::new();

        let a = registry.acquire(3, || "data");
        let b = registry.acquire(3, || unreachable!());

        drop(a);
        assert!(registry.get(3).is_some());

        drop(b);
        assert!(registry.get(3).is_none());

        // Rejoining builds fresh data
        let rebuilt = registry.acquire(3, || "rebuilt");
        assert_eq!(*rebuilt, "rebuilt");
    }

    #[test]
    fn test_registry_does_not_keep_data_alive() {
        let registry = InstanceGroupRegistry::new();

        let a = registry.acquire(1, || 0);
        assert_eq!(Arc::strong_count(&a), 1);

        drop(a);
        assert!(registry.is_empty());
    }
}
