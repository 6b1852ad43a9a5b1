// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! A bounded insertion-ordered set with FIFO eviction and O(1) membership checks.

use std::{
    collections::{VecDeque, vec_deque},
    fmt::Debug,
    hash::Hash,
};

use ahash::AHashSet;

/// A bounded set that maintains keys in insertion order with O(1) membership checks.
///
/// Uses a `VecDeque` for FIFO ordering and an `AHashSet` for fast lookups.
/// When capacity is exceeded, the oldest key is automatically evicted. Inserting
/// a key that is already present is a no-op which preserves its position; only
/// [`Self::reinsert`] refreshes a key to the newest position.
///
/// # Examples
///
/// ```
/// use nautilus_ringmap::RingSet;
///
/// let mut seen: RingSet<u32> = RingSet::new(3);
/// assert!(seen.insert(1));
/// assert!(seen.insert(2));
/// assert!(!seen.insert(1)); // duplicate
///
/// // Inserting beyond capacity evicts the oldest
/// seen.insert(3);
/// seen.insert(4);
/// assert!(!seen.contains(&1));
/// assert!(seen.contains(&4));
/// ```
///
/// # Thread Safety
///
/// This set is not thread-safe. If shared across threads, wrap it in an
/// appropriate synchronization primitive such as `Arc<RwLock<RingSet<K>>>` or
/// `Arc<Mutex<RingSet<K>>>`.
#[derive(Debug, Clone)]
pub struct RingSet<K>
where
    K: Clone + Debug + Eq + Hash,
{
    capacity: usize,
    order: VecDeque<K>,
    index: AHashSet<K>,
}

impl<K> RingSet<K>
where
    K: Clone + Debug + Eq + Hash,
{
    /// Creates a new empty [`RingSet`] with the given fixed capacity.
    ///
    /// A capacity of zero is permitted: such a set retains nothing and every
    /// insert is immediately discarded.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity),
            index: AHashSet::with_capacity(capacity),
        }
    }

    /// Returns the capacity of the set.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of keys in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns whether the set is at capacity.
    ///
    /// A zero-capacity set is always full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.index.len() >= self.capacity
    }

    /// Returns whether the set contains the given key (O(1) lookup).
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    /// Inserts a key, returning whether it was absent.
    ///
    /// A key that is already present keeps its position in the insertion order
    /// and nothing changes. If the key is new and the set is at capacity, the
    /// oldest key is evicted first; the incoming key is then appended at the
    /// newest position.
    ///
    /// With zero capacity a new key is still reported as absent but is
    /// discarded immediately.
    pub fn insert(&mut self, key: K) -> bool {
        if self.index.contains(&key) {
            return false;
        }

        if self.capacity == 0 {
            log::debug!("Zero-capacity ring set discarded insert: key={key:?}");
            return true;
        }

        if self.is_full()
            && let Some(evicted) = self.order.pop_front()
        {
            self.index.remove(&evicted);
        }

        self.order.push_back(key.clone());
        self.index.insert(key);

        debug_assert_eq!(
            self.order.len(),
            self.index.len(),
            "Order sequence and index should contain the same keys"
        );

        true
    }

    /// Inserts a key at the newest position, returning whether it was absent.
    ///
    /// Unlike [`Self::insert`], a key that is already present does not keep its
    /// place: it is removed and recreated at the back, refreshing its position
    /// in the eviction order without evicting any other key. For a new key this
    /// behaves exactly like [`Self::insert`].
    pub fn reinsert(&mut self, key: K) -> bool {
        let was_present = self.remove(&key);
        // Key is now guaranteed absent, so this appends at the back
        self.insert(key);
        !was_present
    }

    /// Removes a key from the set, returning whether it was present.
    ///
    /// The relative order of the remaining keys is unchanged.
    pub fn remove(&mut self, key: &K) -> bool {
        if self.index.remove(key) {
            self.order.retain(|k| k != key);

            debug_assert_eq!(
                self.order.len(),
                self.index.len(),
                "Order sequence and index should contain the same keys"
            );

            true
        } else {
            false
        }
    }

    /// Removes and returns the oldest key, or `None` if the set is empty.
    pub fn pop_front(&mut self) -> Option<K> {
        let key = self.order.pop_front()?;
        self.index.remove(&key);
        Some(key)
    }

    /// Returns the oldest key, or `None` if the set is empty.
    #[must_use]
    pub fn front(&self) -> Option<&K> {
        self.order.front()
    }

    /// Returns the newest key, or `None` if the set is empty.
    #[must_use]
    pub fn back(&self) -> Option<&K> {
        self.order.back()
    }

    /// Returns the keys in insertion order, oldest first.
    ///
    /// The returned vector is a detached snapshot: later mutations of the set
    /// do not affect it.
    #[must_use]
    pub fn keys(&self) -> Vec<K> {
        self.order.iter().cloned().collect()
    }

    /// Returns an iterator over keys in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    /// Clears all keys from the set.
    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }
}

impl<K> IntoIterator for RingSet<K>
where
    K: Clone + Debug + Eq + Hash,
{
    type Item = K;
    type IntoIter = vec_deque::IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}
