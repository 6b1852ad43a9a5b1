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

//! A bounded insertion-ordered map with FIFO eviction and O(1) lookups.

use std::{
    collections::{VecDeque, vec_deque},
    fmt::Debug,
    hash::Hash,
};

use ahash::AHashMap;

/// A bounded map that maintains key-value pairs in insertion order with O(1) lookups.
///
/// Uses a `VecDeque` for FIFO ordering and an `AHashMap` for fast key-value access.
/// When capacity is exceeded, the oldest entry is automatically evicted. Updating
/// an existing key preserves its position; only [`Self::reinsert`] refreshes a key
/// to the newest position. Reads never reorder entries.
///
/// # Examples
///
/// ```
/// use nautilus_ringmap::RingMap;
///
/// let mut map: RingMap<u32, &str> = RingMap::new(3);
/// map.insert(1, "one");
/// map.insert(2, "two");
/// map.insert(3, "three");
/// assert_eq!(map.get(&1), Some(&"one"));
///
/// // Inserting beyond capacity evicts the oldest
/// map.insert(4, "four");
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.front(), Some((&2, &"two")));
/// assert_eq!(map.back(), Some((&4, &"four")));
/// ```
///
/// # Thread Safety
///
/// This map is not thread-safe. The order sequence and the lookup index must be
/// updated together, so if shared across threads, wrap the whole map in an
/// appropriate synchronization primitive such as `Arc<RwLock<RingMap<K, V>>>` or
/// `Arc<Mutex<RingMap<K, V>>>`.
#[derive(Debug, Clone)]
pub struct RingMap<K, V>
where
    K: Clone + Debug + Eq + Hash,
{
    capacity: usize,
    order: VecDeque<K>,
    index: AHashMap<K, V>,
}

impl<K, V> RingMap<K, V>
where
    K: Clone + Debug + Eq + Hash,
{
    /// Creates a new empty [`RingMap`] with the given fixed capacity.
    ///
    /// A capacity of zero is permitted: such a map retains nothing and every
    /// insert is immediately discarded.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::with_capacity(capacity),
            index: AHashMap::with_capacity(capacity),
        }
    }

    /// Returns the capacity of the map.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns whether the map is at capacity.
    ///
    /// A zero-capacity map is always full.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.index.len() >= self.capacity
    }

    /// Returns whether the map contains the given key (O(1) lookup).
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns a reference to the value for the given key (O(1) lookup).
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key)
    }

    /// Returns a reference to the value for the given key, or `default` if the
    /// key is absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &K, default: &'a V) -> &'a V {
        self.index.get(key).unwrap_or(default)
    }

    /// Returns a mutable reference to the value for the given key (O(1) lookup).
    ///
    /// Mutating a value in place does not refresh the key's position in the
    /// eviction order.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.index.get_mut(key)
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present.
    ///
    /// An existing key has its value updated in place and keeps its position in
    /// the insertion order (no eviction occurs). If the key is new and the map
    /// is at capacity, the oldest entry is evicted first; the incoming entry is
    /// then appended at the newest position.
    ///
    /// With zero capacity the entry is discarded immediately and the map stays
    /// empty.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.index.contains_key(&key) {
            return self.index.insert(key, value);
        }

        if self.capacity == 0 {
            log::debug!("Zero-capacity ring map discarded insert: key={key:?}");
            return None;
        }

        if self.is_full()
            && let Some(evicted) = self.order.pop_front()
        {
            self.index.remove(&evicted);
        }

        self.order.push_back(key.clone());
        self.index.insert(key, value);

        debug_assert_eq!(
            self.order.len(),
            self.index.len(),
            "Order sequence and index should contain the same keys"
        );

        None
    }

    /// Inserts a key-value pair at the newest position, returning the previous
    /// value if the key was present.
    ///
    /// Unlike [`Self::insert`], an existing key does not keep its place: it is
    /// removed and recreated at the back, refreshing its position in the
    /// eviction order. A key refreshed this way reuses its own slot, so no
    /// other entry is evicted even when the map is full. For a new key this
    /// behaves exactly like [`Self::insert`].
    pub fn reinsert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.remove(&key);
        // Key is now guaranteed absent, so this appends at the back
        self.insert(key, value);
        previous
    }

    /// Removes a key from the map, returning the value if present.
    ///
    /// The relative order of the remaining entries is unchanged.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        if let Some(value) = self.index.remove(key) {
            self.order.retain(|k| k != key);

            debug_assert_eq!(
                self.order.len(),
                self.index.len(),
                "Order sequence and index should contain the same keys"
            );

            Some(value)
        } else {
            None
        }
    }

    /// Removes and returns the oldest entry, or `None` if the map is empty.
    pub fn pop_front(&mut self) -> Option<(K, V)> {
        let key = self.order.pop_front()?;
        let value = self.index.remove(&key)?;
        Some((key, value))
    }

    /// Returns the oldest entry as a key-value pair, or `None` if the map is
    /// empty.
    #[must_use]
    pub fn front(&self) -> Option<(&K, &V)> {
        let key = self.order.front()?;
        self.index.get_key_value(key)
    }

    /// Returns the newest entry as a key-value pair, or `None` if the map is
    /// empty.
    #[must_use]
    pub fn back(&self) -> Option<(&K, &V)> {
        let key = self.order.back()?;
        self.index.get_key_value(key)
    }

    /// Returns the keys in insertion order, oldest first.
    ///
    /// The returned vector is a detached snapshot: later mutations of the map
    /// do not affect it.
    #[must_use]
    pub fn keys(&self) -> Vec<K> {
        self.order.iter().cloned().collect()
    }

    /// Returns an iterator over entries in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.order
            .iter()
            .filter_map(|key| self.index.get_key_value(key))
    }

    /// Returns an iterator over values in insertion order, oldest first.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.order.iter().filter_map(|key| self.index.get(key))
    }

    /// Clears all entries from the map.
    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }
}

impl<K, V> IntoIterator for RingMap<K, V>
where
    K: Clone + Debug + Eq + Hash,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            order: self.order.into_iter(),
            index: self.index,
        }
    }
}

/// A consuming iterator over the entries of a [`RingMap`], oldest first.
#[derive(Debug)]
pub struct IntoIter<K, V> {
    order: vec_deque::IntoIter<K>,
    index: AHashMap<K, V>,
}

impl<K, V> Iterator for IntoIter<K, V>
where
    K: Clone + Debug + Eq + Hash,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.order.next()?;
        let value = self.index.remove(&key)?;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}
