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

//! Bounded FIFO-evicting collections with O(1) lookups.
//!
//! Provides two containers which hold at most a fixed number of entries,
//! automatically evicting the oldest entry when capacity is exceeded:
//!
//! - [`RingMap`]: an insertion-ordered key-value map.
//! - [`RingSet`]: an insertion-ordered membership set.
//!
//! # Eviction semantics
//!
//! Ordering is strictly FIFO by insertion: reads never promote an entry, which
//! distinguishes these containers from LRU caches. Updating an existing key in
//! place preserves its position, while [`RingMap::reinsert`] /
//! [`RingSet::reinsert`] explicitly recreate a key at the newest position.
//!
//! Typical uses are recent-ID deduplication and bounded last-N caches where
//! memory must not grow with the input stream.

pub mod map;
pub mod set;

pub use self::{map::RingMap, set::RingSet};
