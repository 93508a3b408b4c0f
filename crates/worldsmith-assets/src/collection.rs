// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A generic, in-memory store for tagged collection items.

use std::collections::HashMap;

/// A central, in-memory store mapping unique string tags to items of type `T`.
///
/// This is the base every tagged asset family in the tool is managed with;
/// the mesh registry builds its dedup and lookup rules on top of it.
/// Iteration order is unspecified — tag uniqueness is the only structural
/// guarantee callers may rely on.
#[derive(Debug)]
pub struct Collection<T> {
    storage: HashMap<String, T>,
}

impl<T> Collection<T> {
    /// Creates a new, empty collection.
    pub fn new() -> Self {
        Self {
            storage: HashMap::new(),
        }
    }

    /// Inserts an item under `tag`.
    ///
    /// If the tag was already present, the previous item is replaced;
    /// callers that need insert-only semantics check
    /// [`contains`](Self::contains) first.
    pub fn insert(&mut self, tag: impl Into<String>, item: T) {
        self.storage.insert(tag.into(), item);
    }

    /// Retrieves the item stored under `tag`, if any.
    pub fn get(&self, tag: &str) -> Option<&T> {
        self.storage.get(tag)
    }

    /// Returns `true` if an item is stored under `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.storage.contains_key(tag)
    }

    /// Removes and returns the item stored under `tag`, if any.
    pub fn remove(&mut self, tag: &str) -> Option<T> {
        self.storage.remove(tag)
    }

    /// Returns the number of stored items.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Iterates over the stored tags.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.storage.keys().map(String::as_str)
    }

    /// Iterates over `(tag, item)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.storage.iter().map(|(tag, item)| (tag.as_str(), item))
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}
