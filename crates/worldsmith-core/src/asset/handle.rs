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

use super::Asset;
use std::{ops::Deref, sync::Arc};

/// A reference-counted handle to an asset stored in a collection.
///
/// Collections own exactly one handle per registered entry; lookups hand out
/// clones of it. Cloning only bumps the reference count, so callers can keep
/// a handle alive for as long as they need the data without copying it.
#[derive(Debug)]
pub struct AssetHandle<T: Asset>(Arc<T>);

impl<T: Asset> AssetHandle<T> {
    /// Wraps freshly built asset data in a handle.
    pub fn new(asset: T) -> Self {
        Self(Arc::new(asset))
    }

    /// Returns `true` if both handles point at the same underlying asset.
    ///
    /// This is identity, not structural equality: two meshes with identical
    /// geometry registered separately compare as different.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Asset> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Asset> Deref for AssetHandle<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Blob {
        bytes: Vec<u8>,
    }
    impl Asset for Blob {}

    #[test]
    fn test_clone_shares_the_same_asset() {
        let a = AssetHandle::new(Blob {
            bytes: vec![1, 2, 3],
        });
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(b.bytes, vec![1, 2, 3]);
    }

    #[test]
    fn test_separate_handles_are_not_identical() {
        let a = AssetHandle::new(Blob { bytes: vec![7] });
        let b = AssetHandle::new(Blob { bytes: vec![7] });
        assert!(!a.ptr_eq(&b));
    }
}
