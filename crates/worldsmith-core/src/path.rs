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

//! Canonical file-path identity for deduplicating file-backed assets.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// A canonicalized, absolute file path.
///
/// Two `ResolvedPath`s compare equal exactly when they name the same file on
/// disk, regardless of how the original references were spelled (relative
/// segments, `.`/`..` components, or a `file://` scheme prefix). This is the
/// identity the mesh registry uses for content-addressed dedup, so it is
/// deliberately exact: no prefix or fuzzy matching.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath(PathBuf);

impl ResolvedPath {
    /// Resolves a raw file reference into its canonical form.
    ///
    /// A leading `file://` scheme is stripped before canonicalization, so
    /// URI-style references from world description files resolve to the same
    /// identity as plain paths.
    ///
    /// # Errors
    /// Fails with the underlying `io::Error` if the path does not exist or
    /// cannot be canonicalized.
    pub fn resolve(raw: impl AsRef<Path>) -> io::Result<Self> {
        let raw = raw.as_ref();
        let stripped = raw
            .to_str()
            .and_then(|s| s.strip_prefix("file://"))
            .map(Path::new)
            .unwrap_or(raw);
        Ok(Self(stripped.canonicalize()?))
    }

    /// Returns the canonical path.
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
