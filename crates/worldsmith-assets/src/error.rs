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

//! Error types for the mesh registry.

use std::{error::Error, io, path::PathBuf};
use thiserror::Error;

/// A usage or load failure raised by the mesh registry.
///
/// These cover the caller-mistake class of failures only. Lookup misses and
/// unsupported primitive kinds are deliberately not errors — those paths
/// return `None` (see [`MeshRegistry::add`](crate::MeshRegistry::add)).
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The referenced mesh file does not exist on disk.
    #[error("invalid mesh filename, value={}", .path.display())]
    MissingFile {
        /// The path as the caller supplied it.
        path: PathBuf,
    },

    /// A primitive dimension failed validation.
    #[error("invalid dimensions for {kind} primitive: {reason}")]
    InvalidDimensions {
        /// The primitive kind being constructed.
        kind: String,
        /// What was wrong with the supplied dimensions.
        reason: String,
    },

    /// A format loader could not decode the file.
    #[error("failed to load mesh from {}: {source}", .path.display())]
    Load {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying loader error.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },

    /// The file reference could not be canonicalized.
    #[error("failed to resolve path {}: {source}", .path.display())]
    Resolve {
        /// The path that failed to resolve.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}
