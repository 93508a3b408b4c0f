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

//! Mesh file-format loaders.

mod gltf_loader;
mod obj_loader;

pub use gltf_loader::*;
pub use obj_loader::*;

use std::error::Error;
use std::path::Path;
use worldsmith_core::geometry::Scene;

/// A loader for one on-disk mesh format.
///
/// Implementations own the CPU-heavy parsing and decoding work and return
/// the decoded scene; they never touch the registry. Errors are boxed and
/// thread-safe so each format crate can surface its own error type.
pub trait MeshFormatLoader {
    /// Parses raw file bytes into a scene of one or more sub-meshes.
    fn load(&self, bytes: &[u8]) -> Result<Scene, Box<dyn Error + Send + Sync>>;
}

/// Loads a mesh file, picking the loader from the file extension.
///
/// Extensions are matched case-insensitively; anything other than `obj`,
/// `gltf`, or `glb` is a loader error.
pub fn load_scene(path: &Path) -> Result<Scene, Box<dyn Error + Send + Sync>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let bytes = std::fs::read(path)?;
    match extension.as_str() {
        "obj" => ObjLoader.load(&bytes),
        "gltf" | "glb" => GltfLoader.load(&bytes),
        other => Err(format!("unsupported mesh format: '{other}'").into()),
    }
}
