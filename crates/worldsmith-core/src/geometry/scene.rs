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

use super::{Aabb, Mesh};

/// A multi-object mesh container, as produced by loading a file that holds
/// more than one model (e.g. an OBJ with several objects or a glTF document
/// with several primitives).
#[derive(Debug, Clone, Default)]
pub struct Scene {
    meshes: Vec<Mesh>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scene from an existing list of sub-meshes.
    pub fn from_meshes(meshes: Vec<Mesh>) -> Self {
        Self { meshes }
    }

    /// Appends a sub-mesh.
    pub fn push(&mut self, mesh: Mesh) {
        self.meshes.push(mesh);
    }

    /// Returns the number of sub-meshes.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Returns `true` if the scene holds no sub-meshes.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Iterates over the sub-meshes.
    pub fn iter(&self) -> impl Iterator<Item = &Mesh> {
        self.meshes.iter()
    }

    /// Consumes the scene and returns its sub-meshes.
    pub fn decompose(self) -> Vec<Mesh> {
        self.meshes
    }

    /// Returns the combined bounds of all sub-meshes.
    ///
    /// An empty scene yields [`Aabb::INVALID`].
    pub fn bounding_box(&self) -> Aabb {
        self.meshes
            .iter()
            .fold(Aabb::INVALID, |acc, mesh| acc.union(mesh.bounding_box))
    }
}
