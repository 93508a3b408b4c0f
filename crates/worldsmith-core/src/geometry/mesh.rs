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

//! Triangle mesh representation and the stored mesh asset variants.

use super::{Aabb, Scene};
use crate::asset::Asset;
use glam::{Vec2, Vec3};

/// An indexed triangle mesh.
///
/// Positions and indices are mandatory; normals and texture coordinates are
/// present only when the producing loader or generator emitted them. The
/// bounding box is computed once at construction and kept in sync by the
/// builder methods, which never change the positions.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Per-vertex normals, if available.
    pub normals: Option<Vec<Vec3>>,
    /// Per-vertex texture coordinates, if available.
    pub tex_coords: Option<Vec<Vec2>>,
    /// Triangle list indices into the vertex arrays.
    pub indices: Vec<u32>,
    /// Axis-aligned bounds of the positions.
    pub bounding_box: Aabb,
}

impl Mesh {
    /// Creates a mesh from positions and triangle indices.
    ///
    /// The bounding box is derived from the positions; an empty mesh gets
    /// [`Aabb::INVALID`].
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let bounding_box = Aabb::from_points(&positions).unwrap_or(Aabb::INVALID);
        Self {
            positions,
            normals: None,
            tex_coords: None,
            indices,
            bounding_box,
        }
    }

    /// Attaches per-vertex normals.
    #[must_use]
    pub fn with_normals(mut self, normals: Vec<Vec3>) -> Self {
        self.normals = Some(normals);
        self
    }

    /// Attaches per-vertex texture coordinates.
    #[must_use]
    pub fn with_tex_coords(mut self, tex_coords: Vec<Vec2>) -> Self {
        self.tex_coords = Some(tex_coords);
        self
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// The unit stored per registry entry: either a single mesh or a multi-mesh
/// scene kept as-is.
///
/// File loads can yield either shape depending on the source file; primitive
/// generation always yields [`MeshAsset::Single`].
#[derive(Debug, Clone)]
pub enum MeshAsset {
    /// One triangle mesh.
    Single(Mesh),
    /// A multi-mesh scene, stored without flattening.
    Scene(Scene),
}

impl Asset for MeshAsset {}

impl MeshAsset {
    /// Normalizes the asset: a scene holding exactly one sub-mesh collapses
    /// into [`MeshAsset::Single`].
    ///
    /// Applied uniformly after every mesh-producing path, so a single-object
    /// scene file and a directly registered mesh end up in the same shape.
    #[must_use]
    pub fn collapse(self) -> Self {
        match self {
            MeshAsset::Scene(scene) if scene.len() == 1 => {
                let mut meshes = scene.decompose();
                MeshAsset::Single(meshes.remove(0))
            }
            other => other,
        }
    }

    /// Returns the single mesh, if this asset holds exactly one.
    pub fn as_single(&self) -> Option<&Mesh> {
        match self {
            MeshAsset::Single(mesh) => Some(mesh),
            MeshAsset::Scene(_) => None,
        }
    }

    /// Returns the number of sub-meshes held by this asset.
    pub fn sub_mesh_count(&self) -> usize {
        match self {
            MeshAsset::Single(_) => 1,
            MeshAsset::Scene(scene) => scene.len(),
        }
    }

    /// Returns the bounds of all contained geometry.
    pub fn bounding_box(&self) -> Aabb {
        match self {
            MeshAsset::Single(mesh) => mesh.bounding_box,
            MeshAsset::Scene(scene) => scene.bounding_box(),
        }
    }
}

impl From<Mesh> for MeshAsset {
    fn from(mesh: Mesh) -> Self {
        MeshAsset::Single(mesh)
    }
}

impl From<Scene> for MeshAsset {
    fn from(scene: Scene) -> Self {
        MeshAsset::Scene(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Mesh {
        Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn test_mesh_counts_and_bounds() {
        let mesh = triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.bounding_box.min, Vec3::ZERO);
        assert_eq!(mesh.bounding_box.max, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_single_mesh_scene_collapses() {
        let scene = Scene::from_meshes(vec![triangle()]);
        let asset = MeshAsset::from(scene).collapse();
        assert!(matches!(asset, MeshAsset::Single(_)));
        assert_eq!(asset.sub_mesh_count(), 1);
    }

    #[test]
    fn test_multi_mesh_scene_is_kept_as_is() {
        let scene = Scene::from_meshes(vec![triangle(), triangle()]);
        let asset = MeshAsset::from(scene).collapse();
        assert!(matches!(asset, MeshAsset::Scene(_)));
        assert_eq!(asset.sub_mesh_count(), 2);
        assert!(asset.as_single().is_none());
    }
}
