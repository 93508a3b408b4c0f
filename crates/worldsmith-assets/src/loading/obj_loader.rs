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

//! Loader for OBJ mesh files.

use super::MeshFormatLoader;
use ahash::AHashMap;
use anyhow::Context;
use glam::{Vec2, Vec3};
use std::error::Error;
use worldsmith_core::geometry::{Mesh, Scene};

/// Loader for OBJ mesh files.
///
/// Every OBJ model becomes one sub-mesh, so a file holding several objects
/// comes back as a multi-mesh scene.
#[derive(Clone)]
pub struct ObjLoader;

impl MeshFormatLoader for ObjLoader {
    fn load(&self, bytes: &[u8]) -> Result<Scene, Box<dyn Error + Send + Sync>> {
        let obj_text = std::str::from_utf8(bytes).context("OBJ file is not valid UTF-8")?;

        let (models, _materials) = tobj::load_obj_buf(
            &mut std::io::Cursor::new(obj_text),
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
            // Materials carry no geometry; resolve every MTL reference to an
            // empty library instead of hitting the filesystem.
            |_| Ok((Vec::new(), AHashMap::new())),
        )
        .context("Failed to parse OBJ file")?;

        if models.is_empty() {
            return Err("No models found in OBJ file".into());
        }

        let mut scene = Scene::new();
        for model in &models {
            let mesh = &model.mesh;

            let positions = mesh
                .positions
                .chunks(3)
                .map(|v| Vec3::new(v[0], v[1], v[2]))
                .collect();
            let mut sub_mesh = Mesh::new(positions, mesh.indices.clone());

            if !mesh.normals.is_empty() {
                sub_mesh = sub_mesh.with_normals(
                    mesh.normals
                        .chunks(3)
                        .map(|n| Vec3::new(n[0], n[1], n[2]))
                        .collect(),
                );
            }
            if !mesh.texcoords.is_empty() {
                sub_mesh = sub_mesh.with_tex_coords(
                    mesh.texcoords
                        .chunks(2)
                        .map(|t| Vec2::new(t[0], t[1]))
                        .collect(),
                );
            }

            scene.push(sub_mesh);
        }
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE_OBJECT: &str = "\
o triangle
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
f 1 2 3
";

    const TWO_OBJECTS: &str = "\
o first
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
f 1 2 3
o second
v 0.0 0.0 1.0
v 1.0 0.0 1.0
v 0.0 1.0 1.0
f 4 5 6
";

    #[test]
    fn test_single_object_obj() {
        let scene = ObjLoader.load(SINGLE_OBJECT.as_bytes()).unwrap();
        assert_eq!(scene.len(), 1);
        let meshes = scene.decompose();
        assert_eq!(meshes[0].vertex_count(), 3);
        assert_eq!(meshes[0].triangle_count(), 1);
    }

    #[test]
    fn test_multi_object_obj_becomes_a_scene() {
        let scene = ObjLoader.load(TWO_OBJECTS.as_bytes()).unwrap();
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_garbage_input_is_an_error() {
        assert!(ObjLoader.load(&[0xff, 0xfe, 0x00]).is_err());
    }
}
