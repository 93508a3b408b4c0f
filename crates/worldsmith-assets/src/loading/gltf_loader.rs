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

//! Loader for glTF 2.0 mesh documents.

use super::MeshFormatLoader;
use glam::{Vec2, Vec3};
use std::error::Error;
use worldsmith_core::geometry::{Mesh, Scene};

/// Loader for glTF 2.0 documents: `.glb`, or `.gltf` with embedded buffers.
///
/// External buffer references are not followed — world packs ship their
/// meshes binary or base64-embedded. Every primitive of every glTF mesh
/// becomes one sub-mesh of the returned scene.
#[derive(Clone)]
pub struct GltfLoader;

impl MeshFormatLoader for GltfLoader {
    fn load(&self, bytes: &[u8]) -> Result<Scene, Box<dyn Error + Send + Sync>> {
        let (document, buffers, _images) =
            gltf::import_slice(bytes).map_err(|e| format!("Failed to parse glTF file: {e}"))?;

        let mut scene = Scene::new();
        for gltf_mesh in document.meshes() {
            for primitive in gltf_mesh.primitives() {
                let reader = primitive
                    .reader(|buffer| buffers.get(buffer.index()).map(|data| data.0.as_slice()));

                let positions: Vec<Vec3> = reader
                    .read_positions()
                    .ok_or("glTF primitive has no positions")?
                    .map(Vec3::from)
                    .collect();
                // Non-indexed primitives are sequential triangle lists.
                let indices: Vec<u32> = match reader.read_indices() {
                    Some(indices) => indices.into_u32().collect(),
                    None => (0..positions.len() as u32).collect(),
                };

                let mut sub_mesh = Mesh::new(positions, indices);
                if let Some(normals) = reader.read_normals() {
                    sub_mesh = sub_mesh.with_normals(normals.map(Vec3::from).collect());
                }
                if let Some(tex_coords) = reader.read_tex_coords(0) {
                    sub_mesh =
                        sub_mesh.with_tex_coords(tex_coords.into_f32().map(Vec2::from).collect());
                }
                scene.push(sub_mesh);
            }
        }

        if scene.is_empty() {
            return Err("No meshes found in glTF file".into());
        }
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assembles a binary glTF container from a JSON chunk and a BIN chunk.
    fn glb(json: &str, bin: &[u8]) -> Vec<u8> {
        let mut json_chunk = json.as_bytes().to_vec();
        while json_chunk.len() % 4 != 0 {
            json_chunk.push(b' ');
        }
        let mut bin_chunk = bin.to_vec();
        while bin_chunk.len() % 4 != 0 {
            bin_chunk.push(0);
        }

        let total = 12 + 8 + json_chunk.len() + 8 + bin_chunk.len();
        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(b"glTF");
        out.extend_from_slice(&2u32.to_le_bytes());
        out.extend_from_slice(&(total as u32).to_le_bytes());
        out.extend_from_slice(&(json_chunk.len() as u32).to_le_bytes());
        out.extend_from_slice(b"JSON");
        out.extend_from_slice(&json_chunk);
        out.extend_from_slice(&(bin_chunk.len() as u32).to_le_bytes());
        out.extend_from_slice(b"BIN\0");
        out.extend_from_slice(&bin_chunk);
        out
    }

    /// One right triangle in the XY plane, 36 bytes of little-endian f32.
    fn triangle_positions() -> Vec<u8> {
        let verts: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        verts.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    const INDEXED_JSON: &str = r#"{
        "asset": {"version": "2.0"},
        "buffers": [{"byteLength": 42}],
        "bufferViews": [
            {"buffer": 0, "byteOffset": 0, "byteLength": 36},
            {"buffer": 0, "byteOffset": 36, "byteLength": 6}
        ],
        "accessors": [
            {"bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
             "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]},
            {"bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR"}
        ],
        "meshes": [{"primitives": [{"attributes": {"POSITION": 0}, "indices": 1}]}]
    }"#;

    const NON_INDEXED_JSON: &str = r#"{
        "asset": {"version": "2.0"},
        "buffers": [{"byteLength": 36}],
        "bufferViews": [{"buffer": 0, "byteOffset": 0, "byteLength": 36}],
        "accessors": [
            {"bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
             "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]}
        ],
        "meshes": [{"primitives": [{"attributes": {"POSITION": 0}}]}]
    }"#;

    const TWO_PRIMITIVE_JSON: &str = r#"{
        "asset": {"version": "2.0"},
        "buffers": [{"byteLength": 42}],
        "bufferViews": [
            {"buffer": 0, "byteOffset": 0, "byteLength": 36},
            {"buffer": 0, "byteOffset": 36, "byteLength": 6}
        ],
        "accessors": [
            {"bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
             "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]},
            {"bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR"}
        ],
        "meshes": [{"primitives": [
            {"attributes": {"POSITION": 0}, "indices": 1},
            {"attributes": {"POSITION": 0}, "indices": 1}
        ]}]
    }"#;

    fn indexed_bin() -> Vec<u8> {
        let mut bin = triangle_positions();
        for index in [0u16, 1, 2] {
            bin.extend_from_slice(&index.to_le_bytes());
        }
        bin
    }

    #[test]
    fn test_indexed_glb_loads_one_sub_mesh() {
        let bytes = glb(INDEXED_JSON, &indexed_bin());
        let scene = GltfLoader.load(&bytes).unwrap();
        assert_eq!(scene.len(), 1);

        let meshes = scene.decompose();
        assert_eq!(meshes[0].vertex_count(), 3);
        assert_eq!(meshes[0].triangle_count(), 1);
    }

    #[test]
    fn test_non_indexed_glb_gets_sequential_indices() {
        let bytes = glb(NON_INDEXED_JSON, &triangle_positions());
        let scene = GltfLoader.load(&bytes).unwrap();

        let meshes = scene.decompose();
        assert_eq!(meshes[0].indices, vec![0, 1, 2]);
        assert_eq!(meshes[0].triangle_count(), 1);
    }

    #[test]
    fn test_each_primitive_becomes_a_sub_mesh() {
        let bytes = glb(TWO_PRIMITIVE_JSON, &indexed_bin());
        let scene = GltfLoader.load(&bytes).unwrap();
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn test_garbage_input_is_an_error() {
        assert!(GltfLoader.load(b"not a gltf document").is_err());
    }
}
