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

//! The mesh registry: tag allocation, deduplication, and lookup.

use crate::collection::Collection;
use crate::error::RegistryError;
use crate::loading;
use crate::primitive::{self, PrimitiveSpec};
use glam::Vec3;
use std::path::{Path, PathBuf};
use worldsmith_core::asset::AssetHandle;
use worldsmith_core::geometry::{Mesh, MeshAsset};
use worldsmith_core::path::ResolvedPath;

/// The construction request handed to [`MeshRegistry::add`]: exactly one of
/// the three ways a mesh enters the registry.
#[derive(Debug)]
pub enum MeshSource {
    /// Load a mesh file from disk.
    File(PathBuf),
    /// Adopt an already-built mesh asset.
    Asset(MeshAsset),
    /// Generate a primitive solid.
    Primitive(PrimitiveSpec),
}

/// One registered mesh: the stored asset plus, for file loads, the resolved
/// source path used for deduplication.
#[derive(Debug, Clone)]
pub struct MeshEntry {
    source_path: Option<ResolvedPath>,
    asset: AssetHandle<MeshAsset>,
}

impl MeshEntry {
    /// The resolved source file, set only for file-loaded meshes.
    pub fn source_path(&self) -> Option<&ResolvedPath> {
        self.source_path.as_ref()
    }

    /// A shared handle to the stored mesh data.
    pub fn asset(&self) -> AssetHandle<MeshAsset> {
        self.asset.clone()
    }
}

/// In-memory registry that deduplicates and caches meshes by tag or by
/// source filename.
///
/// The registry owns tag allocation, dedup, and lookup only; mesh
/// construction is delegated to the [`loading`] module and the
/// [`primitive`] generators. It is an explicit object — hosts construct one
/// and pass it where needed; there is no global instance. Entries are built
/// completely before insertion, so a failed `add` never leaves a
/// half-populated record behind.
#[derive(Debug, Default)]
pub struct MeshRegistry {
    collection: Collection<MeshEntry>,
}

impl MeshRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lowest-indexed unused tag of the form `mesh_<i>`.
    ///
    /// Deterministic for a given registry state: repeated calls without
    /// intervening inserts return the same value.
    pub fn unique_tag(&self) -> String {
        let mut i = 0;
        loop {
            let tag = format!("mesh_{i}");
            if !self.collection.contains(&tag) {
                return tag;
            }
            i += 1;
        }
    }

    /// Registers a mesh under `tag`, or under a generated tag when `None`.
    ///
    /// Returns:
    /// - `Ok(Some(tag))` — the tag the mesh is stored under. This is the
    ///   input tag if it was free, the input tag unchanged if it was already
    ///   taken (idempotent no-op — nothing is rebuilt or overwritten), or an
    ///   existing tag when a file source deduplicates against a previously
    ///   loaded file with the same resolved path.
    /// - `Ok(None)` — the source named an unknown primitive kind, or a
    ///   recognized kind with a required field absent. The registry is left
    ///   unchanged.
    /// - `Err` — usage errors: a file source whose path does not exist, a
    ///   primitive with invalid dimensions, or a file the loaders cannot
    ///   decode.
    ///
    /// Scenes that decompose to exactly one sub-mesh are collapsed to that
    /// mesh before storage, whichever source produced them.
    pub fn add(
        &mut self,
        tag: Option<&str>,
        source: MeshSource,
    ) -> Result<Option<String>, RegistryError> {
        let tag = match tag {
            Some(tag) => tag.to_owned(),
            None => self.unique_tag(),
        };
        if self.collection.contains(&tag) {
            return Ok(Some(tag));
        }

        let entry = match source {
            MeshSource::File(path) => {
                if !path.is_file() {
                    return Err(RegistryError::MissingFile { path });
                }
                if let Some(existing) = self.find_mesh_by_filename(&path) {
                    return Ok(Some(existing));
                }
                let resolved = ResolvedPath::resolve(&path).map_err(|source| {
                    RegistryError::Resolve {
                        path: path.clone(),
                        source,
                    }
                })?;
                let scene = loading::load_scene(&path).map_err(|source| RegistryError::Load {
                    path: path.clone(),
                    source,
                })?;
                let sub_meshes = scene.len();
                log::info!("Mesh loaded, filename={resolved}, sub-meshes={sub_meshes}");
                MeshEntry {
                    source_path: Some(resolved),
                    asset: AssetHandle::new(MeshAsset::from(scene).collapse()),
                }
            }
            MeshSource::Asset(asset) => MeshEntry {
                source_path: None,
                asset: AssetHandle::new(asset.collapse()),
            },
            MeshSource::Primitive(spec) => match build_primitive(&spec)? {
                Some(mesh) => MeshEntry {
                    source_path: None,
                    asset: AssetHandle::new(MeshAsset::Single(mesh)),
                },
                None => return Ok(None),
            },
        };

        self.collection.insert(tag.clone(), entry);
        Ok(Some(tag))
    }

    /// Looks up the mesh registered under `tag`.
    ///
    /// Unknown tags log an error and return `None`; this is never a failure.
    pub fn get(&self, tag: &str) -> Option<AssetHandle<MeshAsset>> {
        match self.collection.get(tag) {
            Some(entry) => Some(entry.asset()),
            None => {
                log::error!("No mesh element with tag <{tag}> was found");
                None
            }
        }
    }

    /// Looks up a mesh by the file it was loaded from.
    ///
    /// Matching is exact equality on the resolved path, never prefix or
    /// fuzzy. Returns `None` on resolution failure or when no file-loaded
    /// entry matches.
    pub fn get_by_filename(&self, filename: impl AsRef<Path>) -> Option<AssetHandle<MeshAsset>> {
        let resolved = ResolvedPath::resolve(filename).ok()?;
        self.collection
            .iter()
            .find(|(_, entry)| entry.source_path.as_ref() == Some(&resolved))
            .map(|(_, entry)| entry.asset())
    }

    /// Returns the tag of the mesh loaded from `filename`, if any.
    pub fn find_mesh_by_filename(&self, filename: impl AsRef<Path>) -> Option<String> {
        let resolved = ResolvedPath::resolve(filename).ok()?;
        self.collection
            .iter()
            .find(|(_, entry)| entry.source_path.as_ref() == Some(&resolved))
            .map(|(tag, _)| tag.to_owned())
    }

    /// Returns `true` if a mesh is registered under `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.collection.contains(tag)
    }

    /// Returns the number of registered meshes.
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Returns `true` if no meshes are registered.
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Iterates over the registered tags.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.collection.tags()
    }
}

/// Dispatches a primitive request to the generators, validating dimensions.
///
/// `Ok(None)` marks the no-match cases (unknown kind, required field
/// absent); out-of-range values are usage errors.
fn build_primitive(spec: &PrimitiveSpec) -> Result<Option<Mesh>, RegistryError> {
    match spec.kind.as_str() {
        "box" => {
            let Some(size) = &spec.size else {
                return Ok(None);
            };
            if size.len() != 3 {
                return Err(RegistryError::InvalidDimensions {
                    kind: "box".to_string(),
                    reason: format!("size must have 3 elements, got {}", size.len()),
                });
            }
            // `!(x > 0.0)` also catches NaN, which `x <= 0.0` would let through.
            if size.iter().any(|component| !(*component > 0.0)) {
                return Err(RegistryError::InvalidDimensions {
                    kind: "box".to_string(),
                    reason: "size components must be greater than zero".to_string(),
                });
            }
            log::info!("Box mesh created, size={size:?}");
            Ok(Some(primitive::box_mesh(Vec3::new(
                size[0], size[1], size[2],
            ))))
        }
        "cylinder" => {
            let (Some(radius), Some(height)) = (spec.radius, spec.height) else {
                return Ok(None);
            };
            ensure_positive("cylinder", "radius", radius)?;
            ensure_positive("cylinder", "height", height)?;
            log::info!("Cylinder mesh created, radius [m]={radius}, height [m]={height}");
            Ok(Some(primitive::cylinder(radius, height)))
        }
        "capsule" => {
            let (Some(radius), Some(height)) = (spec.radius, spec.height) else {
                return Ok(None);
            };
            ensure_positive("capsule", "radius", radius)?;
            ensure_positive("capsule", "height", height)?;
            log::info!("Capsule mesh created, radius [m]={radius}, height [m]={height}");
            Ok(Some(primitive::capsule(radius, height)))
        }
        "sphere" => {
            let Some(radius) = spec.radius else {
                return Ok(None);
            };
            ensure_positive("sphere", "radius", radius)?;
            log::info!("Sphere mesh created, radius [m]={radius}");
            Ok(Some(primitive::icosphere(radius)))
        }
        _ => Ok(None),
    }
}

fn ensure_positive(kind: &str, field: &str, value: f32) -> Result<(), RegistryError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(RegistryError::InvalidDimensions {
            kind: kind.to_string(),
            reason: format!("{field} must be greater than zero"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_tag_starts_at_zero_and_is_stable() {
        let mut registry = MeshRegistry::new();
        assert_eq!(registry.unique_tag(), "mesh_0");
        assert_eq!(registry.unique_tag(), "mesh_0");

        registry
            .add(None, MeshSource::Primitive(PrimitiveSpec::sphere(1.0)))
            .unwrap();
        assert_eq!(registry.unique_tag(), "mesh_1");
    }

    #[test]
    fn test_unique_tag_fills_the_lowest_gap() {
        let mut registry = MeshRegistry::new();
        registry
            .add(
                Some("mesh_1"),
                MeshSource::Primitive(PrimitiveSpec::sphere(1.0)),
            )
            .unwrap();
        // mesh_0 is still free, so it comes first.
        assert_eq!(registry.unique_tag(), "mesh_0");
    }

    #[test]
    fn test_add_is_idempotent_on_a_taken_tag() {
        let mut registry = MeshRegistry::new();
        let first = registry
            .add(
                Some("wheel"),
                MeshSource::Primitive(PrimitiveSpec::cylinder(0.3, 0.1)),
            )
            .unwrap();
        assert_eq!(first.as_deref(), Some("wheel"));
        let handle = registry.get("wheel").unwrap();

        // Second add under the same tag builds nothing and keeps the entry.
        let second = registry
            .add(
                Some("wheel"),
                MeshSource::Primitive(PrimitiveSpec::sphere(9.0)),
            )
            .unwrap();
        assert_eq!(second.as_deref(), Some("wheel"));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("wheel").unwrap().ptr_eq(&handle));
    }

    #[test]
    fn test_box_with_valid_size_is_retrievable() {
        let mut registry = MeshRegistry::new();
        let tag = registry
            .add(
                None,
                MeshSource::Primitive(PrimitiveSpec::box_shape([1.0, 1.0, 1.0])),
            )
            .unwrap()
            .expect("unit box is a supported primitive");

        let asset = registry.get(&tag).unwrap();
        let mesh = asset.as_single().expect("primitives are single meshes");
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_box_with_bad_dimensions_is_an_error() {
        let mut registry = MeshRegistry::new();

        let negative = registry.add(
            None,
            MeshSource::Primitive(PrimitiveSpec::box_shape([1.0, 1.0, -1.0])),
        );
        assert!(matches!(
            negative,
            Err(RegistryError::InvalidDimensions { .. })
        ));

        let mut short = PrimitiveSpec::box_shape([1.0, 1.0, 1.0]);
        short.size = Some(vec![1.0, 1.0]);
        let short = registry.add(None, MeshSource::Primitive(short));
        assert!(matches!(
            short,
            Err(RegistryError::InvalidDimensions { .. })
        ));

        assert!(registry.is_empty());
    }

    #[test]
    fn test_nan_box_size_is_an_error() {
        let mut registry = MeshRegistry::new();
        let result = registry.add(
            None,
            MeshSource::Primitive(PrimitiveSpec::box_shape([1.0, f32::NAN, 1.0])),
        );
        assert!(matches!(
            result,
            Err(RegistryError::InvalidDimensions { .. })
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unsupported_kind_returns_none_and_keeps_registry_unchanged() {
        let mut registry = MeshRegistry::new();
        let spec = PrimitiveSpec {
            kind: "dodecahedron".to_string(),
            ..Default::default()
        };
        let result = registry.add(Some("weird"), MeshSource::Primitive(spec)).unwrap();
        assert!(result.is_none());
        assert!(registry.is_empty());
        assert!(!registry.contains("weird"));
    }

    #[test]
    fn test_recognized_kind_with_missing_fields_returns_none() {
        let mut registry = MeshRegistry::new();
        let spec = PrimitiveSpec {
            kind: "cylinder".to_string(),
            radius: Some(1.0),
            // height missing
            ..Default::default()
        };
        let result = registry.add(None, MeshSource::Primitive(spec)).unwrap();
        assert!(result.is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_zero_radius_sphere_is_an_error() {
        let mut registry = MeshRegistry::new();
        let result = registry.add(None, MeshSource::Primitive(PrimitiveSpec::sphere(0.0)));
        assert!(matches!(
            result,
            Err(RegistryError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_get_unknown_tag_returns_none() {
        let registry = MeshRegistry::new();
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut registry = MeshRegistry::new();
        let result = registry.add(
            None,
            MeshSource::File(PathBuf::from("/no/such/mesh/file.obj")),
        );
        assert!(matches!(result, Err(RegistryError::MissingFile { .. })));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_adopted_single_mesh_scene_collapses() {
        use worldsmith_core::geometry::Scene;

        let mut registry = MeshRegistry::new();
        let scene = Scene::from_meshes(vec![primitive::box_mesh(Vec3::ONE)]);
        let tag = registry
            .add(Some("chassis"), MeshSource::Asset(MeshAsset::from(scene)))
            .unwrap()
            .unwrap();

        let asset = registry.get(&tag).unwrap();
        assert!(asset.as_single().is_some());
    }
}
