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

//! Small demo host: builds a mesh registry, fills it with a few primitives
//! and any mesh files passed on the command line, and prints what it holds.

use anyhow::Result;
use std::path::PathBuf;
use worldsmith_assets::primitive::PrimitiveSpec;
use worldsmith_assets::registry::{MeshRegistry, MeshSource};

fn main() -> Result<()> {
    env_logger::init();

    let mut registry = MeshRegistry::new();

    registry.add(
        Some("ground"),
        MeshSource::Primitive(PrimitiveSpec::box_shape([10.0, 10.0, 0.1])),
    )?;
    registry.add(
        Some("pillar"),
        MeshSource::Primitive(PrimitiveSpec::cylinder(0.2, 2.0)),
    )?;
    registry.add(
        None,
        MeshSource::Primitive(PrimitiveSpec::sphere(0.5)),
    )?;

    for arg in std::env::args().skip(1) {
        match registry.add(None, MeshSource::File(PathBuf::from(&arg))) {
            Ok(Some(tag)) => log::info!("Registered {arg} as <{tag}>"),
            Ok(None) => log::warn!("No loader matched {arg}"),
            Err(err) => log::error!("Failed to register {arg}: {err}"),
        }
    }

    let mut tags: Vec<&str> = registry.tags().collect();
    tags.sort_unstable();
    for tag in tags {
        if let Some(asset) = registry.get(tag) {
            let bounds = asset.bounding_box();
            println!(
                "{tag}: {} sub-mesh(es), extents {:?}",
                asset.sub_mesh_count(),
                bounds.extents()
            );
        }
    }

    Ok(())
}
