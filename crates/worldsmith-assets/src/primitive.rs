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

//! Procedurally generated primitive solids.
//!
//! All generators emit indexed triangle meshes with per-vertex normals,
//! centered at the origin. Curved shapes revolve around the Z axis, matching
//! the convention of the simulation description formats the tool consumes.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f32::consts::{FRAC_PI_2, TAU};
use worldsmith_core::geometry::Mesh;

/// Segments around the axis of revolution for curved primitives.
const SEGMENTS: u32 = 32;
/// Latitude subdivisions per hemispherical capsule cap.
const CAP_RINGS: u32 = 8;
/// Subdivision passes applied to the icosahedron base of a sphere.
const SPHERE_SUBDIVISIONS: u32 = 2;

/// A primitive request as it appears in world description data.
///
/// `kind` is deliberately an open string rather than an enum: descriptions
/// written for newer tool versions may name shapes this build does not know,
/// and the registry answers those with a no-match result instead of failing
/// the whole world (see [`MeshRegistry::add`](crate::MeshRegistry::add)).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimitiveSpec {
    /// Shape name: `box`, `cylinder`, `capsule`, or `sphere`.
    pub kind: String,
    /// Full box extents; `box` requires exactly three positive values.
    pub size: Option<Vec<f32>>,
    /// Radius, required by `cylinder`, `capsule`, and `sphere`.
    pub radius: Option<f32>,
    /// Height, required by `cylinder` and `capsule`.
    pub height: Option<f32>,
}

impl PrimitiveSpec {
    /// A box request with the given full extents.
    pub fn box_shape(size: [f32; 3]) -> Self {
        Self {
            kind: "box".to_string(),
            size: Some(size.to_vec()),
            ..Default::default()
        }
    }

    /// A cylinder request.
    pub fn cylinder(radius: f32, height: f32) -> Self {
        Self {
            kind: "cylinder".to_string(),
            radius: Some(radius),
            height: Some(height),
            ..Default::default()
        }
    }

    /// A capsule request.
    pub fn capsule(radius: f32, height: f32) -> Self {
        Self {
            kind: "capsule".to_string(),
            radius: Some(radius),
            height: Some(height),
            ..Default::default()
        }
    }

    /// A sphere request.
    pub fn sphere(radius: f32) -> Self {
        Self {
            kind: "sphere".to_string(),
            radius: Some(radius),
            ..Default::default()
        }
    }
}

/// Generates an axis-aligned box with the given full extents.
///
/// Each face owns its four vertices so normals stay flat.
pub fn box_mesh(extents: Vec3) -> Mesh {
    // (outward normal, in-plane u axis, in-plane v axis), with u x v = normal
    // so the corner loop below winds counter-clockwise seen from outside.
    const FACES: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    const CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

    let half = extents * 0.5;
    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in FACES {
        let base = positions.len() as u32;
        for (su, sv) in CORNERS {
            positions.push((normal + u * su + v * sv) * half);
            normals.push(normal);
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(positions, indices).with_normals(normals)
}

/// Generates a capped cylinder of the given radius and height along Z.
pub fn cylinder(radius: f32, height: f32) -> Mesh {
    let half = height * 0.5;
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    // Side wall with radial normals.
    for i in 0..SEGMENTS {
        let theta = TAU * i as f32 / SEGMENTS as f32;
        let dir = Vec3::new(theta.cos(), theta.sin(), 0.0);
        positions.push(dir * radius - Vec3::Z * half);
        positions.push(dir * radius + Vec3::Z * half);
        normals.push(dir);
        normals.push(dir);
    }
    for i in 0..SEGMENTS {
        let j = (i + 1) % SEGMENTS;
        let (b0, t0, b1, t1) = (2 * i, 2 * i + 1, 2 * j, 2 * j + 1);
        indices.extend_from_slice(&[b0, b1, t1, b0, t1, t0]);
    }

    // Flat caps with their own vertices.
    for (z, normal) in [(half, Vec3::Z), (-half, Vec3::NEG_Z)] {
        let center = positions.len() as u32;
        positions.push(Vec3::Z * z);
        normals.push(normal);
        let ring = positions.len() as u32;
        for i in 0..SEGMENTS {
            let theta = TAU * i as f32 / SEGMENTS as f32;
            positions.push(Vec3::new(theta.cos() * radius, theta.sin() * radius, z));
            normals.push(normal);
        }
        for i in 0..SEGMENTS {
            let j = (i + 1) % SEGMENTS;
            if normal.z > 0.0 {
                indices.extend_from_slice(&[center, ring + i, ring + j]);
            } else {
                indices.extend_from_slice(&[center, ring + j, ring + i]);
            }
        }
    }

    Mesh::new(positions, indices).with_normals(normals)
}

/// Generates a capsule along Z: a cylinder of the given height closed by two
/// hemispherical caps of the given radius. Total extent is `height + 2 * radius`.
pub fn capsule(radius: f32, height: f32) -> Mesh {
    let half = height * 0.5;
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    // Full rings from just above the bottom pole up to just below the top
    // pole. The equator latitude appears once per hemisphere offset; the
    // band between those two rings is the straight cylinder wall.
    let mut ring_params = Vec::new();
    for r in 1..=CAP_RINGS {
        let lat = -FRAC_PI_2 + FRAC_PI_2 * r as f32 / CAP_RINGS as f32;
        ring_params.push((lat, -half));
    }
    for r in 0..CAP_RINGS {
        let lat = FRAC_PI_2 * r as f32 / CAP_RINGS as f32;
        ring_params.push((lat, half));
    }

    let bottom_pole = positions.len() as u32;
    positions.push(Vec3::NEG_Z * (half + radius));
    normals.push(Vec3::NEG_Z);

    let mut ring_starts = Vec::with_capacity(ring_params.len());
    for (lat, offset) in &ring_params {
        ring_starts.push(positions.len() as u32);
        let (sin_lat, cos_lat) = lat.sin_cos();
        for i in 0..SEGMENTS {
            let theta = TAU * i as f32 / SEGMENTS as f32;
            let normal = Vec3::new(theta.cos() * cos_lat, theta.sin() * cos_lat, sin_lat);
            positions.push(normal * radius + Vec3::Z * *offset);
            normals.push(normal);
        }
    }

    let top_pole = positions.len() as u32;
    positions.push(Vec3::Z * (half + radius));
    normals.push(Vec3::Z);

    // Bottom fan, winding outward (towards -Z).
    let first = ring_starts[0];
    for i in 0..SEGMENTS {
        let j = (i + 1) % SEGMENTS;
        indices.extend_from_slice(&[bottom_pole, first + j, first + i]);
    }
    // Quad bands between consecutive rings, including the cylinder wall.
    for w in 0..ring_starts.len() - 1 {
        let a = ring_starts[w];
        let b = ring_starts[w + 1];
        for i in 0..SEGMENTS {
            let j = (i + 1) % SEGMENTS;
            indices.extend_from_slice(&[a + i, a + j, b + j, a + i, b + j, b + i]);
        }
    }
    // Top fan.
    let last = *ring_starts.last().expect("capsule always has cap rings");
    for i in 0..SEGMENTS {
        let j = (i + 1) % SEGMENTS;
        indices.extend_from_slice(&[top_pole, last + i, last + j]);
    }

    Mesh::new(positions, indices).with_normals(normals)
}

/// Generates a sphere by subdividing an icosahedron and projecting the
/// vertices onto the sphere surface.
pub fn icosphere(radius: f32) -> Mesh {
    let t = (1.0 + 5.0f32.sqrt()) / 2.0;
    let mut positions: Vec<Vec3> = [
        (-1.0, t, 0.0),
        (1.0, t, 0.0),
        (-1.0, -t, 0.0),
        (1.0, -t, 0.0),
        (0.0, -1.0, t),
        (0.0, 1.0, t),
        (0.0, -1.0, -t),
        (0.0, 1.0, -t),
        (t, 0.0, -1.0),
        (t, 0.0, 1.0),
        (-t, 0.0, -1.0),
        (-t, 0.0, 1.0),
    ]
    .iter()
    .map(|&(x, y, z)| Vec3::new(x, y, z).normalize())
    .collect();

    let mut faces: Vec<[u32; 3]> = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    for _ in 0..SPHERE_SUBDIVISIONS {
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        let mut subdivided = Vec::with_capacity(faces.len() * 4);
        for [a, b, c] in faces.iter().copied() {
            let ab = midpoint(&mut positions, &mut midpoints, a, b);
            let bc = midpoint(&mut positions, &mut midpoints, b, c);
            let ca = midpoint(&mut positions, &mut midpoints, c, a);
            subdivided.extend_from_slice(&[[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]);
        }
        faces = subdivided;
    }

    let normals = positions.clone();
    let scaled = positions.iter().map(|p| *p * radius).collect();
    let indices = faces.into_iter().flatten().collect();
    Mesh::new(scaled, indices).with_normals(normals)
}

/// Returns the index of the unit-sphere midpoint of edge `(a, b)`, creating
/// the vertex on first use. The cache keeps shared edges welded.
fn midpoint(
    positions: &mut Vec<Vec3>,
    cache: &mut HashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    if let Some(&index) = cache.get(&key) {
        return index;
    }
    let mid = ((positions[a as usize] + positions[b as usize]) * 0.5).normalize();
    let index = positions.len() as u32;
    positions.push(mid);
    cache.insert(key, index);
    index
}
