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

//! Provides the foundational trait and handle type for worldsmith's assets.
//!
//! This module defines the "common language" for asset-related operations in
//! the tool. It knows nothing about how assets are built or stored; higher
//! layers (the collection stores and the mesh registry) are built on top of
//! these primitives.

mod handle;

pub use handle::*;

/// A marker trait for types that can be managed by the asset layer.
///
/// The supertraits enforce the guarantees the rest of the tool relies on:
/// - `Send` + `Sync`: the asset can be shared with worker threads, e.g. when
///   a host application generates world chunks in parallel.
/// - `'static`: the asset owns its data and can be stored for the lifetime
///   of the process.
pub trait Asset: Send + Sync + 'static {}
