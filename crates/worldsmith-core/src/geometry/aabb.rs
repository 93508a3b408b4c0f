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

use glam::Vec3;

/// An axis-aligned bounding box defined by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// The corner with the smallest coordinates on every axis.
    pub min: Vec3,
    /// The corner with the largest coordinates on every axis.
    pub max: Vec3,
}

impl Aabb {
    /// An invalid `Aabb` where `min` is positive infinity and `max` is
    /// negative infinity.
    ///
    /// It acts as the identity element for [`union_point`](Self::union_point):
    /// growing `INVALID` by any point yields a degenerate box at that point.
    pub const INVALID: Self = Self {
        min: Vec3::INFINITY,
        max: Vec3::NEG_INFINITY,
    };

    /// Creates a new `Aabb` from two corner points.
    ///
    /// The corners are sorted per component, so the arguments do not have to
    /// be the actual minimum and maximum.
    pub fn from_min_max(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates an `Aabb` that tightly encloses a set of points.
    ///
    /// Returns `None` if the slice is empty.
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut aabb = Self::INVALID;
        for point in points {
            aabb = aabb.union_point(*point);
        }
        Some(aabb)
    }

    /// Returns the smallest box containing `self` and `point`.
    #[must_use]
    pub fn union_point(self, point: Vec3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Returns the smallest box containing both `self` and `other`.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Calculates the center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Calculates the full extent of the box along each axis.
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns `true` if `min <= max` on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_min_max_sorts_corners() {
        let aabb = Aabb::from_min_max(Vec3::new(1.0, -2.0, 3.0), Vec3::new(-1.0, 2.0, 0.0));
        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_from_points_encloses_all_points() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, -1.0, 4.0),
            Vec3::new(-3.0, 5.0, 1.0),
        ];
        let aabb = Aabb::from_points(&points).unwrap();
        assert_eq!(aabb.min, Vec3::new(-3.0, -1.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(2.0, 5.0, 4.0));
        assert_relative_eq!(aabb.center().x, -0.5);
    }

    #[test]
    fn test_from_points_empty_is_none() {
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn test_invalid_union_is_identity() {
        let point = Vec3::new(1.0, 2.0, 3.0);
        let aabb = Aabb::INVALID.union_point(point);
        assert!(aabb.is_valid());
        assert_eq!(aabb.min, point);
        assert_eq!(aabb.max, point);
        assert!(!Aabb::INVALID.is_valid());
    }
}
