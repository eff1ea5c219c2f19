//! Sphere-vs-box collision for pillar hit tests
//!
//! The player is a bounding sphere and every pillar contributes two solid
//! boxes, so the whole collision story reduces to one primitive: closest
//! point on an axis-aligned box versus the sphere radius.

use glam::Vec3;

/// An axis-aligned box, `min` componentwise below `max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Closest point on or inside the box to `point`.
    #[inline]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }
}

/// Check whether a sphere overlaps an axis-aligned box.
///
/// Clamps the sphere center to the box extents and compares the squared
/// distance against the squared radius. Touching counts as a hit.
#[inline]
pub fn sphere_intersects_aabb(center: Vec3, radius: f32, aabb: &Aabb) -> bool {
    let closest = aabb.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::ZERO, Vec3::new(2.0, 2.0, 2.0))
    }

    #[test]
    fn test_sphere_center_inside_box() {
        let hit = sphere_intersects_aabb(Vec3::new(1.0, 1.0, 1.0), 0.1, &unit_box());
        assert!(hit);
    }

    #[test]
    fn test_sphere_touching_face_counts_as_hit() {
        // Closest point is (2, 1, 1), exactly one radius away
        let hit = sphere_intersects_aabb(Vec3::new(3.0, 1.0, 1.0), 1.0, &unit_box());
        assert!(hit);
    }

    #[test]
    fn test_sphere_clear_of_box() {
        let hit = sphere_intersects_aabb(Vec3::new(3.2, 1.0, 1.0), 1.0, &unit_box());
        assert!(!hit);
    }

    #[test]
    fn test_sphere_near_corner_misses() {
        // Within one radius of the box on every axis separately, but the
        // diagonal distance to the corner (2,2,2) is sqrt(3) > 1
        let hit = sphere_intersects_aabb(Vec3::new(3.0, 3.0, 3.0), 1.0, &unit_box());
        assert!(!hit);
    }

    #[test]
    fn test_sphere_overlapping_edge() {
        // Closest point is the edge at (2, 2, 1), distance sqrt(0.5) < 1
        let hit = sphere_intersects_aabb(Vec3::new(2.5, 2.5, 1.0), 1.0, &unit_box());
        assert!(hit);
    }

    #[test]
    fn test_closest_point_clamps_per_axis() {
        let aabb = unit_box();
        assert_eq!(
            aabb.closest_point(Vec3::new(-1.0, 5.0, 1.0)),
            Vec3::new(0.0, 2.0, 1.0)
        );
    }
}
