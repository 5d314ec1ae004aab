use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Infinite plane: `normal · p + constant = 0`
///
/// The normal is unit length and points into the playfield, so points inside
/// the field have a positive signed distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vec3,
    pub constant: f32,
}

impl Plane {
    pub fn new(normal: Vec3, constant: f32) -> Self {
        Self { normal, constant }
    }

    /// Signed distance from the plane to `point`, positive on the normal side
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.constant
    }

    /// Rescale so the normal is unit length. Returns `None` for a zero normal.
    pub fn normalized(&self) -> Option<Self> {
        let length = self.normal.length();
        if length <= f32::EPSILON || !length.is_finite() {
            return None;
        }
        Some(Self {
            normal: self.normal / length,
            constant: self.constant / length,
        })
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Closest point inside the box to `point`
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Range of signed distances the box covers relative to `plane`
    pub fn plane_extent(&self, plane: &Plane) -> (f32, f32) {
        let n = plane.normal;
        // Pick, per axis, the corner coordinate that minimises/maximises n·p
        let near = Vec3::new(
            if n.x > 0.0 { self.min.x } else { self.max.x },
            if n.y > 0.0 { self.min.y } else { self.max.y },
            if n.z > 0.0 { self.min.z } else { self.max.z },
        );
        let far = Vec3::new(
            if n.x > 0.0 { self.max.x } else { self.min.x },
            if n.y > 0.0 { self.max.y } else { self.min.y },
            if n.z > 0.0 { self.max.z } else { self.min.z },
        );
        (plane.distance_to_point(near), plane.distance_to_point(far))
    }
}

/// Bounding sphere
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Signed distance, sign following the plane's stored normal
pub fn plane_distance(plane: &Plane, point: Vec3) -> f32 {
    plane.distance_to_point(point)
}

pub fn sphere_intersects_plane(sphere: &Sphere, plane: &Plane) -> bool {
    plane_distance(plane, sphere.center).abs() <= sphere.radius
}

/// Standard sphere/AABB test against the box point closest to the centre
pub fn sphere_intersects_box(sphere: &Sphere, aabb: &Aabb) -> bool {
    let closest = aabb.closest_point(sphere.center);
    (sphere.center - closest).length_squared() <= sphere.radius * sphere.radius
}

/// True when the plane passes through the box
pub fn box_intersects_plane(aabb: &Aabb, plane: &Plane) -> bool {
    let (near, far) = aabb.plane_extent(plane);
    near <= 0.0 && far >= 0.0
}

/// True when the box touches the plane or has already passed it entirely
pub fn box_reaches_plane(aabb: &Aabb, plane: &Plane) -> bool {
    let (_, far) = aabb.plane_extent(plane);
    box_intersects_plane(aabb, plane) || far < 0.0
}

/// Normalize, substituting `fallback` for a zero-length or non-finite input
pub fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    v.try_normalize().unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_distance_sign_follows_normal() {
        let top = Plane::new(Vec3::new(0.0, -1.0, 0.0), 1.5);
        assert!((plane_distance(&top, Vec3::ZERO) - 1.5).abs() < 1e-6);
        assert!(plane_distance(&top, Vec3::new(0.0, 2.0, 0.0)) < 0.0);
    }

    #[test]
    fn test_sphere_intersects_plane() {
        let right = Plane::new(Vec3::NEG_X, 3.0);
        let touching = Sphere::new(Vec3::new(2.97, 0.0, 0.0), 0.04);
        let clear = Sphere::new(Vec3::new(2.5, 0.0, 0.0), 0.04);
        let beyond = Sphere::new(Vec3::new(3.02, 0.0, 0.0), 0.04);
        assert!(sphere_intersects_plane(&touching, &right));
        assert!(!sphere_intersects_plane(&clear, &right));
        assert!(
            sphere_intersects_plane(&beyond, &right),
            "Far side within radius still intersects"
        );
    }

    #[test]
    fn test_sphere_intersects_box() {
        let aabb = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::new(0.04, 0.35, 0.05));
        assert!(sphere_intersects_box(
            &Sphere::new(Vec3::new(0.07, 0.0, 0.0), 0.04),
            &aabb
        ));
        assert!(!sphere_intersects_box(
            &Sphere::new(Vec3::new(0.09, 0.0, 0.0), 0.04),
            &aabb
        ));
        // Corner: closest point is the box corner, not the face
        assert!(!sphere_intersects_box(
            &Sphere::new(Vec3::new(0.07, 0.38, 0.0), 0.04),
            &aabb
        ));
    }

    #[test]
    fn test_sphere_box_translation_symmetry() {
        let aabb = Aabb::from_center_half_extents(Vec3::new(-2.5, 0.2, 0.0), Vec3::splat(0.1));
        let offsets = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-3.25, 7.5, 0.5),
            Vec3::new(0.0, -0.125, 10.0),
        ];
        let centers = [
            Vec3::new(-2.35, 0.2, 0.0),
            Vec3::new(-2.45, 0.35, 0.0),
            Vec3::new(-2.0, 0.0, 0.0),
        ];
        for center in centers {
            let sphere = Sphere::new(center, 0.06);
            let base = sphere_intersects_box(&sphere, &aabb);
            for offset in offsets {
                let moved = Sphere::new(center + offset, 0.06);
                assert_eq!(
                    sphere_intersects_box(&moved, &aabb.translated(offset)),
                    base,
                    "Translation by {offset:?} changed the result for {center:?}"
                );
            }
        }
    }

    #[test]
    fn test_box_plane_intersection() {
        let top = Plane::new(Vec3::new(0.0, -1.0, 0.0), 1.5);
        let half = Vec3::new(0.04, 0.35, 0.05);
        let inside = Aabb::from_center_half_extents(Vec3::new(0.0, 1.0, 0.0), half);
        let crossing = Aabb::from_center_half_extents(Vec3::new(0.0, 1.3, 0.0), half);
        let past = Aabb::from_center_half_extents(Vec3::new(0.0, 2.0, 0.0), half);
        assert!(!box_intersects_plane(&inside, &top));
        assert!(box_intersects_plane(&crossing, &top));
        assert!(!box_intersects_plane(&past, &top));
        assert!(!box_reaches_plane(&inside, &top));
        assert!(box_reaches_plane(&crossing, &top));
        assert!(box_reaches_plane(&past, &top));
    }

    #[test]
    fn test_normalize_or_guards_zero_vector() {
        let fallback = Vec3::X;
        assert_eq!(normalize_or(Vec3::ZERO, fallback), fallback);
        assert_eq!(normalize_or(Vec3::splat(f32::NAN), fallback), fallback);
        let n = normalize_or(Vec3::new(3.0, 4.0, 0.0), fallback);
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_plane_normalized() {
        let plane = Plane::new(Vec3::new(0.0, -2.0, 0.0), 3.0).normalized();
        assert_eq!(plane, Some(Plane::new(Vec3::new(0.0, -1.0, 0.0), 1.5)));
        assert_eq!(Plane::new(Vec3::ZERO, 1.0).normalized(), None);
    }
}
