//! # Ray Casting
//!
//! Geometry used by hit-testing: converting a screen point into a world-space
//! ray, and intersecting rays with planes and bounding boxes.
//!
//! ## How it works
//!
//! 1. **Screen to Ray**: unproject the point at the near and far clip planes
//! 2. **Ray-Plane Intersection**: distance along the ray to a surface plane
//! 3. **Bounds**: keep or reject the hit depending on the surface extent
//!
//! ## Usage
//!
//! ```rust
//! use ardice::gfx::camera::DeviceCamera;
//! use ardice::gfx::picking::{intersect_plane, screen_to_ray};
//! use cgmath::Vector3;
//!
//! let camera = DeviceCamera::look_at(
//!     Vector3::new(0.0, 1.0, 1.0),
//!     Vector3::new(0.0, 0.0, 0.0),
//!     (800.0, 600.0),
//! );
//! let ray = screen_to_ray((400.0, 300.0), &camera);
//! let t = intersect_plane(&ray, Vector3::new(0.0, 0.0, 0.0), Vector3::unit_y());
//! assert!(t.is_some());
//! ```

use cgmath::{InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4, Zero};

use crate::gfx::camera::DeviceCamera;

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl AABB {
    /// Create a new AABB
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create AABB from a set of vertices; empty input yields a point box at the origin
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        let Some(first) = vertices.first() else {
            return Self::new(Vector3::zero(), Vector3::zero());
        };

        let mut min = Vector3::from(*first);
        let mut max = min;
        for vertex in vertices.iter().skip(1) {
            min.x = min.x.min(vertex[0]);
            min.y = min.y.min(vertex[1]);
            min.z = min.z.min(vertex[2]);
            max.x = max.x.max(vertex[0]);
            max.y = max.y.max(vertex[1]);
            max.z = max.z.max(vertex[2]);
        }

        Self::new(min, max)
    }
}

/// Distance along `ray` to the plane through `point` with normal `normal`
///
/// Only hits in front of the ray origin count. Rays parallel to the plane miss.
pub fn intersect_plane(ray: &Ray, point: Vector3<f32>, normal: Vector3<f32>) -> Option<f32> {
    let denom = normal.dot(ray.direction);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (point - ray.origin).dot(normal) / denom;
    (t >= 0.0).then_some(t)
}

/// Convert screen coordinates (pixels, origin top-left) to a world-space ray
pub fn screen_to_ray(screen_pos: (f32, f32), camera: &DeviceCamera) -> Ray {
    let (mouse_x, mouse_y) = screen_pos;
    let (screen_width, screen_height) = camera.viewport;

    // Normalized device coordinates (-1 to 1), Y flipped
    let ndc_x = (2.0 * mouse_x) / screen_width.max(1.0) - 1.0;
    let ndc_y = 1.0 - (2.0 * mouse_y) / screen_height.max(1.0);

    let inv_view_proj = camera
        .build_view_projection_matrix()
        .invert()
        .unwrap_or(Matrix4::from_scale(1.0));

    let near = unproject(&inv_view_proj, Vector4::new(ndc_x, ndc_y, -1.0, 1.0));
    let far = unproject(&inv_view_proj, Vector4::new(ndc_x, ndc_y, 1.0, 1.0));

    Ray::new(near, far - near)
}

fn unproject(inv_view_proj: &Matrix4<f32>, ndc: Vector4<f32>) -> Vector3<f32> {
    let world = inv_view_proj * ndc;
    world.truncate() / world.w
}
