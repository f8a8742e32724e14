//! # Procedural Geometry Generation
//!
//! Generates the two shapes the placement engine needs without any model file:
//!
//! - **Plane**: the quad behind every surface visual, sized to an anchor's extent
//! - **Cube**: the fallback die used when no OBJ template is configured
//!
//! ## Usage
//!
//! ```rust
//! use ardice::gfx::geometry::{generate_cube, generate_plane};
//!
//! // A 0.1m die
//! let die = generate_cube().scaled(0.1);
//!
//! // A 1.2m x 0.8m surface quad, one segment each way
//! let quad = generate_plane(1.2, 0.8, 1, 1);
//! assert_eq!(quad.vertex_count(), 4);
//! # let _ = die;
//! ```

pub mod primitives;

pub use primitives::*;

use cgmath::{InnerSpace, Vector3};

use crate::gfx::picking::AABB;
use crate::gfx::scene::vertex::Vertex3D;

/// Represents generated geometry data ready for upload by a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Uniformly scale every vertex position
    pub fn scaled(mut self, factor: f32) -> Self {
        for v in &mut self.vertices {
            v[0] *= factor;
            v[1] *= factor;
            v[2] *= factor;
        }
        self
    }

    /// Axis-aligned bounds of the vertex positions
    pub fn aabb(&self) -> AABB {
        AABB::from_vertices(&self.vertices)
    }

    /// Radius of the smallest origin-centered sphere enclosing every vertex
    ///
    /// Measured from the node origin rather than the box center, so a model
    /// offset from its origin still clears the surface it is placed on.
    pub fn bounding_radius(&self) -> f32 {
        self.vertices
            .iter()
            .map(|v| Vector3::from(*v).magnitude())
            .fold(0.0, f32::max)
    }

    /// Interleave positions, normals and UVs into the renderer vertex format
    pub fn to_vertices(&self) -> Vec<Vertex3D> {
        (0..self.vertices.len())
            .map(|i| Vertex3D {
                position: self.vertices[i],
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
                tex_coords: self.tex_coords.get(i).copied().unwrap_or([0.0, 0.0]),
            })
            .collect()
    }

    /// Raw vertex bytes, laid out as [`Vertex3D`], for direct buffer upload
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.to_vertices()).to_vec()
    }

    /// Raw index bytes (u32) for direct buffer upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
