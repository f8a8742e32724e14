//! # Graphics Module
//!
//! Everything the placement engine knows about 3D content, without owning a
//! renderer:
//!
//! - **Camera** ([`camera`]) - device camera for screen to world rays
//! - **Geometry** ([`geometry`]) - procedural quads and cubes
//! - **Materials** ([`material`]) - surface descriptions, grid texture
//! - **Picking** ([`picking`]) - rays, planes, bounding boxes
//! - **Scene** ([`scene`]) - node descriptions, the [`RenderRuntime`] seam and an in-memory scene
//! - **Templates** ([`template`]) - the placeable die, from OBJ or procedural
//!
//! [`RenderRuntime`]: scene::RenderRuntime

pub mod camera;
pub mod geometry;
pub mod material;
pub mod picking;
pub mod scene;
pub mod template;

// Re-export commonly used types
pub use scene::{RenderRuntime, Scene};
pub use template::ObjectTemplate;
