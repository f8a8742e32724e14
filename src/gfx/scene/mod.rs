//! # Scene Management Module
//!
//! Scene-graph side of the engine: node descriptions, the [`RenderRuntime`]
//! seam the engine drives, and [`Scene`], an in-memory runtime with an
//! animation timeline.
//!
//! ## Key Components
//!
//! - [`RenderRuntime`] - node create/attach/remove, animations, lighting
//! - [`Scene`] - reference runtime used headless and in tests
//! - [`SceneNode`] - transform plus optional geometry and material
//! - [`RotateBy`] - relative rotation animation
//! - [`Vertex3D`] - GPU-compatible vertex layout
//!
//! ## Usage
//!
//! ```
//! use ardice::gfx::scene::{RenderRuntime, RotateBy, Scene, SceneNode};
//! use cgmath::Rad;
//!
//! let mut scene = Scene::new();
//! let root = scene.root();
//! let die = scene.spawn(root, SceneNode::new("die"));
//! scene.run_action(die, RotateBy::new(Rad(1.0), Rad(0.0), Rad(0.0), 0.5));
//! scene.advance(0.5);
//! assert_eq!(scene.pending_actions(), 0);
//! ```

pub mod node;
pub mod runtime;
pub mod scene;
pub mod vertex;

// Re-export main types
pub use node::{NodeId, RotateBy, SceneNode};
pub use runtime::RenderRuntime;
pub use scene::Scene;
pub use vertex::Vertex3D;
