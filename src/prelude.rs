//! # Ardice Prelude
//!
//! Commonly used types and traits in one import:
//!
//! ```rust
//! use ardice::prelude::*;
//!
//! let mut engine = DiceEngine::new(
//!     EngineConfig::default().with_seed(1),
//!     Scene::new(),
//!     SimulatedTracking::new(DeviceCamera::look_at(
//!         Vector3::new(0.0, 1.0, 0.0),
//!         Vector3::new(0.0, 0.0, -1.0),
//!         (800.0, 600.0),
//!     )),
//! )
//! .unwrap();
//! engine.start_session();
//! engine.dispatch(Interaction::Shake);
//! assert!(engine.registry().is_empty());
//! ```

// Engine and interactions
pub use crate::engine::{
    DiceEngine, Interaction, ObjectId, ObjectRegistry, PlacedObject, RollCommand,
};
pub use crate::input::InputMapper;

// Configuration and errors
pub use crate::config::{EngineConfig, HeightPolicy, RollSettings, TemplateSource};
pub use crate::error::{DiceError, Result};

// Scene and collaborator seams
pub use crate::gfx::camera::DeviceCamera;
pub use crate::gfx::scene::{NodeId, RenderRuntime, RotateBy, Scene, SceneNode};
pub use crate::gfx::template::ObjectTemplate;
pub use crate::tracking::{
    Anchor, AnchorEvent, AnchorId, HitTestKind, HitTestResult, PlaneAnchor, ScreenPoint,
    SessionConfig, SimulatedTracking, TrackingSession,
};

// Common external dependencies
pub use cgmath::{Deg, Matrix4, Rad, Vector3, Zero};
