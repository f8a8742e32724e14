//! Scene nodes and the animation actions that run on them

use cgmath::{Euler, Matrix4, Rad, Vector3, Zero};

use crate::gfx::{geometry::GeometryData, material::Material};

/// Handle to a node owned by a rendering runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Description of a renderable node: local transform plus optional content
///
/// Orientation is kept as accumulated Euler angles in radians so relative
/// rotations simply add up.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub position: Vector3<f32>,
    pub euler_angles: Vector3<f32>,
    pub scale: f32,
    /// Full local transform used instead of position/euler/scale when set.
    /// Anchor nodes carry the tracking pose this way.
    pub transform_override: Option<Matrix4<f32>>,
    pub geometry: Option<GeometryData>,
    pub material: Option<Material>,
}

impl SceneNode {
    /// Empty node at the parent's origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vector3::zero(),
            euler_angles: Vector3::zero(),
            scale: 1.0,
            transform_override: None,
            geometry: None,
            material: None,
        }
    }

    pub fn with_position(mut self, position: Vector3<f32>) -> Self {
        self.position = position;
        self
    }

    pub fn with_euler_angles(mut self, euler_angles: Vector3<f32>) -> Self {
        self.euler_angles = euler_angles;
        self
    }

    pub fn with_transform(mut self, transform: Matrix4<f32>) -> Self {
        self.transform_override = Some(transform);
        self
    }

    pub fn with_geometry(mut self, geometry: GeometryData) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Local transform relative to the parent node (T * R * S)
    pub fn local_transform(&self) -> Matrix4<f32> {
        if let Some(transform) = self.transform_override {
            return transform;
        }
        let rotation = Euler::new(
            Rad(self.euler_angles.x),
            Rad(self.euler_angles.y),
            Rad(self.euler_angles.z),
        );
        Matrix4::from_translation(self.position)
            * Matrix4::from(rotation)
            * Matrix4::from_scale(self.scale)
    }
}

/// Relative rotation animation, in radians per axis, over `duration` seconds
///
/// Runs asynchronously on the runtime's timeline once scheduled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotateBy {
    pub angles: Vector3<f32>,
    pub duration: f32,
}

impl RotateBy {
    pub fn new(x: Rad<f32>, y: Rad<f32>, z: Rad<f32>, duration: f32) -> Self {
        Self {
            angles: Vector3::new(x.0, y.0, z.0),
            duration,
        }
    }

    /// Fraction of the animation completed after `elapsed` seconds
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration).clamp(0.0, 1.0)
        }
    }
}
