//! Device camera used to turn screen points into world rays
//!
//! In an AR session the camera pose comes from tracking; here it is a plain
//! look-at camera with a perspective projection over the device viewport.

use cgmath::{perspective, EuclideanSpace, Matrix4, Point3, Rad, Vector3};

#[derive(Debug, Clone, Copy)]
pub struct DeviceCamera {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
    /// Viewport size in pixels (width, height)
    pub viewport: (f32, f32),
}

impl DeviceCamera {
    /// Camera at `eye` looking at `target`, Y up, 60° vertical field of view
    pub fn look_at(eye: Vector3<f32>, target: Vector3<f32>, viewport: (f32, f32)) -> Self {
        Self {
            eye,
            target,
            up: Vector3::unit_y(),
            fovy: Rad(std::f32::consts::PI / 3.0),
            znear: 0.01,
            zfar: 100.0,
            viewport,
        }
    }

    pub fn aspect(&self) -> f32 {
        if self.viewport.1 > 0.0 {
            self.viewport.0 / self.viewport.1
        } else {
            1.0
        }
    }

    pub fn build_view_projection_matrix(&self) -> Matrix4<f32> {
        let view = Matrix4::look_at_rh(
            Point3::from_vec(self.eye),
            Point3::from_vec(self.target),
            self.up,
        );
        let proj = perspective(self.fovy, self.aspect(), self.znear, self.zfar);
        proj * view
    }
}
