//! # Primitive Shape Generation
//!
//! All shapes are generated with outward normals and 0..1 texture coordinates.

use super::GeometryData;

/// Outward normal, then the two in-face axes (u, v) for each cube face.
/// `u x v == normal` so every face winds counter-clockwise seen from outside.
const CUBE_FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
];

/// Generate a unit cube centered at the origin
///
/// Vertices span -0.5 to 0.5 on all axes. Each face has its own four
/// vertices so normals stay flat, which is what a die needs.
pub fn generate_cube() -> GeometryData {
    let mut data = GeometryData::new();

    for (normal, u, v) in CUBE_FACES {
        let base = data.vertices.len() as u32;

        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            data.vertices.push([
                normal[0] * 0.5 + u[0] * su + v[0] * sv,
                normal[1] * 0.5 + u[1] * su + v[1] * sv,
                normal[2] * 0.5 + u[2] * su + v[2] * sv,
            ]);
            data.normals.push(normal);
            data.tex_coords.push([su + 0.5, sv + 0.5]);
        }

        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a vertical plane in the XY plane, facing +Z
///
/// This is the default orientation of a freshly created quad; callers that
/// want it lying flat rotate it -90° about X, which turns +Z into +Y and
/// maps `height` onto depth along Z.
///
/// # Arguments
/// * `width` - Width of the plane (X direction)
/// * `height` - Height of the plane (Y direction)
/// * `width_segments` - Number of subdivisions along width
/// * `height_segments` - Number of subdivisions along height
///
/// Zero sizes are accepted and produce a degenerate quad.
pub fn generate_plane(
    width: f32,
    height: f32,
    width_segments: u32,
    height_segments: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let w_segs = width_segments.max(1);
    let h_segs = height_segments.max(1);

    for row in 0..=h_segs {
        let v = row as f32 / h_segs as f32;
        for col in 0..=w_segs {
            let u = col as f32 / w_segs as f32;
            data.vertices.push([(u - 0.5) * width, (v - 0.5) * height, 0.0]);
            data.normals.push([0.0, 0.0, 1.0]);
            // image rows run top-down
            data.tex_coords.push([u, 1.0 - v]);
        }
    }

    let stride = w_segs + 1;
    for row in 0..h_segs {
        for col in 0..w_segs {
            let i = row * stride + col;
            let above = i + stride;
            data.indices
                .extend_from_slice(&[i, i + 1, above + 1, above + 1, above, i]);
        }
    }

    data
}
