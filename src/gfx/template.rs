//! Placeable object templates
//!
//! A template is resolved once, when the engine is built, and then cloned into
//! a fresh scene node for every placement. Resolving is the only place an asset
//! can be missing, so a bad path or node name fails engine construction instead
//! of failing each tap.

use std::path::Path;

use log::{debug, info};

use crate::{
    config::TemplateSource,
    error::{DiceError, Result},
    gfx::{
        geometry::{generate_cube, GeometryData},
        material::Material,
        scene::SceneNode,
    },
};

/// Geometry and look of the object placed on every successful tap
#[derive(Debug, Clone)]
pub struct ObjectTemplate {
    pub name: String,
    pub geometry: GeometryData,
    pub material: Material,
    /// Radius of the sphere enclosing the geometry; used as the flush offset
    pub bounding_radius: f32,
}

impl ObjectTemplate {
    /// Resolves a template from its configured source
    pub fn resolve(source: &TemplateSource) -> Result<Self> {
        match source {
            TemplateSource::Obj { path, node_name } => Self::load_obj(path, node_name),
            TemplateSource::Procedural { name, size } => Ok(Self::cube(name, *size)),
        }
    }

    /// Cube die of edge length `size`, centered on its node origin
    pub fn cube(name: &str, size: f32) -> Self {
        let geometry = generate_cube().scaled(size);
        let bounding_radius = geometry.bounding_radius();
        Self {
            name: name.to_string(),
            geometry,
            material: Material::new("die", [0.9, 0.1, 0.1, 1.0], 0.0, 0.3),
            bounding_radius,
        }
    }

    /// Loads an OBJ file and picks the model named `node_name`
    ///
    /// Material comes from the model's MTL entry when there is one.
    pub fn load_obj(path: &Path, node_name: &str) -> Result<Self> {
        let (models, materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )?;

        let materials = materials.unwrap_or_else(|err| {
            debug!("no usable MTL for {}: {}", path.display(), err);
            Vec::new()
        });

        let model = models
            .iter()
            .find(|m| m.name == node_name)
            .ok_or_else(|| DiceError::TemplateNotFound {
                path: path.to_path_buf(),
                node_name: node_name.to_string(),
            })?;

        let geometry = geometry_from_mesh(&model.mesh);
        if geometry.is_empty() {
            return Err(DiceError::EmptyTemplate(node_name.to_string()));
        }

        let material = model
            .mesh
            .material_id
            .and_then(|id| materials.get(id))
            .map(Material::from_mtl)
            .unwrap_or_default();

        let bounding_radius = geometry.bounding_radius();
        let bounds = geometry.aabb();
        let size = bounds.max - bounds.min;
        info!(
            "loaded template '{}' from {} ({} triangles, {:.3} x {:.3} x {:.3}, radius {:.3})",
            node_name,
            path.display(),
            geometry.triangle_count(),
            size.x,
            size.y,
            size.z,
            bounding_radius
        );

        Ok(Self {
            name: node_name.to_string(),
            geometry,
            material,
            bounding_radius,
        })
    }

    /// Fresh node carrying a copy of the template at `position`
    pub fn instantiate(&self, position: cgmath::Vector3<f32>) -> SceneNode {
        SceneNode::new(self.name.clone())
            .with_position(position)
            .with_geometry(self.geometry.clone())
            .with_material(self.material.clone())
    }
}

fn geometry_from_mesh(mesh: &tobj::Mesh) -> GeometryData {
    let mut data = GeometryData::new();
    data.vertices = mesh
        .positions
        .chunks_exact(3)
        .map(|p| [p[0], p[1], p[2]])
        .collect();
    data.normals = mesh
        .normals
        .chunks_exact(3)
        .map(|n| [n[0], n[1], n[2]])
        .collect();
    data.tex_coords = mesh
        .texcoords
        .chunks_exact(2)
        .map(|t| [t[0], t[1]])
        .collect();
    data.indices = mesh.indices.clone();
    data
}
