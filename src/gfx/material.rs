//! Material definitions
//!
//! Surface description handed to the rendering runtime alongside geometry.
//! The runtime owns any GPU-side resources; this side only says what a node
//! should look like.

/// Material definition with basic PBR properties and an optional diffuse image
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub base_color: [f32; 4],
    /// Path of the image used as diffuse contents, if any
    pub diffuse_texture: Option<String>,
    pub metallic: f32,
    pub roughness: f32,
    pub double_sided: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            base_color: [0.8, 0.8, 0.8, 1.0],
            diffuse_texture: None,
            metallic: 0.0,
            roughness: 0.5,
            double_sided: false,
        }
    }
}

impl Material {
    /// Creates a new material with basic PBR properties
    ///
    /// # Arguments
    /// * `name` - Unique name for this material
    /// * `base_color` - RGBA base color
    /// * `metallic` - Metallic factor (0.0 = dielectric, 1.0 = metallic)
    /// * `roughness` - Surface roughness (0.0 = mirror, 1.0 = rough)
    pub fn new(name: &str, base_color: [f32; 4], metallic: f32, roughness: f32) -> Self {
        Self {
            name: name.to_string(),
            base_color,
            diffuse_texture: None,
            metallic: metallic.clamp(0.0, 1.0),
            roughness: roughness.clamp(0.0, 1.0),
            double_sided: false,
        }
    }

    /// White, double-sided material showing the given grid image
    ///
    /// Used for surface visuals so the grid reads from above and below.
    pub fn grid(texture_path: &str) -> Self {
        Self::new("surface_grid", [1.0, 1.0, 1.0, 1.0], 0.0, 1.0)
            .with_texture(texture_path)
            .with_double_sided(true)
    }

    /// Builder pattern: Use an image as diffuse contents
    pub fn with_texture(mut self, path: &str) -> Self {
        self.diffuse_texture = Some(path.to_string());
        self
    }

    /// Builder pattern: Render both faces
    pub fn with_double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = double_sided;
        self
    }

    /// Builds a material from an MTL entry loaded alongside an OBJ template
    pub fn from_mtl(mtl: &tobj::Material) -> Self {
        let diffuse = mtl.diffuse.unwrap_or([0.8, 0.8, 0.8]);
        let name = if mtl.name.is_empty() {
            "template_material"
        } else {
            mtl.name.as_str()
        };
        let mut material = Material::new(
            name,
            [diffuse[0], diffuse[1], diffuse[2], mtl.dissolve.unwrap_or(1.0)],
            0.0,
            // MTL has no roughness; derive it from shininess
            1.0 - (mtl.shininess.unwrap_or(32.0) / 128.0).clamp(0.0, 1.0),
        );
        material.diffuse_texture = mtl.diffuse_texture.clone();
        material
    }
}
