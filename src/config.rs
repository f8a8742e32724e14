//! Engine configuration
//!
//! Plain data with sensible defaults and builder-style setters. Everything is
//! checked once by [`EngineConfig::validate`] when the engine is constructed.
//!
//! ```
//! use ardice::config::{EngineConfig, HeightPolicy};
//!
//! let config = EngineConfig::default()
//!     .with_seed(7)
//!     .with_bounding_radius(0.02)
//!     .with_height_policy(HeightPolicy::Flush);
//! assert!(config.validate().is_ok());
//! ```

use std::path::PathBuf;

use crate::{
    error::{DiceError, Result},
    tracking::SessionConfig,
};

/// Image applied to every surface visual unless overridden
pub const DEFAULT_GRID_TEXTURE: &str = "art.scnassets/grid.png";

/// Where the placeable object comes from
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSource {
    /// Model named `node_name` inside an OBJ file
    Obj { path: PathBuf, node_name: String },
    /// Cube with edge length `size` (meters)
    Procedural { name: String, size: f32 },
}

impl Default for TemplateSource {
    fn default() -> Self {
        TemplateSource::Procedural {
            name: "Dice".to_string(),
            size: 0.04,
        }
    }
}

/// Vertical placement of a new object relative to the hit surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightPolicy {
    /// Raise the object by its bounding radius so it sits on the surface
    #[default]
    Flush,
    /// Put the object's center on the surface; it clips halfway through.
    /// Only kept for comparison with older placements.
    SurfaceLevel,
}

/// Parameters of the roll animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollSettings {
    /// Seconds each roll takes
    pub duration: f32,
    /// Multiplier on the quarter-turn angle so a roll spins several times
    pub amplification: f32,
    /// Quarter turns are drawn uniformly from 1..=quarter_turns per axis
    pub quarter_turns: u32,
    /// Fixed RNG seed for reproducible rolls; OS entropy when unset
    pub seed: Option<u64>,
}

impl Default for RollSettings {
    fn default() -> Self {
        Self {
            duration: 0.5,
            amplification: 5.0,
            quarter_turns: 4,
            seed: None,
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub template: TemplateSource,
    pub height_policy: HeightPolicy,
    /// Overrides the radius computed from the template geometry
    pub bounding_radius: Option<f32>,
    pub roll: RollSettings,
    pub grid_texture: String,
    pub default_lighting: bool,
    pub session: SessionConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            template: TemplateSource::default(),
            height_policy: HeightPolicy::default(),
            bounding_radius: None,
            roll: RollSettings::default(),
            grid_texture: DEFAULT_GRID_TEXTURE.to_string(),
            default_lighting: true,
            session: SessionConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_template(mut self, template: TemplateSource) -> Self {
        self.template = template;
        self
    }

    /// Shorthand for an OBJ template
    pub fn with_obj_template(self, path: impl Into<PathBuf>, node_name: &str) -> Self {
        self.with_template(TemplateSource::Obj {
            path: path.into(),
            node_name: node_name.to_string(),
        })
    }

    pub fn with_height_policy(mut self, policy: HeightPolicy) -> Self {
        self.height_policy = policy;
        self
    }

    pub fn with_bounding_radius(mut self, radius: f32) -> Self {
        self.bounding_radius = Some(radius);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.roll.seed = Some(seed);
        self
    }

    pub fn with_roll_duration(mut self, duration: f32) -> Self {
        self.roll.duration = duration;
        self
    }

    pub fn with_amplification(mut self, amplification: f32) -> Self {
        self.roll.amplification = amplification;
        self
    }

    pub fn with_grid_texture(mut self, path: &str) -> Self {
        self.grid_texture = path.to_string();
        self
    }

    pub fn with_default_lighting(mut self, enabled: bool) -> Self {
        self.default_lighting = enabled;
        self
    }

    pub fn with_session(mut self, session: SessionConfig) -> Self {
        self.session = session;
        self
    }

    /// Rejects values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        let roll = &self.roll;
        if !roll.duration.is_finite() || roll.duration < 0.0 {
            return Err(DiceError::invalid_config(format!(
                "roll duration must be a non-negative number of seconds, got {}",
                roll.duration
            )));
        }
        if !roll.amplification.is_finite() || roll.amplification <= 0.0 {
            return Err(DiceError::invalid_config(format!(
                "roll amplification must be positive, got {}",
                roll.amplification
            )));
        }
        if roll.quarter_turns == 0 {
            return Err(DiceError::invalid_config("roll needs at least one quarter turn"));
        }
        if let Some(radius) = self.bounding_radius {
            if !radius.is_finite() || radius < 0.0 {
                return Err(DiceError::invalid_config(format!(
                    "bounding radius must be non-negative, got {}",
                    radius
                )));
            }
        }
        if let TemplateSource::Procedural { size, .. } = &self.template {
            if !size.is_finite() || *size <= 0.0 {
                return Err(DiceError::invalid_config(format!(
                    "procedural template size must be positive, got {}",
                    size
                )));
            }
        }
        Ok(())
    }
}
