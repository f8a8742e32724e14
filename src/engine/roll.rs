//! Randomized roll animation
//!
//! A roll spins a die a random whole number of quarter turns about each of the
//! two horizontal axes (X and Z), amplified so the spin reads as a tumble
//! rather than a snap. Y is vertical and never rotated: spinning about it
//! would leave the same face up. Rolls are relative, so successive rolls add
//! up, and they keep the die axis-aligned once each animation finishes.
//!
//! Which face ends up on top is not computed here.

use cgmath::{Deg, Rad};
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::RollSettings,
    engine::registry::PlacedObject,
    gfx::scene::{RenderRuntime, RotateBy},
};

/// One quarter turn
pub const QUARTER_TURN: Deg<f32> = Deg(90.0);

/// A drawn roll, ready to be scheduled
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollCommand {
    pub x_quarter_turns: u32,
    pub z_quarter_turns: u32,
    pub amplification: f32,
    pub duration: f32,
}

impl RollCommand {
    pub fn angle_x(&self) -> Deg<f32> {
        QUARTER_TURN * self.x_quarter_turns as f32 * self.amplification
    }

    pub fn angle_z(&self) -> Deg<f32> {
        QUARTER_TURN * self.z_quarter_turns as f32 * self.amplification
    }

    /// Relative rotation action for the rendering runtime
    pub fn to_action(&self) -> RotateBy {
        RotateBy::new(
            Rad::from(self.angle_x()),
            Rad(0.0),
            Rad::from(self.angle_z()),
            self.duration,
        )
    }
}

pub struct RollAnimator {
    rng: StdRng,
    settings: RollSettings,
}

impl RollAnimator {
    /// Seeded from `settings.seed` when set, from OS entropy otherwise
    pub fn new(settings: RollSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng, settings }
    }

    pub fn settings(&self) -> &RollSettings {
        &self.settings
    }

    /// Draws the next roll without scheduling it
    pub fn next_command(&mut self) -> RollCommand {
        let faces = self.settings.quarter_turns.max(1);
        RollCommand {
            x_quarter_turns: self.rng.random_range(1..=faces),
            z_quarter_turns: self.rng.random_range(1..=faces),
            amplification: self.settings.amplification,
            duration: self.settings.duration,
        }
    }

    /// Draws a roll and schedules it on the object's node
    ///
    /// Returns as soon as the animation is queued.
    pub fn roll<R: RenderRuntime + ?Sized>(
        &mut self,
        object: &PlacedObject,
        runtime: &mut R,
    ) -> RollCommand {
        let command = self.next_command();
        debug!(
            "rolling {:?}: {}° about X, {}° about Z over {}s",
            object.id,
            command.angle_x().0,
            command.angle_z().0,
            command.duration
        );
        runtime.run_action(object.node, command.to_action());
        command
    }
}
