//! Ardice
//!
//! Plane-anchored dice placement and roll animation for augmented reality
//! scenes. Detected surfaces get a grid overlay, taps on them place dice, and
//! shaking rolls every die with a randomized spin.
//!
//! The engine drives two collaborators through traits: a tracking session
//! ([`tracking::TrackingSession`]) and a scene-graph runtime
//! ([`gfx::scene::RenderRuntime`]). In-memory implementations of both ship
//! with the crate.

pub mod config;
pub mod engine;
pub mod error;
pub mod gfx;
pub mod input;
pub mod prelude;
pub mod tracking;

// Re-export main types for convenience
pub use config::EngineConfig;
pub use engine::{DiceEngine, Interaction};
pub use error::DiceError;

/// Installs `env_logger` with an `info` default, overridable through `RUST_LOG`
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
