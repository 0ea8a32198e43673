//! Confetti particle engine
//!
//! Target-independent physics and bookkeeping for a confetti burst, plus the
//! canvas glue that paints it in the browser. The engine takes its clock and
//! randomness from the caller so it can be driven frame by frame in tests.

pub mod canvas;
pub mod config;
pub mod errors;
pub mod generator;
pub mod particle;
pub mod surface;
pub mod tween;

pub use canvas::{find_canvas, CanvasSurface};
pub use config::ConfettiConfig;
pub use errors::ConfettiError;
pub use generator::ParticleGenerator;
