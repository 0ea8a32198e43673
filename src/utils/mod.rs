// Utility functions

pub mod animation_frame;
pub mod profile_content;

pub use profile_content::{ProfileContent, PROFILE};
