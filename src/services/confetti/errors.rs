//! Confetti error types
//!
//! Everything that can go wrong while wiring the burst to a browser canvas.
//! None of these reach the user: the component logs them and leaves the
//! canvas blank.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfettiError {
    /// No global `window` (not running in a browser)
    NoWindow,
    /// Window has no document
    NoDocument,
    /// No element with the given id in the document
    CanvasNotFound(String),
    /// Element with the given id is not a `<canvas>`
    NotACanvas(String),
    /// Canvas refused to hand out a 2D context
    NoContext2d,
    /// A browser API threw
    Js(String),
    /// Configuration values that would break the particle engine
    InvalidConfig(String),
}

impl fmt::Display for ConfettiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "No window available"),
            Self::NoDocument => write!(f, "No document available"),
            Self::CanvasNotFound(id) => write!(f, "Canvas element '{}' not found", id),
            Self::NotACanvas(id) => write!(f, "Element '{}' is not a canvas", id),
            Self::NoContext2d => write!(f, "Canvas 2D context unavailable"),
            Self::Js(msg) => write!(f, "Browser error: {}", msg),
            Self::InvalidConfig(msg) => write!(f, "Invalid confetti config: {}", msg),
        }
    }
}

impl std::error::Error for ConfettiError {}

impl From<JsValue> for ConfettiError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
