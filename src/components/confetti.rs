use dioxus::prelude::*;

use crate::hooks::use_confetti;
use crate::services::confetti::config::{
    DEFAULT_FRICTION, DEFAULT_GRAVITY, DEFAULT_NUMBER_OF_PIECES, DEFAULT_OPACITY,
    DEFAULT_TWEEN_DURATION, DEFAULT_WIND,
};
use crate::services::confetti::ConfettiConfig;

#[derive(Props, Clone, PartialEq)]
pub struct ConfettiProps {
    /// Canvas width in CSS pixels
    pub width: u32,
    /// Canvas height in CSS pixels
    pub height: u32,
    /// Keep respawning particles; `false` plays a single burst
    #[props(default = true)]
    pub recycle: bool,
    #[props(default = true)]
    pub run: bool,
    #[props(default = DEFAULT_NUMBER_OF_PIECES)]
    pub number_of_pieces: u32,
    #[props(default = DEFAULT_GRAVITY)]
    pub gravity: f64,
    #[props(default = DEFAULT_WIND)]
    pub wind: f64,
    #[props(default = DEFAULT_FRICTION)]
    pub friction: f64,
    #[props(default = DEFAULT_OPACITY)]
    pub opacity: f64,
    /// Milliseconds to ramp up to `number_of_pieces`
    #[props(default = DEFAULT_TWEEN_DURATION)]
    pub tween_duration: f64,
    /// Fired once when a non-recycling burst has finished
    #[props(default)]
    pub on_complete: Option<EventHandler>,
}

impl ConfettiProps {
    fn to_config(&self) -> ConfettiConfig {
        let mut config = ConfettiConfig::new(self.width as f64, self.height as f64).with_recycle(self.recycle);
        config.run = self.run;
        config.number_of_pieces = self.number_of_pieces;
        config.gravity = self.gravity;
        config.wind = self.wind;
        config.friction = self.friction;
        config.opacity = self.opacity;
        config.tween_duration = self.tween_duration;
        config
    }
}

/// Canvas overlay playing a confetti burst.
///
/// Sits absolutely positioned over its container and never intercepts
/// pointer events.
#[component]
pub fn Confetti(props: ConfettiProps) -> Element {
    let canvas_id = use_hook(|| format!("confetti-{}", uuid::Uuid::new_v4()));
    let state = use_confetti(canvas_id.clone(), props.to_config(), props.on_complete);

    rsx! {
        canvas {
            id: "{canvas_id}",
            class: "confetti-canvas",
            width: "{props.width}",
            height: "{props.height}",
            style: "position: absolute; top: 0; left: 0; z-index: 2; pointer-events: none;",
            "data-recycle": "{props.recycle}",
            "data-state": "{state.read().as_str()}",
        }
    }
}
