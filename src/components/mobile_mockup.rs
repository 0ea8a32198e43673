use dioxus::prelude::*;

use crate::components::{Confetti, ProfileCard};
use crate::utils::PROFILE;

/// Confetti canvas size, matching the phone's screen area
pub const CONFETTI_WIDTH: u32 = 320;
pub const CONFETTI_HEIGHT: u32 = 650;

/// Phone frame with a profile card and a single confetti burst.
///
/// The side buttons and switch are drawn by the stylesheet only and have no
/// handlers attached.
#[component]
pub fn MobileMockup() -> Element {
    rsx! {
        div {
            class: "mobile__outline",
            div { class: "volume volume-up" }
            div { class: "volume volume-down" }
            div { class: "switch", "data-switch": "off" }
            div {
                class: "main-content",
                Confetti {
                    width: CONFETTI_WIDTH,
                    height: CONFETTI_HEIGHT,
                    recycle: false,
                }
                ProfileCard { content: PROFILE }
            }
        }
    }
}
