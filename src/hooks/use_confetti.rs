use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::services::confetti::{ConfettiConfig, ConfettiError};
use crate::utils::animation_frame::AnimationLoop;

/// Lifecycle of one confetti burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfettiState {
    /// Mounted, loop not started (always the case outside the browser)
    Idle,
    Running,
    Complete,
}

impl ConfettiState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfettiState::Idle => "idle",
            ConfettiState::Running => "running",
            ConfettiState::Complete => "complete",
        }
    }
}

/// Run a confetti burst on the canvas with id `canvas_id`.
///
/// The configuration is captured on mount; later renders do not restart or
/// reconfigure the burst. Unmounting cancels the animation loop, so a
/// remount always starts a fresh burst.
///
/// # Arguments
/// * `canvas_id` - id of the `<canvas>` the burst is painted on
/// * `config` - burst configuration, read once
/// * `on_complete` - fired once when a non-recycling burst ends
#[cfg_attr(not(target_family = "wasm"), allow(unused_variables))]
pub fn use_confetti(
    canvas_id: String,
    config: ConfettiConfig,
    on_complete: Option<EventHandler>,
) -> Signal<ConfettiState> {
    #[cfg_attr(not(target_family = "wasm"), allow(unused_mut))]
    let mut state = use_signal(|| ConfettiState::Idle);
    let mount_config = use_hook(|| config);
    let animation: Rc<RefCell<Option<AnimationLoop>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let animation_for_effect = animation.clone();

    use_effect(move || {
        #[cfg(target_family = "wasm")]
        {
            if animation_for_effect.borrow().is_some() {
                return;
            }

            match start_burst(&canvas_id, mount_config.clone(), state, on_complete) {
                Ok(Some(animation_loop)) => {
                    *animation_for_effect.borrow_mut() = Some(animation_loop);
                }
                Ok(None) => {
                    log::debug!("Confetti not running, canvas left empty");
                }
                Err(e) => {
                    log::warn!("Confetti disabled: {}", e);
                    state.set(ConfettiState::Complete);
                }
            }
        }
    });

    use_drop(move || {
        if let Some(animation_loop) = animation.borrow_mut().take() {
            if animation_loop.is_running() {
                log::debug!("Confetti unmounted mid-burst");
            }
        }
    });

    state
}

/// Wire a fresh particle generator to the canvas and start the frame loop.
///
/// Returns `Ok(None)` when the configuration says not to run.
#[cfg_attr(not(target_family = "wasm"), allow(dead_code))]
fn start_burst(
    canvas_id: &str,
    config: ConfettiConfig,
    mut state: Signal<ConfettiState>,
    on_complete: Option<EventHandler>,
) -> Result<Option<AnimationLoop>, ConfettiError> {
    use crate::services::confetti::{find_canvas, CanvasSurface, ParticleGenerator};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    config.validate()?;
    if !config.run {
        return Ok(None);
    }

    let canvas = find_canvas(canvas_id)?;
    let mut surface = CanvasSurface::from_canvas(&canvas)?;
    let mut generator = ParticleGenerator::new(config);
    let mut rng = StdRng::from_entropy();

    log::info!(
        "Confetti burst started: {} pieces, recycle={}",
        generator.config().number_of_pieces,
        generator.config().recycle
    );
    state.set(ConfettiState::Running);

    let animation_loop = AnimationLoop::start(move |timestamp| {
        let alive = generator.animate(timestamp, &mut rng);
        generator.draw(&mut surface);

        if !alive {
            log::info!("Confetti burst complete");
            state.set(ConfettiState::Complete);
            if let Some(handler) = on_complete {
                handler.call(());
            }
        }
        alive
    })?;

    Ok(Some(animation_loop))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_markers() {
        assert_eq!(ConfettiState::Idle.as_str(), "idle");
        assert_eq!(ConfettiState::Running.as_str(), "running");
        assert_eq!(ConfettiState::Complete.as_str(), "complete");
    }
}
