use serde::{Deserialize, Serialize};

use super::errors::ConfettiError;

pub const DEFAULT_NUMBER_OF_PIECES: u32 = 200;
pub const DEFAULT_FRICTION: f64 = 0.99;
pub const DEFAULT_WIND: f64 = 0.0;
pub const DEFAULT_GRAVITY: f64 = 0.1;
pub const DEFAULT_INITIAL_VELOCITY_X: f64 = 4.0;
pub const DEFAULT_INITIAL_VELOCITY_Y: f64 = 10.0;
pub const DEFAULT_OPACITY: f64 = 1.0;
/// Milliseconds to ramp from zero to `number_of_pieces`
pub const DEFAULT_TWEEN_DURATION: f64 = 5000.0;

/// Material palette used when no colours are given
pub const DEFAULT_COLORS: [&str; 17] = [
    "#f44336", "#e91e63", "#9c27b0", "#673ab7", "#3f51b5", "#2196f3",
    "#03a9f4", "#00bcd4", "#009688", "#4CAF50", "#8BC34A", "#CDDC39",
    "#FFEB3B", "#FFC107", "#FF9800", "#FF5722", "#795548",
];

/// Rectangle new particles are spawned in, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnArea {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Everything the particle engine needs to know about a burst.
///
/// Built once when the confetti layer mounts and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
    pub width: f64,
    pub height: f64,
    pub number_of_pieces: u32,
    pub friction: f64,
    pub wind: f64,
    pub gravity: f64,
    pub initial_velocity_x: f64,
    pub initial_velocity_y: f64,
    pub opacity: f64,
    pub colors: Vec<String>,
    /// Respawn particles that leave the canvas instead of letting the burst end
    pub recycle: bool,
    pub run: bool,
    pub tween_duration: f64,
    /// Defaults to the top edge of the canvas
    pub source: Option<SpawnArea>,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        // 300x150 is the size of an unstyled <canvas>
        Self::new(300.0, 150.0)
    }
}

impl ConfettiConfig {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            number_of_pieces: DEFAULT_NUMBER_OF_PIECES,
            friction: DEFAULT_FRICTION,
            wind: DEFAULT_WIND,
            gravity: DEFAULT_GRAVITY,
            initial_velocity_x: DEFAULT_INITIAL_VELOCITY_X,
            initial_velocity_y: DEFAULT_INITIAL_VELOCITY_Y,
            opacity: DEFAULT_OPACITY,
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            recycle: true,
            run: true,
            tween_duration: DEFAULT_TWEEN_DURATION,
            source: None,
        }
    }

    pub fn with_recycle(mut self, recycle: bool) -> Self {
        self.recycle = recycle;
        self
    }

    pub fn spawn_area(&self) -> SpawnArea {
        self.source.unwrap_or(SpawnArea {
            x: 0.0,
            y: 0.0,
            w: self.width,
            h: 0.0,
        })
    }

    /// Reject values the engine cannot animate sensibly
    pub fn validate(&self) -> Result<(), ConfettiError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ConfettiError::InvalidConfig(format!("width must be positive, got {}", self.width)));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ConfettiError::InvalidConfig(format!("height must be positive, got {}", self.height)));
        }
        if self.colors.is_empty() {
            return Err(ConfettiError::InvalidConfig("at least one colour is required".to_string()));
        }
        if !(self.tween_duration.is_finite() && self.tween_duration > 0.0) {
            return Err(ConfettiError::InvalidConfig(format!(
                "tween duration must be positive, got {}",
                self.tween_duration
            )));
        }

        let tunables = [
            ("friction", self.friction),
            ("wind", self.wind),
            ("gravity", self.gravity),
            ("initial_velocity_x", self.initial_velocity_x),
            ("initial_velocity_y", self.initial_velocity_y),
            ("opacity", self.opacity),
        ];
        if let Some((name, value)) = tunables.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfettiError::InvalidConfig(format!("{} must be finite, got {}", name, value)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_burst_tunables() {
        let config = ConfettiConfig::new(320.0, 650.0);
        assert_eq!(config.number_of_pieces, 200);
        assert_eq!(config.gravity, 0.1);
        assert_eq!(config.friction, 0.99);
        assert_eq!(config.colors.len(), 17);
        assert!(config.recycle);
        assert!(config.run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_spawn_area_defaults_to_top_edge() {
        let config = ConfettiConfig::new(320.0, 650.0);
        assert_eq!(
            config.spawn_area(),
            SpawnArea { x: 0.0, y: 0.0, w: 320.0, h: 0.0 }
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(ConfettiConfig::new(0.0, 650.0).validate().is_err());
        assert!(ConfettiConfig::new(320.0, f64::NAN).validate().is_err());

        let mut config = ConfettiConfig::new(320.0, 650.0);
        config.colors.clear();
        assert!(config.validate().is_err());

        let mut config = ConfettiConfig::new(320.0, 650.0);
        config.gravity = f64::INFINITY;
        match config.validate() {
            Err(ConfettiError::InvalidConfig(msg)) => assert!(msg.contains("gravity")),
            other => panic!("expected invalid config, got {:?}", other),
        }
    }

    #[test]
    fn test_partial_config_deserializes_with_defaults() {
        let config: ConfettiConfig =
            serde_json::from_str(r#"{"width": 320, "height": 650, "recycle": false}"#).unwrap();
        assert_eq!(config.width, 320.0);
        assert_eq!(config.height, 650.0);
        assert!(!config.recycle);
        assert_eq!(config.number_of_pieces, DEFAULT_NUMBER_OF_PIECES);
    }
}
