use rand::Rng;
use std::f64::consts::PI;

use super::config::ConfettiConfig;
use super::surface::ConfettiSurface;

/// Particles further than this outside the canvas are considered gone
pub const OFFSCREEN_MARGIN: f64 = 100.0;

const MAX_ANGULAR_SPIN: f64 = 0.2;
const ROTATE_Y_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleShape {
    Circle,
    Square,
    Strip,
}

/// Which way the particle is currently flipping around its Y axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Positive,
    Negative,
}

impl RotationDirection {
    fn sign(self) -> f64 {
        match self {
            RotationDirection::Positive => 1.0,
            RotationDirection::Negative => -1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub shape: ParticleShape,
    pub angle: f64,
    pub angular_spin: f64,
    pub color: String,
    pub rotate_y: f64,
    pub rotation_direction: RotationDirection,
}

/// Uniform sample in `[min, max)`; collapses to `min` for empty ranges
/// instead of panicking like `gen_range` would.
fn random_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}

impl Particle {
    /// New particle at `(x, y)` with randomised size, velocity, spin and colour
    pub fn spawn<R: Rng>(config: &ConfettiConfig, x: f64, y: f64, rng: &mut R) -> Self {
        let shape = match rng.gen_range(0..3) {
            0 => ParticleShape::Circle,
            1 => ParticleShape::Square,
            _ => ParticleShape::Strip,
        };
        let color = if config.colors.is_empty() {
            String::new()
        } else {
            config.colors[rng.gen_range(0..config.colors.len())].clone()
        };
        let rotation_direction = if rng.gen_bool(0.5) {
            RotationDirection::Positive
        } else {
            RotationDirection::Negative
        };

        Self {
            x,
            y,
            w: random_range(rng, 5.0, 20.0),
            h: random_range(rng, 5.0, 20.0),
            radius: random_range(rng, 5.0, 10.0),
            vx: random_range(rng, -config.initial_velocity_x, config.initial_velocity_x),
            vy: random_range(rng, -config.initial_velocity_y, 0.0),
            shape,
            angle: random_range(rng, 0.0, 2.0 * PI),
            angular_spin: random_range(rng, -MAX_ANGULAR_SPIN, MAX_ANGULAR_SPIN),
            color,
            rotate_y: random_range(rng, 0.0, 1.0),
            rotation_direction,
        }
    }

    /// Advance one frame of motion
    pub fn update(&mut self, config: &ConfettiConfig) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += config.gravity;
        self.vx += config.wind;
        self.vx *= config.friction;
        self.vy *= config.friction;

        if self.rotate_y >= 1.0 && self.rotation_direction == RotationDirection::Positive {
            self.rotation_direction = RotationDirection::Negative;
        } else if self.rotate_y <= -1.0 && self.rotation_direction == RotationDirection::Negative {
            self.rotation_direction = RotationDirection::Positive;
        }
        self.rotate_y += ROTATE_Y_STEP * self.rotation_direction.sign();
        self.angle += self.angular_spin;
    }

    /// Below the canvas, or well past its top or sides
    pub fn is_out_of_bounds(&self, width: f64, height: f64) -> bool {
        self.y > height
            || self.y < -OFFSCREEN_MARGIN
            || self.x > width + OFFSCREEN_MARGIN
            || self.x < -OFFSCREEN_MARGIN
    }

    pub fn draw<S: ConfettiSurface + ?Sized>(&self, surface: &mut S, opacity: f64) {
        surface.save();
        surface.translate(self.x, self.y);
        surface.rotate(self.angle);
        surface.scale(1.0, self.rotate_y);
        surface.rotate(self.angle);
        surface.set_fill_color(&self.color);
        surface.set_alpha(opacity);
        match self.shape {
            ParticleShape::Circle => surface.fill_ellipse(0.0, 0.0, self.radius, self.radius),
            ParticleShape::Square => surface.fill_rect(-self.w / 2.0, -self.h / 2.0, self.w, self.h),
            ParticleShape::Strip => surface.fill_rect(-self.w / 6.0, -self.h / 2.0, self.w / 3.0, self.h),
        }
        surface.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::confetti::surface::recording::{Op, RecordingSurface};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still_particle(shape: ParticleShape) -> Particle {
        Particle {
            x: 10.0,
            y: 20.0,
            w: 12.0,
            h: 6.0,
            radius: 5.0,
            vx: 2.0,
            vy: -4.0,
            shape,
            angle: 0.0,
            angular_spin: 0.1,
            color: "#f44336".to_string(),
            rotate_y: 0.95,
            rotation_direction: RotationDirection::Positive,
        }
    }

    #[test]
    fn test_spawn_stays_in_ranges() {
        let config = ConfettiConfig::new(320.0, 650.0);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let p = Particle::spawn(&config, 12.0, 0.0, &mut rng);
            assert_eq!((p.x, p.y), (12.0, 0.0));
            assert!((5.0..20.0).contains(&p.w));
            assert!((5.0..20.0).contains(&p.h));
            assert!((5.0..10.0).contains(&p.radius));
            assert!((-4.0..4.0).contains(&p.vx));
            assert!((-10.0..=0.0).contains(&p.vy));
            assert!((-0.2..0.2).contains(&p.angular_spin));
            assert!(config.colors.contains(&p.color));
        }
    }

    #[test]
    fn test_spawn_with_zero_velocity() {
        let mut config = ConfettiConfig::new(320.0, 650.0);
        config.initial_velocity_x = 0.0;
        config.initial_velocity_y = 0.0;
        let mut rng = StdRng::seed_from_u64(1);

        let p = Particle::spawn(&config, 0.0, 0.0, &mut rng);
        assert_eq!(p.vx, 0.0);
        assert_eq!(p.vy, 0.0);
    }

    #[test]
    fn test_update_applies_gravity_and_friction() {
        let config = ConfettiConfig::new(320.0, 650.0);
        let mut p = still_particle(ParticleShape::Square);

        p.update(&config);

        assert_eq!(p.x, 12.0);
        assert_eq!(p.y, 16.0);
        assert!((p.vx - 2.0 * 0.99).abs() < 1e-12);
        assert!((p.vy - (-4.0 + 0.1) * 0.99).abs() < 1e-12);
        assert!((p.angle - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_flips_at_edge() {
        let config = ConfettiConfig::new(320.0, 650.0);
        let mut p = still_particle(ParticleShape::Strip);

        p.update(&config);
        assert_eq!(p.rotation_direction, RotationDirection::Positive);
        assert!(p.rotate_y >= 1.0);

        p.update(&config);
        assert_eq!(p.rotation_direction, RotationDirection::Negative);
        assert!(p.rotate_y < 1.0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut p = still_particle(ParticleShape::Circle);
        assert!(!p.is_out_of_bounds(320.0, 650.0));

        p.y = 651.0;
        assert!(p.is_out_of_bounds(320.0, 650.0));

        p.y = -50.0;
        assert!(!p.is_out_of_bounds(320.0, 650.0));

        p.x = 421.0;
        assert!(p.is_out_of_bounds(320.0, 650.0));
    }

    #[test]
    fn test_draw_shapes() {
        let mut surface = RecordingSurface::default();
        still_particle(ParticleShape::Circle).draw(&mut surface, 0.5);
        still_particle(ParticleShape::Strip).draw(&mut surface, 0.5);

        assert!(surface.ops.contains(&Op::Ellipse(0.0, 0.0, 5.0, 5.0)));
        assert!(surface.ops.contains(&Op::Rect(-2.0, -3.0, 4.0, 6.0)));
        assert_eq!(surface.count(|op| *op == Op::Alpha(0.5)), 2);
        assert_eq!(surface.count(|op| *op == Op::Save), surface.count(|op| *op == Op::Restore));
    }
}
