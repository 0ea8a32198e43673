use rand::Rng;

use super::config::ConfettiConfig;
use super::particle::Particle;
use super::surface::ConfettiSurface;
use super::tween::ease_in_out_quad;

/// Owns the live particles of one burst and decides when it is over.
///
/// A generator is single-use: with `recycle` off it counts every particle it
/// has ever spawned, so once `number_of_pieces` have been spawned and fallen
/// off the canvas it stays finished. A new burst needs a new generator.
#[derive(Debug, Clone)]
pub struct ParticleGenerator {
    config: ConfettiConfig,
    particles: Vec<Particle>,
    particles_generated: u32,
    last_number_of_pieces: u32,
    tween_init_time: f64,
}

impl ParticleGenerator {
    pub fn new(config: ConfettiConfig) -> Self {
        Self {
            config,
            particles: Vec::new(),
            particles_generated: 0,
            last_number_of_pieces: 0,
            tween_init_time: 0.0,
        }
    }

    pub fn config(&self) -> &ConfettiConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Total particles spawned since the burst started, respawns excluded
    pub fn particles_generated(&self) -> u32 {
        self.particles_generated
    }

    fn spawn_particle<R: Rng>(config: &ConfettiConfig, rng: &mut R) -> Particle {
        let area = config.spawn_area();
        let x = area.x + rng.gen::<f64>() * area.w;
        let y = area.y + rng.gen::<f64>() * area.h;
        Particle::spawn(config, x, y, rng)
    }

    /// Advance the burst by one frame.
    ///
    /// `now_ms` is any monotonic millisecond clock (the animation frame
    /// timestamp in the browser). Returns `false` once there is nothing left
    /// to animate; callers stop scheduling frames at that point.
    pub fn animate<R: Rng>(&mut self, now_ms: f64, rng: &mut R) -> bool {
        if !self.config.run {
            return false;
        }

        let live = self.particles.len();
        let target = self.config.number_of_pieces;
        let active = if self.config.recycle {
            live as u32
        } else {
            self.particles_generated
        };

        if active < target {
            if self.last_number_of_pieces != target {
                self.tween_init_time = now_ms;
                self.last_number_of_pieces = target;
            }
            let duration = self.config.tween_duration;
            let progress = (now_ms - self.tween_init_time).max(0.0).min(duration);
            let tweened = ease_in_out_quad(progress, active as f64, target as f64, duration);
            let to_add = (tweened - active as f64).round().max(0.0) as u32;

            for _ in 0..to_add {
                let particle = Self::spawn_particle(&self.config, rng);
                self.particles.push(particle);
            }
            self.particles_generated += to_add;
        }

        let (width, height) = (self.config.width, self.config.height);
        let respawn = self.config.recycle && active <= target;
        let config = &self.config;
        for particle in self.particles.iter_mut() {
            particle.update(config);
            if respawn && particle.is_out_of_bounds(width, height) {
                *particle = Self::spawn_particle(config, rng);
            }
        }
        if !respawn {
            self.particles.retain(|p| !p.is_out_of_bounds(width, height));
        }

        live > 0 || active < target
    }

    /// Clear the surface and paint every live particle
    pub fn draw<S: ConfettiSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.config.width, self.config.height);
        for particle in &self.particles {
            particle.draw(surface, self.config.opacity);
        }
    }
}
