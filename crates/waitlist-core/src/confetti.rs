//! Confetti particles for the signup celebration.
//!
//! A burst is a fixed set of particles launched from one origin point.
//! The page animates them with CSS; this module only decides where each
//! particle goes, so a given seed always yields the same burst.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Colors particles are drawn from.
pub const PALETTE: [&str; 6] = [
    "#26ccff", "#a25afd", "#ff5e7e", "#88ff5a", "#fcff42", "#ffa62d",
];

/// Tuning of a burst.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiConfig {
    /// Number of particles.
    pub particle_count: usize,
    /// Initial speed, in viewport percent per animation unit.
    pub start_velocity: f32,
    /// Width of the launch cone in degrees, centered on straight up.
    pub spread: f32,
    /// Horizontal origin, 0.0 (left) to 1.0 (right).
    pub origin_x: f32,
    /// Vertical origin, 0.0 (top) to 1.0 (bottom).
    pub origin_y: f32,
    /// Animation length in milliseconds.
    pub duration_ms: u32,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            particle_count: 200,
            start_velocity: 35.0,
            spread: 150.0,
            origin_x: 0.5,
            origin_y: 0.7,
            duration_ms: 3000,
        }
    }
}

/// One piece of confetti.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal travel in viewport percent.
    pub dx: f32,
    /// Vertical travel in viewport percent; negative is up.
    pub dy: f32,
    /// Final rotation in degrees.
    pub rotation: f32,
    /// Edge length in pixels.
    pub size: f32,
    /// Launch delay in milliseconds.
    pub delay_ms: u32,
    pub color: &'static str,
}

/// Generate the particles of one burst.
pub fn burst(config: &ConfettiConfig, seed: u64) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let half_spread = config.spread / 2.0;

    (0..config.particle_count)
        .map(|i| {
            // 0 degrees is straight up.
            let angle = rng.gen_range(-half_spread..=half_spread).to_radians();
            let velocity = config.start_velocity * rng.gen_range(0.5..=1.0);
            Particle {
                dx: angle.sin() * velocity,
                dy: -angle.cos() * velocity,
                rotation: rng.gen_range(-720.0..=720.0),
                size: rng.gen_range(6.0..=12.0),
                delay_ms: rng.gen_range(0..=150),
                color: PALETTE[i % PALETTE.len()],
            }
        })
        .collect()
}
