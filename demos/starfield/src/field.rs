//! CPU-side scene state: star positions, the shooting subset, and the earth.
//!
//! Kept free of GPU types so the scene rules can be tested headless. The
//! flows in `main` copy this state into instance buffers each frame.

use rand::Rng;
use stardust_ngin::{Rad, Vector3};

/// How many star meshes share the one box geometry and material.
pub const STAR_COUNT: usize = 300;
/// How many of them are promoted to shooting stars at startup.
pub const SHOOTING_COUNT: usize = 8;
/// Stars scatter uniformly inside [-SPREAD, SPREAD] on every axis.
pub const SPREAD: f32 = 30.0;
/// Per-frame displacement of a shooting star while the space key is held.
pub const SHOOT_DELTA: [f32; 3] = [1.0, -0.5, 0.0];
/// Per-frame earth rotation in radians, applied unconditionally.
pub const SPIN_RATE: f32 = 0.01;

/// The star positions plus the indices of the shooting subset.
pub struct StarField {
    pub positions: Vec<Vector3<f32>>,
    pub shooting: Vec<usize>,
}

impl StarField {
    /// Scatter `count` stars uniformly inside the cube of half-extent
    /// `spread` and pick the shooting subset (with replacement, so the same
    /// star may be picked twice and then moves twice as fast).
    pub fn scattered<R: Rng>(rng: &mut R, count: usize, spread: f32) -> Self {
        let positions = (0..count)
            .map(|_| {
                Vector3::new(
                    rng.gen_range(-spread..spread),
                    rng.gen_range(-spread..spread),
                    rng.gen_range(-spread..spread),
                )
            })
            .collect();
        let shooting = (0..SHOOTING_COUNT)
            .map(|_| rng.gen_range(0..count))
            .collect();
        Self {
            positions,
            shooting,
        }
    }

    /// Advance the shooting stars by one frame; every other star stays put.
    pub fn advance(&mut self) {
        for &index in &self.shooting {
            self.positions[index].x += SHOOT_DELTA[0];
            self.positions[index].y += SHOOT_DELTA[1];
            self.positions[index].z += SHOOT_DELTA[2];
        }
    }
}

/// The earth only carries its accumulated yaw.
pub struct Earth {
    pub angle: Rad<f32>,
}

impl Earth {
    pub fn new() -> Self {
        Self { angle: Rad(0.0) }
    }

    pub fn advance(&mut self) {
        self.angle += Rad(SPIN_RATE);
    }
}

impl Default for Earth {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    #[test]
    fn field_has_configured_star_count() {
        let mut rng = StdRng::seed_from_u64(9);
        let field = StarField::scattered(&mut rng, STAR_COUNT, SPREAD);
        assert_eq!(field.positions.len(), STAR_COUNT);
        assert_eq!(field.shooting.len(), SHOOTING_COUNT);
    }

    #[test]
    fn shooting_indices_are_in_bounds() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let field = StarField::scattered(&mut rng, STAR_COUNT, SPREAD);
            assert!(field.shooting.iter().all(|&i| i < field.positions.len()));
        }
    }

    #[test]
    fn scatter_respects_spread() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = StarField::scattered(&mut rng, STAR_COUNT, SPREAD);
        for position in &field.positions {
            assert!(position.x.abs() <= SPREAD);
            assert!(position.y.abs() <= SPREAD);
            assert!(position.z.abs() <= SPREAD);
        }
    }

    #[test]
    fn advance_moves_only_the_shooting_subset() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = StarField::scattered(&mut rng, STAR_COUNT, SPREAD);
        let before = field.positions.clone();
        let shooting: HashSet<usize> = field.shooting.iter().copied().collect();

        for frame in 1..=5 {
            field.advance();
            for (index, (was, is)) in before.iter().zip(&field.positions).enumerate() {
                if shooting.contains(&index) {
                    // Monotonic drift: +x and -y grow with every frame held.
                    assert!(is.x > was.x, "star {} should drift right", index);
                    assert!(is.y < was.y, "star {} should drift down", index);
                    assert_eq!(is.z, was.z);
                } else {
                    assert_eq!(is, was, "star {} moved on frame {}", index, frame);
                }
            }
        }
    }

    #[test]
    fn earth_spins_at_a_fixed_rate() {
        let mut earth = Earth::new();
        for frame in 1..=100 {
            earth.advance();
            let expected = SPIN_RATE * frame as f32;
            assert!((earth.angle.0 - expected).abs() < 1e-5);
        }
    }
}
