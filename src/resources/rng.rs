//! Seeded random source shared by the coin field and the enemy spawner.
//!
//! Everything random in a session is drawn from this resource, so a seed
//! reproduces coin bounces, coin velocities, spawn choices and enemy
//! velocities exactly.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

#[derive(Resource, Debug, Clone)]
pub struct SessionRng(Rng);

impl SessionRng {
    pub fn with_seed(seed: u64) -> Self {
        Self(Rng::with_seed(seed))
    }

    /// Uniform float in `[min, max)`. Returns `min` when the range is empty.
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        min + self.0.f32() * (max - min)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.0.usize(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SessionRng::with_seed(7);
        let mut b = SessionRng::with_seed(7);
        for _ in 0..16 {
            assert_eq!(a.range_f32(-10.0, 10.0), b.range_f32(-10.0, 10.0));
            assert_eq!(a.index(5), b.index(5));
        }
    }

    #[test]
    fn range_stays_inside_bounds() {
        let mut rng = SessionRng::with_seed(1);
        for _ in 0..1000 {
            let v = rng.range_f32(0.4, 0.8);
            assert!((0.4..=0.8).contains(&v));
        }
    }

    #[test]
    fn empty_range_returns_min() {
        let mut rng = SessionRng::with_seed(1);
        assert_eq!(rng.range_f32(3.0, 3.0), 3.0);
        assert_eq!(rng.range_f32(3.0, 1.0), 3.0);
    }

    #[test]
    fn index_in_range() {
        let mut rng = SessionRng::with_seed(3);
        for _ in 0..100 {
            assert!(rng.index(4) < 4);
        }
        assert_eq!(rng.index(1), 0);
    }
}
