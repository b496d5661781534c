//! Collectible coin component.
//!
//! `alive` becomes false exactly once, when the player collects the coin.
//! Dead coins are skipped by overlap detection and despawned in the same
//! command flush.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coin {
    /// Position of this coin in the initial left-to-right layout.
    pub index: usize,
    pub alive: bool,
}

impl Coin {
    pub fn new(index: usize) -> Self {
        Self { index, alive: true }
    }

    /// Mark the coin as collected. Returns false if it was already collected.
    pub fn collect(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_only_once() {
        let mut coin = Coin::new(3);
        assert!(coin.alive);
        assert!(coin.collect());
        assert!(!coin.alive);
        assert!(!coin.collect());
        assert!(!coin.alive);
    }
}
