use bevy_ecs::prelude::Resource;

/// Coins collected in the current session.
///
/// Only ever incremented by one per collection; reset to zero when a
/// session (re)starts.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score(u32);

impl Score {
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Add one collected coin and return the new value.
    pub fn increment(&mut self) -> u32 {
        self.0 += 1;
        self.0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_returns_post_value() {
        let mut score = Score::default();
        assert_eq!(score.increment(), 1);
        assert_eq!(score.increment(), 2);
        assert_eq!(score.get(), 2);
        score.reset();
        assert_eq!(score.get(), 0);
    }
}
