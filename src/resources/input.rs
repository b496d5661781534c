//! Per-tick input resources.
//!
//! The frontend (or a test) polls its devices once per tick and hands an
//! [`InputSnapshot`] to [`Session::tick`](crate::session::Session::tick).
//! [`update_input_state`](crate::systems::input::update_input_state) turns
//! the snapshot into an [`InputState`] with press/release edges.
use bevy_ecs::prelude::*;

/// Current key-down state of the actions the game cares about. No buffering:
/// only what is held at sampling time.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub restart: bool,
}

impl InputSnapshot {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::default()
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::default()
        }
    }

    pub fn jump() -> Self {
        Self {
            jump: true,
            ..Self::default()
        }
    }

    pub fn restart() -> Self {
        Self {
            restart: true,
            ..Self::default()
        }
    }

    pub fn with_jump(mut self) -> Self {
        self.jump = true;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean key state with per-tick edges.
pub struct BoolState {
    /// Whether the key is currently held.
    pub active: bool,
    /// Whether the key went down this tick.
    pub just_pressed: bool,
    /// Whether the key went up this tick.
    pub just_released: bool,
}

impl BoolState {
    /// Advance to a new sampled value, computing edges against the previous one.
    pub fn update(&mut self, active: bool) {
        self.just_pressed = active && !self.active;
        self.just_released = !active && self.active;
        self.active = active;
    }
}

/// Signed horizontal movement intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalIntent {
    Left,
    Right,
    #[default]
    None,
}

impl HorizontalIntent {
    /// -1, +1 or 0.
    pub fn sign(self) -> f32 {
        match self {
            HorizontalIntent::Left => -1.0,
            HorizontalIntent::Right => 1.0,
            HorizontalIntent::None => 0.0,
        }
    }
}

/// Resource capturing the per-tick action state relevant to gameplay.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    pub jump: BoolState,
    pub restart: BoolState,
}

impl InputState {
    /// Horizontal intent; holding both directions cancels out.
    pub fn horizontal(&self) -> HorizontalIntent {
        match (self.left.active, self.right.active) {
            (true, false) => HorizontalIntent::Left,
            (false, true) => HorizontalIntent::Right,
            _ => HorizontalIntent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
    }

    #[test]
    fn test_boolstate_edges() {
        let mut bs = BoolState::default();
        bs.update(true);
        assert!(bs.active && bs.just_pressed && !bs.just_released);
        bs.update(true);
        assert!(bs.active && !bs.just_pressed && !bs.just_released);
        bs.update(false);
        assert!(!bs.active && !bs.just_pressed && bs.just_released);
        bs.update(false);
        assert!(!bs.active && !bs.just_pressed && !bs.just_released);
    }

    #[test]
    fn test_horizontal_intent() {
        let mut input = InputState::default();
        assert_eq!(input.horizontal(), HorizontalIntent::None);
        input.left.update(true);
        assert_eq!(input.horizontal(), HorizontalIntent::Left);
        input.right.update(true);
        assert_eq!(input.horizontal(), HorizontalIntent::None);
        input.left.update(false);
        assert_eq!(input.horizontal(), HorizontalIntent::Right);
    }

    #[test]
    fn test_intent_sign() {
        assert_eq!(HorizontalIntent::Left.sign(), -1.0);
        assert_eq!(HorizontalIntent::Right.sign(), 1.0);
        assert_eq!(HorizontalIntent::None.sign(), 0.0);
    }
}
