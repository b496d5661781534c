//! Color tint component for rendering sprites.
//!
//! The [`Tint`] component modulates an entity's sprite color during
//! rendering. The game-over hook tints the player red.

use bevy_ecs::prelude::Component;

/// RGBA color tint, straight (non-premultiplied) 8-bit channels.
#[derive(Component, Clone, Debug, Copy, PartialEq, Eq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Tint {
    pub const WHITE: Tint = Tint::new(255, 255, 255, 255);
    /// Tint applied to the player on death.
    pub const DEAD: Tint = Tint::new(255, 0, 0, 255);

    /// Create a new Tint with the specified RGBA values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Multiply this tint with another color (component-wise).
    pub fn multiply(&self, other: Tint) -> Tint {
        Tint::new(
            ((self.r as u16 * other.r as u16) / 255) as u8,
            ((self.g as u16 * other.g as u16) / 255) as u8,
            ((self.b as u16 * other.b as u16) / 255) as u8,
            ((self.a as u16 * other.a as u16) / 255) as u8,
        )
    }
}

impl Default for Tint {
    fn default() -> Self {
        Tint::WHITE
    }
}
