use bevy_ecs::prelude::Component;

/// Sprite is identified by an atlas key, the currently displayed frame name
/// and its size in world units. `flip_h` mirrors the frame horizontally.
///
/// The frame name is written by the animation system from the active clip.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub atlas_key: String,
    pub frame: String,
    pub width: f32,
    pub height: f32,
    pub flip_h: bool,
}

impl Sprite {
    pub fn new(atlas_key: impl Into<String>, frame: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            atlas_key: atlas_key.into(),
            frame: frame.into(),
            width,
            height,
            flip_h: false,
        }
    }
}
