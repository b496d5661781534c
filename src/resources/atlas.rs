//! Sprite atlas frame index.
//!
//! Parses the JSON hash layout written by common sprite packers:
//!
//! ```json
//! { "frames": { "character_robot_idle.png": { "frame": { "x": 0, "y": 0, "w": 96, "h": 128 } } } }
//! ```
//!
//! Only the frame names and rectangles are kept; the atlas image itself is a
//! frontend concern.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Pixel rectangle of a frame inside the atlas image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AtlasFrame {
    pub frame: FrameRect,
}

/// Named frames of one atlas image.
#[derive(Resource, Debug, Clone, Default, Deserialize, Serialize)]
pub struct SpriteAtlas {
    #[serde(skip)]
    pub key: String,
    pub frames: FxHashMap<String, AtlasFrame>,
}

impl SpriteAtlas {
    /// Parse an atlas from a JSON string.
    pub fn from_json_str(key: impl Into<String>, json: &str) -> Result<Self, serde_json::Error> {
        let mut atlas: SpriteAtlas = serde_json::from_str(json)?;
        atlas.key = key.into();
        Ok(atlas)
    }

    /// Load an atlas JSON file. The key is the file stem.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let key = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let atlas = Self::from_json_str(key, &json).map_err(|e| LoadError::json(path, e))?;
        log::info!(
            "Loaded atlas '{}' with {} frames from {}",
            atlas.key,
            atlas.frames.len(),
            path.display()
        );
        Ok(atlas)
    }

    pub fn contains(&self, frame: &str) -> bool {
        self.frames.contains_key(frame)
    }

    pub fn get(&self, frame: &str) -> Option<&FrameRect> {
        self.frames.get(frame).map(|f| &f.frame)
    }

    /// Insert or replace a frame. Mostly useful to build atlases in code.
    pub fn insert(&mut self, name: impl Into<String>, rect: FrameRect) {
        self.frames.insert(name.into(), AtlasFrame { frame: rect });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hash_layout() {
        let json = r#"{
            "frames": {
                "character_robot_idle.png": { "frame": { "x": 0, "y": 0, "w": 96, "h": 128 } },
                "character_robot_run0.png": { "frame": { "x": 96, "y": 0, "w": 96, "h": 128 }, "rotated": false }
            },
            "meta": { "image": "robot.png" }
        }"#;
        let atlas = SpriteAtlas::from_json_str("robot", json).unwrap();
        assert_eq!(atlas.key, "robot");
        assert_eq!(atlas.frames.len(), 2);
        assert!(atlas.contains("character_robot_idle.png"));
        assert_eq!(atlas.get("character_robot_run0.png").unwrap().x, 96);
        assert!(atlas.get("nope.png").is_none());
    }

    #[test]
    fn rejects_missing_frames_table() {
        assert!(SpriteAtlas::from_json_str("robot", r#"{ "meta": {} }"#).is_err());
    }
}
