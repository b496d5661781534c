//! Animation clip registry.
//!
//! Clips are described by [`ClipSpec`]s (either an explicit frame list or a
//! generated name pattern), resolved against a [`SpriteAtlas`] once at load
//! time and stored as immutable [`AnimationClip`]s keyed by name. Systems look
//! clips up by key to drive playback.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::resources::atlas::SpriteAtlas;

/// Immutable data describing one sprite animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub key: Arc<str>,
    /// Atlas frame names, in playback order.
    pub frames: Vec<String>,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationClip {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

/// How the frame names of a clip are obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameSource {
    /// Explicit list of atlas frame names.
    List(Vec<String>),
    /// `prefix + zero-padded index + suffix` for every index in `start..=end`.
    Pattern {
        prefix: String,
        start: u32,
        end: u32,
        zero_pad: usize,
        suffix: String,
    },
}

impl FrameSource {
    pub fn single(frame: impl Into<String>) -> Self {
        FrameSource::List(vec![frame.into()])
    }

    /// Expand the source into concrete frame names.
    pub fn frame_names(&self) -> Vec<String> {
        match self {
            FrameSource::List(frames) => frames.clone(),
            FrameSource::Pattern {
                prefix,
                start,
                end,
                zero_pad,
                suffix,
            } => generate_frame_names(prefix, *start, *end, *zero_pad, suffix),
        }
    }
}

/// Generate `prefix{index:0zero_pad}suffix` for every index in `start..=end`.
///
/// A descending range (`start > end`) yields the frames in descending order.
pub fn generate_frame_names(
    prefix: &str,
    start: u32,
    end: u32,
    zero_pad: usize,
    suffix: &str,
) -> Vec<String> {
    let indices: Vec<u32> = if start <= end {
        (start..=end).collect()
    } else {
        (end..=start).rev().collect()
    };
    indices
        .into_iter()
        .map(|i| format!("{prefix}{i:0zero_pad$}{suffix}"))
        .collect()
}

/// Declarative description of a clip, resolved by [`AnimationStore::from_specs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipSpec {
    pub key: String,
    pub frames: FrameSource,
    pub fps: f32,
    pub looped: bool,
}

impl ClipSpec {
    pub fn new(key: impl Into<String>, frames: FrameSource, fps: f32, looped: bool) -> Self {
        Self {
            key: key.into(),
            frames,
            fps,
            looped,
        }
    }

    /// Clips of the robot atlas: a state key per
    /// [`PlayerState`](crate::components::player::PlayerState).
    pub fn robot_defaults() -> Vec<ClipSpec> {
        let pattern = |prefix: &str, end: u32| FrameSource::Pattern {
            prefix: prefix.to_string(),
            start: 0,
            end,
            zero_pad: 0,
            suffix: ".png".to_string(),
        };
        vec![
            ClipSpec::new(
                "idle",
                FrameSource::single("character_robot_idle.png"),
                1.0,
                false,
            ),
            ClipSpec::new(
                "jump",
                FrameSource::single("character_robot_jump.png"),
                1.0,
                false,
            ),
            ClipSpec::new(
                "fall",
                FrameSource::single("character_robot_fall.png"),
                1.0,
                false,
            ),
            ClipSpec::new("run", pattern("character_robot_run", 2), 10.0, true),
            ClipSpec::new("walk", pattern("character_robot_walk", 7), 10.0, true),
            ClipSpec::new("cheer", pattern("character_robot_cheer", 1), 5.0, true),
        ]
    }
}

/// Central registry of clips keyed by string IDs.
#[derive(Resource, Debug, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationClip>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve every clip description against the atlas.
    ///
    /// Fails on the first clip that has no frames or references a frame the
    /// atlas does not contain.
    pub fn from_specs(atlas: &SpriteAtlas, specs: &[ClipSpec]) -> Result<Self, LoadError> {
        let mut store = Self::new();
        for spec in specs {
            let frames = spec.frames.frame_names();
            if frames.is_empty() {
                return Err(LoadError::EmptyClip {
                    clip: spec.key.clone(),
                });
            }
            if let Some(missing) = frames.iter().find(|f| !atlas.contains(f)) {
                return Err(LoadError::MissingAtlasFrame {
                    clip: spec.key.clone(),
                    frame: missing.clone(),
                });
            }
            store.insert(AnimationClip {
                key: Arc::from(spec.key.as_str()),
                frames,
                fps: spec.fps,
                looped: spec.looped,
            });
        }
        log::debug!("Registered {} animation clips", store.animations.len());
        Ok(store)
    }

    /// Register a clip. A clip already registered under the same key is kept
    /// and the new one is dropped.
    pub fn insert(&mut self, clip: AnimationClip) -> bool {
        if self.animations.contains_key(clip.key.as_ref()) {
            log::warn!("Animation '{}' already registered, ignoring", clip.key);
            return false;
        }
        self.animations.insert(clip.key.to_string(), clip);
        true
    }

    pub fn get(&self, key: &str) -> Option<&AnimationClip> {
        self.animations.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::atlas::FrameRect;

    fn atlas_with(frames: &[&str]) -> SpriteAtlas {
        let mut atlas = SpriteAtlas::default();
        for f in frames {
            atlas.insert(
                *f,
                FrameRect {
                    x: 0,
                    y: 0,
                    w: 8,
                    h: 8,
                },
            );
        }
        atlas
    }

    #[test]
    fn generates_unpadded_names() {
        let names = generate_frame_names("character_robot_run", 0, 2, 0, ".png");
        assert_eq!(
            names,
            vec![
                "character_robot_run0.png",
                "character_robot_run1.png",
                "character_robot_run2.png"
            ]
        );
    }

    #[test]
    fn generates_zero_padded_names() {
        let names = generate_frame_names("coin_", 8, 10, 3, "");
        assert_eq!(names, vec!["coin_008", "coin_009", "coin_010"]);
    }

    #[test]
    fn generates_descending_range() {
        let names = generate_frame_names("f", 2, 0, 0, "");
        assert_eq!(names, vec!["f2", "f1", "f0"]);
    }

    #[test]
    fn from_specs_resolves_clips() {
        let atlas = atlas_with(&["a0.png", "a1.png", "still.png"]);
        let specs = vec![
            ClipSpec::new(
                "loop",
                FrameSource::Pattern {
                    prefix: "a".into(),
                    start: 0,
                    end: 1,
                    zero_pad: 0,
                    suffix: ".png".into(),
                },
                10.0,
                true,
            ),
            ClipSpec::new("still", FrameSource::single("still.png"), 1.0, false),
        ];
        let store = AnimationStore::from_specs(&atlas, &specs).unwrap();
        let clip = store.get("loop").unwrap();
        assert_eq!(clip.frame_count(), 2);
        assert!(clip.looped);
        assert_eq!(store.get("still").unwrap().frames, vec!["still.png"]);
    }

    #[test]
    fn from_specs_reports_missing_frame() {
        let atlas = atlas_with(&["a0.png"]);
        let specs = vec![ClipSpec::new(
            "run",
            FrameSource::List(vec!["a0.png".into(), "a1.png".into()]),
            10.0,
            true,
        )];
        match AnimationStore::from_specs(&atlas, &specs) {
            Err(LoadError::MissingAtlasFrame { clip, frame }) => {
                assert_eq!(clip, "run");
                assert_eq!(frame, "a1.png");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn from_specs_rejects_empty_clip() {
        let atlas = atlas_with(&[]);
        let specs = vec![ClipSpec::new("none", FrameSource::List(vec![]), 1.0, false)];
        assert!(matches!(
            AnimationStore::from_specs(&atlas, &specs),
            Err(LoadError::EmptyClip { .. })
        ));
    }

    #[test]
    fn insert_keeps_first_registration() {
        let mut store = AnimationStore::new();
        let clip = AnimationClip {
            key: Arc::from("idle"),
            frames: vec!["a".into()],
            fps: 1.0,
            looped: false,
        };
        assert!(store.insert(clip.clone()));
        let other = AnimationClip {
            fps: 99.0,
            ..clip
        };
        assert!(!store.insert(other));
        assert_eq!(store.get("idle").unwrap().fps, 1.0);
    }
}
