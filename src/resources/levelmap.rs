//! Level map data: tile layers plus named marker objects.
//!
//! ```json
//! {
//!   "tile_size": 32, "map_width": 25, "map_height": 19,
//!   "layers": [ { "name": "platforms", "collides": true, "positions": [ { "x": 0, "y": 18, "id": 1 } ] } ],
//!   "objects": [ { "name": "player-spawn", "x": 100, "y": 450 }, { "name": "enemy-spawn", "x": 400, "y": 0 } ]
//! }
//! ```
//!
//! Tiles on layers flagged `collides` become static platforms. Marker objects
//! named `player-spawn` and `enemy-spawn` become [`SpawnPoints`].

use std::path::Path;

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

pub const PLAYER_SPAWN_MARKER: &str = "player-spawn";
pub const ENEMY_SPAWN_MARKER: &str = "enemy-spawn";

/// Single tile placement within a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tileposition {
    /// X coordinate in tiles.
    pub x: u32,
    /// Y coordinate in tiles.
    pub y: u32,
    /// Tile identifier (tileset-local).
    pub id: u32,
}

/// A named tile layer containing positions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tilelayer {
    pub name: String,
    /// Tiles of this layer block bodies.
    #[serde(default)]
    pub collides: bool,
    pub positions: Vec<Tileposition>,
}

/// Named point placed in the level editor.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MapObject {
    pub name: String,
    pub x: f32,
    pub y: f32,
}

/// Tilemap metadata, layers and marker objects.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelMap {
    /// Size of a tile in pixels.
    pub tile_size: u32,
    /// Map width in tiles.
    pub map_width: u32,
    /// Map height in tiles.
    pub map_height: u32,
    #[serde(default)]
    pub layers: Vec<Tilelayer>,
    #[serde(default)]
    pub objects: Vec<MapObject>,
}

/// Axis-aligned tile rectangle in level pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileRect {
    pub pos: Vec2,
    pub size: Vec2,
    pub id: u32,
}

impl LevelMap {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let level = Self::from_json_str(&json).map_err(|e| LoadError::json(path, e))?;
        level.validate()?;
        log::info!(
            "Loaded level {} ({}x{} tiles, {} layers, {} objects)",
            path.display(),
            level.map_width,
            level.map_height,
            level.layers.len(),
            level.objects.len()
        );
        Ok(level)
    }

    /// Reject maps with an empty tile grid or a pixel size that does not
    /// fit in `u32`.
    pub fn validate(&self) -> Result<(), LoadError> {
        if self.tile_size == 0 || self.map_width == 0 || self.map_height == 0 {
            return Err(LoadError::InvalidLevel(format!(
                "tile_size={} map_width={} map_height={}",
                self.tile_size, self.map_width, self.map_height
            )));
        }
        let width = self.map_width.checked_mul(self.tile_size);
        let height = self.map_height.checked_mul(self.tile_size);
        if width.is_none() || height.is_none() {
            return Err(LoadError::InvalidLevel(format!(
                "{}x{} tiles of {}px overflow the pixel size",
                self.map_width, self.map_height, self.tile_size
            )));
        }
        Ok(())
    }

    /// Level size in pixels.
    pub fn pixel_size(&self) -> Vec2 {
        let tile = self.tile_size as f32;
        Vec2::new(self.map_width as f32 * tile, self.map_height as f32 * tile)
    }

    /// Every tile of every collidable layer as a pixel rectangle.
    pub fn collidable_tiles(&self) -> Vec<TileRect> {
        let tile = self.tile_size as f32;
        self.layers
            .iter()
            .filter(|layer| layer.collides)
            .flat_map(|layer| layer.positions.iter())
            .map(|p| TileRect {
                pos: Vec2::new(p.x as f32 * tile, p.y as f32 * tile),
                size: Vec2::splat(tile),
                id: p.id,
            })
            .collect()
    }

    pub fn markers<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MapObject> + 'a {
        self.objects.iter().filter(move |o| o.name == name)
    }
}

/// Player and enemy spawn locations, parsed once per level and never
/// modified afterwards.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SpawnPoints {
    player: Vec2,
    enemies: Vec<Vec2>,
}

impl SpawnPoints {
    /// Extract spawn markers from a level.
    ///
    /// The first `player-spawn` wins; without one the player starts at the
    /// level centre. At least one `enemy-spawn` is required.
    pub fn from_level(level: &LevelMap) -> Result<Self, LoadError> {
        let player = match level.markers(PLAYER_SPAWN_MARKER).next() {
            Some(marker) => Vec2::new(marker.x, marker.y),
            None => {
                let centre = level.pixel_size() * 0.5;
                log::warn!(
                    "Level has no '{}' marker, using level centre {:?}",
                    PLAYER_SPAWN_MARKER,
                    centre
                );
                centre
            }
        };
        let enemies: Vec<Vec2> = level
            .markers(ENEMY_SPAWN_MARKER)
            .map(|m| Vec2::new(m.x, m.y))
            .collect();
        Self::new(player, enemies)
    }

    pub fn new(player: Vec2, enemies: Vec<Vec2>) -> Result<Self, LoadError> {
        if enemies.is_empty() {
            return Err(LoadError::MissingEnemySpawn);
        }
        Ok(Self { player, enemies })
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    /// Non-empty list of enemy spawn points.
    pub fn enemies(&self) -> &[Vec2] {
        &self.enemies
    }
}

/// Level rectangle; bodies with `collide_world_bounds` are kept inside it.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct LevelBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl LevelBounds {
    pub fn from_level(level: &LevelMap) -> Self {
        Self {
            min: Vec2::ZERO,
            max: level.pixel_size(),
        }
    }
}
