//! Render snapshot.
//!
//! Frontends never query the world directly. [`build_render_view`] copies
//! what is needed to draw a frame into a plain [`RenderView`], ordered back
//! to front.
use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::coin::Coin;
use crate::components::enemy::Enemy;
use crate::components::mapposition::MapPosition;
use crate::components::platform::Platform;
use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::hud::Hud;

/// Draw layer, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RenderKind {
    Platform,
    Coin,
    Enemy,
    Player,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    pub kind: RenderKind,
    /// Top-left corner of the collider box in level pixels.
    pub pos: Vec2,
    pub size: Vec2,
    /// Atlas frame, for sprite-backed entities.
    pub frame: Option<String>,
    pub flip_h: bool,
    pub tint: Tint,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderView {
    pub items: Vec<RenderItem>,
    pub hud: Hud,
    pub state: GameStates,
}

pub fn build_render_view(world: &mut World) -> RenderView {
    let mut query = world.query::<(
        &MapPosition,
        &BoxCollider,
        Option<&Sprite>,
        Option<&Tint>,
        Has<Player>,
        Has<Coin>,
        Has<Enemy>,
        Has<Platform>,
    )>();

    let mut items = Vec::new();
    for (position, collider, sprite, tint, is_player, is_coin, is_enemy, is_platform) in
        query.iter(world)
    {
        let kind = if is_player {
            RenderKind::Player
        } else if is_enemy {
            RenderKind::Enemy
        } else if is_coin {
            RenderKind::Coin
        } else if is_platform {
            RenderKind::Platform
        } else {
            continue;
        };
        let (min, max) = collider.aabb(position.pos);
        items.push(RenderItem {
            kind,
            pos: min,
            size: max - min,
            frame: sprite.map(|s| s.frame.clone()),
            flip_h: sprite.is_some_and(|s| s.flip_h),
            tint: tint.copied().unwrap_or_default(),
        });
    }
    items.sort_by_key(|item| item.kind);

    RenderView {
        items,
        hud: world.get_resource::<Hud>().cloned().unwrap_or_default(),
        state: world
            .get_resource::<GameState>()
            .map(|s| s.get())
            .unwrap_or_default(),
    }
}

impl RenderView {
    pub fn count(&self, kind: RenderKind) -> usize {
        self.items.iter().filter(|item| item.kind == kind).count()
    }
}
