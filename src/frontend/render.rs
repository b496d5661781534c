//! Raylib drawing of a [`RenderView`].
//!
//! Sprite-backed entities are drawn from the atlas texture when it could be
//! loaded; everything else (and the player, without a texture) is drawn as a
//! filled rectangle.
use raylib::prelude::*;

use crate::components::tint::Tint;
use crate::resources::atlas::SpriteAtlas;
use crate::resources::gamestate::GameStates;
use crate::view::{RenderItem, RenderKind, RenderView};

const RESTART_PROMPT: &str = "Game over! Press R to restart";

fn base_color(kind: RenderKind) -> Tint {
    match kind {
        RenderKind::Platform => Tint::new(90, 70, 50, 255),
        RenderKind::Coin => Tint::new(250, 210, 40, 255),
        RenderKind::Enemy => Tint::new(150, 40, 170, 255),
        RenderKind::Player => Tint::new(230, 230, 230, 255),
    }
}

fn to_color(tint: Tint) -> Color {
    Color::new(tint.r, tint.g, tint.b, tint.a)
}

fn draw_item<D: RaylibDraw>(
    d: &mut D,
    item: &RenderItem,
    atlas: &SpriteAtlas,
    texture: Option<&Texture2D>,
) {
    let frame = item.frame.as_deref().and_then(|name| atlas.get(name));
    if let (Some(texture), Some(frame)) = (texture, frame) {
        let width = if item.flip_h {
            -(frame.w as f32)
        } else {
            frame.w as f32
        };
        let src = Rectangle::new(frame.x as f32, frame.y as f32, width, frame.h as f32);
        let dest = Rectangle::new(item.pos.x, item.pos.y, item.size.x, item.size.y);
        d.draw_texture_pro(
            texture,
            src,
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            to_color(item.tint),
        );
        return;
    }
    let color = to_color(base_color(item.kind).multiply(item.tint));
    d.draw_rectangle(
        item.pos.x as i32,
        item.pos.y as i32,
        item.size.x as i32,
        item.size.y as i32,
        color,
    );
}

/// Draw a full frame: level, entities, HUD and restart prompt.
pub fn draw_view<D: RaylibDraw>(
    d: &mut D,
    view: &RenderView,
    atlas: &SpriteAtlas,
    texture: Option<&Texture2D>,
    screen_width: i32,
    screen_height: i32,
) {
    d.clear_background(Color::SKYBLUE);
    for item in view.items.iter() {
        draw_item(d, item, atlas, texture);
    }

    d.draw_text(&view.hud.score_text(), 16, 16, 24, Color::BLACK);

    if view.hud.restart_prompt_visible || view.state == GameStates::GameOver {
        let font_size = 28;
        let text_width = measure_text(RESTART_PROMPT, font_size);
        d.draw_text(
            RESTART_PROMPT,
            (screen_width - text_width) / 2,
            screen_height / 2 - font_size / 2,
            font_size,
            Color::MAROON,
        );
    }
}
