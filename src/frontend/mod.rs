//! Windowed frontend (feature `windowed`).
//!
//! Opens a raylib window, samples the keyboard into an [`InputSnapshot`]
//! each frame, ticks the [`Session`], forwards audio cues to the
//! [`AudioBridge`] thread, and draws the session's render view.
//!
//! Controls: arrows or A/D to move, Up/W/Space to jump, R to restart after
//! a game over, Esc to quit.
pub mod audio;
pub mod render;

use std::path::PathBuf;

use log::{info, warn};
use raylib::prelude::*;

use crate::resources::atlas::SpriteAtlas;
use crate::resources::input::InputSnapshot;
use crate::session::Session;

use self::audio::AudioBridge;
use self::render::draw_view;

/// Longest simulated step; slower frames are clamped to it.
const MAX_FRAME_TIME: f32 = 0.05;

pub struct FrontendOptions {
    /// Texture for the atlas frames. Optional: without it, rectangles are drawn.
    pub atlas_texture: Option<PathBuf>,
    pub audio_dir: PathBuf,
}

fn sample_keyboard(rl: &RaylibHandle) -> InputSnapshot {
    let down = |keys: &[KeyboardKey]| keys.iter().any(|k| rl.is_key_down(*k));
    InputSnapshot {
        left: down(&[KeyboardKey::KEY_LEFT, KeyboardKey::KEY_A]),
        right: down(&[KeyboardKey::KEY_RIGHT, KeyboardKey::KEY_D]),
        jump: down(&[KeyboardKey::KEY_UP, KeyboardKey::KEY_W, KeyboardKey::KEY_SPACE]),
        restart: down(&[KeyboardKey::KEY_R]),
    }
}

/// Run the window until it is closed.
pub fn run(mut session: Session, options: FrontendOptions) {
    let (width, height) = session.config().window_size();
    let target_fps = session.config().target_fps;

    let (mut rl, thread) = raylib::init()
        .size(width as i32, height as i32)
        .title("coinbot")
        .build();
    rl.set_target_fps(target_fps);

    let atlas = session.world().resource::<SpriteAtlas>().clone();
    let texture = options
        .atlas_texture
        .as_ref()
        .and_then(|path| match rl.load_texture(&thread, &path.to_string_lossy()) {
            Ok(texture) => Some(texture),
            Err(e) => {
                warn!("Atlas texture {} not loaded: {}", path.display(), e);
                None
            }
        });

    let bridge = AudioBridge::spawn(options.audio_dir);
    bridge.send(session.take_audio());

    while !rl.window_should_close() {
        let dt = rl.get_frame_time().min(MAX_FRAME_TIME);
        let input = sample_keyboard(&rl);
        let cues = session.tick(input, dt);
        bridge.send(cues);

        let view = session.render_view();
        let mut d = rl.begin_drawing(&thread);
        draw_view(
            &mut d,
            &view,
            &atlas,
            texture.as_ref(),
            width as i32,
            height as i32,
        );
    }

    info!("Window closed with score {}", session.score());
    bridge.shutdown();
}
