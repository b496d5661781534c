//! Audio playback thread for the windowed frontend.
//!
//! Raylib audio handles are not `Send`, so a dedicated thread owns the audio
//! device and every loaded sound. The main loop forwards the cues returned by
//! [`Session::tick`](crate::session::Session::tick) over a crossbeam channel.
//!
//! Cue ids map to files under the audio directory: effects to `<id>.wav`,
//! music to `<id>.ogg`. Files are loaded the first time a cue names them;
//! missing files are reported once and the cue is dropped.
use std::path::{Path, PathBuf};
use std::thread::JoinHandle;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, error, info, warn};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::events::audio::AudioCmd;

pub enum AudioRequest {
    Cue(AudioCmd),
    Shutdown,
}

/// Main-thread side of the audio thread.
pub struct AudioBridge {
    tx: Sender<AudioRequest>,
    handle: Option<JoinHandle<()>>,
}

impl AudioBridge {
    /// Spawn the audio thread.
    pub fn spawn(audio_dir: impl Into<PathBuf>) -> Self {
        let (tx, rx) = unbounded::<AudioRequest>();
        let dir = audio_dir.into();
        let handle = std::thread::spawn(move || audio_thread(rx, dir));
        AudioBridge {
            tx,
            handle: Some(handle),
        }
    }

    /// Forward cues; ignored once the thread has exited.
    pub fn send(&self, cues: impl IntoIterator<Item = AudioCmd>) {
        for cue in cues {
            let _ = self.tx.send(AudioRequest::Cue(cue));
        }
    }

    /// Ask the thread to unload everything and wait for it to exit.
    pub fn shutdown(mut self) {
        let _ = self.tx.send(AudioRequest::Shutdown);
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            error!("Audio thread panicked");
        }
    }
}

fn audio_thread(rx: Receiver<AudioRequest>, dir: PathBuf) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("Failed to initialize audio device: {}", e);
            // keep the channel drained so senders never block
            for request in rx.iter() {
                if let AudioRequest::Shutdown = request {
                    break;
                }
            }
            return;
        }
    };
    info!("Audio thread started (dir={})", dir.display());

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();
    let mut missing: FxHashSet<PathBuf> = FxHashSet::default();

    'run: loop {
        for request in rx.try_iter() {
            let cmd = match request {
                AudioRequest::Cue(cmd) => cmd,
                AudioRequest::Shutdown => break 'run,
            };
            match cmd {
                AudioCmd::PlayFx { id } => {
                    if !sounds.contains_key(&id) {
                        let path = asset_path(&dir, &id, "wav");
                        if missing.contains(&path) {
                            continue;
                        }
                        match audio.new_sound(&path.to_string_lossy()) {
                            Ok(sound) => {
                                debug!("fx loaded id='{}'", id);
                                sounds.insert(id.clone(), sound);
                            }
                            Err(e) => {
                                warn!("fx '{}' unavailable ({}): {}", id, path.display(), e);
                                missing.insert(path);
                                continue;
                            }
                        }
                    }
                    if let Some(sound) = sounds.get(&id) {
                        sound.play();
                    }
                }
                AudioCmd::PlayMusic {
                    id,
                    looped: want_loop,
                } => {
                    if !musics.contains_key(&id) {
                        let path = asset_path(&dir, &id, "ogg");
                        if missing.contains(&path) {
                            continue;
                        }
                        match audio.new_music(&path.to_string_lossy()) {
                            Ok(music) => {
                                debug!("music loaded id='{}'", id);
                                musics.insert(id.clone(), music);
                            }
                            Err(e) => {
                                warn!("music '{}' unavailable ({}): {}", id, path.display(), e);
                                missing.insert(path);
                                continue;
                            }
                        }
                    }
                    if let Some(music) = musics.get(&id) {
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id);
                        } else {
                            looped.remove(&id);
                        }
                    }
                }
                AudioCmd::StopMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        music.stop_stream();
                    }
                    playing.remove(&id);
                    looped.remove(&id);
                }
            }
        }

        // Music streams must be pumped while playing.
        let mut ended: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else if music.get_time_played() >= music.get_time_length() - 0.01 {
                    ended.push(id.clone());
                }
            }
        }
        for id in ended {
            if looped.contains(&id) {
                if let Some(music) = musics.get(&id) {
                    music.seek_stream(0.0);
                    music.play_stream();
                }
            } else {
                playing.remove(&id);
            }
        }
        std::thread::sleep(Duration::from_millis(10));
    }

    info!("Audio thread exiting");
    musics.clear();
    sounds.clear();
}

fn asset_path(dir: &Path, id: &str, extension: &str) -> PathBuf {
    dir.join(format!("{id}.{extension}"))
}
