//! Background music using HTML audio elements
//!
//! Two looping tracks; exactly one plays at a time, following the song the
//! current level asks for.

use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

use crate::platform::song_path;
use crate::settings::Settings;
use crate::sim::Song;

fn load_track(song: Song) -> Option<HtmlAudioElement> {
    match HtmlAudioElement::new_with_src(song_path(song)) {
        Ok(track) => {
            track.set_loop(true);
            Some(track)
        }
        Err(e) => {
            log::warn!("Failed to create audio element for {:?}: {:?}", song, e);
            None
        }
    }
}

/// Music manager for the game
pub struct MusicPlayer {
    main: Option<HtmlAudioElement>,
    boss: Option<HtmlAudioElement>,
    current: Option<Song>,
    volume: f32,
    /// Rejection handler for `play()` promises
    on_blocked: Closure<dyn FnMut(JsValue)>,
}

impl MusicPlayer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            main: load_track(Song::Main),
            boss: load_track(Song::Boss),
            current: None,
            volume: settings.effective_music_volume(),
            // Browsers reject playback before the first user gesture
            on_blocked: Closure::new(|e: JsValue| {
                log::warn!("Music playback blocked: {:?}", e);
            }),
        }
    }

    fn start(&self, track: &HtmlAudioElement) {
        match track.play() {
            Ok(promise) => {
                let _ = promise.catch(&self.on_blocked);
            }
            Err(e) => log::warn!("Music playback failed: {:?}", e),
        }
    }

    fn track(&self, song: Song) -> Option<&HtmlAudioElement> {
        match song {
            Song::Main => self.main.as_ref(),
            Song::Boss => self.boss.as_ref(),
        }
    }

    /// Switch to `song` if it is not already the active track
    pub fn play(&mut self, song: Song) {
        if self.current == Some(song) {
            return;
        }
        if let Some(previous) = self.current.and_then(|s| self.track(s)) {
            let _ = previous.pause();
        }
        if let Some(track) = self.track(song) {
            track.set_volume(self.volume as f64);
            track.set_current_time(0.0);
            self.start(track);
        }
        log::info!("Now playing {:?}", song);
        self.current = Some(song);
    }

    /// Pause whatever is playing (focus lost)
    pub fn pause(&self) {
        if let Some(track) = self.current.and_then(|s| self.track(s)) {
            let _ = track.pause();
        }
    }

    /// Resume the current track (focus regained, or after a user gesture)
    pub fn resume(&self) {
        if let Some(track) = self.current.and_then(|s| self.track(s)) {
            self.start(track);
        }
    }

    /// Re-read volume and mute from settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.volume = settings.effective_music_volume();
        for track in [&self.main, &self.boss].into_iter().flatten() {
            track.set_volume(self.volume as f64);
        }
    }
}
