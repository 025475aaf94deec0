//! In-memory frontends
//!
//! Used by the native binary and by tests in place of a browser.

use std::collections::BTreeSet;

use serde::Serialize;

use super::{AssetProvider, Canvas, UiSink};

/// A single call made on a `UiSink`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UiEvent {
    Lives(u8),
    StartPanel,
    PlayingPanel,
    GameOverPanel,
    ClearScreen,
}

/// Which panel is currently visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Panel {
    #[default]
    None,
    Start,
    Playing,
    GameOver,
}

/// UI sink that records every call
#[derive(Debug, Default)]
pub struct RecordingUi {
    pub events: Vec<UiEvent>,
    /// Last value shown in the lives HUD
    pub lives: Option<u8>,
    pub panel: Panel,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded events matching `event`
    pub fn count(&self, event: UiEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl UiSink for RecordingUi {
    fn set_lives_display(&mut self, lives: u8) {
        self.lives = Some(lives);
        self.events.push(UiEvent::Lives(lives));
    }

    fn show_start_panel(&mut self) {
        self.panel = Panel::Start;
        self.events.push(UiEvent::StartPanel);
    }

    fn show_playing_panel(&mut self) {
        self.panel = Panel::Playing;
        self.events.push(UiEvent::PlayingPanel);
    }

    fn show_game_over_panel(&mut self) {
        self.panel = Panel::GameOver;
        self.events.push(UiEvent::GameOverPanel);
    }

    fn clear_screen(&mut self) {
        self.events.push(UiEvent::ClearScreen);
    }
}

/// Canvas that records draw calls as `(image, x, y)`
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub draws: Vec<(String, f32, f32)>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for RecordingCanvas {
    type Image = String;

    fn draw_image(&mut self, image: &String, x: f32, y: f32) {
        self.draws.push((image.clone(), x, y));
    }
}

/// Asset provider whose "images" are their own identifiers.
///
/// Loading completes synchronously.
#[derive(Default)]
pub struct HeadlessAssets {
    loaded: BTreeSet<String>,
    ready: bool,
    pending: Vec<Box<dyn FnOnce()>>,
}

impl HeadlessAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

impl AssetProvider for HeadlessAssets {
    type Image = String;

    fn load(&mut self, ids: &[&str]) {
        self.loaded.extend(ids.iter().map(|id| id.to_string()));
        self.ready = true;
        log::debug!("Loaded {} headless assets", ids.len());
        for callback in self.pending.drain(..) {
            callback();
        }
    }

    fn on_ready(&mut self, callback: Box<dyn FnOnce()>) {
        if self.ready {
            callback();
        } else {
            self.pending.push(callback);
        }
    }

    fn get(&self, id: &str) -> Option<&String> {
        self.loaded.get(id)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_on_ready_waits_for_load() {
        let mut assets = HeadlessAssets::new();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        assets.on_ready(Box::new(move || flag.set(true)));
        assert!(!fired.get());

        assets.load(&["images/char-boy.png"]);
        assert!(fired.get());
        assert_eq!(
            assets.get("images/char-boy.png").map(String::as_str),
            Some("images/char-boy.png")
        );
        assert!(assets.get("images/missing.png").is_none());
    }

    #[test]
    fn test_on_ready_after_load_runs_immediately() {
        let mut assets = HeadlessAssets::new();
        assets.load(&[]);
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        assets.on_ready(Box::new(move || counter.set(counter.get() + 1)));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_recording_ui_tracks_panel() {
        let mut ui = RecordingUi::new();
        ui.show_start_panel();
        ui.show_playing_panel();
        ui.set_lives_display(2);
        assert_eq!(ui.panel, Panel::Playing);
        assert_eq!(ui.lives, Some(2));
        assert_eq!(ui.count(UiEvent::StartPanel), 1);
    }
}
