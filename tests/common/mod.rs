// Shared fakes and builders for the integration tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use entryview::models::EntryDescriptor;
use entryview::player::MediaElement;
use entryview::preview::{OverlayPlacement, OverlaySurface};

/// Install a test subscriber once so RUST_LOG can surface crate logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

pub fn video_descriptor(path: &str) -> EntryDescriptor {
    EntryDescriptor {
        repo_path: path.into(),
        is_video: true,
    }
}

pub fn non_video_descriptor(path: &str) -> EntryDescriptor {
    EntryDescriptor {
        repo_path: path.into(),
        is_video: false,
    }
}

#[derive(Clone, Debug)]
pub struct FakeMediaState {
    pub position: Duration,
    pub duration: Duration,
    pub paused: bool,
    pub fullscreen: bool,
    pub play_calls: usize,
    pub pause_calls: usize,
    pub seek_calls: usize,
    pub enter_fullscreen_calls: usize,
    pub exit_fullscreen_calls: usize,
}

/// Scripted media element that records every transport call. Clamps
/// seeks to its duration the way the real element does.
pub struct FakeMediaElement {
    state: Mutex<FakeMediaState>,
}

impl FakeMediaElement {
    pub fn new(position: Duration, duration: Duration) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(FakeMediaState {
                position,
                duration,
                paused: true,
                fullscreen: false,
                play_calls: 0,
                pause_calls: 0,
                seek_calls: 0,
                enter_fullscreen_calls: 0,
                exit_fullscreen_calls: 0,
            }),
        })
    }

    pub fn snapshot(&self) -> FakeMediaState {
        self.state.lock().unwrap().clone()
    }

    pub fn transport_calls(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.play_calls
            + state.pause_calls
            + state.seek_calls
            + state.enter_fullscreen_calls
            + state.exit_fullscreen_calls
    }
}

#[async_trait]
impl MediaElement for FakeMediaElement {
    async fn position(&self) -> Option<Duration> {
        Some(self.state.lock().unwrap().position)
    }

    async fn duration(&self) -> Option<Duration> {
        Some(self.state.lock().unwrap().duration)
    }

    async fn is_paused(&self) -> bool {
        self.state.lock().unwrap().paused
    }

    async fn play(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.paused = false;
        state.play_calls += 1;
        Ok(())
    }

    async fn pause(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.paused = true;
        state.pause_calls += 1;
        Ok(())
    }

    async fn seek(&self, position: Duration) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.position = position.min(state.duration);
        state.seek_calls += 1;
        Ok(())
    }

    async fn is_fullscreen(&self) -> bool {
        self.state.lock().unwrap().fullscreen
    }

    async fn enter_fullscreen(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.fullscreen = true;
        state.enter_fullscreen_calls += 1;
        Ok(())
    }

    async fn exit_fullscreen(&self) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.fullscreen = false;
        state.exit_fullscreen_calls += 1;
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
pub struct OverlayState {
    pub visible: bool,
    pub image: Option<String>,
    pub placement: Option<OverlayPlacement>,
    pub mutations: usize,
}

/// Overlay surface that records every mutation. Clones share state so a
/// test can keep a handle while the engine owns the surface.
#[derive(Clone, Default)]
pub struct RecordingOverlay {
    state: Arc<Mutex<OverlayState>>,
}

impl RecordingOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> OverlayState {
        self.state.lock().unwrap().clone()
    }
}

impl OverlaySurface for RecordingOverlay {
    fn set_placement(&mut self, placement: OverlayPlacement) {
        let mut state = self.state.lock().unwrap();
        state.placement = Some(placement);
        state.mutations += 1;
    }

    fn set_image(&mut self, url: &str) {
        let mut state = self.state.lock().unwrap();
        state.image = Some(url.to_string());
        state.mutations += 1;
    }

    fn set_visible(&mut self, visible: bool) {
        let mut state = self.state.lock().unwrap();
        state.visible = visible;
        state.mutations += 1;
    }
}
