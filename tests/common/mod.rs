// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use surface_bridge::{PointerEvent, PointerKind, Renderer, RendererError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    SurfaceReady,
    ViewportResized(u32, u32),
    RenderFrame,
    Pointer(PointerKind, i32, i32),
}

/// Renderer that records every boundary call into a shared log
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub calls: Arc<Mutex<Vec<Call>>>,
    pub fail: Arc<Mutex<bool>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    fn record(&mut self, call: Call) -> Result<(), RendererError> {
        self.calls.lock().unwrap().push(call);
        if *self.fail.lock().unwrap() {
            Err(RendererError::Failed("engine refused".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Renderer for RecordingRenderer {
    fn surface_ready(&mut self) -> Result<(), RendererError> {
        self.record(Call::SurfaceReady)
    }

    fn viewport_resized(&mut self, width: u32, height: u32) -> Result<(), RendererError> {
        self.record(Call::ViewportResized(width, height))
    }

    fn render_frame(&mut self) -> Result<(), RendererError> {
        self.record(Call::RenderFrame)
    }

    fn pointer_event(&mut self, event: PointerEvent) -> Result<(), RendererError> {
        self.record(Call::Pointer(event.kind, event.x, event.y))
    }
}
