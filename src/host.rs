//! Adapter for draw-driven hosts
//!
//! Some platforms (GLKView-style delegates) never report surface creation or
//! size changes. They only ask for a frame and pass the drawable rect in
//! points. `DrawDrivenHost` derives the lifecycle from those draws.

use std::sync::Arc;

use crate::bridge::{Dispatch, SurfaceBridge};
use crate::error::BridgeResult;
use crate::renderer::Renderer;
use crate::surface::SurfaceState;
use crate::touch::RawPointer;

pub struct DrawDrivenHost<R: Renderer> {
    bridge: Arc<SurfaceBridge<R>>,
    scale: f32,
}

impl<R: Renderer> DrawDrivenHost<R> {
    /// `scale` converts the rect's points to drawable pixels. The bridge
    /// itself should keep the default scale of 1.0.
    pub fn new(bridge: Arc<SurfaceBridge<R>>, scale: f32) -> Self {
        Self { bridge, scale }
    }

    pub fn bridge(&self) -> &Arc<SurfaceBridge<R>> {
        &self.bridge
    }

    /// Render thread. Creates and sizes the surface as needed, then draws.
    pub fn draw_in_rect(&self, width: f32, height: f32) -> BridgeResult<Dispatch> {
        // Drawable sizes truncate, as the host computes them.
        let size = ((width * self.scale) as u32, (height * self.scale) as u32);

        let state = self.bridge.state();
        if matches!(state, SurfaceState::Uninitialized | SurfaceState::Destroyed) {
            self.bridge.on_surface_created()?;
        }
        if state.size() != Some(size) {
            self.bridge.on_surface_changed(size.0, size.1)?;
        }
        self.bridge.on_draw_frame()
    }

    /// UI thread. Touch locations arrive in points.
    pub fn touch(&self, raw: RawPointer) -> BridgeResult<Dispatch> {
        let scaled = RawPointer {
            x: raw.x * self.scale,
            y: raw.y * self.scale,
            ..raw
        };
        self.bridge.on_touch_event(scaled)
    }

    /// The GL context went away; the next draw re-creates the surface.
    pub fn context_lost(&self) -> BridgeResult<Dispatch> {
        self.bridge.on_surface_destroyed()
    }
}
