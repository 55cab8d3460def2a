//! Surface bridge
//!
//! Owns the [`SurfaceState`] and the renderer behind a single mutex and turns
//! platform callbacks into ordered renderer calls. The render thread drives
//! the lifecycle entry points; the UI thread drives `on_touch_event`. Share one
//! bridge between both (e.g. through an `Arc`).

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::BridgeConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::events::SurfaceEvent;
use crate::renderer::Renderer;
use crate::surface::{Notification, SurfaceState};
use crate::touch::{self, RawPointer};

/// Outcome of a platform callback that did not fail
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Exactly one renderer call was made
    Forwarded,
    /// Deliberately dropped (no surface yet, unmapped action, teardown)
    Absorbed,
}

struct Shared<R> {
    state: SurfaceState,
    renderer: R,
}

pub struct SurfaceBridge<R: Renderer> {
    shared: Mutex<Shared<R>>,
    scale: f32,
}

impl<R: Renderer> SurfaceBridge<R> {
    pub fn new(renderer: R) -> Self {
        Self::with_config(renderer, &BridgeConfig::default())
    }

    pub fn with_config(renderer: R, config: &BridgeConfig) -> Self {
        Self {
            shared: Mutex::new(Shared {
                state: SurfaceState::Uninitialized,
                renderer,
            }),
            scale: config.scale_factor,
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SurfaceState {
        self.lock().state
    }

    pub fn on_surface_created(&self) -> BridgeResult<Dispatch> {
        let mut shared = self.lock();
        if shared.state != SurfaceState::Uninitialized {
            log::info!("surface re-created from {:?}", shared.state);
        } else {
            log::info!("surface created");
        }
        let notification = shared.state.create();
        shared.deliver(notification)
    }

    pub fn on_surface_changed(&self, width: u32, height: u32) -> BridgeResult<Dispatch> {
        let mut shared = self.lock();
        let notification = match shared.state.resize(width, height) {
            Ok(notification) => notification,
            Err(err) => {
                log::warn!("rejecting surface change: {}", err);
                return Err(err);
            }
        };
        log::info!("surface changed: {}x{}", width, height);
        shared.deliver(notification)
    }

    pub fn on_draw_frame(&self) -> BridgeResult<Dispatch> {
        let mut shared = self.lock();
        match shared.state.frame() {
            Some(notification) => shared.deliver(notification),
            None => {
                log::trace!("frame absorbed in state {:?}", shared.state);
                Ok(Dispatch::Absorbed)
            }
        }
    }

    pub fn on_touch_event(&self, raw: RawPointer) -> BridgeResult<Dispatch> {
        // Normalizing touches no shared state, so do it before taking the lock.
        let Some(event) = touch::normalize(&raw, self.scale) else {
            return Ok(Dispatch::Absorbed);
        };

        let mut shared = self.lock();
        match shared.state.pointer(event) {
            Some(notification) => {
                log::debug!("pointer {:?} at ({}, {})", event.kind, event.x, event.y);
                shared.deliver(notification)
            }
            None => {
                log::trace!("pointer absorbed in state {:?}", shared.state);
                Ok(Dispatch::Absorbed)
            }
        }
    }

    /// Optional teardown. Platforms that never report it simply never call it.
    pub fn on_surface_destroyed(&self) -> BridgeResult<Dispatch> {
        let mut shared = self.lock();
        log::info!("surface destroyed");
        shared.state.destroy();
        Ok(Dispatch::Absorbed)
    }

    /// Single entry point routing each event to its callback
    pub fn handle(&self, event: SurfaceEvent) -> BridgeResult<Dispatch> {
        match event {
            SurfaceEvent::Created => self.on_surface_created(),
            SurfaceEvent::Changed { width, height } => self.on_surface_changed(width, height),
            SurfaceEvent::DrawFrame => self.on_draw_frame(),
            SurfaceEvent::Touch(raw) => self.on_touch_event(raw),
            SurfaceEvent::Destroyed => self.on_surface_destroyed(),
        }
    }

    // A renderer that panicked mid-call leaves the state fully written, so a
    // poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, Shared<R>> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Renderer> Shared<R> {
    fn deliver(&mut self, notification: Notification) -> BridgeResult<Dispatch> {
        let (call, result) = match notification {
            Notification::SurfaceReady => ("surface_ready", self.renderer.surface_ready()),
            Notification::ViewportResized { width, height } => (
                "viewport_resized",
                self.renderer.viewport_resized(width, height),
            ),
            Notification::FrameTick => ("render_frame", self.renderer.render_frame()),
            Notification::Pointer(event) => ("pointer_event", self.renderer.pointer_event(event)),
        };

        result.map(|()| Dispatch::Forwarded).map_err(|source| {
            log::error!("renderer {} failed: {}", call, source);
            BridgeError::renderer(call, source)
        })
    }
}
