//! Platform-facing surface events
//!
//! Hosts that funnel every callback through one entry point build a
//! [`SurfaceEvent`] and hand it to [`SurfaceBridge::handle`](crate::SurfaceBridge::handle).

use crate::touch::RawPointer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    Created,
    Changed { width: u32, height: u32 },
    DrawFrame,
    Touch(RawPointer),
    Destroyed,
}

impl From<RawPointer> for SurfaceEvent {
    fn from(raw: RawPointer) -> Self {
        SurfaceEvent::Touch(raw)
    }
}
