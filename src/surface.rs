//! Surface lifecycle state machine
//!
//! Pure transitions: each method updates the state and says which renderer
//! notification, if any, the transition must produce. The bridge applies these
//! under its lock and delivers the notification.

use crate::error::{BridgeError, BridgeResult};
use crate::touch::PointerEvent;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SurfaceState {
    #[default]
    Uninitialized,
    Created,
    Sized {
        width: u32,
        height: u32,
    },
    Destroyed,
}

/// Notification crossing the renderer boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notification {
    SurfaceReady,
    ViewportResized { width: u32, height: u32 },
    FrameTick,
    Pointer(PointerEvent),
}

impl SurfaceState {
    pub fn is_sized(&self) -> bool {
        matches!(self, SurfaceState::Sized { .. })
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        match *self {
            SurfaceState::Sized { width, height } => Some((width, height)),
            _ => None,
        }
    }

    /// Code reported over the C ABI
    pub fn code(&self) -> i32 {
        match self {
            SurfaceState::Uninitialized => 0,
            SurfaceState::Created => 1,
            SurfaceState::Sized { .. } => 2,
            SurfaceState::Destroyed => 3,
        }
    }

    /// Valid from every state. A repeat while `Created`/`Sized` is a forced
    /// re-initialization and drops the known size.
    pub fn create(&mut self) -> Notification {
        *self = SurfaceState::Created;
        Notification::SurfaceReady
    }

    pub fn resize(&mut self, width: u32, height: u32) -> BridgeResult<Notification> {
        match self {
            SurfaceState::Created | SurfaceState::Sized { .. } => {}
            SurfaceState::Uninitialized | SurfaceState::Destroyed => {
                return Err(BridgeError::SurfaceNotCreated { state: *self });
            }
        }
        if width == 0 || height == 0 {
            return Err(BridgeError::InvalidViewport {
                width: width.into(),
                height: height.into(),
            });
        }

        *self = SurfaceState::Sized { width, height };
        Ok(Notification::ViewportResized { width, height })
    }

    pub fn frame(&self) -> Option<Notification> {
        self.is_sized().then_some(Notification::FrameTick)
    }

    pub fn pointer(&self, event: PointerEvent) -> Option<Notification> {
        self.is_sized().then_some(Notification::Pointer(event))
    }

    pub fn destroy(&mut self) {
        *self = SurfaceState::Destroyed;
    }
}

/// Convert a signed platform size (e.g. a JNI `jint`), keeping negative
/// values in the error as the platform sent them.
pub fn viewport_size(width: i32, height: i32) -> BridgeResult<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(BridgeError::InvalidViewport {
            width: width.into(),
            height: height.into(),
        }),
    }
}
