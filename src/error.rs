//! Error types for the surface bridge and the renderer boundary

use thiserror::Error;

use crate::surface::SurfaceState;

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Failure reported by the rendering engine on a boundary call
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RendererError {
    #[error("renderer returned status {0}")]
    Status(i32),

    #[error("renderer failed: {0}")]
    Failed(String),
}

/// Errors surfaced to the host platform
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("surface resized before it was created (state: {state:?})")]
    SurfaceNotCreated { state: SurfaceState },

    #[error("invalid viewport size {width}x{height}")]
    InvalidViewport { width: i64, height: i64 },

    #[error("renderer call `{call}` failed: {source}")]
    Renderer {
        call: &'static str,
        #[source]
        source: RendererError,
    },
}

impl BridgeError {
    pub fn renderer(call: &'static str, source: RendererError) -> Self {
        Self::Renderer { call, source }
    }

    /// Status code used by the C ABI. Always negative.
    pub fn status_code(&self) -> i32 {
        match self {
            Self::SurfaceNotCreated { .. } => -2,
            Self::InvalidViewport { .. } => -3,
            Self::Renderer { .. } => -4,
        }
    }
}
