//! Bridge between a platform surface (GLSurfaceView, GLKView, ...) and an
//! external rendering engine.
//!
//! Platform callbacks go in through [`SurfaceBridge`] (or the C and JNI entry
//! points below); ordered, validated calls come out through [`Renderer`].

pub mod bridge;
pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod logging;
pub mod renderer;
pub mod surface;
pub mod touch;

#[cfg(target_os = "android")]
mod jni;

pub use bridge::{Dispatch, SurfaceBridge};
pub use config::BridgeConfig;
pub use error::{BridgeError, BridgeResult, RendererError};
pub use events::SurfaceEvent;
pub use host::DrawDrivenHost;
pub use renderer::{ForeignRenderer, Renderer, RendererVTable};
pub use surface::SurfaceState;
pub use touch::{PointerEvent, PointerKind, RawAction, RawPointer};

// ============================================================================
// C ABI
// ============================================================================

/// Callback forwarded to the renderer
pub const STATUS_FORWARDED: i32 = 0;
/// Callback deliberately dropped
pub const STATUS_ABSORBED: i32 = 1;
/// Null handle passed in
pub const STATUS_NULL_HANDLE: i32 = -1;

/// Opaque handle for FFI
pub type BridgeHandle = *mut SurfaceBridge<ForeignRenderer>;

pub(crate) fn bridge_ref<'a>(
    handle: BridgeHandle,
) -> Option<&'a SurfaceBridge<ForeignRenderer>> {
    if handle.is_null() {
        return None;
    }
    Some(unsafe { &*handle })
}

fn status(result: BridgeResult<Dispatch>) -> i32 {
    match result {
        Ok(Dispatch::Forwarded) => STATUS_FORWARDED,
        Ok(Dispatch::Absorbed) => STATUS_ABSORBED,
        Err(e) => e.status_code(),
    }
}

fn call(
    handle: BridgeHandle,
    f: impl FnOnce(&SurfaceBridge<ForeignRenderer>) -> BridgeResult<Dispatch>,
) -> i32 {
    match bridge_ref(handle) {
        Some(bridge) => status(f(bridge)),
        None => STATUS_NULL_HANDLE,
    }
}

/// Desktop hosts read `SURFACE_BRIDGE_LOG` and `SURFACE_BRIDGE_SCALE`.
fn base_config() -> BridgeConfig {
    #[cfg(not(any(target_os = "android", target_os = "ios")))]
    {
        BridgeConfig::from_env()
    }
    #[cfg(any(target_os = "android", target_os = "ios"))]
    {
        BridgeConfig::default()
    }
}

/// Create a bridge around an engine's function table.
/// `scale` multiplies touch coordinates (1.0 when the platform reports pixels).
/// Pass 0.0 to keep the configured scale.
///
/// The engine must honor the contract of [`ForeignRenderer::new`].
#[no_mangle]
pub extern "C" fn surface_bridge_new(vtable: RendererVTable, scale: f32) -> BridgeHandle {
    let mut config = base_config();
    logging::init(&config);
    if scale != 0.0 {
        config = config.with_scale_factor(scale);
    }

    let renderer = unsafe { ForeignRenderer::new(vtable) };
    let bridge = Box::new(SurfaceBridge::with_config(renderer, &config));
    log::info!("surface_bridge_new: scale {}", config.scale_factor);
    Box::into_raw(bridge)
}

/// Render thread, from `Renderer.onSurfaceCreated()`
#[no_mangle]
pub extern "C" fn surface_bridge_surface_created(handle: BridgeHandle) -> i32 {
    call(handle, |bridge| bridge.on_surface_created())
}

/// Render thread, from `Renderer.onSurfaceChanged()`
#[no_mangle]
pub extern "C" fn surface_bridge_surface_changed(
    handle: BridgeHandle,
    width: u32,
    height: u32,
) -> i32 {
    call(handle, |bridge| bridge.on_surface_changed(width, height))
}

/// Render thread, from `Renderer.onDrawFrame()`
#[no_mangle]
pub extern "C" fn surface_bridge_draw_frame(handle: BridgeHandle) -> i32 {
    call(handle, |bridge| bridge.on_draw_frame())
}

/// UI thread. `action` is an Android `MotionEvent` action code.
#[no_mangle]
pub extern "C" fn surface_bridge_touch(
    handle: BridgeHandle,
    action: i32,
    x: f32,
    y: f32,
) -> i32 {
    call(handle, |bridge| {
        bridge.on_touch_event(RawPointer::new(action, x, y))
    })
}

/// Optional teardown notification
#[no_mangle]
pub extern "C" fn surface_bridge_surface_destroyed(handle: BridgeHandle) -> i32 {
    call(handle, |bridge| bridge.on_surface_destroyed())
}

/// 0 uninitialized, 1 created, 2 sized, 3 destroyed
#[no_mangle]
pub extern "C" fn surface_bridge_state(handle: BridgeHandle) -> i32 {
    match bridge_ref(handle) {
        Some(bridge) => bridge.state().code(),
        None => STATUS_NULL_HANDLE,
    }
}

/// Clean up the bridge; the engine's `release` callback runs here.
#[no_mangle]
pub extern "C" fn surface_bridge_destroy(handle: BridgeHandle) {
    if handle.is_null() {
        return;
    }
    // Reconstruct the Box to drop it properly
    let _ = unsafe { Box::from_raw(handle) };
    log::info!("surface_bridge_destroy: cleaned up");
}
