//! Renderer boundary
//!
//! The rendering engine is opaque to the bridge. It is reached only through
//! the four calls of [`Renderer`]. Engines that live in another library plug in
//! through [`RendererVTable`], wrapped by [`ForeignRenderer`].

use std::ffi::c_void;

use crate::error::RendererError;
use crate::touch::PointerEvent;

/// Calls the bridge makes into the rendering engine
///
/// Every call is synchronous. The bridge holds its state lock for the
/// duration of each call, so implementations must not call back into the
/// bridge.
pub trait Renderer: Send {
    /// Surface (re)created; GPU resources may be allocated.
    fn surface_ready(&mut self) -> Result<(), RendererError>;

    /// New surface size; applies before the next frame.
    fn viewport_resized(&mut self, width: u32, height: u32) -> Result<(), RendererError>;

    fn render_frame(&mut self) -> Result<(), RendererError>;

    fn pointer_event(&mut self, event: PointerEvent) -> Result<(), RendererError>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn surface_ready(&mut self) -> Result<(), RendererError> {
        (**self).surface_ready()
    }

    fn viewport_resized(&mut self, width: u32, height: u32) -> Result<(), RendererError> {
        (**self).viewport_resized(width, height)
    }

    fn render_frame(&mut self) -> Result<(), RendererError> {
        (**self).render_frame()
    }

    fn pointer_event(&mut self, event: PointerEvent) -> Result<(), RendererError> {
        (**self).pointer_event(event)
    }
}

pub type UserData = *mut c_void;

/// C function table supplied by an external engine.
///
/// Each entry returns `0` on success; any other value is a failure status.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct RendererVTable {
    pub user_data: UserData,
    pub surface_ready: extern "C" fn(UserData) -> i32,
    pub viewport_resized: extern "C" fn(UserData, u32, u32) -> i32,
    pub render_frame: extern "C" fn(UserData) -> i32,
    /// `kind` is `PointerKind as i32` (0 down, 1 up, 2 move)
    pub pointer_event: extern "C" fn(UserData, i32, i32, i32) -> i32,
    /// Called once when the bridge is dropped. May be null.
    pub release: Option<extern "C" fn(UserData)>,
}

/// [`Renderer`] backed by a foreign function table
pub struct ForeignRenderer {
    vtable: RendererVTable,
}

// The engine receives calls from whichever thread currently holds the bridge
// lock, never from two threads at once.
unsafe impl Send for ForeignRenderer {}

impl ForeignRenderer {
    /// # Safety
    ///
    /// Every function pointer must be valid for the lifetime of the renderer
    /// and accept `user_data`. The engine must tolerate being called from
    /// more than one thread, one call at a time.
    pub unsafe fn new(vtable: RendererVTable) -> Self {
        Self { vtable }
    }
}

fn check(status: i32) -> Result<(), RendererError> {
    match status {
        0 => Ok(()),
        code => Err(RendererError::Status(code)),
    }
}

impl Renderer for ForeignRenderer {
    fn surface_ready(&mut self) -> Result<(), RendererError> {
        check((self.vtable.surface_ready)(self.vtable.user_data))
    }

    fn viewport_resized(&mut self, width: u32, height: u32) -> Result<(), RendererError> {
        check((self.vtable.viewport_resized)(
            self.vtable.user_data,
            width,
            height,
        ))
    }

    fn render_frame(&mut self) -> Result<(), RendererError> {
        check((self.vtable.render_frame)(self.vtable.user_data))
    }

    fn pointer_event(&mut self, event: PointerEvent) -> Result<(), RendererError> {
        check((self.vtable.pointer_event)(
            self.vtable.user_data,
            event.kind as i32,
            event.x,
            event.y,
        ))
    }
}

impl Drop for ForeignRenderer {
    fn drop(&mut self) {
        if let Some(release) = self.vtable.release {
            release(self.vtable.user_data);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_engine {
    //! A fake C engine: records calls as strings behind its user-data pointer.

    use super::*;
    use std::sync::Mutex;

    pub struct Engine {
        pub calls: Mutex<Vec<String>>,
        pub fail_with: i32,
    }

    fn engine<'a>(data: UserData) -> &'a Engine {
        unsafe { &*(data as *const Engine) }
    }

    fn record(data: UserData, call: String) -> i32 {
        let engine = engine(data);
        engine.calls.lock().unwrap().push(call);
        engine.fail_with
    }

    extern "C" fn surface_ready(data: UserData) -> i32 {
        record(data, "surface_ready".into())
    }

    extern "C" fn viewport_resized(data: UserData, w: u32, h: u32) -> i32 {
        record(data, format!("viewport_resized({w},{h})"))
    }

    extern "C" fn render_frame(data: UserData) -> i32 {
        record(data, "render_frame".into())
    }

    extern "C" fn pointer_event(data: UserData, kind: i32, x: i32, y: i32) -> i32 {
        record(data, format!("pointer_event({kind},{x},{y})"))
    }

    extern "C" fn release(data: UserData) {
        record(data, "release".into());
    }

    /// The engine is leaked so it outlives the renderer's `release` call.
    pub fn vtable(fail_with: i32) -> (RendererVTable, &'static Engine) {
        let engine: &'static Engine = Box::leak(Box::new(Engine {
            calls: Mutex::new(Vec::new()),
            fail_with,
        }));
        let vtable = RendererVTable {
            user_data: engine as *const Engine as UserData,
            surface_ready,
            viewport_resized,
            render_frame,
            pointer_event,
            release: Some(release),
        };
        (vtable, engine)
    }
}
