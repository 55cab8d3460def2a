#![allow(non_snake_case)]

//! JNI entry points for `com.example.surfacebridge.BridgeNative`.
//!
//! The activity's `GLSurfaceView.Renderer` forwards its callbacks here and the
//! view's touch listener forwards `MotionEvent`s. Sequencing violations and
//! renderer failures are thrown back as `IllegalStateException`.

use jni::objects::JClass;
use jni::sys::{jboolean, jfloat, jint, jlong, JNI_TRUE};
use jni::JNIEnv;

use crate::surface::viewport_size;
use crate::{
    bridge_ref, surface_bridge_destroy, surface_bridge_new, surface_bridge_state, BridgeHandle,
    BridgeResult, Dispatch, ForeignRenderer, RawPointer, RendererVTable, SurfaceBridge,
};

fn dispatch<F>(env: &mut JNIEnv, handle: jlong, f: F)
where
    F: FnOnce(&SurfaceBridge<ForeignRenderer>) -> BridgeResult<Dispatch>,
{
    let Some(bridge) = bridge_ref(handle as BridgeHandle) else {
        log::warn!("JNI call with null bridge handle");
        return;
    };
    if let Err(e) = f(bridge) {
        if let Err(jni_err) = env.throw_new("java/lang/IllegalStateException", e.to_string()) {
            log::error!("failed to throw {}: {}", e, jni_err);
        }
    }
}

/// `vtable` is the address of a `RendererVTable` exported by the engine library.
#[no_mangle]
pub extern "system" fn Java_com_example_surfacebridge_BridgeNative_nativeCreate(
    _env: JNIEnv,
    _class: JClass,
    vtable: jlong,
    scale: jfloat,
) -> jlong {
    if vtable == 0 {
        log::error!("nativeCreate: null renderer vtable");
        return 0;
    }
    let vtable = unsafe { *(vtable as *const RendererVTable) };
    surface_bridge_new(vtable, scale) as jlong
}

#[no_mangle]
pub extern "system" fn Java_com_example_surfacebridge_BridgeNative_onSurfaceCreated(
    mut env: JNIEnv,
    _class: JClass,
    handle: jlong,
) {
    dispatch(&mut env, handle, |bridge| bridge.on_surface_created());
}

#[no_mangle]
pub extern "system" fn Java_com_example_surfacebridge_BridgeNative_onSurfaceChanged(
    mut env: JNIEnv,
    _class: JClass,
    handle: jlong,
    width: jint,
    height: jint,
) {
    dispatch(&mut env, handle, |bridge| {
        let (width, height) = viewport_size(width, height)?;
        bridge.on_surface_changed(width, height)
    });
}

#[no_mangle]
pub extern "system" fn Java_com_example_surfacebridge_BridgeNative_onDrawFrame(
    mut env: JNIEnv,
    _class: JClass,
    handle: jlong,
) {
    dispatch(&mut env, handle, |bridge| bridge.on_draw_frame());
}

/// Returns true so the view keeps receiving the gesture.
#[no_mangle]
pub extern "system" fn Java_com_example_surfacebridge_BridgeNative_onTouchEvent(
    mut env: JNIEnv,
    _class: JClass,
    handle: jlong,
    action: jint,
    x: jfloat,
    y: jfloat,
) -> jboolean {
    dispatch(&mut env, handle, |bridge| bridge.on_touch_event(RawPointer::new(action, x, y)));
    JNI_TRUE
}

#[no_mangle]
pub extern "system" fn Java_com_example_surfacebridge_BridgeNative_onSurfaceDestroyed(
    mut env: JNIEnv,
    _class: JClass,
    handle: jlong,
) {
    dispatch(&mut env, handle, |bridge| bridge.on_surface_destroyed());
}

#[no_mangle]
pub extern "system" fn Java_com_example_surfacebridge_BridgeNative_nativeState(
    _env: JNIEnv,
    _class: JClass,
    handle: jlong,
) -> jint {
    surface_bridge_state(handle as BridgeHandle)
}

#[no_mangle]
pub extern "system" fn Java_com_example_surfacebridge_BridgeNative_nativeDestroy(
    _env: JNIEnv,
    _class: JClass,
    handle: jlong,
) {
    surface_bridge_destroy(handle as BridgeHandle);
}
