//! Pointer input normalization
//!
//! Converts raw platform touch records into canonical [`PointerEvent`]s with
//! integer surface pixels. Pure functions only; safe to call from any thread.

/// Android `MotionEvent.ACTION_DOWN`
pub const ACTION_DOWN: i32 = 0;
/// Android `MotionEvent.ACTION_UP`
pub const ACTION_UP: i32 = 1;
/// Android `MotionEvent.ACTION_MOVE`
pub const ACTION_MOVE: i32 = 2;

/// Action carried by a raw platform pointer record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawAction {
    Down,
    Up,
    Move,
    /// Hover, cancel, secondary pointers and anything else the bridge ignores
    Other(i32),
}

impl From<i32> for RawAction {
    /// Decodes the unmasked Android action code. Secondary pointer actions
    /// carry the pointer index in the high bits and stay `Other`.
    fn from(value: i32) -> Self {
        match value {
            ACTION_DOWN => RawAction::Down,
            ACTION_UP => RawAction::Up,
            ACTION_MOVE => RawAction::Move,
            other => RawAction::Other(other),
        }
    }
}

impl RawAction {
    /// Decodes the action names used by string-typed hosts ("down", "up", "move").
    pub fn from_name(name: &str) -> Self {
        match name {
            "down" => RawAction::Down,
            "up" => RawAction::Up,
            "move" => RawAction::Move,
            _ => RawAction::Other(-1),
        }
    }
}

/// Raw pointer record as delivered by the platform
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawPointer {
    pub action: RawAction,
    pub x: f32,
    pub y: f32,
}

impl RawPointer {
    pub fn new(action: impl Into<RawAction>, x: f32, y: f32) -> Self {
        Self {
            action: action.into(),
            x,
            y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum PointerKind {
    Down = 0,
    Up = 1,
    Move = 2,
}

/// Canonical pointer event handed to the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: i32,
    pub y: i32,
}

/// Normalize a raw pointer record.
///
/// Returns `None` for unmapped actions and for coordinates that are not
/// finite or do not fit an `i32` pixel. Coordinates are scaled, then rounded half away from zero; they are
/// never clamped to the surface.
pub fn normalize(raw: &RawPointer, scale: f32) -> Option<PointerEvent> {
    let kind = match raw.action {
        RawAction::Down => PointerKind::Down,
        RawAction::Up => PointerKind::Up,
        RawAction::Move => PointerKind::Move,
        RawAction::Other(code) => {
            log::trace!("ignoring pointer action {}", code);
            return None;
        }
    };

    let x = to_pixel(raw.x * scale)?;
    let y = to_pixel(raw.y * scale)?;
    Some(PointerEvent { kind, x, y })
}

fn to_pixel(value: f32) -> Option<i32> {
    if !value.is_finite() {
        log::trace!("ignoring non-finite pointer coordinate {}", value);
        return None;
    }
    // f32::round rounds half away from zero
    let rounded = value.round();
    // `as` would saturate; i32::MAX itself is not representable in f32.
    if !(i32::MIN as f32..i32::MAX as f32).contains(&rounded) {
        log::trace!("ignoring pointer coordinate {} outside the pixel range", value);
        return None;
    }
    Some(rounded as i32)
}
