//! Pose interpolation for the three visible carousel slots.
//!
//! A slot's pose is always computed from the absolute `(slot, progress)`
//! pair, never incrementally, so it can be re-evaluated every animation
//! frame without accumulating error.

use crate::constants::{
    SIDE_OPACITY, SIDE_ROTATE_Y_DEG, SIDE_SCALE, SIDE_TRANSLATE_X_PCT, SIDE_TRANSLATE_Z_PX,
};

/// Renderable pose for one carousel slot.
///
/// `translate_x` is a percentage of the slot's own width, `translate_z` is
/// in pixels, `rotate_y` in degrees. The rendering layer applies these
/// verbatim; nothing here is retained between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotTransform {
    pub translate_x: f32,
    pub translate_z: f32,
    pub scale: f32,
    pub rotate_y: f32,
    pub opacity: f32,
}

/// Resting pose of the centered slot.
pub const CENTER_POSE: SlotTransform = SlotTransform {
    translate_x: 0.0,
    translate_z: 0.0,
    scale: 1.0,
    rotate_y: 0.0,
    opacity: 1.0,
};

/// Resting pose of the previous-item slot.
pub const LEFT_POSE: SlotTransform = SlotTransform {
    translate_x: -SIDE_TRANSLATE_X_PCT,
    translate_z: SIDE_TRANSLATE_Z_PX,
    scale: SIDE_SCALE,
    rotate_y: SIDE_ROTATE_Y_DEG,
    opacity: SIDE_OPACITY,
};

/// Resting pose of the next-item slot, mirroring [`LEFT_POSE`].
pub const RIGHT_POSE: SlotTransform = SlotTransform {
    translate_x: SIDE_TRANSLATE_X_PCT,
    translate_z: SIDE_TRANSLATE_Z_PX,
    scale: SIDE_SCALE,
    rotate_y: -SIDE_ROTATE_Y_DEG,
    opacity: SIDE_OPACITY,
};

#[inline]
fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

impl SlotTransform {
    /// Field-wise linear blend; every channel interpolates independently.
    pub fn blend(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            translate_x: lerp(from.translate_x, to.translate_x, t),
            translate_z: lerp(from.translate_z, to.translate_z, t),
            scale: lerp(from.scale, to.scale, t),
            rotate_y: lerp(from.rotate_y, to.rotate_y, t),
            opacity: lerp(from.opacity, to.opacity, t),
        }
    }
}

/// Pose for a relative slot (-1 previous, 0 current, +1 next) under the
/// given drag progress.
///
/// Three-zone piecewise interpolation: the effective offset `slot + progress`
/// blends left-base into center-base over \[-1, -0.5\], mirrors that blend
/// from center-base to right-base over \[0.5, 1\], and holds the center base
/// in between. Keeping the middle zone flat leaves the centered card
/// visually stable near rest while the crossfade happens at the boundaries.
pub fn slot_transform(slot: i8, progress: f32) -> SlotTransform {
    let progress = progress.clamp(-1.0, 1.0);
    let offset = slot as f32 + progress;
    if offset <= -0.5 {
        let t = ((offset + 1.0) / 0.5).clamp(0.0, 1.0);
        SlotTransform::blend(&LEFT_POSE, &CENTER_POSE, t)
    } else if offset >= 0.5 {
        let t = ((offset - 0.5) / 0.5).clamp(0.0, 1.0);
        SlotTransform::blend(&CENTER_POSE, &RIGHT_POSE, t)
    } else {
        CENTER_POSE
    }
}
