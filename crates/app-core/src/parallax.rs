//! Damped spring that trails the pointer for layered hero art.

use crate::constants::{
    PARALLAX_DAMPING_RATIO, PARALLAX_LAYER_RANGE_PX, PARALLAX_MAX_STEP_PER_SEC, PARALLAX_OMEGA,
};
use glam::Vec2;

/// Spring state in normalized \[0, 1\] uv space.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerSpring {
    pos: Vec2,
    vel: Vec2,
    initialized: bool,
}

impl PointerSpring {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Integrate one step toward the latest pointer uv. The first sample
    /// snaps without overshoot; afterwards motion is spring-driven and
    /// capped per second so a teleporting pointer cannot fling the layers.
    pub fn step(&mut self, target_uv: Vec2, dt_sec: f32) {
        if !self.initialized {
            self.pos = target_uv;
            self.vel = Vec2::ZERO;
            self.initialized = true;
            return;
        }
        let k = PARALLAX_OMEGA * PARALLAX_OMEGA;
        let c = 2.0 * PARALLAX_OMEGA * PARALLAX_DAMPING_RATIO;
        let accel = (target_uv - self.pos) * k - self.vel * c;
        self.vel += accel * dt_sec;

        let mut next = self.pos + self.vel * dt_sec;
        let step = next - self.pos;
        let len = step.length();
        let max_step = PARALLAX_MAX_STEP_PER_SEC * dt_sec;
        if len > max_step {
            next = self.pos + step * (max_step / (len + 1e-6));
        }
        self.pos = next.clamp(Vec2::ZERO, Vec2::ONE);
    }

    /// Pixel offset for a layer at the given depth (0 pinned, 1 full range).
    /// Layers drift opposite the pointer, like a scene seen past a window.
    pub fn layer_offset(&self, depth: f32) -> Vec2 {
        (Vec2::splat(0.5) - self.pos) * (PARALLAX_LAYER_RANGE_PX * depth)
    }
}
