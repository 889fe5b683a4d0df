//! Drifting cherry-blossom petals for the hero backdrop.
//!
//! Deterministic per seed: two fields built with the same seed and fed the
//! same ticks evolve identically, which keeps the effect testable.

use crate::constants::{
    PETAL_FALL_SPEED_MAX, PETAL_FALL_SPEED_MIN, PETAL_RESPAWN_MARGIN, PETAL_SIZE_MAX,
    PETAL_SIZE_MIN, PETAL_SPIN_RATE_MAX_DEG, PETAL_SWAY_AMPLITUDE_MAX, PETAL_SWAY_AMPLITUDE_MIN,
    PETAL_SWAY_RATE_MAX, PETAL_SWAY_RATE_MIN,
};
use glam::Vec2;
use rand::prelude::*;
use std::time::Duration;

/// One petal's kinematic state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Petal {
    /// Sway centerline; the petal oscillates either side of it.
    pub anchor_x: f32,
    pub pos: Vec2,
    pub fall_speed: f32,
    pub sway_amplitude: f32,
    pub sway_rate: f32,
    pub sway_phase: f32,
    pub spin_deg: f32,
    pub spin_rate_deg: f32,
    pub size: f32,
}

/// A bounded field of petals with a per-instance seeded generator.
#[derive(Debug)]
pub struct PetalField {
    petals: Vec<Petal>,
    rng: StdRng,
    bounds: Vec2,
}

impl PetalField {
    /// `bounds` is the layer's width/height in pixels.
    pub fn new(count: usize, bounds: Vec2, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let petals = (0..count)
            .map(|_| spawn(&mut rng, bounds, true))
            .collect::<Vec<_>>();
        Self { petals, rng, bounds }
    }

    pub fn petals(&self) -> &[Petal] {
        &self.petals
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Rescale the field to a new layer size without restarting it.
    pub fn resize(&mut self, bounds: Vec2) {
        if bounds.x <= 0.0 || bounds.y <= 0.0 {
            return;
        }
        let scale_x = bounds.x / self.bounds.x.max(1.0);
        for p in &mut self.petals {
            // rescale the anchor, keeping the full sway arc inside the new width
            let max_anchor = (bounds.x - p.sway_amplitude).max(p.sway_amplitude);
            p.anchor_x = (p.anchor_x * scale_x).clamp(p.sway_amplitude, max_anchor);
            p.pos.x = p.anchor_x + p.sway_phase.sin() * p.sway_amplitude;
        }
        self.bounds = bounds;
    }

    /// Advance fall, sway and spin; petals leaving the bottom edge respawn
    /// above the top with fresh parameters.
    pub fn tick(&mut self, dt: Duration) {
        let dt_sec = dt.as_secs_f32();
        for p in &mut self.petals {
            p.sway_phase += p.sway_rate * dt_sec;
            p.pos.y += p.fall_speed * dt_sec;
            p.pos.x = p.anchor_x + p.sway_phase.sin() * p.sway_amplitude;
            p.spin_deg += p.spin_rate_deg * dt_sec;
            if p.pos.y > self.bounds.y + p.size {
                *p = spawn(&mut self.rng, self.bounds, false);
            }
        }
    }
}

fn spawn(rng: &mut StdRng, bounds: Vec2, anywhere: bool) -> Petal {
    let sway_amplitude = rng.gen_range(PETAL_SWAY_AMPLITUDE_MIN..PETAL_SWAY_AMPLITUDE_MAX);
    // keep the full sway arc inside the horizontal bounds
    let anchor_x = if bounds.x > sway_amplitude * 2.0 {
        rng.gen_range(sway_amplitude..bounds.x - sway_amplitude)
    } else {
        bounds.x * 0.5
    };
    let size = rng.gen_range(PETAL_SIZE_MIN..PETAL_SIZE_MAX);
    let y = if anywhere {
        rng.gen_range(-PETAL_RESPAWN_MARGIN..bounds.y.max(1.0))
    } else {
        -(size + rng.gen_range(0.0..PETAL_RESPAWN_MARGIN))
    };
    let sway_phase = rng.gen_range(0.0..std::f32::consts::TAU);
    Petal {
        anchor_x,
        pos: Vec2::new(anchor_x + sway_phase.sin() * sway_amplitude, y),
        fall_speed: rng.gen_range(PETAL_FALL_SPEED_MIN..PETAL_FALL_SPEED_MAX),
        sway_amplitude,
        sway_rate: rng.gen_range(PETAL_SWAY_RATE_MIN..PETAL_SWAY_RATE_MAX),
        sway_phase,
        spin_deg: rng.gen_range(0.0..360.0),
        spin_rate_deg: rng.gen_range(-PETAL_SPIN_RATE_MAX_DEG..PETAL_SPIN_RATE_MAX_DEG),
        size,
    }
}
