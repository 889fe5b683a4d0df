use std::time::Duration;

// Interaction and animation tuning constants shared across the front-end.
// These express intended behavior (thresholds, clamp limits, spring rates)
// and keep magic numbers out of the code.

// Gesture recognition
pub const AXIS_LOCK_THRESHOLD_PX: f32 = 8.0; // movement before a drag commits to an axis
pub const DRAG_SENSITIVITY: f32 = 2.0; // progress per container-width of travel
pub const ADVANCE_DISTANCE_PX: f32 = 80.0; // release distance that commits a slide change
pub const ADVANCE_VELOCITY_PX_PER_MS: f32 = 0.5; // release speed that commits a slide change

// Side-slot pose (center slot is the identity)
pub const SIDE_TRANSLATE_X_PCT: f32 = 70.0; // percent of the slot's own width
pub const SIDE_TRANSLATE_Z_PX: f32 = -180.0; // pushed back into the scene
pub const SIDE_SCALE: f32 = 0.82;
pub const SIDE_ROTATE_Y_DEG: f32 = 32.0;
pub const SIDE_OPACITY: f32 = 0.5;

// Scroll-phase breakpoints (fractions of the viewer's height)
pub const PHASE_BREAK_EARLY: f32 = 0.3;
pub const PHASE_BREAK_MID: f32 = 0.6;
pub const PHASE_BREAK_LATE: f32 = 0.9;

// Timer-driven carousels
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_secs(6);

// Pointer parallax spring
pub const PARALLAX_OMEGA: f32 = 1.1; // natural frequency
pub const PARALLAX_DAMPING_RATIO: f32 = 0.5; // 0..1, critical at 1
pub const PARALLAX_MAX_STEP_PER_SEC: f32 = 0.50; // cap motion per second (in uv units)
pub const PARALLAX_LAYER_RANGE_PX: f32 = 36.0; // full-depth offset at the uv extremes

// Petal field
pub const PETAL_COUNT: usize = 24;
pub const PETAL_FALL_SPEED_MIN: f32 = 28.0; // px/sec
pub const PETAL_FALL_SPEED_MAX: f32 = 72.0;
pub const PETAL_SWAY_AMPLITUDE_MIN: f32 = 8.0; // px either side of the anchor
pub const PETAL_SWAY_AMPLITUDE_MAX: f32 = 26.0;
pub const PETAL_SWAY_RATE_MIN: f32 = 0.4; // rad/sec
pub const PETAL_SWAY_RATE_MAX: f32 = 1.4;
pub const PETAL_SPIN_RATE_MAX_DEG: f32 = 80.0; // deg/sec, either direction
pub const PETAL_SIZE_MIN: f32 = 10.0; // px
pub const PETAL_SIZE_MAX: f32 = 22.0;
pub const PETAL_RESPAWN_MARGIN: f32 = 40.0; // recycled petals restart this far above the top
