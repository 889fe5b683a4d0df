// Host-side tests for the petal field: determinism, bounds, recycling.

use app_core::petals::PetalField;
use glam::Vec2;
use std::time::Duration;

const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);
const FRAME: Duration = Duration::from_millis(16);

#[test]
fn field_spawns_the_requested_count() {
    let field = PetalField::new(24, BOUNDS, 7);
    assert_eq!(field.petals().len(), 24);
}

#[test]
fn same_seed_fields_evolve_identically() {
    let mut a = PetalField::new(24, BOUNDS, 7);
    let mut b = PetalField::new(24, BOUNDS, 7);
    for _ in 0..120 {
        a.tick(FRAME);
        b.tick(FRAME);
    }
    assert_eq!(a.petals(), b.petals());
}

#[test]
fn different_seeds_diverge() {
    let a = PetalField::new(24, BOUNDS, 7);
    let b = PetalField::new(24, BOUNDS, 8);
    assert_ne!(a.petals(), b.petals());
}

#[test]
fn petals_stay_inside_the_horizontal_bounds() {
    let mut field = PetalField::new(24, BOUNDS, 11);
    for _ in 0..600 {
        field.tick(Duration::from_millis(50));
        for p in field.petals() {
            assert!(
                p.pos.x >= -0.01 && p.pos.x <= BOUNDS.x + 0.01,
                "petal drifted out horizontally: x = {}",
                p.pos.x
            );
            assert!(
                p.pos.y <= BOUNDS.y + p.size,
                "petal fell past the recycle line: y = {}",
                p.pos.y
            );
        }
    }
}

#[test]
fn petals_leaving_the_bottom_respawn_above_the_top() {
    let mut field = PetalField::new(24, BOUNDS, 3);
    // one long stall pushes every petal past the bottom edge at once
    field.tick(Duration::from_secs(100));
    for p in field.petals() {
        assert!(p.pos.y < 0.0, "expected a respawn above the top, y = {}", p.pos.y);
    }
}

#[test]
fn resize_keeps_petals_inside_the_new_bounds() {
    let mut field = PetalField::new(24, BOUNDS, 5);
    for _ in 0..60 {
        field.tick(FRAME);
    }
    let narrow = Vec2::new(400.0, 600.0);
    field.resize(narrow);
    assert_eq!(field.bounds(), narrow);
    for p in field.petals() {
        assert!(
            p.pos.x >= -0.01 && p.pos.x <= narrow.x + 0.01,
            "petal outside resized bounds: x = {}",
            p.pos.x
        );
    }
    // a degenerate size is refused rather than collapsing the field
    field.resize(Vec2::new(0.0, 600.0));
    assert_eq!(field.bounds(), narrow);
}
