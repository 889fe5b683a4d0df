// Host-side tests for the slot pose interpolator.

use app_core::transform::{slot_transform, SlotTransform, CENTER_POSE, LEFT_POSE, RIGHT_POSE};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn approx_pose(a: &SlotTransform, b: &SlotTransform) -> bool {
    approx(a.translate_x, b.translate_x)
        && approx(a.translate_z, b.translate_z)
        && approx(a.scale, b.scale)
        && approx(a.rotate_y, b.rotate_y)
        && approx(a.opacity, b.opacity)
}

#[test]
fn center_slot_at_rest_is_exactly_the_center_pose() {
    assert_eq!(slot_transform(0, 0.0), CENTER_POSE);
    assert_eq!(CENTER_POSE.scale, 1.0);
    assert_eq!(CENTER_POSE.opacity, 1.0);
    assert_eq!(CENTER_POSE.translate_x, 0.0);
}

#[test]
fn side_slots_at_rest_sit_on_their_base_poses() {
    assert!(approx_pose(&slot_transform(-1, 0.0), &LEFT_POSE));
    assert!(approx_pose(&slot_transform(1, 0.0), &RIGHT_POSE));
}

#[test]
fn side_poses_mirror_each_other() {
    assert_eq!(LEFT_POSE.translate_x, -RIGHT_POSE.translate_x);
    assert_eq!(LEFT_POSE.rotate_y, -RIGHT_POSE.rotate_y);
    assert_eq!(LEFT_POSE.scale, RIGHT_POSE.scale);
    assert_eq!(LEFT_POSE.opacity, RIGHT_POSE.opacity);
}

#[test]
fn opacity_and_scale_stay_in_range_over_the_whole_domain() {
    for slot in [-1i8, 0, 1] {
        let mut progress = -1.0f32;
        while progress <= 1.0 {
            let pose = slot_transform(slot, progress);
            assert!(
                (0.0..=1.0).contains(&pose.opacity),
                "opacity {} out of range at slot {slot} progress {progress}",
                pose.opacity
            );
            assert!(
                pose.scale > 0.0,
                "scale {} not positive at slot {slot} progress {progress}",
                pose.scale
            );
            progress += 0.05;
        }
    }
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(slot_transform(0, 5.0), slot_transform(0, 1.0));
    assert_eq!(slot_transform(0, -5.0), slot_transform(0, -1.0));
}

#[test]
fn next_slot_blends_halfway_through_the_right_zone() {
    // slot 1 at progress -0.25 -> offset 0.75 -> t = 0.5
    let pose = slot_transform(1, -0.25);
    assert!(approx(pose.opacity, (CENTER_POSE.opacity + RIGHT_POSE.opacity) * 0.5));
    assert!(approx(pose.scale, (CENTER_POSE.scale + RIGHT_POSE.scale) * 0.5));
    assert!(approx(
        pose.translate_x,
        (CENTER_POSE.translate_x + RIGHT_POSE.translate_x) * 0.5
    ));
}

#[test]
fn poses_are_continuous_across_the_zone_boundaries() {
    for (a, b) in [(0.49f32, 0.51f32), (-0.49, -0.51)] {
        let pa = slot_transform(0, a);
        let pb = slot_transform(0, b);
        assert!(
            (pa.opacity - pb.opacity).abs() < 0.05,
            "opacity jumps across the boundary: {} vs {}",
            pa.opacity,
            pb.opacity
        );
        assert!((pa.scale - pb.scale).abs() < 0.05);
    }
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let a = slot_transform(1, -0.37);
    let b = slot_transform(1, -0.37);
    assert_eq!(a, b);
}
