use splinetime_animation_core::{
    math::{AxisAngle, Quaternion, Vec3},
    script::{parse_keyframe_script, ScriptError},
};

#[test]
fn parses_orbit_fixture() {
    let script = splinetime_test_fixtures::animations::script("orbit").expect("load orbit");
    let set = parse_keyframe_script(&script).expect("parse orbit");

    assert_eq!(set.num_frames, 30);
    assert_eq!(set.keyframes, vec![0, 10, 20]);
    assert_eq!(set.translations[10], Vec3::new(3.0, 2.0, 0.0));
    assert_eq!(set.scales[20], Vec3::new(0.5, 0.5, 0.5));

    let expected =
        Quaternion::from_axis_angle(AxisAngle::new(Vec3::new(0.0, 1.0, 0.0), 90.0)).normalized();
    assert_eq!(set.rotations[10], expected);

    // Non-keyframe slots stay at their zero defaults until resolve.
    assert_eq!(set.translations[5], Vec3::default());
    assert_eq!(set.rotations[5], Quaternion::default());
}

#[test]
fn attribute_order_within_a_block_is_irrelevant() {
    let a = "4\nFrame 1\ntranslation 1 2 3\nscale 4 5 6\nrotation 0 1 0 45\n";
    let b = "4\nFrame 1\nrotation 0 1 0 45\nscale 4 5 6\ntranslation 1 2 3\n";
    let parsed_a = parse_keyframe_script(a).expect("parse a");
    let parsed_b = parse_keyframe_script(b).expect("parse b");
    assert_eq!(parsed_a, parsed_b);
}

#[test]
fn omitted_attributes_default_to_zero() {
    let set = parse_keyframe_script("3\nFrame 1\ntranslation 1 1 1\n").expect("parse");
    assert_eq!(set.keyframes, vec![1]);
    assert_eq!(set.translations[1], Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(set.scales[1], Vec3::default());
    assert_eq!(set.rotations[1], Quaternion::default());
}

#[test]
fn duplicate_frame_records_keep_file_order() {
    let set = parse_keyframe_script("5\nFrame 2\nFrame 2\nFrame 0\n").expect("parse");
    assert_eq!(set.keyframes, vec![2, 2, 0]);
}

#[test]
fn unknown_records_are_skipped() {
    let set = parse_keyframe_script("2\nFrame 0\ncolor 1 0 0\ntranslation 1 0 0\n").expect("parse");
    assert_eq!(set.translations[0], Vec3::new(1.0, 0.0, 0.0));
}

#[test]
fn rejects_empty_script() {
    assert!(matches!(
        parse_keyframe_script("  \n\n"),
        Err(ScriptError::Empty)
    ));
}

#[test]
fn rejects_attribute_before_frame() {
    assert!(matches!(
        parse_keyframe_script("10\ntranslation 1 2 3\n"),
        Err(ScriptError::AttributeBeforeFrame {
            record: "translation",
            ..
        })
    ));
}

#[test]
fn rejects_out_of_range_keyframe_index() {
    assert!(matches!(
        parse_keyframe_script("10\nFrame 10\n"),
        Err(ScriptError::FrameOutOfRange {
            index: 10,
            num_frames: 10,
            ..
        })
    ));
}

#[test]
fn rejects_malformed_numbers_and_short_records() {
    assert!(matches!(
        parse_keyframe_script("10\nFrame 0\nscale 1 two 3\n"),
        Err(ScriptError::InvalidNumber { .. })
    ));
    assert!(matches!(
        parse_keyframe_script("10\nFrame 0\nrotation 0 1 0\n"),
        Err(ScriptError::FieldCount {
            record: "rotation",
            expected: 4,
            ..
        })
    ));
}
