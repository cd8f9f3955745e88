use drawkit_designer::angles::{adjust_rotation, angle_difference, wrap_degrees};
use drawkit_designer::model::Point;
use proptest::prelude::*;

#[test]
fn test_difference_across_branch_cut() {
    assert!((angle_difference(-170.0, 170.0) - 20.0).abs() < 1e-9);
    assert!((angle_difference(170.0, -170.0) + 20.0).abs() < 1e-9);
}

#[test]
fn test_difference_without_wrap() {
    assert_eq!(angle_difference(45.0, 10.0), 35.0);
    assert_eq!(angle_difference(-80.0, 80.0), -160.0);
}

#[test]
fn test_rotation_drag_across_branch_cut_stays_small() {
    let rotation = adjust_rotation(
        0.0,
        Point::ORIGIN,
        Point::new(-1.0, 0.01),
        Point::new(-1.0, -0.01),
    );
    assert!((rotation - 1.145877).abs() < 1e-3, "rotation {}", rotation);
}

#[test]
fn test_rotation_quarter_turn() {
    let rotation = adjust_rotation(
        10.0,
        Point::new(5.0, 5.0),
        Point::new(15.0, 5.0),
        Point::new(5.0, 15.0),
    );
    assert!((rotation - 100.0).abs() < 1e-9);
}

proptest! {
    #[test]
    fn prop_wrap_range(degrees in -10_000.0f64..10_000.0) {
        let wrapped = wrap_degrees(degrees);
        prop_assert!((-180.0..180.0).contains(&wrapped));

        let turns = (degrees - wrapped) / 360.0;
        prop_assert!((turns - turns.round()).abs() < 1e-9);
    }
}
