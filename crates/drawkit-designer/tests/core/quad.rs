use drawkit_core::GeometryError;
use drawkit_designer::model::{DesignQuad, DesignerShape, Point, Size};
use proptest::prelude::*;

fn close(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

#[test]
fn test_side_index_out_of_range() {
    let quad = DesignQuad::default();
    assert_eq!(quad.side(4), Err(GeometryError::SideIndexOutOfRange { index: 4 }));
    assert!(close(quad.side_length(0).unwrap(), 300.0, 1e-9));
    assert!(close(quad.side_length(1).unwrap(), 200.0, 1e-9));
}

#[test]
fn test_degenerate_perspective_falls_back_to_rectangle() {
    let mut quad = DesignQuad::new(Point::ORIGIN, Size::new(20.0, 20.0));
    quad.perspective = Point::new(-90.0, 90.0);
    assert_eq!(quad.try_points(), Err(GeometryError::ParallelLines));

    let points = quad.points();
    assert_eq!(points.len(), 4);
    assert!(points[0].distance_to(&Point::new(-10.0, -10.0)) < 1e-9);
    assert!(!quad.contains_point(Point::ORIGIN, 0.0));
}

#[test]
fn test_area_matches_shoelace() {
    let mut quad = DesignQuad::new(Point::new(5.0, -3.0), Size::new(100.0, 60.0));
    assert!(close(quad.area().unwrap(), 6_000.0, 1e-6));

    quad.perspective = Point::new(30.0, 20.0);
    quad.shear = Point::new(0.2, 0.0);
    let points = quad.try_points().unwrap();
    let twice: f64 = (0..4)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % 4];
            a.x * b.y - b.x * a.y
        })
        .sum();
    assert!(close(quad.area().unwrap(), twice.abs() / 2.0, 1e-6));
}

fn perspective_angle() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(-90.0),
        1 => Just(90.0),
        6 => -90.0f64..=90.0,
    ]
}

fn shear_factor() -> impl Strategy<Value = f64> {
    prop_oneof![
        1 => Just(-3.0),
        1 => Just(3.0),
        6 => -3.0f64..=3.0,
    ]
}

#[test]
fn test_full_perspective_round_trips_on_either_axis() {
    for perspective in [
        Point::new(90.0, 0.0),
        Point::new(-90.0, 0.0),
        Point::new(0.0, 90.0),
        Point::new(0.0, -90.0),
        Point::new(-90.0, 45.0),
    ] {
        let quad = DesignQuad {
            rotation: 30.0,
            perspective,
            ..DesignQuad::default()
        };
        let corners = quad.try_points().unwrap();

        let mut rebuilt = DesignQuad {
            size: Size::new(1.0, 1.0),
            perspective: Point::ORIGIN,
            ..quad.clone()
        };
        rebuilt.set_points(&corners).unwrap();
        assert!(rebuilt.perspective.distance_to(&perspective) < 1e-6, "{}", rebuilt.perspective);
        assert!(close(rebuilt.size.width, 300.0, 1e-6));
        assert!(close(rebuilt.size.height, 200.0, 1e-6));
    }
}

proptest! {
    #[test]
    fn prop_points_round_trip(
        cx in -1000.0f64..1000.0,
        cy in -1000.0f64..1000.0,
        width in 10.0f64..500.0,
        height in 10.0f64..500.0,
        scale in 0.5f64..4.0,
        rotation in -180.0f64..180.0,
        shear_x in shear_factor(),
        shear_y in shear_factor(),
        px in perspective_angle(),
        py in perspective_angle(),
    ) {
        prop_assume!((1.0 - shear_x * shear_y).abs() > 1e-3);
        let quad = DesignQuad {
            center: Point::new(cx, cy),
            size: Size::new(width, height),
            scale,
            rotation,
            shear: Point::new(shear_x, shear_y),
            perspective: Point::new(px, py),
        };
        let corners = quad.try_points();
        prop_assume!(corners.is_ok());
        let corners = corners.unwrap();

        let mut rebuilt = DesignQuad {
            size: Size::new(1.0, 1.0),
            perspective: Point::ORIGIN,
            ..quad.clone()
        };
        rebuilt.set_points(&corners).unwrap();

        prop_assert!(close(rebuilt.perspective.x, px, 1e-6), "{} vs {}", rebuilt.perspective, quad.perspective);
        prop_assert!(close(rebuilt.perspective.y, py, 1e-6));
        prop_assert!(close(rebuilt.size.width, width, 1e-6));
        prop_assert!(close(rebuilt.size.height, height, 1e-6));

        // Near-parallel edges push corners far out, so compare relatively.
        for (a, b) in rebuilt.try_points().unwrap().iter().zip(corners.iter()) {
            let reach = b.distance_to(&Point::ORIGIN).max(1.0);
            prop_assert!(a.distance_to(b) < 1e-6 * reach);
        }
    }
}
