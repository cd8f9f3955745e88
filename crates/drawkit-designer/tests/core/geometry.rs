use drawkit_core::GeometryError;
use drawkit_designer::line::{Line, Segment};
use drawkit_designer::model::centered_points;
use drawkit_designer::model::{
    DesignEllipse, DesignPolygon, DesignRegularPolygon, DesignerShape, Point,
};

#[test]
fn test_line_intersection() {
    let a = Line::through(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    let b = Line::through(Point::new(0.0, 10.0), Point::new(10.0, 0.0));
    let crossing = a.intersect(&b).unwrap();
    assert!(crossing.distance_to(&Point::new(5.0, 5.0)) < 1e-9);
}

#[test]
fn test_parallel_lines_do_not_intersect() {
    let a = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 2.0));
    let b = Line::new(Point::new(3.0, 0.0), Point::new(-2.0, -4.0));
    assert_eq!(a.intersect(&b), Err(GeometryError::ParallelLines));
}

#[test]
fn test_segment_distance_is_clamped() {
    let segment = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    assert!((segment.distance_to_point(Point::new(5.0, 3.0)) - 3.0).abs() < 1e-9);
    assert!((segment.distance_to_point(Point::new(13.0, 4.0)) - 5.0).abs() < 1e-9);
    assert!((segment.length() - 10.0).abs() < 1e-9);
}

#[test]
fn test_centroid_of_triangle_is_perimeter_weighted() {
    let (center, relative) = centered_points(&[
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 3.0),
    ]);
    // Edge midpoints (2,0), (2,1.5), (0,1.5) weighted by 4, 5, 3
    let expected = Point::new((8.0 + 10.0) / 12.0, (7.5 + 4.5) / 12.0);
    assert!(center.distance_to(&expected) < 1e-9);
    assert_eq!(relative.len(), 3);
    assert!((relative[0] + center).distance_to(&Point::ORIGIN) < 1e-9);
}

#[test]
fn test_coincident_points_fall_back_to_first() {
    let p = Point::new(7.0, -2.0);
    let (center, relative) = centered_points(&[p, p, p]);
    assert_eq!(center, p);
    assert!(relative.iter().all(|r| r.magnitude() < 1e-12));
}

#[test]
fn test_polygon_keeps_absolute_vertices() {
    let input = [
        Point::new(10.0, 10.0),
        Point::new(30.0, 10.0),
        Point::new(30.0, 40.0),
        Point::new(10.0, 40.0),
    ];
    let polygon = DesignPolygon::new(&input);
    for (derived, original) in polygon.points().iter().zip(input.iter()) {
        assert!(derived.distance_to(original) < 1e-9);
    }
}

#[test]
fn test_polygon_scale_and_rotation_limits() {
    let mut polygon = DesignPolygon::default();
    polygon.set_scale(100.0);
    assert_eq!(polygon.scale, DesignPolygon::MAX_SCALE);
    polygon.set_scale(0.0);
    assert_eq!(polygon.scale, DesignPolygon::MIN_SCALE);
    polygon.set_rotation(270.0);
    assert_eq!(polygon.rotation, -90.0);
}

#[test]
fn test_regular_polygon_vertices() {
    let square = DesignRegularPolygon::new(Point::ORIGIN, 10.0, 4, 0.0);
    let points = square.points();
    assert_eq!(points.len(), 4);
    // First vertex half a step (45°) before the rotation
    let half = 10.0 / 2f64.sqrt();
    assert!(points[0].distance_to(&Point::new(half, -half)) < 1e-9);
    assert!((square.midpoint_radius() - half).abs() < 1e-9);
    assert!((square.side_length() - 2.0 * half).abs() < 1e-9);
}

#[test]
fn test_regular_polygon_midpoint_radius_round_trip() {
    let mut hexagon = DesignRegularPolygon::new(Point::ORIGIN, 50.0, 6, 0.0);
    hexagon.set_midpoint_radius(30.0);
    assert!((hexagon.midpoint_radius() - 30.0).abs() < 1e-9);
    assert!((hexagon.radius() - 30.0 / (std::f64::consts::PI / 6.0).cos()).abs() < 1e-9);
}

#[test]
fn test_regular_polygon_limits() {
    let mut shape = DesignRegularPolygon::new(Point::ORIGIN, 5000.0, 100, 0.0);
    assert_eq!(shape.sides(), DesignRegularPolygon::MAX_SIDES);
    assert_eq!(shape.radius(), DesignRegularPolygon::MAX_RADIUS);
    shape.set_sides(1);
    assert_eq!(shape.sides(), DesignRegularPolygon::MIN_SIDES);
}

#[test]
fn test_ellipse_handles_follow_rotation() {
    let mut ellipse = DesignEllipse::new(Point::new(10.0, 10.0), 40.0, 20.0);
    ellipse.rotation = 90.0;
    let points = ellipse.points();
    assert!(points[0].distance_to(&Point::new(10.0, 30.0)) < 1e-9);
    assert!(ellipse.contains_point(Point::new(10.0, 25.0), 0.0));
    assert!(!ellipse.contains_point(Point::new(25.0, 10.0), 0.0));
}
