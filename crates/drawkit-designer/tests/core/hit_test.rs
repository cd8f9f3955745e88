use drawkit_designer::hit_test::{contains, find_point};
use drawkit_designer::model::{rotate_point, DesignRegularPolygon, DesignerShape, Point};
use proptest::prelude::*;

fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Vec<Point> {
    vec![
        Point::new(x, y),
        Point::new(x + width, y),
        Point::new(x + width, y + height),
        Point::new(x, y + height),
    ]
}

#[test]
fn test_star_has_hollow_center() {
    // Pentagram drawn point to point; odd-even leaves the pentagon empty.
    let outer = DesignRegularPolygon::new(Point::ORIGIN, 100.0, 5, 90.0).points();
    let star: Vec<Point> = (0..5).map(|i| outer[(i * 2) % 5]).collect();

    assert!(!contains(&star, Point::ORIGIN));

    let tip = outer[0] * 0.9;
    assert!(contains(&star, tip));
}

#[test]
fn test_find_point_prefers_nearest() {
    let points = [Point::new(0.0, 0.0), Point::new(6.0, 0.0), Point::new(3.0, 20.0)];
    assert_eq!(find_point(Point::new(4.0, 0.0), &points, 10.0), Some(1));
    assert_eq!(find_point(Point::new(3.0, 9.0), &points, 10.0), Some(0));
    assert_eq!(find_point(Point::new(50.0, 50.0), &points, 10.0), None);
}

proptest! {
    #[test]
    fn prop_rectangle_interior(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        width in 1.0f64..400.0,
        height in 1.0f64..400.0,
        fx in 0.01f64..0.99,
        fy in 0.01f64..0.99,
        rotation in -180.0f64..180.0,
    ) {
        let center = Point::new(x + width / 2.0, y + height / 2.0);
        let points: Vec<Point> = rectangle(x, y, width, height)
            .into_iter()
            .map(|p| rotate_point(p, center, rotation))
            .collect();
        let inside = rotate_point(Point::new(x + width * fx, y + height * fy), center, rotation);
        prop_assert!(contains(&points, inside));
    }

    #[test]
    fn prop_rectangle_exterior(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        width in 1.0f64..400.0,
        height in 1.0f64..400.0,
        fx in 1.01f64..3.0,
        fy in 0.01f64..0.99,
    ) {
        let points = rectangle(x, y, width, height);
        prop_assert!(!contains(&points, Point::new(x + width * fx, y + height * fy)));
        prop_assert!(!contains(&points, Point::new(x + width * (1.0 - fx), y + height * fy)));
    }

    #[test]
    fn prop_regular_polygon_contains_shrunk_vertices(
        sides in 3u32..=36,
        radius in 5.0f64..900.0,
        rotation in -180.0f64..180.0,
        cx in -100.0f64..100.0,
        cy in -100.0f64..100.0,
    ) {
        let center = Point::new(cx, cy);
        let shape = DesignRegularPolygon::new(center, radius, sides, rotation);
        let outline = shape.points();
        for vertex in outline.iter() {
            let probe = center + (*vertex - center) * 0.5;
            prop_assert!(contains(&outline, probe));
        }
        prop_assert!(contains(&outline, center));
    }
}
