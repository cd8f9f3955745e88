//! Angle arithmetic shared by the rotate and perspective drags.
//!
//! All angles are in degrees.

use crate::model::Point;

/// Floored modulo: the result has the sign of `divisor`.
pub fn modulo(value: f64, divisor: f64) -> f64 {
    ((value % divisor) + divisor) % divisor
}

/// Wraps an angle into [-180, 180).
pub fn wrap_degrees(degrees: f64) -> f64 {
    modulo(degrees + 180.0, 360.0) - 180.0
}

/// Difference `first - second` that stays continuous while a drag crosses
/// the ±180° branch cut.
///
/// When either angle is below -90° both are moved into [0, 360) before
/// subtracting, so -170° against 170° reads as 20° rather than -340°.
pub fn angle_difference(first: f64, second: f64) -> f64 {
    if first < -90.0 || second < -90.0 {
        modulo(first + 360.0, 360.0) - modulo(second + 360.0, 360.0)
    } else {
        first - second
    }
}

/// Rotation after dragging `reference` to `end` around `center`, wrapped to
/// [-180, 180).
pub fn adjust_rotation(starting: f64, center: Point, reference: Point, end: Point) -> f64 {
    let begin = (reference - center).angle_degrees();
    let finish = (end - center).angle_degrees();
    wrap_degrees(starting + angle_difference(finish, begin))
}

/// Signed angle, in degrees, that rotates `from` onto `to`.
pub fn angle_between(from: Point, to: Point) -> f64 {
    wrap_degrees(to.angle_degrees() - from.angle_degrees())
}

pub fn is_same_point(a: Point, b: Point, epsilon: f64) -> bool {
    (a.x - b.x).abs() < epsilon && (a.y - b.y).abs() < epsilon
}
