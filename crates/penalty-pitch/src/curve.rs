//! Quadratic Bézier curve evaluation.

use penalty_core::types::Point;

/// Position on the quadratic curve at `t`.
///
/// `(1-t)²·start + 2(1-t)t·control + t²·end`. Only meaningful for
/// `t` in `0.0..=1.0`; callers clamp.
pub fn evaluate(start: Point, control: Point, end: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let a = u * u;
    let b = 2.0 * u * t;
    let c = t * t;
    Point::new(
        a * start.x + b * control.x + c * end.x,
        a * start.y + b * control.y + c * end.y,
    )
}

/// Sample the curve at evenly spaced `t` from 0 to 1 inclusive.
///
/// `step` is rounded to the nearest whole number of segments, so the last
/// sample always lands exactly on `end`.
pub fn sample(start: Point, control: Point, end: Point, step: f64) -> Vec<Point> {
    let segments = if step.is_finite() && step > 0.0 {
        (1.0 / step).round().max(1.0) as usize
    } else {
        1
    };
    (0..=segments)
        .map(|i| evaluate(start, control, end, i as f64 / segments as f64))
        .collect()
}
