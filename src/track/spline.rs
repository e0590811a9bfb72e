use super::BuildError;
use crate::geom::Float3;

/// Cyclic Catmull-Rom curve through an ordered set of control points.
///
/// The parameter `s` indexes position along the loop: the integer part
/// selects the active four-point window, the fractional part is the
/// blend factor within it. Window indices wrap around the sequence, so
/// the curve closes on itself.
#[derive(Debug, Clone, Copy)]
pub struct LoopSpline<'a> {
    points: &'a [Float3],
    tension: f32,
}

impl<'a> LoopSpline<'a> {
    /// Smallest control set that can fill the four-point window.
    pub const MIN_POINTS: usize = 4;

    pub fn new(points: &'a [Float3], tension: f32) -> Result<Self, BuildError> {
        if points.len() < Self::MIN_POINTS {
            return Err(BuildError::InsufficientControlPoints {
                found: points.len(),
            });
        }
        Ok(Self { points, tension })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Evaluates the curve at parameter `s`.
    ///
    /// The window covers cyclic indices `i-1, i, i+1, i+2` for
    /// `i = floor(s)`. Wrapping uses the Euclidean remainder, so an
    /// index below zero lands on a valid position at the end of the
    /// loop instead of staying negative. At `u = 0` the blend weights
    /// collapse to `(0, 1, 0, 0)` and the curve passes exactly through
    /// the control point at index `i`.
    pub fn sample(&self, s: f32) -> Float3 {
        let i = s.floor() as i64;
        let u = s - s.floor();

        let p0 = self.points[wrap_index(i - 1, self.points.len())];
        let p1 = self.points[wrap_index(i, self.points.len())];
        let p2 = self.points[wrap_index(i + 1, self.points.len())];
        let p3 = self.points[wrap_index(i + 2, self.points.len())];

        catmull_rom(p0, p1, p2, p3, self.tension, u)
    }
}

/// Wraps a possibly-negative cyclic index onto `0..len`.
fn wrap_index(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}

/// Tension-parameterized Catmull-Rom blend of four points.
///
/// Evaluates `[1, u, u^2, u^3] * M(tau) * [p0, p1, p2, p3]^t` with the
/// standard coefficient matrix, expanded here into the four point
/// weights directly.
fn catmull_rom(p0: Float3, p1: Float3, p2: Float3, p3: Float3, tau: f32, u: f32) -> Float3 {
    let u2 = u * u;
    let u3 = u2 * u;

    let w0 = -tau * u + 2.0 * tau * u2 - tau * u3;
    let w1 = 1.0 + (tau - 3.0) * u2 + (2.0 - tau) * u3;
    let w2 = tau * u + (3.0 - 2.0 * tau) * u2 + (tau - 2.0) * u3;
    let w3 = -tau * u2 + tau * u3;

    p0 * w0 + p1 * w1 + p2 * w2 + p3 * w3
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f32 = 1e-5;

    fn square_loop() -> Vec<Float3> {
        vec![
            Float3::new(0.0, 0.0, 0.0),
            Float3::new(4.0, 0.0, 0.0),
            Float3::new(4.0, 0.0, 4.0),
            Float3::new(0.0, 0.0, 4.0),
        ]
    }

    #[test]
    fn rejects_fewer_than_four_points() {
        let points = [Float3::ZERO; 3];
        let result = LoopSpline::new(&points, 0.5);
        assert_eq!(
            result.err(),
            Some(BuildError::InsufficientControlPoints { found: 3 })
        );
    }

    #[test]
    fn passes_through_control_points_at_integer_parameters() {
        let points = square_loop();
        let spline = LoopSpline::new(&points, 0.5).unwrap();

        for (i, expected) in points.iter().enumerate() {
            let sampled = spline.sample(i as f32);
            assert_relative_eq!(sampled.x, expected.x, epsilon = TOLERANCE);
            assert_relative_eq!(sampled.y, expected.y, epsilon = TOLERANCE);
            assert_relative_eq!(sampled.z, expected.z, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn wraps_negative_window_index_at_loop_start() {
        // s = 0 reaches for index -1; with Euclidean wrapping that is
        // the last control point, so sampling just past zero must stay
        // near the first point rather than jumping.
        let points = square_loop();
        let spline = LoopSpline::new(&points, 0.5).unwrap();

        let at_zero = spline.sample(0.0);
        let just_after = spline.sample(0.01);
        assert!((just_after - at_zero).magnitude() < 0.1);
    }

    #[test]
    fn wraps_continuously_at_loop_end() {
        let points = square_loop();
        let spline = LoopSpline::new(&points, 0.5).unwrap();
        let count = points.len() as f32;

        let before_wrap = spline.sample(count - 1e-3);
        let at_wrap = spline.sample(count);
        assert!((at_wrap - before_wrap).magnitude() < 0.05);

        // One full lap later the curve revisits the same point.
        let first = spline.sample(0.5);
        let lapped = spline.sample(count + 0.5);
        assert_relative_eq!(first.x, lapped.x, epsilon = TOLERANCE);
        assert_relative_eq!(first.y, lapped.y, epsilon = TOLERANCE);
        assert_relative_eq!(first.z, lapped.z, epsilon = TOLERANCE);
    }

    #[test]
    fn weights_sum_to_one() {
        // A constant control set must reproduce itself at any blend
        // factor; this pins the basis weights to a partition of unity.
        let p = Float3::new(1.5, -2.0, 3.0);
        let points = [p; 4];
        let spline = LoopSpline::new(&points, 0.5).unwrap();

        for s in [0.0, 0.25, 0.5, 0.75, 1.9, 3.3] {
            let sampled = spline.sample(s);
            assert_relative_eq!(sampled.x, p.x, epsilon = TOLERANCE);
            assert_relative_eq!(sampled.y, p.y, epsilon = TOLERANCE);
            assert_relative_eq!(sampled.z, p.z, epsilon = TOLERANCE);
        }
    }
}
