use super::math::Float3;

/// Local coordinate frame walked along the track curve.
///
/// Three direction vectors plus an origin position:
/// - `front`: tangent along the curve, refreshed every sampling step
/// - `up`: upward direction
/// - `right`: lateral direction used to offset ribbon edges
///
/// Only `front` is updated while the curve is walked; `up` and `right`
/// stay at their initial values unless [`Frame::resweep`] is called.
/// The offset ribbon therefore uses a constant lateral direction, which
/// holds up as long as the curve stays close to a planar loop.
///
/// C-compatible layout for FFI.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    pub front: Float3,
    pub up: Float3,
    pub right: Float3,
    pub origin: Float3,
}

impl Frame {
    pub const fn new(front: Float3, up: Float3, right: Float3, origin: Float3) -> Self {
        Self {
            front,
            up,
            right,
            origin,
        }
    }

    /// World-axis starting frame: front +X, up +Y, right +Z, origin at
    /// the world origin.
    pub const DEFAULT: Self = Self::new(
        Float3::new(1.0, 0.0, 0.0),
        Float3::new(0.0, 1.0, 0.0),
        Float3::new(0.0, 0.0, 1.0),
        Float3::ZERO,
    );

    /// Reorients `front` from a pair of consecutive curve samples.
    ///
    /// The tangent is taken rear-facing (earlier sample minus later
    /// sample). Ribbon offsets read only `right`, which this update
    /// leaves untouched.
    pub fn advance(&mut self, earlier: Float3, later: Float3) {
        self.front = (earlier - later).normalize();
    }

    /// Recomputes `right` as `up x front`, keeping the lateral
    /// direction perpendicular to the current tangent.
    ///
    /// With the rear-facing tangent from [`Frame::advance`], this lands
    /// on the same lateral side as the frozen default for travel in the
    /// +X direction.
    pub fn resweep(&mut self) {
        self.right = self.up.cross(self.front).normalize();
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_axes() {
        let frame = Frame::DEFAULT;
        assert_eq!(frame.front, Float3::new(1.0, 0.0, 0.0));
        assert_eq!(frame.up, Float3::new(0.0, 1.0, 0.0));
        assert_eq!(frame.right, Float3::new(0.0, 0.0, 1.0));
        assert_eq!(frame.origin, Float3::ZERO);
    }

    #[test]
    fn test_advance_rear_facing_tangent() {
        let mut frame = Frame::DEFAULT;
        let earlier = Float3::new(0.0, 0.0, 0.0);
        let later = Float3::new(3.0, 0.0, 0.0);

        frame.advance(earlier, later);

        assert_relative_eq!(frame.front.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(frame.front.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(frame.front.z, 0.0, epsilon = 1e-6);
        assert_relative_eq!(frame.front.magnitude(), 1.0, epsilon = 1e-6);
        // Lateral direction is untouched by advance.
        assert_eq!(frame.right, Float3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_resweep_keeps_lateral_side() {
        let mut frame = Frame::DEFAULT;
        // Travel along +X: rear-facing tangent is -X.
        frame.advance(Float3::ZERO, Float3::new(1.0, 0.0, 0.0));
        frame.resweep();

        assert_relative_eq!(frame.right.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(frame.right.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(frame.right.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_resweep_orthogonal_to_tangent() {
        let mut frame = Frame::DEFAULT;
        frame.advance(Float3::ZERO, Float3::new(1.0, 0.0, 1.0));
        frame.resweep();

        assert_relative_eq!(frame.right.dot(frame.front), 0.0, epsilon = 1e-6);
        assert_relative_eq!(frame.right.dot(frame.up), 0.0, epsilon = 1e-6);
        assert_relative_eq!(frame.right.magnitude(), 1.0, epsilon = 1e-6);
    }
}
