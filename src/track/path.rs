use crate::geom::Float3;

/// Seed position of the decode accumulator.
pub const PATH_ORIGIN: Float3 = Float3::new(-2.0, 0.0, -2.0);

/// Scale applied to every accumulated position.
pub const PATH_SCALE: f32 = 2.0;

/// Decodes raw control points into world-space track points.
///
/// Raw points are relative offsets, not absolute positions: each one is
/// added to a running accumulator seeded at [`PATH_ORIGIN`], and the
/// accumulated position scaled by [`PATH_SCALE`] is emitted. The track
/// file format encodes paths this way, so the decode must stay
/// compatible with it. Note the accumulator itself is never scaled;
/// only the emitted copies are.
pub fn decode_path(raw: &[Float3]) -> Vec<Float3> {
    let mut acc = PATH_ORIGIN;
    let mut world = Vec::with_capacity(raw.len());

    for &offset in raw {
        log::trace!("control offset {} {} {}", offset.x, offset.y, offset.z);
        acc += offset;
        world.push(acc * PATH_SCALE);
    }

    world
}
