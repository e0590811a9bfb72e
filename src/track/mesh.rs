use std::mem;

use super::spline::LoopSpline;
use super::BuildError;
use crate::geom::{Float2, Float3, Frame};

/// Interleaved vertex record for the track surface.
///
/// Matches the render attribute stream: position, normal, texture
/// coordinate, tightly packed. `normal` is an unnormalized accumulator;
/// the shading stage normalizes (and interpolates) it per fragment, so
/// the builder must never normalize it here.
///
/// C-compatible layout for FFI.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SurfaceVertex {
    pub position: Float3,
    pub normal: Float3,
    pub tex_coord: Float2,
}

impl SurfaceVertex {
    /// Byte stride of one interleaved record.
    pub const STRIDE: usize = mem::size_of::<SurfaceVertex>();
    /// Byte offset of the position attribute.
    pub const POSITION_OFFSET: usize = 0;
    /// Byte offset of the normal attribute.
    pub const NORMAL_OFFSET: usize = mem::size_of::<Float3>();
    /// Byte offset of the texture coordinate attribute.
    pub const TEX_COORD_OFFSET: usize = 2 * mem::size_of::<Float3>();

    /// Vertex at `position` with a zeroed normal accumulator.
    ///
    /// The texture coordinate comes straight from the position's x/y
    /// components; there is no separate unwrapping pass.
    pub fn at(position: Float3) -> Self {
        Self {
            position,
            normal: Float3::ZERO,
            tex_coord: Float2::new(position.x, position.y),
        }
    }
}

/// Triangle-list surface buffer.
///
/// `indices` is reserved for indexed drawing; the default draw path
/// consumes `vertices` directly and the builder leaves it empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackMesh {
    pub vertices: Vec<SurfaceVertex>,
    pub indices: Vec<u32>,
}

impl TrackMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex count for the non-indexed triangle-list draw call.
    pub fn draw_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Ribbon tessellation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshParams {
    /// Curve-parameter distance between consecutive samples.
    pub sample_step: f32,
    /// Lateral ribbon width in world units.
    pub rail_offset: f32,
    /// Catmull-Rom tension.
    pub tension: f32,
    /// Recompute `right` from the tangent each step instead of keeping
    /// the starting lateral direction for the whole loop.
    pub swept_frame: bool,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            sample_step: 0.2,
            rail_offset: 2.0,
            tension: 0.5,
            swept_frame: false,
        }
    }
}

/// Tessellates the ribbon surface along the control-point loop.
///
/// Walks the curve from `s = 0` to the control-point count in
/// `sample_step` increments. Each step samples the curve at `s` and
/// `s + step`, offsets both samples along `-right`, and emits the two
/// triangles covering that quad. The frame tangent is refreshed after
/// emission, so the lateral offset of a step always uses the frame
/// state from the previous one.
///
/// An empty control set produces an empty mesh; one to three points is
/// an error, because the four-point spline window cannot be filled.
pub fn build_surface(points: &[Float3], params: &MeshParams) -> Result<TrackMesh, BuildError> {
    let mut mesh = TrackMesh::new();
    if points.is_empty() {
        return Ok(mesh);
    }

    let spline = LoopSpline::new(points, params.tension)?;
    let mut frame = Frame::DEFAULT;
    let count = points.len() as f32;

    let mut s = 0.0f32;
    while s < count {
        let a = spline.sample(s);
        let b = spline.sample(s + params.sample_step);
        let c = b + -frame.right * params.rail_offset;
        let d = a + -frame.right * params.rail_offset;

        // Winding is fixed: reversing it flips the visible face, and no
        // backface-culling compensation exists downstream.
        push_triangle(&mut mesh.vertices, a, b, c);
        push_triangle(&mut mesh.vertices, a, c, d);

        frame.advance(a, b);
        if params.swept_frame {
            frame.resweep();
        }

        s += params.sample_step;
    }

    log::debug!("built track surface: {} vertices", mesh.vertices.len());
    Ok(mesh)
}

/// Emits one triangle as three fresh vertex records, each accumulating
/// the un-normalized face normal `(b - a) x (c - a)`.
fn push_triangle(vertices: &mut Vec<SurfaceVertex>, a: Float3, b: Float3, c: Float3) {
    let face_normal = (b - a).cross(c - a);
    for position in [a, b, c] {
        let mut vertex = SurfaceVertex::at(position);
        vertex.normal += face_normal;
        vertices.push(vertex);
    }
}
