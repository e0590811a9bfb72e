//! Single-call FFI for railgen.
//!
//! Functions:
//! - `rail_build` - takes raw control offsets, produces the ribbon vertex buffer
//! - `rail_vertex_stride` - byte stride of one interleaved vertex record
//!
//! # Error Codes
//! - `0`: Success
//! - `-1`: Null pointer
//! - `-2`: Not enough control points
//! - `-3`: Buffer overflow (resize and retry)

use crate::geom::Float3;
use crate::track::{build_surface, decode_path, BuildError, MeshParams, SurfaceVertex};

/// Build the track ribbon vertex buffer from raw control offsets.
///
/// Single FFI call: control offsets in, interleaved vertices out. On
/// `-3` the required vertex count is written to `vertex_count` so the
/// caller can resize and retry.
///
/// # Safety
///
/// - `raw_points` must be valid for `raw_count` reads (or `raw_count` zero)
/// - `vertices` must be valid for `vertex_capacity` writes
/// - `vertex_count` must be a valid pointer
#[no_mangle]
pub unsafe extern "C" fn rail_build(
    raw_points: *const Float3,
    raw_count: usize,
    sample_step: f32,
    rail_offset: f32,
    tension: f32,
    swept_frame: i32,
    vertices: *mut SurfaceVertex,
    vertex_capacity: usize,
    vertex_count: *mut usize,
) -> i32 {
    if vertices.is_null() || vertex_count.is_null() {
        return -1;
    }
    if raw_count > 0 && raw_points.is_null() {
        return -1;
    }

    let raw: &[Float3] = if raw_count == 0 {
        &[]
    } else {
        std::slice::from_raw_parts(raw_points, raw_count)
    };

    let params = MeshParams {
        sample_step,
        rail_offset,
        tension,
        swept_frame: swept_frame != 0,
    };

    let world = decode_path(raw);
    let mesh = match build_surface(&world, &params) {
        Ok(mesh) => mesh,
        Err(BuildError::InsufficientControlPoints { .. }) => return -2,
    };

    if mesh.vertices.len() > vertex_capacity {
        *vertex_count = mesh.vertices.len();
        return -3;
    }

    for (i, vertex) in mesh.vertices.iter().enumerate() {
        *vertices.add(i) = *vertex;
    }
    *vertex_count = mesh.vertices.len();
    0
}

/// Byte stride of one interleaved vertex record, for attribute setup
/// on the caller's side.
#[no_mangle]
pub extern "C" fn rail_vertex_stride() -> usize {
    SurfaceVertex::STRIDE
}
