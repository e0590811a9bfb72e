//! Track surface generation pipeline.
//!
//! Decodes a relative control path, evaluates a cyclic Catmull-Rom
//! curve through it, and tessellates a ribbon surface for rendering.

mod mesh;
mod path;
mod spline;
mod surface;

pub use mesh::{build_surface, MeshParams, SurfaceVertex, TrackMesh};
pub use path::{decode_path, PATH_ORIGIN, PATH_SCALE};
pub use spline::LoopSpline;
pub use surface::TrackSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// Curve evaluation needs a four-point window; fewer control
    /// points than that cannot define the loop.
    InsufficientControlPoints { found: usize },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::InsufficientControlPoints { found } => {
                write!(
                    f,
                    "not enough control points for curve evaluation: found {found}, need at least {}",
                    LoopSpline::MIN_POINTS
                )
            }
        }
    }
}

impl std::error::Error for BuildError {}
