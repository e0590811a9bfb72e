use super::mesh::{build_surface, MeshParams, TrackMesh};
use super::path::decode_path;
use super::BuildError;
use crate::geom::Float3;

/// A built track: the decoded world-space control loop plus the ribbon
/// mesh generated from it.
///
/// Owns the mesh buffer from construction until whatever render
/// binding consumed it is torn down.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSurface {
    control_points: Vec<Float3>,
    mesh: TrackMesh,
}

impl TrackSurface {
    /// Decodes `raw_points` and tessellates the ribbon in one pass.
    pub fn build(raw_points: &[Float3], params: &MeshParams) -> Result<Self, BuildError> {
        let control_points = decode_path(raw_points);
        let mesh = build_surface(&control_points, params)?;
        Ok(Self {
            control_points,
            mesh,
        })
    }

    /// Decoded world-space control points, in path order.
    pub fn control_points(&self) -> &[Float3] {
        &self.control_points
    }

    pub fn mesh(&self) -> &TrackMesh {
        &self.mesh
    }

    /// Vertex count for the non-indexed triangle-list draw call.
    pub fn draw_count(&self) -> usize {
        self.mesh.draw_count()
    }
}
