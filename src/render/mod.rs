//! Render-buffer handoff.
//!
//! The GPU side is an external collaborator. This module defines the
//! seam it plugs into and tracks upload/teardown state, so buffer
//! handles are released exactly once and never before an upload.

use crate::track::{SurfaceVertex, TrackMesh};

/// External GPU collaborator: accepts a finished vertex stream and
/// manages the buffer objects backing it.
///
/// The vertex stream is interleaved per [`SurfaceVertex`]: position,
/// normal, texture coordinate at the published stride and offsets.
/// Normals arrive unnormalized; the consumer's shading stage is
/// expected to normalize them.
pub trait RenderBufferAdapter {
    /// Opaque handle to one uploaded buffer set.
    type Buffers;

    /// Uploads the vertex stream and returns the backing handle.
    fn upload(&mut self, vertices: &[SurfaceVertex]) -> Self::Buffers;

    /// Destroys one previously uploaded buffer set.
    fn release(&mut self, buffers: Self::Buffers);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingError {
    /// Teardown was requested before any successful upload.
    NotUploaded,
}

impl std::fmt::Display for BindingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingError::NotUploaded => write!(f, "no uploaded buffers to release"),
        }
    }
}

impl std::error::Error for BindingError {}

/// Owns an adapter plus at most one live buffer handle.
pub struct MeshBinding<A: RenderBufferAdapter> {
    adapter: A,
    buffers: Option<A::Buffers>,
    draw_count: usize,
}

impl<A: RenderBufferAdapter> MeshBinding<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            buffers: None,
            draw_count: 0,
        }
    }

    /// Uploads `mesh`, releasing any previously held buffers first.
    pub fn upload(&mut self, mesh: &TrackMesh) {
        if let Some(old) = self.buffers.take() {
            self.adapter.release(old);
        }
        self.draw_count = mesh.draw_count();
        self.buffers = Some(self.adapter.upload(&mesh.vertices));
    }

    /// Vertex count for the triangle-list draw call; zero before the
    /// first upload.
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    pub fn is_uploaded(&self) -> bool {
        self.buffers.is_some()
    }

    /// Releases the held buffers.
    ///
    /// Calling this without a prior upload (or a second time after a
    /// release) is a precondition violation and fails with
    /// [`BindingError::NotUploaded`] instead of silently succeeding on
    /// an invalid handle.
    pub fn release(&mut self) -> Result<(), BindingError> {
        match self.buffers.take() {
            Some(buffers) => {
                self.adapter.release(buffers);
                self.draw_count = 0;
                Ok(())
            }
            None => Err(BindingError::NotUploaded),
        }
    }
}
