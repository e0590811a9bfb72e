//! RailGen - procedural track ribbon generation from sparse control paths.
//!
//! # Architecture
//!
//! Layered modules with strict inward-only dependencies:
//!
//! - **geom**: Math primitives (Float2, Float3, Frame)
//! - **track**: Path decoding, spline evaluation, ribbon tessellation
//! - **loader**: Control-point file loading
//! - **render**: Render-buffer adapter seam
//! - **ffi**: C FFI bindings
//!
//! # Usage
//!
//! ```ignore
//! use railgen::{MeshParams, TrackSurface};
//!
//! let raw = railgen::loader::load_control_points(base_dir, "track.txt")?;
//! let track = TrackSurface::build(&raw, &MeshParams::default())?;
//! ```
//!
//! For C renderers, link the cdylib and use the `rail_*` FFI functions.

pub mod geom;
pub mod loader;
pub mod render;
pub mod track;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types at crate root
pub use geom::{Float2, Float3, Frame};
pub use render::{BindingError, MeshBinding, RenderBufferAdapter};
pub use track::{build_surface, BuildError, MeshParams, SurfaceVertex, TrackMesh, TrackSurface};
