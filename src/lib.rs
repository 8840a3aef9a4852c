//! Vertex layout descriptors for GPU rendering
//!
//! This crate describes how a single vertex's attributes (position, normal,
//! texcoords, per-instance data, ...) are laid out inside a contiguous vertex
//! buffer:
//! - [`VertexLayout`] — an ordered, fixed-capacity set of [`Component`]s with
//!   derived byte offsets, stride, and an attribute reverse-lookup table
//! - [`VertexLayout::hash`] / [`VertexLayout::combined_hash`] — stable 64-bit
//!   keys for pipeline-state caches
//! - [`VertexWriter`] — packs float data into an interleaved buffer following
//!   a layout
//!
//! Layouts are plain copyable values with no heap storage; building one is a
//! chained expression:
//!
//! ```
//! use vertex_layout::{VertexAttr, VertexFormat, VertexLayout};
//!
//! let layout = VertexLayout::new()
//!     .add(VertexAttr::Position, VertexFormat::Float3)
//!     .add(VertexAttr::TexCoord0, VertexFormat::Float2);
//! assert_eq!(layout.byte_size(), 20);
//! assert!(layout.contains(VertexAttr::Position));
//! ```

pub mod format;
pub mod layout;
pub mod writer;

pub use format::{ParseError, VertexAttr, VertexFormat, VertexStepFunction};
pub use layout::{Component, VertexLayout, MAX_COMPONENTS};
pub use writer::VertexWriter;
