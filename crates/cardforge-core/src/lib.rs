//! Cardforge Core - raster and geometry primitives
//!
//! The card renderer is a single linear pipeline of layer composition
//! operations applied to one mutable canvas. This crate holds the pieces
//! every layer works in terms of: the RGBA canvas, integer rectangles,
//! color helpers, and the shared error type.

pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;

// Re-export commonly used types
pub use canvas::Canvas;
pub use color::{Rgb, Rgba8};
pub use error::{RenderError, Result};
pub use geometry::Rect;
