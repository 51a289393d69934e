//! Cardforge Render - card frame and portrait compositing
//!
//! The card renderer owns a background template image, derives fixed
//! proportional zones from its pixel dimensions, and produces a final
//! composed image from a set of text/art inputs:
//!
//! ```text
//! Template ──▶ Layout ──▶ base / border / strips / gradients / art /
//!                         frames / ornaments / badges / text ──▶ Canvas
//! ```
//!
//! Rendering is a single linear pipeline of layer operations over one
//! mutable canvas. The template and layout are computed once at renderer
//! construction; each build call works on a fresh canvas.
//!
//! The [`portrait`] module is a peripheral utility that crops artwork
//! into a pre-made circular hero frame.

pub mod compositor;
pub mod fonts;
pub mod layout;
pub mod portrait;
pub mod renderer;
pub mod request;
pub mod template;
pub mod text;
pub mod theme;

// Re-export commonly used types
pub use fonts::FontSet;
pub use layout::Layout;
pub use portrait::{compose as compose_portrait, Portrait, PortraitOptions};
pub use renderer::CardRenderer;
pub use request::CardRequest;
pub use template::{EdgeStrips, Template};
pub use theme::Theme;
