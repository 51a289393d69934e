//! Background template
//!
//! The template image is the source of truth for the card dimensions and
//! for four decorative sub-images pulled out of it: a texture swatch for
//! the tiled background, a gem swatch reused by the stat badges, and four
//! scrollwork strips along the edges. Everything is extracted once at
//! construction and never mutated afterwards.

use std::path::Path;

use cardforge_core::{Canvas, Rect, RenderError, Result};

// Extraction regions, calibrated to the production frame art. Crops are
// clamped to the template bounds so undersized templates still work.
const TEXTURE_REGION: Rect = Rect::new(150, 300, 350, 500);
const GEM_HALF_SIZE: i32 = 70;
const EDGE_CORNER_INSET: i32 = 150;
const EDGE_BAND_NEAR: i32 = 12;
const EDGE_BAND_FAR: i32 = 32;

/// Decorative strips cut from the template edges
#[derive(Debug, Clone)]
pub struct EdgeStrips {
    pub top: Canvas,
    pub bottom: Canvas,
    pub left: Canvas,
    pub right: Canvas,
}

/// A loaded card background template
#[derive(Debug, Clone)]
pub struct Template {
    width: u32,
    height: u32,
    texture: Canvas,
    gem: Canvas,
    edges: EdgeStrips,
}

impl Template {
    /// Load a template from an image file
    ///
    /// Fails if the file cannot be opened or decoded.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let back = Canvas::open(path)?;
        Self::from_canvas(back)
    }

    /// Build a template from an in-memory canvas
    pub fn from_canvas(back: Canvas) -> Result<Self> {
        let (width, height) = back.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidTemplate(
                "template image has zero size".to_string(),
            ));
        }

        let w = width as i32;
        let h = height as i32;
        let (cx, cy) = (w / 2, h / 2);

        let texture = back.crop_clamped(TEXTURE_REGION);
        let gem = back.crop_clamped(Rect::new(
            cx - GEM_HALF_SIZE,
            cy - GEM_HALF_SIZE,
            cx + GEM_HALF_SIZE,
            cy + GEM_HALF_SIZE,
        ));

        let edges = EdgeStrips {
            top: back.crop_clamped(Rect::new(
                EDGE_CORNER_INSET,
                EDGE_BAND_NEAR,
                w - EDGE_CORNER_INSET,
                EDGE_BAND_FAR,
            )),
            bottom: back.crop_clamped(Rect::new(
                EDGE_CORNER_INSET,
                h - EDGE_BAND_FAR,
                w - EDGE_CORNER_INSET,
                h - EDGE_BAND_NEAR,
            )),
            left: back.crop_clamped(Rect::new(
                EDGE_BAND_NEAR,
                EDGE_CORNER_INSET,
                EDGE_BAND_FAR,
                h - EDGE_CORNER_INSET,
            )),
            right: back.crop_clamped(Rect::new(
                w - EDGE_BAND_FAR,
                EDGE_CORNER_INSET,
                w - EDGE_BAND_NEAR,
                h - EDGE_CORNER_INSET,
            )),
        };

        Ok(Self {
            width,
            height,
            texture,
            gem,
            edges,
        })
    }

    /// Template width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Template height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Texture swatch for the tiled background
    pub fn texture(&self) -> &Canvas {
        &self.texture
    }

    /// Gem swatch reused by the stat badges
    pub fn gem(&self) -> &Canvas {
        &self.gem
    }

    /// Edge decoration strips
    pub fn edges(&self) -> &EdgeStrips {
        &self.edges
    }
}
