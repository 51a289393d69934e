//! Hero portrait composition
//!
//! Crops a square region from source artwork around a chosen face
//! position, masks it to a circle, and seats it behind a pre-made
//! circular frame. Emits a full-resolution and a small game-resolution
//! output. Crop bounds are clamped to the artwork edges; near an edge the
//! crop degrades to a smaller square instead of erroring.

use cardforge_core::{Canvas, Rect};

/// Frame image dimensions the portrait constants are calibrated to
pub const FRAME_SIZE: u32 = 1024;
/// Radius of the frame's transparent inner circle
pub const PORTRAIT_RADIUS: u32 = 344;
/// Diameter of the inner circle
pub const PORTRAIT_DIAMETER: u32 = 688;
/// Center of the frame
pub const PORTRAIT_CENTER: u32 = 512;
/// Game-ready output size
pub const GAME_SIZE: u32 = 200;

/// Portrait crop controls
#[derive(Debug, Clone, Copy)]
pub struct PortraitOptions {
    /// Vertical position of the face in the artwork (0 = top, 1 = bottom)
    pub face_y: f32,
    /// Zoom factor (1.0 fits the shorter dimension, > 1 zooms in)
    pub zoom: f32,
}

impl Default for PortraitOptions {
    fn default() -> Self {
        Self {
            face_y: 0.25,
            zoom: 1.0,
        }
    }
}

/// A composed portrait at both output resolutions
#[derive(Debug, Clone)]
pub struct Portrait {
    /// Full resolution (1024x1024)
    pub full: Canvas,
    /// Game-ready resolution (200x200)
    pub game: Canvas,
}

/// Square crop region for a portrait, clamped to the artwork bounds
///
/// Centered horizontally; vertically at `face_y` of the height. Always a
/// valid square: out-of-range inputs clamp, and edge-adjacent crops trim
/// to the smaller clamped dimension.
pub fn crop_region(width: i32, height: i32, face_y: f32, zoom: f32) -> Rect {
    let zoom = if zoom > 0.0 { zoom } else { 1.0 };
    let face_y = face_y.clamp(0.0, 1.0);

    let max_crop = width.min(height);
    let crop = ((max_crop as f32 / zoom) as i32).clamp(1, max_crop);
    let half = crop / 2;

    let center_x = width / 2;
    let center_y = (height as f32 * face_y) as i32;

    let left = (center_x - half).max(0);
    let top = (center_y - half).max(0);
    let right = (left + crop).min(width);
    let bottom = (top + crop).min(height);

    // Force a square by trimming to the smaller clamped dimension
    let size = (right - left).min(bottom - top).max(1);
    let left = left.min(width - size);
    let top = top.min(height - size);

    Rect::new(left, top, left + size, top + size)
}

/// Compose a portrait: crop, circle-mask, seat behind the frame
pub fn compose(frame: &Canvas, artwork: &Canvas, options: &PortraitOptions) -> Portrait {
    let region = crop_region(
        artwork.width() as i32,
        artwork.height() as i32,
        options.face_y,
        options.zoom,
    );

    let mut portrait = artwork
        .crop_clamped(region)
        .resized(PORTRAIT_DIAMETER, PORTRAIT_DIAMETER);
    portrait.mask_to_circle();

    let mut full = Canvas::new(FRAME_SIZE, FRAME_SIZE);
    let offset = (PORTRAIT_CENTER - PORTRAIT_RADIUS) as i32;
    full.paste_masked(&portrait, offset, offset);
    // Frame goes on top, drawn with its own alpha
    full.paste_masked(frame, 0, 0);

    let game = full.resized(GAME_SIZE, GAME_SIZE);
    Portrait { full, game }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_centered_fit() {
        let region = crop_region(1000, 800, 0.5, 1.0);
        assert_eq!(region.width(), region.height());
        assert_eq!(region.width(), 800);
        // Horizontally centered
        assert_eq!(region.x0, 100);
    }

    #[test]
    fn test_crop_clamps_top() {
        let region = crop_region(1000, 800, 0.0, 1.0);
        assert_eq!(region.y0, 0);
        assert_eq!(region.width(), region.height());
    }

    #[test]
    fn test_crop_clamps_bottom() {
        // face_y = 1.0 on a 1000x800 image: the crop bottom stops at the
        // image edge instead of extending past it
        let region = crop_region(1000, 800, 1.0, 1.0);
        assert_eq!(region.y1, 800);
        assert_eq!(region.width(), region.height());
        assert!(region.y0 >= 0);
    }

    #[test]
    fn test_crop_zoom_in() {
        let region = crop_region(1000, 800, 0.5, 2.0);
        assert_eq!(region.width(), 400);
        assert_eq!(region.height(), 400);
    }

    #[test]
    fn test_crop_extreme_zoom_still_valid() {
        let region = crop_region(1000, 800, 0.5, 1e9);
        assert_eq!(region.width(), 1);
        assert_eq!(region.height(), 1);
        assert!(region.x0 >= 0 && region.y1 <= 800);
    }

    #[test]
    fn test_crop_bad_inputs_degrade() {
        let region = crop_region(1000, 800, 7.0, -3.0);
        assert!(region.width() >= 1);
        assert_eq!(region.width(), region.height());
        assert!(region.x1 <= 1000 && region.y1 <= 800);
    }

    #[test]
    fn test_compose_output_sizes() {
        let frame = Canvas::new(1024, 1024);
        let artwork = Canvas::filled(900, 600, [120, 40, 40, 255]);
        let portrait = compose(&frame, &artwork, &PortraitOptions::default());

        assert_eq!(portrait.full.dimensions(), (FRAME_SIZE, FRAME_SIZE));
        assert_eq!(portrait.game.dimensions(), (GAME_SIZE, GAME_SIZE));
    }

    #[test]
    fn test_compose_circular_mask() {
        // Transparent frame: only the circle-masked portrait remains
        let frame = Canvas::new(1024, 1024);
        let artwork = Canvas::filled(800, 800, [120, 40, 40, 255]);
        let portrait = compose(&frame, &artwork, &PortraitOptions::default());

        let center = portrait.full.get_pixel(512, 512).unwrap();
        assert_eq!(center[3], 255);
        assert_eq!(&center[..3], &[120, 40, 40]);

        // Outside the inner circle the canvas stays transparent
        assert_eq!(portrait.full.get_pixel(5, 5).unwrap()[3], 0);
        let corner_of_circle = portrait.full.get_pixel(168 + 2, 168 + 2).unwrap();
        assert_eq!(corner_of_circle[3], 0);
    }

    #[test]
    fn test_frame_draws_over_portrait() {
        let frame = Canvas::filled(1024, 1024, [10, 200, 10, 255]);
        let artwork = Canvas::filled(800, 800, [120, 40, 40, 255]);
        let portrait = compose(&frame, &artwork, &PortraitOptions::default());

        // Opaque frame hides everything, including the portrait center
        assert_eq!(&portrait.full.get_pixel(512, 512).unwrap()[..3], &[10, 200, 10]);
    }
}
