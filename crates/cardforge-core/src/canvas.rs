//! Mutable RGBA canvas
//!
//! Every build call creates one fresh `Canvas` and composites layers onto
//! it in order. The canvas wraps an RGBA8 buffer from the `image` crate so
//! decode, encode and resampling come from the ecosystem, while pixel-level
//! compositing is done here.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::color::{self, Rgba8};
use crate::error::Result;
use crate::geometry::Rect;

/// RGBA8 pixel surface
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Create a canvas filled with a single color
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, image::Rgba(color)),
        }
    }

    /// Load a canvas from an image file
    ///
    /// Fails if the file cannot be opened or decoded.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let image = image::open(path)?.to_rgba8();
        Ok(Self { image })
    }

    /// Wrap an existing RGBA buffer
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Save the canvas to a file (format inferred from the extension)
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.image.save(path)?;
        Ok(())
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Borrow the underlying buffer
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Mutably borrow the underlying buffer
    pub fn image_mut(&mut self) -> &mut RgbaImage {
        &mut self.image
    }

    /// Consume into the underlying buffer
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Get pixel at position, `None` when out of bounds
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return None;
        }
        Some(self.image.get_pixel(x as u32, y as u32).0)
    }

    /// Set pixel at position; out-of-bounds writes are dropped
    pub fn set_pixel(&mut self, x: i32, y: i32, rgba: Rgba8) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, image::Rgba(rgba));
    }

    /// Alpha-blend a pixel onto the canvas
    pub fn blend_pixel(&mut self, x: i32, y: i32, rgba: Rgba8) {
        if let Some(dst) = self.get_pixel(x, y) {
            self.set_pixel(x, y, color::over(rgba, dst));
        }
    }

    /// Fill the whole canvas with a color
    pub fn fill(&mut self, rgba: Rgba8) {
        for pixel in self.image.pixels_mut() {
            pixel.0 = rgba;
        }
    }

    /// Alpha-blend a solid color over the whole canvas
    pub fn blend_fill(&mut self, rgba: Rgba8) {
        for pixel in self.image.pixels_mut() {
            pixel.0 = color::over(rgba, pixel.0);
        }
    }

    /// Copy `src` over this canvas, replacing pixels (alpha included)
    pub fn paste(&mut self, src: &Canvas, x: i32, y: i32) {
        imageops::replace(&mut self.image, &src.image, x as i64, y as i64);
    }

    /// Alpha-composite `src` onto this canvas using the source alpha
    pub fn paste_masked(&mut self, src: &Canvas, x: i32, y: i32) {
        imageops::overlay(&mut self.image, &src.image, x as i64, y as i64);
    }

    /// Crop a region, clamping it to the canvas bounds
    ///
    /// The `x1`/`y1` edge is exclusive. A region entirely outside the
    /// canvas degrades to a 1x1 transparent canvas.
    pub fn crop_clamped(&self, rect: Rect) -> Canvas {
        let x0 = rect.x0.clamp(0, self.width() as i32);
        let y0 = rect.y0.clamp(0, self.height() as i32);
        let x1 = rect.x1.clamp(x0, self.width() as i32);
        let y1 = rect.y1.clamp(y0, self.height() as i32);
        if x1 <= x0 || y1 <= y0 {
            return Canvas::new(1, 1);
        }
        let cropped = imageops::crop_imm(
            &self.image,
            x0 as u32,
            y0 as u32,
            (x1 - x0) as u32,
            (y1 - y0) as u32,
        )
        .to_image();
        Canvas { image: cropped }
    }

    /// Resample to a new size with a Lanczos filter
    pub fn resized(&self, width: u32, height: u32) -> Canvas {
        let image = imageops::resize(&self.image, width, height, FilterType::Lanczos3);
        Canvas { image }
    }

    /// Multiply every color channel by `factor`, leaving alpha untouched
    pub fn darkened(&self, factor: f32) -> Canvas {
        let mut out = self.clone();
        for pixel in out.image.pixels_mut() {
            let [r, g, b, a] = pixel.0;
            let scaled = color::scale([r, g, b], factor);
            pixel.0 = [scaled[0], scaled[1], scaled[2], a];
        }
        out
    }

    /// Replace the alpha channel with a constant value
    pub fn with_opacity(&self, alpha: u8) -> Canvas {
        let mut out = self.clone();
        for pixel in out.image.pixels_mut() {
            pixel.0[3] = alpha;
        }
        out
    }

    /// Mask the canvas to its inscribed ellipse
    ///
    /// Pixels inside become fully opaque, pixels outside fully transparent.
    pub fn mask_to_circle(&mut self) {
        let rx = (self.width().saturating_sub(1)) as f32 / 2.0;
        let ry = (self.height().saturating_sub(1)) as f32 / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let (w, h) = self.dimensions();
        for y in 0..h {
            for x in 0..w {
                let dx = (x as f32 - rx) / rx;
                let dy = (y as f32 - ry) / ry;
                let alpha = if dx * dx + dy * dy <= 1.0 { 255 } else { 0 };
                self.image.get_pixel_mut(x, y).0[3] = alpha;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_roundtrip() {
        let mut canvas = Canvas::new(10, 10);
        canvas.set_pixel(3, 4, [1, 2, 3, 4]);
        assert_eq!(canvas.get_pixel(3, 4), Some([1, 2, 3, 4]));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut canvas = Canvas::new(10, 10);
        canvas.set_pixel(-1, 0, [255; 4]);
        canvas.set_pixel(10, 0, [255; 4]);
        assert_eq!(canvas.get_pixel(-1, 0), None);
        assert_eq!(canvas.get_pixel(10, 0), None);
        assert_eq!(canvas.get_pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_blend_fill() {
        let mut canvas = Canvas::filled(4, 4, [0, 0, 0, 255]);
        canvas.blend_fill([255, 255, 255, 128]);
        let pixel = canvas.get_pixel(0, 0).unwrap();
        assert!(pixel[0] > 120 && pixel[0] < 135);
    }

    #[test]
    fn test_paste_replaces_alpha() {
        let mut canvas = Canvas::filled(8, 8, [10, 10, 10, 255]);
        let patch = Canvas::filled(2, 2, [50, 60, 70, 0]);
        canvas.paste(&patch, 1, 1);
        assert_eq!(canvas.get_pixel(1, 1), Some([50, 60, 70, 0]));
    }

    #[test]
    fn test_paste_masked_blends() {
        let mut canvas = Canvas::filled(8, 8, [0, 0, 0, 255]);
        let patch = Canvas::filled(2, 2, [255, 255, 255, 0]);
        canvas.paste_masked(&patch, 0, 0);
        // Fully transparent patch leaves the background alone
        assert_eq!(canvas.get_pixel(0, 0), Some([0, 0, 0, 255]));
    }

    #[test]
    fn test_crop_clamped() {
        let canvas = Canvas::filled(10, 10, [9, 9, 9, 255]);
        let cropped = canvas.crop_clamped(Rect::new(5, 5, 20, 20));
        assert_eq!(cropped.dimensions(), (5, 5));

        let outside = canvas.crop_clamped(Rect::new(50, 50, 60, 60));
        assert_eq!(outside.dimensions(), (1, 1));
    }

    #[test]
    fn test_resized() {
        let canvas = Canvas::filled(10, 10, [9, 9, 9, 255]);
        assert_eq!(canvas.resized(4, 6).dimensions(), (4, 6));
    }

    #[test]
    fn test_mask_to_circle() {
        let mut canvas = Canvas::filled(21, 21, [100, 100, 100, 255]);
        canvas.mask_to_circle();
        // Corners are cut, the center survives
        assert_eq!(canvas.get_pixel(0, 0).unwrap()[3], 0);
        assert_eq!(canvas.get_pixel(20, 20).unwrap()[3], 0);
        assert_eq!(canvas.get_pixel(10, 10).unwrap()[3], 255);
    }

    #[test]
    fn test_darkened() {
        let canvas = Canvas::filled(2, 2, [100, 200, 50, 180]);
        let dark = canvas.darkened(0.5);
        assert_eq!(dark.get_pixel(0, 0), Some([50, 100, 25, 180]));
    }
}
