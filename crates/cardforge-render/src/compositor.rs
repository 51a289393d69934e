//! Layer compositing
//!
//! Each function paints one layer of the card pipeline onto the canvas.
//! They are applied in a fixed order by the renderer: base texture,
//! border, edge strips, zone gradients, art, zone frames, ornaments,
//! stat badges. Rectangle and ellipse bounds include their far edge, the
//! convention the frame geometry was calibrated against.

use cardforge_core::{color, Canvas, Rect, Rgb, Rgba8};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_ellipse_mut, draw_hollow_rect_mut,
};
use imageproc::rect::Rect as PixelRect;

use crate::layout::Layout;
use crate::template::Template;
use crate::theme::Theme;

/// Tile size of the background texture
const TEXTURE_TILE: u32 = 200;

// Edge strip placement
const STRIP_CORNER_INSET: i32 = 55;
const STRIP_MARGIN: i32 = 8;
const STRIP_THICKNESS: i32 = 18;

// Corner L-accents
const CORNER_LEN: i32 = 35;
const CORNER_OFFSET: i32 = 14;
const CORNER_THICKNESS: i32 = 6;

// Art inset and inner shadow
const ART_PADDING: i32 = 6;
const ART_SHADOW_STEPS: i32 = 10;
const ART_SHADOW_ALPHA: f32 = 80.0;

// Stat badge
const BADGE_BLEED: i32 = 16;
const BADGE_TINT_ALPHA: u8 = 110;

// Ornament placement
const CORNER_GEM_INSET: i32 = 18;
const EDGE_GEM_INSET: i32 = 12;

/// Base fill: tiled darkened texture unified by a translucent overlay
pub fn paint_base(canvas: &mut Canvas, template: &Template, theme: &Theme) {
    let tile = template
        .texture()
        .resized(TEXTURE_TILE, TEXTURE_TILE)
        .darkened(theme.texture_brightness);

    let (w, h) = canvas.dimensions();
    for x in (0..w).step_by(TEXTURE_TILE as usize) {
        for y in (0..h).step_by(TEXTURE_TILE as usize) {
            canvas.paste(&tile, x as i32, y as i32);
        }
    }

    canvas.blend_fill(color::with_alpha(theme.base, theme.overlay_alpha));
}

/// Three concentric border outlines plus corner L-accents
pub fn paint_border(canvas: &mut Canvas, theme: &Theme) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;

    stroke_rect(canvas, Rect::new(0, 0, w - 1, h - 1), theme.accent_dark, 4);
    stroke_rect(canvas, Rect::new(6, 6, w - 7, h - 7), theme.accent, 3);
    stroke_rect(canvas, Rect::new(12, 12, w - 13, h - 13), theme.accent_light, 1);

    let corners = [
        (CORNER_OFFSET, CORNER_OFFSET, 1, 1),
        (w - CORNER_OFFSET, CORNER_OFFSET, -1, 1),
        (CORNER_OFFSET, h - CORNER_OFFSET, 1, -1),
        (w - CORNER_OFFSET, h - CORNER_OFFSET, -1, -1),
    ];

    for (cx, cy, dx, dy) in corners {
        let arm_h = ordered_rect(cx, cy, cx + CORNER_LEN * dx, cy + CORNER_THICKNESS * dy);
        fill_rect(canvas, arm_h, theme.accent_dark);
        stroke_rect(canvas, arm_h, theme.accent, 1);

        let arm_v = ordered_rect(cx, cy, cx + CORNER_THICKNESS * dx, cy + CORNER_LEN * dy);
        fill_rect(canvas, arm_v, theme.accent_dark);
        stroke_rect(canvas, arm_v, theme.accent, 1);
    }
}

/// Decorative scrollwork strips along all four edges
///
/// Strips are resized to span the edge between the corner insets and get
/// a constant reduced alpha, so the background still shows through.
pub fn paint_edge_strips(canvas: &mut Canvas, template: &Template, theme: &Theme) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;
    let edges = template.edges();

    let span_w = (w - STRIP_CORNER_INSET * 2).max(1) as u32;
    let span_h = (h - STRIP_CORNER_INSET * 2).max(1) as u32;
    let thick = STRIP_THICKNESS as u32;

    let prepare = |strip: &Canvas, tw: u32, th: u32| strip.resized(tw, th).with_opacity(theme.strip_opacity);

    canvas.paste_masked(&prepare(&edges.top, span_w, thick), STRIP_CORNER_INSET, STRIP_MARGIN);
    canvas.paste_masked(
        &prepare(&edges.bottom, span_w, thick),
        STRIP_CORNER_INSET,
        h - STRIP_MARGIN - STRIP_THICKNESS,
    );
    canvas.paste_masked(&prepare(&edges.left, thick, span_h), STRIP_MARGIN, STRIP_CORNER_INSET);
    canvas.paste_masked(
        &prepare(&edges.right, thick, span_h),
        w - STRIP_MARGIN - STRIP_THICKNESS,
        STRIP_CORNER_INSET,
    );
}

/// Vertical tonal gradient across a zone
///
/// The blend factor is a monotonic sine over the full zone height, rising
/// from the base color to the tint and back. Preserved as calibrated;
/// not a symmetric peak-centered curve.
pub fn paint_zone_gradient(canvas: &mut Canvas, rect: Rect, theme: &Theme) {
    let height = rect.height();
    for i in 0..height {
        let progress = i as f32 / height as f32;
        let curve = (progress * std::f32::consts::PI).sin();
        let fill = color::lerp(theme.base, theme.zone_tint, curve * theme.zone_blend);
        for x in rect.x0..=rect.x1 {
            canvas.set_pixel(x, rect.y0 + i, color::with_alpha(fill, 255));
        }
    }
}

/// Place artwork in the art zone: scale to cover, center-crop, then an
/// inward shadow of fading concentric outlines
pub fn place_art(canvas: &mut Canvas, art: &Canvas, art_zone: Rect) {
    let window = Rect::new(
        art_zone.x0 + ART_PADDING,
        art_zone.y0 + ART_PADDING,
        art_zone.x0 + art_zone.width() - ART_PADDING,
        art_zone.y0 + art_zone.height() - ART_PADDING,
    );
    let window_w = window.width();
    let window_h = window.height();
    if window_w <= 0 || window_h <= 0 || art.width() == 0 || art.height() == 0 {
        return;
    }

    // Scale to cover the window, never letterbox
    let art_ratio = art.width() as f32 / art.height() as f32;
    let window_ratio = window_w as f32 / window_h as f32;
    let (new_w, new_h) = if art_ratio > window_ratio {
        (((window_h as f32 * art_ratio) as i32).max(window_w), window_h)
    } else {
        (window_w, ((window_w as f32 / art_ratio) as i32).max(window_h))
    };

    let resized = art.resized(new_w as u32, new_h as u32);
    let crop_x = (new_w - window_w) / 2;
    let crop_y = (new_h - window_h) / 2;
    let cropped = resized.crop_clamped(Rect::new(crop_x, crop_y, crop_x + window_w, crop_y + window_h));
    canvas.paste(&cropped, window.x0, window.y0);

    for i in 0..ART_SHADOW_STEPS {
        let alpha = (ART_SHADOW_ALPHA * (1.0 - i as f32 / ART_SHADOW_STEPS as f32)) as u8;
        let ring = Rect::new(
            window.x0 + i,
            window.y0 + i,
            window.x0 + window_w - i,
            window.y0 + window_h - i,
        );
        blend_outline(canvas, ring, [0, 0, 0, alpha]);
    }
}

/// Two-tone frame around a zone; `thin` draws a single lighter outline
pub fn paint_zone_frame(canvas: &mut Canvas, rect: Rect, theme: &Theme, thin: bool) {
    let width = if thin { 2 } else { 3 };
    stroke_rect(canvas, rect, theme.accent, width);
    if !thin {
        stroke_rect(canvas, rect.inset(3), theme.accent_dark, 1);
    }
}

/// Small decorative gems: the type/text seam, the four corners, and the
/// four edge midpoints
pub fn paint_ornaments(canvas: &mut Canvas, layout: &Layout, theme: &Theme) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;
    let mid_x = w / 2;

    paint_gem(canvas, mid_x, layout.text_zone.y0, 7, theme);

    let c = CORNER_GEM_INSET;
    for (x, y) in [(c, c), (w - c, c), (c, h - c), (w - c, h - c)] {
        paint_gem(canvas, x, y, 6, theme);
    }

    let e = EDGE_GEM_INSET;
    for (x, y) in [(mid_x, e), (mid_x, h - e), (e, h / 2), (w - e, h / 2)] {
        paint_gem(canvas, x, y, 5, theme);
    }
}

/// Concentric-ellipse gem: accent ring, gem fill, highlight dot
fn paint_gem(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32, theme: &Theme) {
    fill_circle(canvas, cx, cy, radius + 2, theme.accent);
    stroke_circle(canvas, cx, cy, radius + 2, theme.accent_light, 1);

    fill_circle(canvas, cx, cy, radius - 1, theme.gem_blue);
    stroke_circle(canvas, cx, cy, radius - 1, theme.accent_dark, 1);

    fill_circle(canvas, cx - radius + 3, cy - radius + 2, 1, theme.gem_highlight);
}

/// Circular stat badge: the template gem swatch resized, tinted, masked
/// to a circle and ringed by two outlines
pub fn paint_stat_badge(
    canvas: &mut Canvas,
    template: &Template,
    cx: i32,
    cy: i32,
    radius: i32,
    tint: Rgb,
    theme: &Theme,
) {
    let badge_size = (radius * 2 + BADGE_BLEED) as u32;
    let mut badge = template.gem().resized(badge_size, badge_size);
    badge.blend_fill(color::with_alpha(tint, BADGE_TINT_ALPHA));
    badge.mask_to_circle();

    let half = badge_size as i32 / 2;
    canvas.paste_masked(&badge, cx - half, cy - half);

    stroke_circle(canvas, cx, cy, radius + 4, theme.accent, 3);
    stroke_circle(canvas, cx, cy, radius + 1, theme.accent_light, 2);
}

fn ordered_rect(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
    Rect::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
}

/// Outline a rectangle, stroking `width` pixels inward from the bounds
pub(crate) fn stroke_rect(canvas: &mut Canvas, rect: Rect, fill: Rgb, width: i32) {
    let color = image::Rgba(color::with_alpha(fill, 255));
    for i in 0..width {
        let w = rect.width() + 1 - 2 * i;
        let h = rect.height() + 1 - 2 * i;
        if w < 1 || h < 1 {
            break;
        }
        let ring = PixelRect::at(rect.x0 + i, rect.y0 + i).of_size(w as u32, h as u32);
        draw_hollow_rect_mut(canvas.image_mut(), ring, color);
    }
}

/// Fill a rectangle (bounds inclusive)
pub(crate) fn fill_rect(canvas: &mut Canvas, rect: Rect, fill: Rgb) {
    let w = rect.width() + 1;
    let h = rect.height() + 1;
    if w < 1 || h < 1 {
        return;
    }
    let area = PixelRect::at(rect.x0, rect.y0).of_size(w as u32, h as u32);
    draw_filled_rect_mut(canvas.image_mut(), area, image::Rgba(color::with_alpha(fill, 255)));
}

/// Outline a circle, stroking `width` pixels inward
pub(crate) fn stroke_circle(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32, fill: Rgb, width: i32) {
    let color = image::Rgba(color::with_alpha(fill, 255));
    for i in 0..width {
        let r = radius - i;
        if r < 1 {
            break;
        }
        draw_hollow_ellipse_mut(canvas.image_mut(), (cx, cy), r, r, color);
    }
}

/// Fill a circle
pub(crate) fn fill_circle(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32, fill: Rgb) {
    if radius < 1 {
        return;
    }
    draw_filled_ellipse_mut(
        canvas.image_mut(),
        (cx, cy),
        radius,
        radius,
        image::Rgba(color::with_alpha(fill, 255)),
    );
}

/// Alpha-blend a 1-pixel rectangle outline (bounds inclusive)
fn blend_outline(canvas: &mut Canvas, rect: Rect, rgba: Rgba8) {
    if rect.width() < 0 || rect.height() < 0 {
        return;
    }
    for x in rect.x0..=rect.x1 {
        canvas.blend_pixel(x, rect.y0, rgba);
        if rect.y1 != rect.y0 {
            canvas.blend_pixel(x, rect.y1, rgba);
        }
    }
    for y in (rect.y0 + 1)..rect.y1 {
        canvas.blend_pixel(rect.x0, y, rgba);
        if rect.x1 != rect.x0 {
            canvas.blend_pixel(rect.x1, y, rgba);
        }
    }
}
