//! Typesetting
//!
//! All card text is drawn with a drop shadow (the string once in black at
//! a small offset, then in the foreground color) and centered using inked
//! glyph bounding boxes. Centering corrects for the bounding-box offsets
//! from the draw origin, not just the advance width; centering by advance
//! alone is visibly off for fonts with sloped bearings.
//!
//! Measurement and drawing share a single glyph layout walk so a measured
//! box always matches what lands on the canvas.

use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use cardforge_core::{color, Canvas, Rect, Rgb};

use crate::fonts::FontSet;
use crate::layout::Layout;
use crate::theme::Theme;

/// Vertical inset of the usable text box inside the text zone
const TEXT_BOX_V_INSET: i32 = 12;
/// Separation between the ability block and the flavor block
const FLAVOR_SEPARATION: i32 = 25;

/// Separators accepted after a leading keyword
const KEYWORD_SEPARATORS: [char; 4] = ['\u{2014}', ':', '-', '\u{2013}'];

/// Inked bounding box of a laid-out string, relative to the draw origin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// Walk the glyphs of `text`, yielding each outlined glyph positioned
/// relative to an origin at the top of the ascender
fn each_glyph(font: &FontArc, size: f32, text: &str, mut f: impl FnMut(ab_glyph::OutlinedGlyph)) {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let mut caret = 0.0f32;
    let mut prev: Option<GlyphId> = None;

    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = prev {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(id);
        prev = Some(id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            f(outlined);
        }
    }
}

/// Inked bounding box of `text`, relative to the draw origin
///
/// Whitespace-only strings have no ink and measure empty.
pub fn measure(font: &FontArc, size: f32, text: &str) -> TextBounds {
    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    each_glyph(font, size, text, |outlined| {
        let b = outlined.px_bounds();
        min_x = min_x.min(b.min.x);
        min_y = min_y.min(b.min.y);
        max_x = max_x.max(b.max.x);
        max_y = max_y.max(b.max.y);
    });

    if !min_x.is_finite() {
        return TextBounds::default();
    }

    TextBounds {
        x0: min_x.floor() as i32,
        y0: min_y.floor() as i32,
        x1: max_x.ceil() as i32,
        y1: max_y.ceil() as i32,
    }
}

/// Rasterize `text` at `(x, y)` (top of the ascender), blending glyph
/// coverage over the canvas
pub fn draw_text(canvas: &mut Canvas, font: &FontArc, size: f32, x: i32, y: i32, text: &str, fill: Rgb) {
    each_glyph(font, size, text, |outlined| {
        let bounds = outlined.px_bounds();
        let gx = x + bounds.min.x as i32;
        let gy = y + bounds.min.y as i32;
        outlined.draw(|px, py, coverage| {
            let alpha = (coverage.clamp(0.0, 1.0) * 255.0) as u8;
            if alpha > 0 {
                canvas.blend_pixel(gx + px as i32, gy + py as i32, color::with_alpha(fill, alpha));
            }
        });
    });
}

/// A line split on its leading keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSplit<'a> {
    pub keyword: &'a str,
    pub separator: char,
    pub rest: &'a str,
}

/// Byte length of a leading word: one uppercase ASCII letter followed by
/// any ASCII letters
fn leading_word(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    let (_, first) = chars.next()?;
    if !first.is_ascii_uppercase() {
        return None;
    }
    for (idx, ch) in chars {
        if !ch.is_ascii_alphabetic() {
            return Some(idx);
        }
    }
    Some(s.len())
}

/// Match optional whitespace, a separator, and trailing whitespace.
/// Returns the separator and the bytes consumed.
fn leading_separator(s: &str) -> Option<(char, usize)> {
    let trimmed = s.trim_start();
    let ws = s.len() - trimmed.len();
    let sep = trimmed.chars().next()?;
    if !KEYWORD_SEPARATORS.contains(&sep) {
        return None;
    }
    let after = &trimmed[sep.len_utf8()..];
    let rest_ws = after.len() - after.trim_start().len();
    Some((sep, ws + sep.len_utf8() + rest_ws))
}

/// Split an ability line on the leading-keyword rule: one or two
/// capitalized words at the start of the line, followed by an em dash,
/// colon, hyphen or en dash
pub fn split_keyword(line: &str) -> Option<KeywordSplit<'_>> {
    let first = leading_word(line)?;

    // Prefer the two-word keyword when the separator still matches after
    // it, mirroring a greedy match with backtracking
    let mut candidates = [None, Some(first)];
    let after_first = &line[first..];
    if let Some(ws) = after_first.chars().next().filter(|c| c.is_whitespace()) {
        let ws_len = ws.len_utf8();
        if let Some(second) = leading_word(&after_first[ws_len..]) {
            candidates[0] = Some(first + ws_len + second);
        }
    }

    for keyword_len in candidates.into_iter().flatten() {
        if let Some((separator, consumed)) = leading_separator(&line[keyword_len..]) {
            return Some(KeywordSplit {
                keyword: &line[..keyword_len],
                separator,
                rest: &line[keyword_len + consumed..],
            });
        }
    }
    None
}

/// Draws every text role of the card
pub struct TextPainter<'a> {
    fonts: &'a FontSet,
    theme: &'a Theme,
}

impl<'a> TextPainter<'a> {
    pub fn new(fonts: &'a FontSet, theme: &'a Theme) -> Self {
        Self { fonts, theme }
    }

    fn draw_shadowed(
        &self,
        canvas: &mut Canvas,
        font: &FontArc,
        size: f32,
        x: i32,
        y: i32,
        text: &str,
        fill: Rgb,
        offset: i32,
    ) {
        draw_text(canvas, font, size, x + offset, y + offset, text, [0, 0, 0]);
        draw_text(canvas, font, size, x, y, text, fill);
    }

    fn center_in_rect(
        &self,
        canvas: &mut Canvas,
        font: &FontArc,
        size: f32,
        rect: Rect,
        text: &str,
        fill: Rgb,
        offset: i32,
    ) {
        let bounds = measure(font, size, text);
        if bounds.is_empty() {
            return;
        }
        let x = rect.x0 + (rect.width() - bounds.width()).div_euclid(2) - bounds.x0;
        let y = rect.y0 + (rect.height() - bounds.height()).div_euclid(2) - bounds.y0;
        self.draw_shadowed(canvas, font, size, x, y, text, fill, offset);
    }

    /// Card name: bold, gold, centered in the name zone
    pub fn render_name(&self, canvas: &mut Canvas, layout: &Layout, name: &str) {
        if name.is_empty() {
            return;
        }
        let t = self.theme;
        self.center_in_rect(canvas, &self.fonts.name, t.name_size, layout.name_zone, name, t.name_color, 3);
    }

    /// Type line: regular, muted, centered in the type zone
    pub fn render_type_line(&self, canvas: &mut Canvas, layout: &Layout, type_line: &str) {
        if type_line.is_empty() {
            return;
        }
        let t = self.theme;
        self.center_in_rect(canvas, &self.fonts.type_line, t.type_size, layout.type_zone, type_line, t.type_color, 2);
    }

    /// Ability lines centered in the space above the flavor block; flavor
    /// lines anchored to the bottom of the text zone
    pub fn render_text_block(
        &self,
        canvas: &mut Canvas,
        layout: &Layout,
        abilities: &[String],
        flavor: &[String],
    ) {
        if abilities.is_empty() && flavor.is_empty() {
            return;
        }
        let t = self.theme;
        let zone = layout.text_zone;
        let left = zone.x0 + t.text_h_padding;
        let width = zone.width() - 2 * t.text_h_padding;
        let top = zone.y0 + TEXT_BOX_V_INSET;
        let bottom = zone.y1 - TEXT_BOX_V_INSET;

        // Flavor is bottom-anchored; abilities center in what is left
        let flavor_start_y = if flavor.is_empty() {
            bottom
        } else {
            bottom - t.flavor_bottom_margin - flavor.len() as i32 * t.flavor_line_spacing
                + t.flavor_line_spacing / 2
        };
        let ability_bottom = if flavor.is_empty() {
            bottom
        } else {
            flavor_start_y - FLAVOR_SEPARATION
        };

        if !abilities.is_empty() {
            let total = abilities.len() as i32 * t.ability_line_spacing;
            let start_y = top + (ability_bottom - top - total).div_euclid(2);
            for (i, line) in abilities.iter().enumerate() {
                let y = start_y + i as i32 * t.ability_line_spacing;
                self.render_ability_line(canvas, line, y, left, width);
            }
        }

        for (i, line) in flavor.iter().enumerate() {
            let bounds = measure(&self.fonts.flavor, t.flavor_size, line);
            let x = left + (width - bounds.width()).div_euclid(2);
            let y = flavor_start_y + i as i32 * t.flavor_line_spacing;
            self.draw_shadowed(canvas, &self.fonts.flavor, t.flavor_size, x, y, line, t.flavor_color, 2);
        }
    }

    /// One ability line, with the leading keyword highlighted when the
    /// line matches the keyword rule
    fn render_ability_line(&self, canvas: &mut Canvas, line: &str, y: i32, left: i32, width: i32) {
        let t = self.theme;

        if let Some(split) = split_keyword(line) {
            let separator = format!(" {} ", split.separator);

            let keyword_w = measure(&self.fonts.keyword, t.keyword_size, split.keyword).width();
            let sep_w = measure(&self.fonts.body, t.body_size, &separator).width();
            let rest_w = measure(&self.fonts.body, t.body_size, split.rest).width();

            let total = keyword_w + sep_w + rest_w;
            let start_x = left + (width - total).div_euclid(2);

            self.draw_shadowed(canvas, &self.fonts.keyword, t.keyword_size, start_x, y, split.keyword, t.keyword_color, 2);
            self.draw_shadowed(canvas, &self.fonts.body, t.body_size, start_x + keyword_w, y, &separator, t.ability_color, 2);
            self.draw_shadowed(canvas, &self.fonts.body, t.body_size, start_x + keyword_w + sep_w, y, split.rest, t.ability_color, 2);
        } else {
            let bounds = measure(&self.fonts.body, t.body_size, line);
            let x = left + (width - bounds.width()).div_euclid(2);
            self.draw_shadowed(canvas, &self.fonts.body, t.body_size, x, y, line, t.ability_color, 2);
        }
    }

    /// Stat numbers centered on their badge centers
    pub fn render_stats(&self, canvas: &mut Canvas, layout: &Layout, attack: &str, defense: &str) {
        let t = self.theme;
        if !attack.is_empty() {
            let (cx, cy) = layout.attack_center();
            self.render_stat_number(canvas, attack, cx, cy, t.attack_color);
        }
        if !defense.is_empty() {
            let (cx, cy) = layout.defense_center();
            self.render_stat_number(canvas, defense, cx, cy, t.defense_color);
        }
    }

    fn render_stat_number(&self, canvas: &mut Canvas, value: &str, cx: i32, cy: i32, fill: Rgb) {
        let t = self.theme;
        let bounds = measure(&self.fonts.stat, t.stat_size, value);
        if bounds.is_empty() {
            return;
        }
        let x = cx - bounds.width().div_euclid(2) - bounds.x0;
        let y = cy - bounds.height().div_euclid(2) - bounds.y0;
        self.draw_shadowed(canvas, &self.fonts.stat, t.stat_size, x, y, value, fill, 3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_em_dash() {
        let split = split_keyword("Deathstrike — When Bloodrender attacks,").unwrap();
        assert_eq!(split.keyword, "Deathstrike");
        assert_eq!(split.separator, '\u{2014}');
        assert_eq!(split.rest, "When Bloodrender attacks,");
    }

    #[test]
    fn test_split_colon_no_spaces() {
        let split = split_keyword("Flying:blocks fliers").unwrap();
        assert_eq!(split.keyword, "Flying");
        assert_eq!(split.separator, ':');
        assert_eq!(split.rest, "blocks fliers");
    }

    #[test]
    fn test_split_hyphen_and_en_dash() {
        assert_eq!(split_keyword("Rush - attack now").unwrap().separator, '-');
        assert_eq!(split_keyword("Rush – attack now").unwrap().separator, '\u{2013}');
    }

    #[test]
    fn test_split_two_word_keyword() {
        let split = split_keyword("Grave Strength — +1 Attack per corpse").unwrap();
        assert_eq!(split.keyword, "Grave Strength");
        assert_eq!(split.rest, "+1 Attack per corpse");
    }

    #[test]
    fn test_split_backtracks_to_one_word() {
        // The second capitalized word is not followed by a separator, so
        // only the first word can be the keyword
        let split = split_keyword("Torment — Take Damage each turn").unwrap();
        assert_eq!(split.keyword, "Torment");
        assert_eq!(split.rest, "Take Damage each turn");
    }

    #[test]
    fn test_split_rejects_lowercase() {
        assert!(split_keyword("deathstrike — nope").is_none());
    }

    #[test]
    fn test_split_rejects_plain_line() {
        assert!(split_keyword("destroy target creature with less power.").is_none());
        assert!(split_keyword("").is_none());
    }

    #[test]
    fn test_split_rejects_three_words() {
        assert!(split_keyword("A B C — x").is_none());
    }

    #[test]
    fn test_split_empty_rest() {
        let split = split_keyword("Taunt:").unwrap();
        assert_eq!(split.keyword, "Taunt");
        assert_eq!(split.rest, "");
    }

    #[test]
    fn test_measure_empty() {
        // Whitespace has no ink regardless of font availability
        if let Some(fonts) = crate::fonts::FontSet::load() {
            assert!(measure(&fonts.body, 32.0, "   ").is_empty());
            assert!(measure(&fonts.body, 32.0, "").is_empty());
        }
    }

    #[test]
    fn test_measure_matches_draw() {
        let Some(fonts) = crate::fonts::FontSet::load() else {
            eprintln!("no system fonts; skipping");
            return;
        };

        let bounds = measure(&fonts.body, 32.0, "Wg");
        assert!(!bounds.is_empty());

        let mut canvas = Canvas::filled(200, 100, [0, 0, 0, 255]);
        draw_text(&mut canvas, &fonts.body, 32.0, 50, 20, "Wg", [255, 255, 255]);

        let mut ink: Option<(i32, i32, i32, i32)> = None;
        for y in 0..100 {
            for x in 0..200 {
                if canvas.get_pixel(x, y).unwrap()[0] > 0 {
                    let (x0, y0, x1, y1) = ink.unwrap_or((x, y, x, y));
                    ink = Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y)));
                }
            }
        }
        let (x0, y0, x1, y1) = ink.expect("text drew some ink");

        // Rendered ink stays inside the measured box (offset by the draw
        // position), and fills it to within a pixel on each side
        assert!(x0 >= 50 + bounds.x0 && x1 <= 50 + bounds.x1);
        assert!(y0 >= 20 + bounds.y0 && y1 <= 20 + bounds.y1);
        assert!(x0 - (50 + bounds.x0) <= 1 && (50 + bounds.x1) - x1 <= 2);
    }

    #[test]
    fn test_centering_within_one_pixel() {
        let Some(fonts) = crate::fonts::FontSet::load() else {
            eprintln!("no system fonts; skipping");
            return;
        };
        let theme = Theme::default();
        let painter = TextPainter::new(&fonts, &theme);

        let rect = Rect::new(20, 20, 620, 170);
        let mut canvas = Canvas::filled(700, 210, [0, 0, 0, 255]);
        // Scan for the red foreground only; the black shadow disappears
        // into the background
        painter.center_in_rect(&mut canvas, &fonts.name, 54.0, rect, "BLOODRENDER", [255, 0, 0], 2);

        let mut ink: Option<(i32, i32, i32, i32)> = None;
        for y in 0..210 {
            for x in 0..700 {
                let p = canvas.get_pixel(x, y).unwrap();
                if p[0] > 0 && p[1] == 0 {
                    let (x0, y0, x1, y1) = ink.unwrap_or((x, y, x, y));
                    ink = Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y)));
                }
            }
        }
        let (x0, y0, x1, y1) = ink.expect("name drew some ink");
        let (cx, cy) = rect.center();
        assert!(((x0 + x1) / 2 - cx).abs() <= 1, "horizontal centroid off");
        assert!(((y0 + y1) / 2 - cy).abs() <= 1, "vertical centroid off");
    }

    #[test]
    fn test_keyword_segments_sum_to_total() {
        let Some(fonts) = crate::fonts::FontSet::load() else {
            eprintln!("no system fonts; skipping");
            return;
        };
        let theme = Theme::default();
        let split = split_keyword("Deathstrike — When Bloodrender attacks,").unwrap();
        let separator = format!(" {} ", split.separator);

        let keyword_w = measure(&fonts.keyword, theme.keyword_size, split.keyword).width();
        let sep_w = measure(&fonts.body, theme.body_size, &separator).width();
        let rest_w = measure(&fonts.body, theme.body_size, split.rest).width();

        assert!(keyword_w > 0 && sep_w > 0 && rest_w > 0);

        // The composite line centers as one unit: equal margins on both
        // sides of the summed segment widths
        let total = keyword_w + sep_w + rest_w;
        let width = total + 100;
        let start_x = (width - total).div_euclid(2);
        let end_x = start_x + total;
        assert!(((width - end_x) - start_x).abs() <= 1);
    }
}
