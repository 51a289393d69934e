//! Rendering theme
//!
//! All tunable constants of the card frame live in one immutable struct
//! passed to the renderer at construction, so multiple templates/themes can
//! coexist. The defaults are the production dark-fantasy frame values.

use cardforge_core::Rgb;

/// Card frame configuration: layout ratios, palette, typography
#[derive(Debug, Clone)]
pub struct Theme {
    // Boundaries
    /// Outer border thickness framing the content area
    pub border_thickness: i32,
    /// Vertical gap between zones
    pub zone_gap: i32,

    // Zone proportions (fractions of content height; the stat band takes
    // whatever remains below the text zone)
    pub name_ratio: f32,
    pub art_ratio: f32,
    pub type_ratio: f32,
    pub text_ratio: f32,

    // Stat badges
    pub badge_radius: i32,
    /// Horizontal distance of each badge center from the content edge
    pub badge_inset: i32,

    // Base palette
    pub base: Rgb,
    pub zone_tint: Rgb,
    /// Strength of the zone gradient toward `zone_tint`
    pub zone_blend: f32,
    pub accent: Rgb,
    pub accent_light: Rgb,
    pub accent_dark: Rgb,
    pub gem_blue: Rgb,
    pub gem_highlight: Rgb,
    pub attack_tint: Rgb,
    pub defense_tint: Rgb,

    // Text colors
    pub name_color: Rgb,
    pub type_color: Rgb,
    pub ability_color: Rgb,
    pub keyword_color: Rgb,
    pub flavor_color: Rgb,
    pub attack_color: Rgb,
    pub defense_color: Rgb,

    // Font sizes (pixels)
    pub name_size: f32,
    pub type_size: f32,
    pub body_size: f32,
    pub keyword_size: f32,
    pub flavor_size: f32,
    pub stat_size: f32,

    // Text layout
    pub text_h_padding: i32,
    pub ability_line_spacing: i32,
    pub flavor_line_spacing: i32,
    pub flavor_bottom_margin: i32,

    // Compositing strengths
    /// Alpha of the unifying overlay over the tiled texture
    pub overlay_alpha: u8,
    /// Alpha forced onto the decorative edge strips
    pub strip_opacity: u8,
    /// Brightness factor applied to the tiled texture
    pub texture_brightness: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border_thickness: 35,
            zone_gap: 8,

            name_ratio: 0.08,
            art_ratio: 0.44,
            type_ratio: 0.05,
            text_ratio: 0.31,

            badge_radius: 50,
            badge_inset: 70,

            base: [18, 32, 42],
            zone_tint: [38, 58, 66],
            zone_blend: 0.4,
            accent: [165, 130, 85],
            accent_light: [195, 165, 115],
            accent_dark: [120, 90, 55],
            gem_blue: [55, 95, 110],
            gem_highlight: [120, 170, 185],
            attack_tint: [150, 60, 60],
            defense_tint: [60, 90, 150],

            name_color: [225, 195, 135],
            type_color: [170, 150, 115],
            ability_color: [225, 220, 205],
            keyword_color: [240, 210, 150],
            flavor_color: [95, 145, 155],
            attack_color: [255, 235, 215],
            defense_color: [215, 235, 255],

            name_size: 54.0,
            type_size: 28.0,
            body_size: 32.0,
            keyword_size: 32.0,
            flavor_size: 24.0,
            stat_size: 50.0,

            text_h_padding: 20,
            ability_line_spacing: 42,
            flavor_line_spacing: 32,
            flavor_bottom_margin: 20,

            overlay_alpha: 190,
            strip_opacity: 180,
            texture_brightness: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratios_leave_stat_band() {
        let theme = Theme::default();
        let total = theme.name_ratio + theme.art_ratio + theme.type_ratio + theme.text_ratio;
        assert!(total < 1.0);
    }
}
