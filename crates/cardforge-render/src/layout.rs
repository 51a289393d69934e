//! Proportional zone layout
//!
//! Converts the template's pixel dimensions into the fixed zone layout:
//! four content bands (name, art, type line, rules text) stacked top to
//! bottom inside the border inset, with the stat band taking whatever
//! vertical space remains.

use cardforge_core::Rect;

use crate::theme::Theme;

/// Computed zone layout for one template size
///
/// Deterministic function of the canvas size and the theme constants;
/// computed once at renderer construction and reused for every build.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Border-inset content area containing every zone
    pub content: Rect,
    pub name_zone: Rect,
    pub art_zone: Rect,
    pub type_zone: Rect,
    pub text_zone: Rect,
    /// Vertical center of the stat band
    pub badge_y: i32,
    pub badge_radius: i32,
    /// Attack badge center x (left side)
    pub attack_x: i32,
    /// Defense badge center x (right side)
    pub defense_x: i32,
}

impl Layout {
    /// Compute the layout for a canvas of the given size
    pub fn compute(width: u32, height: u32, theme: &Theme) -> Self {
        let width = width as i32;
        let height = height as i32;

        let content = Rect::new(
            theme.border_thickness,
            theme.border_thickness,
            width - theme.border_thickness,
            height - theme.border_thickness,
        );
        let content_height = content.height() as f32;

        let mut y = content.y0;
        let mut band = |ratio: f32| {
            let zone_height = (content_height * ratio) as i32;
            let zone = Rect::new(content.x0, y, content.x1, y + zone_height);
            y += zone_height + theme.zone_gap;
            zone
        };

        let name_zone = band(theme.name_ratio);
        let art_zone = band(theme.art_ratio);
        let type_zone = band(theme.type_ratio);
        let text_zone = band(theme.text_ratio);

        // The stat band is the leftover space below the text zone
        let remaining = content.y1 - y;
        let badge_y = y + remaining / 2;

        Self {
            content,
            name_zone,
            art_zone,
            type_zone,
            text_zone,
            badge_y,
            badge_radius: theme.badge_radius,
            attack_x: content.x0 + theme.badge_inset,
            defense_x: content.x1 - theme.badge_inset,
        }
    }

    /// Attack badge center
    pub fn attack_center(&self) -> (i32, i32) {
        (self.attack_x, self.badge_y)
    }

    /// Defense badge center
    pub fn defense_center(&self) -> (i32, i32) {
        (self.defense_x, self.badge_y)
    }

    /// The four content zones, top to bottom
    pub fn zones(&self) -> [Rect; 4] {
        [self.name_zone, self.art_zone, self.type_zone, self.text_zone]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layouts() -> Vec<Layout> {
        let theme = Theme::default();
        [(750, 1050), (500, 700), (1024, 1024), (300, 420)]
            .iter()
            .map(|&(w, h)| Layout::compute(w, h, &theme))
            .collect()
    }

    #[test]
    fn test_zones_inside_content() {
        for layout in layouts() {
            for zone in layout.zones() {
                assert!(
                    layout.content.contains(&zone),
                    "zone {zone:?} outside content {:?}",
                    layout.content
                );
            }
        }
    }

    #[test]
    fn test_zones_do_not_overlap() {
        for layout in layouts() {
            let zones = layout.zones();
            for i in 0..zones.len() {
                for j in (i + 1)..zones.len() {
                    assert!(!zones[i].overlaps(&zones[j]));
                }
            }
        }
    }

    #[test]
    fn test_zones_stack_with_gap() {
        let theme = Theme::default();
        let layout = Layout::compute(750, 1050, &theme);
        assert_eq!(layout.art_zone.y0, layout.name_zone.y1 + theme.zone_gap);
        assert_eq!(layout.type_zone.y0, layout.art_zone.y1 + theme.zone_gap);
        assert_eq!(layout.text_zone.y0, layout.type_zone.y1 + theme.zone_gap);
    }

    #[test]
    fn test_badges_in_stat_band() {
        let layout = Layout::compute(750, 1050, &Theme::default());
        assert!(layout.badge_y > layout.text_zone.y1);
        assert!(layout.badge_y < layout.content.y1);
        assert!(layout.attack_x < layout.defense_x);
        assert_eq!(layout.attack_x - layout.content.x0, layout.content.x1 - layout.defense_x);
    }

    #[test]
    fn test_deterministic() {
        let theme = Theme::default();
        let a = Layout::compute(750, 1050, &theme);
        let b = Layout::compute(750, 1050, &theme);
        assert_eq!(a.zones(), b.zones());
        assert_eq!(a.badge_y, b.badge_y);
    }

    #[test]
    fn test_known_positions() {
        // 1050 tall - 70 border = 980 content height
        let layout = Layout::compute(750, 1050, &Theme::default());
        assert_eq!(layout.content, Rect::new(35, 35, 715, 1015));
        assert_eq!(layout.name_zone.height(), 78); // 980 * 0.08
        assert_eq!(layout.art_zone.height(), 431); // 980 * 0.44
        assert_eq!(layout.type_zone.height(), 49); // 980 * 0.05
        assert_eq!(layout.text_zone.height(), 303); // 980 * 0.31
    }
}
