//! Card renderer
//!
//! Owns the template, the derived layout, the theme and the fonts, all
//! computed once at construction. Every `build` call composites a fresh
//! canvas; nothing is shared between builds except these read-only parts.

use std::path::Path;

use cardforge_core::{color, Canvas, Result};
use tracing::{debug, warn};

use crate::compositor;
use crate::fonts::FontSet;
use crate::layout::Layout;
use crate::request::CardRequest;
use crate::template::Template;
use crate::text::TextPainter;
use crate::theme::Theme;

/// Composites card frames from a background template
pub struct CardRenderer {
    template: Template,
    layout: Layout,
    theme: Theme,
    fonts: Option<FontSet>,
}

impl CardRenderer {
    /// Load the template from a file and build a renderer with the
    /// default theme
    ///
    /// Fails if the template cannot be opened or decoded.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let template = Template::open(path)?;
        Ok(Self::new(template, Theme::default()))
    }

    /// Build a renderer from an in-memory template and theme
    pub fn new(template: Template, theme: Theme) -> Self {
        let layout = Layout::compute(template.width(), template.height(), &theme);
        let fonts = FontSet::load();
        if fonts.is_none() {
            warn!("No usable font found; text layers will be skipped");
        }
        Self {
            template,
            layout,
            theme,
            fonts,
        }
    }

    /// The template this renderer composites onto
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// The derived zone layout
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The active theme
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Compose a complete card
    ///
    /// Layers are applied in fixed order onto one fresh canvas. An art
    /// path that fails to load fails the whole build; empty text fields
    /// render nothing. The output has the template's dimensions.
    pub fn build(&self, request: &CardRequest) -> Result<Canvas> {
        let (width, height) = self.template.dimensions();
        debug!("Building {}x{} card '{}'", width, height, request.name);

        let mut canvas = Canvas::filled(width, height, color::with_alpha(self.theme.base, 255));

        // Background, border, edge decoration
        compositor::paint_base(&mut canvas, &self.template, &self.theme);
        compositor::paint_border(&mut canvas, &self.theme);
        compositor::paint_edge_strips(&mut canvas, &self.template, &self.theme);

        // Zone backgrounds
        for zone in self.layout.zones() {
            compositor::paint_zone_gradient(&mut canvas, zone, &self.theme);
        }

        // Artwork goes under the zone frames
        if let Some(art_path) = &request.art {
            let art = Canvas::open(art_path)?;
            compositor::place_art(&mut canvas, &art, self.layout.art_zone);
        }

        compositor::paint_zone_frame(&mut canvas, self.layout.name_zone, &self.theme, false);
        compositor::paint_zone_frame(&mut canvas, self.layout.art_zone, &self.theme, false);
        compositor::paint_zone_frame(&mut canvas, self.layout.type_zone, &self.theme, true);
        compositor::paint_zone_frame(&mut canvas, self.layout.text_zone, &self.theme, false);

        compositor::paint_ornaments(&mut canvas, &self.layout, &self.theme);

        let (ax, ay) = self.layout.attack_center();
        compositor::paint_stat_badge(
            &mut canvas,
            &self.template,
            ax,
            ay,
            self.layout.badge_radius,
            self.theme.attack_tint,
            &self.theme,
        );
        let (dx, dy) = self.layout.defense_center();
        compositor::paint_stat_badge(
            &mut canvas,
            &self.template,
            dx,
            dy,
            self.layout.badge_radius,
            self.theme.defense_tint,
            &self.theme,
        );

        if let Some(fonts) = &self.fonts {
            let painter = TextPainter::new(fonts, &self.theme);
            painter.render_name(&mut canvas, &self.layout, &request.name);
            painter.render_type_line(&mut canvas, &self.layout, &request.type_line);
            painter.render_text_block(&mut canvas, &self.layout, &request.abilities, &request.flavor);
            painter.render_stats(&mut canvas, &self.layout, &request.attack, &request.defense);
        }

        Ok(canvas)
    }
}
