//! Font loading
//!
//! Fonts come from fixed system paths with a generic fallback list, so a
//! machine without the preferred serif family still renders text. Font
//! problems never fail a build: when no candidate loads at all the
//! renderer simply skips its text layers.

use std::fs;

use ab_glyph::FontArc;
use tracing::debug;

const SERIF: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/dejavu/DejaVuSerif.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSerif-Regular.ttf",
];

const SERIF_BOLD: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSerif-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSerif-Bold.ttf",
];

const SERIF_ITALIC: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif-Italic.ttf",
    "/usr/share/fonts/dejavu/DejaVuSerif-Italic.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Italic.ttf",
    "/usr/share/fonts/liberation/LiberationSerif-Italic.ttf",
];

const SANS_BOLD: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Bold.ttf",
];

const GENERIC: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSerif.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

/// Fonts for every text role on the card
#[derive(Debug, Clone)]
pub struct FontSet {
    /// Card title (serif bold)
    pub name: FontArc,
    /// Type line (serif)
    pub type_line: FontArc,
    /// Ability text (serif)
    pub body: FontArc,
    /// Highlighted keyword lead-in (serif bold)
    pub keyword: FontArc,
    /// Flavor text (serif italic)
    pub flavor: FontArc,
    /// Stat numbers (sans bold)
    pub stat: FontArc,
}

fn load_first(paths: &[&str]) -> Option<FontArc> {
    for path in paths {
        if let Ok(bytes) = fs::read(path) {
            match FontArc::try_from_vec(bytes) {
                Ok(font) => {
                    debug!("Loaded font {}", path);
                    return Some(font);
                }
                Err(err) => debug!("Skipping unusable font {}: {}", path, err),
            }
        }
    }
    None
}

impl FontSet {
    /// Load the standard font set
    ///
    /// Each role tries its preferred family first, then the generic
    /// fallback list. Returns `None` only when no candidate font exists
    /// on the system at all.
    pub fn load() -> Option<Self> {
        let fallback = load_first(GENERIC)
            .or_else(|| load_first(SERIF))
            .or_else(|| load_first(SANS_BOLD))?;

        let role = |paths: &[&str]| load_first(paths).unwrap_or_else(|| fallback.clone());

        Some(Self {
            name: role(SERIF_BOLD),
            type_line: role(SERIF),
            body: role(SERIF),
            keyword: role(SERIF_BOLD),
            flavor: role(SERIF_ITALIC),
            stat: role(SANS_BOLD),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_first_missing_paths() {
        assert!(load_first(&["/nonexistent/font.ttf"]).is_none());
    }

    #[test]
    fn test_load_never_panics() {
        // Either a full set loads or the host has no fonts; both are fine
        let _ = FontSet::load();
    }
}
