//! Deck command
//!
//! Renders every card in a JSON deck file to its own image.

use std::fs;
use std::path::Path;

use cardforge_render::{CardRenderer, CardRequest};
use tracing::info;

pub fn run(template: &Path, deck: &Path, out_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let requests: Vec<CardRequest> = serde_json::from_str(&fs::read_to_string(deck)?)?;
    info!("Loaded deck with {} cards", requests.len());

    let renderer = CardRenderer::open(template)?;
    fs::create_dir_all(out_dir)?;

    for (index, request) in requests.iter().enumerate() {
        let stem = if request.name.is_empty() {
            format!("card_{:03}", index)
        } else {
            slug(&request.name)
        };
        let path = out_dir.join(format!("{}.png", stem));

        let card = renderer.build(request)?;
        card.save(&path)?;
        info!("Rendered {}", path.display());
    }

    println!("Rendered {} cards to {}", requests.len(), out_dir.display());
    Ok(())
}

/// Filesystem-safe name derived from a card name
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_was_sep = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_was_sep = false;
        } else if !last_was_sep {
            out.push('_');
            last_was_sep = true;
        }
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}
