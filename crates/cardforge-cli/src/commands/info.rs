//! Info command

use std::path::Path;

use cardforge_core::Rect;
use cardforge_render::CardRenderer;

pub fn run(template: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let renderer = CardRenderer::open(template)?;
    let layout = renderer.layout();

    println!("Template: {}", template.display());
    println!("==========================\n");

    println!(
        "Card size:    {}x{}",
        renderer.template().width(),
        renderer.template().height()
    );
    println!(
        "Content area: {}x{} at ({}, {})",
        layout.content.width(),
        layout.content.height(),
        layout.content.x0,
        layout.content.y0
    );

    println!();
    println!("Zones:");
    let zones: [(&str, Rect); 4] = [
        ("name", layout.name_zone),
        ("art", layout.art_zone),
        ("type", layout.type_zone),
        ("text", layout.text_zone),
    ];
    for (label, zone) in zones {
        println!(
            "  {:<5} {:>4}x{:<4} at ({}, {})",
            label,
            zone.width(),
            zone.height(),
            zone.x0,
            zone.y0
        );
    }

    println!();
    println!("Stat badges:");
    println!(
        "  attack  center ({}, {}), radius {}",
        layout.attack_x, layout.badge_y, layout.badge_radius
    );
    println!(
        "  defense center ({}, {}), radius {}",
        layout.defense_x, layout.badge_y, layout.badge_radius
    );

    Ok(())
}
