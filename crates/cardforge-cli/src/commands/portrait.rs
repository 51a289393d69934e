//! Portrait command
//!
//! Command-line contract: missing input files are reported as user-facing
//! errors with exit code 1; on success both output paths are printed.

use std::path::Path;
use std::process;

use cardforge_core::Canvas;
use cardforge_render::portrait::{self, PortraitOptions};

pub fn run(
    artwork_path: &Path,
    name: &str,
    face_y: f32,
    zoom: f32,
    frame_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    if !artwork_path.exists() {
        eprintln!("Error: artwork file not found: {}", artwork_path.display());
        process::exit(1);
    }
    if !frame_path.exists() {
        eprintln!("Error: frame file not found: {}", frame_path.display());
        process::exit(1);
    }

    println!("Creating hero portrait: {}", name);
    println!("  Artwork: {}", artwork_path.display());
    println!("  Face position: {:.0}% from top", face_y * 100.0);
    println!("  Zoom: {}x", zoom);

    let frame = Canvas::open(frame_path)?;
    let artwork = Canvas::open(artwork_path)?;

    let result = portrait::compose(&frame, &artwork, &PortraitOptions { face_y, zoom });

    // Outputs land next to the artwork
    let out_dir = artwork_path.parent().unwrap_or_else(|| Path::new("."));
    let full_path = out_dir.join(format!("{}_full.png", name));
    let game_path = out_dir.join(format!("{}.png", name));

    result.full.save(&full_path)?;
    result.game.save(&game_path)?;

    println!();
    println!("Created:");
    println!(
        "  {} ({}x{})",
        full_path.display(),
        portrait::FRAME_SIZE,
        portrait::FRAME_SIZE
    );
    println!(
        "  {} ({}x{})",
        game_path.display(),
        portrait::GAME_SIZE,
        portrait::GAME_SIZE
    );

    Ok(())
}
