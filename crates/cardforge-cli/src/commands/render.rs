//! Render command

use std::fs;
use std::path::Path;

use cardforge_render::{CardRenderer, CardRequest};
use tracing::info;

/// Flag values that override fields of a `--spec` file
#[derive(Debug, Default)]
pub struct Overrides {
    pub art: Option<std::path::PathBuf>,
    pub name: Option<String>,
    pub type_line: Option<String>,
    pub abilities: Vec<String>,
    pub flavor: Vec<String>,
    pub attack: Option<String>,
    pub defense: Option<String>,
}

pub fn run(
    template: &Path,
    spec: Option<&Path>,
    overrides: Overrides,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut request = match spec {
        Some(path) => {
            info!("Loading card description from {}", path.display());
            serde_json::from_str(&fs::read_to_string(path)?)?
        }
        None => CardRequest::new(),
    };

    if let Some(art) = overrides.art {
        request.art = Some(art);
    }
    if let Some(name) = overrides.name {
        request.name = name;
    }
    if let Some(type_line) = overrides.type_line {
        request.type_line = type_line;
    }
    if !overrides.abilities.is_empty() {
        request.abilities = overrides.abilities;
    }
    if !overrides.flavor.is_empty() {
        request.flavor = overrides.flavor;
    }
    if let Some(attack) = overrides.attack {
        request.attack = attack;
    }
    if let Some(defense) = overrides.defense {
        request.defense = defense;
    }

    let renderer = CardRenderer::open(template)?;
    info!(
        "Card size: {}x{}",
        renderer.template().width(),
        renderer.template().height()
    );

    let card = renderer.build(&request)?;
    card.save(output)?;
    println!("Saved: {}", output.display());

    Ok(())
}
