//! Cardforge CLI - card and hero portrait rendering
//!
//! A tool for compositing trading-card frames and circular hero
//! portraits from pre-made art assets.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;

/// Cardforge - composite trading cards and hero portraits
#[derive(Parser)]
#[command(name = "cardforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single card
    Render {
        /// Background template image
        template: PathBuf,

        /// Card description file (JSON); flags override its fields
        #[arg(long)]
        spec: Option<PathBuf>,

        /// Artwork for the art zone
        #[arg(long)]
        art: Option<PathBuf>,

        /// Card name
        #[arg(long)]
        name: Option<String>,

        /// Type line
        #[arg(long)]
        type_line: Option<String>,

        /// Ability text line (repeat for multiple lines)
        #[arg(long = "ability")]
        abilities: Vec<String>,

        /// Flavor text line (repeat for multiple lines)
        #[arg(long = "flavor")]
        flavor: Vec<String>,

        /// Attack value
        #[arg(long)]
        attack: Option<String>,

        /// Defense value
        #[arg(long)]
        defense: Option<String>,

        /// Output file
        #[arg(short, long, default_value = "card.png")]
        output: PathBuf,
    },

    /// Render every card in a deck file
    Deck {
        /// Background template image
        template: PathBuf,

        /// Deck file: a JSON array of card descriptions
        deck: PathBuf,

        /// Output directory
        #[arg(long, default_value = "cards")]
        out_dir: PathBuf,
    },

    /// Compose a circular hero portrait from artwork
    Portrait {
        /// Source artwork file
        artwork: PathBuf,

        /// Output name (without .png)
        name: String,

        /// Vertical position of the face (0 = top, 1 = bottom)
        #[arg(long = "face-y", default_value_t = 0.25)]
        face_y: f32,

        /// Zoom factor (1.0 = fit, > 1 zooms in)
        #[arg(long, default_value_t = 1.0)]
        zoom: f32,

        /// Path to the frame image
        #[arg(long, default_value = "hero_frame_clean.png")]
        frame: PathBuf,
    },

    /// Show template dimensions and the computed zone layout
    Info {
        /// Background template image
        template: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_ansi(!cli.no_color)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Render {
            template,
            spec,
            art,
            name,
            type_line,
            abilities,
            flavor,
            attack,
            defense,
            output,
        } => {
            let overrides = commands::render::Overrides {
                art,
                name,
                type_line,
                abilities,
                flavor,
                attack,
                defense,
            };
            commands::render::run(&template, spec.as_deref(), overrides, &output)?;
        }

        Commands::Deck {
            template,
            deck,
            out_dir,
        } => {
            commands::deck::run(&template, &deck, &out_dir)?;
        }

        Commands::Portrait {
            artwork,
            name,
            face_y,
            zoom,
            frame,
        } => {
            commands::portrait::run(&artwork, &name, face_y, zoom, &frame)?;
        }

        Commands::Info { template } => {
            commands::info::run(&template)?;
        }
    }

    Ok(())
}
