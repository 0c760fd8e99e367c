pub mod all;
pub mod cover;
pub mod icon;

use clap::{Parser, Subcommand};

/// brand - Sprite Pipeline branding asset generator
#[derive(Parser, Debug)]
#[command(name = "brand")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the itch.io store cover (docs/cover.png)
    Cover(cover::CoverArgs),

    /// Generate the plugin icon (addons/sprite_pipeline/icon.png)
    Icon(icon::IconArgs),

    /// Generate every branding asset
    All(all::AllArgs),
}
