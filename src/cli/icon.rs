//! Icon command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::assets::icon;
use crate::error::Result;

/// Generate the plugin icon
#[derive(Args, Debug)]
pub struct IconArgs {
    /// Project root to write the asset under
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

pub fn run(args: IconArgs) -> Result<()> {
    let path = icon::write(&args.root)?;
    println!("[OK] Icon created: {}", path.display());

    Ok(())
}
