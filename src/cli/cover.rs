//! Cover command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::assets::cover;
use crate::error::Result;

/// Generate the itch.io store cover
#[derive(Args, Debug)]
pub struct CoverArgs {
    /// Project root to write the asset under
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

pub fn run(args: CoverArgs) -> Result<()> {
    let path = cover::write(&args.root)?;
    println!("[OK] Cover image created: {}", path.display());

    Ok(())
}
