//! All command implementation - generates every branding asset in one run.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;

use super::{cover, icon};

/// Generate every branding asset
#[derive(Args, Debug)]
pub struct AllArgs {
    /// Project root to write the assets under
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

pub fn run(args: AllArgs) -> Result<()> {
    cover::run(cover::CoverArgs {
        root: args.root.clone(),
    })?;
    icon::run(icon::IconArgs { root: args.root })?;

    Ok(())
}
