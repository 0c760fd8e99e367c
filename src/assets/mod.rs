//! Fixed draw sequences for the two branding images.

pub mod cover;
pub mod icon;
pub mod palette;
