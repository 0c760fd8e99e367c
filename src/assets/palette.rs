//! Brand palette shared by the cover and the icon.
//!
//! These values are part of the external contract; the generated images are
//! referenced as branding assets elsewhere.

use crate::render::Colour;

/// Godot editor blue (`#478cbf`) - icon background and emblem disc.
pub const GODOT_BLUE: Colour = Colour::rgb(0x47, 0x8c, 0xbf);

/// Deep slate blue (`#2b5278`) behind the cover gradient.
pub const SLATE: Colour = Colour::rgb(0x2b, 0x52, 0x78);

/// Pale mist tint (`#e8f4f8`) for secondary shapes and the subtitle.
pub const MIST: Colour = Colour::rgb(0xe8, 0xf4, 0xf8);

/// Ice tint (`#d0e8f0`) for the lower brain lobe.
pub const ICE: Colour = Colour::rgb(0xd0, 0xe8, 0xf0);

/// Gold (`#ffd500`) for the pipeline arrow.
pub const GOLD: Colour = Colour::rgb(0xff, 0xd5, 0x00);

/// Muted blue-grey (`#b0c8d8`) for the cover footer.
pub const HAZE: Colour = Colour::rgb(0xb0, 0xc8, 0xd8);
