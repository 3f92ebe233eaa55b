// SPDX-License-Identifier: MIT
//
// barista-color — color primitives for theme derivation.
//
// Everything here is plain channel math on 8-bit sRGB values: the blend,
// shade and brightness rules the palette deriver builds on. No color
// management, no wide gamuts — the host style language speaks rgba()
// with 8-bit channels and that is the working space throughout.

pub mod color;
pub mod hsl;

pub use color::{Color, fmt_alpha, hsp, is_dark, mix};
pub use hsl::{hsl_to_rgb, rgb_to_hsl};
