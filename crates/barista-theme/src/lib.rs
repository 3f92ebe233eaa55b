//! # barista-theme — seed configuration in, derived palette out
//!
//! The derivation core of barista. A [`ThemeConfig`] holds the handful of
//! user-chosen seed values (colors, alphas, geometry, feature flags); one
//! pass of [`DerivedPalette::derive`] turns it into the full set of
//! secondary colors and clamped geometry every output surface needs.
//!
//! # Architecture
//!
//! ```text
//! ThemeConfig (immutable snapshot of every seed option)
//!     │
//!     ▼
//! palette.rs: auto-contrast foregrounds, auto-highlight blends,
//!             sub-surface contrast steps, radius/shadow geometry
//!     │
//!     ▼
//! gtk.rs:     the reduced palette for the toolkit styling domain
//! ```
//!
//! Derivation is total: malformed optional inputs (an empty font string, a
//! short color array) fall back to documented defaults. Identical input
//! yields bit-identical output — there is no hidden state and no
//! randomness anywhere in this crate.

pub mod config;
pub mod font;
pub mod gtk;
pub mod palette;

pub use config::{
    BarConfig, BarType, BorderType, Corners, DashConfig, DashDockStyle, GradientDirection,
    GtkConfig, MenuConfig, Seed, Sides, ThemeConfig,
};
pub use font::FontDesc;
pub use gtk::GtkPalette;
pub use palette::DerivedPalette;
