//! Toolkit-domain palette — the reduced color set for the secondary
//! stylesheet (window chrome, headerbar/sidebar/card tinting).
//!
//! Reuses the same seeds as the primary palette but derives against the
//! toolkit's own base grey (dark or light scheme), so an accent "hint"
//! blends the accent into the surface the toolkit would have drawn anyway.

use barista_color::Color;

use crate::config::ThemeConfig;

/// Toolkit base greys per color scheme.
const BASE_DARK: u8 = 42;
const BASE_LIGHT: u8 = 242;

/// Canonical toolkit foregrounds (auto-contrast pair).
const FG_ON_DARK: u8 = 255;
const FG_ON_LIGHT: u8 = 20;

/// Translucent sidebars, when enabled, sit at this alpha.
const SIDEBAR_TRANSPARENCY_ALPHA: f64 = 0.65;

/// A tinted toolkit surface: background, its backdrop (unfocused)
/// variant at half hint strength, and an auto-contrast foreground.
#[derive(Debug, Clone, PartialEq)]
pub struct HintedSurface {
    pub bg: Color,
    pub backdrop: Color,
    pub fg: Color,
}

/// The derived toolkit palette.
#[derive(Debug, Clone, PartialEq)]
pub struct GtkPalette {
    /// Scheme base grey the hints blend against.
    pub base: Color,
    pub accent: Color,
    pub accent_fg: Color,
    pub headerbar: HintedSurface,
    pub sidebar: HintedSurface,
    pub sidebar_alpha: f64,
    pub card: HintedSurface,
    /// Popover colors (menu bg + its own contrast decision).
    pub popover_bg: Color,
    pub popover_fg: Color,
    pub window_border: Color,
    pub window_border_backdrop: Color,
}

impl GtkPalette {
    /// Derive the toolkit palette from the same seed configuration.
    #[must_use]
    pub fn derive(cfg: &ThemeConfig) -> Self {
        let base = if cfg.prefer_dark {
            Color::grey(BASE_DARK)
        } else {
            Color::grey(BASE_LIGHT)
        };
        let accent = cfg.menu.accent_color.opaque();
        let menu_bg = cfg.menu.bg.with_alpha(cfg.menu.bg_alpha);

        let headerbar = hinted(accent, base, f64::from(cfg.gtk.headerbar_hint) / 100.0);
        let sidebar = hinted(accent, base, f64::from(cfg.gtk.sidebar_hint) / 100.0);
        let card = hinted(accent, base, f64::from(cfg.gtk.card_hint) / 100.0);

        let winb = cfg.gtk.winb_color.with_alpha(cfg.gtk.winb_alpha);

        Self {
            base,
            accent,
            accent_fg: contrast_fg(accent),
            headerbar,
            sidebar,
            sidebar_alpha: if cfg.gtk.sidebar_transparency {
                SIDEBAR_TRANSPARENCY_ALPHA
            } else {
                1.0
            },
            card,
            popover_bg: menu_bg,
            popover_fg: contrast_fg(menu_bg),
            window_border: winb,
            window_border_backdrop: lerp(winb, base, 0.6).with_alpha(cfg.gtk.winb_alpha),
        }
    }
}

fn contrast_fg(bg: Color) -> Color {
    if bg.is_dark() {
        Color::grey(FG_ON_DARK)
    } else {
        Color::grey(FG_ON_LIGHT)
    }
}

/// `w·a + (1−w)·b` per channel, rounded.
fn lerp(a: Color, b: Color, w: f64) -> Color {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ch = |x: u8, y: u8| {
        w.mul_add(f64::from(x), (1.0 - w) * f64::from(y))
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Color::rgb(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b))
}

fn hinted(accent: Color, base: Color, hint: f64) -> HintedSurface {
    let bg = lerp(accent, base, hint);
    HintedSurface {
        bg,
        backdrop: lerp(accent, base, hint / 2.0),
        fg: contrast_fg(bg),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Seed;

    #[test]
    fn base_grey_follows_scheme() {
        let mut cfg = ThemeConfig::default();
        cfg.prefer_dark = true;
        assert_eq!(GtkPalette::derive(&cfg).base, Color::grey(42));
        cfg.prefer_dark = false;
        assert_eq!(GtkPalette::derive(&cfg).base, Color::grey(242));
    }

    #[test]
    fn zero_hint_yields_base_surface() {
        let mut cfg = ThemeConfig::default();
        cfg.gtk.headerbar_hint = 0;
        let p = GtkPalette::derive(&cfg);
        assert_eq!(p.headerbar.bg, p.base);
    }

    #[test]
    fn full_hint_yields_accent_surface() {
        let mut cfg = ThemeConfig::default();
        cfg.menu.accent_color = Seed::from([1.0, 0.0, 0.0]);
        cfg.gtk.headerbar_hint = 100;
        let p = GtkPalette::derive(&cfg);
        assert_eq!((p.headerbar.bg.r, p.headerbar.bg.g), (255, 0));
        // Backdrop blends at half strength against the dark base.
        assert_eq!(p.headerbar.backdrop.r, 149); // 0.5·255 + 0.5·42
    }

    #[test]
    fn hinted_fg_is_canonical_pair() {
        let mut cfg = ThemeConfig::default();
        cfg.prefer_dark = true;
        let p = GtkPalette::derive(&cfg);
        assert_eq!(p.headerbar.fg, Color::grey(255));
        cfg.prefer_dark = false;
        let p = GtkPalette::derive(&cfg);
        assert_eq!(p.headerbar.fg, Color::grey(20));
    }

    #[test]
    fn sidebar_alpha_tracks_transparency_flag() {
        let mut cfg = ThemeConfig::default();
        assert!((GtkPalette::derive(&cfg).sidebar_alpha - 1.0).abs() < f64::EPSILON);
        cfg.gtk.sidebar_transparency = true;
        assert!((GtkPalette::derive(&cfg).sidebar_alpha - 0.65).abs() < f64::EPSILON);
    }

    #[test]
    fn window_border_backdrop_blend() {
        let mut cfg = ThemeConfig::default();
        cfg.prefer_dark = true;
        cfg.gtk.winb_color = Seed::from([1.0, 1.0, 1.0]);
        cfg.gtk.winb_alpha = 0.8;
        let p = GtkPalette::derive(&cfg);
        // 0.6·255 + 0.4·42 = 169.8 → 170
        assert_eq!(p.window_border_backdrop.r, 170);
        assert!((p.window_border_backdrop.a - 0.8).abs() < 1e-9);
    }
}
