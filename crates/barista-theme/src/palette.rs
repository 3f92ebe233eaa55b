//! Palette derivation — every computed color and geometry clamp.
//!
//! [`DerivedPalette::derive`] is the one pure function at the center of
//! the engine: a [`ThemeConfig`] goes in, the complete set of secondary
//! colors comes out. Nothing here touches the filesystem or keeps state;
//! re-deriving the same config is bit-identical.
//!
//! The numeric constants in the highlight, shadow and neon formulas are
//! tuned against the host renderer — they are named, not re-derived,
//! because visual parity is the acceptance bar.

use barista_color::Color;

use crate::config::{Corners, ThemeConfig};
use crate::font::FontDesc;

// ─── Tuned constants ─────────────────────────────────────────────────────────

/// Push factor for highlighted foregrounds: 12% *away* from the highlight
/// background, so hover gains contrast instead of washing out.
const HIGHLIGHT_FG_PUSH: f64 = -0.12;

/// Contrast step between a menu and its sub-surfaces.
const SUBMENU_STEP: f64 = 0.18;

/// Auto-highlight: backgrounds at or below this brightness get a lighter
/// grey, brighter ones get a darker grey.
const AUTO_HG_BRIGHT_LIMIT: f64 = 190.0;
const AUTO_HG_LIFT: f64 = 50.0;
const AUTO_HG_DROP: f64 = 80.0;

/// Shadow geometry per unit of shadow alpha.
const SHADOW_OFFSET_PER_ALPHA: f64 = 20.0;
const SHADOW_BLUR_BASE: f64 = 2.0;
const SHADOW_BLUR_PER_ALPHA: f64 = 30.0;
const SHADOW_SPREAD_BASE: f64 = 2.0;
/// Spread multiplier below the radius threshold (kept tight so the shadow
/// stays inside the range the renderer draws correctly) and at/above it.
const SHADOW_SPREAD_TIGHT: f64 = 20.0;
const SHADOW_SPREAD_WIDE: f64 = 40.0;

/// Neon glow spreads: negative under a gradient fill, modest otherwise.
const NEON_SPREAD_GRADIENT: f64 = -3.0;
const NEON_SPREAD_ROUND: f64 = 2.0;

/// Slider track/handle colors push away from the menu background.
const SLIDER_PUSH: f64 = -0.2;

/// Hover highlight on a maximized-window bar runs a little hotter.
const WMAX_HOVER_BOOST: f64 = 1.2;

/// Caps on menu surface radii; the renderer misdraws anything larger.
const MENU_CONTENT_RADIUS_MAX: f64 = 20.0;
const POPOVER_RADIUS_MAX: f64 = 15.0;

// ─── Derived palette ─────────────────────────────────────────────────────────

/// Panel drop-shadow parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowParams {
    pub color: Color,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
}

/// The complete derived output of one configuration pass.
///
/// Colors carry their primary emission alpha baked in; rule blocks that
/// need a scaled alpha override it at composition time.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedPalette {
    // ── bar surfaces ──
    pub bar_fg: Color,
    /// Highlighted bar foreground (opaque channels).
    pub bar_hfg: Color,
    pub bar_bg: Color,
    pub box_bg: Color,
    pub island: Color,
    pub border: Color,
    /// The highlight seed (manual hover border color).
    pub highlight: Color,
    /// Hover/focus background for the open-bar surface.
    pub bar_hover_bg: Color,
    /// Hover/focus background for island buttons.
    pub island_hover_bg: Color,
    pub gradient_start: Color,
    pub gradient_end: Color,
    pub shadow: ShadowParams,

    // ── menu surfaces ──
    pub menu_fg: Color,
    pub menu_hfg: Color,
    pub menu_bg: Color,
    pub menu_border: Color,
    pub menu_shadow: Color,
    pub menu_hover_bg: Color,
    pub submenu_bg: Color,
    /// Sub-menu foreground (opaque channels).
    pub submenu_fg: Color,
    pub submenu_hfg: Color,
    pub submenu_hover_bg: Color,
    pub accent: Color,
    pub accent_fg: Color,
    pub accent_hfg: Color,
    pub accent_hover_bg: Color,

    // ── semantic ──
    pub warning: Color,
    pub success: Color,
    pub destructive: Color,
    /// Screen-sharing indicator sits halfway between destructive and warning.
    pub sharing_indicator: Color,
    /// Window tooltip background channels.
    pub tooltip_bg: Color,

    // ── maximized-window variant ──
    pub wmax_bg: Color,
    /// Auto-contrast fg on the wmax bar; open bar types only.
    pub wmax_fg: Option<Color>,
    /// Hover background on the wmax bar; open bar types only.
    pub wmax_hover_bg: Option<Color>,
    pub height_wmax: f64,
    pub margin_wmax: f64,

    // ── dash/dock (Custom style) ──
    pub dash_bg: Color,
    /// Auto-contrast fg over the custom dash background.
    pub dash_custom_fg: Color,
    /// Auto-highlight blend over the custom dash background.
    pub dash_custom_hover_bg: Color,

    // ── sliders ──
    pub slider_base: Color,
    pub slider_active: Color,
    /// Slider border is pure white or pure black, cut on fg brightness.
    pub slider_border_level: u8,
    pub slider_handle_radius: f64,

    // ── geometry ──
    /// Border radius after the enclosed-bar clamp.
    pub radius: f64,
    /// Per-corner radii after the corner toggles: TL, TR, BL, BR.
    pub corner_tl: f64,
    pub corner_tr: f64,
    pub corner_bl: f64,
    pub corner_br: f64,
    /// Radius below which box shadows need tight/negative spreads.
    pub rad_threshold: f64,
    pub neon_spread: f64,
    pub tri_mid_neon_spread: f64,
    pub menu_content_radius: f64,
    pub popover_radius: f64,

    /// Shade direction for keyboard surfaces: −1 on dark menus, +1 on light.
    pub menu_shade_sign: f64,

    // ── icon seeds ──
    pub accent_hex: String,
    pub highlight_hex: String,
    pub submenu_fg_hex: String,

    pub font: FontDesc,
}

impl DerivedPalette {
    /// Derive the full palette from a seed configuration.
    ///
    /// Pure and total: no I/O, no randomness, no failure paths.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn derive(cfg: &ThemeConfig) -> Self {
        let bar = &cfg.bar;
        let menu = &cfg.menu;
        let enclosed = bar.bar_type.is_enclosed();

        // Seed quantization.
        let mut bar_fg = bar.fg.with_alpha(bar.fg_alpha);
        let bar_bg = bar.bg.with_alpha(bar.bg_alpha);
        let box_bg = bar.box_color.with_alpha(bar.box_alpha);
        let bg2 = bar.bg2.with_alpha(bar.bg2_alpha);
        let island = bar.island_color.with_alpha(bar.island_alpha);
        let border = bar.border_color.with_alpha(bar.border_alpha);
        let highlight = bar.highlight_color.with_alpha(bar.highlight_alpha);
        let mut menu_fg = menu.fg.with_alpha(menu.fg_alpha);
        let menu_bg = menu.bg.with_alpha(menu.bg_alpha);
        let menu_border = menu.border_color.with_alpha(menu.border_alpha);
        let menu_shadow = menu.shadow_color.with_alpha(menu.shadow_alpha);
        let menu_highlight = menu.highlight_color.with_alpha(menu.highlight_alpha);
        let accent = menu.accent_color.with_alpha(menu.accent_alpha);
        let warning = cfg.warning_color.opaque();
        let success = cfg.success_color.opaque();
        let destructive = cfg.destruct_color.opaque();

        // Sub-menu background: manual override, or a contrast step away
        // from the menu — toward white on dark menus, black on light ones.
        let submenu_bg = if menu.smbg_override {
            menu.smbg_color.with_alpha(menu.bg_alpha)
        } else {
            let target = if menu_bg.is_dark() { Color::grey(255) } else { Color::grey(0) };
            menu_bg.mix_toward(target, SUBMENU_STEP).with_alpha(menu.bg_alpha)
        };

        // Hover/focus backgrounds: the highlight tint (auto grey or the
        // seed color) alpha-blended onto each surface.
        let bar_hg = highlight_tint(bar.autohg, highlight, bar_bg);
        let bar_hover_bg = blend_tint(bar_bg, bar_hg, bar.highlight_alpha, bar.bg_alpha);
        let island_hg = highlight_tint(bar.autohg, highlight, island);
        let island_hover_bg = blend_tint(island, island_hg, bar.highlight_alpha, bar.island_alpha);
        let menu_hg = highlight_tint(menu.autohg, menu_highlight, menu_bg);
        let menu_hover_bg = blend_tint(menu_bg, menu_hg, menu.highlight_alpha, menu.bg_alpha);
        let sub_hg = highlight_tint(menu.autohg, menu_highlight, submenu_bg);
        let submenu_hover_bg =
            blend_tint(submenu_bg, sub_hg, menu.highlight_alpha, menu.bg_alpha);
        let acc_hg = highlight_tint(menu.autohg, menu_highlight, accent);
        let accent_hover_bg =
            blend_tint(accent, acc_hg, menu.highlight_alpha, menu.accent_alpha);

        // Highlighted foregrounds: push away from the hover background.
        let bar_hover_ref = if enclosed { island_hover_bg } else { bar_hover_bg };
        let mut bar_hfg = bar_fg.mix_toward(bar_hover_ref, HIGHLIGHT_FG_PUSH).with_alpha(1.0);
        let mut menu_hfg = menu_fg.mix_toward(menu_hover_bg, HIGHLIGHT_FG_PUSH).with_alpha(1.0);
        let mut submenu_hfg =
            menu_fg.mix_toward(submenu_hover_bg, HIGHLIGHT_FG_PUSH).with_alpha(1.0);
        let mut accent_hfg =
            menu_fg.mix_toward(accent_hover_bg, HIGHLIGHT_FG_PUSH).with_alpha(1.0);

        // Auto-contrast foregrounds. Always one of two canonical values
        // per surface — never an interpolation.
        if bar.autofg {
            let dark = if enclosed { island.is_dark() } else { bar_bg.is_dark() };
            let (fg, hfg) = if dark { (250, 255) } else { (5, 0) };
            bar_fg = Color::grey(fg).with_alpha(bar.fg_alpha);
            bar_hfg = Color::grey(hfg);
        }
        let (submenu_fg, accent_fg);
        if menu.autofg {
            let (fg, hfg) = if menu_bg.is_dark() { (230, 255) } else { (25, 0) };
            menu_fg = Color::grey(fg).with_alpha(menu.fg_alpha);
            menu_hfg = Color::grey(hfg);

            let (fg, hfg) = if submenu_bg.is_dark() { (230, 255) } else { (25, 0) };
            submenu_fg = Color::grey(fg);
            submenu_hfg = Color::grey(hfg);

            let (fg, hfg) = if accent.is_dark() { (250, 255) } else { (10, 0) };
            accent_fg = Color::grey(fg);
            accent_hfg = Color::grey(hfg);
        } else {
            submenu_fg = menu_fg.with_alpha(1.0);
            accent_fg = menu_fg.with_alpha(1.0);
        }

        // Border radius clamp: an enclosed shape's border grows inward, so
        // the radius must leave room for it ('-1' absorbs sub-pixel
        // rounding) or corners invert.
        let mut radius = bar.border_radius;
        if enclosed {
            let limit = bar.height / 2.0 - bar.border_width.ceil() - 1.0;
            if radius > limit {
                radius = limit.floor();
            }
        }
        let corner = |c: Corners| if bar.radius_corners.contains(c) { radius } else { 0.0 };
        let corner_tl = corner(Corners::TOP_LEFT);
        let corner_tr = corner(Corners::TOP_RIGHT);
        let corner_bl = corner(Corners::BOTTOM_LEFT);
        let corner_br = corner(Corners::BOTTOM_RIGHT);

        // The renderer misdraws box shadows on small-radius rectangles;
        // below this threshold spreads are forced small or negative.
        let padmod = if enclosed { bar.v_pad } else { -2.0 };
        let rad_threshold = (((bar.height - 2.0 * padmod) / 10.0 - 1.0) * 5.0).ceil();

        let neon_spread = if radius <= rad_threshold {
            if bar.gradient { NEON_SPREAD_GRADIENT } else { 0.0 }
        } else if (corner_tl == 0.0 && corner_tr == 0.0)
            || (corner_bl == 0.0 && corner_br == 0.0)
        {
            0.0
        } else {
            NEON_SPREAD_ROUND
        };
        let tri_mid_neon_spread = if bar.gradient { NEON_SPREAD_GRADIENT } else { 0.0 };

        let sh_a = bar.shadow_alpha;
        let shadow = ShadowParams {
            color: bar.shadow_color.with_alpha(sh_a),
            offset_y: sh_a * SHADOW_OFFSET_PER_ALPHA,
            blur: SHADOW_BLUR_PER_ALPHA.mul_add(sh_a, SHADOW_BLUR_BASE),
            spread: if radius < rad_threshold {
                SHADOW_SPREAD_TIGHT.mul_add(sh_a, SHADOW_SPREAD_BASE)
            } else {
                SHADOW_SPREAD_WIDE.mul_add(sh_a, SHADOW_SPREAD_BASE)
            },
        };

        // Gradient runs from the surface fill to the secondary background;
        // enabling it suppresses the flat island fill entirely.
        let gradient_start = if enclosed { island } else { bar_bg };
        let gradient_end = bg2;

        // Maximized-window variant.
        let margin_wmax = if bar.cust_margin_wmax { bar.margin_wmax } else { bar.margin };
        let height_wmax = 2.0f64.mul_add(margin_wmax, bar.height);
        let wmax_bg = bar.wmax_bg.with_alpha(bar.wmax_alpha);
        let (wmax_fg, wmax_hover_bg) = if enclosed {
            (None, None)
        } else {
            let fg = if wmax_bg.is_dark() { Color::grey(250) } else { Color::grey(5) };
            let grey = auto_highlight_grey(wmax_bg);
            let hover = blend_tint(
                Color::grey(0),
                [grey, grey, grey],
                1.0,
                WMAX_HOVER_BOOST * bar.highlight_alpha,
            );
            (Some(fg), Some(hover))
        };

        // Custom dash/dock surface: its own contrast and highlight pass.
        let dash_bg = cfg.dash.bg.with_alpha(cfg.dash.bg_alpha);
        let dash_custom_fg = if dash_bg.is_dark() { Color::grey(250) } else { Color::grey(20) };
        let dash_grey = auto_highlight_grey(dash_bg);
        let dash_custom_hover_bg = blend_tint(
            dash_bg,
            [dash_grey, dash_grey, dash_grey],
            bar.highlight_alpha,
            cfg.dash.bg_alpha,
        );

        // Sliders.
        let slider_base = submenu_bg.mix_toward(menu_bg, SLIDER_PUSH).with_alpha(1.0);
        let slider_active = accent.mix_toward(menu_bg, SLIDER_PUSH).with_alpha(1.0);
        let slider_border_level = if menu_fg.r > 200 { 255 } else { 0 };
        let slider_handle_radius = (8.0 - menu.handle_border / 2.0).ceil().max(4.0);

        // Window tooltips: mostly menu bg, pulled toward the fg complement.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let tip = |bg: u8, fg: u8| {
            0.8f64
                .mul_add(f64::from(bg), 0.2 * (255.0 - f64::from(fg)))
                .round() as u8
        };
        let tooltip_bg = Color::rgb(
            tip(menu_bg.r, menu_fg.r),
            tip(menu_bg.g, menu_fg.g),
            tip(menu_bg.b, menu_fg.b),
        );

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mid = |a: u8, b: u8| ((f64::from(a) + f64::from(b)) / 2.0).round() as u8;
        let sharing_indicator = Color::rgb(
            mid(destructive.r, warning.r),
            mid(destructive.g, warning.g),
            mid(destructive.b, warning.b),
        );

        Self {
            accent_hex: accent.hex_with_alpha(),
            highlight_hex: menu_highlight.hex(),
            submenu_fg_hex: submenu_fg.hex(),
            menu_shade_sign: if menu_bg.is_dark() { -1.0 } else { 1.0 },
            menu_content_radius: menu.menu_radius.min(MENU_CONTENT_RADIUS_MAX),
            popover_radius: menu.menu_radius.min(POPOVER_RADIUS_MAX),
            font: FontDesc::parse(&cfg.font),
            bar_fg,
            bar_hfg,
            bar_bg,
            box_bg,
            island,
            border,
            highlight,
            bar_hover_bg,
            island_hover_bg,
            gradient_start,
            gradient_end,
            shadow,
            menu_fg,
            menu_hfg,
            menu_bg,
            menu_border,
            menu_shadow,
            menu_hover_bg,
            submenu_bg,
            submenu_fg,
            submenu_hfg,
            submenu_hover_bg,
            accent,
            accent_fg,
            accent_hfg,
            accent_hover_bg,
            warning,
            success,
            destructive,
            sharing_indicator,
            tooltip_bg,
            wmax_bg,
            wmax_fg,
            wmax_hover_bg,
            height_wmax,
            margin_wmax,
            dash_bg,
            dash_custom_fg,
            dash_custom_hover_bg,
            slider_base,
            slider_active,
            slider_border_level,
            slider_handle_radius,
            radius,
            corner_tl,
            corner_tr,
            corner_bl,
            corner_br,
            rad_threshold,
            neon_spread,
            tri_mid_neon_spread,
        }
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// The auto-highlight grey for a background: a uniform channel value
/// offset from the background's perceived brightness.
fn auto_highlight_grey(bg: Color) -> f64 {
    let hsp = bg.brightness();
    if hsp <= AUTO_HG_BRIGHT_LIMIT {
        hsp + AUTO_HG_LIFT
    } else {
        hsp - AUTO_HG_DROP
    }
}

/// The highlight tint for a surface: the auto grey when `auto` is set,
/// otherwise the user's highlight seed.
fn highlight_tint(auto: bool, seed: Color, bg: Color) -> [f64; 3] {
    if auto {
        let g = auto_highlight_grey(bg);
        [g, g, g]
    } else {
        [f64::from(seed.r), f64::from(seed.g), f64::from(seed.b)]
    }
}

/// Alpha-blend a tint onto a background: `bg·(1−p) + tint·p` per channel,
/// quantized once at the end; the result carries `out_alpha`.
fn blend_tint(bg: Color, tint: [f64; 3], p: f64, out_alpha: f64) -> Color {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ch = |c: u8, t: f64| {
        f64::from(c)
            .mul_add(1.0 - p, t * p)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    Color::rgba(
        ch(bg.r, tint[0]),
        ch(bg.g, tint[1]),
        ch(bg.b, tint[2]),
        out_alpha,
    )
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BarConfig, BarType, MenuConfig, Seed, Sides};

    fn dark_config() -> ThemeConfig {
        ThemeConfig {
            bar: BarConfig {
                bg: Seed::from([30.0 / 255.0, 30.0 / 255.0, 30.0 / 255.0]),
                highlight_alpha: 0.2,
                autofg: true,
                autohg: true,
                ..BarConfig::default()
            },
            menu: MenuConfig {
                bg: Seed::from([30.0 / 255.0, 30.0 / 255.0, 30.0 / 255.0]),
                autofg: true,
                autohg: true,
                ..MenuConfig::default()
            },
            ..ThemeConfig::default()
        }
    }

    // ── determinism ──────────────────────────────────────────────────────

    #[test]
    fn derivation_is_deterministic() {
        let cfg = dark_config();
        assert_eq!(DerivedPalette::derive(&cfg), DerivedPalette::derive(&cfg));
    }

    #[test]
    fn auto_fg_is_idempotent_and_canonical() {
        // Deriving twice from the same dark background always lands on the
        // same canonical near-white value — no drift, no interpolation.
        let cfg = dark_config();
        let a = DerivedPalette::derive(&cfg);
        let b = DerivedPalette::derive(&cfg);
        assert_eq!(a.bar_fg, b.bar_fg);
        assert_eq!(a.bar_fg.r, 250);
    }

    // ── auto-contrast scenario from a (30,30,30) background ──────────────

    #[test]
    fn dark_background_gets_near_white_fg() {
        let p = DerivedPalette::derive(&dark_config());
        assert!(p.bar_fg.r >= 230, "bar fg not near-white: {}", p.bar_fg.r);
        assert_eq!(p.menu_fg.r, 230);
        assert_eq!(p.menu_hfg.r, 255);
    }

    #[test]
    fn auto_highlight_grey_is_brightness_plus_50() {
        // hsp(30,30,30) == 30, well under the bright limit.
        let g = auto_highlight_grey(Color::rgb(30, 30, 30));
        assert!((g - 80.0).abs() < 1e-9);
    }

    #[test]
    fn auto_highlight_grey_drops_on_bright_backgrounds() {
        let g = auto_highlight_grey(Color::rgb(220, 220, 220));
        assert!((g - 140.0).abs() < 1e-9);
    }

    #[test]
    fn hover_bg_blends_grey_onto_background() {
        // bg 30, grey 80, alpha 0.2 → 30*0.8 + 80*0.2 = 40.
        let p = DerivedPalette::derive(&dark_config());
        assert_eq!(p.bar_hover_bg.r, 40);
        assert!((p.bar_hover_bg.a - 0.9).abs() < 1e-9, "carries bg alpha");
    }

    #[test]
    fn light_background_gets_near_black_fg() {
        let mut cfg = dark_config();
        cfg.bar.bg = Seed::from([0.9, 0.9, 0.9]);
        cfg.menu.bg = Seed::from([0.9, 0.9, 0.9]);
        let p = DerivedPalette::derive(&cfg);
        assert_eq!(p.bar_fg.r, 5);
        assert_eq!(p.menu_fg.r, 25);
        assert_eq!(p.menu_hfg.r, 0);
    }

    // ── manual foreground + highlight push ───────────────────────────────

    #[test]
    fn manual_fg_is_used_verbatim_with_pushed_highlight() {
        let mut cfg = dark_config();
        cfg.bar.autofg = false;
        cfg.bar.fg = Seed::from([100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0]);
        let p = DerivedPalette::derive(&cfg);
        assert_eq!(p.bar_fg.r, 100);
        // Hover bg is 40 (see above); push 12% away from it brightens:
        // 100 + (-0.12)(40-100) = 107.2 → 107.
        assert_eq!(p.bar_hfg.r, 107);
    }

    // ── sub-menu contrast step ───────────────────────────────────────────

    #[test]
    fn submenu_steps_toward_white_on_dark_menus() {
        let p = DerivedPalette::derive(&dark_config());
        // 30 + 0.18*(255-30) = 70.5 → 70 (channel mix truncates).
        assert_eq!(p.submenu_bg.r, 70);
        assert_ne!(p.submenu_bg.r, p.menu_bg.r, "never identical to parent");
    }

    #[test]
    fn submenu_steps_toward_black_on_light_menus() {
        let mut cfg = dark_config();
        cfg.menu.bg = Seed::from([200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0]);
        let p = DerivedPalette::derive(&cfg);
        // 200 + 0.18*(0-200) = 164.
        assert_eq!(p.submenu_bg.r, 164);
    }

    #[test]
    fn submenu_override_wins() {
        let mut cfg = dark_config();
        cfg.menu.smbg_override = true;
        cfg.menu.smbg_color = Seed::from([1.0, 0.0, 0.0]);
        let p = DerivedPalette::derive(&cfg);
        assert_eq!((p.submenu_bg.r, p.submenu_bg.g), (255, 0));
    }

    // ── radius clamp ─────────────────────────────────────────────────────

    #[test]
    fn enclosed_radius_never_exceeds_geometric_limit() {
        for bar_type in [BarType::Islands, BarType::Trilands] {
            for height in [16.0, 24.0, 36.0, 48.0] {
                for bw in [0.0, 1.0, 2.5, 4.0] {
                    for requested in [0.0, 8.0, 100.0, 1000.0] {
                        let mut cfg = ThemeConfig::default();
                        cfg.bar.bar_type = bar_type;
                        cfg.bar.height = height;
                        cfg.bar.border_width = bw;
                        cfg.bar.border_radius = requested;
                        let p = DerivedPalette::derive(&cfg);
                        let limit = height / 2.0 - bw.ceil() - 1.0;
                        assert!(
                            p.radius <= limit,
                            "radius {} exceeds limit {limit} (h={height}, bw={bw})",
                            p.radius
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn open_bars_do_not_clamp_radius() {
        let mut cfg = ThemeConfig::default();
        cfg.bar.bar_type = BarType::Floating;
        cfg.bar.border_radius = 500.0;
        let p = DerivedPalette::derive(&cfg);
        assert!((p.radius - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn small_requested_radius_kept_exactly() {
        let mut cfg = ThemeConfig::default();
        cfg.bar.bar_type = BarType::Islands;
        cfg.bar.border_radius = 3.5;
        let p = DerivedPalette::derive(&cfg);
        assert!((p.radius - 3.5).abs() < f64::EPSILON);
    }

    // ── radius threshold + neon/shadow geometry ──────────────────────────

    #[test]
    fn threshold_uses_open_pad_adjustment() {
        // Open bars: padmod −2 → ceil(((36+4)/10 − 1)·5) = 15.
        let mut cfg = ThemeConfig::default();
        cfg.bar.bar_type = BarType::Mainland;
        cfg.bar.height = 36.0;
        let p = DerivedPalette::derive(&cfg);
        assert!((p.rad_threshold - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn threshold_uses_vertical_padding_when_enclosed() {
        // Enclosed: padmod = v_pad 4 → ceil(((36−8)/10 − 1)·5) = 9.
        let mut cfg = ThemeConfig::default();
        cfg.bar.bar_type = BarType::Islands;
        cfg.bar.height = 36.0;
        cfg.bar.v_pad = 4.0;
        let p = DerivedPalette::derive(&cfg);
        assert!((p.rad_threshold - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn neon_spread_table() {
        // Below threshold, flat fill → 0.
        let mut cfg = ThemeConfig::default();
        cfg.bar.bar_type = BarType::Mainland;
        cfg.bar.border_radius = 4.0;
        assert!((DerivedPalette::derive(&cfg).neon_spread).abs() < f64::EPSILON);

        // Below threshold under a gradient → −3.
        cfg.bar.gradient = true;
        assert!((DerivedPalette::derive(&cfg).neon_spread + 3.0).abs() < f64::EPSILON);

        // Above threshold with rounded corners → 2.
        cfg.bar.gradient = false;
        cfg.bar.border_radius = 30.0;
        assert!((DerivedPalette::derive(&cfg).neon_spread - 2.0).abs() < f64::EPSILON);

        // Above threshold but the whole top edge square → 0.
        cfg.bar.radius_corners = Corners::BOTTOM_LEFT | Corners::BOTTOM_RIGHT;
        assert!((DerivedPalette::derive(&cfg).neon_spread).abs() < f64::EPSILON);
    }

    #[test]
    fn shadow_geometry_tracks_alpha_and_threshold() {
        let mut cfg = ThemeConfig::default();
        cfg.bar.bar_type = BarType::Mainland;
        cfg.bar.shadow_alpha = 0.5;
        cfg.bar.border_radius = 2.0; // below threshold (15)
        let p = DerivedPalette::derive(&cfg);
        assert!((p.shadow.offset_y - 10.0).abs() < f64::EPSILON);
        assert!((p.shadow.blur - 17.0).abs() < f64::EPSILON);
        assert!((p.shadow.spread - 12.0).abs() < f64::EPSILON);

        cfg.bar.border_radius = 30.0; // above threshold
        let p = DerivedPalette::derive(&cfg);
        assert!((p.shadow.spread - 22.0).abs() < f64::EPSILON);
    }

    // ── gradient stops ───────────────────────────────────────────────────

    #[test]
    fn gradient_starts_from_the_surface_fill() {
        let mut cfg = ThemeConfig::default();
        cfg.bar.bar_type = BarType::Islands;
        cfg.bar.island_color = Seed::from([0.2, 0.0, 0.0]);
        let p = DerivedPalette::derive(&cfg);
        assert_eq!(p.gradient_start, p.island);

        cfg.bar.bar_type = BarType::Mainland;
        cfg.bar.bg2 = Seed::from([0.0, 0.2, 0.4]);
        let p = DerivedPalette::derive(&cfg);
        assert_eq!(p.gradient_start, p.bar_bg);
        assert_eq!(p.gradient_end, cfg.bar.bg2.with_alpha(cfg.bar.bg2_alpha));
    }

    // ── wmax ─────────────────────────────────────────────────────────────

    #[test]
    fn wmax_margin_defaults_to_bar_margin() {
        let mut cfg = ThemeConfig::default();
        cfg.bar.margin = 6.0;
        let p = DerivedPalette::derive(&cfg);
        assert!((p.margin_wmax - 6.0).abs() < f64::EPSILON);
        assert!((p.height_wmax - 48.0).abs() < f64::EPSILON);

        cfg.bar.cust_margin_wmax = true;
        cfg.bar.margin_wmax = 2.0;
        let p = DerivedPalette::derive(&cfg);
        assert!((p.height_wmax - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wmax_fg_only_for_open_bars() {
        let mut cfg = ThemeConfig::default();
        cfg.bar.bar_type = BarType::Mainland;
        assert!(DerivedPalette::derive(&cfg).wmax_fg.is_some());
        cfg.bar.bar_type = BarType::Trilands;
        assert!(DerivedPalette::derive(&cfg).wmax_fg.is_none());
    }

    // ── sliders, tooltips, icons ─────────────────────────────────────────

    #[test]
    fn slider_border_level_cuts_on_fg_brightness() {
        let mut cfg = dark_config();
        let p = DerivedPalette::derive(&cfg);
        assert_eq!(p.slider_border_level, 255); // auto fg 230 > 200

        cfg.menu.autofg = false;
        cfg.menu.fg = Seed::from([0.3, 0.3, 0.3]);
        let p = DerivedPalette::derive(&cfg);
        assert_eq!(p.slider_border_level, 0);
    }

    #[test]
    fn slider_handle_radius_floors_at_4() {
        let mut cfg = ThemeConfig::default();
        cfg.menu.handle_border = 2.0;
        assert!((DerivedPalette::derive(&cfg).slider_handle_radius - 7.0).abs() < f64::EPSILON);
        cfg.menu.handle_border = 12.0;
        assert!((DerivedPalette::derive(&cfg).slider_handle_radius - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn icon_hexes_track_their_seeds() {
        let mut cfg = ThemeConfig::default();
        cfg.menu.accent_color = Seed::from([1.0, 0.0, 0.0]);
        cfg.menu.accent_alpha = 1.0;
        cfg.menu.highlight_color = Seed::from([0.0, 1.0, 0.0]);
        let p = DerivedPalette::derive(&cfg);
        assert_eq!(p.accent_hex, "#ff0000ff");
        assert_eq!(p.highlight_hex, "#00ff00");
    }

    // ── menu radius caps ─────────────────────────────────────────────────

    #[test]
    fn menu_radius_caps() {
        let mut cfg = ThemeConfig::default();
        cfg.menu.menu_radius = 28.0;
        let p = DerivedPalette::derive(&cfg);
        assert!((p.menu_content_radius - 20.0).abs() < f64::EPSILON);
        assert!((p.popover_radius - 15.0).abs() < f64::EPSILON);

        cfg.menu.menu_radius = 12.0;
        let p = DerivedPalette::derive(&cfg);
        assert!((p.menu_content_radius - 12.0).abs() < f64::EPSILON);
        assert!((p.popover_radius - 12.0).abs() < f64::EPSILON);
    }

    // ── corner gating ────────────────────────────────────────────────────

    #[test]
    fn corner_toggles_zero_individual_corners() {
        let mut cfg = ThemeConfig::default();
        cfg.bar.border_radius = 10.0;
        cfg.bar.radius_corners = Corners::TOP_LEFT | Corners::BOTTOM_RIGHT;
        cfg.bar.border_sides = Sides::all();
        let p = DerivedPalette::derive(&cfg);
        assert!((p.corner_tl - 10.0).abs() < f64::EPSILON);
        assert!(p.corner_tr.abs() < f64::EPSILON);
        assert!(p.corner_bl.abs() < f64::EPSILON);
        assert!((p.corner_br - 10.0).abs() < f64::EPSILON);
    }
}
