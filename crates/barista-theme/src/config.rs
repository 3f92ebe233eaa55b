//! Theme configuration — the immutable seed snapshot.
//!
//! Every value the user can turn is collected here: bar geometry, seed
//! colors and alphas for each surface, the feature flags that gate
//! conditional rule blocks, and the numeric tunables. The settings store
//! hands colors over as normalized-float arrays (3 or 4 elements, each
//! component in [0, 1]); quantization to 8-bit channels happens once, in
//! the palette deriver.
//!
//! All fields are read-only for the duration of one derivation pass; a
//! changed setting produces a whole new `ThemeConfig`.

use barista_color::Color;
use bitflags::bitflags;
use serde::{Deserialize, Deserializer};

// ─── Seed colors ─────────────────────────────────────────────────────────────

/// A seed color as stored by the settings layer: a normalized-float array.
///
/// Three elements are RGB; a fourth, when present, is alpha and takes
/// precedence over any alpha supplied at quantization time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Seed(pub Vec<f64>);

impl Seed {
    /// Quantize to a [`Color`] carrying the given alpha.
    #[must_use]
    pub fn with_alpha(&self, alpha: f64) -> Color {
        Color::from_norm(&self.0, alpha)
    }

    /// Quantize to an opaque [`Color`].
    #[must_use]
    pub fn opaque(&self) -> Color {
        Color::from_norm(&self.0, 1.0)
    }
}

impl From<[f64; 3]> for Seed {
    fn from(v: [f64; 3]) -> Self {
        Self(v.to_vec())
    }
}

// ─── Enumerations ────────────────────────────────────────────────────────────

/// Bar rendering mode.
///
/// Open types (`Mainland`, `Floating`) draw one continuous strip and put
/// borders on the whole panel; enclosed types (`Islands`, `Trilands`)
/// wrap each button group in its own bordered capsule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum BarType {
    #[default]
    Mainland,
    Floating,
    Islands,
    Trilands,
}

impl BarType {
    /// Whether borders enclose individual button groups (grow inward).
    #[must_use]
    pub const fn is_enclosed(self) -> bool {
        matches!(self, Self::Islands | Self::Trilands)
    }
}

/// Border line style, as understood by the rule language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderType {
    #[default]
    Solid,
    Double,
    Dashed,
}

impl BorderType {
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Double => "double",
            Self::Dashed => "dashed",
        }
    }
}

/// Direction of the background gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientDirection {
    #[default]
    Vertical,
    Horizontal,
}

impl GradientDirection {
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

/// Which palette the dash/dock block borrows its colors from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum DashDockStyle {
    /// Leave the dock alone — no block is emitted.
    #[default]
    Default,
    /// Reuse the bar surface colors.
    Bar,
    /// Reuse the menu surface colors.
    Menu,
    /// A dedicated background seed with its own auto-contrast pass.
    Custom,
}

// ─── Side / corner toggles ───────────────────────────────────────────────────

bitflags! {
    /// Which sides of the bar (or button capsule) carry the border width.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Sides: u8 {
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
    }
}

bitflags! {
    /// Which corners receive the border radius; the rest stay square.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Corners: u8 {
        const TOP_LEFT     = 0b0001;
        const TOP_RIGHT    = 0b0010;
        const BOTTOM_LEFT  = 0b0100;
        const BOTTOM_RIGHT = 0b1000;
    }
}

impl Default for Sides {
    fn default() -> Self {
        Self::all()
    }
}

impl Default for Corners {
    fn default() -> Self {
        Self::all()
    }
}

// Settings store both toggle sets as lists of side/corner names.
fn flags_from_names<F>(names: &[String], lookup: impl Fn(&str) -> Option<F>) -> Result<F, String>
where
    F: bitflags::Flags,
{
    let mut flags = F::empty();
    for name in names {
        match lookup(name.as_str()) {
            Some(f) => flags.insert(f),
            None => return Err(format!("unknown toggle name `{name}`")),
        }
    }
    Ok(flags)
}

impl<'de> Deserialize<'de> for Sides {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        flags_from_names(&names, |n| match n {
            "top" => Some(Self::TOP),
            "right" => Some(Self::RIGHT),
            "bottom" => Some(Self::BOTTOM),
            "left" => Some(Self::LEFT),
            _ => None,
        })
        .map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Corners {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let names = Vec::<String>::deserialize(deserializer)?;
        flags_from_names(&names, |n| match n {
            "top-left" => Some(Self::TOP_LEFT),
            "top-right" => Some(Self::TOP_RIGHT),
            "bottom-left" => Some(Self::BOTTOM_LEFT),
            "bottom-right" => Some(Self::BOTTOM_RIGHT),
            _ => None,
        })
        .map_err(serde::de::Error::custom)
    }
}

// ─── Bar configuration ───────────────────────────────────────────────────────

/// Seed options for the primary bar surface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    pub bar_type: BarType,
    /// Bar height in pixels.
    pub height: f64,
    /// Vertical margin; open bar types also derive their horizontal margin
    /// from it (3x for Floating, 1.5x for the enclosed types).
    pub margin: f64,
    pub border_width: f64,
    /// Requested corner radius; enclosed bar types clamp it during
    /// derivation so the inward-growing border cannot invert the corners.
    pub border_radius: f64,
    pub border_type: BorderType,
    pub border_sides: Sides,
    pub radius_corners: Corners,
    /// Horizontal / vertical padding inside a button container.
    pub h_pad: f64,
    pub v_pad: f64,

    pub fg: Seed,
    pub fg_alpha: f64,
    pub bg: Seed,
    pub bg_alpha: f64,
    /// Gradient end color.
    pub bg2: Seed,
    pub bg2_alpha: f64,
    /// The panel container box behind the bar.
    pub box_color: Seed,
    pub box_alpha: f64,
    pub border_color: Seed,
    pub border_alpha: f64,
    pub shadow_color: Seed,
    pub shadow_alpha: f64,
    pub island_color: Seed,
    pub island_alpha: f64,
    pub highlight_color: Seed,
    pub highlight_alpha: f64,

    pub gradient: bool,
    pub gradient_direction: GradientDirection,
    pub neon: bool,
    pub shadow: bool,
    /// Hover draws a border instead of a filled highlight.
    pub hover_effect: bool,
    /// Pick the bar foreground automatically from background brightness.
    pub autofg: bool,
    /// Derive the highlight tint from background brightness.
    pub autohg: bool,

    /// Per-slot "candy" button backgrounds, slots 1..=8.
    pub candy: Vec<Seed>,
    pub candy_alpha: f64,

    /// Bar appearance when a window is maximized.
    pub wmax_bg: Seed,
    pub wmax_alpha: f64,
    pub border_wmax: bool,
    pub neon_wmax: bool,
    pub cust_margin_wmax: bool,
    pub margin_wmax: f64,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            bar_type: BarType::Mainland,
            height: 36.0,
            margin: 8.0,
            border_width: 2.0,
            border_radius: 16.0,
            border_type: BorderType::Solid,
            border_sides: Sides::all(),
            radius_corners: Corners::all(),
            h_pad: 4.0,
            v_pad: 4.0,
            fg: [1.0, 1.0, 1.0].into(),
            fg_alpha: 1.0,
            bg: [0.125, 0.125, 0.125].into(),
            bg_alpha: 0.9,
            bg2: [0.0, 0.0, 0.0].into(),
            bg2_alpha: 0.9,
            box_color: [0.0, 0.0, 0.0].into(),
            box_alpha: 0.0,
            border_color: [0.75, 0.75, 0.75].into(),
            border_alpha: 0.7,
            shadow_color: [0.0, 0.0, 0.0].into(),
            shadow_alpha: 0.2,
            island_color: [0.0, 0.0, 0.0].into(),
            island_alpha: 1.0,
            highlight_color: [0.5, 0.5, 0.5].into(),
            highlight_alpha: 0.5,
            gradient: false,
            gradient_direction: GradientDirection::Vertical,
            neon: false,
            shadow: false,
            hover_effect: false,
            autofg: false,
            autohg: false,
            candy: Vec::new(),
            candy_alpha: 0.99,
            wmax_bg: [0.125, 0.125, 0.125].into(),
            wmax_alpha: 0.9,
            border_wmax: false,
            neon_wmax: false,
            cust_margin_wmax: false,
            margin_wmax: 0.0,
        }
    }
}

// ─── Menu configuration ──────────────────────────────────────────────────────

/// Seed options for popup menus, sub-menus and the accent surface.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub fg: Seed,
    pub fg_alpha: f64,
    pub bg: Seed,
    pub bg_alpha: f64,
    pub border_color: Seed,
    pub border_alpha: f64,
    pub highlight_color: Seed,
    pub highlight_alpha: f64,
    pub shadow_color: Seed,
    pub shadow_alpha: f64,
    /// Accent / selection color.
    pub accent_color: Seed,
    pub accent_alpha: f64,

    /// Manual sub-menu background; used verbatim when `smbg_override` is on,
    /// otherwise the sub-menu is derived as a contrast step from `bg`.
    pub smbg_color: Seed,
    pub smbg_override: bool,

    pub autofg: bool,
    pub autohg: bool,
    /// Decorate menus with the light-gradient image instead of a shadow.
    pub mbg_gradient: bool,

    pub menu_radius: f64,
    pub notif_radius: f64,
    pub qtoggle_radius: f64,
    pub slider_height: f64,
    pub handle_border: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            fg: [1.0, 1.0, 1.0].into(),
            fg_alpha: 1.0,
            bg: [0.125, 0.125, 0.125].into(),
            bg_alpha: 0.95,
            border_color: [0.75, 0.75, 0.75].into(),
            border_alpha: 0.5,
            highlight_color: [0.5, 0.5, 0.5].into(),
            highlight_alpha: 0.5,
            shadow_color: [0.0, 0.0, 0.0].into(),
            shadow_alpha: 0.2,
            accent_color: [0.3, 0.55, 0.7].into(),
            accent_alpha: 0.9,
            smbg_color: [0.25, 0.25, 0.25].into(),
            smbg_override: false,
            autofg: false,
            autohg: false,
            mbg_gradient: false,
            menu_radius: 20.0,
            notif_radius: 10.0,
            qtoggle_radius: 50.0,
            slider_height: 4.0,
            handle_border: 2.0,
        }
    }
}

// ─── Dash / dock configuration ───────────────────────────────────────────────

/// Seed options for the dash/dock block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    pub style: DashDockStyle,
    pub bg: Seed,
    pub bg_alpha: f64,
    pub radius: f64,
    pub icon_size: f64,
    pub border: bool,
    pub shadow: bool,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            style: DashDockStyle::Default,
            bg: [0.125, 0.125, 0.125].into(),
            bg_alpha: 0.9,
            radius: 24.0,
            icon_size: 48.0,
            border: true,
            shadow: true,
        }
    }
}

// ─── Toolkit (secondary domain) configuration ────────────────────────────────

/// Seed options for the toolkit-level stylesheet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GtkConfig {
    /// Master switch — without it the secondary stylesheet is not written
    /// and any previously backed-up external state is restored.
    pub apply: bool,
    /// Accent-hint strengths in percent (0 disables that block).
    pub headerbar_hint: u32,
    pub sidebar_hint: u32,
    pub card_hint: u32,
    pub sidebar_transparency: bool,
    pub traffic_light: bool,
    pub popover: bool,
    pub winb_color: Seed,
    pub winb_alpha: f64,
    pub winb_width: f64,
}

impl Default for GtkConfig {
    fn default() -> Self {
        Self {
            apply: false,
            headerbar_hint: 0,
            sidebar_hint: 0,
            card_hint: 0,
            sidebar_transparency: false,
            traffic_light: false,
            popover: false,
            winb_color: [0.7, 0.7, 0.7].into(),
            winb_alpha: 0.0,
            winb_width: 1.0,
        }
    }
}

// ─── Theme configuration ─────────────────────────────────────────────────────

/// The complete seed snapshot: one of these per derivation pass.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub bar: BarConfig,
    pub menu: MenuConfig,
    pub dash: DashConfig,
    pub gtk: GtkConfig,

    /// Free-form font descriptor ("Fira Sans Semi-Bold 11"); empty means
    /// inherit the host font (weight still defaults to 400).
    pub font: String,
    /// An auto-generated theme is active: bump light font weights to 500.
    pub autotheme_font: bool,

    /// Scope-widening flags for the emitted rules.
    pub apply_accent_shell: bool,
    pub apply_menu_shell: bool,
    pub apply_all_shell: bool,
    pub apply_menu_notif: bool,

    /// Keep the bar styled inside the overview (off emits a reset block).
    pub set_overview: bool,
    /// Lock-screen session: panel surfaces go transparent.
    pub locked: bool,
    /// High-contrast mode swaps icon templates, not colors.
    pub high_contrast: bool,
    /// Host color scheme, for the toolkit base grey.
    pub prefer_dark: bool,

    /// Suppression flags — either one short-circuits the whole engine pass.
    pub import_export: bool,
    pub pause_reload: bool,

    pub warning_color: Seed,
    pub success_color: Seed,
    pub destruct_color: Seed,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            bar: BarConfig::default(),
            menu: MenuConfig::default(),
            dash: DashConfig::default(),
            gtk: GtkConfig::default(),
            font: String::new(),
            autotheme_font: false,
            apply_accent_shell: false,
            apply_menu_shell: false,
            apply_all_shell: false,
            apply_menu_notif: false,
            set_overview: true,
            locked: false,
            high_contrast: false,
            prefer_dark: true,
            import_export: false,
            pause_reload: false,
            // Host default semantic colors (dark variants).
            warning_color: [0.965, 0.827, 0.176].into(),
            success_color: [0.149, 0.635, 0.412].into(),
            destruct_color: [0.753, 0.11, 0.157].into(),
        }
    }
}

impl ThemeConfig {
    /// Candy slot color `i` (0-based); slots beyond the configured list fall
    /// back to the bar background so an unset slot is indistinguishable
    /// from a plain button.
    #[must_use]
    pub fn candy(&self, i: usize) -> Color {
        self.bar
            .candy
            .get(i)
            .unwrap_or(&self.bar.bg)
            .with_alpha(self.bar.candy_alpha)
    }

    /// Number of candy slots in the rule vocabulary.
    pub const CANDY_SLOTS: usize = 8;
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_is_complete() {
        let cfg = ThemeConfig::default();
        assert_eq!(cfg.bar.bar_type, BarType::Mainland);
        assert!(cfg.set_overview);
        assert!(!cfg.gtk.apply);
    }

    #[test]
    fn toml_round_trip_partial() {
        let cfg: ThemeConfig = toml::from_str(
            r#"
            font = "Sans 11"

            [bar]
            bar_type = "Islands"
            height = 40.0
            bg = [0.1, 0.2, 0.3]
            border_sides = ["top", "bottom"]
            radius_corners = ["top-left", "top-right"]

            [menu]
            accent_color = [0.8, 0.2, 0.2, 0.9]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.bar.bar_type, BarType::Islands);
        assert!((cfg.bar.height - 40.0).abs() < f64::EPSILON);
        assert_eq!(cfg.bar.border_sides, Sides::TOP | Sides::BOTTOM);
        assert_eq!(cfg.bar.radius_corners, Corners::TOP_LEFT | Corners::TOP_RIGHT);
        // Unset sections fall back wholesale.
        assert_eq!(cfg.dash.style, DashDockStyle::Default);
        // A 4-element seed carries its own alpha.
        let accent = cfg.menu.accent_color.with_alpha(1.0);
        assert!((accent.a - 0.9).abs() < 1e-9);
    }

    #[test]
    fn unknown_side_name_is_an_error() {
        let res: Result<ThemeConfig, _> = toml::from_str(
            r#"
            [bar]
            border_sides = ["diagonal"]
            "#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn enclosed_classification() {
        assert!(!BarType::Mainland.is_enclosed());
        assert!(!BarType::Floating.is_enclosed());
        assert!(BarType::Islands.is_enclosed());
        assert!(BarType::Trilands.is_enclosed());
    }

    #[test]
    fn candy_slot_fallback() {
        let mut cfg = ThemeConfig::default();
        cfg.bar.candy = vec![Seed::from([1.0, 0.0, 0.0])];
        let set = cfg.candy(0);
        let unset = cfg.candy(5);
        assert_eq!((set.r, set.g, set.b), (255, 0, 0));
        assert_eq!(unset.with_alpha(1.0), cfg.bar.bg.with_alpha(1.0));
    }

    #[test]
    fn css_names() {
        assert_eq!(BorderType::Dashed.css(), "dashed");
        assert_eq!(GradientDirection::Horizontal.css(), "horizontal");
    }
}
