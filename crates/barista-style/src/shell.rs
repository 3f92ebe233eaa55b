//! Primary stylesheet composition.
//!
//! The stylesheet is assembled from an explicit, ordered list of
//! [`Block`]s. Each block is gated on a predicate over the configuration
//! and appends a self-contained run of selector rules; blocks never
//! reach back and mutate text emitted before them. That keeps the
//! composition order auditable and lets tests exercise one block at a
//! time.
//!
//! Two scoping tokens control the blast radius of the generated rules:
//! the panel selectors always carry the [`BAR_CLASS`] marker class, and
//! menu selectors carry [`MENU_CLASS`] unless a widen flag extends them
//! to the whole shell.

use std::fmt::Write;

use barista_color::{Color, fmt_alpha};
use barista_theme::config::{BarType, DashDockStyle, Sides, ThemeConfig};
use barista_theme::palette::DerivedPalette;

/// Marker class the host applies to the styled panel.
pub const BAR_CLASS: &str = ".barista";
/// Marker class the host applies to styled menu widgets.
pub const MENU_CLASS: &str = ".baristamenu";

/// Everything a block builder may look at.
pub struct Ctx<'a> {
    pub cfg: &'a ThemeConfig,
    pub pal: &'a DerivedPalette,
}

/// One conditional rule block: a predicate and a builder.
pub struct Block {
    pub name: &'static str,
    pub applies: fn(&Ctx<'_>) -> bool,
    pub build: fn(&Ctx<'_>, &mut String),
}

/// The ordered block list. Order is part of the output contract:
/// later blocks may override earlier rules by specificity, never by
/// editing them.
pub const BLOCKS: &[Block] = &[
    Block { name: "panel", applies: |_| true, build: panel_block },
    Block { name: "menu", applies: |_| true, build: menu_block },
    Block { name: "submenu", applies: |_| true, build: submenu_block },
    Block { name: "datemenu", applies: |_| true, build: datemenu_block },
    Block { name: "quick-settings", applies: |_| true, build: quick_settings_block },
    Block {
        name: "accent-shell",
        applies: |c| c.cfg.apply_accent_shell || c.cfg.apply_all_shell,
        build: accent_block,
    },
    Block {
        name: "shell-wide",
        applies: |c| c.cfg.apply_all_shell,
        build: shell_wide_block,
    },
    Block {
        name: "dash-dock",
        applies: |c| c.cfg.dash.style != DashDockStyle::Default,
        build: dash_block,
    },
    Block {
        name: "notifications",
        applies: |c| c.cfg.apply_menu_notif || c.cfg.apply_all_shell,
        build: notifications_block,
    },
];

/// Render the complete primary stylesheet.
#[must_use]
pub fn compose(cfg: &ThemeConfig, pal: &DerivedPalette) -> String {
    let ctx = Ctx { cfg, pal };
    let mut out = String::with_capacity(32 * 1024);
    out.push_str("/* stylesheet.css\n * Autogenerated by barista. Do not edit.\n */\n");
    for block in BLOCKS {
        if (block.applies)(&ctx) {
            (block.build)(&ctx, &mut out);
        }
    }
    out
}

// ─── Shared style fragments ──────────────────────────────────────────────────

impl Ctx<'_> {
    fn enclosed(&self) -> bool {
        self.cfg.bar.bar_type.is_enclosed()
    }

    /// Menu selector prefix: scoped to the marker class unless widened.
    fn menu_scope(&self) -> &'static str {
        if self.cfg.apply_menu_shell || self.cfg.apply_all_shell {
            ""
        } else {
            MENU_CLASS
        }
    }

    /// Zero-width border in the seed color, then per-side widths.
    fn border_style(&self) -> String {
        let bar = &self.cfg.bar;
        let mut s = format!(
            " border: 0px {} {}; ",
            bar.border_type.css(),
            self.pal.border
        );
        for (flag, side) in [
            (Sides::TOP, "top"),
            (Sides::RIGHT, "right"),
            (Sides::BOTTOM, "bottom"),
            (Sides::LEFT, "left"),
        ] {
            if bar.border_sides.contains(flag) {
                let _ = write!(s, " border-{side}-width: {}px; ", bar.border_width);
            }
        }
        s
    }

    /// Corner-gated radius (TL TR BR BL order).
    fn radius_style(&self) -> String {
        let p = self.pal;
        format!(
            " border-radius: {}px {}px {}px {}px; ",
            p.corner_tl, p.corner_tr, p.corner_br, p.corner_bl
        )
    }

    fn fg_style(&self) -> String {
        format!(" color: {}; ", self.pal.bar_fg)
    }

    fn font_style(&self) -> String {
        let font = &self.pal.font;
        let mut s = String::new();
        if let Some(family) = &font.family {
            if let Some(size) = font.size_pt {
                let _ = write!(s, " font-size: {size}pt;");
            }
            let _ = write!(
                s,
                " font-family: \"{family}\"; font-style: {}; font-stretch: {}; font-variant: normal;",
                font.style, font.stretch
            );
        }
        let _ = write!(
            s,
            " font-weight: {}; ",
            font.effective_weight(self.cfg.autotheme_font)
        );
        s
    }

    /// Neon glow box-shadow in the given color at the given spread.
    fn neon_glow(&self, color: Color, spread: f64) -> String {
        format!(
            " box-shadow: 0px 0px 4px {spread}px rgba({},{},{},0.55); ",
            color.r, color.g, color.b
        )
    }

    fn neon_style(&self) -> String {
        if self.cfg.bar.neon {
            self.neon_glow(self.pal.border, self.pal.neon_spread)
        } else {
            String::new()
        }
    }

    fn tri_mid_neon_style(&self) -> String {
        if self.cfg.bar.neon {
            self.neon_glow(self.pal.border, self.pal.tri_mid_neon_spread)
        } else {
            String::new()
        }
    }

    /// Flat island fill; the gradient supersedes it entirely.
    fn island_style(&self) -> String {
        if self.cfg.bar.gradient {
            String::new()
        } else {
            format!(" background-color: {}; ", self.pal.island)
        }
    }

    fn gradient_style(&self) -> String {
        if self.cfg.bar.gradient {
            format!(
                " background-gradient-start: {}; background-gradient-end: {}; background-gradient-direction: {}; ",
                self.pal.gradient_start,
                self.pal.gradient_end,
                self.cfg.bar.gradient_direction.css()
            )
        } else {
            String::new()
        }
    }

    fn shadow_style(&self) -> String {
        if self.cfg.bar.shadow {
            let sh = &self.pal.shadow;
            format!(
                " box-shadow: 0px {}px {}px {}px {}; ",
                sh.offset_y, sh.blur, sh.spread, sh.color
            )
        } else {
            " box-shadow: none; ".to_string()
        }
    }

    /// Panel-level style for the current bar type.
    fn panel_style(&self) -> String {
        let bar = &self.cfg.bar;
        let mut s = format!(
            " background-color: {} !important; height: {}px !important; {} {}",
            self.pal.bar_bg,
            bar.height,
            self.radius_style(),
            self.shadow_style(),
        );
        match bar.bar_type {
            BarType::Mainland => s.push_str(" margin: 0px; border-radius: 0px; "),
            BarType::Floating => {
                let _ = write!(s, " margin: {}px {}px; ", bar.margin, 3.0 * bar.margin);
            }
            BarType::Islands | BarType::Trilands => {
                let _ = write!(
                    s,
                    " margin: {}px {}px; padding: 0px {}px; {}",
                    bar.margin,
                    1.5 * bar.margin,
                    bar.v_pad,
                    self.fg_style()
                );
            }
        }
        if !self.enclosed() {
            let _ = write!(
                s,
                " {} {} {} padding: 0px {}px; ",
                self.fg_style(),
                self.border_style(),
                self.gradient_style(),
                bar.v_pad
            );
            s.push_str(&self.neon_style());
        }
        s
    }

    /// Button-level style for the current bar type.
    fn btn_style(&self) -> String {
        let bar = &self.cfg.bar;
        let mut s = format!(" margin: 0px; height: {}px !important; ", bar.height);
        if self.enclosed() {
            let _ = write!(
                s,
                "{} {} {} {} {}",
                self.border_style(),
                self.radius_style(),
                self.fg_style(),
                self.island_style(),
                self.gradient_style()
            );
            s.push_str(&self.neon_style());
        } else {
            let _ = write!(
                s,
                "{} border-radius: {}px; border-width: 0px; ",
                self.fg_style(),
                self.pal.radius.max(5.0)
            );
        }
        s
    }

    /// Padding shell around each button; open types absorb the border
    /// width into the padding so buttons stay centered.
    fn btn_container_style(&self) -> String {
        let bar = &self.cfg.bar;
        let (v, h) = if self.enclosed() {
            (bar.v_pad, bar.h_pad)
        } else {
            (bar.border_width + bar.v_pad, bar.border_width + bar.h_pad)
        };
        format!(
            " padding: {v}px {h}px; margin: 0px 0px; border-radius: {}px; ",
            self.pal.radius + bar.border_width
        )
    }

    /// Hover/focus style: a highlight border, or the blended hover fill.
    fn btn_hover_style(&self) -> String {
        let bar = &self.cfg.bar;
        let mut s = if bar.hover_effect {
            let mut s = format!(
                " border: {}px solid {} !important; ",
                bar.height / 10.0,
                self.pal.highlight
            );
            if bar.neon && self.enclosed() {
                s.push_str(&self.neon_glow(self.pal.highlight, self.pal.neon_spread));
            }
            s
        } else if self.enclosed() {
            format!(" background-color: {} !important; ", self.pal.island_hover_bg)
        } else {
            format!(" background-color: {} !important; ", self.pal.bar_hover_bg)
        };
        if !self.enclosed() || !bar.neon {
            s.push_str(" box-shadow: none !important; ");
        }
        s
    }

    fn tri_mid_neon_hover_style(&self) -> String {
        if self.cfg.bar.hover_effect && self.cfg.bar.neon && self.enclosed() {
            self.neon_glow(self.pal.highlight, self.pal.tri_mid_neon_spread)
        } else {
            String::new()
        }
    }

    /// Lock-screen panels go fully transparent.
    fn unlock_style(&self) -> &'static str {
        if self.cfg.locked {
            " background-color: transparent !important; border-color: transparent !important; \
             color: rgba(255,255,255,1) !important; box-shadow: none !important; \
             transition-duration: 100ms; "
        } else {
            ""
        }
    }

    fn unlock_hover_style(&self) -> &'static str {
        if self.cfg.locked {
            " color: rgba(255,255,255,1) !important; "
        } else {
            ""
        }
    }

    /// Overview reset, emitted only when overview styling is off.
    fn overview_style(&self) -> String {
        if self.cfg.set_overview {
            String::new()
        } else {
            format!(
                " background-color: transparent !important; border-color: transparent !important; \
                 box-shadow: none !important; color: {} !important; ",
                self.pal.submenu_fg
            )
        }
    }

    fn wmax_color_style(&self) -> String {
        self.pal.wmax_fg.map_or_else(String::new, |fg| {
            format!(" color: {fg} !important; transition-duration: 100ms; ")
        })
    }

    fn wmax_hover_style(&self) -> String {
        self.pal.wmax_hover_bg.map_or_else(String::new, |bg| {
            format!(" background-color: {bg} !important; transition-duration: 100ms; ")
        })
    }

    /// The shared popup content look: shadow, border, fill, fg, radius.
    fn menu_content_style(&self) -> String {
        let p = self.pal;
        let mut s = format!(
            " box-shadow: 0 2px 6px 0 {} !important; border: 1px solid {} !important; \
             background-color: {}; color: {}; border-radius: {}px !important; ",
            p.menu_shadow, p.menu_border, p.menu_bg, p.menu_fg, p.menu_content_radius
        );
        if self.cfg.menu.mbg_gradient {
            s.push_str(
                " box-shadow: none !important; background-image: url(media/menu.svg); \
                 background-repeat: no-repeat; background-size: cover; ",
            );
        }
        s
    }

    fn slider_style(&self) -> String {
        let p = self.pal;
        let menu = &self.cfg.menu;
        let base = p.slider_base;
        let active = p.slider_active;
        let b = p.slider_border_level;
        format!(
            " color: {base} !important; \
             -barlevel-height: {}px; \
             -barlevel-border-width: 0.5px; \
             -barlevel-border-color: rgba({b},{b},{b},0.25) !important; \
             -barlevel-active-border-color: rgba({b},{b},{b},0.25) !important; \
             -slider-handle-border-width: {}px; \
             -slider-handle-radius: {}px; \
             -slider-handle-border-color: {active} !important; \
             -barlevel-background-color: {base} !important; \
             -barlevel-active-background-color: {active} !important; \
             -barlevel-overdrive-color: {} !important; ",
            menu.slider_height, menu.handle_border, p.slider_handle_radius, p.destructive
        )
    }

    /// Toggle-switch icon names; high-contrast mode swaps the template.
    fn toggle_svgs(&self) -> (&'static str, &'static str) {
        if self.cfg.high_contrast {
            ("toggle-on-hc.svg", "toggle-off-hc.svg")
        } else {
            ("toggle-on.svg", "toggle-off.svg")
        }
    }
}

// ─── Panel block ─────────────────────────────────────────────────────────────

#[allow(clippy::too_many_lines)]
fn panel_block(c: &Ctx<'_>, out: &mut String) {
    let p = c.pal;
    let cfg = c.cfg;
    let b = BAR_CLASS;
    let unlock = c.unlock_style();
    let unlock_hover = c.unlock_hover_style();
    let overview = c.overview_style();
    let wmax_color = c.wmax_color_style();
    let hfg = p.bar_hfg;
    let fg_a = fmt_alpha(cfg.bar.fg_alpha);

    let _ = write!(
        out,
        "
#panelBox{b} {{
    background-color: {} !important;
}}
#panel{b} {{
    {}{unlock}
}}
#panel{b} StLabel {{
    {}
}}
#panel{b}:windowmax {{
    background-color: {} !important;
    border-radius: 0px;
    border-color: {} !important;
    box-shadow: none;
    margin: 0px;
    height: {}px !important;
    {wmax_color}{unlock}
}}
#panel{b} .button-container {{
    {}
}}
#panel{b}:windowmax .button-container {{
    margin: {}px 0px;
}}
#panel{b} .panel-button {{
    {}
    color: rgba({},{},{},{fg_a});
    {unlock}
}}
#panel{b}:windowmax .panel-button {{
    {}{}{wmax_color}
}}
#panel{b}:overview, #panel{b}:overview .panel-button {{
    {overview}
}}
#panel{b}:overview:windowmax {{
    {overview}
}}
",
        p.box_bg,
        c.panel_style(),
        c.font_style(),
        p.wmax_bg,
        p.wmax_bg,
        p.height_wmax,
        c.btn_container_style(),
        p.margin_wmax,
        c.btn_style(),
        p.bar_fg.r,
        p.bar_fg.g,
        p.bar_fg.b,
        if cfg.bar.border_wmax { "" } else { "border-color: transparent; " },
        if cfg.bar.neon_wmax { "" } else { "box-shadow: none; " },
    );

    // Candy slots — a fixed vocabulary of eight.
    for i in 0..ThemeConfig::CANDY_SLOTS {
        let candy = cfg.candy(i);
        let _ = write!(
            out,
            "#panel{b} .panel-button.candy{} {{\n    background-color: {candy};\n}}\n",
            i + 1
        );
    }

    let _ = write!(
        out,
        "
#panel{b} .panel-button:hover, #panel{b} .panel-button:focus,
#panel{b} .panel-button:active, #panel{b} .panel-button:checked {{
    {}
    color: rgba({},{},{},{fg_a}) !important;
    {unlock_hover}
}}
#panel{b}:windowmax .panel-button:hover, #panel{b}:windowmax .panel-button:focus,
#panel{b}:windowmax .panel-button:active, #panel{b}:windowmax .panel-button:checked {{
    {wmax_color}{}
}}
#panel{b} .panel-button.clock-display .clock {{
    color: rgba({},{},{},{fg_a}) !important;
}}
#panel{b}:windowmax .panel-button.clock-display .clock {{
    {wmax_color}
}}
#panel{b} .panel-button:hover.clock-display .clock, #panel{b} .panel-button:focus.clock-display .clock,
#panel{b} .panel-button:active.clock-display .clock, #panel{b} .panel-button:checked.clock-display .clock {{
    color: rgba({},{},{},1) !important;
    background-color: transparent !important;
    box-shadow: none !important;
}}
#panel{b} .panel-button.screen-recording-indicator {{
    transition-duration: 150ms;
    font-weight: bold;
    background-color: {};
    box-shadow: none !important;
}}
#panel{b} .panel-button.screen-sharing-indicator,
#panel{b} .screencast-indicator,
#panel{b} .remote-access-indicator {{
    transition-duration: 150ms;
    font-weight: bold;
    background-color: {};
    box-shadow: none !important;
}}
#panel{b} .workspace-dot {{
    background-color: {} !important;
}}
",
        c.btn_hover_style(),
        hfg.r,
        hfg.g,
        hfg.b,
        c.wmax_hover_style(),
        p.bar_fg.r,
        p.bar_fg.g,
        p.bar_fg.b,
        hfg.r,
        hfg.g,
        hfg.b,
        p.destructive.with_alpha(0.8),
        p.sharing_indicator.with_alpha(0.9),
        p.bar_fg,
    );

    // Trilands corner policy: end buttons round outward, middles stay
    // square, single buttons keep the full corner set.
    let r = p.radius;
    let _ = write!(
        out,
        "
#panel{b} .trilands:left-child {{
    border-radius: {r}px 0px 0px {r}px;
}}
#panel{b} .trilands:right-child {{
    border-radius: 0px {r}px {r}px 0px;
}}
#panel{b} .trilands:one-child {{
    {}
}}
#panel{b} .trilands:mid-child {{
    border-radius: 0px; {}
}}
#panel{b}:windowmax .trilands:mid-child {{
    {}
}}
#panel{b} .trilands:mid-child:hover, #panel{b} .trilands:mid-child:focus,
#panel{b} .trilands:mid-child:active, #panel{b} .trilands:mid-child:checked {{
    {}
}}
",
        c.radius_style(),
        c.tri_mid_neon_style(),
        if cfg.bar.neon_wmax { "" } else { "box-shadow: none;" },
        c.tri_mid_neon_hover_style(),
    );
}

// ─── Menu blocks ─────────────────────────────────────────────────────────────

fn menu_block(c: &Ctx<'_>, out: &mut String) {
    let p = c.pal;
    let m = c.menu_scope();
    let mfg_a = fmt_alpha(c.cfg.menu.fg_alpha);
    let _ = write!(
        out,
        "
{m}.popup-menu-boxpointer, {m}.candidate-popup-boxpointer {{
    -arrow-rise: 6px;
}}
{m}.popup-menu {{
    color: rgba({},{},{},{mfg_a});
}}
{m}.popup-menu-content, {m}.candidate-popup-content {{
    {}
}}
{m}.popup-menu-item {{
    color: rgba({},{},{},{mfg_a});
}}
{m}.popup-menu-item:focus, {m}.popup-menu-item:hover, {m}.popup-menu-item:selected {{
    color: rgba({},{},{},1) !important;
    background-color: {} !important;
    transition-duration: 0ms !important;
}}
{m}.popup-menu-item:checked, {m}.popup-menu-item:active {{
    color: {} !important;
    background-color: {} !important;
}}
{m}.popup-menu-item:checked:focus, {m}.popup-menu-item:checked:hover,
{m}.popup-menu-item:active:focus, {m}.popup-menu-item:active:hover {{
    color: {} !important;
    box-shadow: none !important;
    background-color: {} !important;
}}
",
        p.menu_fg.r,
        p.menu_fg.g,
        p.menu_fg.b,
        c.menu_content_style(),
        p.menu_fg.r,
        p.menu_fg.g,
        p.menu_fg.b,
        p.menu_hfg.r,
        p.menu_hfg.g,
        p.menu_hfg.b,
        p.menu_hover_bg,
        p.accent_fg,
        p.accent,
        p.accent_hfg,
        p.accent_hover_bg,
    );
}

fn submenu_block(c: &Ctx<'_>, out: &mut String) {
    let p = c.pal;
    let m = c.menu_scope();
    let mfg_a = fmt_alpha(c.cfg.menu.fg_alpha);
    let smfg = p.submenu_fg;
    let smhfg = p.submenu_hfg;
    let _ = write!(
        out,
        "
{m}.popup-sub-menu {{
    background-color: {} !important;
    border: none;
    box-shadow: none;
}}
{m}.popup-sub-menu .popup-menu-item {{
    margin: 0px;
    color: rgba({},{},{},{mfg_a});
}}
{m}.popup-sub-menu .popup-menu-item:focus, {m}.popup-sub-menu .popup-menu-item:hover,
{m}.popup-sub-menu .popup-menu-item:selected {{
    color: rgba({},{},{},1) !important;
    background-color: {} !important;
}}
{m}.popup-sub-menu .popup-menu-item:active, {m}.popup-sub-menu .popup-submenu-menu-item:active,
{m}.popup-sub-menu .popup-submenu-menu-item:checked {{
    color: {} !important;
    background-color: {} !important;
}}
{m}.popup-menu-section .popup-sub-menu {{
    background-color: {} !important;
    border: none;
    box-shadow: none;
}}
{m}.popup-menu-section .popup-menu-item {{
    margin: 0px;
    color: rgba({},{},{},{mfg_a});
}}
{m}.popup-menu-section .popup-menu-item:focus, {m}.popup-menu-section .popup-menu-item:hover,
{m}.popup-menu-section .popup-menu-item:selected {{
    color: rgba({},{},{},1) !important;
    background-color: {} !important;
}}
{m}.popup-menu-item .toggle-switch:checked {{
    color: rgba({},{},{},1) !important;
}}
{m}.popup-menu-item .button {{
    color: rgba({},{},{},1) !important;
    background-color: {} !important;
}}
{m}.popup-menu-item .button:hover, {m}.popup-menu-item .button:focus {{
    color: rgba({},{},{},1) !important;
    background-color: {} !important;
    border-color: transparent !important;
}}
{m} .slider {{
    {}
}}
{m}.popup-separator-menu-item .popup-separator-menu-item-separator {{
    background-color: {} !important;
}}
",
        p.submenu_bg,
        smfg.r,
        smfg.g,
        smfg.b,
        smhfg.r,
        smhfg.g,
        smhfg.b,
        p.submenu_hover_bg,
        p.accent_fg,
        p.accent,
        p.submenu_bg,
        p.menu_fg.r,
        p.menu_fg.g,
        p.menu_fg.b,
        p.menu_hfg.r,
        p.menu_hfg.g,
        p.menu_hfg.b,
        p.menu_hover_bg,
        p.menu_fg.r,
        p.menu_fg.g,
        p.menu_fg.b,
        smfg.r,
        smfg.g,
        smfg.b,
        p.submenu_bg,
        smhfg.r,
        smhfg.g,
        smhfg.b,
        p.submenu_hover_bg,
        c.slider_style(),
        p.menu_border.with_alpha(0.7),
    );
}

#[allow(clippy::too_many_lines)]
fn datemenu_block(c: &Ctx<'_>, out: &mut String) {
    let p = c.pal;
    let cfg = c.cfg;
    let m = c.menu_scope();
    let mfg_a = cfg.menu.fg_alpha;
    let smfg = p.submenu_fg;
    let smhfg = p.submenu_hfg;
    let (toggle_on, toggle_off) = c.toggle_svgs();
    // Sub-surface card: the repeated look of messages, calendar and
    // event tiles inside the date menu.
    let card = format!(
        "color: {} !important;\n    background-color: {} !important;\n    border-radius: {}px;\n    box-shadow: 0 1px 1px 0 {} !important;",
        smfg.with_alpha(mfg_a),
        p.submenu_bg,
        cfg.menu.notif_radius,
        p.menu_shadow.with_alpha(0.08)
    );
    let card_hover = format!(
        "color: {smhfg} !important;\n    background-color: {} !important;",
        p.submenu_hover_bg
    );
    let focus_ring = format!(
        "box-shadow: inset 0 0 0 2px {} !important;",
        p.accent.with_alpha(0.5)
    );

    let _ = write!(
        out,
        "
{m}.datemenu-popover {{
    border-radius: {}px !important;
    padding-bottom: {}px !important;
}}
{m}.message-list-placeholder {{
    color: {} !important;
}}
{m}.message {{
    {card}
}}
{m}.message:hover, {m}.message:focus {{
    {card_hover}
}}
{m}.message:focus {{
    {focus_ring}
}}
{m}.message .message-title {{
    color: {} !important;
}}
{m}.message .message-source-icon, {m}.message .message-source-title,
{m}.message .message-body, {m}.message .event-time {{
    color: {} !important;
}}
{m}.message:hover .message-title, {m}.message:focus .message-title,
{m}.message:hover .message-body, {m}.message:focus .message-body,
{m}.message:hover .event-time, {m}.message:focus .event-time {{
    color: {smhfg} !important;
}}
{m}.message .button, {m}.message .message-close-button, {m}.message .message-expand-button {{
    color: {} !important;
    background-color: {} !important;
}}
{m}.message .button:hover, {m}.message .button:focus,
{m}.message .message-close-button:hover, {m}.message .message-close-button:focus {{
    color: {} !important;
    background-color: {} !important;
}}
{m}.message .message-media-control {{
    color: {} !important;
}}
{m}.message .message-media-control:insensitive {{
    color: {} !important;
}}
{m}.dnd-button {{
    border-color: {} !important;
    border-radius: 50px;
}}
{m}.dnd-button:hover {{
    border-color: {} !important;
}}
{m}.dnd-button:focus {{
    border-color: {} !important;
    box-shadow: none;
}}
{m} .toggle-switch {{
    background-image: url(media/{toggle_off});
    background-color: transparent !important;
}}
{m} .toggle-switch:checked {{
    background-image: url(media/{toggle_on});
    background-color: transparent !important;
}}
{m} .check-box StBin {{
    background-image: url(media/checkbox-off.svg);
}}
{m} .check-box:checked StBin {{
    background-image: url(media/checkbox-on.svg);
}}
{m} .check-box:focus StBin {{
    background-image: url(media/checkbox-off-focused.svg);
}}
{m} .check-box:focus:checked StBin {{
    background-image: url(media/checkbox-on-focused.svg);
}}
{m}.message-list-clear-button {{
    {card}
}}
{m}.message-list-clear-button:hover, {m}.message-list-clear-button:focus {{
    {card_hover}
}}
{m}.datemenu-today-button .date-label, {m}.datemenu-today-button .day-label {{
    color: {} !important;
}}
{m}.datemenu-today-button:hover, {m}.datemenu-today-button:focus {{
    background-color: {} !important;
    border-radius: {}px;
    color: {} !important;
}}
",
        cfg.menu.menu_radius,
        0.08f64.mul_add(cfg.menu.menu_radius, 5.0),
        p.menu_fg.with_alpha(0.5),
        smfg.with_alpha(mfg_a),
        smfg.with_alpha(mfg_a * 0.85),
        smfg.with_alpha(mfg_a),
        p.submenu_bg,
        p.menu_fg.with_alpha(1.0),
        p.menu_bg,
        smfg.with_alpha(mfg_a),
        smfg.with_alpha(mfg_a * 0.5),
        p.menu_bg.with_alpha(0.5),
        p.menu_hover_bg,
        p.accent,
        p.menu_fg.with_alpha(mfg_a * 1.25),
        p.menu_hover_bg,
        cfg.menu.notif_radius,
        p.menu_hfg,
    );

    // Calendar grid.
    let half_bg = p.submenu_bg.with_alpha(0.5 * cfg.menu.bg_alpha);
    let _ = write!(
        out,
        "
{m}.calendar {{
    {card}
}}
{m}.calendar .calendar-month-header .pager-button, {m}.calendar .calendar-month-label,
{m}.calendar-day-heading {{
    color: {} !important;
    background-color: {half_bg} !important;
}}
{m}.calendar .calendar-month-header .pager-button:hover,
{m}.calendar .calendar-month-header .pager-button:focus {{
    color: {smhfg} !important;
    background-color: {} !important;
}}
{m}.calendar-day {{
    background-color: {half_bg} !important;
}}
{m}.calendar-weekday, {m}.calendar-work-day {{
    color: {} !important;
    font-weight: normal;
}}
{m}.calendar-nonwork-day, {m}.calendar-weekend {{
    color: {} !important;
    font-weight: normal;
}}
{m}.calendar-other-month-day, {m}.calendar-other-month {{
    color: {} !important;
    font-weight: normal;
}}
{m}.calendar-work-day:hover, {m}.calendar-work-day:focus, {m}.calendar-work-day:selected,
{m}.calendar-weekend:hover, {m}.calendar-weekend:focus, {m}.calendar-weekend:selected,
{m}.calendar-other-month:hover, {m}.calendar-other-month:focus, {m}.calendar-other-month:selected {{
    color: {smhfg} !important;
    background-color: {} !important;
}}
{m}.calendar .calendar-today, {m}.calendar .calendar-today:selected {{
    color: {} !important;
    background-color: {} !important;
}}
{m}.calendar .calendar-today:hover, {m}.calendar .calendar-today:focus {{
    color: {} !important;
    background-color: {} !important;
}}
{m}.calendar .calendar-today:selected, {m}.calendar .calendar-today:focus {{
    {focus_ring}
}}
{m}.calendar .calendar-today .calendar-day-with-events, {m}.calendar .calendar-day-with-events {{
    background-image: url(\"media/calendar-today.svg\");
    background-size: contain;
}}
{m}.calendar-week-number {{
    font-weight: bold;
    font-feature-settings: \"tnum\";
    background-color: {} !important;
    color: {} !important;
}}
",
        smfg.with_alpha(mfg_a),
        p.submenu_hover_bg,
        smfg.with_alpha(1.0),
        smfg.with_alpha(0.7),
        smfg.with_alpha(0.5),
        p.submenu_hover_bg,
        p.accent_fg,
        p.accent,
        p.accent_hfg,
        p.accent_hover_bg,
        p.menu_bg.with_alpha(cfg.menu.bg_alpha * 0.7),
        p.menu_fg.with_alpha(mfg_a * 0.8),
    );

    // Events / world clocks / weather tiles share the card look.
    for tile in [".events-button", ".world-clocks-button", ".weather-button"] {
        let _ = write!(
            out,
            "
{m}{tile} {{
    {card}
}}
{m}{tile}:hover, {m}{tile}:focus {{
    {card_hover}
}}
{m}{tile}:focus {{
    {focus_ring}
}}
{m}{tile} .events-title, {m}{tile} .world-clocks-header, {m}{tile} .weather-header {{
    color: {} !important;
}}
{m}{tile} .event-time, {m}{tile} .world-clocks-time, {m}{tile} .weather-forecast-time {{
    color: {} !important;
}}
",
            smfg.with_alpha(mfg_a * 0.9),
            smfg.with_alpha(mfg_a * 0.85),
        );
    }
}

#[allow(clippy::too_many_lines)]
fn quick_settings_block(c: &Ctx<'_>, out: &mut String) {
    let p = c.pal;
    let cfg = c.cfg;
    let m = c.menu_scope();
    let mfg_a = fmt_alpha(cfg.menu.fg_alpha);
    let smfg = p.submenu_fg;
    let smhfg = p.submenu_hfg;
    let qr = cfg.menu.qtoggle_radius;
    let _ = write!(
        out,
        "
{m}.quick-settings {{
    border-radius: {}px !important;
}}
{m}.quick-slider .slider {{
    {}
}}
{m}.quick-toggle {{
    color: rgba({},{},{},{mfg_a}) !important;
    background-color: {} !important;
    box-shadow: none;
    border-radius: {qr}px;
}}
{m}.quick-toggle:hover, {m}.quick-toggle:focus {{
    color: {smhfg} !important;
    background-color: {} !important;
}}
{m}.quick-toggle:checked, {m}.quick-toggle:checked:active {{
    color: {} !important;
    background-color: {} !important;
}}
{m}.quick-toggle:checked:hover, {m}.quick-toggle:checked:focus {{
    color: {} !important;
    background-color: {} !important;
}}
{m}.quick-menu-toggle .quick-toggle {{
    color: rgba({},{},{},{mfg_a}) !important;
    background-color: {} !important;
    box-shadow: none;
}}
{m}.quick-menu-toggle .quick-toggle:hover, {m}.quick-menu-toggle .quick-toggle:focus {{
    color: {} !important;
    background-color: {} !important;
}}
{m}.quick-menu-toggle .quick-toggle:checked, {m}.quick-menu-toggle .quick-toggle:active {{
    color: {} !important;
    background-color: {} !important;
    box-shadow: none;
}}
{m}.quick-menu-toggle .quick-toggle-arrow {{
    color: rgba({},{},{},{mfg_a}) !important;
    background-color: {} !important;
    border-color: {} !important;
}}
{m}.quick-menu-toggle .quick-toggle-arrow:ltr {{ border-radius: 0 {qr}px {qr}px 0; }}
{m}.quick-menu-toggle .quick-toggle-arrow:rtl {{ border-radius: {qr}px 0 0 {qr}px; }}
{m}.quick-menu-toggle .quick-toggle:ltr {{ border-radius: {qr}px 0 0 {qr}px; }}
{m}.quick-menu-toggle .quick-toggle:rtl {{ border-radius: 0 {qr}px {qr}px 0; }}
{m}.quick-menu-toggle .quick-toggle:last-child {{ border-radius: {qr}px; }}
{m}.quick-menu-toggle .quick-toggle-arrow:hover, {m}.quick-menu-toggle .quick-toggle-arrow:focus {{
    color: {smhfg} !important;
    background-color: {} !important;
}}
{m}.quick-menu-toggle .quick-toggle-arrow:checked {{
    color: {} !important;
    background-color: {} !important;
}}
{m}.quick-toggle-menu {{
    background-color: {} !important;
}}
{m}.quick-toggle-menu .popup-menu-item {{
    color: rgba({},{},{},{mfg_a}) !important;
}}
{m}.quick-toggle-menu .popup-menu-item:hover, {m}.quick-toggle-menu .popup-menu-item:focus {{
    color: {smhfg} !important;
    background-color: {} !important;
}}
{m}.quick-toggle-menu .popup-menu-item:checked {{
    color: {} !important;
    background-color: {} !important;
}}
{m}.quick-toggle-menu .header .title, {m}.quick-toggle-menu .header .subtitle {{
    color: rgba({},{},{},{mfg_a}) !important;
}}
{m}.quick-toggle-menu .header .icon {{
    color: {} !important;
    background-color: {} !important;
}}
{m}.quick-settings-system-item .icon-button, {m}.quick-settings .icon-button,
{m}.quick-settings .button, {m}.background-app-item .icon-button {{
    color: {} !important;
    background-color: {} !important;
}}
{m}.quick-settings-system-item .icon-button:hover, {m}.quick-settings-system-item .icon-button:focus,
{m}.quick-settings .icon-button:hover, {m}.quick-settings .icon-button:focus,
{m}.quick-settings .button:hover, {m}.quick-settings .button:focus {{
    color: {smhfg} !important;
    background-color: {} !important;
}}
{m}.quick-settings .button:checked {{
    color: {} !important;
    background-color: {} !important;
}}
{m}.quick-settings .button:checked:hover, {m}.quick-settings .button:checked:focus {{
    color: {} !important;
    background-color: {} !important;
}}
{m}.quick-settings-system-item .power-item:checked, {m}.nm-network-item:checked,
{m}.nm-network-item:active, {m}.bt-device-item:checked,
{m}.keyboard-brightness-level .button:checked, {m}.background-apps-quick-toggle:checked {{
    background-color: {} !important;
}}
",
        cfg.menu.menu_radius,
        c.slider_style(),
        smfg.r,
        smfg.g,
        smfg.b,
        p.submenu_bg,
        p.submenu_hover_bg,
        p.accent_fg,
        p.accent,
        p.accent_hfg,
        p.accent_hover_bg,
        p.menu_fg.r,
        p.menu_fg.g,
        p.menu_fg.b,
        p.submenu_bg,
        p.menu_hfg,
        p.submenu_hover_bg,
        p.accent_fg,
        p.accent,
        smfg.r,
        smfg.g,
        smfg.b,
        p.submenu_bg.with_alpha(cfg.menu.bg_alpha * 1.2),
        p.menu_bg,
        p.submenu_hover_bg,
        p.accent_fg,
        p.accent.with_alpha(cfg.menu.accent_alpha * 1.2),
        p.submenu_bg.with_alpha(cfg.menu.bg_alpha),
        smfg.r,
        smfg.g,
        smfg.b,
        p.submenu_hover_bg,
        p.accent_fg,
        p.accent.with_alpha(cfg.menu.accent_alpha * 1.2),
        smfg.r,
        smfg.g,
        smfg.b,
        p.accent_fg.with_alpha(cfg.menu.fg_alpha),
        p.accent,
        smfg.with_alpha(cfg.menu.fg_alpha * 1.2),
        p.submenu_bg.with_alpha(cfg.menu.bg_alpha * 1.2),
        p.submenu_hover_bg,
        p.accent_fg.with_alpha(cfg.menu.fg_alpha * 1.2),
        p.accent,
        p.accent_hfg,
        p.accent_hover_bg,
        p.accent,
    );
}

// ─── Wider shell blocks ──────────────────────────────────────────────────────

fn accent_block(c: &Ctx<'_>, out: &mut String) {
    let p = c.pal;
    let (toggle_on, toggle_off) = c.toggle_svgs();
    let accent = p.accent;
    let _ = write!(
        out,
        "
.slider {{
    {}
}}
.toggle-switch {{
    background-image: url(media/{toggle_off});
    background-color: transparent !important;
}}
.toggle-switch:checked {{
    background-image: url(media/{toggle_on});
    background-color: transparent !important;
}}
.check-box StBin {{
    background-image: url(media/checkbox-off.svg);
}}
.check-box:checked StBin {{
    background-image: url(media/checkbox-on.svg);
}}
.check-box:focus StBin {{
    background-image: url(media/checkbox-off-focused.svg);
}}
.check-box:focus:checked StBin {{
    background-image: url(media/checkbox-on-focused.svg);
}}
.ripple-pointer-location, .ripple-box {{
    background-color: {} !important;
    box-shadow: 0 0 2px 2px {} !important;
}}
.pie-timer {{
    -pie-border-color: {accent} !important;
    -pie-background-color: {} !important;
}}
.magnifier-zoom-region {{
    border-color: {accent} !important;
}}
.overview-tile:active, .overview-tile:checked {{
    color: {} !important;
    background-color: {accent} !important;
}}
StWidget.focused .app-well-app-running-dot, StWidget.focused .app-grid-running-dot {{
    background-color: {} !important;
    border-color: {} !important;
}}
.switcher-list .item-box:active {{
    background-color: {} !important;
}}
.workspace-thumbnail-indicator {{
    border: 3px solid {accent} !important;
}}
.modal-dialog-linked-button:focus, .modal-dialog-linked-button:selected {{
    border-color: {accent} !important;
    box-shadow: none !important;
}}
.login-dialog .modal-dialog-button, .unlock-dialog .modal-dialog-button,
.login-dialog StEntry:focus, .unlock-dialog StEntry:focus {{
    border-color: {accent} !important;
}}
.login-dialog-user-list:expanded .login-dialog-user-list-item:selected {{
    background-color: {accent} !important;
    color: {} !important;
}}
.unlock-dialog .user-widget .user-icon {{
    background-color: {accent} !important;
}}
StEntry {{
    selection-background-color: {accent} !important;
    selected-color: {} !important;
    border: 1px solid transparent !important;
}}
StEntry:hover, StEntry:focus, StEntry:active, StEntry:checked {{
    border-color: {accent} !important;
    box-shadow: none;
}}
.keyboard-key.enter-key {{
    color: {} !important;
    background-color: {accent} !important;
}}
.keyboard-key.enter-key:focus, .keyboard-key.enter-key:hover {{
    background-color: {} !important;
}}
.keyboard-key.enter-key:checked, .keyboard-key.enter-key:active {{
    background-color: {} !important;
}}
.screenshot-ui-type-button:active, .screenshot-ui-type-button:checked,
.screenshot-ui-show-pointer-button:active, .screenshot-ui-show-pointer-button:checked {{
    color: {} !important;
    background-color: {accent} !important;
}}
.screenshot-ui-window-selector-window:checked .screenshot-ui-window-selector-window-border {{
    border-color: {accent} !important;
    background-color: {} !important;
}}
",
        c.slider_style(),
        accent.with_alpha(0.7 * c.cfg.menu.accent_alpha).shade(0.3),
        accent.shade(0.1),
        accent.with_alpha(0.7 * c.cfg.menu.accent_alpha).shade(0.3),
        p.accent_fg,
        accent.with_alpha(1.0),
        accent.with_alpha(1.0),
        accent.with_alpha(0.9),
        p.accent_fg,
        p.accent_fg,
        p.accent_fg,
        p.accent_hover_bg,
        accent.with_alpha(0.9 * c.cfg.menu.accent_alpha).shade(0.3),
        p.accent_fg,
        accent.with_alpha(0.2),
    );
}

#[allow(clippy::too_many_lines)]
fn shell_wide_block(c: &Ctx<'_>, out: &mut String) {
    let p = c.pal;
    let cfg = c.cfg;
    let mfg_a = cfg.menu.fg_alpha;
    let smfg = p.submenu_fg;
    let smhfg = p.submenu_hfg;
    let sign = p.menu_shade_sign;
    let base_bg = if cfg.prefer_dark {
        Color::rgba(75, 75, 75, 0.8)
    } else {
        Color::rgba(200, 200, 200, 0.8)
    };
    let base_fg = if cfg.prefer_dark { Color::grey(255) } else { Color::grey(25) };

    let _ = write!(
        out,
        "
.workspace-switcher, .resize-popup, .osd-monitor-label {{
    box-shadow: 0 5px 10px 0 {} !important;
    background-color: {};
    color: {};
    border-color: {} !important;
}}
.overview-tile, .app-well-app .overview-icon, .grid-search-result .overview-icon {{
    color: {smhfg};
    border-radius: {}px;
}}
.overview-tile:hover, .app-well-app:hover .overview-icon, .grid-search-result:hover .overview-icon {{
    background-color: {};
    transition-duration: 100ms;
}}
.overview-tile:focus, .overview-tile:selected {{
    background-color: {};
    transition-duration: 100ms;
}}
.app-well-app.app-folder .overview-icon, .overview-tile.app-folder {{
    background-color: {};
}}
.app-folder-dialog {{
    background-color: {} !important;
    color: {} !important;
}}
.app-well-app-running-dot, .app-grid-running-dot {{
    background-color: {} !important;
    border: 2px solid {} !important;
}}
.page-indicator .page-indicator-icon {{
    color: transparent;
    background-color: {} !important;
}}
.switcher-list {{
    {}
}}
.switcher-list .item-box {{
    color: {} !important;
    background-color: transparent;
}}
.switcher-list .item-box:hover, .switcher-list .item-box:selected {{
    background-color: {} !important;
    color: {} !important;
}}
.switcher-arrow {{
    border-color: {} !important;
    color: {} !important;
}}
.search-section-content {{
    background-color: {} !important;
    color: {} !important;
    border-radius: {}px;
    border: 2px solid transparent;
}}
.search-provider-icon:hover, .search-provider-icon:focus,
.list-search-result:hover, .list-search-result:focus {{
    background-color: {} !important;
}}
.search-statustext {{
    color: {} !important;
}}
.list-search-result-title {{
    color: {} !important;
}}
.list-search-result-description {{
    color: {} !important;
}}
StEntry .search-entry {{
    border-color: {} !important;
}}
StEntry .search-entry:hover, StEntry .search-entry:focus {{
    border-color: {} !important;
}}
.window-caption {{
    box-shadow: 0 2px 0 0 {} !important;
    background-color: {} !important;
    color: {} !important;
    border-color: transparent !important;
}}
.window-close {{
    background-color: {} !important;
    color: {} !important;
}}
.ws-switcher-indicator {{
    background-color: {} !important;
}}
.ws-switcher-indicator:active {{
    background-color: {} !important;
}}
",
        p.menu_shadow,
        p.menu_bg,
        p.menu_fg,
        p.menu_border,
        cfg.menu.menu_radius,
        p.submenu_hover_bg.with_alpha(0.95 * cfg.menu.bg_alpha),
        p.submenu_hover_bg,
        smfg.with_alpha(0.08),
        p.submenu_bg,
        smfg.with_alpha(1.0),
        smfg.with_alpha(mfg_a),
        smfg.with_alpha(mfg_a),
        smfg.with_alpha(1.0),
        c.menu_content_style(),
        p.menu_fg.with_alpha(1.0),
        p.menu_hover_bg,
        p.menu_hfg,
        p.menu_fg.with_alpha(0.8),
        p.menu_fg.with_alpha(0.8),
        p.menu_bg,
        p.menu_fg.with_alpha(1.0),
        cfg.menu.menu_radius,
        p.menu_hover_bg,
        smfg.with_alpha(1.0),
        p.menu_fg.with_alpha(1.0),
        p.menu_fg.with_alpha(0.65),
        smfg.with_alpha(0.7),
        p.accent,
        p.menu_shadow.with_alpha(0.25),
        p.tooltip_bg.with_alpha(0.85),
        p.menu_fg.with_alpha(mfg_a),
        p.tooltip_bg.with_alpha(0.8),
        p.menu_fg.with_alpha(1.0),
        p.menu_fg.with_alpha(0.65),
        p.menu_fg.with_alpha(1.0),
    );

    // Modal dialogs.
    let _ = write!(
        out,
        "
.modal-dialog {{
    {}
}}
.dialog-list .dialog-list-box {{
    color: {} !important;
    background-color: {} !important;
}}
.dialog-list .dialog-list-box .dialog-list-item:hover {{
    background-color: {} !important;
}}
.modal-dialog-linked-button {{
    color: {} !important;
    background-color: {} !important;
    border: 2px solid transparent;
}}
.modal-dialog-linked-button:hover, .modal-dialog-linked-button:focus {{
    color: {smhfg} !important;
    background-color: {} !important;
    box-shadow: none !important;
}}
.caps-lock-warning-label, .prompt-dialog-error-label,
.end-session-dialog .end-session-dialog-battery-warning {{
    color: {} !important;
    background-color: rgba(25,25,25,0.6) !important;
    border-radius: 5px;
    padding: 4px;
    margin: 2px;
}}
StEntry {{
    color: {base_fg} !important;
    background-color: {base_bg} !important;
}}
StLabel.hint-text {{
    color: {} !important;
}}
",
        c.menu_content_style(),
        smfg.with_alpha(1.0),
        p.submenu_bg,
        p.submenu_hover_bg,
        smfg.with_alpha(1.0),
        p.submenu_bg,
        p.submenu_hover_bg,
        p.warning,
        base_fg.with_alpha(0.7),
    );

    // On-screen keyboard: shaded variants of the menu surfaces.
    let _ = write!(
        out,
        "
#keyboard {{
    background-color: {} !important;
}}
.keyboard-key {{
    color: {} !important;
    background-color: {} !important;
}}
.keyboard-key:focus, .keyboard-key:hover {{
    color: {smhfg} !important;
    background-color: {} !important;
}}
.keyboard-key:active, .keyboard-key:checked, .keyboard-key.default-key {{
    color: {} !important;
    background-color: {} !important;
}}
.keyboard-key:grayed {{
    background-color: rgb(125,125,125) !important;
}}
.keyboard-key.shift-key-uppercase:checked, .keyboard-key.shift-key-uppercase:active {{
    color: {smhfg} !important;
    background-color: {} !important;
}}
.keyboard-subkeys {{
    color: {} !important;
    -arrow-background-color: {} !important;
}}
#Toolbar .lg-toolbar-button {{
    color: {} !important;
    background-color: {} !important;
}}
#Toolbar .lg-toolbar-button:hover, #Toolbar .lg-toolbar-button:focus {{
    color: {smhfg} !important;
    background-color: {} !important;
}}
#Toolbar .lg-toolbar-button:active, #Toolbar .lg-toolbar-button:checked {{
    color: {} !important;
    background-color: {} !important;
}}
#overviewGroup {{
    background-color: {} !important;
}}
.workspace-animation {{
    background-color: {};
}}
.tile-preview {{
    background-color: {} !important;
    border: 1px solid {} !important;
}}
.osd-window, .pad-osd-window {{
    color: {} !important;
    background-color: {} !important;
}}
.screenshot-ui-panel {{
    {}
}}
.screenshot-ui-type-button, .screenshot-ui-close-button {{
    color: {} !important;
    background-color: {} !important;
}}
.screenshot-ui-type-button:hover, .screenshot-ui-type-button:focus,
.screenshot-ui-close-button:hover, .screenshot-ui-close-button:focus {{
    color: {smhfg} !important;
    background-color: {} !important;
}}
.screenshot-ui-capture-button:hover, .screenshot-ui-capture-button:focus {{
    border-color: {} !important;
}}
.screenshot-ui-capture-button:cast .screenshot-ui-capture-button-circle {{
    background-color: {} !important;
}}
.screenshot-ui-tooltip {{
    box-shadow: 0 2px 0 0 {} !important;
    background-color: {};
    color: {};
    border-color: transparent !important;
}}
.select-area-rubberband {{
    background-color: {} !important;
    border: 1px solid {} !important;
}}
",
        p.menu_bg.with_alpha(0.9 * cfg.menu.bg_alpha).shade(0.2 * sign),
        smfg.with_alpha(1.0),
        p.submenu_bg.shade(-0.2 * sign),
        p.submenu_hover_bg,
        smfg.with_alpha(1.0),
        p.submenu_bg,
        p.submenu_hover_bg,
        smfg.with_alpha(1.0),
        p.menu_bg.with_alpha(0.9 * cfg.menu.bg_alpha).shade(0.2 * sign),
        smfg.with_alpha(1.0),
        p.submenu_bg,
        p.submenu_hover_bg,
        p.accent_fg,
        p.accent,
        p.submenu_bg.with_alpha(1.0),
        p.submenu_bg,
        p.menu_bg.with_alpha(0.6),
        p.menu_bg.with_alpha(1.0),
        smfg.with_alpha(1.0),
        p.submenu_bg,
        c.menu_content_style(),
        smfg.with_alpha(1.0),
        p.submenu_bg,
        p.submenu_hover_bg,
        p.accent,
        p.destructive,
        p.menu_shadow.with_alpha(0.25),
        p.tooltip_bg.with_alpha(0.85),
        p.menu_fg.with_alpha(1.0),
        p.menu_fg.with_alpha(0.6),
        p.menu_fg.with_alpha(1.0),
    );
}

fn dash_block(c: &Ctx<'_>, out: &mut String) {
    let p = c.pal;
    let cfg = c.cfg;
    let enclosed = c.enclosed();

    // The dock borrows one of three palettes.
    let (bg, fg, border, shadow, highlight) = match cfg.dash.style {
        DashDockStyle::Menu => (
            p.menu_bg,
            p.menu_fg,
            p.menu_border,
            p.menu_shadow,
            p.menu_hover_bg,
        ),
        DashDockStyle::Bar => (
            if enclosed { p.island } else { p.bar_bg },
            p.bar_fg,
            p.border,
            p.menu_shadow,
            if enclosed { p.island_hover_bg } else { p.bar_hover_bg },
        ),
        DashDockStyle::Custom | DashDockStyle::Default => (
            p.dash_bg,
            p.dash_custom_fg,
            p.menu_border,
            p.menu_shadow,
            p.dash_custom_hover_bg,
        ),
    };
    let border = if cfg.dash.border { border.to_string() } else { "transparent".to_string() };
    let shadow = if cfg.dash.shadow { shadow.to_string() } else { "transparent".to_string() };
    let dot = cfg.dash.icon_size / 15.0;

    let _ = write!(
        out,
        "
.dash-background {{
    background-color: {bg} !important;
    color: {fg} !important;
    border: 1px solid {border} !important;
    box-shadow: 0 5px 10px 0 {shadow} !important;
    border-radius: {}px !important;
}}
.dash-separator {{
    background-color: {border} !important;
    box-shadow: 1px 1px 0px rgba(25,25,25,0.1) !important;
}}
.dash-item-container .app-well-app .overview-icon, .dash-item-container .overview-tile .overview-icon,
.dash-item-container .show-apps .overview-icon {{
    color: {fg} !important;
    background-color: transparent !important;
}}
.dash-item-container .app-well-app:active .overview-icon,
.dash-item-container .overview-tile:active .overview-icon,
.dash-item-container .show-apps:active .overview-icon {{
    color: {} !important;
    background-color: {} !important;
}}
.dash-item-container .app-well-app:hover .overview-icon, .dash-item-container .app-well-app.focused .overview-icon,
.dash-item-container .overview-tile:hover .overview-icon, .dash-item-container .overview-tile.focused .overview-icon,
.dash-item-container .show-apps:hover .overview-icon, .dash-item-container .show-apps.focused .overview-icon {{
    background-color: {highlight} !important;
}}
.dash-label {{
    background-color: {} !important;
    color: {} !important;
    box-shadow: 0 2px 0 0 {} !important;
    border-color: transparent !important;
}}
#dash StIcon {{
    height: {}px !important;
    width: {}px !important;
}}
#dash .app-well-app-running-dot, #dash .app-grid-running-dot, #dash .show-apps-running-dot {{
    height: {dot}px;
    width: {dot}px;
    border-radius: {dot}px;
    background-color: {fg} !important;
    border: 2px solid {fg} !important;
}}
#dash StWidget.focused .app-well-app-running-dot, #dash StWidget.focused .app-grid-running-dot {{
    background-color: {} !important;
    border-color: {} !important;
    box-shadow: 0 0 2px rgba(225,225,225,0.5) !important;
}}
",
        cfg.dash.radius,
        p.accent_fg,
        p.accent,
        p.tooltip_bg.with_alpha(0.9),
        p.menu_fg.with_alpha(1.0),
        p.menu_shadow.with_alpha(0.25),
        cfg.dash.icon_size,
        cfg.dash.icon_size,
        p.accent.with_alpha(1.0),
        p.accent.with_alpha(1.0),
    );
}

fn notifications_block(c: &Ctx<'_>, out: &mut String) {
    let p = c.pal;
    let cfg = c.cfg;
    let smfg = p.submenu_fg;
    let _ = write!(
        out,
        "
.notification-banner {{
    color: {} !important;
    background-color: {} !important;
    border-radius: {}px;
}}
.notification-button {{
    color: {} !important;
    background-color: {} !important;
}}
.notification-button:hover, .notification-button:focus, .notification-button:selected {{
    color: {} !important;
    background-color: {} !important;
    border-color: transparent !important;
}}
.summary-source-counter {{
    color: {} !important;
    background-color: {} !important;
}}
",
        smfg.with_alpha(cfg.menu.fg_alpha),
        p.submenu_bg,
        cfg.menu.notif_radius,
        smfg.with_alpha(1.0),
        p.submenu_bg,
        p.submenu_hfg,
        p.submenu_hover_bg,
        smfg.with_alpha(1.0),
        p.submenu_bg,
    );
}

// ─── Tests ───────────────────────────────────────────────────────────────────
