//! Secondary (toolkit-level) stylesheet composition.
//!
//! A reduced rule set over the same derived palette: named-color
//! declarations plus window chrome, headerbar/sidebar/card tinting and a
//! few optional blocks. Written only when the toolkit apply flag is on;
//! see [`crate::artifact`] for the backup/restore dance around the
//! external file it replaces.

use std::fmt::Write;

use barista_color::fmt_alpha;
use barista_theme::config::ThemeConfig;
use barista_theme::gtk::GtkPalette;
use barista_theme::palette::DerivedPalette;

/// Identifies engine-authored toolkit stylesheets; checked by the
/// artifact state machine before it deletes or overwrites anything.
pub const GTK_SENTINEL: &str = "/*** Barista GTK CSS ***/";

/// Render the toolkit stylesheet.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn compose(cfg: &ThemeConfig, pal: &DerivedPalette, gtk: &GtkPalette) -> String {
    let mut out = String::with_capacity(8 * 1024);
    let _ = writeln!(out, "{GTK_SENTINEL}\n/* Autogenerated by barista. Do not edit. */\n");

    let acc = gtk.accent;
    let _ = write!(
        out,
        "@define-color accent_color rgba({},{},{},1.0);
@define-color accent_bg_color rgba({},{},{},0.85);
@define-color accent_fg_color rgba({},{},{},0.9);

link {{
    color: @accent_bg_color;
}}
link:hover {{
    color: @accent_color;
}}

/* Toggle switch geometry */
switch {{
    margin: 2px 0;
    padding: 0 2px;
}}
switch image {{
    margin: -8px;
}}
switch > slider {{
    min-width: 20px;
    min-height: 20px;
    margin: -3px 0px -3px -2px;
}}
switch:checked > slider {{
    margin: -3px -2px -3px 0px;
}}

/* Window border */
window,
decoration,
decoration-overlay {{
    border: {}px solid {};
}}
window:backdrop,
decoration:backdrop,
decoration-overlay:backdrop {{
    border: {}px solid {};
}}
window.maximized,
window.maximized > decoration,
tooltip > decoration {{
    border: none;
}}
",
        acc.r,
        acc.g,
        acc.b,
        acc.r,
        acc.g,
        acc.b,
        gtk.accent_fg.r,
        gtk.accent_fg.g,
        gtk.accent_fg.b,
        cfg.gtk.winb_width,
        gtk.window_border,
        cfg.gtk.winb_width,
        gtk.window_border_backdrop,
    );

    if cfg.gtk.headerbar_hint > 0 {
        let h = &gtk.headerbar;
        let _ = write!(
            out,
            "
@define-color headerbar_bg_color {};
@define-color headerbar_backdrop_color {};
@define-color headerbar_fg_color {};

headerbar,
.top-bar,
.titlebar {{
    background-color: @headerbar_bg_color;
    background-image: none;
}}
headerbar:backdrop,
.top-bar:backdrop,
.titlebar:backdrop {{
    background-color: @headerbar_backdrop_color;
}}
",
            h.bg,
            h.backdrop,
            h.fg.with_alpha(0.85),
        );
    }

    if cfg.gtk.sidebar_hint > 0 {
        let s = &gtk.sidebar;
        let a = gtk.sidebar_alpha;
        let _ = write!(
            out,
            "
@define-color sidebar_bg_color {};
@define-color sidebar_backdrop_color {};
@define-color sidebar_fg_color {};
@define-color secondary_sidebar_bg_color {};
@define-color secondary_sidebar_backdrop_color {};
@define-color secondary_sidebar_fg_color {};

.sidebar,
.navigation-sidebar,
.sidebar-pane {{
    background-color: @sidebar_bg_color;
}}
.sidebar:backdrop,
.navigation-sidebar:backdrop,
.sidebar-pane:backdrop {{
    background-color: @sidebar_backdrop_color;
}}
",
            s.bg.with_alpha(a),
            s.backdrop.with_alpha(a),
            s.fg.with_alpha(0.9),
            s.bg.with_alpha(a),
            s.backdrop.with_alpha(a),
            s.fg.with_alpha(0.9),
        );
    }

    if cfg.gtk.card_hint > 0 {
        let c = &gtk.card;
        let _ = write!(
            out,
            "
@define-color card_bg_color {};
@define-color card_backdrop_color {};
@define-color card_fg_color {};
@define-color dialog_bg_color {};
@define-color dialog_backdrop_color {};
@define-color dialog_fg_color {};
",
            c.bg,
            c.backdrop,
            c.fg.with_alpha(0.9),
            c.bg,
            c.backdrop,
            c.fg.with_alpha(0.9),
        );
    }

    if cfg.gtk.popover {
        let _ = write!(
            out,
            "
@define-color popover_bg_color {};
@define-color popover_fg_color {};
popover > contents {{
    box-shadow: 0 0px 3px 0px {};
    border: 1px solid {};
    background-color: {};
    color: rgba({},{},{},{});
    border-radius: {}px;
}}
",
            gtk.popover_bg,
            gtk.popover_fg.with_alpha(0.9),
            pal.menu_shadow.with_alpha(0.5 * cfg.menu.shadow_alpha),
            pal.menu_border.with_alpha(0.5 * cfg.menu.border_alpha),
            pal.menu_bg,
            pal.menu_fg.r,
            pal.menu_fg.g,
            pal.menu_fg.b,
            fmt_alpha(0.9 * cfg.menu.fg_alpha),
            pal.popover_radius,
        );
    }

    if cfg.gtk.traffic_light {
        out.push_str(
            "
button.titlebutton,
windowcontrols > button {
    color: transparent;
    box-shadow: inset 0 0 0 1px rgba(0, 0, 0, 0.15);
    min-width: 16px;
    min-height: 16px;
    border-radius: 100%;
    padding: 0;
    margin: 0 2px;
}
button.titlebutton:backdrop,
windowcontrols > button:backdrop {
    opacity: 0.5;
}
button.titlebutton:hover,
windowcontrols > button:hover {
    color: #fff;
}
button.titlebutton.close,
windowcontrols > button.close {
    background-color: #ff605c;
}
button.titlebutton.close:hover,
windowcontrols > button.close:hover {
    background-color: shade(#ff605c,0.95);
}
button.titlebutton.maximize,
windowcontrols > button.maximize {
    background-color: #00ca4e;
}
button.titlebutton.maximize:hover,
windowcontrols > button.maximize:hover {
    background-color: shade(#00ca4e,0.95);
}
button.titlebutton.minimize,
windowcontrols > button.minimize {
    background-color: #ffbd44;
}
button.titlebutton.minimize:hover,
windowcontrols > button.minimize:hover {
    background-color: shade(#ffbd44,0.95);
}
button.titlebutton:backdrop,
windowcontrols > button.close:backdrop,
windowcontrols > button.maximize:backdrop,
windowcontrols > button.minimize:backdrop {
    background-color: #c0bfc0;
}
",
        );
    }

    if cfg.gtk.sidebar_transparency {
        out.push_str(
            "
window, window.background {
    background-color: alpha(@window_bg_color, 0.9);
}
.content-pane, .content-pane.view,
.boxed-list {
    background-color: alpha(@view_bg_color, 1.0);
}
",
        );
    }

    out
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use barista_theme::config::Seed;

    fn render(f: impl FnOnce(&mut ThemeConfig)) -> String {
        let mut cfg = ThemeConfig::default();
        f(&mut cfg);
        let pal = DerivedPalette::derive(&cfg);
        let gtk = GtkPalette::derive(&cfg);
        compose(&cfg, &pal, &gtk)
    }

    #[test]
    fn sentinel_on_first_line() {
        let css = render(|_| {});
        assert!(css.starts_with(GTK_SENTINEL));
    }

    #[test]
    fn accent_defines_always_present() {
        let css = render(|c| {
            c.menu.accent_color = Seed::from([1.0, 0.0, 0.0]);
        });
        assert!(css.contains("@define-color accent_color rgba(255,0,0,1.0);"));
        assert!(css.contains("@define-color accent_bg_color rgba(255,0,0,0.85);"));
    }

    #[test]
    fn hint_blocks_gated_on_nonzero_hints() {
        let plain = render(|_| {});
        assert!(!plain.contains("headerbar_bg_color"));
        assert!(!plain.contains("sidebar_bg_color"));
        assert!(!plain.contains("card_bg_color"));

        let tinted = render(|c| {
            c.gtk.headerbar_hint = 20;
            c.gtk.sidebar_hint = 10;
            c.gtk.card_hint = 5;
        });
        assert!(tinted.contains("headerbar_bg_color"));
        assert!(tinted.contains("sidebar_bg_color"));
        assert!(tinted.contains("dialog_bg_color"));
    }

    #[test]
    fn headerbar_hint_blends_accent_into_base() {
        // Dark scheme base 42, accent red, 50% hint → r = 149, g/b = 21.
        let css = render(|c| {
            c.prefer_dark = true;
            c.menu.accent_color = Seed::from([1.0, 0.0, 0.0]);
            c.gtk.headerbar_hint = 50;
        });
        assert!(css.contains("@define-color headerbar_bg_color rgba(149,21,21,1);"));
    }

    #[test]
    fn optional_blocks() {
        let css = render(|c| {
            c.gtk.popover = true;
            c.gtk.traffic_light = true;
            c.gtk.sidebar_transparency = true;
        });
        assert!(css.contains("popover > contents"));
        assert!(css.contains("button.titlebutton.close"));
        assert!(css.contains("alpha(@window_bg_color, 0.9)"));
    }

    #[test]
    fn window_border_uses_backdrop_blend() {
        let css = render(|c| {
            c.prefer_dark = true;
            c.gtk.winb_color = Seed::from([1.0, 1.0, 1.0]);
            c.gtk.winb_alpha = 0.5;
            c.gtk.winb_width = 2.0;
        });
        assert!(css.contains("border: 2px solid rgba(255,255,255,0.5);"));
        assert!(css.contains("border: 2px solid rgba(170,170,170,0.5);"));
    }
}
