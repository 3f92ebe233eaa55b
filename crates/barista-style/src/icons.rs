//! Parametric SVG icon synthesis.
//!
//! A small set of fixed vector templates with exactly one placeholder
//! token per color parameter: the toggle-switch "on" state, the checkbox
//! states, and the calendar event dot. High-contrast mode selects an
//! alternate template (an added interior mark) — never alternate colors.
//!
//! Regeneration is gated per icon on whether the specific color backing
//! it changed since the last successful pass, so unrelated setting
//! changes cause no icon churn. The memo lives on the engine instance
//! and resets explicitly on configuration reload.

use barista_theme::palette::DerivedPalette;

use crate::sink::IconKind;

const FILL: &str = "#FILL#";
const STROKE: &str = "#STROKE#";
const HC_MARK: &str = "#HCMARK#";

const TOGGLE_ON_TEMPLATE: &str = r##"<svg viewBox="0 0 44 26" xmlns="http://www.w3.org/2000/svg">
    <g transform="translate(0 -291.18)">
        <rect y="295.18" width="44" height="18" rx="9" ry="9" style="fill:#FILL#;stroke:none;stroke-width:1;marker:none"/>
        <rect x="22" y="293.18" width="22" height="22" rx="11" ry="11" fill="#f8f7f7"/>
    </g>
    #HCMARK#
</svg>
"##;

/// Interior bar mark for the high-contrast toggle.
const TOGGLE_HC_MARK: &str = r##"<path style="fill:#f8f7f7;fill-opacity:1;stroke:none;stroke-width:2;stroke-linejoin:round;stroke-dashoffset:2" d="M14 8v10h-2V8Z"/>"##;

const CHECKBOX_ON_TEMPLATE: &str = r##"<svg width="24" height="24" xmlns="http://www.w3.org/2000/svg">
    <rect x="1.5" y="1.5" width="21" height="21" rx="3" fill="#FILL#" stroke="#STROKE#" stroke-linejoin="round" style="stroke-width:1"/>
    <path d="m20.16 7.527-1.253-1.414-.118.104-8.478 7.426-4.97-4.263-1.503 1.699 6.474 6.811z" fill="#fff" fill-rule="evenodd"/>
</svg>
"##;

const CHECKBOX_OFF_TEMPLATE: &str = r##"<svg width="24" height="24" xmlns="http://www.w3.org/2000/svg">
    <rect x="1.5" y="1.5" width="21" height="21" rx="3" fill="#FILL#" stroke="#STROKE#" stroke-linejoin="round"/>
</svg>
"##;

const CAL_EVENT_TEMPLATE: &str = r##"<svg width="32" height="32" xmlns="http://www.w3.org/2000/svg">
    <circle style="fill:#FILL#;fill-opacity:.858;fill-rule:nonzero;stroke:none;color-interpolation:sRGB;paint-order:normal" cx="16" cy="28" r="2"/>
</svg>
"##;

/// Unchecked checkbox fill is a fixed neutral grey.
const CHECKBOX_OFF_FILL: &str = "#aaa";

/// Render one icon document from the palette.
#[must_use]
pub fn render(kind: IconKind, pal: &DerivedPalette) -> String {
    match kind {
        IconKind::ToggleOn => TOGGLE_ON_TEMPLATE
            .replace(FILL, &pal.accent_hex)
            .replace(HC_MARK, ""),
        IconKind::ToggleOnHc => TOGGLE_ON_TEMPLATE
            .replace(FILL, &pal.accent_hex)
            .replace(HC_MARK, TOGGLE_HC_MARK),
        IconKind::CheckboxOn => CHECKBOX_ON_TEMPLATE
            .replace(FILL, &pal.accent_hex)
            .replace(STROKE, &pal.accent_hex),
        IconKind::CheckboxOnFocused => CHECKBOX_ON_TEMPLATE
            .replace(FILL, &pal.accent_hex)
            .replace(STROKE, &pal.highlight_hex),
        IconKind::CheckboxOffFocused => CHECKBOX_OFF_TEMPLATE
            .replace(FILL, CHECKBOX_OFF_FILL)
            .replace(STROKE, &pal.highlight_hex),
        IconKind::CalendarEvent => CAL_EVENT_TEMPLATE.replace(FILL, &pal.submenu_fg_hex),
    }
}

/// Per-color memo of the last icons written.
///
/// `None` means "never written" — the first pass regenerates everything.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IconMemo {
    accent_hex: Option<String>,
    highlight_hex: Option<String>,
    submenu_fg_hex: Option<String>,
}

impl IconMemo {
    /// Which icons are due, given the freshly derived palette.
    #[must_use]
    pub fn due(&self, pal: &DerivedPalette) -> Vec<IconKind> {
        let mut due = Vec::new();
        if self.accent_hex.as_deref() != Some(&pal.accent_hex) {
            due.extend([
                IconKind::ToggleOn,
                IconKind::ToggleOnHc,
                IconKind::CheckboxOn,
                IconKind::CheckboxOnFocused,
            ]);
        }
        if self.highlight_hex.as_deref() != Some(&pal.highlight_hex) {
            if !due.contains(&IconKind::CheckboxOnFocused) {
                due.push(IconKind::CheckboxOnFocused);
            }
            due.push(IconKind::CheckboxOffFocused);
        }
        if self.submenu_fg_hex.as_deref() != Some(&pal.submenu_fg_hex) {
            due.push(IconKind::CalendarEvent);
        }
        due
    }

    /// Record a successful pass. Called once per apply, after every due
    /// icon was written (the write path is serialized, so this
    /// read-modify-write is safe).
    pub fn commit(&mut self, pal: &DerivedPalette) {
        self.accent_hex = Some(pal.accent_hex.clone());
        self.highlight_hex = Some(pal.highlight_hex.clone());
        self.submenu_fg_hex = Some(pal.submenu_fg_hex.clone());
    }

    /// Forget everything; the next pass regenerates all icons.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use barista_theme::config::{Seed, ThemeConfig};

    fn palette(accent: [f64; 3], highlight: [f64; 3]) -> DerivedPalette {
        let mut cfg = ThemeConfig::default();
        cfg.menu.accent_color = Seed::from(accent);
        cfg.menu.highlight_color = Seed::from(highlight);
        DerivedPalette::derive(&cfg)
    }

    #[test]
    fn placeholders_are_fully_substituted() {
        let pal = palette([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        for kind in IconKind::ALL {
            let svg = render(kind, &pal);
            assert!(!svg.contains("#FILL#"), "{kind:?} kept a fill token");
            assert!(!svg.contains("#STROKE#"), "{kind:?} kept a stroke token");
            assert!(!svg.contains("#HCMARK#"), "{kind:?} kept an hc token");
        }
    }

    #[test]
    fn toggle_uses_accent_with_alpha() {
        let pal = palette([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let svg = render(IconKind::ToggleOn, &pal);
        assert!(svg.contains(&pal.accent_hex));
    }

    #[test]
    fn high_contrast_adds_mark_not_colors() {
        let pal = palette([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let plain = render(IconKind::ToggleOn, &pal);
        let hc = render(IconKind::ToggleOnHc, &pal);
        assert!(!plain.contains("M14 8v10"));
        assert!(hc.contains("M14 8v10"));
        assert!(hc.contains(&pal.accent_hex), "same accent fill in hc");
    }

    #[test]
    fn off_focused_keeps_neutral_fill() {
        let pal = palette([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let svg = render(IconKind::CheckboxOffFocused, &pal);
        assert!(svg.contains("fill=\"#aaa\""));
        assert!(svg.contains(&pal.highlight_hex));
    }

    #[test]
    fn first_pass_regenerates_everything() {
        let memo = IconMemo::default();
        let pal = palette([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert_eq!(memo.due(&pal).len(), IconKind::ALL.len());
    }

    #[test]
    fn committed_pass_is_quiescent() {
        let mut memo = IconMemo::default();
        let pal = palette([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        memo.commit(&pal);
        assert!(memo.due(&pal).is_empty());
    }

    #[test]
    fn accent_change_regenerates_exactly_accent_backed_icons() {
        let mut memo = IconMemo::default();
        memo.commit(&palette([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]));
        let due = memo.due(&palette([0.0, 0.0, 1.0], [0.0, 1.0, 0.0]));
        assert_eq!(
            due,
            vec![
                IconKind::ToggleOn,
                IconKind::ToggleOnHc,
                IconKind::CheckboxOn,
                IconKind::CheckboxOnFocused,
            ]
        );
    }

    #[test]
    fn highlight_change_regenerates_focused_checkboxes() {
        let mut memo = IconMemo::default();
        memo.commit(&palette([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]));
        let due = memo.due(&palette([1.0, 0.0, 0.0], [1.0, 1.0, 0.0]));
        assert_eq!(
            due,
            vec![IconKind::CheckboxOnFocused, IconKind::CheckboxOffFocused]
        );
    }

    #[test]
    fn reset_forces_full_regeneration() {
        let mut memo = IconMemo::default();
        let pal = palette([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        memo.commit(&pal);
        memo.reset();
        assert_eq!(memo.due(&pal).len(), IconKind::ALL.len());
    }
}
