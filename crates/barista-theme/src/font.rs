//! Font descriptor parsing.
//!
//! The font seed is a free-form descriptor string in the host's
//! convention: an optional family, optional style/stretch/weight keywords,
//! and an optional trailing point size — "Fira Sans Semi-Bold Italic 11".
//! Parsing is total: anything unrecognized stays part of the family, an
//! empty string yields no family block, and the weight defaults to 400.

use std::sync::OnceLock;

use regex::Regex;

/// Default weight when the descriptor names none.
pub const DEFAULT_WEIGHT: u16 = 400;

/// A parsed font descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDesc {
    /// Font family; `None` when the descriptor is empty.
    pub family: Option<String>,
    /// Point size; `None` when the descriptor carries no trailing number.
    pub size_pt: Option<f64>,
    pub style: &'static str,
    pub stretch: &'static str,
    pub weight: u16,
}

impl Default for FontDesc {
    fn default() -> Self {
        Self {
            family: None,
            size_pt: None,
            style: "normal",
            stretch: "normal",
            weight: DEFAULT_WEIGHT,
        }
    }
}

fn size_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(?<rest>.*?)\s*(?<size>\d+(?:\.\d+)?)$").unwrap())
}

/// Weight keywords, matched case-insensitively against trailing tokens.
/// Hyphenated forms arrive as single tokens ("Semi-Bold") or pairs
/// ("Semi Bold") — both spellings are listed.
const WEIGHTS: &[(&str, u16)] = &[
    ("thin", 100),
    ("extra-light", 200),
    ("extralight", 200),
    ("ultra-light", 200),
    ("light", 300),
    ("regular", 400),
    ("medium", 500),
    ("semi-bold", 600),
    ("semibold", 600),
    ("demi-bold", 600),
    ("demibold", 600),
    ("extra-bold", 800),
    ("extrabold", 800),
    ("ultra-bold", 800),
    ("bold", 700),
    ("black", 900),
    ("heavy", 900),
];

const STYLES: &[(&str, &str)] = &[("italic", "italic"), ("oblique", "oblique")];

const STRETCHES: &[(&str, &str)] = &[
    ("ultra-condensed", "ultra-condensed"),
    ("extra-condensed", "extra-condensed"),
    ("semi-condensed", "semi-condensed"),
    ("condensed", "condensed"),
    ("ultra-expanded", "ultra-expanded"),
    ("extra-expanded", "extra-expanded"),
    ("semi-expanded", "semi-expanded"),
    ("expanded", "expanded"),
];

impl FontDesc {
    /// Parse a descriptor string. Empty input returns the default.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Self::default();
        }

        let mut desc = Self::default();

        // Trailing number is the point size.
        let rest = match size_re().captures(input) {
            Some(caps) => {
                desc.size_pt = caps["size"].parse().ok();
                caps["rest"].to_string()
            }
            None => input.to_string(),
        };

        // Strip style/stretch/weight keywords off the end; everything
        // before them is the family.
        let mut tokens: Vec<&str> = rest.split_whitespace().collect();
        loop {
            let Some(last) = tokens.last() else { break };
            let lower = last.to_lowercase();
            if let Some(&(_, w)) = WEIGHTS.iter().find(|(k, _)| *k == lower) {
                desc.weight = w;
            } else if let Some(&(_, s)) = STYLES.iter().find(|(k, _)| *k == lower) {
                desc.style = s;
            } else if let Some(&(_, s)) = STRETCHES.iter().find(|(k, _)| *k == lower) {
                desc.stretch = s;
            } else {
                break;
            }
            tokens.pop();
        }

        if !tokens.is_empty() {
            desc.family = Some(tokens.join(" "));
        }
        desc
    }

    /// The weight to emit: an auto-generated theme reads better semi-bold,
    /// so weights under 500 are bumped when `autotheme` is set.
    #[must_use]
    pub const fn effective_weight(&self, autotheme: bool) -> u16 {
        if autotheme && self.weight < 500 {
            500
        } else {
            self.weight
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_defaults() {
        let d = FontDesc::parse("");
        assert_eq!(d, FontDesc::default());
        assert_eq!(d.weight, 400);
    }

    #[test]
    fn family_and_size() {
        let d = FontDesc::parse("Cantarell 11");
        assert_eq!(d.family.as_deref(), Some("Cantarell"));
        assert_eq!(d.size_pt, Some(11.0));
        assert_eq!(d.weight, 400);
    }

    #[test]
    fn multi_word_family() {
        let d = FontDesc::parse("Fira Sans 10.5");
        assert_eq!(d.family.as_deref(), Some("Fira Sans"));
        assert_eq!(d.size_pt, Some(10.5));
    }

    #[test]
    fn weight_and_style_keywords() {
        let d = FontDesc::parse("Fira Sans Semi-Bold Italic 11");
        assert_eq!(d.family.as_deref(), Some("Fira Sans"));
        assert_eq!(d.weight, 600);
        assert_eq!(d.style, "italic");
    }

    #[test]
    fn bold_does_not_eat_family() {
        let d = FontDesc::parse("Bold Type Co 12");
        // "Co" is not a keyword, so the whole thing stays the family.
        assert_eq!(d.family.as_deref(), Some("Bold Type Co"));
        assert_eq!(d.weight, 400);
    }

    #[test]
    fn stretch_keyword() {
        let d = FontDesc::parse("Roboto Condensed Bold 9");
        assert_eq!(d.family.as_deref(), Some("Roboto"));
        assert_eq!(d.stretch, "condensed");
        assert_eq!(d.weight, 700);
    }

    #[test]
    fn size_only() {
        let d = FontDesc::parse("12");
        assert_eq!(d.family, None);
        assert_eq!(d.size_pt, Some(12.0));
    }

    #[test]
    fn autotheme_bumps_light_weights() {
        let light = FontDesc { weight: 300, ..FontDesc::default() };
        assert_eq!(light.effective_weight(true), 500);
        assert_eq!(light.effective_weight(false), 300);
        let bold = FontDesc { weight: 700, ..FontDesc::default() };
        assert_eq!(bold.effective_weight(true), 700);
    }
}
