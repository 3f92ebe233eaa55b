//! The apply pass: derivation → composition → artifact writes → reload.
//!
//! One [`Engine`] owns the sink, the icon memo and the reload toggle.
//! Each call to [`Engine::apply`] is a complete pass over one immutable
//! configuration; nothing persists between passes except the memo and
//! the toggle. Write failures are isolated per artifact — a failed icon
//! never blocks the stylesheet and vice versa — and reported rather than
//! propagated, since the next configuration change re-derives and
//! re-writes everything anyway.

use std::io;

use barista_theme::config::ThemeConfig;
use barista_theme::gtk::GtkPalette;
use barista_theme::palette::DerivedPalette;
use thiserror::Error;

use crate::icons::{self, IconMemo};
use crate::sink::{Artifact, GtkDir, IconKind, OutputSink};
use crate::{artifact, gtkcss, shell};

/// A single artifact that failed to persist.
#[derive(Debug, Error)]
#[error("failed to write {artifact}: {source}")]
pub struct ArtifactFailure {
    pub artifact: Artifact,
    #[source]
    pub source: io::Error,
}

/// What one apply pass actually did.
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// The pass was short-circuited by a suppression flag.
    pub skipped: bool,
    pub stylesheet_written: bool,
    pub icons_written: Vec<IconKind>,
    pub gtk_written: bool,
    pub failures: Vec<ArtifactFailure>,
}

impl ApplyReport {
    /// Whether every attempted write landed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// The theme engine: derives, composes, writes, signals.
#[derive(Debug)]
pub struct Engine<S> {
    sink: S,
    icons: IconMemo,
    reload: bool,
}

impl<S: OutputSink> Engine<S> {
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            icons: IconMemo::default(),
            reload: false,
        }
    }

    /// Access the sink (tests inspect it; the binary reclaims it).
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Forget the icon memo; the next pass regenerates every icon.
    /// Called on configuration reload.
    pub fn reset_icons(&mut self) {
        self.icons.reset();
    }

    /// Run one full pass for `cfg`.
    ///
    /// The suppression flags short-circuit before any derivation work;
    /// otherwise every enabled artifact is (re)written and the reload
    /// toggle flips exactly once.
    pub fn apply(&mut self, cfg: &ThemeConfig) -> ApplyReport {
        let mut report = ApplyReport::default();
        if cfg.import_export || cfg.pause_reload {
            tracing::debug!(
                import_export = cfg.import_export,
                pause_reload = cfg.pause_reload,
                "style pass suppressed"
            );
            report.skipped = true;
            return report;
        }

        let pal = DerivedPalette::derive(cfg);

        // Primary stylesheet.
        let css = shell::compose(cfg, &pal);
        match self.sink.write(Artifact::Stylesheet, &css) {
            Ok(()) => report.stylesheet_written = true,
            Err(source) => report.failures.push(ArtifactFailure {
                artifact: Artifact::Stylesheet,
                source,
            }),
        }

        // Icons, gated per backing color. The memo commits only when the
        // whole due set landed, so a failed write retries next pass.
        let due = self.icons.due(&pal);
        let mut all_icons_ok = true;
        for kind in due {
            let svg = icons::render(kind, &pal);
            match self.sink.write(Artifact::Icon(kind), &svg) {
                Ok(()) => report.icons_written.push(kind),
                Err(source) => {
                    all_icons_ok = false;
                    report.failures.push(ArtifactFailure {
                        artifact: Artifact::Icon(kind),
                        source,
                    });
                }
            }
        }
        if all_icons_ok {
            self.icons.commit(&pal);
        }

        // Toolkit stylesheet: enable writes (with backup), disable
        // restores prior external state.
        if cfg.gtk.apply {
            let gtk = GtkPalette::derive(cfg);
            let gtk_css = gtkcss::compose(cfg, &pal, &gtk);
            for dir in GtkDir::BOTH {
                match artifact::enable(&mut self.sink, dir, &gtk_css) {
                    Ok(()) => report.gtk_written = true,
                    Err(source) => report.failures.push(ArtifactFailure {
                        artifact: Artifact::GtkCss(dir),
                        source,
                    }),
                }
            }
        } else {
            for dir in GtkDir::BOTH {
                if let Err(source) = artifact::disable(&mut self.sink, dir) {
                    report.failures.push(ArtifactFailure {
                        artifact: Artifact::GtkCss(dir),
                        source,
                    });
                }
            }
        }

        for failure in &report.failures {
            tracing::error!(artifact = %failure.artifact, error = %failure.source, "artifact write failed");
        }

        // Edge-triggered reload: the host reacts to the value changing,
        // so flip from whatever it was. Setting the same value twice
        // would be a no-op for the host.
        self.reload = !self.reload;
        self.sink.set_reload(self.reload);

        report
    }

    /// Tear-down pass: restore the toolkit slots and drop our own
    /// primary artifacts. Foreign state is left exactly as found.
    pub fn disable(&mut self) -> Vec<ArtifactFailure> {
        let mut failures = Vec::new();
        for dir in GtkDir::BOTH {
            if let Err(source) = artifact::disable(&mut self.sink, dir) {
                failures.push(ArtifactFailure {
                    artifact: Artifact::GtkCss(dir),
                    source,
                });
            }
        }
        if let Err(source) = self.sink.remove(Artifact::Stylesheet) {
            failures.push(ArtifactFailure {
                artifact: Artifact::Stylesheet,
                source,
            });
        }
        self.icons.reset();
        for failure in &failures {
            tracing::error!(artifact = %failure.artifact, error = %failure.source, "disable step failed");
        }
        failures
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sink::MemorySink;
    use barista_theme::config::Seed;

    fn engine() -> Engine<MemorySink> {
        Engine::new(MemorySink::new())
    }

    #[test]
    fn first_apply_writes_everything() {
        let mut eng = engine();
        let report = eng.apply(&ThemeConfig::default());
        assert!(report.stylesheet_written);
        assert_eq!(report.icons_written.len(), IconKind::ALL.len());
        assert!(!report.gtk_written, "gtk off by default");
        assert!(report.is_clean());
    }

    #[test]
    fn suppression_flags_short_circuit_everything() {
        let cases: [fn(&mut ThemeConfig); 2] = [
            |c| c.import_export = true,
            |c| c.pause_reload = true,
        ];
        for f in cases {
            let mut cfg = ThemeConfig::default();
            f(&mut cfg);
            let mut eng = engine();
            let report = eng.apply(&cfg);
            assert!(report.skipped);
            assert!(eng.sink().files.is_empty(), "no artifact may be written");
            assert!(eng.sink().reload_values.is_empty(), "no signal either");
        }
    }

    #[test]
    fn reload_toggle_flips_once_per_apply() {
        let mut eng = engine();
        let cfg = ThemeConfig::default();
        eng.apply(&cfg);
        eng.apply(&cfg);
        eng.apply(&cfg);
        assert_eq!(eng.sink().reload_values, vec![true, false, true]);
    }

    #[test]
    fn unchanged_colors_skip_icon_rewrites() {
        let mut eng = engine();
        let cfg = ThemeConfig::default();
        eng.apply(&cfg);
        let report = eng.apply(&cfg);
        assert!(report.icons_written.is_empty());
    }

    #[test]
    fn accent_change_rewrites_only_accent_icons() {
        let mut eng = engine();
        let mut cfg = ThemeConfig::default();
        eng.apply(&cfg);
        cfg.menu.accent_color = Seed::from([0.9, 0.1, 0.1]);
        let report = eng.apply(&cfg);
        assert_eq!(
            report.icons_written,
            vec![
                IconKind::ToggleOn,
                IconKind::ToggleOnHc,
                IconKind::CheckboxOn,
                IconKind::CheckboxOnFocused,
            ]
        );
    }

    #[test]
    fn stylesheet_failure_does_not_block_icons() {
        let mut sink = MemorySink::new();
        sink.fail_writes.push(Artifact::Stylesheet);
        let mut eng = Engine::new(sink);
        let report = eng.apply(&ThemeConfig::default());
        assert!(!report.stylesheet_written);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.icons_written.len(), IconKind::ALL.len());
    }

    #[test]
    fn icon_failure_does_not_block_stylesheet_and_retries() {
        let mut sink = MemorySink::new();
        sink.fail_writes.push(Artifact::Icon(IconKind::CalendarEvent));
        let mut eng = Engine::new(sink);
        let report = eng.apply(&ThemeConfig::default());
        assert!(report.stylesheet_written);
        assert!(!report.is_clean());

        // Memo did not commit: the next pass re-attempts the failed set.
        let mut eng = Engine {
            sink: MemorySink::new(),
            icons: eng.icons,
            reload: eng.reload,
        };
        let retry = eng.apply(&ThemeConfig::default());
        assert!(!retry.icons_written.is_empty());
    }

    #[test]
    fn gtk_enable_then_disable_restores_foreign_state() {
        let mut sink = MemorySink::new();
        sink.write(Artifact::GtkCss(GtkDir::Gtk3), "user css").unwrap();
        let mut eng = Engine::new(sink);

        let mut cfg = ThemeConfig::default();
        cfg.gtk.apply = true;
        let report = eng.apply(&cfg);
        assert!(report.gtk_written);
        assert_eq!(
            eng.sink().contents(Artifact::GtkBackup(GtkDir::Gtk3)),
            Some("user css")
        );

        cfg.gtk.apply = false;
        eng.apply(&cfg);
        assert_eq!(
            eng.sink().contents(Artifact::GtkCss(GtkDir::Gtk3)),
            Some("user css")
        );
        assert!(!eng.sink().files.contains_key(&Artifact::GtkBackup(GtkDir::Gtk3)));
    }

    #[test]
    fn gtk_disable_without_backup_removes_own_output_only() {
        let mut eng = engine();
        let mut cfg = ThemeConfig::default();
        cfg.gtk.apply = true;
        eng.apply(&cfg);
        assert!(eng.sink().files.contains_key(&Artifact::GtkCss(GtkDir::Gtk4)));

        cfg.gtk.apply = false;
        eng.apply(&cfg);
        assert!(!eng.sink().files.contains_key(&Artifact::GtkCss(GtkDir::Gtk4)));
    }

    #[test]
    fn disable_pass_cleans_up() {
        let mut eng = engine();
        let mut cfg = ThemeConfig::default();
        cfg.gtk.apply = true;
        eng.apply(&cfg);
        let failures = eng.disable();
        assert!(failures.is_empty());
        assert!(!eng.sink().files.contains_key(&Artifact::Stylesheet));
        assert!(!eng.sink().files.contains_key(&Artifact::GtkCss(GtkDir::Gtk3)));
    }

    #[test]
    fn reset_icons_forces_full_rewrite() {
        let mut eng = engine();
        let cfg = ThemeConfig::default();
        eng.apply(&cfg);
        eng.reset_icons();
        let report = eng.apply(&cfg);
        assert_eq!(report.icons_written.len(), IconKind::ALL.len());
    }
}
