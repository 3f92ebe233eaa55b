//! State machine for the external toolkit stylesheet slot.
//!
//! The toolkit's `gtk.css` is shared real estate: the user (or another
//! tool) may already own it. Every enable/disable pass classifies the
//! slot first and then follows explicit transition rules, so the engine
//! never clobbers foreign state and always restores it verbatim when the
//! feature turns off.
//!
//! ```text
//!            enable                        disable
//! Absent  ──────────────► write         ── nothing
//! Foreign ──────────────► backup, write ── nothing (not ours)
//! Engine  ──────────────► overwrite     ── restore backup, else delete
//! ```

use std::io;

use crate::gtkcss::GTK_SENTINEL;
use crate::sink::{Artifact, GtkDir, OutputSink};

/// What currently occupies one toolkit stylesheet slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// No stylesheet present.
    Absent,
    /// The engine's own output; `backup` says whether a foreign original
    /// is parked next to it.
    EngineAuthored { backup: bool },
    /// Someone else's stylesheet.
    Foreign,
}

/// Whether a stylesheet body was authored by this engine.
///
/// The sentinel must appear in the first two lines; content further down
/// could be a foreign sheet quoting ours.
#[must_use]
pub fn is_engine_authored(contents: &str) -> bool {
    contents.lines().take(2).any(|l| l.contains(GTK_SENTINEL))
}

/// Classify one toolkit slot by inspecting the sink.
pub fn classify<S: OutputSink>(sink: &S, dir: GtkDir) -> io::Result<SlotState> {
    let backup = sink.exists(Artifact::GtkBackup(dir));
    match sink.read(Artifact::GtkCss(dir))? {
        None => Ok(SlotState::Absent),
        Some(contents) if is_engine_authored(&contents) => {
            Ok(SlotState::EngineAuthored { backup })
        }
        Some(_) => Ok(SlotState::Foreign),
    }
}

/// Enable transition: park any foreign original, then write our output.
pub fn enable<S: OutputSink>(sink: &mut S, dir: GtkDir, contents: &str) -> io::Result<()> {
    if classify(sink, dir)? == SlotState::Foreign {
        tracing::debug!(?dir, "backing up foreign toolkit stylesheet");
        sink.rename(Artifact::GtkCss(dir), Artifact::GtkBackup(dir))?;
    }
    sink.write(Artifact::GtkCss(dir), contents)
}

/// Disable transition: restore the backed-up original verbatim, or, with
/// no backup, remove only our own output. Foreign state is never touched.
pub fn disable<S: OutputSink>(sink: &mut S, dir: GtkDir) -> io::Result<()> {
    match classify(sink, dir)? {
        SlotState::EngineAuthored { backup: true } => {
            tracing::debug!(?dir, "restoring toolkit stylesheet from backup");
            sink.rename(Artifact::GtkBackup(dir), Artifact::GtkCss(dir))
        }
        SlotState::EngineAuthored { backup: false } => {
            tracing::debug!(?dir, "removing engine-authored toolkit stylesheet");
            sink.remove(Artifact::GtkCss(dir))
        }
        SlotState::Absent | SlotState::Foreign => Ok(()),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sink::MemorySink;

    const DIR: GtkDir = GtkDir::Gtk4;
    const CSS: Artifact = Artifact::GtkCss(GtkDir::Gtk4);
    const BAK: Artifact = Artifact::GtkBackup(GtkDir::Gtk4);

    fn engine_body() -> String {
        format!("{GTK_SENTINEL}\nwindow {{}}\n")
    }

    #[test]
    fn sentinel_detection_is_head_only() {
        assert!(is_engine_authored(&engine_body()));
        assert!(!is_engine_authored("body {}\n"));
        // A foreign sheet quoting the sentinel deeper down stays foreign.
        assert!(!is_engine_authored(&format!("a {{}}\nb {{}}\n{GTK_SENTINEL}\n")));
    }

    #[test]
    fn classify_matrix() {
        let mut sink = MemorySink::new();
        assert_eq!(classify(&sink, DIR).unwrap(), SlotState::Absent);

        sink.write(CSS, "user stuff").unwrap();
        assert_eq!(classify(&sink, DIR).unwrap(), SlotState::Foreign);

        sink.write(CSS, &engine_body()).unwrap();
        assert_eq!(
            classify(&sink, DIR).unwrap(),
            SlotState::EngineAuthored { backup: false }
        );

        sink.write(BAK, "user stuff").unwrap();
        assert_eq!(
            classify(&sink, DIR).unwrap(),
            SlotState::EngineAuthored { backup: true }
        );
    }

    #[test]
    fn enable_backs_up_foreign_content() {
        let mut sink = MemorySink::new();
        sink.write(CSS, "user stuff").unwrap();
        enable(&mut sink, DIR, &engine_body()).unwrap();
        assert_eq!(sink.contents(BAK), Some("user stuff"));
        assert!(is_engine_authored(sink.contents(CSS).unwrap()));
    }

    #[test]
    fn enable_overwrites_own_output_without_rebackup() {
        let mut sink = MemorySink::new();
        sink.write(CSS, "user stuff").unwrap();
        enable(&mut sink, DIR, &engine_body()).unwrap();
        // Second enable must not overwrite the parked original.
        enable(&mut sink, DIR, &format!("{GTK_SENTINEL}\nv2\n")).unwrap();
        assert_eq!(sink.contents(BAK), Some("user stuff"));
        assert!(sink.contents(CSS).unwrap().contains("v2"));
    }

    #[test]
    fn disable_restores_backup_verbatim() {
        let mut sink = MemorySink::new();
        sink.write(CSS, "user stuff").unwrap();
        enable(&mut sink, DIR, &engine_body()).unwrap();
        disable(&mut sink, DIR).unwrap();
        assert_eq!(sink.contents(CSS), Some("user stuff"));
        assert!(!sink.exists(BAK));
    }

    #[test]
    fn disable_without_backup_deletes_own_file_only() {
        let mut sink = MemorySink::new();
        enable(&mut sink, DIR, &engine_body()).unwrap();
        disable(&mut sink, DIR).unwrap();
        assert!(!sink.exists(CSS));
    }

    #[test]
    fn disable_never_touches_foreign_state() {
        let mut sink = MemorySink::new();
        sink.write(CSS, "user stuff").unwrap();
        disable(&mut sink, DIR).unwrap();
        assert_eq!(sink.contents(CSS), Some("user stuff"));
    }

    #[test]
    fn disable_on_absent_slot_is_noop() {
        let mut sink = MemorySink::new();
        disable(&mut sink, DIR).unwrap();
        assert!(!sink.exists(CSS));
    }
}
