//! Output sinks — where finished artifacts go.
//!
//! The engine core never touches paths directly; it addresses artifacts
//! by identity and hands complete text blobs to an [`OutputSink`]. The
//! filesystem sink maps identities onto the theme directory and the
//! toolkit config directories; the memory sink backs the tests.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The icon documents the engine maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    ToggleOn,
    ToggleOnHc,
    CheckboxOn,
    CheckboxOnFocused,
    CheckboxOffFocused,
    CalendarEvent,
}

impl IconKind {
    pub const ALL: [Self; 6] = [
        Self::ToggleOn,
        Self::ToggleOnHc,
        Self::CheckboxOn,
        Self::CheckboxOnFocused,
        Self::CheckboxOffFocused,
        Self::CalendarEvent,
    ];

    /// File name under the theme's media directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::ToggleOn => "toggle-on.svg",
            Self::ToggleOnHc => "toggle-on-hc.svg",
            Self::CheckboxOn => "checkbox-on.svg",
            Self::CheckboxOnFocused => "checkbox-on-focused.svg",
            Self::CheckboxOffFocused => "checkbox-off-focused.svg",
            Self::CalendarEvent => "calendar-today.svg",
        }
    }
}

/// The two toolkit config generations that receive the secondary sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GtkDir {
    Gtk3,
    Gtk4,
}

impl GtkDir {
    pub const BOTH: [Self; 2] = [Self::Gtk3, Self::Gtk4];

    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Gtk3 => "gtk-3.0",
            Self::Gtk4 => "gtk-4.0",
        }
    }
}

/// An artifact identity, independent of any particular sink layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    /// The primary shell stylesheet.
    Stylesheet,
    /// One of the SVG icon documents.
    Icon(IconKind),
    /// The toolkit stylesheet for one config generation.
    GtkCss(GtkDir),
    /// The engine's backup of a foreign toolkit stylesheet.
    GtkBackup(GtkDir),
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stylesheet => write!(f, "stylesheet.css"),
            Self::Icon(kind) => write!(f, "media/{}", kind.file_name()),
            Self::GtkCss(dir) => write!(f, "{}/gtk.css", dir.dir_name()),
            Self::GtkBackup(dir) => write!(f, "{}/gtk.css.bak", dir.dir_name()),
        }
    }
}

/// Artifact persistence plus the host reload signal.
pub trait OutputSink {
    /// Write a complete text blob, replacing any previous content.
    fn write(&mut self, artifact: Artifact, contents: &str) -> io::Result<()>;

    /// Read an artifact back; `Ok(None)` when it does not exist.
    fn read(&self, artifact: Artifact) -> io::Result<Option<String>>;

    /// Remove an artifact; removing a missing artifact is a no-op.
    fn remove(&mut self, artifact: Artifact) -> io::Result<()>;

    /// Move an artifact over another (backup/restore primitive).
    fn rename(&mut self, from: Artifact, to: Artifact) -> io::Result<()>;

    fn exists(&self, artifact: Artifact) -> bool {
        matches!(self.read(artifact), Ok(Some(_)))
    }

    /// Set the externally observed reload toggle. The host is
    /// edge-triggered: only a change of value counts as a signal.
    fn set_reload(&mut self, value: bool);
}

// ─── Filesystem sink ─────────────────────────────────────────────────────────

/// Writes artifacts under the theme directory; toolkit sheets go to the
/// user config directory. The reload toggle is persisted as a one-byte
/// marker file the host watches.
#[derive(Debug)]
pub struct FsSink {
    theme_dir: PathBuf,
    config_dir: PathBuf,
}

impl FsSink {
    #[must_use]
    pub fn new(theme_dir: impl Into<PathBuf>, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            theme_dir: theme_dir.into(),
            config_dir: config_dir.into(),
        }
    }

    fn path_of(&self, artifact: Artifact) -> PathBuf {
        match artifact {
            Artifact::Stylesheet => self.theme_dir.join("stylesheet.css"),
            Artifact::Icon(kind) => self.theme_dir.join("media").join(kind.file_name()),
            Artifact::GtkCss(dir) => self.config_dir.join(dir.dir_name()).join("gtk.css"),
            Artifact::GtkBackup(dir) => {
                self.config_dir.join(dir.dir_name()).join("gtk.css.bak")
            }
        }
    }

    fn ensure_parent(path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) => fs::create_dir_all(parent),
            None => Ok(()),
        }
    }
}

impl OutputSink for FsSink {
    fn write(&mut self, artifact: Artifact, contents: &str) -> io::Result<()> {
        let path = self.path_of(artifact);
        Self::ensure_parent(&path)?;
        fs::write(path, contents)
    }

    fn read(&self, artifact: Artifact) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_of(artifact)) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn remove(&mut self, artifact: Artifact) -> io::Result<()> {
        match fs::remove_file(self.path_of(artifact)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    fn rename(&mut self, from: Artifact, to: Artifact) -> io::Result<()> {
        let to_path = self.path_of(to);
        Self::ensure_parent(&to_path)?;
        fs::rename(self.path_of(from), to_path)
    }

    fn set_reload(&mut self, value: bool) {
        let path = self.theme_dir.join(".reload");
        if let Err(e) = fs::write(&path, if value { "1" } else { "0" }) {
            tracing::warn!(path = %path.display(), error = %e, "failed to write reload marker");
        }
    }
}

// ─── Memory sink ─────────────────────────────────────────────────────────────

/// In-memory sink for tests: records every write and reload flip.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub files: HashMap<Artifact, String>,
    pub reload_values: Vec<bool>,
    /// Artifacts whose next write should fail, for error-isolation tests.
    pub fail_writes: Vec<Artifact>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contents(&self, artifact: Artifact) -> Option<&str> {
        self.files.get(&artifact).map(String::as_str)
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, artifact: Artifact, contents: &str) -> io::Result<()> {
        if self.fail_writes.contains(&artifact) {
            return Err(io::Error::other(format!("injected failure for {artifact}")));
        }
        self.files.insert(artifact, contents.to_string());
        Ok(())
    }

    fn read(&self, artifact: Artifact) -> io::Result<Option<String>> {
        Ok(self.files.get(&artifact).cloned())
    }

    fn remove(&mut self, artifact: Artifact) -> io::Result<()> {
        self.files.remove(&artifact);
        Ok(())
    }

    fn rename(&mut self, from: Artifact, to: Artifact) -> io::Result<()> {
        match self.files.remove(&from) {
            Some(contents) => {
                self.files.insert(to, contents);
                Ok(())
            }
            None => Err(io::Error::new(io::ErrorKind::NotFound, format!("{from}"))),
        }
    }

    fn set_reload(&mut self, value: bool) {
        self.reload_values.push(value);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
