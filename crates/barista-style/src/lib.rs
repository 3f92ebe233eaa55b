//! # barista-style — from derived palette to output artifacts
//!
//! The back half of the engine. Where `barista-theme` computes *what* the
//! colors are, this crate decides *where they go*:
//!
//! - [`shell`] renders the primary stylesheet — an ordered list of
//!   conditional rule blocks, each self-contained and gated on one
//!   feature flag, so composition order stays auditable.
//! - [`gtkcss`] renders the reduced toolkit stylesheet and [`artifact`]
//!   runs the backup/restore state machine around it.
//! - [`icons`] stamps palette colors into the parametric SVG templates,
//!   gated per icon on whether its backing color actually changed.
//! - [`engine`] ties it together behind an [`sink::OutputSink`] and owns
//!   the edge-triggered reload signal.
//!
//! Only this crate does I/O; failures are isolated per artifact and
//! reported, never propagated out of an apply pass.

pub mod artifact;
pub mod engine;
pub mod gtkcss;
pub mod icons;
pub mod shell;
pub mod sink;

pub use engine::{ApplyReport, Engine};
pub use sink::{Artifact, FsSink, GtkDir, IconKind, MemorySink, OutputSink};
