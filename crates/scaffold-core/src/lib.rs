//! Scaffold Core - Shared library for Vue unit scaffolding
//!
//! Creates a module or component unit (a folder holding a `.vue`, a `.ts`, a
//! `.scss` and a `_variables.scss` file) inside `src/modules` or
//! `src/components` of a project.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Directory checks, collision detection and the file write batch
//! - **Layer 2: Workflow Orchestration** - [`generate`] driving the steps through the
//!   [`NamePrompt`] and [`Notifier`] host traits, and [`ProductConfig`] for binaries
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffold_core::{generate, Notice, Outcome, PresetName, UnitKind};
//!
//! let mut notices: Vec<Notice> = Vec::new();
//! let outcome = generate(
//!     Some(Path::new("/p")),
//!     UnitKind::Modules,
//!     &mut PresetName::new("Foo"),
//!     &mut notices,
//! )
//! .await;
//! ```

pub mod error;
pub mod generator;
pub mod host;
pub mod kind;
pub mod product;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use generator::{generate, Outcome};
pub use host::{ConsoleNotifier, NamePrompt, Notice, Notifier, PresetName, Severity};
pub use kind::UnitKind;
pub use product::ProductConfig;
pub use templates::{UnitFile, UnitReport};

#[cfg(feature = "tui")]
pub use tui::run;
