//! Host services the generator talks to
//!
//! The generator never prints or reads from the terminal itself. It asks a
//! [`NamePrompt`] for the unit name and reports every outcome through a
//! [`Notifier`]. The terminal front end implements both with cliclack; the
//! types here cover headless runs and tests.

use crate::kind::UnitKind;
use colored::Colorize;
use std::io;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A user-visible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Receives notices as the generator produces them
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Collects notices in order
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Supplies the unit name
pub trait NamePrompt {
    /// Ask for a name. `Ok(None)` means the user dismissed the prompt.
    fn ask_name(&mut self, kind: UnitKind) -> io::Result<Option<String>>;
}

/// A name fixed up front, for non-interactive runs
#[derive(Debug, Clone, Default)]
pub struct PresetName(pub Option<String>);

impl PresetName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }
}

impl NamePrompt for PresetName {
    fn ask_name(&mut self, _kind: UnitKind) -> io::Result<Option<String>> {
        Ok(self.0.take())
    }
}

/// Plain colored console output
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.severity {
            Severity::Info => println!("{} {}", "info:".cyan(), notice.message),
            Severity::Error => eprintln!("{} {}", "error:".red().bold(), notice.message),
        }
    }
}
