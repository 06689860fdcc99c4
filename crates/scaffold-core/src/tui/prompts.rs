//! Charm-style CLI prompts using cliclack

use crate::generator::{self, Outcome};
use crate::host::{ConsoleNotifier, NamePrompt, Notice, Notifier, PresetName, Severity};
use crate::kind::UnitKind;
use crate::product::ProductConfig;
use anyhow::Result;
use std::io;
use std::path::PathBuf;

/// CLI arguments for the create commands
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project root; falls back to the product's environment variable, then
    /// the current directory
    pub root: Option<PathBuf>,

    /// Unit name; skips the name prompt
    pub name: Option<String>,

    /// Print plain lines instead of cliclack output
    pub plain: bool,
}

/// Name prompt backed by a cliclack input box
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl NamePrompt for TerminalPrompt {
    fn ask_name(&mut self, kind: UnitKind) -> io::Result<Option<String>> {
        let input = cliclack::input(format!("{} name", capitalize(kind.singular())))
            .placeholder(&format!("{} name", kind.singular()))
            .required(false)
            .interact::<String>();

        match input {
            Ok(name) => Ok(Some(name)),
            // Esc / Ctrl+C inside the prompt
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Notifier that writes cliclack log lines
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: Notice) {
        log_or_fallback(
            notice,
            |severity, message| match severity {
                Severity::Info => cliclack::log::info(message),
                Severity::Error => cliclack::log::error(message),
            },
            &mut ConsoleNotifier,
        );
    }
}

/// Hand the notice to `fallback` when `log` cannot write it
fn log_or_fallback<L, N>(notice: Notice, log: L, fallback: &mut N)
where
    L: FnOnce(Severity, &str) -> io::Result<()>,
    N: Notifier + ?Sized,
{
    if log(notice.severity, &notice.message).is_err() {
        fallback.notify(notice);
    }
}

/// Run one create command with interactive prompts
///
/// When `kind` is `None` the user picks one first.
pub async fn run<C: ProductConfig>(
    config: &C,
    kind: Option<UnitKind>,
    args: CreateArgs,
) -> Result<Outcome> {
    if !args.plain {
        cliclack::intro(config.display_name())?;
    }

    let kind = match kind {
        Some(kind) => kind,
        None => select_kind()?,
    };

    let root = config.resolve_root(args.root);

    let mut prompt: Box<dyn NamePrompt> = match args.name {
        Some(name) => Box::new(PresetName::new(name)),
        None => Box::new(TerminalPrompt),
    };
    let mut notifier: Box<dyn Notifier> = if args.plain {
        Box::new(ConsoleNotifier)
    } else {
        Box::new(TerminalNotifier)
    };

    let outcome =
        generator::generate(root.as_deref(), kind, prompt.as_mut(), notifier.as_mut()).await;

    if !args.plain {
        print_summary(kind, &outcome)?;
    }

    Ok(outcome)
}

fn select_kind() -> Result<UnitKind> {
    let mut select = cliclack::select("What would you like to create?");
    for kind in UnitKind::ALL {
        select = select.item(kind, capitalize(kind.singular()), kind.dir_name());
    }
    Ok(select.interact()?)
}

fn print_summary(kind: UnitKind, outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Created(report) if report.is_complete() => {
            cliclack::outro(format!(
                "Created {} in {}",
                kind.singular(),
                report.dir.display()
            ))?;
        }
        Outcome::Created(report) => {
            cliclack::outro_cancel(format!(
                "{} of {} files could not be written in {}",
                report.failures().count(),
                report.writes.len(),
                report.dir.display()
            ))?;
        }
        Outcome::Failed(_) | Outcome::Cancelled => {
            cliclack::outro_cancel("Nothing was created")?;
        }
        Outcome::NoProject => {
            cliclack::outro("No project open")?;
        }
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_log_falls_back() {
        let mut fallback: Vec<Notice> = Vec::new();
        log_or_fallback(
            Notice::error("no src folder found"),
            |_, _| Err(io::Error::other("terminal closed")),
            &mut fallback,
        );
        assert_eq!(fallback, vec![Notice::error("no src folder found")]);
    }

    #[test]
    fn test_logged_notice_skips_fallback() {
        let mut logged = Vec::new();
        let mut fallback: Vec<Notice> = Vec::new();
        log_or_fallback(
            Notice::info("Foo.vue created"),
            |severity, message| {
                logged.push((severity, message.to_string()));
                Ok(())
            },
            &mut fallback,
        );
        assert_eq!(logged, vec![(Severity::Info, "Foo.vue created".to_string())]);
        assert!(fallback.is_empty());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("module"), "Module");
        assert_eq!(capitalize(""), "");
    }
}
