//! Scaffold generation
//!
//! A run is a fixed sequence of fallible steps:
//!
//! 1. `src` exists under the project root and is a directory
//! 2. `src/<kind>` exists and is a directory
//! 3. the user supplies a name
//! 4. the name is a single plain folder name
//! 5. no entry in `src/<kind>` matches the name ignoring case
//! 6. `src/<kind>/<name>` is created
//! 7. the four unit files are written concurrently
//!
//! The first failing step ends the run. Steps 1-5 touch nothing on disk.

use crate::error::ScaffoldError;
use crate::host::{NamePrompt, Notice, Notifier};
use crate::kind::UnitKind;
use crate::templates::writer::{write_unit_files, FileWrite, UnitReport};
use std::ffi::OsString;
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// How a run ended
#[derive(Debug)]
pub enum Outcome {
    /// No project root was available; nothing happened
    NoProject,
    /// The name prompt was dismissed or left empty
    Cancelled,
    /// The unit directory was created. Check the report for failed writes.
    Created(UnitReport),
    /// A step failed before the unit directory was created
    Failed(ScaffoldError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        match self {
            Outcome::Created(report) => report.is_complete(),
            Outcome::Failed(_) => false,
            Outcome::NoProject | Outcome::Cancelled => true,
        }
    }
}

/// Scaffold a unit of `kind` under `root`, asking `prompt` for its name
///
/// Every terminal outcome is reported through `notifier`.
pub async fn generate<P, N>(
    root: Option<&Path>,
    kind: UnitKind,
    prompt: &mut P,
    notifier: &mut N,
) -> Outcome
where
    P: NamePrompt + ?Sized,
    N: Notifier + ?Sized,
{
    let Some(root) = root else {
        return Outcome::NoProject;
    };

    let kind_dir = match locate_kind_dir(root, kind).await {
        Ok(dir) => dir,
        Err(e) => return fail(notifier, e),
    };

    let name = match prompt.ask_name(kind) {
        Ok(Some(name)) if !name.is_empty() => name,
        Ok(_) => {
            notifier.notify(Notice::info("Cancelled"));
            return Outcome::Cancelled;
        }
        Err(e) => return fail(notifier, e.into()),
    };

    let created = create_unit(&kind_dir, kind, &name, |write| {
        notifier.notify(write_notice(write))
    })
    .await;

    match created {
        Ok(report) => Outcome::Created(report),
        Err(e) => fail(notifier, e),
    }
}

/// Notice for one finished file write
pub fn write_notice(write: &FileWrite) -> Notice {
    match &write.result {
        Ok(()) => Notice::info(format!("{} created", write.file_name())),
        Err(e) => Notice::error(e.to_string()),
    }
}

fn fail<N: Notifier + ?Sized>(notifier: &mut N, error: ScaffoldError) -> Outcome {
    notifier.notify(Notice::error(error.to_string()));
    Outcome::Failed(error)
}

/// Resolve `root/src`, checking that it is listed and is a directory
pub async fn locate_src(root: &Path) -> Result<PathBuf> {
    require_dir(
        root,
        "src",
        ScaffoldError::NoSrcFolder,
        ScaffoldError::SrcNotDirectory,
    )
    .await
}

/// Resolve `root/src/<kind>`, checking every level
pub async fn locate_kind_dir(root: &Path, kind: UnitKind) -> Result<PathBuf> {
    let src = locate_src(root).await?;
    require_dir(
        &src,
        kind.dir_name(),
        ScaffoldError::NoKindFolder(kind),
        ScaffoldError::KindNotDirectory(kind),
    )
    .await
}

/// Check the name, create the unit directory and write its files
///
/// `on_write` is called as each file write finishes.
pub async fn create_unit<F>(
    kind_dir: &Path,
    kind: UnitKind,
    name: &str,
    on_write: F,
) -> Result<UnitReport>
where
    F: FnMut(&FileWrite),
{
    validate_name(kind, name)?;
    check_collision(kind_dir, kind, name).await?;
    let unit_dir = create_unit_dir(kind_dir, name).await?;
    Ok(write_unit_files(&unit_dir, kind, name, on_write).await)
}

/// A unit name must be exactly one plain path component, so the unit always
/// lands directly inside `src/<kind>`
pub fn validate_name(kind: UnitKind, name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(()),
        _ => Err(ScaffoldError::InvalidName(kind)),
    }
}

/// Fail if any entry in `kind_dir` has the same name ignoring case
pub async fn check_collision(kind_dir: &Path, kind: UnitKind, name: &str) -> Result<()> {
    let wanted = name.to_lowercase();
    let taken = entry_names(kind_dir)
        .await?
        .iter()
        .any(|entry| entry.to_string_lossy().to_lowercase() == wanted);

    if taken {
        return Err(ScaffoldError::AlreadyExists(kind));
    }
    Ok(())
}

/// Create `kind_dir/name`. Fails if it already exists.
pub async fn create_unit_dir(kind_dir: &Path, name: &str) -> Result<PathBuf> {
    let unit_dir = kind_dir.join(name);
    fs::create_dir(&unit_dir).await?;
    Ok(unit_dir)
}

async fn require_dir(
    parent: &Path,
    entry: &str,
    missing: ScaffoldError,
    not_dir: ScaffoldError,
) -> Result<PathBuf> {
    // Match the listed name exactly, even on case-insensitive filesystems
    if !entry_names(parent).await?.iter().any(|name| name == entry) {
        return Err(missing);
    }

    let path = parent.join(entry);
    if !fs::metadata(&path).await?.is_dir() {
        return Err(not_dir);
    }
    Ok(path)
}

async fn entry_names(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name());
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::PresetName;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn project_with(kind: UnitKind) -> TempDir {
        let temp = TempDir::new().unwrap();
        std_fs::create_dir_all(temp.path().join("src").join(kind.dir_name())).unwrap();
        temp
    }

    #[tokio::test]
    async fn test_locate_src_missing() {
        let temp = TempDir::new().unwrap();
        let err = locate_src(temp.path()).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::NoSrcFolder));
    }

    #[tokio::test]
    async fn test_locate_src_is_file() {
        let temp = TempDir::new().unwrap();
        std_fs::write(temp.path().join("src"), "").unwrap();
        let err = locate_src(temp.path()).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::SrcNotDirectory));
    }

    #[tokio::test]
    async fn test_locate_src_requires_exact_name() {
        let temp = TempDir::new().unwrap();
        std_fs::create_dir(temp.path().join("Src")).unwrap();
        let err = locate_src(temp.path()).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::NoSrcFolder));
    }

    #[tokio::test]
    async fn test_locate_kind_dir() {
        let temp = project_with(UnitKind::Components);
        let dir = locate_kind_dir(temp.path(), UnitKind::Components)
            .await
            .unwrap();
        assert_eq!(dir, temp.path().join("src").join("components"));

        let err = locate_kind_dir(temp.path(), UnitKind::Modules)
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::NoKindFolder(UnitKind::Modules)));
    }

    #[tokio::test]
    async fn test_locate_kind_dir_is_file() {
        let temp = TempDir::new().unwrap();
        std_fs::create_dir(temp.path().join("src")).unwrap();
        std_fs::write(temp.path().join("src").join("modules"), "").unwrap();

        let err = locate_kind_dir(temp.path(), UnitKind::Modules)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "modules is not a directory");
    }

    #[tokio::test]
    async fn test_collision_ignores_case() {
        let temp = project_with(UnitKind::Modules);
        let kind_dir = temp.path().join("src").join("modules");
        std_fs::create_dir(kind_dir.join("foo")).unwrap();

        let err = check_collision(&kind_dir, UnitKind::Modules, "FOO")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "module already exists");
        assert!(check_collision(&kind_dir, UnitKind::Modules, "Bar")
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_collision_counts_plain_files() {
        let temp = project_with(UnitKind::Modules);
        let kind_dir = temp.path().join("src").join("modules");
        std_fs::write(kind_dir.join("Notes"), "").unwrap();

        assert!(check_collision(&kind_dir, UnitKind::Modules, "notes")
            .await
            .is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name(UnitKind::Modules, "Foo").is_ok());
        assert!(validate_name(UnitKind::Modules, "my-card.v2").is_ok());
        for bad in ["/tmp/Evil", "../Evil", "Foo/Bar", "Foo/", ".", ".."] {
            assert!(
                matches!(
                    validate_name(UnitKind::Modules, bad),
                    Err(ScaffoldError::InvalidName(UnitKind::Modules))
                ),
                "accepted {}",
                bad
            );
        }
    }

    #[tokio::test]
    async fn test_create_dir_failure_is_reported_verbatim() {
        let temp = project_with(UnitKind::Modules);
        let kind_dir = temp.path().join("src").join("modules");
        // Longer than any filesystem allows for a single component
        let name = "a".repeat(300);
        let expected = std_fs::create_dir(kind_dir.join(&name))
            .unwrap_err()
            .to_string();

        let mut notices: Vec<Notice> = Vec::new();
        let outcome = generate(
            Some(temp.path()),
            UnitKind::Modules,
            &mut PresetName::new(name),
            &mut notices,
        )
        .await;

        assert!(matches!(outcome, Outcome::Failed(ScaffoldError::Io(_))));
        assert!(!outcome.is_success());
        assert_eq!(notices, vec![Notice::error(expected)]);
        assert_eq!(std_fs::read_dir(&kind_dir).unwrap().count(), 0);
    }

    #[test]
    fn test_write_notice() {
        let written = FileWrite {
            path: PathBuf::from("src/modules/Foo/Foo.ts"),
            result: Ok(()),
        };
        assert_eq!(write_notice(&written), Notice::info("Foo.ts created"));

        let failed = FileWrite {
            path: PathBuf::from("src/modules/Foo/Foo.vue"),
            result: Err(io::Error::other("disk full")),
        };
        assert_eq!(write_notice(&failed), Notice::error("disk full"));
    }

    #[test]
    fn test_partial_report_is_not_success() {
        let report = UnitReport {
            dir: PathBuf::from("src/modules/Foo"),
            writes: vec![
                FileWrite {
                    path: PathBuf::from("src/modules/Foo/Foo.vue"),
                    result: Err(io::Error::other("disk full")),
                },
                FileWrite {
                    path: PathBuf::from("src/modules/Foo/Foo.ts"),
                    result: Ok(()),
                },
            ],
        };
        let notices: Vec<Notice> = report.writes.iter().map(write_notice).collect();

        assert_eq!(notices.iter().filter(|n| n.is_error()).count(), 1);
        assert!(!Outcome::Created(report).is_success());
    }

    #[tokio::test]
    async fn test_no_root_is_a_no_op() {
        let mut notices: Vec<Notice> = Vec::new();
        let outcome = generate(
            None,
            UnitKind::Modules,
            &mut PresetName::new("Foo"),
            &mut notices,
        )
        .await;

        assert!(matches!(outcome, Outcome::NoProject));
        assert!(notices.is_empty());
    }

    #[tokio::test]
    async fn test_created_notice_per_file() {
        let temp = project_with(UnitKind::Modules);
        let mut notices: Vec<Notice> = Vec::new();
        let outcome = generate(
            Some(temp.path()),
            UnitKind::Modules,
            &mut PresetName::new("Foo"),
            &mut notices,
        )
        .await;

        assert!(outcome.is_success());
        assert_eq!(notices.len(), 4);
        assert!(notices.iter().all(|n| !n.is_error()));
        assert!(notices.contains(&Notice::info("Foo.vue created")));
        assert!(notices.contains(&Notice::info("_variables.scss created")));
    }

    #[tokio::test]
    async fn test_empty_name_cancels() {
        let temp = project_with(UnitKind::Components);
        let mut notices: Vec<Notice> = Vec::new();
        let outcome = generate(
            Some(temp.path()),
            UnitKind::Components,
            &mut PresetName::new(""),
            &mut notices,
        )
        .await;

        assert!(matches!(outcome, Outcome::Cancelled));
        assert_eq!(notices, vec![Notice::info("Cancelled")]);
    }
}
