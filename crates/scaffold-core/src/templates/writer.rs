//! Writing a unit's files as one batch of independent tasks

use crate::kind::UnitKind;
use crate::templates::content::UnitFile;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::task::JoinSet;

/// Result of writing a single file
#[derive(Debug)]
pub struct FileWrite {
    pub path: PathBuf,
    pub result: io::Result<()>,
}

impl FileWrite {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Outcome of the write batch for one unit
///
/// Writes are recorded in completion order. A failed write does not remove
/// the directory or the files that did get written.
#[derive(Debug)]
pub struct UnitReport {
    pub dir: PathBuf,
    pub writes: Vec<FileWrite>,
}

impl UnitReport {
    pub fn written(&self) -> impl Iterator<Item = &FileWrite> {
        self.writes.iter().filter(|w| w.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileWrite> {
        self.writes.iter().filter(|w| w.result.is_err())
    }

    pub fn is_complete(&self) -> bool {
        self.writes.len() == UnitFile::ALL.len() && self.failures().next().is_none()
    }
}

/// Write all four unit files into `unit_dir` concurrently and collect the results
///
/// `on_write` sees each result as soon as its task finishes.
pub async fn write_unit_files<F>(
    unit_dir: &Path,
    kind: UnitKind,
    name: &str,
    mut on_write: F,
) -> UnitReport
where
    F: FnMut(&FileWrite),
{
    let mut tasks = JoinSet::new();
    let mut paths = HashMap::new();

    for file in UnitFile::ALL {
        let path = unit_dir.join(file.file_name(name));
        let content = file.render(kind, name);
        let task_path = path.clone();

        let handle = tasks.spawn(async move {
            let result = fs::write(&task_path, content).await;
            FileWrite {
                path: task_path,
                result,
            }
        });
        paths.insert(handle.id(), path);
    }

    let mut writes = Vec::with_capacity(UnitFile::ALL.len());
    while let Some(joined) = tasks.join_next().await {
        let write = match joined {
            Ok(write) => write,
            Err(e) => FileWrite {
                path: paths.remove(&e.id()).unwrap_or_default(),
                result: Err(io::Error::other(e.to_string())),
            },
        };
        on_write(&write);
        writes.push(write);
    }

    UnitReport {
        dir: unit_dir.to_path_buf(),
        writes,
    }
}
