//! Errors that stop a scaffold run
//!
//! The `Display` text of each variant is the message shown to the user.

use crate::kind::UnitKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("no src folder found")]
    NoSrcFolder,

    #[error("src is not a directory")]
    SrcNotDirectory,

    #[error("no {0} folder found")]
    NoKindFolder(UnitKind),

    #[error("{0} is not a directory")]
    KindNotDirectory(UnitKind),

    #[error("{} already exists", .0.singular())]
    AlreadyExists(UnitKind),

    #[error("invalid {} name", .0.singular())]
    InvalidName(UnitKind),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
