//! Product configuration trait for CLI binaries
//!
//! Each binary built on this library implements this trait to name itself and
//! to say where the project root comes from when no `--root` is given.

use std::path::PathBuf;

/// Configuration trait for CLI products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Environment variable that overrides the project root
    fn root_env(&self) -> &'static str;

    /// Resolve the project root: explicit path, then the environment, then the
    /// current directory
    fn resolve_root(&self, explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit
            .or_else(|| std::env::var_os(self.root_env()).map(PathBuf::from))
            .or_else(|| std::env::current_dir().ok())
    }
}
