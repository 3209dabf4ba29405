// Interpreter resolution for the webui child process.

use sdlaunch_core::{LaunchError, Result, DEFAULT_INTERPRETER};
use std::path::{Path, PathBuf};

/// Resolve the interpreter used to run the webui entry point.
///
/// An explicitly configured path wins and is used verbatim, without an
/// existence check. Otherwise the default interpreter name is looked up
/// on PATH, so whatever python the current environment activates is the
/// one that runs the webui.
pub fn resolve_interpreter(configured: Option<&Path>) -> Result<PathBuf> {
    match configured {
        Some(path) => Ok(path.to_path_buf()),
        None => resolve_named(DEFAULT_INTERPRETER),
    }
}

fn resolve_named(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|e| LaunchError::InterpreterNotFound(format!("{}: {}", name, e)))
}
