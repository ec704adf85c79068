//! Remove command
//!
//! Resolves what to remove (literal names, `--regex` patterns, `--all`)
//! against the backend's installed set, then drives the removal through
//! the backend in a single batch and classifies the result.

use crate::constants::{EXIT_BADOPT, EXIT_OK};
use crate::core::selector;
use crate::core::types::Backend;
use crate::error::{PkgrmError, Result};
use crate::packages::create_backend;
use crate::packages::traits::PackageBackend;
use crate::ui as output;
use colored::Colorize;
use std::str::FromStr;

pub struct RemoveOptions {
    /// Raw tokens: package names, or patterns when `regex` is set
    pub names: Vec<String>,
    /// Treat tokens as regex patterns against the installed set
    pub regex: bool,
    /// Select every installed package
    pub all: bool,
    /// Backend name from the CLI (defaults to pacman)
    pub backend: Option<String>,
    pub yes: bool,
    pub noconfirm: bool,
    pub dry_run: bool,
}

/// Terminal result of one remove invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// The invocation completed; carries how many packages were removed
    /// (zero for dry runs and declined prompts)
    Removed(usize),
    /// The selection came out empty; the backend was never contacted
    NothingSelected,
    /// A named package is not installed; nothing was removed
    NotInstalled(String),
}

impl RemovalOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Removed(_) => EXIT_OK,
            Self::NothingSelected | Self::NotInstalled(_) => EXIT_BADOPT,
        }
    }
}

pub fn run(options: RemoveOptions) -> Result<RemovalOutcome> {
    // Nothing asked for means nothing to resolve; short-circuit before
    // any backend is even constructed.
    if options.names.is_empty() && !options.all {
        output::info("No packages selected, nothing to do");
        return Ok(RemovalOutcome::NothingSelected);
    }

    let backend_kind = match &options.backend {
        Some(name) => Backend::from_str(name).map_err(PkgrmError::Other)?,
        None => Backend::Pacman,
    };

    let backend = create_backend(backend_kind, options.noconfirm);
    if !backend.is_available() {
        return Err(PkgrmError::DependencyMissing(backend_kind.to_string()));
    }

    // One snapshot per invocation. Pure-literal selections skip the
    // query entirely: unknown names surface as NotInstalled later, with
    // the offending name attached.
    let installed = if options.regex || options.all {
        output::verbose(&format!("Querying installed packages [{}]", backend_kind));
        backend.list_installed()?
    } else {
        Vec::new()
    };

    let selection = selector::resolve(&options.names, options.regex, options.all, &installed)?;

    if selection.is_empty() {
        output::info("No packages selected, nothing to do");
        return Ok(RemovalOutcome::NothingSelected);
    }

    output::header(&format!(
        "Removing {} package(s) [{}]",
        selection.len(),
        backend_kind
    ));
    for name in &selection {
        output::indent(&name.red().to_string(), 1);
    }

    if options.dry_run {
        output::info("Dry run, nothing removed");
        return Ok(RemovalOutcome::Removed(0));
    }

    if !options.yes && !output::prompt_yes_no("Remove these packages?") {
        output::info("Aborted, nothing removed");
        return Ok(RemovalOutcome::Removed(0));
    }

    let outcome = execute_removal(backend.as_ref(), &selection)?;
    match &outcome {
        RemovalOutcome::Removed(count) => {
            output::success(&format!("Removed {} package(s)", count));
        }
        RemovalOutcome::NotInstalled(name) => {
            output::error(&format!("Cannot remove '{}', it is not installed", name));
            output::info("Try 'pkgrm list' for the installed packages");
        }
        RemovalOutcome::NothingSelected => {}
    }
    Ok(outcome)
}

/// Drive the backend removal for a resolved selection.
///
/// The whole batch goes to the backend in one call. Backends verify all
/// targets before deleting anything, so a `NotInstalled` answer means no
/// package was removed. Every other backend failure propagates as-is.
pub fn execute_removal(
    backend: &dyn PackageBackend,
    selection: &[String],
) -> Result<RemovalOutcome> {
    if selection.is_empty() {
        return Ok(RemovalOutcome::NothingSelected);
    }

    match backend.remove(selection) {
        Ok(()) => Ok(RemovalOutcome::Removed(selection.len())),
        Err(PkgrmError::NotInstalled(name)) => Ok(RemovalOutcome::NotInstalled(name)),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests;
