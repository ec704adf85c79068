//! List command
//!
//! Prints the same installed snapshot the remove command resolves
//! against, so "try 'pkgrm list'" is always an answerable suggestion.

use crate::core::types::Backend;
use crate::error::{PkgrmError, Result};
use crate::packages::create_backend;
use crate::ui as output;
use crate::utils::machine_output;
use std::str::FromStr;

pub struct ListOptions {
    pub backend: Option<String>,
    pub format: Option<String>,
}

pub fn run(options: ListOptions) -> Result<()> {
    let backend_kind = match &options.backend {
        Some(name) => Backend::from_str(name).map_err(PkgrmError::Other)?,
        None => Backend::Pacman,
    };

    let backend = create_backend(backend_kind, false);
    if !backend.is_available() {
        return Err(PkgrmError::DependencyMissing(backend_kind.to_string()));
    }

    let installed = backend.list_installed()?;

    match options.format.as_deref() {
        Some("json") => machine_output::emit_v1("list", &installed, Vec::new(), Vec::new()),
        _ => {
            if installed.is_empty() {
                output::info("No packages installed");
                return Ok(());
            }
            output::header(&format!(
                "Installed packages ({}) [{}]",
                installed.len(),
                backend_kind
            ));
            for name in &installed {
                output::indent(name, 1);
            }
            Ok(())
        }
    }
}
