//! Removal target selection
//!
//! Turns the raw command input (literal names, `--regex` patterns, the
//! `--all` flag) into the final ordered set of packages to remove. Pure:
//! the installed snapshot is only read, and the result is a fresh vector
//! with first-occurrence order and no duplicates.

use crate::error::{PkgrmError, Result};
use regex::Regex;
use std::collections::HashSet;

/// Resolve the selection against a snapshot of installed packages.
///
/// With `pattern_mode`, every token is compiled as a regex and an
/// installed package is selected when any pattern matches it (the tokens
/// themselves are discarded). Without it, tokens pass through as literal
/// names, unchecked - a name that is not installed surfaces later as
/// `NotInstalled` from the backend instead of silently vanishing here.
/// `all_mode` then appends the whole installed snapshot.
///
/// An empty result is a normal outcome, not an error; the only failures
/// are empty tokens and patterns that do not compile.
pub fn resolve(
    tokens: &[String],
    pattern_mode: bool,
    all_mode: bool,
    installed: &[String],
) -> Result<Vec<String>> {
    if tokens.iter().any(|t| t.is_empty()) {
        return Err(PkgrmError::Other(
            "Empty package name in selection".to_string(),
        ));
    }

    let mut selected: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    if pattern_mode {
        // Compile everything up front: one bad pattern fails the whole
        // command before any backend contact.
        let patterns = tokens
            .iter()
            .map(|t| Regex::new(t).map_err(|e| PkgrmError::InvalidRegex(e.to_string())))
            .collect::<Result<Vec<Regex>>>()?;

        for name in installed {
            if patterns.iter().any(|re| re.is_match(name)) && seen.insert(name.clone()) {
                selected.push(name.clone());
            }
        }
    } else {
        for name in tokens {
            if seen.insert(name.clone()) {
                selected.push(name.clone());
            }
        }
    }

    if all_mode {
        for name in installed {
            if seen.insert(name.clone()) {
                selected.push(name.clone());
            }
        }
    }

    Ok(selected)
}

#[cfg(test)]
mod tests;
