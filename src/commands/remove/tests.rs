use super::{RemovalOutcome, execute_removal};
use crate::constants::{EXIT_BADOPT, EXIT_OK};
use crate::core::types::Backend;
use crate::error::{PkgrmError, Result};
use crate::packages::traits::PackageBackend;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

struct MockBackend {
    installed: Vec<String>,
    remove_calls: AtomicUsize,
    last_batch: Mutex<Vec<String>>,
    remove_error: Option<String>,
}

impl MockBackend {
    fn with_installed(names: &[&str]) -> Self {
        Self {
            installed: names.iter().map(|s| s.to_string()).collect(),
            remove_calls: AtomicUsize::new(0),
            last_batch: Mutex::new(Vec::new()),
            remove_error: None,
        }
    }
}

impl PackageBackend for MockBackend {
    fn backend_type(&self) -> Backend {
        Backend::Pacman
    }

    fn list_installed(&self) -> Result<Vec<String>> {
        Ok(self.installed.clone())
    }

    fn remove(&self, packages: &[String]) -> Result<()> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_batch.lock().unwrap() = packages.to_vec();

        if let Some(msg) = &self.remove_error {
            return Err(PkgrmError::PackageManagerError(msg.clone()));
        }
        if let Some(missing) = packages.iter().find(|p| !self.installed.contains(*p)) {
            return Err(PkgrmError::NotInstalled(missing.to_string()));
        }
        Ok(())
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[test]
fn empty_selection_never_contacts_backend() {
    let backend = MockBackend::with_installed(&["Alpha"]);

    let outcome = execute_removal(&backend, &[]).unwrap();

    assert_eq!(outcome, RemovalOutcome::NothingSelected);
    assert_eq!(backend.remove_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn success_sends_whole_batch_in_one_call() {
    let backend = MockBackend::with_installed(&["Alpha", "Beta"]);
    let selection = vec!["Alpha".to_string(), "Beta".to_string()];

    let outcome = execute_removal(&backend, &selection).unwrap();

    assert_eq!(outcome, RemovalOutcome::Removed(2));
    assert_eq!(backend.remove_calls.load(Ordering::SeqCst), 1);
    assert_eq!(*backend.last_batch.lock().unwrap(), selection);
}

#[test]
fn missing_package_classifies_as_not_installed() {
    // "Zeta" passed through the selector as a literal; the backend is
    // the one that reports it, by name.
    let backend = MockBackend::with_installed(&["Alpha"]);

    let outcome = execute_removal(&backend, &["Zeta".to_string()]).unwrap();

    assert_eq!(outcome, RemovalOutcome::NotInstalled("Zeta".to_string()));
}

#[test]
fn other_backend_failures_propagate_untouched() {
    let mut backend = MockBackend::with_installed(&["Alpha"]);
    backend.remove_error = Some("transaction is locked".to_string());

    let err = execute_removal(&backend, &["Alpha".to_string()]).unwrap_err();

    match err {
        PkgrmError::PackageManagerError(msg) => assert_eq!(msg, "transaction is locked"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn outcomes_map_to_contract_exit_codes() {
    assert_eq!(RemovalOutcome::Removed(3).exit_code(), EXIT_OK);
    assert_eq!(RemovalOutcome::NothingSelected.exit_code(), EXIT_BADOPT);
    assert_eq!(
        RemovalOutcome::NotInstalled("Zeta".to_string()).exit_code(),
        EXIT_BADOPT
    );
}
