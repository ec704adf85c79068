use crate::core::types::Backend;
use crate::error::Result;

/// A system package backend pkgrm removes packages through.
///
/// `remove` takes the whole batch in one call so the backend can apply
/// its own ordering and dependency handling. Implementations verify
/// every target against the installed set before deleting anything: a
/// `NotInstalled` error means the batch left the system untouched.
pub trait PackageBackend {
    fn backend_type(&self) -> Backend;

    /// Enumerate currently installed package identifiers.
    fn list_installed(&self) -> Result<Vec<String>>;

    /// Remove the given packages in one transaction.
    fn remove(&self, packages: &[String]) -> Result<()>;

    /// Whether the backend binary exists on this system.
    fn is_available(&self) -> bool;
}
