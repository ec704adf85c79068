use crate::core::types::Backend;
use crate::error::{PkgrmError, Result};
use crate::packages::traits::PackageBackend;
use std::collections::HashSet;
use std::process::{Command, Stdio};

pub struct FlatpakBackend {
    noconfirm: bool,
}

impl FlatpakBackend {
    pub fn new(noconfirm: bool) -> Self {
        Self { noconfirm }
    }

    fn verify_installed(&self, packages: &[String]) -> Result<()> {
        let installed: HashSet<String> = self.list_installed()?.into_iter().collect();
        match packages.iter().find(|p| !installed.contains(*p)) {
            Some(missing) => Err(PkgrmError::NotInstalled(missing.clone())),
            None => Ok(()),
        }
    }
}

impl PackageBackend for FlatpakBackend {
    fn backend_type(&self) -> Backend {
        Backend::Flatpak
    }

    fn list_installed(&self) -> Result<Vec<String>> {
        // Application IDs only; runtimes are flatpak's own concern.
        let output = Command::new("flatpak")
            .args(["list", "--app", "--columns=application"])
            .output()
            .map_err(|e| PkgrmError::SystemCommandFailed {
                command: "flatpak list".into(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(PkgrmError::PackageManagerError(
                "Failed to query flatpak installations".into(),
            ));
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| {
            PkgrmError::PackageManagerError("Flatpak output contained invalid UTF-8".into())
        })?;

        Ok(stdout
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect())
    }

    fn remove(&self, packages: &[String]) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        self.verify_installed(packages)?;

        let mut cmd = Command::new("flatpak");
        cmd.arg("uninstall");

        if self.noconfirm {
            cmd.arg("-y");
        }

        let status = cmd
            .args(packages)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .status()?;

        if !status.success() {
            return Err(PkgrmError::PackageManagerError(
                "Flatpak uninstall failed".into(),
            ));
        }
        Ok(())
    }

    fn is_available(&self) -> bool {
        which::which("flatpak").is_ok()
    }
}
