use crate::core::types::Backend;
use crate::error::{PkgrmError, Result};
use crate::packages::traits::PackageBackend;
use std::collections::HashSet;
use std::process::{Command, Stdio};

pub struct PacmanBackend {
    noconfirm: bool,
}

impl PacmanBackend {
    pub fn new(noconfirm: bool) -> Self {
        Self { noconfirm }
    }

    // Name every missing target before pacman sees the batch, so a bad
    // name aborts with nothing removed.
    fn verify_installed(&self, packages: &[String]) -> Result<()> {
        let installed: HashSet<String> = self.list_installed()?.into_iter().collect();
        match packages.iter().find(|p| !installed.contains(*p)) {
            Some(missing) => Err(PkgrmError::NotInstalled(missing.clone())),
            None => Ok(()),
        }
    }
}

impl PackageBackend for PacmanBackend {
    fn backend_type(&self) -> Backend {
        Backend::Pacman
    }

    fn list_installed(&self) -> Result<Vec<String>> {
        // -Qq: bare names, one per line, covers repo and AUR packages.
        let output = Command::new("pacman")
            .arg("-Qq")
            .output()
            .map_err(|e| PkgrmError::SystemCommandFailed {
                command: "pacman -Qq".into(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(PkgrmError::PackageManagerError(
                "Failed to query pacman database".into(),
            ));
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| {
            PkgrmError::PackageManagerError("Pacman output contained invalid UTF-8".into())
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

        // -Rns unwinds unneeded dependencies and drops saved configs;
        // dependency handling stays pacman's job.
        let mut cmd = Command::new("sudo");
        cmd.arg("pacman").arg("-Rns");

        if self.noconfirm {
            cmd.arg("--noconfirm");
        }

        let status = cmd
            .args(packages)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .status()?;

        if !status.success() {
            return Err(PkgrmError::PackageManagerError(
                "Pacman remove failed".into(),
            ));
        }
        Ok(())
    }

    fn is_available(&self) -> bool {
        which::which("pacman").is_ok()
    }
}
