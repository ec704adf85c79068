use std::fmt;
use std::str::FromStr;

// Supported backends.
// To add a new package manager (e.g. apt, dnf), add a variant here and
// update Display, FromStr and create_backend().
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Backend {
    Pacman,  // Native packages & AUR leftovers (Arch Linux)
    Flatpak, // Flatpak apps (cross-distro)
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pacman => write!(f, "pacman"),
            Self::Flatpak => write!(f, "flatpak"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pacman" => Ok(Self::Pacman),
            "flatpak" => Ok(Self::Flatpak),
            other => Err(format!(
                "Unknown backend '{}'. Supported: pacman, flatpak.",
                other
            )),
        }
    }
}
