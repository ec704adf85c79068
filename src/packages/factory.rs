use crate::core::types::Backend;
use crate::packages::flatpak::FlatpakBackend;
use crate::packages::pacman::PacmanBackend;
use crate::packages::traits::PackageBackend;

pub fn create_backend(backend: Backend, noconfirm: bool) -> Box<dyn PackageBackend> {
    match backend {
        Backend::Pacman => Box::new(PacmanBackend::new(noconfirm)),
        Backend::Flatpak => Box::new(FlatpakBackend::new(noconfirm)),
    }
}
