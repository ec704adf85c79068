pub mod exit_codes;

pub use exit_codes::{EXIT_BADOPT, EXIT_ERROR, EXIT_INTERRUPT, EXIT_OK};
