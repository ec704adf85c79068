use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = "pkgrm",
    about = "Batch package removal for Linux",
    long_about = "Remove installed packages by name, regex pattern, or wholesale, \
through pacman or flatpak, in one transaction per invocation",
    version,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Quiet mode
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(short = 'y', long = "yes", global = true)]
    pub yes: bool,

    /// Preview changes without executing
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Remove installed packages
    Remove {
        /// Package names, or regex patterns with --regex
        names: Vec<String>,

        /// Treat every name as a regex matched against installed packages
        #[arg(long)]
        regex: bool,

        /// Remove every installed package
        #[arg(long)]
        all: bool,

        /// Package backend to operate on (pacman, flatpak)
        #[arg(long, value_name = "BACKEND")]
        backend: Option<String>,

        /// Skip the backend's own confirmation prompts (CI/CD)
        #[arg(long, help_heading = "Advanced")]
        noconfirm: bool,
    },

    /// Show installed packages
    List {
        /// Package backend to query (pacman, flatpak)
        #[arg(long, value_name = "BACKEND")]
        backend: Option<String>,

        /// Output format (table, json)
        #[arg(long, value_name = "FORMAT")]
        format: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
