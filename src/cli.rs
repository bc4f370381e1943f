//! Command line interface definitions

use crate::clap_tree::CommandAnnotations;
use crate::flags::FlagRegistry;
use clap::{ArgAction, Command as ClapCommand, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "treedoc",
    version,
    about = "Generate Markdown reference pages for a command tree",
    long_about = "treedoc walks its command tree and writes one Markdown page per command \
                  plus a global flags page, ready for a static site generator."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Logging")]
    pub verbose: u8,

    /// Read documentation settings from a JSON file
    #[arg(long, value_name = "PATH", global = true, help_heading = "Config")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Output markdown docs for treedoc to the directory supplied.
    #[command(long_about = "This produces markdown docs for the treedoc commands to the directory\n\
                            supplied. These are in a format suitable for hugo to render into a\n\
                            website.")]
    Gendocs {
        /// Root of the generated docs
        #[arg(value_name = "OUTPUT_DIRECTORY")]
        output_directory: PathBuf,
    },

    /// Show the global flags for treedoc
    Flags {
        /// Only show flags whose name or help matches this regular expression
        #[arg(value_name = "FILTER")]
        filter: Option<String>,
    },

    /// Show the command tree with page names and aliases
    #[command(visible_alias = "ls")]
    Tree,
}

/// The full treedoc command tree.
pub fn command() -> ClapCommand {
    Cli::command()
}

/// Metadata for treedoc's own pages.
pub fn annotations() -> CommandAnnotations {
    CommandAnnotations::new()
        .with("treedoc gendocs", "versionIntroduced", "v0.1.0")
        .with("treedoc gendocs", "groups", "Config")
        .with("treedoc flags", "versionIntroduced", "v0.1.0")
        .with("treedoc tree", "versionIntroduced", "v0.1.0")
}

/// treedoc's global flags, grouped as shown on the flags page.
pub fn flag_groups(cmd: &ClapCommand) -> FlagRegistry {
    FlagRegistry::from_globals(
        cmd,
        &[
            ("Logging", "Flags for controlling how much is logged."),
            ("Config", "Flags for choosing the documentation settings."),
        ],
    )
}
