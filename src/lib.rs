// src/lib.rs
pub mod builder;
pub mod clap_tree;
pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod flags;
pub mod frontmatter;
pub mod markdown;
pub mod node;
pub mod postprocess;
pub mod tree;

pub use builder::DocBuilder;
pub use clap_tree::{ClapNode, CommandAnnotations};
pub use cli::{Cli, Command};
pub use collect::{collect, CommandDetails, CommandIndex};
pub use config::DocConfig;
pub use error::{DocError, Result};
pub use flags::{Flag, FlagGroup, FlagRegistry};
pub use node::{page_name, Annotations, CommandNode};

use regex::Regex;
use std::io::{self, Write};

/// Run treedoc against its own command tree.
pub fn run(cli: Cli) -> Result<()> {
    let config = DocConfig::load(cli.config.as_deref())?;
    let cmd = cli::command();
    let notes = cli::annotations();
    let registry = cli::flag_groups(&cmd);
    let root = ClapNode::root(&cmd, &notes);

    match cli.command {
        Command::Gendocs { output_directory } => {
            DocBuilder::new(root, &registry, &config).build(&output_directory)?;
            println!("Generated docs in {}", output_directory.display());
        }
        Command::Flags { filter } => {
            let filter = filter.as_deref().map(Regex::new).transpose()?;
            let text = registry.render_help(cmd.get_name(), filter.as_ref(), false);
            io::stdout().write_all(text.as_bytes())?;
        }
        Command::Tree => {
            let commands = collect(&root);
            let mut output_buffer = Vec::<u8>::new();
            tree::print_command_tree(&root, &commands, &mut |line: &str| {
                output_buffer.extend_from_slice(line.as_bytes());
                output_buffer.push(b'\n');
            });
            io::stdout().write_all(&output_buffer)?;
        }
    }

    Ok(())
}
