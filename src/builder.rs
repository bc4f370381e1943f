//! Documentation build: flags page, command pages, then the rewrite pass

use crate::collect::{collect, CommandIndex};
use crate::config::DocConfig;
use crate::error::Result;
use crate::flags::FlagRegistry;
use crate::frontmatter::FrontMatter;
use crate::markdown::generate_tree;
use crate::node::{page_name, CommandNode};
use crate::postprocess::rewrite_pages;
use chrono::{Local, SecondsFormat};
use std::fs;
use std::path::Path;

/// Builds the Markdown site section for one command tree.
pub struct DocBuilder<'a, N: CommandNode> {
    root: N,
    flags: &'a FlagRegistry,
    config: &'a DocConfig,
    timestamp: String,
}

impl<'a, N: CommandNode> DocBuilder<'a, N> {
    pub fn new(root: N, flags: &'a FlagRegistry, config: &'a DocConfig) -> Self {
        Self {
            root,
            flags,
            config,
            timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    /// Use a fixed generation time instead of now.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Site URL for a page name, with or without its `.md` extension.
    pub fn link(&self, name: &str) -> String {
        let base = name.strip_suffix(".md").unwrap_or(name);
        self.config.command_link(&base.to_lowercase())
    }

    /// Front matter for the page at `filename`.
    ///
    /// Rendering into a string cannot fail with well formed data, so a failure
    /// here is treated as a broken invariant and aborts the run.
    pub fn front_matter(&self, filename: &Path, commands: &CommandIndex) -> String {
        let fm = FrontMatter::for_page(
            filename,
            commands,
            self.root.name(),
            &self.timestamp,
            self.config,
        );
        match fm.render() {
            Ok(text) => text,
            Err(err) => {
                tracing::error!("Failed to render frontmatter template: {}", err);
                panic!("failed to render front matter for {}", filename.display());
            }
        }
    }

    /// Write `<root>/flags.md` and one page per command under `<root>/commands/`.
    pub fn build(&self, root: &Path) -> Result<()> {
        let out = root.join(&self.config.commands_dir);
        create_dir_all(&out)?;

        let flags_path = root.join(&self.config.flags_file);
        tracing::info!("writing flags page to {}", flags_path.display());
        fs::write(&flags_path, self.flags.render_help(self.root.name(), None, true))?;

        let commands = collect(&self.root);
        tracing::info!("collected {} commands", commands.len());

        let prepend = |filename: &Path| self.front_matter(filename, &commands);
        let link = |name: &str| self.link(name);
        generate_tree(&self.root, &out, &prepend, &link)?;

        let root_page = page_name(&self.root.command_path());
        rewrite_pages(&out, &commands, &root_page, self.flags, &self.config.flags_link)?;
        tracing::info!("wrote command pages to {}", out.display());
        Ok(())
    }
}

#[cfg(unix)]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    fs::DirBuilder::new().recursive(true).mode(0o777).create(path)
}

#[cfg(not(unix))]
fn create_dir_all(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}
