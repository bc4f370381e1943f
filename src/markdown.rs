//! Markdown pages for a command tree, one file per command

use crate::error::Result;
use crate::flags::flag_usages;
use crate::node::{page_name, CommandNode};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Heading that introduces flags passed down from ancestors.
pub const INHERITED_OPTIONS: &str = "### Options inherited from parent commands";

/// Heading that introduces the links to related commands.
pub const SEE_ALSO: &str = "### SEE ALSO";

/// Write a page for `node` and every available command below it into `dir`.
///
/// `prepend` receives the path of each file and returns text written before the
/// page body. `link` turns a page name such as `app_sub.md` into a URL.
pub fn generate_tree<N, P, L>(node: &N, dir: &Path, prepend: &P, link: &L) -> Result<()>
where
    N: CommandNode,
    P: Fn(&Path) -> String,
    L: Fn(&str) -> String,
{
    for child in node.children() {
        if !child.is_available() {
            continue;
        }
        generate_tree(&child, dir, prepend, link)?;
    }

    let filename = dir.join(page_name(&node.command_path()));
    tracing::debug!("writing {}", filename.display());
    let mut w = BufWriter::new(File::create(&filename)?);
    w.write_all(prepend(&filename).as_bytes())?;
    render_page(node, link, &mut w)?;
    w.flush()?;
    Ok(())
}

/// Write the Markdown body for a single command.
pub fn render_page<N, L, W>(node: &N, link: &L, w: &mut W) -> io::Result<()>
where
    N: CommandNode,
    L: Fn(&str) -> String,
    W: Write,
{
    let name = node.command_path();

    writeln!(w, "## {}\n", name)?;
    writeln!(w, "{}\n", node.short())?;
    if let Some(long) = node.long().filter(|l| !l.is_empty()) {
        writeln!(w, "### Synopsis\n")?;
        writeln!(w, "{}\n", long)?;
    }

    if node.is_runnable() {
        writeln!(w, "```\n{}\n```\n", node.use_line())?;
    }

    if let Some(example) = node.example().filter(|e| !e.is_empty()) {
        writeln!(w, "### Examples\n")?;
        writeln!(w, "```\n{}\n```\n", example)?;
    }

    let local = node.local_flags();
    if !local.is_empty() {
        write!(w, "### Options\n\n```\n{}```\n\n", flag_usages(&local))?;
    }
    let inherited = node.inherited_flags();
    if !inherited.is_empty() {
        write!(w, "{}\n\n```\n{}```\n\n", INHERITED_OPTIONS, flag_usages(&inherited))?;
    }

    let parent = node.parent();
    let mut children: Vec<N> = node
        .children()
        .into_iter()
        .filter(|c| c.is_available())
        .collect();
    if parent.is_none() && children.is_empty() {
        return Ok(());
    }

    writeln!(w, "{}\n", SEE_ALSO)?;
    if let Some(parent) = parent {
        let pname = parent.command_path();
        writeln!(
            w,
            "* [{}]({})\t - {}",
            pname,
            link(&page_name(&pname)),
            parent.short()
        )?;
    }
    children.sort_by(|a, b| a.name().cmp(b.name()));
    for child in &children {
        let cname = format!("{} {}", name, child.name());
        writeln!(
            w,
            "* [{}]({})\t - {}",
            cname,
            link(&page_name(&cname)),
            child.short()
        )?;
    }
    writeln!(w)?;
    Ok(())
}
