use anyhow::Context;
use clap_markdown::help_markdown;
use std::path::PathBuf;
use treedoc::Cli;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("docs/CLI.md"));

    let markdown = help_markdown::<Cli>();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    std::fs::write(&path, markdown).with_context(|| format!("writing {}", path.display()))?;
    println!("Generated {}", path.display());
    Ok(())
}
