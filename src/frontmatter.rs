//! Site front matter written at the top of every command page

use crate::collect::CommandIndex;
use crate::config::DocConfig;
use crate::node::Annotations;
use std::fmt::{self, Write};
use std::path::Path;

/// Header data for one generated page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    /// Generation time of the run, not written into the header
    pub date: String,
    pub title: String,
    pub description: String,
    /// Source location named in the do-not-edit warning
    pub source: String,
    pub aliases: Vec<String>,
    pub annotations: Annotations,
    pub regenerate_with: String,
}

impl FrontMatter {
    /// Build the front matter for the page at `filename`.
    ///
    /// A page with no collected details gets an empty description rather than
    /// an error; the post-processor reports the inconsistency later.
    pub fn for_page(
        filename: &Path,
        commands: &CommandIndex,
        product: &str,
        date: &str,
        config: &DocConfig,
    ) -> Self {
        let base = filename
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let details = commands
            .get(&format!("{}.md", base))
            .cloned()
            .unwrap_or_default();

        Self {
            date: date.to_string(),
            title: base.replace('_', " "),
            description: details.short,
            source: format!(
                "{}/",
                base.replace(product, &config.source_root).replace('_', "/")
            ),
            aliases: details
                .aliases
                .iter()
                .map(|a| config.command_link(&a.replace(' ', "_")))
                .collect(),
            annotations: details.annotations,
            regenerate_with: config.regenerate_with.clone(),
        }
    }

    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(out, "---")?;
        writeln!(out, "title: \"{}\"", self.title)?;
        writeln!(out, "description: \"{}\"", self.description)?;
        if !self.aliases.is_empty() {
            writeln!(out, "aliases:")?;
            for alias in &self.aliases {
                writeln!(out, "  - {}", alias)?;
            }
        }
        for (key, value) in &self.annotations {
            writeln!(out, "{}: {}", key, value)?;
        }
        writeln!(
            out,
            "# autogenerated - DO NOT EDIT, instead edit the source code in {} and as part of making a release run \"{}\"",
            self.source, self.regenerate_with
        )?;
        writeln!(out, "---")?;
        Ok(out)
    }
}
