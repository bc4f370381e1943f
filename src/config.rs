//! Documentation settings, optionally loaded from a JSON file

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Where pages go and how they link to each other on the hosting site.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DocConfig {
    /// Directory under the output root holding one page per command
    pub commands_dir: String,
    /// File under the output root holding the global flags page
    pub flags_file: String,
    /// URL prefix of command pages on the site
    pub link_prefix: String,
    /// URL of the global flags page on the site
    pub flags_link: String,
    /// Replaces the product name in the "edit the source code in" hint
    pub source_root: String,
    /// Command named in the autogenerated warning
    pub regenerate_with: String,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            commands_dir: "commands".to_string(),
            flags_file: "flags.md".to_string(),
            link_prefix: "/commands/".to_string(),
            flags_link: "/flags/".to_string(),
            source_root: "cmd".to_string(),
            regenerate_with: "make commanddocs".to_string(),
        }
    }
}

impl DocConfig {
    /// Load settings from `path`, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        tracing::debug!("loading config from {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Site URL for a command page, e.g. `/commands/app_sub/`.
    pub fn command_link(&self, page: &str) -> String {
        format!("{}{}/", self.link_prefix, page)
    }
}
