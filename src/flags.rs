//! Flags, named flag groups and the global flags help page

use crate::error::{DocError, Result};
use regex::Regex;

/// A single command line flag as shown in usage listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flag {
    pub long: String,
    pub short: Option<char>,
    /// Type name shown after the flag, `None` for switches
    pub value_type: Option<String>,
    pub help: String,
    pub default: Option<String>,
}

impl Flag {
    pub fn new(long: impl Into<String>, help: impl Into<String>) -> Self {
        Self {
            long: long.into(),
            help: help.into(),
            ..Self::default()
        }
    }

    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    fn names(&self) -> String {
        let mut names = match self.short {
            Some(c) => format!("  -{}, --{}", c, self.long),
            None => format!("      --{}", self.long),
        };
        if let Some(ref t) = self.value_type {
            names.push(' ');
            names.push_str(t);
        }
        names
    }

    fn usage(&self) -> String {
        match (&self.default, self.value_type.as_deref()) {
            (Some(d), Some("string")) => format!("{} (default \"{}\")", self.help, d),
            (Some(d), Some(_)) => format!("{} (default {})", self.help, d),
            _ => self.help.clone(),
        }
    }

    fn matches(&self, re: &Regex) -> bool {
        re.is_match(&self.long) || re.is_match(&self.help)
    }
}

/// Format flags as aligned usage lines, one flag per line.
pub fn flag_usages(flags: &[Flag]) -> String {
    let names: Vec<String> = flags.iter().map(Flag::names).collect();
    let width = names.iter().map(String::len).max().unwrap_or(0);
    let indent = " ".repeat(width + 3);

    let mut out = String::new();
    for (flag, name) in flags.iter().zip(&names) {
        let usage = flag.usage().replace('\n', &format!("\n{}", indent));
        out.push_str(&format!("{:<width$}   {}\n", name, usage, width = width));
    }
    out
}

/// Flags shared by several commands, documented under one heading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagGroup {
    pub name: String,
    pub help: String,
    pub flags: Vec<Flag>,
}

impl FlagGroup {
    pub fn has_flags(&self) -> bool {
        !self.flags.is_empty()
    }

    pub fn flag_usages(&self) -> String {
        flag_usages(&self.flags)
    }
}

/// All flag groups of an application, in display order.
#[derive(Debug, Clone, Default)]
pub struct FlagRegistry {
    groups: Vec<FlagGroup>,
}

impl FlagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the group called `name`, creating an empty one at the end if needed.
    pub fn group_mut(&mut self, name: &str) -> &mut FlagGroup {
        let idx = match self.groups.iter().position(|g| g.name == name) {
            Some(idx) => idx,
            None => {
                self.groups.push(FlagGroup {
                    name: name.to_string(),
                    ..FlagGroup::default()
                });
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx]
    }

    pub fn groups(&self) -> &[FlagGroup] {
        &self.groups
    }

    pub fn by_name(&self, name: &str) -> Option<&FlagGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Select the groups named in a comma separated list, keeping registry order.
    ///
    /// An empty list selects every group. Naming a group that does not exist is
    /// an error since it means a command annotation is out of date.
    pub fn include(&self, names: &str) -> Result<Vec<&FlagGroup>> {
        if names.trim().is_empty() {
            return Ok(self.groups.iter().collect());
        }
        let wanted: Vec<&str> = names.split(',').map(str::trim).collect();
        for name in &wanted {
            if self.by_name(name).is_none() {
                return Err(DocError::UnknownFlagGroup(name.to_string()));
            }
        }
        Ok(self
            .groups
            .iter()
            .filter(|g| wanted.contains(&g.name.as_str()))
            .collect())
    }

    /// Render the global flags help.
    ///
    /// With `generating_docs` set the output is a site page with its own front
    /// matter, otherwise it is plain terminal help. `filter` keeps only flags whose
    /// name or help text match.
    pub fn render_help(&self, app: &str, filter: Option<&Regex>, generating_docs: bool) -> String {
        let mut out = String::new();
        if generating_docs {
            out.push_str(&format!(
                "---\ntitle: \"Global Flags\"\ndescription: \"{app} Global Flags\"\n\
                 # autogenerated - DO NOT EDIT\n---\n\n\
                 # Global Flags\n\n\
                 This describes the global flags available to every {app} command\n\
                 split into groups.\n\n"
            ));
        }
        for group in &self.groups {
            let flags: Vec<Flag> = group
                .flags
                .iter()
                .filter(|f| filter.map_or(true, |re| f.matches(re)))
                .cloned()
                .collect();
            if flags.is_empty() {
                continue;
            }
            if generating_docs {
                out.push_str(&format!(
                    "## {}\n\n{}\n\n```\n{}```\n\n",
                    group.name,
                    group.help,
                    flag_usages(&flags)
                ));
            } else {
                out.push_str(&format!(
                    "{} Flags\n\n{}\n\n{}\n",
                    group.name,
                    group.help,
                    flag_usages(&flags)
                ));
            }
        }
        out
    }
}
