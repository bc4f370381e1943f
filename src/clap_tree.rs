//! `CommandNode` adapter over a `clap::Command` tree

use crate::flags::{Flag, FlagRegistry};
use crate::node::{Annotations, CommandNode};
use clap::{Arg, ArgAction, Command};
use std::collections::BTreeMap;

/// Annotations for a clap tree, keyed by command path (`app sub`).
///
/// clap has no place to hang arbitrary metadata on a command, so it lives here.
#[derive(Debug, Clone, Default)]
pub struct CommandAnnotations {
    by_path: BTreeMap<String, Annotations>,
}

impl CommandAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, key: &str, value: &str) -> Self {
        self.by_path
            .entry(path.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn for_path(&self, path: &str) -> Annotations {
        self.by_path.get(path).cloned().unwrap_or_default()
    }
}

/// A position in an unbuilt `clap::Command` tree.
#[derive(Debug, Clone)]
pub struct ClapNode<'a> {
    cmd: &'a Command,
    ancestors: Vec<&'a Command>,
    annotations: &'a CommandAnnotations,
}

impl<'a> ClapNode<'a> {
    pub fn root(cmd: &'a Command, annotations: &'a CommandAnnotations) -> Self {
        Self {
            cmd,
            ancestors: Vec::new(),
            annotations,
        }
    }
}

impl CommandNode for ClapNode<'_> {
    fn name(&self) -> &str {
        self.cmd.get_name()
    }

    fn command_path(&self) -> String {
        self.ancestors
            .iter()
            .map(|c| c.get_name())
            .chain(std::iter::once(self.cmd.get_name()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn short(&self) -> String {
        self.cmd
            .get_about()
            .map(|s| s.to_string())
            .unwrap_or_default()
    }

    fn aliases(&self) -> Vec<String> {
        self.cmd.get_all_aliases().map(str::to_string).collect()
    }

    fn parent(&self) -> Option<Self> {
        let (parent, rest) = self.ancestors.split_last()?;
        Some(Self {
            cmd: *parent,
            ancestors: rest.to_vec(),
            annotations: self.annotations,
        })
    }

    fn children(&self) -> Vec<Self> {
        let mut ancestors = self.ancestors.clone();
        ancestors.push(self.cmd);
        self.cmd
            .get_subcommands()
            .map(|cmd| Self {
                cmd,
                ancestors: ancestors.clone(),
                annotations: self.annotations,
            })
            .collect()
    }

    fn annotations(&self) -> Annotations {
        self.annotations.for_path(&self.command_path())
    }

    fn has_parent(&self) -> bool {
        !self.ancestors.is_empty()
    }

    fn long(&self) -> Option<String> {
        self.cmd.get_long_about().map(|s| s.to_string())
    }

    fn example(&self) -> Option<String> {
        self.cmd.get_after_long_help().map(|s| s.to_string())
    }

    fn use_line(&self) -> String {
        let mut line = self.command_path();
        for arg in self.cmd.get_positionals() {
            let name = value_name(arg);
            if arg.is_required_set() {
                line.push_str(&format!(" <{}>", name));
            } else {
                line.push_str(&format!(" [{}]", name));
            }
        }
        line.push_str(" [flags]");
        line
    }

    fn is_runnable(&self) -> bool {
        !self.cmd.is_subcommand_required_set()
    }

    fn is_available(&self) -> bool {
        !self.cmd.is_hide_set()
    }

    fn local_flags(&self) -> Vec<Flag> {
        let mut flags: Vec<Flag> = self
            .cmd
            .get_arguments()
            .filter(|a| !a.is_positional() && !a.is_hide_set())
            .filter_map(flag_from_arg)
            .collect();
        if !self.cmd.is_disable_help_flag_set() {
            flags.push(Flag::new("help", format!("help for {}", self.name())).short('h'));
        }
        if self.cmd.get_version().is_some() && !self.cmd.is_disable_version_flag_set() {
            flags.push(Flag::new("version", format!("version for {}", self.name())).short('V'));
        }
        flags
    }

    fn inherited_flags(&self) -> Vec<Flag> {
        self.ancestors
            .iter()
            .flat_map(|c| c.get_arguments())
            .filter(|a| a.is_global_set() && !a.is_hide_set())
            .filter_map(flag_from_arg)
            .collect()
    }
}

fn value_name(arg: &Arg) -> String {
    arg.get_value_names()
        .and_then(|names| names.first())
        .map(|n| n.to_string())
        .unwrap_or_else(|| arg.get_id().to_string().to_uppercase())
}

/// Describe a named clap argument as a `Flag`. Short-only args are skipped.
pub fn flag_from_arg(arg: &Arg) -> Option<Flag> {
    let long = arg.get_long()?;
    let action = arg.get_action();
    let value_type = if matches!(action, ArgAction::Count) {
        Some("count".to_string())
    } else if action.takes_values() {
        Some(
            arg.get_value_names()
                .and_then(|names| names.first())
                .map(|n| n.to_string().to_lowercase())
                .unwrap_or_else(|| "string".to_string()),
        )
    } else {
        None
    };
    let default = if action.takes_values() && !arg.get_default_values().is_empty() {
        Some(
            arg.get_default_values()
                .iter()
                .map(|v| v.to_string_lossy().to_string())
                .collect::<Vec<_>>()
                .join(","),
        )
    } else {
        None
    };

    Some(Flag {
        long: long.to_string(),
        short: arg.get_short(),
        value_type,
        help: arg.get_help().map(|h| h.to_string()).unwrap_or_default(),
        default,
    })
}

impl FlagRegistry {
    /// Group the root's global args by help heading.
    ///
    /// `help` supplies the description of each heading; args without a heading
    /// are collected under `Other`.
    pub fn from_globals(root: &Command, help: &[(&str, &str)]) -> Self {
        let mut registry = FlagRegistry::new();
        for arg in root
            .get_arguments()
            .filter(|a| a.is_global_set() && !a.is_hide_set())
        {
            let Some(flag) = flag_from_arg(arg) else {
                continue;
            };
            let heading = arg.get_help_heading().unwrap_or("Other");
            let group = registry.group_mut(heading);
            if group.help.is_empty() {
                if let Some((_, text)) = help.iter().find(|(name, _)| *name == heading) {
                    group.help = text.to_string();
                }
            }
            group.flags.push(flag);
        }
        registry
    }
}
