//! Per-command metadata gathered before any page is written

use crate::node::{page_name, Annotations, CommandNode, GROUPS_ANNOTATION};
use std::collections::BTreeMap;

/// What the page generator and post-processor need to know about one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandDetails {
    pub short: String,
    /// Every other path that reaches this command, e.g. `app s`
    pub aliases: Vec<String>,
    /// Annotations without the `groups` key
    pub annotations: Annotations,
    /// Comma separated flag groups shown on this command's page
    pub groups: Option<String>,
}

/// Command details keyed by output page name (`app_sub.md`).
pub type CommandIndex = BTreeMap<String, CommandDetails>;

/// Walk the whole tree from `root`, hidden commands included.
pub fn collect<N: CommandNode>(root: &N) -> CommandIndex {
    let mut index = CommandIndex::new();
    add_command_details(root, &[], &mut index);
    index
}

fn add_command_details<N: CommandNode>(node: &N, parent_aliases: &[String], index: &mut CommandIndex) {
    let own = node.aliases();

    let mut aliases = Vec::new();
    for p in parent_aliases {
        aliases.push(format!("{} {}", p, node.name()));
        for a in &own {
            aliases.push(format!("{} {}", p, a));
        }
    }
    if node.has_parent() {
        let parent_path = node.parent().map(|p| p.command_path()).unwrap_or_default();
        for a in &own {
            aliases.push(format!("{} {}", parent_path, a));
        }
    } else {
        aliases.extend(own.iter().cloned());
    }

    let mut annotations = node.annotations();
    let groups = annotations.remove(GROUPS_ANNOTATION);

    let name = page_name(&node.command_path());
    tracing::trace!("collected {} with {} aliases", name, aliases.len());
    index.insert(
        name,
        CommandDetails {
            short: node.short(),
            aliases: aliases.clone(),
            annotations,
            groups,
        },
    );

    for child in node.children() {
        add_command_details(&child, &aliases, index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clap_tree::{ClapNode, CommandAnnotations};
    use clap::Command;

    fn tree() -> Command {
        Command::new("app")
            .about("The app")
            .alias("a")
            .subcommand(
                Command::new("n")
                    .about("Node")
                    .alias("x")
                    .subcommand(Command::new("leaf").alias("l")),
            )
            .subcommand(Command::new("hidden").hide(true))
    }

    #[test]
    fn test_one_entry_per_node() {
        let cmd = tree();
        let notes = CommandAnnotations::new();
        let index = collect(&ClapNode::root(&cmd, &notes));
        let names: Vec<&str> = index.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["app.md", "app_hidden.md", "app_n.md", "app_n_leaf.md"]
        );
    }

    #[test]
    fn test_root_alias_is_bare() {
        let cmd = tree();
        let notes = CommandAnnotations::new();
        let index = collect(&ClapNode::root(&cmd, &notes));
        assert_eq!(index["app.md"].aliases, vec!["a".to_string()]);
        assert_eq!(index["app.md"].short, "The app");
    }

    #[test]
    fn test_aliases_combine_with_parent_aliases() {
        let cmd = tree();
        let notes = CommandAnnotations::new();
        let index = collect(&ClapNode::root(&cmd, &notes));

        // parent aliases {"a"}, own aliases {"x"}, name "n"
        assert_eq!(
            index["app_n.md"].aliases,
            vec!["a n".to_string(), "a x".to_string(), "app x".to_string()]
        );
        assert_eq!(
            index["app_n_leaf.md"].aliases,
            vec![
                "a n leaf",
                "a n l",
                "a x leaf",
                "a x l",
                "app x leaf",
                "app x l",
                "app n l",
            ]
        );
        assert_eq!(index["app_hidden.md"].aliases, vec!["a hidden".to_string()]);
    }

    #[test]
    fn test_groups_split_from_annotations() {
        let cmd = tree();
        let notes = CommandAnnotations::new()
            .with("app n", "groups", "Copy,Filter")
            .with("app n", "versionIntroduced", "v1.2");
        let index = collect(&ClapNode::root(&cmd, &notes));
        let details = &index["app_n.md"];
        assert_eq!(details.groups.as_deref(), Some("Copy,Filter"));
        assert_eq!(details.annotations.len(), 1);
        assert_eq!(details.annotations["versionIntroduced"], "v1.2");
        assert!(index["app.md"].groups.is_none());
    }
}
