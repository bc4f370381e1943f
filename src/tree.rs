//! Box-drawn listing of a command tree and the pages it produces

use crate::collect::CommandIndex;
use crate::node::{page_name, CommandNode};
use colored::*;

struct Stats {
    commands: usize,
    aliases: usize,
}

/// Print `root` and everything below it through `write_fn`, one line each.
pub fn print_command_tree<N: CommandNode>(
    root: &N,
    commands: &CommandIndex,
    write_fn: &mut dyn FnMut(&str),
) {
    let mut stats = Stats {
        commands: 0,
        aliases: 0,
    };

    // The root has no connector, like tree(1)
    write_fn(&format_command_line(root, commands, &mut stats));

    let children = root.children();
    for (idx, child) in children.iter().enumerate() {
        let is_last = idx == children.len() - 1;
        let connector = if is_last { "└── " } else { "├── " };
        print_tree(
            child,
            connector,
            if is_last { "    " } else { "│   " },
            commands,
            &mut stats,
            write_fn,
        );
    }

    write_fn(&format!(
        "\n{} commands, {} aliases",
        stats.commands, stats.aliases
    ));
}

fn print_tree<N: CommandNode>(
    node: &N,
    connector: &str,
    prefix_continuation: &str,
    commands: &CommandIndex,
    stats: &mut Stats,
    write_fn: &mut dyn FnMut(&str),
) {
    let line = format_command_line(node, commands, stats);
    write_fn(&format!("{}{}", connector, line));

    let children = node.children();
    for (idx, child) in children.iter().enumerate() {
        let is_last = idx == children.len() - 1;
        let child_connector = if is_last { "└── " } else { "├── " };
        let new_prefix = if is_last {
            format!("{}{}", prefix_continuation, "    ")
        } else {
            format!("{}{}", prefix_continuation, "│   ")
        };

        print_tree(
            child,
            &format!("{}{}", prefix_continuation, child_connector),
            &new_prefix,
            commands,
            stats,
            write_fn,
        );
    }
}

fn format_command_line<N: CommandNode>(node: &N, commands: &CommandIndex, stats: &mut Stats) -> String {
    let page = page_name(&node.command_path());
    stats.commands += 1;

    let name = if node.is_available() {
        node.name().blue().bold()
    } else {
        node.name().dimmed().italic()
    };
    let mut line = format!("{}  {}", name, page.dimmed());

    if let Some(details) = commands.get(&page) {
        stats.aliases += details.aliases.len();
        if !details.aliases.is_empty() {
            line.push_str(&format!(
                "  {}",
                format!("[aliases: {}]", details.aliases.join(", ")).yellow()
            ));
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clap_tree::{ClapNode, CommandAnnotations};
    use crate::collect::collect;
    use clap::Command;

    fn lines_for(cmd: &Command) -> Vec<String> {
        colored::control::set_override(false);
        let notes = CommandAnnotations::new();
        let root = ClapNode::root(cmd, &notes);
        let commands = collect(&root);
        let mut lines = Vec::new();
        print_command_tree(&root, &commands, &mut |line: &str| lines.push(line.to_string()));
        lines
    }

    #[test]
    fn test_tree_connectors() {
        let cmd = Command::new("app")
            .subcommand(Command::new("one").subcommand(Command::new("deep")))
            .subcommand(Command::new("two").alias("t"));
        let lines = lines_for(&cmd);

        assert!(lines[0].starts_with("app"));
        assert!(lines[1].starts_with("├── one"));
        assert!(lines[2].starts_with("│   └── deep"));
        assert!(lines[3].starts_with("└── two"));
        assert!(lines[3].contains("app_two.md"));
        assert!(lines[3].contains("[aliases: app t]"));
        assert_eq!(lines.last().unwrap(), "\n4 commands, 1 aliases");
    }
}
