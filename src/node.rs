//! The command tree as seen by the documentation generator

use crate::flags::Flag;
use std::collections::BTreeMap;

/// Key/value annotations attached to a command, ordered by key.
pub type Annotations = BTreeMap<String, String>;

/// Annotation holding the comma separated flag groups a command shares.
pub const GROUPS_ANNOTATION: &str = "groups";

/// Read-only view of one command in an application's command tree.
///
/// Nodes are cheap handles: `parent` and `children` hand out new handles onto
/// the same tree. The tree must be acyclic.
pub trait CommandNode: Sized {
    /// Name of this command alone, e.g. `sub`.
    fn name(&self) -> &str;

    /// Space separated path from the root, e.g. `app sub`.
    fn command_path(&self) -> String;

    fn short(&self) -> String;

    fn aliases(&self) -> Vec<String>;

    fn parent(&self) -> Option<Self>;

    fn children(&self) -> Vec<Self>;

    fn annotations(&self) -> Annotations;

    fn has_parent(&self) -> bool {
        self.parent().is_some()
    }

    fn long(&self) -> Option<String> {
        None
    }

    fn example(&self) -> Option<String> {
        None
    }

    fn use_line(&self) -> String {
        format!("{} [flags]", self.command_path())
    }

    fn is_runnable(&self) -> bool {
        true
    }

    /// Hidden commands are collected but get no page of their own.
    fn is_available(&self) -> bool {
        true
    }

    /// Flags defined on this command, including ones it passes down.
    fn local_flags(&self) -> Vec<Flag> {
        Vec::new()
    }

    /// Flags this command receives from its ancestors.
    fn inherited_flags(&self) -> Vec<Flag> {
        Vec::new()
    }
}

/// Output file name for a command path: `app sub` becomes `app_sub.md`.
pub fn page_name(command_path: &str) -> String {
    format!("{}.md", command_path.replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_name() {
        assert_eq!(page_name("app"), "app.md");
        assert_eq!(page_name("app sub leaf"), "app_sub_leaf.md");
    }
}
