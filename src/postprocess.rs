//! Rewrites generated pages: shared option summaries and heading depth

use crate::collect::CommandIndex;
use crate::error::{DocError, Result};
use crate::flags::FlagRegistry;
use crate::markdown::{INHERITED_OPTIONS, SEE_ALSO};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use walkdir::WalkDir;

/// Replacement for the `SEE ALSO` heading.
pub const SEE_ALSO_TITLE: &str = "### See Also";

static OUTDENT: OnceLock<Regex> = OnceLock::new();

/// Drop one `#` from every heading of level two or deeper.
pub fn outdent_headings(doc: &str) -> String {
    let re = OUTDENT.get_or_init(|| Regex::new(r"(?m)^#(#+)").expect("valid heading pattern"));
    re.replace_all(doc, "$1").into_owned()
}

/// Replace the text from `start` up to `end` with `replacement` and the
/// `SEE ALSO` heading at `end` with its title-case form.
///
/// `start..end` must be the positions of the inherited options and `SEE ALSO`
/// headings within `doc`.
pub fn splice(doc: &str, start: usize, end: usize, replacement: &str) -> String {
    format!(
        "{}{}{}{}",
        &doc[..start],
        replacement,
        SEE_ALSO_TITLE,
        &doc[end + SEE_ALSO.len()..]
    )
}

/// Text that replaces a page's inherited options section.
///
/// `groups` is the command's comma separated flag group list. Without one the
/// page just points at the global flags page.
pub fn options_summary(groups: Option<&str>, registry: &FlagRegistry, flags_link: &str) -> Result<String> {
    let pointer = format!(
        "See the [global flags page]({}) for global options not listed here.\n\n",
        flags_link
    );
    let Some(groups) = groups.filter(|g| !g.is_empty()) else {
        return Ok(pointer);
    };

    let mut out = String::from("Options shared with other commands are described next.\n");
    out.push_str(&pointer);
    for group in registry.include(groups)? {
        if !group.has_flags() {
            continue;
        }
        out.push_str(&format!("#### {} Options\n\n", group.name));
        out.push_str(&format!("{}\n\n", group.help));
        out.push_str("```\n");
        out.push_str(&group.flag_usages());
        out.push_str("```\n\n");
    }
    Ok(out)
}

/// Rewrite one page in memory.
///
/// `summary` is only called when the page has both cut points. The root page
/// has no inherited options, so there the missing start marker is tolerated and
/// only the `SEE ALSO` heading is retitled.
pub fn rewrite_page<F>(name: &str, doc: &str, is_root: bool, summary: F) -> Result<String>
where
    F: FnOnce() -> Result<String>,
{
    let start = doc.find(INHERITED_OPTIONS);
    let end = doc.find(SEE_ALSO);

    let doc = match (start, end) {
        (Some(s), Some(e)) if s <= e => splice(doc, s, e, &summary()?),
        _ if is_root => match end {
            Some(e) => format!("{}{}{}", &doc[..e], SEE_ALSO_TITLE, &doc[e + SEE_ALSO.len()..]),
            None => doc.to_string(),
        },
        _ => {
            return Err(DocError::CutPoints {
                name: name.to_string(),
                start,
                end,
            })
        }
    };

    Ok(outdent_headings(&doc))
}

/// Rewrite every page under `dir` in place.
///
/// Each file must have an entry in `commands`; the first failure stops the walk.
pub fn rewrite_pages(
    dir: &Path,
    commands: &CommandIndex,
    root_page: &str,
    registry: &FlagRegistry,
    flags_link: &str,
) -> Result<()> {
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        let cmd = commands
            .get(&name)
            .ok_or_else(|| DocError::MissingDetails(name.clone()))?;

        let doc = fs::read_to_string(entry.path())?;
        let doc = rewrite_page(&name, &doc, name == root_page, || {
            options_summary(cmd.groups.as_deref(), registry, flags_link)
        })?;
        tracing::debug!("rewrote {}", entry.path().display());
        fs::write(entry.path(), doc)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::CommandDetails;
    use crate::flags::Flag;
    use tempfile::tempdir;

    const CHILD: &str = "## app sub\n\nA sub command\n\n\
        ### Options\n\n```\n  -h, --help   help for sub\n```\n\n\
        ### Options inherited from parent commands\n\n```\n  -v, --verbose count   More output\n```\n\n\
        ### SEE ALSO\n\n* [app](/commands/app/)\t - The app\n\n";

    fn registry() -> FlagRegistry {
        let mut reg = FlagRegistry::new();
        let copy = reg.group_mut("Copy");
        copy.help = "Flags for anything which can copy a file".to_string();
        copy.flags.push(Flag::new("check-first", "Do all the checks first"));
        reg.group_mut("Empty").help = "Nothing here".to_string();
        reg
    }

    #[test]
    fn test_outdent_headings() {
        assert_eq!(outdent_headings("## Title"), "# Title");
        assert_eq!(outdent_headings("# Title"), "# Title");
        assert_eq!(outdent_headings("#### Title"), "### Title");
        assert_eq!(outdent_headings("plain ## text\n"), "plain ## text\n");
        assert_eq!(
            outdent_headings("intro\n## A\nbody\n### B\n"),
            "intro\n# A\nbody\n## B\n"
        );
    }

    #[test]
    fn test_splice_replaces_between_markers() {
        let doc = "head\nSTART middle\n### SEE ALSO\ntail\n";
        let start = doc.find("START").unwrap();
        let end = doc.find(SEE_ALSO).unwrap();
        assert_eq!(
            splice(doc, start, end, "NEW\n"),
            "head\nNEW\n### See Also\ntail\n"
        );
    }

    #[test]
    fn test_summary_without_groups_is_single_line() {
        let text = options_summary(None, &registry(), "/flags/").unwrap();
        assert_eq!(
            text,
            "See the [global flags page](/flags/) for global options not listed here.\n\n"
        );
        assert_eq!(options_summary(Some(""), &registry(), "/flags/").unwrap(), text);
    }

    #[test]
    fn test_summary_with_groups() {
        let text = options_summary(Some("Copy,Empty"), &registry(), "/flags/").unwrap();
        assert!(text.starts_with("Options shared with other commands are described next.\n"));
        assert!(text.contains("#### Copy Options\n\nFlags for anything which can copy a file\n\n```\n"));
        assert!(text.contains("--check-first"));
        assert!(!text.contains("Empty Options"));
    }

    #[test]
    fn test_rewrite_child_page() {
        let out = rewrite_page("app_sub.md", CHILD, false, || {
            options_summary(None, &registry(), "/flags/")
        })
        .unwrap();
        assert_eq!(
            out,
            "# app sub\n\nA sub command\n\n\
             ## Options\n\n```\n  -h, --help   help for sub\n```\n\n\
             See the [global flags page](/flags/) for global options not listed here.\n\n\
             ## See Also\n\n* [app](/commands/app/)\t - The app\n\n"
        );
    }

    #[test]
    fn test_rewrite_root_page_only_retitles() {
        let doc = "## app\n\nThe app\n\n### SEE ALSO\n\n* [app sub](/commands/app_sub/)\t - Sub\n";
        let out = rewrite_page("app.md", doc, true, || panic!("no summary for the root page")).unwrap();
        assert_eq!(
            out,
            "# app\n\nThe app\n\n## See Also\n\n* [app sub](/commands/app_sub/)\t - Sub\n"
        );
    }

    #[test]
    fn test_rewrite_non_root_without_markers_fails() {
        let err = rewrite_page("app_sub.md", "## app sub\n", false, || Ok(String::new())).unwrap_err();
        assert!(matches!(
            err,
            DocError::CutPoints { start: None, end: None, .. }
        ));
    }

    #[test]
    fn test_rewrite_pages_requires_details() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("app_sub.md"), CHILD).unwrap();

        let err = rewrite_pages(dir.path(), &CommandIndex::new(), "app.md", &registry(), "/flags/")
            .unwrap_err();
        assert!(matches!(err, DocError::MissingDetails(ref n) if n == "app_sub.md"));

        let mut commands = CommandIndex::new();
        commands.insert(
            "app_sub.md".to_string(),
            CommandDetails {
                groups: Some("Copy".to_string()),
                ..CommandDetails::default()
            },
        );
        rewrite_pages(dir.path(), &commands, "app.md", &registry(), "/flags/").unwrap();
        let page = fs::read_to_string(dir.path().join("app_sub.md")).unwrap();
        assert!(page.contains("### Copy Options"));
        assert!(page.contains("## See Also"));
        assert!(!page.contains("Options inherited"));
    }
}
