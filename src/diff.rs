use similar::{ChangeTag, TextDiff};

/// Line-level change counts between two texts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub inserted: usize,
    pub deleted: usize,
}

/// Count inserted and deleted lines
pub fn line_stats(old: &str, new: &str) -> LineStats {
    let diff = TextDiff::from_lines(old, new);
    let mut stats = LineStats::default();

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => stats.inserted += 1,
            ChangeTag::Delete => stats.deleted += 1,
            ChangeTag::Equal => {}
        }
    }

    stats
}

/// Render a unified diff with `a/` and `b/` headers and 3 lines of context.
///
/// Returns an empty string when the texts are identical.
pub fn unified_diff(label: &str, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", label), &format!("b/{}", label))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_stats_counts_changed_lines() {
        let old = "title: \"A\"\nsubtitle: \"B\"\nbody\n";
        let new = "title: \"A2\"\nsubtitle: \"B\"\nbody\n";
        assert_eq!(
            line_stats(old, new),
            LineStats {
                inserted: 1,
                deleted: 1
            }
        );
    }

    #[test]
    fn test_unified_diff_headers() {
        let diff = unified_diff("page.tsx", "one\ntwo\n", "one\nthree\n");
        assert!(diff.starts_with("--- a/page.tsx\n+++ b/page.tsx\n"));
        assert!(diff.contains("-two\n"));
        assert!(diff.contains("+three\n"));
    }

    #[test]
    fn test_unified_diff_identical() {
        assert!(unified_diff("page.tsx", "same\n", "same\n").is_empty());
    }
}
