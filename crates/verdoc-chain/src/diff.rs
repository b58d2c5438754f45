//! Positional line diff and document reconstruction.
//!
//! Lines are compared by position, not aligned by content. Inserting a line
//! near the top of a document therefore marks every following line as
//! changed. Callers must not expect minimal edit scripts.

use verdoc_contracts::LineMarker;

/// Compute the positional diff from `old` to `new`.
///
/// Both texts are split on `'\n'`. For each position up to the longer of the
/// two, equal lines produce one unchanged entry; otherwise the old line (if
/// any) is emitted as removed, followed by the new line (if any) as added.
/// Entries are joined with `'\n'`.
pub fn compute_diff(old: &str, new: &str) -> String {
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();
    let len = old_lines.len().max(new_lines.len());

    let mut entries = Vec::with_capacity(len);
    for i in 0..len {
        match (old_lines.get(i), new_lines.get(i)) {
            (Some(old_line), Some(new_line)) if old_line == new_line => {
                entries.push(LineMarker::Unchanged.mark(new_line));
            }
            (old_line, new_line) => {
                if let Some(line) = old_line {
                    entries.push(LineMarker::Removed.mark(line));
                }
                if let Some(line) = new_line {
                    entries.push(LineMarker::Added.mark(line));
                }
            }
        }
    }

    entries.join("\n")
}

/// The diff of a first version: every line of `content` marked as added.
pub fn genesis_diff(content: &str) -> String {
    content
        .split('\n')
        .map(|line| LineMarker::Added.mark(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rebuild document text by replaying a sequence of diffs in order.
///
/// Every added or unchanged line is appended, marker stripped, followed by
/// `'\n'`. Removed lines and lines without a marker are skipped.
pub fn reconstruct<'a, I>(diffs: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut document = String::new();
    for diff in diffs {
        for (marker, content) in diff.split('\n').filter_map(LineMarker::split) {
            if marker.is_present() {
                document.push_str(content);
                document.push('\n');
            }
        }
    }
    document
}

/// Line counts per marker for a single diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub added: usize,
    pub unchanged: usize,
    pub removed: usize,
}

impl DiffStats {
    /// Count the marked lines in `diff`.
    pub fn of(diff: &str) -> Self {
        let mut stats = Self::default();
        for (marker, _) in diff.split('\n').filter_map(LineMarker::split) {
            match marker {
                LineMarker::Added => stats.added += 1,
                LineMarker::Unchanged => stats.unchanged += 1,
                LineMarker::Removed => stats.removed += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_are_all_unchanged() {
        assert_eq!(compute_diff("a\nb", "a\nb"), "  a\n  b");
    }

    #[test]
    fn changed_line_emits_removal_then_addition() {
        assert_eq!(
            compute_diff("Linia 1\nLinia 2", "Linia 1\nNowa linia"),
            "  Linia 1\n- Linia 2\n+ Nowa linia"
        );
    }

    #[test]
    fn longer_new_text_adds_trailing_lines() {
        assert_eq!(compute_diff("a", "a\nb\nc"), "  a\n+ b\n+ c");
    }

    #[test]
    fn shorter_new_text_removes_trailing_lines() {
        assert_eq!(compute_diff("a\nb\nc", "a"), "  a\n- b\n- c");
    }

    #[test]
    fn insertion_at_top_shifts_every_line() {
        let diff = compute_diff("a\nb", "x\na\nb");
        assert_eq!(diff, "- a\n+ x\n- b\n+ a\n+ b");
    }

    #[test]
    fn empty_texts_compare_as_one_empty_line() {
        assert_eq!(compute_diff("", ""), "  ");
        assert_eq!(compute_diff("", "a"), "- \n+ a");
    }

    #[test]
    fn genesis_diff_marks_every_line_added() {
        assert_eq!(genesis_diff("Linia 1\nLinia 2"), "+ Linia 1\n+ Linia 2");
        assert_eq!(genesis_diff(""), "+ ");
    }

    #[test]
    fn reconstruct_skips_removed_lines() {
        let doc = reconstruct(["  keep\n- gone\n+ new"]);
        assert_eq!(doc, "keep\nnew\n");
    }

    #[test]
    fn reconstruct_concatenates_diffs_in_order() {
        let doc = reconstruct(["+ one", "+ two\n  three"]);
        assert_eq!(doc, "one\ntwo\nthree\n");
    }

    #[test]
    fn reconstruct_ignores_unmarked_lines() {
        assert_eq!(reconstruct(["tampered content\n+ real"]), "real\n");
    }

    #[test]
    fn stats_count_each_marker() {
        let stats = DiffStats::of("  a\n- b\n+ c\n+ d");
        assert_eq!(
            stats,
            DiffStats {
                added: 2,
                unchanged: 1,
                removed: 1
            }
        );
    }
}
