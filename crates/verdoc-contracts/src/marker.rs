//! Line markers used in diff text.
//!
//! Every diff line starts with a two-character marker followed by the line
//! content:
//!
//! ```text
//! + added or retained line
//!   unchanged line (two spaces)
//! - removed line
//! ```

/// Width of every marker prefix, in bytes.
pub const MARKER_WIDTH: usize = 2;

/// The role a single diff line plays relative to the preceding version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineMarker {
    /// Present in the new version and differs from the old one at this position.
    Added,
    /// Identical in both versions at this position.
    Unchanged,
    /// Present only in the old version.
    Removed,
}

impl LineMarker {
    /// The two-character prefix written before the line content.
    pub const fn prefix(self) -> &'static str {
        match self {
            LineMarker::Added => "+ ",
            LineMarker::Unchanged => "  ",
            LineMarker::Removed => "- ",
        }
    }

    /// Split a diff line into its marker and content.
    ///
    /// Returns `None` for lines without a recognised prefix; those lines
    /// carry no content for reconstruction.
    pub fn split(line: &str) -> Option<(LineMarker, &str)> {
        [LineMarker::Added, LineMarker::Unchanged, LineMarker::Removed]
            .into_iter()
            .find_map(|marker| line.strip_prefix(marker.prefix()).map(|rest| (marker, rest)))
    }

    /// Whether lines with this marker belong to the reconstructed document.
    pub const fn is_present(self) -> bool {
        matches!(self, LineMarker::Added | LineMarker::Unchanged)
    }

    /// Render `content` with this marker's prefix.
    pub fn mark(self, content: &str) -> String {
        let mut line = String::with_capacity(MARKER_WIDTH + content.len());
        line.push_str(self.prefix());
        line.push_str(content);
        line
    }
}
