//! Viewport-limited search highlighting
//!
//! Matches are only computed for text the user can see. The highlighter is a
//! pure function of (query, visible ranges, selections, document); the
//! editor tells it what changed through [`ViewChanges`] and it rebuilds the
//! whole [`DecorationSet`] when anything relevant did.
//!
//! ## Scan ranges
//!
//! Visible ranges closer together than `2 * margin` are merged before
//! matching, so a match straddling a narrow gap (a fold, say) is found once
//! and densely packed ranges don't trigger one scan each. Each merged range
//! is scanned through a window padded by `margin` bytes on both sides, which
//! gives regex assertions and whole-word checks their surrounding context and
//! lets a match that starts in range run past its end.

mod decoration;

use std::ops::BitOr;

pub use decoration::{Decoration, DecorationSet, MatchStyle};

use crate::model::document::Document;
use crate::model::range::{Selection, TextRange};
use crate::search::SearchQuery;

/// Default padding (in bytes) used for merging and scanning visible ranges
pub const DEFAULT_HIGHLIGHT_MARGIN: usize = 250;

/// What changed since the last highlight pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewChanges {
    pub query: bool,
    pub document: bool,
    pub selection: bool,
    pub viewport: bool,
}

impl ViewChanges {
    pub const NONE: Self = Self {
        query: false,
        document: false,
        selection: false,
        viewport: false,
    };
    pub const QUERY: Self = Self {
        query: true,
        ..Self::NONE
    };
    pub const DOCUMENT: Self = Self {
        document: true,
        ..Self::NONE
    };
    pub const SELECTION: Self = Self {
        selection: true,
        ..Self::NONE
    };
    pub const VIEWPORT: Self = Self {
        viewport: true,
        ..Self::NONE
    };

    /// Check if any trigger fired
    pub fn any(&self) -> bool {
        self.query || self.document || self.selection || self.viewport
    }
}

impl BitOr for ViewChanges {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            query: self.query || rhs.query,
            document: self.document || rhs.document,
            selection: self.selection || rhs.selection,
            viewport: self.viewport || rhs.viewport,
        }
    }
}

/// Everything a highlight pass reads
#[derive(Debug, Clone, Copy)]
pub struct HighlightInput<'a> {
    pub query: &'a SearchQuery,
    pub document: &'a Document,
    /// Ascending, disjoint visible byte ranges
    pub visible_ranges: &'a [TextRange],
    pub selections: &'a [Selection],
}

/// Merge visible ranges whose gap is smaller than `2 * margin`.
///
/// Single left-to-right sweep over ascending, disjoint input. Overlapping or
/// unsorted input is not supported.
pub fn merge_scan_ranges(ranges: &[TextRange], margin: usize) -> Vec<TextRange> {
    let mut merged = Vec::with_capacity(ranges.len());
    let mut i = 0;
    while i < ranges.len() {
        let from = ranges[i].from;
        let mut to = ranges[i].to;
        while i + 1 < ranges.len() && to + 2 * margin > ranges[i + 1].from {
            i += 1;
            to = ranges[i].to;
        }
        merged.push(TextRange::new(from, to));
        i += 1;
    }
    merged
}

/// Compute the decorations for every match visible in `input`
pub fn highlight(input: &HighlightInput<'_>, margin: usize) -> DecorationSet {
    let mut decorations = DecorationSet::new();
    if !input.query.is_valid() || !input.query.is_active() {
        return decorations;
    }

    let document = input.document;
    let padding = input.query.scan_padding(margin);
    for range in merge_scan_ranges(input.visible_ranges, margin) {
        let window = document.align_range(range.from.saturating_sub(padding), range.to + padding);
        let text = document.slice(window);
        let base = window.from;

        input.query.for_each_match(
            &text,
            range.from.saturating_sub(base),
            range.to.saturating_sub(base),
            |from, to| {
                let (from, to) = (from + base, to + base);
                let selected = input
                    .selections
                    .iter()
                    .any(|sel| sel.from() == from && sel.to() == to);
                decorations.push(Decoration {
                    from,
                    to,
                    style: if selected {
                        MatchStyle::Selected
                    } else {
                        MatchStyle::Plain
                    },
                });
            },
        );
    }
    decorations
}

/// Per-editor highlighter holding the current decoration set
#[derive(Debug, Clone)]
pub struct SearchHighlighter {
    margin: usize,
    decorations: DecorationSet,
}

impl SearchHighlighter {
    /// Create a highlighter and run the first pass
    pub fn new(margin: usize, input: &HighlightInput<'_>) -> Self {
        Self {
            margin,
            decorations: highlight(input, margin),
        }
    }

    /// Recompute if any trigger fired. Returns whether decorations were rebuilt.
    pub fn update(&mut self, changes: ViewChanges, input: &HighlightInput<'_>) -> bool {
        if !changes.any() {
            return false;
        }
        self.decorations = highlight(input, self.margin);
        tracing::trace!(
            ?changes,
            matches = self.decorations.len(),
            "Recomputed search highlights"
        );
        true
    }

    pub fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }

    pub fn margin(&self) -> usize {
        self.margin
    }
}
