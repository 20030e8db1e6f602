//! Decorations produced by the search highlighter

/// Visual style of a search match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchStyle {
    /// Ordinary match
    Plain,
    /// Match whose range is exactly one of the current selections
    Selected,
}

impl MatchStyle {
    /// Class names the renderer maps to colors
    pub fn class_name(&self) -> &'static str {
        match self {
            MatchStyle::Plain => "search-match",
            MatchStyle::Selected => "search-match search-match-selected",
        }
    }
}

/// A styled byte range `[from, to)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoration {
    pub from: usize,
    pub to: usize,
    pub style: MatchStyle,
}

/// Ordered, non-overlapping decorations. Rebuilt from scratch on every
/// recomputation, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecorationSet {
    decorations: Vec<Decoration>,
}

impl DecorationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decoration. Must start at or after the end of the previous one.
    pub(crate) fn push(&mut self, decoration: Decoration) {
        debug_assert!(
            self.decorations
                .last()
                .map_or(true, |last| last.to <= decoration.from),
            "decorations must be ascending and non-overlapping"
        );
        self.decorations.push(decoration);
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decoration> {
        self.decorations.iter()
    }

    pub fn as_slice(&self) -> &[Decoration] {
        &self.decorations
    }

    /// Decorations overlapping `[from, to)`, e.g. the ones on a rendered line
    pub fn in_range(&self, from: usize, to: usize) -> &[Decoration] {
        let start = self.decorations.partition_point(|d| d.to <= from);
        let end = self.decorations.partition_point(|d| d.from < to).max(start);
        &self.decorations[start..end]
    }

    /// Number of decorations with the given style
    pub fn count(&self, style: MatchStyle) -> usize {
        self.decorations.iter().filter(|d| d.style == style).count()
    }
}

impl<'a> IntoIterator for &'a DecorationSet {
    type Item = &'a Decoration;
    type IntoIter = std::slice::Iter<'a, Decoration>;

    fn into_iter(self) -> Self::IntoIter {
        self.decorations.iter()
    }
}
