//! Byte ranges and selections
//!
//! Every offset in this crate is a byte offset into the document text.

/// A half-open byte range `[from, to)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextRange {
    pub from: usize,
    pub to: usize,
}

impl TextRange {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub fn len(&self) -> usize {
        self.to.saturating_sub(self.from)
    }

    pub fn is_empty(&self) -> bool {
        self.to <= self.from
    }

    /// Check if this range shares at least one byte with `other`
    pub fn overlaps(&self, other: TextRange) -> bool {
        self.from < other.to && other.from < self.to
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.from && offset < self.to
    }
}

impl From<std::ops::Range<usize>> for TextRange {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// A text selection with anchor (fixed point) and head (cursor)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub const fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Create a collapsed selection (cursor with no selection)
    pub const fn cursor(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    pub fn from(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn to(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// The selected range, normalized so that `from <= to`
    pub fn range(&self) -> TextRange {
        TextRange::new(self.from(), self.to())
    }

    /// Map both ends through an edit that replaced `removed` with `inserted_len` bytes
    pub fn map_through_edit(&self, removed: TextRange, inserted_len: usize) -> Self {
        Self {
            anchor: map_offset(self.anchor, removed, inserted_len),
            head: map_offset(self.head, removed, inserted_len),
        }
    }
}

/// Map an offset through an edit.
///
/// Offsets before the edit are unchanged, offsets inside the removed range
/// collapse to its start, offsets after it shift by the size delta.
pub fn map_offset(offset: usize, removed: TextRange, inserted_len: usize) -> usize {
    if offset <= removed.from {
        offset
    } else if offset < removed.to {
        removed.from
    } else {
        offset - removed.len() + inserted_len
    }
}
