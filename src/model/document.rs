//! Document model - the rope-backed text of one cell

use std::borrow::Cow;

use ropey::Rope;

use super::range::TextRange;
use crate::syntax::LanguageId;

/// Describes one applied edit: `removed` (in pre-edit offsets) was replaced
/// by `inserted_len` bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEdit {
    pub removed: TextRange,
    pub inserted_len: usize,
}

/// Document state - the text buffer and its language
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Language used for parsing
    pub language: LanguageId,
    /// Document revision counter (incremented on each edit)
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a plain-text document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
            language: LanguageId::PlainText,
            revision: 0,
        }
    }

    /// Create a document with initial text in the given language
    pub fn with_language(text: &str, language: LanguageId) -> Self {
        Self {
            language,
            ..Self::with_text(text)
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.buffer.len_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len_bytes() == 0
    }

    /// Get the number of lines in the document
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// The full text as a `String`
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Clamp a byte offset to the document and round it down to a character boundary
    pub fn align_offset(&self, offset: usize) -> usize {
        let offset = offset.min(self.len());
        self.buffer.char_to_byte(self.buffer.byte_to_char(offset))
    }

    /// Clamp and character-align both ends of a range
    pub fn align_range(&self, from: usize, to: usize) -> TextRange {
        let from = self.align_offset(from);
        let to = self.align_offset(to).max(from);
        TextRange::new(from, to)
    }

    /// Text of a byte range. Borrows when the range lies in a single rope chunk.
    pub fn slice(&self, range: TextRange) -> Cow<'_, str> {
        let range = self.align_range(range.from, range.to);
        Cow::from(self.buffer.byte_slice(range.from..range.to))
    }

    /// Byte offset of the start of a line (clamped to the last line)
    pub fn line_start(&self, line: usize) -> usize {
        let line = line.min(self.line_count().saturating_sub(1));
        self.buffer.line_to_byte(line)
    }

    /// Byte offset of the end of a line, excluding its line break
    pub fn line_end(&self, line: usize) -> usize {
        if line + 1 >= self.line_count() {
            return self.len();
        }
        let next = self.buffer.line_to_byte(line + 1);
        let mut end = next;
        if end > 0 && self.buffer.byte(end - 1) == b'\n' {
            end -= 1;
            if end > 0 && self.buffer.byte(end - 1) == b'\r' {
                end -= 1;
            }
        }
        end.max(self.line_start(line))
    }

    /// Line index containing a byte offset
    pub fn line_of_offset(&self, offset: usize) -> usize {
        self.buffer.byte_to_line(self.align_offset(offset))
    }

    /// Convert a byte offset to (line, column), column counted in characters
    pub fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        let offset = self.align_offset(offset);
        let line = self.buffer.byte_to_line(offset);
        let line_start_char = self.buffer.line_to_char(line);
        let column = self.buffer.byte_to_char(offset) - line_start_char;
        (line, column)
    }

    /// Replace a byte range with `text`, returning the applied edit
    pub fn replace(&mut self, range: TextRange, text: &str) -> TextEdit {
        let removed = self.align_range(range.from, range.to);
        let start_char = self.buffer.byte_to_char(removed.from);
        let end_char = self.buffer.byte_to_char(removed.to);
        if end_char > start_char {
            self.buffer.remove(start_char..end_char);
        }
        if !text.is_empty() {
            self.buffer.insert(start_char, text);
        }
        self.revision += 1;
        TextEdit {
            removed,
            inserted_len: text.len(),
        }
    }

    /// Insert text at a byte offset
    pub fn insert(&mut self, offset: usize, text: &str) -> TextEdit {
        self.replace(TextRange::new(offset, offset), text)
    }

    /// Delete a byte range
    pub fn delete(&mut self, range: TextRange) -> TextEdit {
        self.replace(range, "")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
