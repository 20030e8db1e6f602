//! Plain-text rendering of an editor's visible lines with match markers
//!
//! Plain matches are wrapped in `[..]`, the selected match in `[[..]]`.
//! Hidden fold bodies are shown as a single `...` line.

use std::fmt::Write;

use crate::highlight::MatchStyle;
use crate::model::editor::EditorState;

const FOLD_MARKER: &str = "     ...";

fn open_marker(style: MatchStyle) -> &'static str {
    match style {
        MatchStyle::Plain => "[",
        MatchStyle::Selected => "[[",
    }
}

fn close_marker(style: MatchStyle) -> &'static str {
    match style {
        MatchStyle::Plain => "]",
        MatchStyle::Selected => "]]",
    }
}

/// Render the visible lines of `editor`, one output line per document line,
/// prefixed with 1-based line numbers
pub fn render_visible(editor: &EditorState) -> String {
    let document = editor.document();
    let decorations = editor.decorations();
    let mut out = String::new();

    for (i, range) in editor.visible_ranges().iter().enumerate() {
        if i > 0 {
            out.push_str(FOLD_MARKER);
            out.push('\n');
        }

        let first_line = document.line_of_offset(range.from);
        let last_line = document.line_of_offset(range.to);
        for line in first_line..=last_line {
            let start = document.line_start(line);
            let end = document.line_end(line);
            let text = document.slice((start..end).into());

            let mut marked = String::with_capacity(text.len());
            let mut cursor = 0;
            for deco in decorations.in_range(start, end) {
                let from = deco.from.max(start) - start;
                let to = deco.to.min(end) - start;
                marked.push_str(&text[cursor..from]);
                if deco.from >= start {
                    marked.push_str(open_marker(deco.style));
                }
                marked.push_str(&text[from..to]);
                if deco.to <= end {
                    marked.push_str(close_marker(deco.style));
                }
                cursor = to;
            }
            marked.push_str(&text[cursor..]);

            let _ = writeln!(out, "{:>4} | {}", line + 1, marked);
        }
    }
    out
}
