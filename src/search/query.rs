//! Search queries: raw find/replace parameters compiled into a matcher
//!
//! Both plain-text and regex searches compile down to a `regex::Regex`
//! (plain text is escaped first), so case folding and byte offsets behave
//! the same in both modes. A regex that fails to compile does not produce an
//! error: the query is built anyway and reports `is_valid() == false`.

use regex::{Captures, Regex, RegexBuilder};

use crate::model::find_replace::FindReplaceState;
use crate::model::range::TextRange;
use crate::util::text::{
    ceil_char_boundary, char_len_at, floor_char_boundary, is_whole_word, unquote,
};

/// Uncompiled search parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSpec {
    /// Text (or pattern) to search for. Empty means "no active search".
    pub search: String,
    /// Case-sensitive matching
    pub case_sensitive: bool,
    /// Interpret `search` as a regular expression
    pub regexp: bool,
    /// Replacement text
    pub replace: String,
    /// Only match whole words
    pub whole_word: bool,
    /// Disable `\n`, `\r`, `\t`, `\\` escape handling for plain-text searches
    pub literal: bool,
}

impl SearchSpec {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..Self::default()
        }
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }

    pub fn regexp(mut self, value: bool) -> Self {
        self.regexp = value;
        self
    }

    pub fn whole_word(mut self, value: bool) -> Self {
        self.whole_word = value;
        self
    }

    pub fn literal(mut self, value: bool) -> Self {
        self.literal = value;
        self
    }

    pub fn replace(mut self, value: impl Into<String>) -> Self {
        self.replace = value.into();
        self
    }
}

impl From<&FindReplaceState> for SearchSpec {
    fn from(state: &FindReplaceState) -> Self {
        Self {
            search: state.find_text.clone(),
            case_sensitive: state.case_sensitive,
            regexp: state.regexp,
            replace: state.replace_text.clone(),
            whole_word: state.whole_word,
            literal: state.literal,
        }
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    /// Empty search text: valid, matches nothing
    Inactive,
    /// Pattern failed to compile
    Invalid(String),
    Pattern(Regex),
}

/// A compiled, immutable search query
#[derive(Debug, Clone)]
pub struct SearchQuery {
    spec: SearchSpec,
    matcher: Matcher,
    /// Replace text after escape handling
    replace: String,
}

impl SearchQuery {
    /// Compile a spec. Never fails; check [`SearchQuery::is_valid`].
    pub fn build(spec: SearchSpec) -> Self {
        let replace = if spec.literal {
            spec.replace.clone()
        } else {
            unquote(&spec.replace)
        };

        let matcher = if spec.search.is_empty() {
            Matcher::Inactive
        } else {
            let pattern = if spec.regexp {
                spec.search.clone()
            } else if spec.literal {
                regex::escape(&spec.search)
            } else {
                regex::escape(&unquote(&spec.search))
            };

            match RegexBuilder::new(&pattern)
                .case_insensitive(!spec.case_sensitive)
                .multi_line(true)
                .build()
            {
                Ok(regex) => Matcher::Pattern(regex),
                Err(e) => {
                    tracing::debug!("Invalid search pattern {:?}: {}", spec.search, e);
                    Matcher::Invalid(e.to_string())
                }
            }
        };

        Self {
            spec,
            matcher,
            replace,
        }
    }

    /// The query that matches nothing
    pub fn empty() -> Self {
        Self::build(SearchSpec::default())
    }

    pub fn spec(&self) -> &SearchSpec {
        &self.spec
    }

    /// False only when a regex pattern failed to compile
    pub fn is_valid(&self) -> bool {
        !matches!(self.matcher, Matcher::Invalid(_))
    }

    /// True when the query is valid and has something to search for
    pub fn is_active(&self) -> bool {
        matches!(self.matcher, Matcher::Pattern(_))
    }

    /// Compile error for invalid queries
    pub fn error(&self) -> Option<&str> {
        match &self.matcher {
            Matcher::Invalid(message) => Some(message),
            _ => None,
        }
    }

    /// Bytes to read past each scan range. A plain needle is never cut short
    /// by a margin smaller than itself.
    pub fn scan_padding(&self, margin: usize) -> usize {
        if self.spec.regexp {
            margin
        } else {
            margin.max(self.spec.search.len())
        }
    }

    /// Report every match starting inside `[from, to)`, in ascending order,
    /// without overlaps. A match may end past `to`.
    pub fn for_each_match<F>(&self, text: &str, from: usize, to: usize, mut f: F)
    where
        F: FnMut(usize, usize),
    {
        let Matcher::Pattern(regex) = &self.matcher else {
            return;
        };

        let to = floor_char_boundary(text, to);
        let mut pos = ceil_char_boundary(text, from);
        while pos < to {
            let Some(m) = regex.find_at(text, pos) else {
                break;
            };
            if m.start() >= to {
                break;
            }
            if m.is_empty() || (self.spec.whole_word && !is_whole_word(text, m.start(), m.end()))
            {
                pos = m.start() + char_len_at(text, m.start());
                continue;
            }
            f(m.start(), m.end());
            pos = m.end();
        }
    }

    /// Collect the matches starting inside `[from, to)`
    pub fn matches(&self, text: &str, from: usize, to: usize) -> Vec<TextRange> {
        let mut found = Vec::new();
        self.for_each_match(text, from, to, |start, end| {
            found.push(TextRange::new(start, end))
        });
        found
    }

    /// Replacement text for the match at `range`.
    ///
    /// Regex queries expand `$$`, `$&` and `$1`..`$9`; anything else after a
    /// `$` is kept as typed. Returns `None` if the query is not active or
    /// `range` is not a match of this query.
    pub fn replacement(&self, text: &str, range: TextRange) -> Option<String> {
        let Matcher::Pattern(regex) = &self.matcher else {
            return None;
        };
        if range.to > text.len() || !text.is_char_boundary(range.from) {
            return None;
        }
        let caps = regex.captures_at(text, range.from)?;
        let whole = caps.get(0)?;
        if whole.start() != range.from || whole.end() != range.to {
            return None;
        }

        if self.spec.regexp {
            Some(expand_replacement(&self.replace, &caps))
        } else {
            Some(self.replace.clone())
        }
    }
}

impl PartialEq for SearchQuery {
    /// Queries compare by the spec they were built from
    fn eq(&self, other: &Self) -> bool {
        self.spec == other.spec
    }
}

fn expand_replacement(template: &str, caps: &Captures) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '$' {
            out.push(ch);
            continue;
        }
        match chars.peek().copied() {
            Some('$') => {
                chars.next();
                out.push('$');
            }
            Some('&') => {
                chars.next();
                out.push_str(caps.get(0).map_or("", |m| m.as_str()));
            }
            Some(d @ '1'..='9') if (d as usize - '0' as usize) < caps.len() => {
                chars.next();
                let group = d as usize - '0' as usize;
                out.push_str(caps.get(group).map_or("", |m| m.as_str()));
            }
            _ => out.push('$'),
        }
    }
    out
}
