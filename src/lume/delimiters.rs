//! String Context Register
//!
//! Quoted strings in lume close with whichever quote character opened them,
//! so a `"` inside a `'...'` string is plain content. The grammar cannot
//! express that statically; instead every string-opening rule records which
//! delimiter (and prefix) it saw, and the close rule consults the top entry
//! at match time. The register is a stack because interpolated expressions
//! can open further strings inside an already-open one.

/// The delimiter and prefix recorded for one currently-open quoted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenDelimiter {
    /// Whether the string carried the `u` (unicode) prefix
    pub unicode: bool,
    /// The quote character that opened the string and must close it
    pub quote: char,
}

/// Stack of open-string contexts, innermost on top.
///
/// Depth equals the nesting depth of currently-open quoted strings; only the
/// top entry's quote can close the innermost one.
#[derive(Debug, Default)]
pub struct DelimiterStack {
    entries: Vec<OpenDelimiter>,
}

impl DelimiterStack {
    pub fn new() -> Self {
        DelimiterStack::default()
    }

    pub fn push(&mut self, unicode: bool, quote: char) {
        self.entries.push(OpenDelimiter { unicode, quote });
    }

    pub fn top(&self) -> Option<OpenDelimiter> {
        self.entries.last().copied()
    }

    /// Pop the innermost entry. Popping an empty register is a no-op:
    /// over-popping is a grammar defect, not a valid runtime path.
    pub fn pop(&mut self) -> Option<OpenDelimiter> {
        self.entries.pop()
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }
}
