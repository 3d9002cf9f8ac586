//! Registration metadata consumed by host registries
//!
//! Purely descriptive: display name, file associations, MIME types. Nothing
//! here affects tokenization.

use serde::Serialize;

/// Static descriptor for one registered lexer.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LexerMetadata {
    pub name: &'static str,
    pub description: &'static str,
    /// Canonical tag hosts use to request this lexer by name
    pub tag: &'static str,
    pub extensions: &'static [&'static str],
    pub mime_types: &'static [&'static str],
}

pub const LEXER: LexerMetadata = LexerMetadata {
    name: "Lume",
    description: "A small curly/Lua-family scripting language",
    tag: "lume",
    extensions: &[".lume", ".lu"],
    mime_types: &["text/x-lume"],
};
