//! Token types produced by the lume lexer
//!
//! A token is a classified, contiguous span of the source text. Tokens borrow
//! from the input, are emitted in input order, and concatenating their texts
//! reproduces the input exactly: whitespace, comments and even unrecognized
//! characters are tokens too. This losslessness is what lets downstream
//! highlighters render a file without a separate copy of the source.

use serde::Serialize;

/// The closed classification taxonomy for lume tokens.
///
/// The sub-classified variants (declaration keywords, escape sequences inside
/// strings, regex metacharacters, ...) exist so highlighters can style them
/// independently; a consumer that doesn't care can treat them as their base
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Line comments and balanced long-bracket comments
    Comment,
    /// The shebang line
    CommentPreproc,
    /// Control-flow keywords (`if`, `while`, `return`, ...)
    Keyword,
    /// Declaration keywords (`local`, `function`, `class`, ...)
    KeywordDeclaration,
    /// `true`, `false`, `nil`
    KeywordConstant,
    /// Symbolic operators (`+`, `==`, `..`, `...`)
    Operator,
    /// Word operators: `and`, `or`, `not`
    OperatorWord,
    /// Brackets, separators, and the member-access dot
    Punctuation,
    NumberInteger,
    NumberFloat,
    NumberHex,
    NumberBinary,
    /// Quoted-string delimiters and plain string content
    Str,
    /// An escape sequence inside a quoted string
    StringEscape,
    /// The `${` / `}` markers delimiting an interpolated expression
    StringInterpol,
    /// A metacharacter inside a regex literal argument
    StringRegex,
    Name,
    NameBuiltin,
    NameClass,
    NameFunction,
    /// Newline runs and other whitespace runs (emitted as separate tokens)
    Whitespace,
    /// A character no rule in the current state recognized
    Error,
}

/// A classified span of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Token { kind, text }
    }

    /// Check if this token is a comment of either form
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::Comment | TokenKind::CommentPreproc)
    }

    /// Check if this token is whitespace
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    /// Check if this token is a line break (a whitespace token made of newlines)
    pub fn is_newline(&self) -> bool {
        self.kind == TokenKind::Whitespace && self.text.bytes().all(|b| b == b'\n')
    }

    /// Check if this token is any string fragment (content, escape, regex, marker)
    pub fn is_string_fragment(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::Str
                | TokenKind::StringEscape
                | TokenKind::StringInterpol
                | TokenKind::StringRegex
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_predicate() {
        assert!(Token::new(TokenKind::Comment, "-- hi").is_comment());
        assert!(Token::new(TokenKind::CommentPreproc, "#!/usr/bin/lume").is_comment());
        assert!(!Token::new(TokenKind::Name, "hi").is_comment());
    }

    #[test]
    fn test_newline_predicate() {
        assert!(Token::new(TokenKind::Whitespace, "\n").is_newline());
        assert!(Token::new(TokenKind::Whitespace, "\n\n").is_newline());
        assert!(!Token::new(TokenKind::Whitespace, "  ").is_newline());
        assert!(!Token::new(TokenKind::Name, "\n").is_newline());
    }

    #[test]
    fn test_string_fragment_predicate() {
        assert!(Token::new(TokenKind::Str, "\"").is_string_fragment());
        assert!(Token::new(TokenKind::StringEscape, "\\n").is_string_fragment());
        assert!(Token::new(TokenKind::StringInterpol, "${").is_string_fragment());
        assert!(Token::new(TokenKind::StringRegex, "[a-z]").is_string_fragment());
        assert!(!Token::new(TokenKind::Operator, "+").is_string_fragment());
    }

    #[test]
    fn test_serializes_kind_as_kebab_case() {
        let json = serde_json::to_string(&Token::new(TokenKind::NameBuiltin, "print")).unwrap();
        assert_eq!(json, r#"{"kind":"name-builtin","text":"print"}"#);
    }
}
