//! # lume
//!
//! A syntax-highlighting lexer for the lume language: it converts raw source
//! text into a linear sequence of classified tokens for highlighting or
//! tooling.
//!
//! The core is a stateful pattern-matching engine (see [lume::engine]): a
//! stack of named lexer states, each an ordered rule table, which handles
//! the context-sensitive constructs a flat tokenizer cannot — balanced
//! long-bracket comments, strings whose close depends on which quote opened
//! them, `${...}` interpolation that re-enters the full grammar, and regex
//! literals inside pattern-substitution calls.
//!
//! Tokenization is total: it always terminates, never fails, and the token
//! texts concatenate back to the input exactly.

pub mod lume;

pub use crate::lume::{tokenize, Lexer, LexerOptions, Token, TokenKind};
