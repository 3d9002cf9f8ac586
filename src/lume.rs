//! Main module for the lume lexer

pub mod builtins;
pub mod config;
pub mod delimiters;
pub mod detect;
pub mod engine;
pub mod grammar;
pub mod metadata;
pub mod token;

pub use config::LexerOptions;
pub use engine::{Lexer, TokenIter};
pub use token::{Token, TokenKind};

/// Tokenize one document with default options, collecting the stream.
///
/// The tokens borrow from `source`; concatenating their texts reproduces it
/// exactly. For non-default options or lazy consumption, construct a
/// [`Lexer`] and call [`Lexer::tokenize`].
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let lexer = Lexer::default();
    lexer.tokenize(source).collect()
}
