//! Content-sniffing collaborator
//!
//! Host registries call this with a sample of a file's content to decide
//! whether the lume lexer should be selected for it. It is a boundary
//! heuristic, not part of the tokenization core.

use once_cell::sync::Lazy;
use regex::Regex;

static SHEBANG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A#![^\n]*\blume\b").unwrap());

/// True when the sample starts with a shebang line naming the lume
/// interpreter (directly or via `env`).
pub fn looks_like_lume(sample: &str) -> bool {
    SHEBANG.is_match(sample)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_interpreter_shebangs() {
        assert!(looks_like_lume("#!/usr/bin/lume\nprint(1)\n"));
        assert!(looks_like_lume("#!/usr/bin/env lume\n"));
    }

    #[test]
    fn test_rejects_other_content() {
        assert!(!looks_like_lume("#!/bin/sh\necho hi\n"));
        assert!(!looks_like_lume("print(1)\n"));
        // the marker must be the whole word, not a prefix
        assert!(!looks_like_lume("#!/usr/bin/lumen\n"));
        // a shebang later in the file is not a shebang
        assert!(!looks_like_lume("x = 1\n#!/usr/bin/lume\n"));
    }
}
