//! Lexer configuration surface
//!
//! Two options are consumed from the host: whether built-in function names
//! receive special classification at all, and which built-in modules to
//! exclude from the set. The options struct deserializes from JSON so hosts
//! can carry it in their own configuration files.

use serde::{Deserialize, Serialize};

/// User-facing options honored by identifier classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerOptions {
    /// Classify known built-in function names as `NameBuiltin` (default true)
    pub highlight_builtins: bool,
    /// Built-in module names whose functions are excluded from the built-in set
    pub excluded_modules: Vec<String>,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            highlight_builtins: true,
            excluded_modules: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = LexerOptions::default();
        assert!(options.highlight_builtins);
        assert!(options.excluded_modules.is_empty());
    }

    #[test]
    fn test_deserializes_with_missing_fields() {
        let options: LexerOptions = serde_json::from_str(r#"{}"#).unwrap();
        assert!(options.highlight_builtins);

        let options: LexerOptions =
            serde_json::from_str(r#"{"excluded_modules": ["io", "os"]}"#).unwrap();
        assert!(options.highlight_builtins);
        assert_eq!(options.excluded_modules, vec!["io", "os"]);
    }
}
