//! Built-in name sets for identifier classification
//!
//! The full set is a module-scope constant computed once at startup and
//! never mutated. Per-lexer instances derive an effective set from it by
//! applying the excluded-modules option, so classification is a plain
//! hash-set membership test with no dynamic dispatch.

use crate::lume::config::LexerOptions;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Names that trigger the regex sub-lexer for their string argument.
pub const PATTERN_BUILTINS: &[&str] = &["gsub", "string.gsub"];

/// The complete built-in name set: the basic library plus the standard
/// modules' functions under their dotted names.
pub static BUILTINS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let names: &[&str] = &[
        // basic library
        "assert",
        "collectgarbage",
        "dofile",
        "error",
        "getmetatable",
        "ipairs",
        "load",
        "next",
        "pairs",
        "pcall",
        "print",
        "rawequal",
        "rawget",
        "rawlen",
        "rawset",
        "require",
        "select",
        "setmetatable",
        "tonumber",
        "tostring",
        "type",
        "unpack",
        "xpcall",
        // string
        "string.byte",
        "string.char",
        "string.find",
        "string.format",
        "string.gmatch",
        "string.gsub",
        "string.len",
        "string.lower",
        "string.match",
        "string.rep",
        "string.reverse",
        "string.sub",
        "string.upper",
        // table
        "table.concat",
        "table.insert",
        "table.remove",
        "table.sort",
        "table.unpack",
        // math
        "math.abs",
        "math.ceil",
        "math.floor",
        "math.huge",
        "math.max",
        "math.min",
        "math.pi",
        "math.random",
        "math.sqrt",
        // io
        "io.close",
        "io.lines",
        "io.open",
        "io.read",
        "io.write",
        // os
        "os.clock",
        "os.date",
        "os.getenv",
        "os.time",
        // coroutine
        "coroutine.create",
        "coroutine.resume",
        "coroutine.status",
        "coroutine.wrap",
        "coroutine.yield",
    ];
    names.iter().copied().collect()
});

/// Compute the effective built-in set for one lexer instance by removing
/// every name belonging to an excluded module (the module name itself and
/// all `module.` entries).
pub fn effective_set(options: &LexerOptions) -> HashSet<&'static str> {
    BUILTINS
        .iter()
        .copied()
        .filter(|name| {
            !options.excluded_modules.iter().any(|module| {
                *name == module.as_str()
                    || name
                        .strip_prefix(module.as_str())
                        .is_some_and(|rest| rest.starts_with('.'))
            })
        })
        .collect()
}
