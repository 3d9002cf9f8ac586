//! The lume rule tables
//!
//! Grammar is data, not code: each state is an ordered list of rules tried
//! in declaration order, so ordering is load-bearing throughout. Within
//! `base`, literals come before operators, multi-character operators before
//! their single-character prefixes (`...` before `..` before `.`), keywords
//! before the identifier catch-all.
//!
//! Rules that cannot be a fixed (pattern, category) pair are computed
//! actions: string opening/closing consults the delimiter register,
//! identifiers are classified against the built-in set, and interpolation
//! bodies re-enter the tokenizer at `base`.

use crate::lume::builtins::PATTERN_BUILTINS;
use crate::lume::engine::{
    Action, ActionFn, Grammar, Matcher, Rule, StateChange, StateId, TokenIter,
};
use crate::lume::token::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

static TABLES: Lazy<Grammar> = Lazy::new(build);

/// The compiled lume grammar, built once per process.
pub fn tables() -> &'static Grammar {
    &TABLES
}

/// Compile a table pattern anchored to the match offset. Rules match at a
/// fixed start position only, never search forward.
fn re(pattern: &str) -> Matcher {
    Matcher::Pattern(Regex::new(&format!(r"\A(?:{pattern})")).unwrap())
}

fn emit(pattern: &str, kind: TokenKind) -> Rule {
    Rule::new(re(pattern), Action::Emit(kind), StateChange::Stay)
}

fn emit_and(pattern: &str, kind: TokenKind, change: StateChange) -> Rule {
    Rule::new(re(pattern), Action::Emit(kind), change)
}

fn groups(pattern: &str, kinds: &'static [TokenKind]) -> Rule {
    Rule::new(re(pattern), Action::EmitGroups(kinds), StateChange::Stay)
}

fn call(pattern: &str, action: ActionFn) -> Rule {
    Rule::new(re(pattern), Action::Call(action), StateChange::Stay)
}

fn scan(scanner: fn(&str) -> Option<usize>, kind: TokenKind) -> Rule {
    Rule::new(Matcher::Scan(scanner), Action::Emit(kind), StateChange::Stay)
}

/// Zero-width rule that always applies: takes the transition without
/// consuming input.
fn fallthrough(change: StateChange) -> Rule {
    Rule::new(Matcher::Empty, Action::Pass, change)
}

const CONTROL_KEYWORDS: &str =
    r"(?:break|continue|do|elseif|else|end|for|goto|if|in|repeat|return|then|until|while)\b";

const DECLARATION_KEYWORDS: &str = r"(?:local|class|trait|impl|pub|static|unsafe|const)\b";

fn build() -> Grammar {
    let mut grammar = Grammar::new();

    grammar.install(
        StateId::Root,
        vec![
            // An optional leading shebang line, then straight into base
            // without consuming anything.
            emit(r"#![^\n]*", TokenKind::CommentPreproc),
            fallthrough(StateChange::Push(StateId::Base)),
        ],
    );

    grammar.install(
        StateId::Base,
        vec![
            // Comments first so `--` never lexes as operators. The long
            // form fails open when unterminated and the line form takes
            // over.
            scan(scan_long_comment, TokenKind::Comment),
            emit(r"--[^\n]*", TokenKind::Comment),
            // Numbers, most specific first so integer doesn't shadow the
            // rest.
            emit(
                r"(?:\d+\.\d*|\.\d+)(?:[eE][+-]?\d+)?|\d+[eE][+-]?\d+",
                TokenKind::NumberFloat,
            ),
            emit(r"0[xX][0-9a-fA-F]+", TokenKind::NumberHex),
            emit(r"0[bB][01]+", TokenKind::NumberBinary),
            emit(r"\d+", TokenKind::NumberInteger),
            // Newlines separate from other whitespace so callers can spot
            // line breaks.
            emit(r"\n+", TokenKind::Whitespace),
            emit(r"[^\S\n]+", TokenKind::Whitespace),
            // Operators, longest first.
            emit(r"\.\.\.", TokenKind::Operator),
            emit(r"\.\.|==|!=|<=|>=|<<|>>", TokenKind::Operator),
            emit(r"[-+*/%^#&|~<>=]", TokenKind::Operator),
            emit(r"[()\[\]{};:,.]", TokenKind::Punctuation),
            emit(r"(?:and|or|not)\b", TokenKind::OperatorWord),
            emit(CONTROL_KEYWORDS, TokenKind::Keyword),
            // function/fn additionally route the following name through the
            // function_name state.
            emit_and(
                r"(?:function|fn)\b",
                TokenKind::KeywordDeclaration,
                StateChange::Push(StateId::FunctionName),
            ),
            emit(DECLARATION_KEYWORDS, TokenKind::KeywordDeclaration),
            emit(r"(?:true|false|nil)\b", TokenKind::KeywordConstant),
            // Quoted strings: record which delimiter opened so the matching
            // close can be chosen dynamically.
            call(r#"u?['"]"#, open_string),
            // Raw strings are matched whole, content taken verbatim.
            scan(scan_raw_string, TokenKind::Str),
            // Identifiers last: everything above is a more specific literal
            // or keyword.
            call(r"[A-Za-z_]\w*(?:\.[A-Za-z_]\w*)?", classify_name),
        ],
    );

    grammar.install(
        StateId::Str,
        vec![
            emit(
                r#"\\(?:[nrt\\'"0]|x[0-9a-fA-F]{2}|u[0-9a-fA-F]{4}|U[0-9a-fA-F]{8}|\d{1,3}|\s)"#,
                TokenKind::StringEscape,
            ),
            emit_and(
                r"\$\{",
                TokenKind::StringInterpol,
                StateChange::Push(StateId::Interp),
            ),
            emit(r#"[^'"\\$]+"#, TokenKind::Str),
            // A lone $ not followed by { is plain content.
            emit(r"\$", TokenKind::Str),
            call(r#"['"]"#, close_string),
        ],
    );

    grammar.install(
        StateId::Interp,
        vec![
            emit_and(
                r"\$\{",
                TokenKind::StringInterpol,
                StateChange::Push(StateId::Interp),
            ),
            emit_and(r"\}", TokenKind::StringInterpol, StateChange::Pop),
            // Embedded expressions get the full base grammar.
            call(r"[^${}]+", embedded_code),
        ],
    );

    grammar.install(
        StateId::FunctionName,
        vec![
            emit(r"\n+", TokenKind::Whitespace),
            emit(r"[^\S\n]+", TokenKind::Whitespace),
            groups(
                r"([A-Za-z_]\w*)(\.)",
                &[TokenKind::NameClass, TokenKind::Punctuation],
            ),
            emit_and(r"[A-Za-z_]\w*", TokenKind::NameFunction, StateChange::Pop),
            // Anonymous function: an immediate ( pops without consuming it.
            fallthrough(StateChange::Pop),
        ],
    );

    grammar.install(
        StateId::Gsub,
        vec![
            emit(r"\n+", TokenKind::Whitespace),
            emit(r"[^\S\n]+", TokenKind::Whitespace),
            emit(r"[(,]", TokenKind::Punctuation),
            emit(r"[A-Za-z_]\w*(?:\.[A-Za-z_]\w*)?", TokenKind::Name),
            call(r#"['"]"#, open_pattern),
            // Anything outside a call head defers back to base.
            fallthrough(StateChange::Pop),
        ],
    );

    grammar.install(
        StateId::Pattern,
        vec![
            emit(r"\\.", TokenKind::StringEscape),
            // Character classes are one token, before the quote rule so a
            // quote inside a class stays literal.
            emit(r"\[\^?[^\]]*\]", TokenKind::StringRegex),
            call(r#"['"]"#, close_pattern),
            emit(r"[\^$]", TokenKind::StringRegex),
            emit(r"\{\d*(?:,\d*)?\}", TokenKind::StringRegex),
            emit(r"[*+?()|.]", TokenKind::StringRegex),
            emit(r#"[^\\\[\]'"^$*+?(){}|.]+"#, TokenKind::Str),
            // Stray ], { or } inside a regex literal is content, not an
            // unrecognized character.
            emit(r"(?s).", TokenKind::Str),
        ],
    );

    grammar.install(
        StateId::PatternFlags,
        vec![
            emit(r"\$[a-zA-Z]+", TokenKind::StringRegex),
            fallthrough(StateChange::Pop),
        ],
    );

    grammar
}

/// Balanced long-bracket comment: `--[` + N `=` + `[`, closed by `]` + the
/// same N `=` + `]`. The nesting level is fixed per comment, so matching the
/// captured equals-run suffices; no separate state is needed. Returns None
/// (fails open) when no matching close exists.
fn scan_long_comment(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if !rest.starts_with("--[") {
        return None;
    }
    let mut i = 3;
    while i < bytes.len() && bytes[i] == b'=' {
        i += 1;
    }
    if i >= bytes.len() || bytes[i] != b'[' {
        return None;
    }
    let level = i - 3;
    let mut j = i + 1;
    while j < bytes.len() {
        if bytes[j] == b']' {
            let mut k = j + 1;
            let mut equals = 0;
            while k < bytes.len() && bytes[k] == b'=' {
                equals += 1;
                k += 1;
            }
            if equals == level && k < bytes.len() && bytes[k] == b']' {
                return Some(k + 1);
            }
        }
        j += 1;
    }
    None
}

/// Raw string: optional `u`, `r`, a fence of N `#`, a quote, verbatim
/// content, the same quote, N `#`. No escape processing. Fails open when
/// unterminated.
fn scan_raw_string(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut i = 0;
    if i < bytes.len() && bytes[i] == b'u' {
        i += 1;
    }
    if i >= bytes.len() || bytes[i] != b'r' {
        return None;
    }
    i += 1;
    let fence_start = i;
    while i < bytes.len() && bytes[i] == b'#' {
        i += 1;
    }
    let fence = i - fence_start;
    if i >= bytes.len() || (bytes[i] != b'"' && bytes[i] != b'\'') {
        return None;
    }
    let quote = bytes[i];
    i += 1;
    while i < bytes.len() {
        if bytes[i] == quote {
            let mut k = i + 1;
            let mut hashes = 0;
            while hashes < fence && k < bytes.len() && bytes[k] == b'#' {
                hashes += 1;
                k += 1;
            }
            if hashes == fence {
                return Some(k);
            }
        }
        i += 1;
    }
    None
}

/// String opener: record the prefix and delimiter on the register, then
/// enter the string state.
fn open_string(run: &mut TokenIter, span: Range<usize>) {
    let text = run.slice(span.clone());
    let unicode = text.starts_with('u');
    let quote = if text.ends_with('\'') { '\'' } else { '"' };
    run.delimiters.push(unicode, quote);
    run.emit(TokenKind::Str, span);
    run.push_state(StateId::Str);
}

/// A quote met inside a string closes it only when it matches the register's
/// top delimiter; the other quote character is ordinary content.
fn close_string(run: &mut TokenIter, span: Range<usize>) {
    let quote = if run.slice(span.clone()) == "'" { '\'' } else { '"' };
    match run.delimiters.top() {
        Some(open) if open.quote != quote => run.emit(TokenKind::Str, span),
        other => {
            if other.is_some() {
                run.delimiters.pop();
            }
            run.emit(TokenKind::Str, span);
            run.pop_state();
        }
    }
}

/// Interpolation body: re-tokenized with the full base grammar.
fn embedded_code(run: &mut TokenIter, span: Range<usize>) {
    run.subtokenize(span);
}

/// Quote inside a gsub call head: the string argument is a regex literal.
fn open_pattern(run: &mut TokenIter, span: Range<usize>) {
    let quote = if run.slice(span.clone()) == "'" { '\'' } else { '"' };
    run.delimiters.push(false, quote);
    run.emit(TokenKind::Str, span);
    run.goto_state(StateId::Pattern);
}

/// Quote inside a regex literal: closes it when it matches the opener,
/// otherwise stays literal content.
fn close_pattern(run: &mut TokenIter, span: Range<usize>) {
    let quote = if run.slice(span.clone()) == "'" { '\'' } else { '"' };
    match run.delimiters.top() {
        Some(open) if open.quote == quote => {
            run.delimiters.pop();
            run.emit(TokenKind::Str, span);
            run.goto_state(StateId::PatternFlags);
        }
        _ => run.emit(TokenKind::Str, span),
    }
}

/// Identifier classification, in order: pattern-substitution builtin (enters
/// the regex sub-lexer), general builtin (one token, dotted names stay
/// whole), dotted member access (three tokens), plain name.
fn classify_name(run: &mut TokenIter, span: Range<usize>) {
    let text = run.slice(span.clone());
    if run.highlight_builtins() {
        // The qualified pattern builtin must also survive module exclusion.
        if PATTERN_BUILTINS.contains(&text) && (!text.contains('.') || run.is_builtin(text)) {
            run.emit(TokenKind::NameBuiltin, span);
            run.push_state(StateId::Gsub);
            return;
        }
        if run.is_builtin(text) {
            run.emit(TokenKind::NameBuiltin, span);
            return;
        }
    }
    if let Some(dot) = text.find('.') {
        let start = span.start;
        run.emit(TokenKind::Name, start..start + dot);
        run.emit(TokenKind::Punctuation, start + dot..start + dot + 1);
        run.emit(TokenKind::Name, start + dot + 1..span.end);
        return;
    }
    run.emit(TokenKind::Name, span);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lume::engine::Lexer;
    use crate::lume::token::Token;

    fn lex(source: &str) -> Vec<Token<'_>> {
        Lexer::default().tokenize(source).collect()
    }

    fn kinds(source: &str) -> Vec<(TokenKind, &str)> {
        lex(source).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    fn non_space(source: &str) -> Vec<(TokenKind, &str)> {
        kinds(source)
            .into_iter()
            .filter(|(k, _)| *k != TokenKind::Whitespace)
            .collect()
    }

    #[test]
    fn test_shebang_is_a_single_preproc_comment() {
        let tokens = kinds("#!/usr/bin/env lume\nprint");
        assert_eq!(
            tokens[0],
            (TokenKind::CommentPreproc, "#!/usr/bin/env lume")
        );
        assert_eq!(tokens[1], (TokenKind::Whitespace, "\n"));
    }

    #[test]
    fn test_line_comment_runs_to_end_of_line() {
        let tokens = kinds("-- note\nx");
        assert_eq!(tokens[0], (TokenKind::Comment, "-- note"));
        assert_eq!(tokens[2], (TokenKind::Name, "x"));
    }

    #[test]
    fn test_long_comment_matches_equals_count() {
        // the inner ]=] must not close a level-2 comment
        let input = "--[==[ a ]=] still comment ]==]";
        let tokens = kinds(input);
        assert_eq!(tokens, vec![(TokenKind::Comment, input)]);
    }

    #[test]
    fn test_unterminated_long_comment_fails_open_to_line_comment() {
        let tokens = kinds("--[==[ never closed\nx");
        assert_eq!(tokens[0], (TokenKind::Comment, "--[==[ never closed"));
        assert_eq!(tokens[2], (TokenKind::Name, "x"));
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(kinds("42")[0], (TokenKind::NumberInteger, "42"));
        assert_eq!(kinds("1.5")[0], (TokenKind::NumberFloat, "1.5"));
        assert_eq!(kinds(".5")[0], (TokenKind::NumberFloat, ".5"));
        assert_eq!(kinds("1e10")[0], (TokenKind::NumberFloat, "1e10"));
        assert_eq!(kinds("1.5e-3")[0], (TokenKind::NumberFloat, "1.5e-3"));
        assert_eq!(kinds("0xFF")[0], (TokenKind::NumberHex, "0xFF"));
        assert_eq!(kinds("0b101")[0], (TokenKind::NumberBinary, "0b101"));
    }

    #[test]
    fn test_keyword_classes() {
        assert_eq!(non_space("while")[0], (TokenKind::Keyword, "while"));
        assert_eq!(
            non_space("local")[0],
            (TokenKind::KeywordDeclaration, "local")
        );
        assert_eq!(non_space("nil")[0], (TokenKind::KeywordConstant, "nil"));
        assert_eq!(non_space("and")[0], (TokenKind::OperatorWord, "and"));
    }

    #[test]
    fn test_keyword_prefix_does_not_shadow_identifier() {
        assert_eq!(non_space("iffy")[0], (TokenKind::Name, "iffy"));
        assert_eq!(non_space("nothing")[0], (TokenKind::Name, "nothing"));
        assert_eq!(non_space("elseif")[0], (TokenKind::Keyword, "elseif"));
    }

    #[test]
    fn test_named_function_declaration() {
        let tokens = non_space("function render()");
        assert_eq!(tokens[0], (TokenKind::KeywordDeclaration, "function"));
        assert_eq!(tokens[1], (TokenKind::NameFunction, "render"));
        assert_eq!(tokens[2], (TokenKind::Punctuation, "("));
    }

    #[test]
    fn test_method_declaration_with_class_prefix() {
        let tokens = non_space("fn Sprite.draw()");
        assert_eq!(tokens[0], (TokenKind::KeywordDeclaration, "fn"));
        assert_eq!(tokens[1], (TokenKind::NameClass, "Sprite"));
        assert_eq!(tokens[2], (TokenKind::Punctuation, "."));
        assert_eq!(tokens[3], (TokenKind::NameFunction, "draw"));
    }

    #[test]
    fn test_anonymous_function_defers_the_paren_to_base() {
        let tokens = non_space("local f = fn() end");
        assert_eq!(tokens[3], (TokenKind::KeywordDeclaration, "fn"));
        assert_eq!(tokens[4], (TokenKind::Punctuation, "("));
        assert_eq!(tokens[5], (TokenKind::Punctuation, ")"));
        assert_eq!(tokens[6], (TokenKind::Keyword, "end"));
    }

    #[test]
    fn test_string_escapes() {
        let tokens = kinds(r#""a\n\x41A\250\ b""#);
        assert_eq!(tokens[0], (TokenKind::Str, "\""));
        assert_eq!(tokens[1], (TokenKind::Str, "a"));
        assert_eq!(tokens[2], (TokenKind::StringEscape, r"\n"));
        assert_eq!(tokens[3], (TokenKind::StringEscape, r"\x41"));
        assert_eq!(tokens[4], (TokenKind::Str, "A"));
        assert_eq!(tokens[5], (TokenKind::StringEscape, r"\250"));
        assert_eq!(tokens[6], (TokenKind::StringEscape, r"\ "));
        assert_eq!(tokens[7], (TokenKind::Str, "b"));
        assert_eq!(tokens[8], (TokenKind::Str, "\""));
    }

    #[test]
    fn test_other_quote_is_plain_content() {
        let tokens = kinds(r#"'it is a "test"'"#);
        // every fragment between the outer quotes is string content
        assert!(tokens.iter().all(|(k, _)| *k == TokenKind::Str));
        assert_eq!(tokens.first(), Some(&(TokenKind::Str, "'")));
        assert_eq!(tokens.last(), Some(&(TokenKind::Str, "'")));
        // the inner double quotes did not open a nested string
        assert_eq!(
            tokens.iter().filter(|(_, t)| *t == "\"").count(),
            2,
            "inner quotes stay content"
        );
    }

    #[test]
    fn test_unicode_prefix_string() {
        let tokens = kinds("u'héllo'");
        assert_eq!(tokens[0], (TokenKind::Str, "u'"));
        assert_eq!(tokens[1], (TokenKind::Str, "héllo"));
        assert_eq!(tokens[2], (TokenKind::Str, "'"));
    }

    #[test]
    fn test_interpolated_expression_gets_full_grammar() {
        let tokens = kinds(r#""x = ${1+2}""#);
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Str, "\""),
                (TokenKind::Str, "x = "),
                (TokenKind::StringInterpol, "${"),
                (TokenKind::NumberInteger, "1"),
                (TokenKind::Operator, "+"),
                (TokenKind::NumberInteger, "2"),
                (TokenKind::StringInterpol, "}"),
                (TokenKind::Str, "\""),
            ]
        );
    }

    #[test]
    fn test_interpolation_nests() {
        let tokens = kinds(r#""${a${b}}""#);
        let markers: Vec<_> = tokens
            .iter()
            .filter(|(k, _)| *k == TokenKind::StringInterpol)
            .map(|(_, t)| *t)
            .collect();
        assert_eq!(markers, vec!["${", "${", "}", "}"]);
    }

    #[test]
    fn test_raw_string_is_verbatim() {
        let tokens = kinds(r#"r"no \n escapes""#);
        assert_eq!(tokens[0], (TokenKind::Str, r#"r"no \n escapes""#));
    }

    #[test]
    fn test_fenced_raw_string_needs_matching_fence() {
        let input = r##"r#"embedded " quote"#"##;
        let tokens = kinds(input);
        assert_eq!(tokens[0], (TokenKind::Str, input));
    }

    #[test]
    fn test_unicode_raw_string() {
        let tokens = kinds("ur'verbatim'");
        assert_eq!(tokens[0], (TokenKind::Str, "ur'verbatim'"));
    }

    #[test]
    fn test_builtin_names() {
        assert_eq!(non_space("print")[0], (TokenKind::NameBuiltin, "print"));
        // dotted builtins stay one token
        assert_eq!(
            non_space("string.format")[0],
            (TokenKind::NameBuiltin, "string.format")
        );
    }

    #[test]
    fn test_member_access_splits_into_three_tokens() {
        let tokens = non_space("foo.bar");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Name, "foo"),
                (TokenKind::Punctuation, "."),
                (TokenKind::Name, "bar"),
            ]
        );
    }

    #[test]
    fn test_gsub_argument_is_a_regex_literal() {
        let tokens = non_space(r#"gsub(s, "a[bc]+$", r)"#);
        assert_eq!(tokens[0], (TokenKind::NameBuiltin, "gsub"));
        assert_eq!(tokens[1], (TokenKind::Punctuation, "("));
        assert_eq!(tokens[2], (TokenKind::Name, "s"));
        assert_eq!(tokens[3], (TokenKind::Punctuation, ","));
        assert_eq!(tokens[4], (TokenKind::Str, "\""));
        assert_eq!(tokens[5], (TokenKind::Str, "a"));
        assert_eq!(tokens[6], (TokenKind::StringRegex, "[bc]"));
        assert_eq!(tokens[7], (TokenKind::StringRegex, "+"));
        assert_eq!(tokens[8], (TokenKind::StringRegex, "$"));
        assert_eq!(tokens[9], (TokenKind::Str, "\""));
        // replacement argument is ordinary base grammar again
        assert_eq!(tokens[10], (TokenKind::Punctuation, ","));
        assert_eq!(tokens[11], (TokenKind::Name, "r"));
    }

    #[test]
    fn test_qualified_gsub_also_dispatches() {
        let tokens = non_space(r#"string.gsub(s, "x+", "y")"#);
        assert_eq!(tokens[0], (TokenKind::NameBuiltin, "string.gsub"));
        assert!(tokens
            .iter()
            .any(|(k, t)| *k == TokenKind::StringRegex && *t == "+"));
    }

    #[test]
    fn test_regex_escape_and_flags() {
        let tokens = non_space(r#"gsub(s, "\d{2,3}"$g, r)"#);
        assert!(tokens
            .iter()
            .any(|(k, t)| *k == TokenKind::StringEscape && *t == r"\d"));
        assert!(tokens
            .iter()
            .any(|(k, t)| *k == TokenKind::StringRegex && *t == "{2,3}"));
        assert!(tokens
            .iter()
            .any(|(k, t)| *k == TokenKind::StringRegex && *t == "$g"));
    }

    #[test]
    fn test_gsub_without_a_call_falls_back_quickly() {
        let tokens = non_space("x = gsub + 1");
        assert_eq!(tokens[2], (TokenKind::NameBuiltin, "gsub"));
        assert_eq!(tokens[3], (TokenKind::Operator, "+"));
        assert_eq!(tokens[4], (TokenKind::NumberInteger, "1"));
    }

    #[test]
    fn test_excluded_module_demotes_builtins() {
        use crate::lume::config::LexerOptions;
        let lexer = Lexer::new(LexerOptions {
            excluded_modules: vec!["string".to_string()],
            ..LexerOptions::default()
        });
        let tokens: Vec<_> = lexer
            .tokenize("string.format")
            .filter(|t| t.kind != TokenKind::Whitespace)
            .map(|t| (t.kind, t.text))
            .collect();
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Name, "string"),
                (TokenKind::Punctuation, "."),
                (TokenKind::Name, "format"),
            ]
        );
    }

    #[test]
    fn test_builtin_highlighting_can_be_disabled() {
        use crate::lume::config::LexerOptions;
        let lexer = Lexer::new(LexerOptions {
            highlight_builtins: false,
            ..LexerOptions::default()
        });
        let tokens: Vec<_> = lexer.tokenize("print").collect();
        assert_eq!(tokens[0].kind, TokenKind::Name);
    }

    #[test]
    fn test_long_bracket_comment_wins_over_punctuation() {
        let tokens = kinds("--[[ c ]] x");
        assert_eq!(tokens[0], (TokenKind::Comment, "--[[ c ]]"));
    }
}
