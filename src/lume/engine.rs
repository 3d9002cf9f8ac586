//! Stateful pattern-matching engine
//!
//! The engine is a stack of named lexer states, each holding an ordered list
//! of match rules. Rules are data, not code: the driver tries the current
//! state's rules in declaration order against the input at the current
//! offset, and the first match wins. A matching rule emits zero or more
//! tokens and may push, pop, or replace the active state; computed actions
//! additionally inspect the matched text and decide at match time (delimiter
//! dispatch, builtin classification, interpolation re-entry).
//!
//! Guarantees, regardless of input:
//!
//! 1. Coverage: emitted token texts concatenate back to the input exactly.
//! 2. Termination: when no rule matches, one `Error` token is emitted for
//!    the next character and the offset advances past it. Zero-length
//!    matches are honored only when they transition state.
//! 3. No failure mode: unterminated constructs simply reach end of input
//!    with states still pushed; iteration ends there.

use crate::lume::builtins;
use crate::lume::config::LexerOptions;
use crate::lume::delimiters::DelimiterStack;
use crate::lume::grammar;
use crate::lume::token::{Token, TokenKind};
use regex::Regex;
use std::collections::{HashSet, VecDeque};
use std::ops::Range;

/// Identifies one named lexer state. Doubles as the index into the grammar's
/// rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateId {
    /// Initial state: optional shebang, then hands over to `Base`
    Root,
    /// The bulk of the grammar; active for the rest of the file
    Base,
    /// Inside a quoted string
    Str,
    /// Inside a `${...}` interpolation region
    Interp,
    /// After a `function`/`fn` keyword
    FunctionName,
    /// Scanning a pattern-substitution call head for its string argument
    Gsub,
    /// Inside a regex literal argument
    Pattern,
    /// Trailing `$`-flags after a regex literal
    PatternFlags,
}

pub const STATE_COUNT: usize = 8;

/// A computed rule action: inspects the match and drives the run directly.
pub type ActionFn = for<'l, 's> fn(&mut TokenIter<'l, 's>, Range<usize>);

/// How a rule recognizes input at the current offset. Patterns match at the
/// offset only (anchored), never search forward.
pub enum Matcher {
    /// An anchored regular expression
    Pattern(Regex),
    /// A hand-rolled scanner returning the match length, for constructs the
    /// regex crate cannot express (backreference-shaped delimiters)
    Scan(fn(&str) -> Option<usize>),
    /// Always matches with zero width; the `default` device for states that
    /// fall through without consuming input
    Empty,
}

/// What a matching rule does with the matched text.
pub enum Action {
    /// Emit nothing (pure state transition)
    Pass,
    /// Emit the whole match as one token
    Emit(TokenKind),
    /// Emit each capture group as its own token, mapped positionally
    EmitGroups(&'static [TokenKind]),
    /// Computed action with full access to the run
    Call(ActionFn),
}

/// State-stack transition applied after the rule's action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Stay,
    Push(StateId),
    Pop,
    Goto(StateId),
}

/// One immutable pattern + action pairing.
pub struct Rule {
    pub matcher: Matcher,
    pub action: Action,
    pub change: StateChange,
}

impl Rule {
    pub fn new(matcher: Matcher, action: Action, change: StateChange) -> Self {
        Rule {
            matcher,
            action,
            change,
        }
    }
}

/// The complete rule tables for a language, indexed by [`StateId`].
pub struct Grammar {
    tables: Vec<Vec<Rule>>,
}

impl Grammar {
    pub fn new() -> Self {
        Grammar {
            tables: (0..STATE_COUNT).map(|_| Vec::new()).collect(),
        }
    }

    pub fn install(&mut self, id: StateId, rules: Vec<Rule>) {
        self.tables[id as usize] = rules;
    }

    pub fn rules(&self, id: StateId) -> &[Rule] {
        &self.tables[id as usize]
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Grammar::new()
    }
}

/// A configured lume lexer. Cheap to construct; reusable across documents;
/// independent instances tokenize in parallel with no coordination.
pub struct Lexer {
    options: LexerOptions,
    builtins: HashSet<&'static str>,
}

impl Lexer {
    pub fn new(options: LexerOptions) -> Self {
        let builtins = builtins::effective_set(&options);
        Lexer { options, builtins }
    }

    /// Lazily tokenize one document. The iterator owns all per-run state
    /// (state stack, string context register); dropping it early leaks
    /// nothing.
    pub fn tokenize<'l, 's>(&'l self, source: &'s str) -> TokenIter<'l, 's> {
        TokenIter::seeded(self, source, StateId::Root)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new(LexerOptions::default())
    }
}

/// The driver: a lazy token iterator over one document.
pub struct TokenIter<'l, 's> {
    lexer: &'l Lexer,
    source: &'s str,
    pos: usize,
    stack: Vec<StateId>,
    pub(crate) delimiters: DelimiterStack,
    queue: VecDeque<Token<'s>>,
}

impl<'l, 's> TokenIter<'l, 's> {
    fn seeded(lexer: &'l Lexer, source: &'s str, start: StateId) -> Self {
        TokenIter {
            lexer,
            source,
            pos: 0,
            stack: vec![start],
            delimiters: DelimiterStack::new(),
            queue: VecDeque::new(),
        }
    }

    /// The matched text for a span, borrowed from the input.
    pub(crate) fn slice(&self, span: Range<usize>) -> &'s str {
        &self.source[span]
    }

    pub(crate) fn emit(&mut self, kind: TokenKind, span: Range<usize>) {
        if span.start < span.end {
            let text = &self.source[span];
            self.queue.push_back(Token::new(kind, text));
        }
    }

    pub(crate) fn push_state(&mut self, id: StateId) {
        self.stack.push(id);
    }

    /// Pop the current state. The bottom frame is never popped; over-popping
    /// is a grammar defect and degrades to a no-op.
    pub(crate) fn pop_state(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    pub(crate) fn goto_state(&mut self, id: StateId) {
        if let Some(top) = self.stack.last_mut() {
            *top = id;
        }
    }

    pub(crate) fn highlight_builtins(&self) -> bool {
        self.lexer.options.highlight_builtins
    }

    pub(crate) fn is_builtin(&self, name: &str) -> bool {
        self.lexer.builtins.contains(name)
    }

    /// Recursively re-tokenize a captured substring with a fresh state stack
    /// seeded at `Base`, splicing its tokens into this stream. This is the
    /// interpolation re-entry point and the one place the engine calls
    /// itself.
    pub(crate) fn subtokenize(&mut self, span: Range<usize>) {
        let source = self.source;
        let mut inner = TokenIter::seeded(self.lexer, &source[span], StateId::Base);
        for token in &mut inner {
            self.queue.push_back(token);
        }
    }

    fn current_state(&self) -> StateId {
        self.stack.last().copied().unwrap_or(StateId::Root)
    }

    /// Run one matching step: apply the first rule of the current state that
    /// matches at the current offset, or recover by emitting one `Error`
    /// token for the next character.
    fn step(&mut self) {
        let source = self.source;
        let rest = &source[self.pos..];
        let state = self.current_state();

        for rule in grammar::tables().rules(state) {
            let length = match &rule.matcher {
                Matcher::Pattern(re) => re.find(rest).map(|m| m.end()),
                Matcher::Scan(scan) => scan(rest),
                Matcher::Empty => Some(0),
            };
            let Some(length) = length else { continue };

            // Zero-length matches must transition, or they cannot make
            // forward progress.
            if length == 0 && rule.change == StateChange::Stay {
                continue;
            }

            let start = self.pos;
            let end = start + length;
            let depth_before = self.stack.len();
            let top_before = self.current_state();

            match &rule.action {
                Action::Pass => {}
                Action::Emit(kind) => self.emit(*kind, start..end),
                Action::EmitGroups(kinds) => {
                    if let Matcher::Pattern(re) = &rule.matcher {
                        if let Some(caps) = re.captures(rest) {
                            for (kind, group) in kinds.iter().zip(1usize..) {
                                if let Some(m) = caps.get(group) {
                                    self.emit(*kind, start + m.start()..start + m.end());
                                }
                            }
                        }
                    }
                }
                Action::Call(action) => action(self, start..end),
            }

            self.apply(rule.change);

            // A zero-length rule whose transition went nowhere (e.g. a
            // guarded pop at the bottom frame) made no progress; keep
            // scanning the remaining rules.
            if length == 0
                && self.stack.len() == depth_before
                && self.current_state() == top_before
            {
                continue;
            }

            self.pos = end;
            return;
        }

        // Unrecognized input: one Error token for the next character, then
        // resume normal matching.
        let ch_len = rest.chars().next().map_or(1, char::len_utf8);
        self.emit(TokenKind::Error, self.pos..self.pos + ch_len);
        self.pos += ch_len;
    }

    fn apply(&mut self, change: StateChange) {
        match change {
            StateChange::Stay => {}
            StateChange::Push(id) => self.push_state(id),
            StateChange::Pop => self.pop_state(),
            StateChange::Goto(id) => self.goto_state(id),
        }
    }
}

impl<'l, 's> Iterator for TokenIter<'l, 's> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Some(token);
            }
            if self.pos >= self.source.len() {
                return None;
            }
            self.step();
        }
    }
}
