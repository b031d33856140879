//! Splits flat text (a config line, a response file) into argv-shaped tokens.
//!
//! Tokens are separated by whitespace. A comment marker hides everything up
//! to the end of its line, and a newline always ends a comment or a token.
//! There is no quoting.

use self::LexingState as S;
use crate::arguments::Arguments;
use std::ops::Range;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexingState {
    Space,
    Comment,
    Start,
    Token,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Symbol {
    Space,
    Comment,
    Token,
    Eol,
}

/// Next state, indexed by current state then by symbol class.
const TRANSITIONS: [[LexingState; 4]; 4] = [
    // space      comment      token        eol
    [S::Space, S::Comment, S::Start, S::Space],     // space
    [S::Comment, S::Comment, S::Comment, S::Space], // comment
    [S::Space, S::Comment, S::Token, S::Space],     // start
    [S::Space, S::Comment, S::Token, S::Space],     // token
];

impl LexingState {
    fn next(self, symbol: Symbol) -> Self {
        TRANSITIONS[self as usize][symbol as usize]
    }

    fn in_token(self) -> bool {
        matches!(self, S::Start | S::Token)
    }
}

impl Symbol {
    fn classify(ch: char, comment: char) -> Self {
        if ch == '\n' {
            Symbol::Eol
        } else if ch <= ' ' {
            Symbol::Space
        } else if ch == comment {
            Symbol::Comment
        } else {
            Symbol::Token
        }
    }
}

/// Tokens produced by [`split_into_tokens`]: the consumed text plus the span
/// of every token inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    arena: String,
    spans: Vec<Range<usize>>,
}

impl Tokens {
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.spans.get(index).map(|span| &self.arena[span.clone()])
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.spans.iter().map(|span| &self.arena[span.clone()])
    }

    /// A cursor over these tokens, ready for [`Arguments::parse`].
    pub fn args(&self) -> Arguments<'_> {
        self.iter().collect()
    }
}

/// Tokenize `text`, treating `#` as the comment marker.
pub fn split_into_tokens(text: String) -> Tokens {
    split_into_tokens_with(text, '#')
}

/// Tokenize `text` with a custom comment marker.
///
/// ```
/// use simplearg::split_into_tokens_with;
///
/// let tokens = split_into_tokens_with("run  --flag=1 ; note\nnext".to_string(), ';');
/// assert_eq!(tokens.iter().collect::<Vec<_>>(), ["run", "--flag=1", "next"]);
/// ```
pub fn split_into_tokens_with(text: String, comment: char) -> Tokens {
    let mut spans = Vec::new();
    let mut state = LexingState::Space;
    let mut start = 0;
    for (pos, ch) in text.char_indices() {
        let next = state.next(Symbol::classify(ch, comment));
        if next == S::Start {
            start = pos;
        } else if state.in_token() && !next.in_token() {
            spans.push(start..pos);
        }
        state = next;
    }
    if state.in_token() {
        spans.push(start..text.len());
    }
    trace!(tokens = spans.len(), "split text into tokens");
    Tokens { arena: text, spans }
}
