//! The argument cursor: a read position over borrowed tokens plus the
//! accumulated error text.

use crate::error::ArgError;
use crate::value::{FromArg, Slots};
use tracing::debug;

/// Where a cursor stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorState {
    /// At least one token remains and nothing has failed.
    Ready,
    /// Every token has been consumed.
    #[default]
    Exhausted,
    /// An extraction failed. Every further extraction is a no-op until the
    /// error text is replaced with [`Arguments::replace_errors`].
    Failed,
}

/// A single-pass cursor over an argument vector.
///
/// The cursor borrows its tokens; it never copies or frees them. Values are
/// pulled off the front with [`get`](Self::get), [`get_into`](Self::get_into)
/// and [`getall`](Self::getall). The first failure is recorded in
/// [`errors`](Self::errors) and makes the cursor sticky-failed, so the
/// message explaining what went wrong is never overwritten by a later call.
///
/// ```
/// use simplearg::Arguments;
///
/// let argv = ["prog", "42", "answer"];
/// let mut args = Arguments::from_argv(&argv);
/// let (mut number, mut label) = (0u32, String::new());
/// assert!(args.getall((&mut number, &mut label)));
/// assert_eq!((number, label.as_str()), (42, "answer"));
/// assert!(args.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Arguments<'a> {
    pub(crate) values: Vec<&'a str>,
    pub(crate) position: usize,
    state: CursorState,
    errors: String,
}

impl<'a> Arguments<'a> {
    /// Create a cursor positioned at the first of `values`.
    pub fn new<S: AsRef<str>>(values: &'a [S]) -> Self {
        values.iter().map(AsRef::as_ref).collect()
    }

    /// Create a cursor over a process argument vector, skipping the program
    /// name. An empty vector yields an always-empty cursor.
    pub fn from_argv<S: AsRef<str>>(argv: &'a [S]) -> Self {
        Self::new(argv.get(1..).unwrap_or_default())
    }

    /// Number of tokens not consumed yet. A failed cursor has none.
    pub fn len(&self) -> usize {
        self.remaining().len()
    }

    /// True when nothing more can be consumed, either because every token
    /// was read or because the cursor failed.
    pub fn is_empty(&self) -> bool {
        self.state != CursorState::Ready
    }

    /// True once an extraction has failed.
    pub fn is_failed(&self) -> bool {
        self.state == CursorState::Failed
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    /// The tokens not consumed yet.
    pub fn remaining(&self) -> &[&'a str] {
        match self.state {
            CursorState::Ready => self.values.get(self.position..).unwrap_or_default(),
            CursorState::Exhausted | CursorState::Failed => &[],
        }
    }

    /// Take the current token as is. Returns `""` when the cursor is empty
    /// and never fails.
    pub fn get(&mut self) -> &'a str {
        match self.current() {
            Some(token) => {
                self.advance();
                token
            }
            None => "",
        }
    }

    /// Parse the current token into `slot` and advance.
    ///
    /// An empty cursor makes this return `false` without recording anything.
    /// A token that does not parse records the reason, leaves `slot`
    /// untouched and fails the cursor.
    pub fn get_into<T: FromArg>(&mut self, slot: &mut T) -> bool {
        let Some(token) = self.current() else {
            return false;
        };
        match T::from_arg(token) {
            Ok(value) => {
                *slot = value;
                self.advance();
                true
            }
            Err(err) => {
                self.fail(err);
                false
            }
        }
    }

    /// Fill every slot from consecutive tokens.
    ///
    /// When fewer tokens remain than there are slots, nothing is consumed and
    /// the cursor fails with an arity message. Otherwise slots are filled left
    /// to right; a failing slot stops the extraction, and slots filled before
    /// it keep their new values.
    pub fn getall<S: Slots>(&mut self, slots: S) -> bool {
        if self.is_failed() {
            return false;
        }
        let remaining = self.len();
        if S::COUNT > remaining {
            self.fail(ArgError::Arity {
                expected: S::COUNT,
                remaining,
            });
            return false;
        }
        slots.fill(self)
    }

    /// Whether any remaining token equals `value` exactly.
    pub fn contains(&self, value: &str) -> bool {
        self.remaining().contains(&value)
    }

    /// Accumulated error text.
    pub fn errors(&self) -> &str {
        &self.errors
    }

    /// Swap in new error text and return the previous contents.
    ///
    /// Handlers use this to prefix context (usually their own verb) before
    /// extracting values, so a failure reads `foo expects number ...`.
    /// Replacing the text also lifts the failed state.
    pub fn replace_errors(&mut self, errors: impl Into<String>) -> String {
        let previous = std::mem::replace(&mut self.errors, errors.into());
        if self.is_failed() {
            self.state = CursorState::Exhausted;
            self.settle();
        }
        previous
    }

    pub(crate) fn fail(&mut self, err: ArgError) {
        debug!(error = %err, "argument extraction failed");
        self.errors.push_str(&err.to_string());
        self.state = CursorState::Failed;
    }

    /// Recompute Ready/Exhausted after the position moved. Failed sticks.
    pub(crate) fn settle(&mut self) {
        if self.is_failed() {
            return;
        }
        self.state = if self.position < self.values.len() {
            CursorState::Ready
        } else {
            CursorState::Exhausted
        };
    }

    fn current(&self) -> Option<&'a str> {
        self.remaining().first().copied()
    }

    fn advance(&mut self) {
        self.position += 1;
        self.settle();
    }
}

impl<'a> FromIterator<&'a str> for Arguments<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut args = Self {
            values: iter.into_iter().collect(),
            ..Self::default()
        };
        args.settle();
        args
    }
}
