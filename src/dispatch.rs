//! Verb dispatch: drives the cursor through a table of parameters.

use crate::arguments::Arguments;
use crate::error::ArgError;
use crate::parameter::{Parameter, dispatch_table};
use tracing::debug;

/// Undo record for a token split at `=`.
///
/// While the handler runs, `slot` holds the inline value instead of the full
/// token. Only one split is ever pending.
#[derive(Debug)]
struct Patch<'a> {
    slot: usize,
    original: &'a str,
}

impl<'a> Arguments<'a> {
    /// Dispatch every remaining token to `handler` through `params`.
    ///
    /// Each token is looked up by name or alias. A token containing `=` is
    /// looked up by its prefix up to and including the first `=`, and the text
    /// after it is handed back to the cursor as the next token, so the handler
    /// reads the inline value with [`get`](Self::get) or
    /// [`getall`](Self::getall) as if it were a separate argument.
    ///
    /// Returns `false` when there is nothing to parse, when a token names no
    /// verb (the message lists every verb of `params`), or when a handler
    /// reports failure. Parsing also stops at an empty token.
    pub fn parse<H>(&mut self, handler: &mut H, params: &[Parameter<H>]) -> bool {
        if self.is_empty() {
            return false;
        }
        let dispatchers = dispatch_table(params);
        loop {
            let token = self.get();
            if self.is_failed() || token.is_empty() {
                break;
            }
            let (verb, inline) = match token.find('=') {
                Some(eq) => (&token[..=eq], Some(&token[eq + 1..])),
                None => (token, None),
            };
            let Some(&dispatcher) = dispatchers.get(verb) else {
                debug!(verb, "unknown verb");
                self.fail(ArgError::UnknownVerb {
                    verb: verb.to_string(),
                    expected: params
                        .iter()
                        .map(Parameter::name)
                        .filter(|name| !name.is_empty())
                        .map(str::to_string)
                        .collect(),
                });
                return false;
            };
            let patch = inline.map(|value| self.splice(value));
            debug!(verb, split = patch.is_some(), "dispatching verb");
            let handled = dispatcher(handler, verb, self);
            if let Some(patch) = patch {
                self.revert(patch);
            }
            if !handled {
                debug!(verb, errors = self.errors(), "verb handler failed");
                return false;
            }
        }
        !self.is_failed()
    }

    /// Step back onto the token just consumed and expose `value` in its place.
    fn splice(&mut self, value: &'a str) -> Patch<'a> {
        self.position -= 1;
        let slot = self.position;
        let original = std::mem::replace(&mut self.values[slot], value);
        self.settle();
        Patch { slot, original }
    }

    /// Put the original token back. If the handler left the inline value
    /// unread, step over it so the token is not dispatched again.
    fn revert(&mut self, patch: Patch<'a>) {
        self.values[patch.slot] = patch.original;
        if self.position == patch.slot {
            self.position += 1;
            self.settle();
        }
    }
}
