//! Verb descriptors and the per-parse dispatch table built from them.

use crate::arguments::Arguments;
use std::collections::HashMap;
use std::fmt;
use tracing::trace;

/// The callable bound to a verb: a method of the handler type `H`.
///
/// It receives the matched verb (with a trailing `=` for inline-value verbs)
/// and the shared cursor, from which it may pull any number of further values.
/// Returning `false` stops the parse; the method is expected to leave an
/// explanation in [`Arguments::errors`] when it does.
pub type Dispatcher<H> = fn(&mut H, &str, &mut Arguments<'_>) -> bool;

/// Immutable description of one verb: its dispatcher, name, help text and
/// space separated aliases.
///
/// Tables of parameters are meant to be `const`:
///
/// ```
/// use simplearg::{Arguments, Parameter};
///
/// #[derive(Default)]
/// struct App {
///     level: u8,
/// }
///
/// impl App {
///     const PARAMS: [Parameter<App>; 1] =
///         [Parameter::new(App::level, "--level=", "verbosity level", "-l")];
///
///     fn level(&mut self, _name: &str, args: &mut Arguments<'_>) -> bool {
///         args.getall(&mut self.level)
///     }
/// }
///
/// let argv = ["--level=3"];
/// let mut app = App::default();
/// assert!(Arguments::new(&argv).parse(&mut app, &App::PARAMS));
/// assert_eq!(app.level, 3);
/// ```
pub struct Parameter<H> {
    dispatcher: Option<Dispatcher<H>>,
    name: &'static str,
    description: &'static str,
    aliases: &'static str,
}

impl<H> Parameter<H> {
    pub const fn new(
        dispatcher: Dispatcher<H>,
        name: &'static str,
        description: &'static str,
        aliases: &'static str,
    ) -> Self {
        Self {
            dispatcher: Some(dispatcher),
            name,
            description,
            aliases,
        }
    }

    /// A row without a dispatcher. It shows up in help output but is never
    /// dispatched to.
    pub const fn unbound(
        name: &'static str,
        description: &'static str,
        aliases: &'static str,
    ) -> Self {
        Self {
            dispatcher: None,
            name,
            description,
            aliases,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Raw alias text, exactly as given.
    pub const fn aliases(&self) -> &'static str {
        self.aliases
    }

    pub const fn dispatcher(&self) -> Option<Dispatcher<H>> {
        self.dispatcher
    }

    /// Only valid parameters take part in dispatch: the name must be
    /// non-empty and a dispatcher must be bound.
    pub const fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.dispatcher.is_some()
    }

    /// Whether the verb accepts its value inline, as in `--level=3`.
    pub fn takes_value(&self) -> bool {
        self.name.ends_with('=')
    }

    /// Each alias on its own. Runs of whitespace are skipped.
    pub fn alias_names(&self) -> impl Iterator<Item = &'static str> {
        self.aliases.split_whitespace()
    }
}

impl<H> Clone for Parameter<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for Parameter<H> {}

impl<H> fmt::Debug for Parameter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("aliases", &self.aliases)
            .field("bound", &self.dispatcher.is_some())
            .finish()
    }
}

/// Map every name and alias of the valid parameters to its dispatcher.
/// Later entries win when a name is repeated.
pub(crate) fn dispatch_table<H>(params: &[Parameter<H>]) -> HashMap<&'static str, Dispatcher<H>> {
    let mut table = HashMap::new();
    let mut skipped = 0;
    for param in params {
        let Some(dispatcher) = param.dispatcher.filter(|_| param.is_valid()) else {
            skipped += 1;
            continue;
        };
        table.insert(param.name, dispatcher);
        for alias in param.alias_names() {
            table.insert(alias, dispatcher);
        }
    }
    trace!(entries = table.len(), skipped, "built dispatch table");
    table
}
