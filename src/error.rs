//! Error taxonomy for argument extraction and verb dispatch.

use thiserror::Error;

/// Everything that can go wrong while pulling values out of [`Arguments`].
///
/// The cursor does not hand these out directly. It renders them into its
/// accumulated error text (see [`Arguments::errors`]), so handlers can prefix
/// their own context before a failure is reported.
///
/// [`Arguments`]: crate::Arguments
/// [`Arguments::errors`]: crate::Arguments::errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    /// The token was expected to be an integer but is not one.
    #[error("expects number in place of '{token}'")]
    NotANumber { token: String },

    /// The token is an integer, but it does not fit the target type.
    #[error("expects number in range [{min}..{max}] in place of '{token}'")]
    OutOfRange {
        min: String,
        max: String,
        token: String,
    },

    /// The token was expected to be a floating point number but is not one.
    #[error("expects floating point value in place of '{token}'")]
    NotAFloat { token: String },

    /// The token is a floating point number too large for the target type.
    /// `range` names the type the way users know it ("double", "float").
    #[error("expects number in {range} range in place of '{token}'")]
    FloatOutOfRange { range: &'static str, token: String },

    /// Fewer tokens remain than a bulk extraction asked for.
    #[error("expects {expected} parameters, got only {remaining}")]
    Arity { expected: usize, remaining: usize },

    /// A token (or its key up to and including `=`) matches no verb.
    #[error("Unknown verb '{verb}' expected one of:{}", join_names(.expected))]
    UnknownVerb { verb: String, expected: Vec<String> },
}

// Every name is preceded by a space, so an empty table renders as nothing.
fn join_names(names: &[String]) -> String {
    names.iter().map(|name| format!(" {name}")).collect()
}
