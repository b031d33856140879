//! Renders a parameter table as aligned help text.

use crate::parameter::Parameter;
use std::fmt;

/// Bullet placed between a verb and its description by [`Help`].
pub const DEFAULT_BULLET: &str = " - ";
/// Label introducing the alias row by [`Help`].
pub const DEFAULT_ALIAS_LABEL: &str = "Aliases: ";

/// Write one row per parameter: the name padded to a common column, then
/// `bullet` and the description. Parameters with aliases get a second row
/// with `alias_label` right-aligned under the bullet, followed by the raw
/// alias text. Every parameter is printed, bound or not.
pub fn print<W, H>(
    out: &mut W,
    params: &[Parameter<H>],
    bullet: &str,
    alias_label: &str,
) -> fmt::Result
where
    W: fmt::Write + ?Sized,
{
    let width = params
        .iter()
        .map(|param| param.name().len())
        .fold(alias_label.len(), usize::max)
        + 1;
    for param in params {
        writeln!(out, "{:<width$}{bullet}{}", param.name(), param.description())?;
        if !param.aliases().is_empty() {
            let label_width = width + bullet.len();
            writeln!(out, "{alias_label:>label_width$}{}", param.aliases())?;
        }
    }
    Ok(())
}

/// [`Display`](fmt::Display) adapter over [`print`].
///
/// ```
/// use simplearg::{Arguments, Help, Parameter};
///
/// struct App;
///
/// impl App {
///     fn run(&mut self, _: &str, _: &mut Arguments<'_>) -> bool {
///         true
///     }
/// }
///
/// const PARAMS: [Parameter<App>; 1] = [Parameter::new(App::run, "run", "start it", "r go")];
/// assert_eq!(
///     Help::new(&PARAMS).to_string(),
///     "run        - start it\n    Aliases: r go\n"
/// );
/// ```
pub struct Help<'p, H> {
    params: &'p [Parameter<H>],
    bullet: &'p str,
    alias_label: &'p str,
}

impl<'p, H> Help<'p, H> {
    pub fn new(params: &'p [Parameter<H>]) -> Self {
        Self {
            params,
            bullet: DEFAULT_BULLET,
            alias_label: DEFAULT_ALIAS_LABEL,
        }
    }

    pub fn bullet(mut self, bullet: &'p str) -> Self {
        self.bullet = bullet;
        self
    }

    pub fn alias_label(mut self, alias_label: &'p str) -> Self {
        self.alias_label = alias_label;
        self
    }
}

impl<H> fmt::Display for Help<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print(f, self.params, self.bullet, self.alias_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments::Arguments;

    struct Noop;

    impl Noop {
        fn noop(&mut self, _name: &str, _args: &mut Arguments<'_>) -> bool {
            true
        }
    }

    const PARAMS: [Parameter<Noop>; 3] = [
        Parameter::new(Noop::noop, "--option=", "a parameter with one option", ""),
        Parameter::new(Noop::noop, "foo", "a foo parameter", "f"),
        Parameter::unbound("--long-unbound-name", "listed anyway", "x y"),
    ];

    #[test]
    fn test_default_labels() {
        let expected = concat!(
            "--option=  - a parameter with one option\n",
            "foo        - a foo parameter\n",
            "    Aliases: f\n",
        );
        assert_eq!(Help::new(&PARAMS[..2]).to_string(), expected);
    }

    #[test]
    fn test_longest_name_sets_the_column() {
        let expected = concat!(
            "--option=           : a parameter with one option\n",
            "foo                 : a foo parameter\n",
            "                  aka f\n",
            "--long-unbound-name : listed anyway\n",
            "                  aka x y\n",
        );
        let help = Help::new(&PARAMS).bullet(": ").alias_label("aka ");
        assert_eq!(help.to_string(), expected);
    }

    #[test]
    fn test_print_into_string() {
        let mut out = String::new();
        print(&mut out, &PARAMS[1..2], " | ", "Aliases: ").unwrap();
        assert_eq!(out, "foo        | a foo parameter\n    Aliases: f\n");
    }

    #[test]
    fn test_empty_table_prints_nothing() {
        let none: [Parameter<Noop>; 0] = [];
        assert_eq!(Help::new(&none).to_string(), "");
    }
}
