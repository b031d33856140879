//! A small argument cursor with table-driven verb dispatch.
//!
//! [`Arguments`] walks an argument vector front to back. Values are pulled
//! off it directly ([`Arguments::get_into`], [`Arguments::getall`]) or
//! through [`Arguments::parse`], which looks each token up in a `const`
//! table of [`Parameter`]s and calls the bound method of a handler. That
//! method pulls its own values from the same cursor before returning.
//!
//! Failures are reported as text: the first error is kept in
//! [`Arguments::errors`] and every later extraction becomes a no-op, so the
//! caller can print the message and exit.
//!
//! ```
//! use simplearg::{Arguments, Parameter};
//!
//! #[derive(Default)]
//! struct Resize {
//!     width: u32,
//!     height: u32,
//!     keep_ratio: bool,
//! }
//!
//! impl Resize {
//!     const PARAMS: [Parameter<Resize>; 2] = [
//!         Parameter::new(Resize::size, "size", "width and height", "-s"),
//!         Parameter::new(Resize::keep, "--keep", "keep the aspect ratio", "-k"),
//!     ];
//!
//!     fn size(&mut self, name: &str, args: &mut Arguments<'_>) -> bool {
//!         args.replace_errors(format!("{name} "));
//!         args.getall((&mut self.width, &mut self.height))
//!     }
//!
//!     fn keep(&mut self, _name: &str, _args: &mut Arguments<'_>) -> bool {
//!         self.keep_ratio = true;
//!         true
//!     }
//! }
//!
//! let argv = ["resize", "-s", "640", "480", "--keep"];
//! let mut args = Arguments::from_argv(&argv);
//! let mut resize = Resize::default();
//! assert!(args.parse(&mut resize, &Resize::PARAMS), "{}", args.errors());
//! assert_eq!((resize.width, resize.height, resize.keep_ratio), (640, 480, true));
//!
//! let argv = ["resize", "size", "640", "tall"];
//! let mut args = Arguments::from_argv(&argv);
//! assert!(!args.parse(&mut Resize::default(), &Resize::PARAMS));
//! assert_eq!(args.errors(), "size expects number in place of 'tall'");
//! ```

mod arguments;
mod dispatch;
mod error;
pub mod help;
mod lexer;
mod parameter;
mod value;

pub use arguments::{Arguments, CursorState};
pub use error::ArgError;
pub use help::Help;
pub use lexer::{Tokens, split_into_tokens, split_into_tokens_with};
pub use parameter::{Dispatcher, Parameter};
pub use value::{FromArg, Slots};
