//! Typed slots that the cursor can fill from a single token.

use crate::arguments::Arguments;
use crate::error::ArgError;
use std::num::IntErrorKind;

/// A value that can be parsed out of exactly one argument token.
///
/// Implemented for every primitive integer, `f32`, `f64`, `String` and
/// `Option<T>`. Implement it for your own types to use them as slots in
/// [`Arguments::get_into`] and [`Arguments::getall`].
pub trait FromArg: Sized {
    /// Parse `token` into a value, or explain why it can't be done.
    fn from_arg(token: &str) -> Result<Self, ArgError>;
}

macro_rules! integer_from_arg {
    ($($ty:ty),* $(,)?) => {$(
        impl FromArg for $ty {
            fn from_arg(token: &str) -> Result<Self, ArgError> {
                token.parse::<$ty>().map_err(|err| match err.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ArgError::OutOfRange {
                        min: <$ty>::MIN.to_string(),
                        max: <$ty>::MAX.to_string(),
                        token: token.to_string(),
                    },
                    _ => ArgError::NotANumber {
                        token: token.to_string(),
                    },
                })
            }
        }
    )*};
}

integer_from_arg!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_from_arg {
    ($($ty:ty => $range:literal),* $(,)?) => {$(
        impl FromArg for $ty {
            fn from_arg(token: &str) -> Result<Self, ArgError> {
                let value = token.parse::<$ty>().map_err(|_| ArgError::NotAFloat {
                    token: token.to_string(),
                })?;
                // std saturates to infinity instead of reporting overflow
                if value.is_infinite() && !spells_infinity(token) {
                    return Err(ArgError::FloatOutOfRange {
                        range: $range,
                        token: token.to_string(),
                    });
                }
                Ok(value)
            }
        }
    )*};
}

float_from_arg!(f32 => "float", f64 => "double");

fn spells_infinity(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

impl FromArg for String {
    fn from_arg(token: &str) -> Result<Self, ArgError> {
        Ok(token.to_string())
    }
}

impl<T: FromArg> FromArg for Option<T> {
    fn from_arg(token: &str) -> Result<Self, ArgError> {
        T::from_arg(token).map(Some)
    }
}

/// One or more mutable slots filled left to right by [`Arguments::getall`].
///
/// Implemented for `&mut T` and for tuples of up to eight `&mut T`.
pub trait Slots {
    /// How many tokens the slots consume.
    const COUNT: usize;

    /// Fill the slots in order, stopping at the first one that fails.
    fn fill(self, args: &mut Arguments<'_>) -> bool;
}

impl<T: FromArg> Slots for &mut T {
    const COUNT: usize = 1;

    fn fill(self, args: &mut Arguments<'_>) -> bool {
        args.get_into(self)
    }
}

macro_rules! tuple_slots {
    ($($slot:ident : $ty:ident),+) => {
        impl<$($ty: FromArg),+> Slots for ($(&mut $ty,)+) {
            const COUNT: usize = [$(stringify!($slot)),+].len();

            fn fill(self, args: &mut Arguments<'_>) -> bool {
                let ($($slot,)+) = self;
                $(
                    if !args.get_into($slot) {
                        return false;
                    }
                )+
                true
            }
        }
    };
}

tuple_slots!(a: A);
tuple_slots!(a: A, b: B);
tuple_slots!(a: A, b: B, c: C);
tuple_slots!(a: A, b: B, c: C, d: D);
tuple_slots!(a: A, b: B, c: C, d: D, e: E);
tuple_slots!(a: A, b: B, c: C, d: D, e: E, f: F);
tuple_slots!(a: A, b: B, c: C, d: D, e: E, f: F, g: G);
tuple_slots!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H);
