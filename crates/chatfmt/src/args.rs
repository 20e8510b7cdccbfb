//! Placeholder arguments and `%`-style substitution.
//!
//! Category calls such as [`Formatter::info_args`](crate::Formatter::info_args)
//! take a pattern and a slice of [`Arg`]s. Domain objects that have a name to
//! show (players, worlds, command sources) implement [`DisplayName`]; passing a
//! reference to one substitutes its name. Strings, numbers and other plain
//! values convert through their `Display` output.
//!
//! ```rust
//! use chatfmt::{args, DisplayName};
//! use chatfmt::args::substitute;
//!
//! struct World(&'static str);
//!
//! impl DisplayName for World {
//!     fn display_name(&self) -> String {
//!         self.0.to_string()
//!     }
//! }
//!
//! let nether = World("DIM-1");
//! let text = substitute("%s players in %s (%d%%)", &args![3, &nether, 40]);
//! assert_eq!(text, "3 players in DIM-1 (40%)");
//! ```
//!
//! # Pattern syntax
//!
//! | Sequence | Meaning |
//! |----------|---------|
//! | `%s`, `%d`, any letter | next argument |
//! | `%S`, any upper-case letter | next argument, upper-cased |
//! | `%2$s` | second argument |
//! | `%-8s`, `%8s` | argument padded to 8 columns, left or right aligned |
//! | `%.2f`, `%f` | numeric argument with 2 (default 6) decimal places |
//! | `%.3s` | argument cut to 3 characters |
//! | `%%` | a literal `%` |
//! | `%n` | a line break |
//!
//! A placeholder with no matching argument is left in the output untouched.

use std::fmt;

use crate::text::Text;

/// Something with a human-readable name that should stand in for it in messages.
pub trait DisplayName {
    /// The name to show.
    fn display_name(&self) -> String;
}

/// A rendered substitution argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg(String);

impl Arg {
    /// Wraps any displayable value.
    pub fn display<D: fmt::Display + ?Sized>(value: &D) -> Self {
        Arg(value.to_string())
    }

    /// Uses a value's display name.
    pub fn named<N: DisplayName + ?Sized>(value: &N) -> Self {
        Arg(value.display_name())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl<T: DisplayName + ?Sized> From<&T> for Arg {
    fn from(value: &T) -> Self {
        Arg::named(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg(value.clone())
    }
}

impl From<Text> for Arg {
    fn from(value: Text) -> Self {
        Arg(value.to_plain())
    }
}

impl From<&Text> for Arg {
    fn from(value: &Text) -> Self {
        Arg(value.to_plain())
    }
}

macro_rules! arg_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg(value.to_string())
                }
            }
        )*
    };
}

arg_from_display!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Builds an array of [`Arg`]s from a list of values.
///
/// ```rust
/// use chatfmt::args;
///
/// let args = args!["Steve", 12, 'x'];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        [$($crate::Arg::from($value)),*]
    };
}

/// Substitutes `%` placeholders in `pattern` with `args`.
pub fn substitute(pattern: &str, args: &[Arg]) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.char_indices().peekable();
    let mut next_arg = 0;

    while let Some((start, c)) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        // %[index$][-][width][.precision]conversion
        let mut index: Option<usize> = None;
        let mut left_align = false;
        let mut digits = String::new();
        let mut precision: Option<usize> = None;
        let mut conversion = None;

        while let Some(&(_, next)) = chars.peek() {
            match next {
                '0'..='9' => {
                    digits.push(next);
                    chars.next();
                }
                '$' if index.is_none() && !digits.is_empty() => {
                    index = digits.parse::<usize>().ok();
                    digits.clear();
                    chars.next();
                }
                '-' if digits.is_empty() && !left_align => {
                    left_align = true;
                    chars.next();
                }
                '.' if precision.is_none() => {
                    chars.next();
                    let mut places = String::new();
                    while let Some(&(_, d)) = chars.peek() {
                        if !d.is_ascii_digit() {
                            break;
                        }
                        places.push(d);
                        chars.next();
                    }
                    precision = Some(places.parse().unwrap_or(0));
                }
                _ => {
                    conversion = Some(next);
                    chars.next();
                    break;
                }
            }
        }

        let end = chars.peek().map(|(i, _)| *i).unwrap_or(pattern.len());
        let raw = &pattern[start..end];

        let conversion = match conversion {
            Some(conv) => conv,
            None => {
                out.push_str(raw);
                continue;
            }
        };

        match conversion {
            '%' => out.push('%'),
            'n' => out.push('\n'),
            conv if conv.is_ascii_alphabetic() => {
                let position = match index {
                    Some(0) => None,
                    Some(i) => Some(i - 1),
                    None => {
                        let i = next_arg;
                        next_arg += 1;
                        Some(i)
                    }
                };
                match position.and_then(|i| args.get(i)) {
                    Some(arg) => {
                        let value = convert(arg.as_str(), conv, precision);
                        let width = digits.parse::<usize>().unwrap_or(0);
                        if left_align {
                            out.push_str(&format!("{:<width$}", value, width = width));
                        } else {
                            out.push_str(&format!("{:>width$}", value, width = width));
                        }
                    }
                    None => {
                        tracing::debug!(pattern, placeholder = raw, "no argument for placeholder");
                        out.push_str(raw);
                    }
                }
            }
            _ => out.push_str(raw),
        }
    }

    out
}

fn convert(arg: &str, conversion: char, precision: Option<usize>) -> String {
    match conversion {
        'f' | 'F' => match arg.parse::<f64>() {
            Ok(n) => format!("{:.*}", precision.unwrap_or(6), n),
            Err(_) => arg.to_string(),
        },
        _ => {
            let value = match precision {
                Some(max) => arg.chars().take(max).collect(),
                None => arg.to_string(),
            };
            if conversion.is_ascii_uppercase() {
                value.to_uppercase()
            } else {
                value
            }
        }
    }
}
