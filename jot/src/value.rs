//! Dynamically typed print arguments.
//!
//! Every print-style call takes its arguments as a slice of [`Value`]s, which lets a single call
//! carry a mix of strings, numbers and arbitrary displayable objects.
//!
//! # Value Types
//!
//! The [`Value`] enum supports:
//! - **Str**: Text values, the only variant treated as a "string operand" when printing
//! - **Bool**: Boolean values
//! - **I64** / **U64**: Signed and unsigned integers
//! - **F64**: Floating-point numbers
//! - **Char**: Single characters
//! - **Formatted**: Lazily formatted [`format_args!`] output
//! - **Display**: A borrowed [`fmt::Display`] object
//! - **Rendered**: Text produced by rendering one of the two previous variants
//!
//! # Examples
//!
//! ```rust
//! use jot::Value;
//!
//! let name = Value::from("alice");
//! let count = Value::from(3);
//! let ratio = Value::from(0.5);
//! let point = (1, 2);
//! let args = format_args!("{point:?}");
//! let lazy = Value::from(args);
//! ```

use std::borrow::Cow;
use std::fmt;

/// A single argument of a print-style call.
///
/// Values borrow from the caller for the duration of the call.
/// Sinks that need to keep arguments around use [`Value::to_static`].
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// A string value.
    Str(&'a str),
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    I64(i64),
    /// A 64-bit unsigned integer.
    U64(u64),
    /// A 64-bit floating-point number.
    F64(f64),
    /// A single character.
    Char(char),
    /// Output of [`format_args!`], rendered when printed.
    Formatted(fmt::Arguments<'a>),
    /// Any displayable object, rendered when printed.
    Display(&'a dyn fmt::Display),
    /// Text produced by rendering a [`Value::Formatted`] or [`Value::Display`].
    Rendered(&'a str),
}

/// An owned copy of a [`Value`].
///
/// [`Value::Formatted`] and [`Value::Display`] become [`OwnedValue::Rendered`].
#[derive(Clone, Debug, PartialEq)]
pub enum OwnedValue {
    /// A string value.
    Str(String),
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    I64(i64),
    /// A 64-bit unsigned integer.
    U64(u64),
    /// A 64-bit floating-point number.
    F64(f64),
    /// A single character.
    Char(char),
    /// Rendered output of a formatted or displayable value.
    Rendered(String),
}

impl<'a> Value<'a> {
    /// Wraps any displayable object.
    ///
    /// ```rust
    /// use std::net::Ipv4Addr;
    ///
    /// let addr = Ipv4Addr::LOCALHOST;
    /// assert_eq!(jot::Value::display(&addr).to_string(), "127.0.0.1");
    /// ```
    pub fn display(value: &'a dyn fmt::Display) -> Self {
        Value::Display(value)
    }

    /// Whether this value counts as a string operand for the spacing rule of
    /// [`sprint`][crate::format::sprint].
    pub fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Short type name used in inline formatting errors, e.g. `%!d(str=hi)`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "str",
            Value::Bool(_) => "bool",
            Value::I64(_) => "i64",
            Value::U64(_) => "u64",
            Value::F64(_) => "f64",
            Value::Char(_) => "char",
            Value::Formatted(_) | Value::Display(_) | Value::Rendered(_) => "display",
        }
    }

    /// Creates an owned copy of this value.
    pub fn to_static(&self) -> OwnedValue {
        match *self {
            Value::Str(value) => OwnedValue::Str(value.into()),
            Value::Bool(value) => OwnedValue::Bool(value),
            Value::I64(value) => OwnedValue::I64(value),
            Value::U64(value) => OwnedValue::U64(value),
            Value::F64(value) => OwnedValue::F64(value),
            Value::Char(value) => OwnedValue::Char(value),
            Value::Formatted(_) | Value::Display(_) => OwnedValue::Rendered(self.to_string()),
            Value::Rendered(value) => OwnedValue::Rendered(value.into()),
        }
    }
}

impl OwnedValue {
    /// Borrows this owned value as a [`Value`].
    pub fn as_value(&self) -> Value<'_> {
        match self {
            OwnedValue::Str(value) => Value::Str(value),
            OwnedValue::Bool(value) => Value::Bool(*value),
            OwnedValue::I64(value) => Value::I64(*value),
            OwnedValue::U64(value) => Value::U64(*value),
            OwnedValue::F64(value) => Value::F64(*value),
            OwnedValue::Char(value) => Value::Char(*value),
            OwnedValue::Rendered(value) => Value::Rendered(value),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Unlike `Debug`, strings are written raw: this is human-targeted text.
            Value::Str(value) | Value::Rendered(value) => f.write_str(value),
            Value::Bool(value) => fmt::Display::fmt(value, f),
            Value::I64(value) => fmt::Display::fmt(value, f),
            Value::U64(value) => fmt::Display::fmt(value, f),
            Value::F64(value) => f.write_str(&crate::format::shortest_float(*value)),
            Value::Char(value) => fmt::Display::fmt(value, f),
            Value::Formatted(value) => f.write_fmt(*value),
            Value::Display(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Value::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Value::I64(value) => f.debug_tuple("I64").field(value).finish(),
            Value::U64(value) => f.debug_tuple("U64").field(value).finish(),
            Value::F64(value) => f.debug_tuple("F64").field(value).finish(),
            Value::Char(value) => f.debug_tuple("Char").field(value).finish(),
            Value::Formatted(value) => f.debug_tuple("Formatted").field(value).finish(),
            Value::Display(value) => f
                .debug_tuple("Display")
                .field(&value.to_string())
                .finish(),
            Value::Rendered(value) => f.debug_tuple("Rendered").field(value).finish(),
        }
    }
}

impl fmt::Display for OwnedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_value(), f)
    }
}

impl PartialEq<OwnedValue> for Value<'_> {
    fn eq(&self, other: &OwnedValue) -> bool {
        self.to_static() == *other
    }
}

/// Conversion into a [`Value`] by reference.
///
/// The print macros call this on every argument, so both `name` and `&name` work for a
/// `String` and nothing is moved out of the caller.
pub trait ToValue {
    /// Borrows `self` as a [`Value`].
    fn to_value(&self) -> Value<'_>;
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value<'_> {
        (**self).to_value()
    }
}

impl ToValue for Value<'_> {
    fn to_value(&self) -> Value<'_> {
        *self
    }
}

impl ToValue for OwnedValue {
    fn to_value(&self) -> Value<'_> {
        self.as_value()
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value<'_> {
        Value::Str(self)
    }
}

impl ToValue for fmt::Arguments<'_> {
    fn to_value(&self) -> Value<'_> {
        Value::Formatted(*self)
    }
}

macro_rules! impl_to_value_copy {
    ($($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value<'_> {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_to_value_copy!(
    bool, char, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize
);

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Str(value)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(value: &'a String) -> Self {
        Value::Str(value)
    }
}

impl<'a> From<&'a Cow<'_, str>> for Value<'a> {
    fn from(value: &'a Cow<'_, str>) -> Self {
        Value::Str(value)
    }
}

impl<'a> From<fmt::Arguments<'a>> for Value<'a> {
    fn from(value: fmt::Arguments<'a>) -> Self {
        Value::Formatted(value)
    }
}

impl<'a> From<&'a OwnedValue> for Value<'a> {
    fn from(value: &'a OwnedValue) -> Self {
        value.as_value()
    }
}

impl From<bool> for Value<'_> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value<'_> {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

macro_rules! impl_from_int {
    ($variant:ident: $($ty:ty),*) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(value: $ty) -> Self {
                    Value::$variant(value as _)
                }
            }
        )*
    };
}

impl_from_int!(I64: i8, i16, i32, i64, isize);
impl_from_int!(U64: u8, u16, u32, u64, usize);

impl From<f32> for Value<'_> {
    fn from(value: f32) -> Self {
        Value::F64(value.into())
    }
}

impl From<f64> for Value<'_> {
    fn from(value: f64) -> Self {
        Value::F64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{OwnedValue, ToValue, Value};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(Value::from("hi"), "hi"; "string")]
    #[test_case(Value::from(true), "true"; "boolean")]
    #[test_case(Value::from(-3i8), "-3"; "small signed")]
    #[test_case(Value::from(u64::MAX), "18446744073709551615"; "large unsigned")]
    #[test_case(Value::from(1.5f32), "1.5"; "float")]
    #[test_case(Value::from(2.0), "2"; "whole float")]
    #[test_case(Value::from(-2.5e7), "-2.5e+07"; "large float")]
    #[test_case(Value::from('x'), "x"; "character")]
    fn display(value: Value<'_>, expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn formatted_values_render_when_made_static() {
        let point = (1, 2);
        let args = format_args!("{point:?}");
        let value = Value::from(args);
        assert_eq!(value.to_static(), OwnedValue::Rendered("(1, 2)".into()));
        assert_eq!(value.type_name(), "display");
        assert!(!value.is_string());
    }

    #[test]
    fn display_objects_render_when_made_static() {
        let addr = std::net::Ipv4Addr::new(10, 0, 0, 1);
        let value = Value::display(&addr);
        assert_eq!(value.to_static(), OwnedValue::Rendered("10.0.0.1".into()));
        assert_eq!(format!("{value:?}"), r#"Display("10.0.0.1")"#);
    }

    #[test]
    fn owned_values_round_trip_to_borrowed() {
        let owned = OwnedValue::Str("abc".into());
        let value = owned.as_value();
        assert!(value.is_string());
        assert!(value == owned);
    }

    #[test]
    fn to_value_sees_through_references() {
        let name = String::from("bob");
        assert!(matches!(name.to_value(), Value::Str("bob")));
        assert!(matches!((&&name).to_value(), Value::Str("bob")));
        assert!(matches!(5u16.to_value(), Value::U64(5)));
    }

    #[test]
    fn integers_widen() {
        assert!(matches!(Value::from(7u8), Value::U64(7)));
        assert!(matches!(Value::from(-7isize), Value::I64(-7)));
    }
}
