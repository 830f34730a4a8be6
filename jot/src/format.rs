//! Rendering of print-style calls into text.
//!
//! Sinks that write text share these helpers so that the three call styles look the same no
//! matter where they end up:
//!
//! - [`sprint`] concatenates its arguments, adding a space between two operands when neither is a
//!   string.
//! - [`sprintln`] separates all arguments with single spaces and appends a newline.
//! - [`sprintf`] substitutes arguments into a format string using printf-style verbs.
//!
//! # Verbs
//!
//! | Verb | Accepts | Output |
//! |------|---------|--------|
//! | `%v` | anything | default format |
//! | `%s` | strings, displayable values | the text |
//! | `%q` | strings, displayable values, chars | quoted, escaped text |
//! | `%d` | integers, chars | base 10 |
//! | `%b` `%o` `%x` `%X` | integers | base 2, 8, 16; `%x` `%X` also hex-encode strings |
//! | `%c` | chars, integers | the character |
//! | `%t` | bools | `true` or `false` |
//! | `%e` `%E` | floats | scientific notation, `1.500000e+03` |
//! | `%f` `%F` | floats | decimal point, no exponent |
//! | `%g` `%G` | floats | `%e` for large or small exponents, `%f` otherwise |
//! | `%%` | nothing | a literal `%` |
//!
//! Flags `-` (left-align), `+` (always print a sign), `#` (radix prefix), `0` (zero padding for
//! numbers) and space (leave a space for the sign) can precede a decimal width and a `.precision`.
//! For `%e` and `%f` the precision is the number of decimals (default 6), for `%g` the number of
//! significant digits (default: as many as needed), for `%s` and `%v` on text the maximum
//! number of characters.
//!
//! Widths above 1000000 and precisions above 65535 are rejected with `%!(BADWIDTH)` and
//! `%!(BADPREC)`, and the verb is then rendered as if they were absent.
//!
//! Floats printed with `%v`, [`sprint`] or [`sprintln`] use the shortest `%g` form: `1e+06`,
//! `0.5`, `1.5e-07`.
//!
//! Mistakes never panic; they are rendered inline:
//!
//! ```rust
//! use jot::Value;
//! use jot::format::sprintf;
//!
//! assert_eq!(sprintf("%d", &[Value::from("hi")]), "%!d(str=hi)");
//! assert_eq!(sprintf("%d %d", &[Value::from(1)]), "1 %!d(MISSING)");
//! assert_eq!(sprintf("%d", &[Value::from(1), Value::from("a")]), "1%!(EXTRA str=a)");
//! assert_eq!(sprintf("50%", &[]), "50%!(NOVERB)");
//! assert_eq!(sprintf("%.99999f", &[Value::from(1.0)]), "%!(BADPREC)1.000000");
//! ```

use std::fmt::Write;
use std::iter::Peekable;
use std::str::Chars;

use crate::Value;

/// Largest accepted width.
const MAX_WIDTH: usize = 1_000_000;

/// Largest accepted precision, the most `core::fmt` supports.
const MAX_PRECISION: usize = u16::MAX as usize;

/// Concatenates `args`, adding a space between operands when neither is a string.
///
/// ```rust
/// use jot::Value;
/// use jot::format::sprint;
///
/// assert_eq!(sprint(&[Value::from("a"), Value::from("b")]), "ab");
/// assert_eq!(sprint(&[Value::from(1), Value::from(2)]), "1 2");
/// assert_eq!(sprint(&[Value::from("n="), Value::from(2)]), "n=2");
/// ```
pub fn sprint(args: &[Value<'_>]) -> String {
    let mut out = String::new();
    let mut previous_is_string = true;
    for (index, arg) in args.iter().enumerate() {
        if index > 0 && !previous_is_string && !arg.is_string() {
            out.push(' ');
        }
        push_value(&mut out, arg);
        previous_is_string = arg.is_string();
    }
    out
}

/// Joins `args` with single spaces and appends a newline.
pub fn sprintln(args: &[Value<'_>]) -> String {
    let mut out = String::new();
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        push_value(&mut out, arg);
    }
    out.push('\n');
    out
}

/// Substitutes `args` into `format`; see the [module documentation][self] for the verbs.
pub fn sprintf(format: &str, args: &[Value<'_>]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut args_used = 0;
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut spec = Spec::parse(&mut chars);
        if spec.bad_width {
            out.push_str("%!(BADWIDTH)");
        }
        if spec.bad_precision {
            out.push_str("%!(BADPREC)");
        }
        let Some(verb) = chars.next() else {
            out.push_str("%!(NOVERB)");
            break;
        };
        if verb == '%' {
            out.push('%');
            continue;
        }
        spec.verb = verb;

        let Some(arg) = args.get(args_used) else {
            out.push_str(&format!("%!{verb}(MISSING)"));
            continue;
        };
        args_used += 1;

        match render(&spec, arg) {
            Some(piece) => piece.pad_into(&spec, &mut out),
            None => out.push_str(&format!("%!{verb}({}={arg})", arg.type_name())),
        }
    }

    if let Some(extra) = args.get(args_used..).filter(|extra| !extra.is_empty()) {
        out.push_str("%!(EXTRA ");
        for (index, arg) in extra.iter().enumerate() {
            if index > 0 {
                out.push_str(", ");
            }
            out.push_str(arg.type_name());
            out.push('=');
            push_value(&mut out, arg);
        }
        out.push(')');
    }

    out
}

fn push_value(out: &mut String, value: &Value<'_>) {
    // Writing into a `String` cannot fail.
    let _ = write!(out, "{value}");
}

/// A parsed `%[flags][width][.precision]verb` directive.
#[derive(Debug, Default)]
struct Spec {
    minus: bool,
    plus: bool,
    sharp: bool,
    zero: bool,
    space: bool,
    width: Option<usize>,
    precision: Option<usize>,
    bad_width: bool,
    bad_precision: bool,
    verb: char,
}

impl Spec {
    /// Consumes flags, width and precision, leaving the verb in `chars`.
    fn parse(chars: &mut Peekable<Chars<'_>>) -> Self {
        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.minus = true,
                '+' => spec.plus = true,
                '#' => spec.sharp = true,
                '0' => spec.zero = true,
                ' ' => spec.space = true,
                _ => break,
            }
            chars.next();
        }
        spec.width = parse_number(chars);
        if spec.width.is_some_and(|width| width > MAX_WIDTH) {
            spec.width = None;
            spec.bad_width = true;
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            let precision = parse_number(chars).unwrap_or(0);
            if precision > MAX_PRECISION {
                spec.bad_precision = true;
            } else {
                spec.precision = Some(precision);
            }
        }
        spec
    }

    fn sign(&self, negative: bool) -> &'static str {
        if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        }
    }
}

fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut number: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        number = Some(
            number
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
        chars.next();
    }
    number
}

/// A rendered argument, kept in parts so padding can go between sign and digits.
#[derive(Debug)]
struct Piece {
    sign: &'static str,
    prefix: &'static str,
    body: String,
    numeric: bool,
}

impl Piece {
    fn text(body: String) -> Self {
        Piece {
            sign: "",
            prefix: "",
            body,
            numeric: false,
        }
    }

    fn pad_into(self, spec: &Spec, out: &mut String) {
        let len = self.sign.len() + self.prefix.len() + self.body.chars().count();
        let fill = spec.width.map_or(0, |width| width.saturating_sub(len));

        if spec.minus {
            out.push_str(self.sign);
            out.push_str(self.prefix);
            out.push_str(&self.body);
            out.extend(std::iter::repeat_n(' ', fill));
        } else if spec.zero && self.numeric {
            out.push_str(self.sign);
            out.push_str(self.prefix);
            out.extend(std::iter::repeat_n('0', fill));
            out.push_str(&self.body);
        } else {
            out.extend(std::iter::repeat_n(' ', fill));
            out.push_str(self.sign);
            out.push_str(self.prefix);
            out.push_str(&self.body);
        }
    }
}

/// Renders one argument, or `None` if `spec.verb` does not apply to it.
fn render(spec: &Spec, arg: &Value<'_>) -> Option<Piece> {
    match (spec.verb, *arg) {
        ('v', Value::I64(value)) => Some(integer(spec, value, 10)),
        ('v', Value::U64(value)) => Some(unsigned(spec, value, false, 10)),
        ('v', Value::F64(value)) => Some(float(spec, value)),
        ('v' | 's', Value::Str(_) | Value::Rendered(_) | Value::Formatted(_) | Value::Display(_)) => {
            Some(Piece::text(truncate(arg.to_string(), spec.precision)))
        }
        ('v', _) => Some(Piece::text(arg.to_string())),

        (
            'q',
            Value::Str(_) | Value::Rendered(_) | Value::Formatted(_) | Value::Display(_),
        ) => Some(Piece::text(format!("{:?}", arg.to_string()))),
        ('q', Value::Char(value)) => Some(Piece::text(format!("{value:?}"))),

        ('d' | 'b' | 'o' | 'x' | 'X', Value::I64(value)) => Some(integer(spec, value, radix(spec.verb))),
        ('d' | 'b' | 'o' | 'x' | 'X', Value::U64(value)) => {
            Some(unsigned(spec, value, false, radix(spec.verb)))
        }
        ('d', Value::Char(value)) => Some(unsigned(spec, u64::from(value), false, 10)),
        ('x' | 'X', Value::Str(text) | Value::Rendered(text)) => Some(hex_bytes(spec, text)),

        ('c', Value::Char(value)) => Some(Piece::text(value.into())),
        ('c', Value::I64(value)) => Some(Piece::text(code_point(u64::try_from(value).ok()).into())),
        ('c', Value::U64(value)) => Some(Piece::text(code_point(Some(value)).into())),

        ('t', Value::Bool(value)) => Some(Piece::text(value.to_string())),

        ('e' | 'E' | 'f' | 'F' | 'g' | 'G', Value::F64(value)) => Some(float(spec, value)),

        _ => None,
    }
}

fn radix(verb: char) -> u32 {
    match verb {
        'b' => 2,
        'o' => 8,
        'x' | 'X' => 16,
        _ => 10,
    }
}

fn integer(spec: &Spec, value: i64, radix: u32) -> Piece {
    unsigned(spec, value.unsigned_abs(), value < 0, radix)
}

fn unsigned(spec: &Spec, magnitude: u64, negative: bool, radix: u32) -> Piece {
    let body = match (radix, spec.verb) {
        (2, _) => format!("{magnitude:b}"),
        (8, _) => format!("{magnitude:o}"),
        (16, 'X') => format!("{magnitude:X}"),
        (16, _) => format!("{magnitude:x}"),
        _ => magnitude.to_string(),
    };
    let prefix = match (spec.sharp, radix, spec.verb) {
        (true, 2, _) => "0b",
        (true, 8, _) => "0o",
        (true, 16, 'X') => "0X",
        (true, 16, _) => "0x",
        _ => "",
    };
    Piece {
        sign: spec.sign(negative),
        prefix,
        body,
        numeric: true,
    }
}

fn hex_bytes(spec: &Spec, text: &str) -> Piece {
    let body = text.bytes().fold(String::new(), |mut body, byte| {
        let _ = match spec.verb {
            'X' => write!(body, "{byte:02X}"),
            _ => write!(body, "{byte:02x}"),
        };
        body
    });
    Piece::text(body)
}

fn code_point(value: Option<u64>) -> char {
    value
        .and_then(|value| u32::try_from(value).ok())
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn truncate(text: String, precision: Option<usize>) -> String {
    match precision {
        Some(precision) => text.chars().take(precision).collect(),
        None => text,
    }
}

/// Formats `value` the way `%v` does: shortest `%g`, with `NaN`, `+Inf` and `-Inf`.
pub(crate) fn shortest_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-Inf" } else { "+Inf" }.into();
    }
    let body = general(value.abs(), None, false);
    if value < 0.0 { format!("-{body}") } else { body }
}

fn float(spec: &Spec, value: f64) -> Piece {
    if value.is_nan() {
        return Piece::text("NaN".into());
    }
    let sign = spec.sign(value.is_sign_negative() && value != 0.0);
    if value.is_infinite() {
        return Piece {
            sign: if value < 0.0 { "-" } else { "+" },
            prefix: "",
            body: "Inf".into(),
            numeric: false,
        };
    }

    let magnitude = value.abs();
    let body = match spec.verb {
        'e' | 'E' => exponent(magnitude, spec.precision.unwrap_or(6), spec.verb == 'E'),
        'f' | 'F' => format!("{:.*}", spec.precision.unwrap_or(6), magnitude),
        _ => general(magnitude, spec.precision, spec.verb == 'G'),
    };
    Piece {
        sign,
        prefix: "",
        body,
        numeric: true,
    }
}

/// Splits Rust's `{:e}` output (`1.5e3`) into mantissa and exponent.
fn split_exponent(formatted: &str) -> (&str, i32) {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (formatted, 0),
    }
}

fn exponent_suffix(exponent: i32, upper: bool) -> String {
    let e = if upper { 'E' } else { 'e' };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{e}{sign}{:02}", exponent.unsigned_abs())
}

fn exponent(magnitude: f64, precision: usize, upper: bool) -> String {
    let formatted = format!("{magnitude:.precision$e}");
    let (mantissa, exponent) = split_exponent(&formatted);
    format!("{mantissa}{}", exponent_suffix(exponent, upper))
}

fn general(magnitude: f64, precision: Option<usize>, upper: bool) -> String {
    let formatted = match precision {
        Some(precision) => format!("{:.*e}", precision.max(1) - 1, magnitude),
        None => format!("{magnitude:e}"),
    };
    let (mantissa, exponent) = split_exponent(&formatted);
    let threshold = precision.map_or(6, |precision| precision.max(1) as i32);

    if exponent < -4 || exponent >= threshold {
        format!(
            "{}{}",
            trim_fraction(mantissa.into()),
            exponent_suffix(exponent, upper)
        )
    } else {
        let significant = mantissa.chars().filter(char::is_ascii_digit).count() as i32;
        let decimals = (significant - 1 - exponent).max(0) as usize;
        trim_fraction(format!("{magnitude:.decimals$}"))
    }
}

/// Drops trailing zeros after a decimal point, and the point itself if nothing remains.
fn trim_fraction(mut number: String) -> String {
    if number.contains('.') {
        let trimmed = number.trim_end_matches('0').trim_end_matches('.').len();
        number.truncate(trimmed);
    }
    number
}
