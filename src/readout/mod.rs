//! Magnifier readout text
//!
//! The core carries the value specifier as an opaque string; it is only
//! interpreted here, when values are turned into display text.

use crate::error::{ChartError, Result};
use crate::layout::DEFAULT_VALUE_SPECIFIER;
use crate::plot::MagnifierFrame;

/// Label shown on the date line when no x-labels are supplied
pub const DEFAULT_DATE_LABEL: &str = "Date";

/// Largest width or precision a directive may request
pub const MAX_FIELD: usize = 128;

/// printf-style format for magnifier values, e.g. "%.0f"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpecifier(String);

impl Default for ValueSpecifier {
    fn default() -> Self {
        Self(DEFAULT_VALUE_SPECIFIER.to_string())
    }
}

impl From<&str> for ValueSpecifier {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl ValueSpecifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn format(&self, value: f64) -> String {
        format_value(&self.0, value)
    }

    /// Reject directives whose width or precision exceeds `MAX_FIELD`
    pub fn validate(&self) -> Result<()> {
        let mut chars = self.0.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '%' {
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                continue;
            }
            if parse_directive(&mut chars).is_oversized() {
                return Err(ChartError::SpecifierField {
                    spec: self.0.clone(),
                    max: MAX_FIELD,
                });
            }
        }
        Ok(())
    }
}

/// Text lines of the magnifier: the two values and the date line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagnifierReadout {
    pub first: String,
    pub second: String,
    pub date: String,
}

impl MagnifierReadout {
    pub fn new(frame: &MagnifierFrame, specifier: &ValueSpecifier, labels: &[String]) -> Self {
        let date = frame
            .index
            .and_then(|i| labels.get(i))
            .cloned()
            .unwrap_or_else(|| DEFAULT_DATE_LABEL.to_string());

        Self {
            first: specifier.format(frame.values.0),
            second: specifier.format(frame.values.1),
            date,
        }
    }
}

#[derive(Debug, Default)]
struct Directive {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alternate: bool,
    width: usize,
    precision: Option<usize>,
}

impl Directive {
    fn is_oversized(&self) -> bool {
        self.width > MAX_FIELD || self.precision.is_some_and(|p| p > MAX_FIELD)
    }
}

type Chars<'a> = std::iter::Peekable<std::str::Chars<'a>>;

/// Flags, width, precision and length modifiers; stops before the conversion
fn parse_directive(chars: &mut Chars<'_>) -> Directive {
    let mut directive = Directive::default();
    while let Some(&flag) = chars.peek() {
        match flag {
            '-' => directive.left = true,
            '+' => directive.plus = true,
            ' ' => directive.space = true,
            '0' => directive.zero = true,
            '#' => directive.alternate = true,
            _ => break,
        }
        chars.next();
    }
    directive.width = take_number(chars).unwrap_or(0);
    if chars.peek() == Some(&'.') {
        chars.next();
        directive.precision = Some(take_number(chars).unwrap_or(0));
    }
    // Length modifiers carry no meaning for f64
    while matches!(chars.peek(), Some('l' | 'L' | 'h')) {
        chars.next();
    }
    directive
}

/// Render `value` through a printf subset: `%[-+ 0#][width][.prec](f|e|g|d|i)`
/// and `%%`. Any other conversion, or a width or precision above `MAX_FIELD`,
/// falls back to `Display`.
pub fn format_value(spec: &str, value: f64) -> String {
    let mut out = String::with_capacity(spec.len() + 8);
    let mut chars = spec.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let directive = parse_directive(&mut chars);
        if directive.is_oversized() {
            chars.next();
            out.push_str(&value.to_string());
            continue;
        }

        let body = match chars.next() {
            Some('f' | 'F') => fixed(value.abs(), directive.precision.unwrap_or(6)),
            Some(conv @ ('e' | 'E')) => {
                let s = scientific(value.abs(), directive.precision.unwrap_or(6));
                if conv == 'E' { s.to_uppercase() } else { s }
            }
            Some(conv @ ('g' | 'G')) => {
                let s = general(value.abs(), directive.precision, directive.alternate);
                if conv == 'G' { s.to_uppercase() } else { s }
            }
            Some('d' | 'i') => format!("{}", value.abs().trunc() as i64),
            Some(other) => {
                out.push_str(&value.to_string());
                out.push(other);
                continue;
            }
            None => {
                out.push_str(&value.to_string());
                break;
            }
        };

        out.push_str(&pad(&directive, value, body));
    }

    out
}

/// `None` without digits; values that overflow saturate at `usize::MAX`
fn take_number(chars: &mut Chars<'_>) -> Option<usize> {
    let mut number: Option<usize> = None;
    while let Some(&d) = chars.peek() {
        let Some(digit) = d.to_digit(10) else {
            break;
        };
        let n = number.unwrap_or(0);
        number = Some(n.saturating_mul(10).saturating_add(digit as usize));
        chars.next();
    }
    number
}

fn fixed(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// C-style exponent: at least two digits and an explicit sign ("1.5e+03")
fn scientific(value: f64, precision: usize) -> String {
    let rust = format!("{:.*e}", precision, value);
    match rust.split_once('e') {
        Some((mantissa, exp)) => {
            let exp: i32 = exp.parse().unwrap_or(0);
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        None => rust,
    }
}

fn general(value: f64, precision: Option<usize>, alternate: bool) -> String {
    let p = precision.unwrap_or(6).max(1);
    if value == 0.0 {
        return if alternate { fixed(0.0, p - 1) } else { "0".to_string() };
    }

    // Exponent after rounding to p significant digits
    let exp = scientific(value, p - 1)
        .split_once('e')
        .and_then(|(_, e)| e.parse::<i32>().ok())
        .unwrap_or(0);

    let s = if exp < -4 || exp >= p as i32 {
        scientific(value, p - 1)
    } else {
        fixed(value, (p as i32 - 1 - exp).max(0) as usize)
    };

    if alternate { s } else { strip_trailing_zeros(&s) }
}

fn strip_trailing_zeros(s: &str) -> String {
    let (mantissa, exp) = match s.split_once('e') {
        Some((m, e)) => (m, Some(e)),
        None => (s, None),
    };
    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };
    match exp {
        Some(e) => format!("{}e{}", mantissa, e),
        None => mantissa.to_string(),
    }
}

fn pad(directive: &Directive, value: f64, body: String) -> String {
    // A value that rounds to zero still keeps its sign, as printf does
    let sign = if value.is_sign_negative() && value != 0.0 {
        "-"
    } else if directive.plus {
        "+"
    } else if directive.space {
        " "
    } else {
        ""
    };

    let len = sign.len() + body.len();
    if len >= directive.width {
        return format!("{}{}", sign, body);
    }
    let fill = directive.width - len;

    if directive.left {
        format!("{}{}{}", sign, body, " ".repeat(fill))
    } else if directive.zero {
        format!("{}{}{}", sign, "0".repeat(fill), body)
    } else {
        format!("{}{}{}", " ".repeat(fill), sign, body)
    }
}
