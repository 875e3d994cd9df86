//! Lazily resolved localized strings.
//!
//! A [`LazyLocalizedString`] is a canonical key plus the values to interpolate
//! into it. It carries no locale: it is resolved later, once the locale of the
//! current request is known (see [`crate::core::resolve`]). This makes it
//! possible to build user-facing messages (for example inside an error) long
//! before the request language has been decided.

use std::fmt;

use crate::core::key::{build_key, escape_key};

/// A value interpolated into a localized string.
#[derive(Debug, Clone, PartialEq)]
pub enum LocalizedValue {
    Text(String),
    Integer(i64),
    Float(f64),
    /// A nested lazy string, resolved against the same locale as its parent.
    Lazy(LazyLocalizedString),
}

impl LocalizedValue {
    /// The nested lazy string, if this value is one.
    pub fn as_lazy(&self) -> Option<&LazyLocalizedString> {
        match self {
            LocalizedValue::Lazy(lazy) => Some(lazy),
            _ => None,
        }
    }
}

/// Stringify a plain value.
///
/// Nested lazy strings print their raw key; use the resolver to localize them.
impl fmt::Display for LocalizedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalizedValue::Text(text) => f.write_str(text),
            LocalizedValue::Integer(n) => write!(f, "{}", n),
            LocalizedValue::Float(n) => write_float(f, *n),
            LocalizedValue::Lazy(lazy) => f.write_str(&lazy.localization_key),
        }
    }
}

/// Floats print the way JavaScript's `String(n)` does: shortest round-trip
/// digits, a single `0` for both zeros, and exponent notation (`1e+21`,
/// `1e-7`) outside `[1e-6, 1e21)`.
fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if n == 0.0 {
        return f.write_str("0");
    }
    if (1e-6..1e21).contains(&n.abs()) {
        return write!(f, "{}", n);
    }

    let exponential = format!("{:e}", n);
    match exponential.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&exponential),
    }
}

impl From<&str> for LocalizedValue {
    fn from(value: &str) -> Self {
        LocalizedValue::Text(value.to_string())
    }
}

impl From<String> for LocalizedValue {
    fn from(value: String) -> Self {
        LocalizedValue::Text(value)
    }
}

impl From<&String> for LocalizedValue {
    fn from(value: &String) -> Self {
        LocalizedValue::Text(value.clone())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for LocalizedValue {
                fn from(value: $ty) -> Self {
                    LocalizedValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for LocalizedValue {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(n) => LocalizedValue::Integer(n),
            Err(_) => LocalizedValue::Text(value.to_string()),
        }
    }
}

impl From<f32> for LocalizedValue {
    fn from(value: f32) -> Self {
        LocalizedValue::Float(f64::from(value))
    }
}

impl From<f64> for LocalizedValue {
    fn from(value: f64) -> Self {
        LocalizedValue::Float(value)
    }
}

impl From<LazyLocalizedString> for LocalizedValue {
    fn from(value: LazyLocalizedString) -> Self {
        LocalizedValue::Lazy(value)
    }
}

impl From<&LazyLocalizedString> for LocalizedValue {
    fn from(value: &LazyLocalizedString) -> Self {
        LocalizedValue::Lazy(value.clone())
    }
}

/// A localization key and its interpolation values, not yet bound to a locale.
///
/// `{i}` in the localized text is replaced by the i-th value; `\{i}` stays
/// literal.
#[derive(Debug, Clone, PartialEq)]
pub struct LazyLocalizedString {
    localization_key: String,
    values: Vec<LocalizedValue>,
}

impl LazyLocalizedString {
    /// Create a lazy string from an already canonical key.
    pub fn new(localization_key: impl Into<String>, values: Vec<LocalizedValue>) -> Self {
        Self {
            localization_key: localization_key.into(),
            values,
        }
    }

    pub fn localization_key(&self) -> &str {
        &self.localization_key
    }

    pub fn values(&self) -> &[LocalizedValue] {
        &self.values
    }
}

/// Plain text is shorthand for a lazy string without values.
impl From<&str> for LazyLocalizedString {
    fn from(text: &str) -> Self {
        Self::new(escape_key(text), Vec::new())
    }
}

impl From<String> for LazyLocalizedString {
    fn from(text: String) -> Self {
        Self::from(text.as_str())
    }
}

/// Build a [`LazyLocalizedString`] from template parts and values.
///
/// `parts` are the static segments around each interpolation, exactly like the
/// strings array of a tagged template: `["Hello ", "!"]` with one value is the
/// template `` `Hello ${name}!` ``. Values are stored unmodified and in order.
/// There must be exactly one more part than values; debug builds panic
/// otherwise.
///
/// ```
/// use honolate::core::lazy::{LocalizedValue, lt};
///
/// let greeting = lt(&["Hello ", "!"], vec![LocalizedValue::from("Ann")]);
/// assert_eq!(greeting.localization_key(), "Hello {0}!");
/// ```
pub fn lt<S: AsRef<str>>(parts: &[S], values: Vec<LocalizedValue>) -> LazyLocalizedString {
    LazyLocalizedString {
        localization_key: build_key(parts, values.len()),
        values,
    }
}

/// Build a [`LazyLocalizedString`] with template-like syntax.
///
/// ```
/// use honolate::lt;
///
/// let plain = lt!("Hello world!");
/// assert_eq!(plain.localization_key(), "Hello world!");
///
/// let count = 3;
/// let items = lt!(["You have ", " new messages"], count);
/// assert_eq!(items.localization_key(), "You have {0} new messages");
///
/// let nested = lt!(["Notice: ", ""], items);
/// assert_eq!(nested.localization_key(), "Notice: {0}");
/// ```
#[macro_export]
macro_rules! lt {
    ([$($part:expr),+ $(,)?] $(, $value:expr)* $(,)?) => {
        $crate::core::lazy::lt(
            &[$($part),+],
            vec![$($crate::core::lazy::LocalizedValue::from($value)),*],
        )
    };
    ($text:expr) => {
        $crate::core::lazy::LazyLocalizedString::from($text)
    };
}
