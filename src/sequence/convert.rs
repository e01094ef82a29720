use std::num::{ParseFloatError, ParseIntError};

use serde::Serialize;
use thiserror::Error;

use super::sequence::Sequence;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Cannot parse {value:?} as {target}: {source}")]
    ParseInt {
        value: String,
        target: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("Cannot parse {value:?} as {target}: {source}")]
    ParseFloat {
        value: String,
        target: &'static str,
        #[source]
        source: ParseFloatError,
    },
    #[error("Value {value} does not fit in {target}")]
    OutOfRange { value: String, target: &'static str },
}

impl ConversionError {
    /// Name of the type the conversion was aiming for.
    pub fn target(&self) -> &'static str {
        match self {
            ConversionError::ParseInt { target, .. }
            | ConversionError::ParseFloat { target, .. }
            | ConversionError::OutOfRange { target, .. } => target,
        }
    }
}

/// Per-element conversions behind the `to_*_sequence` helpers.
///
/// Widening conversions and conversions to text never fail. Narrowing conversions are checked,
/// and text is parsed with the target type's own parser.
pub trait ConvertElement {
    fn to_text(&self) -> String;
    fn to_i32(&self) -> Result<i32, ConversionError>;
    fn to_i64(&self) -> Result<i64, ConversionError>;
    fn to_u32(&self) -> Result<u32, ConversionError>;
    fn to_u64(&self) -> Result<u64, ConversionError>;
    fn to_f32(&self) -> Result<f32, ConversionError>;
    fn to_f64(&self) -> Result<f64, ConversionError>;
}

fn out_of_range(value: impl ToString, target: &'static str) -> ConversionError {
    ConversionError::OutOfRange {
        value: value.to_string(),
        target,
    }
}

/// Integer to integer through `TryFrom`.
fn narrow<S, T>(value: S, target: &'static str) -> Result<T, ConversionError>
where
    S: Copy + ToString,
    T: TryFrom<S>,
{
    T::try_from(value).map_err(|_| out_of_range(value, target))
}

/// Truncates toward zero; NaN, infinities and values outside `T` are rejected.
fn float_to_int<T>(value: f64, target: &'static str) -> Result<T, ConversionError>
where
    T: TryFrom<i128>,
{
    if !value.is_finite() {
        return Err(out_of_range(value, target));
    }
    // `as` saturates at the i128 bounds, which are wider than every target.
    T::try_from(value.trunc() as i128).map_err(|_| out_of_range(value, target))
}

fn parse_int<T>(text: &str, target: &'static str) -> Result<T, ConversionError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    text.parse::<T>().map_err(|source| ConversionError::ParseInt {
        value: text.to_string(),
        target,
        source,
    })
}

fn parse_float<T>(text: &str, target: &'static str) -> Result<T, ConversionError>
where
    T: std::str::FromStr<Err = ParseFloatError>,
{
    text.parse::<T>().map_err(|source| ConversionError::ParseFloat {
        value: text.to_string(),
        target,
        source,
    })
}

/// Spelled-out infinities ("inf", "-Infinity") parse to themselves; any other text that parses to
/// an infinity overflowed the target.
fn check_parsed_overflow(
    overflowed: bool,
    text: &str,
    target: &'static str,
) -> Result<(), ConversionError> {
    let unsigned = text.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(text);
    let literal = unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity");
    if overflowed && !literal {
        return Err(out_of_range(text, target));
    }
    Ok(())
}

macro_rules! impl_convert_integer {
    ($($t:ty),*) => {
        $(
            impl ConvertElement for $t {
                fn to_text(&self) -> String {
                    self.to_string()
                }

                fn to_i32(&self) -> Result<i32, ConversionError> {
                    narrow(*self, "i32")
                }

                fn to_i64(&self) -> Result<i64, ConversionError> {
                    narrow(*self, "i64")
                }

                fn to_u32(&self) -> Result<u32, ConversionError> {
                    narrow(*self, "u32")
                }

                fn to_u64(&self) -> Result<u64, ConversionError> {
                    narrow(*self, "u64")
                }

                fn to_f32(&self) -> Result<f32, ConversionError> {
                    Ok(*self as f32)
                }

                fn to_f64(&self) -> Result<f64, ConversionError> {
                    Ok(*self as f64)
                }
            }
        )*
    };
}

impl_convert_integer!(i32, i64, u32, u64);

macro_rules! impl_convert_float {
    ($($t:ty),*) => {
        $(
            impl ConvertElement for $t {
                fn to_text(&self) -> String {
                    self.to_string()
                }

                fn to_i32(&self) -> Result<i32, ConversionError> {
                    float_to_int(f64::from(*self), "i32")
                }

                fn to_i64(&self) -> Result<i64, ConversionError> {
                    float_to_int(f64::from(*self), "i64")
                }

                fn to_u32(&self) -> Result<u32, ConversionError> {
                    float_to_int(f64::from(*self), "u32")
                }

                fn to_u64(&self) -> Result<u64, ConversionError> {
                    float_to_int(f64::from(*self), "u64")
                }

                fn to_f32(&self) -> Result<f32, ConversionError> {
                    let narrowed = *self as f32;
                    if self.is_finite() && !narrowed.is_finite() {
                        return Err(out_of_range(self, "f32"));
                    }
                    Ok(narrowed)
                }

                fn to_f64(&self) -> Result<f64, ConversionError> {
                    Ok(f64::from(*self))
                }
            }
        )*
    };
}

impl_convert_float!(f32, f64);

impl ConvertElement for String {
    fn to_text(&self) -> String {
        self.clone()
    }

    fn to_i32(&self) -> Result<i32, ConversionError> {
        parse_int(self, "i32")
    }

    fn to_i64(&self) -> Result<i64, ConversionError> {
        parse_int(self, "i64")
    }

    fn to_u32(&self) -> Result<u32, ConversionError> {
        parse_int(self, "u32")
    }

    fn to_u64(&self) -> Result<u64, ConversionError> {
        parse_int(self, "u64")
    }

    fn to_f32(&self) -> Result<f32, ConversionError> {
        let value: f32 = parse_float(self, "f32")?;
        check_parsed_overflow(value.is_infinite(), self, "f32")?;
        Ok(value)
    }

    fn to_f64(&self) -> Result<f64, ConversionError> {
        let value: f64 = parse_float(self, "f64")?;
        check_parsed_overflow(value.is_infinite(), self, "f64")?;
        Ok(value)
    }
}

impl<T: ConvertElement> Sequence<T> {
    /// Converts every element with `f`, aborting on the first failure.
    fn convert_each<U, F>(&self, f: F) -> Result<Sequence<U>, ConversionError>
    where
        F: Fn(&T) -> Result<U, ConversionError>,
    {
        self.iter()
            .enumerate()
            .map(|(index, el)| {
                f(el).map_err(|err| {
                    tracing::debug!(
                        index,
                        target_type = err.target(),
                        error = %err,
                        "sequence conversion aborted"
                    );
                    err
                })
            })
            .collect()
    }

    pub fn to_text_sequence(&self) -> Sequence<String> {
        self.map(T::to_text)
    }

    pub fn to_i32_sequence(&self) -> Result<Sequence<i32>, ConversionError> {
        self.convert_each(T::to_i32)
    }

    pub fn to_i64_sequence(&self) -> Result<Sequence<i64>, ConversionError> {
        self.convert_each(T::to_i64)
    }

    pub fn to_u32_sequence(&self) -> Result<Sequence<u32>, ConversionError> {
        self.convert_each(T::to_u32)
    }

    pub fn to_u64_sequence(&self) -> Result<Sequence<u64>, ConversionError> {
        self.convert_each(T::to_u64)
    }

    pub fn to_f32_sequence(&self) -> Result<Sequence<f32>, ConversionError> {
        self.convert_each(T::to_f32)
    }

    pub fn to_f64_sequence(&self) -> Result<Sequence<f64>, ConversionError> {
        self.convert_each(T::to_f64)
    }
}

/// Elements that [`Sequence::to_json`] can write.
///
/// JSON has no literal for NaN or the infinities, so those floats are refused instead of being
/// written as `null`.
pub trait JsonElement: Serialize {
    fn has_json_literal(&self) -> bool {
        true
    }
}

impl JsonElement for i32 {}
impl JsonElement for i64 {}
impl JsonElement for u32 {}
impl JsonElement for u64 {}
impl JsonElement for String {}

impl JsonElement for f32 {
    fn has_json_literal(&self) -> bool {
        self.is_finite()
    }
}

impl JsonElement for f64 {
    fn has_json_literal(&self) -> bool {
        self.is_finite()
    }
}

impl<T: JsonElement> Sequence<T> {
    /// Compact JSON array, elements in sequence order.
    ///
    /// Fails when an element has no JSON literal (NaN, infinities).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        if let Some(index) = self.iter().position(|el| !el.has_json_literal()) {
            tracing::debug!(index, "sequence element has no JSON literal");
            return Err(serde::ser::Error::custom(format!(
                "element {index} has no JSON representation"
            )));
        }
        serde_json::to_string(self)
    }
}
