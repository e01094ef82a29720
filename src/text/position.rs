use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("Wrong params, expected 2 got {0}")]
    RangeLength(usize),
    #[error("Unsupported position: {0}")]
    UnsupportedPosition(String),
    #[error("Position {index} out of bounds for text with {len} characters")]
    OutOfBounds { index: usize, len: usize },
    #[error("Range start {start} is after its end {end}")]
    InvertedRange { start: usize, end: usize },
}

impl TextError {
    /// Whether the position itself had the wrong shape, as opposed to pointing outside the text.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TextError::RangeLength(_) | TextError::UnsupportedPosition(_))
    }
}

/// What [`at`] should extract: one character, or an inclusive `[start, end]` range.
///
/// `Range` is only valid with exactly two bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    Index(usize),
    Range(Vec<usize>),
}

impl From<usize> for Position {
    fn from(index: usize) -> Self {
        Position::Index(index)
    }
}

impl From<[usize; 2]> for Position {
    fn from([start, end]: [usize; 2]) -> Self {
        Position::Range(vec![start, end])
    }
}

impl From<Vec<usize>> for Position {
    fn from(bounds: Vec<usize>) -> Self {
        Position::Range(bounds)
    }
}

impl From<&[usize]> for Position {
    fn from(bounds: &[usize]) -> Self {
        Position::Range(bounds.to_vec())
    }
}

/// Reads a position from loosely typed input: a number or an array of numbers.
impl TryFrom<&serde_json::Value> for Position {
    type Error = TextError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        fn as_index(value: &serde_json::Value) -> Option<usize> {
            value.as_u64().and_then(|n| usize::try_from(n).ok())
        }

        let position = match value {
            serde_json::Value::Number(_) => as_index(value).map(Position::Index),
            serde_json::Value::Array(items) => items
                .iter()
                .map(as_index)
                .collect::<Option<Vec<_>>>()
                .map(Position::Range),
            _ => None,
        };

        position.ok_or_else(|| {
            tracing::debug!(position = %value, "unsupported text position");
            TextError::UnsupportedPosition(value.to_string())
        })
    }
}

/// The character at a position, or the characters of an inclusive range.
///
/// ```
/// use rutils::text::{at, Position};
///
/// assert_eq!(at("test_string", Position::Index(0)).unwrap(), "t");
/// assert_eq!(at("test_string", [0_usize, 1]).unwrap(), "te");
/// ```
pub fn at(text: &str, position: impl Into<Position>) -> Result<String, TextError> {
    let len = text.chars().count();

    match position.into() {
        Position::Index(index) => text
            .chars()
            .nth(index)
            .map(String::from)
            .ok_or(TextError::OutOfBounds { index, len }),
        Position::Range(bounds) => {
            let [start, end] = <[usize; 2]>::try_from(bounds.as_slice()).map_err(|_| {
                tracing::debug!(bounds = bounds.len(), "text range needs exactly two bounds");
                TextError::RangeLength(bounds.len())
            })?;

            if start > end {
                return Err(TextError::InvertedRange { start, end });
            }
            if end >= len {
                return Err(TextError::OutOfBounds { index: end, len });
            }

            Ok(text.chars().skip(start).take(end - start + 1).collect())
        }
    }
}
