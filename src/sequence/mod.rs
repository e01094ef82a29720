//! [`Sequence`] and the traits that drive its typed helpers.
//!
//! The helpers are written once, generically; element behavior that differs between types lives
//! behind small traits:
//! - [`Ranked`] orders elements for `min`/`max` (text ranks by length, then by [`weight`]).
//! - [`UniqueKey`] decides which elements `uniq` treats as duplicates.
//! - [`ConvertElement`] converts an element to text or to another numeric type.
//! - [`JsonElement`] refuses elements that JSON cannot write (`to_json`).

mod convert;
mod ordering;
mod sequence;
mod strings;

pub use convert::{ConversionError, ConvertElement, JsonElement};
pub use ordering::{weight, Ranked, UniqueKey};
pub use sequence::{PopStrategy, Sequence};
