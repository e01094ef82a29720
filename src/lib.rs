//! Collection, map and string helpers.
//!
//! `rutils` provides three independent families of helpers, all pure and synchronous:
//! - [`sequence`]: [`Sequence<T>`](sequence::Sequence), an ordered list with delete, contains,
//!   min/max, pop, uniq and conversion helpers, written once for every element type.
//! - [`container`]: [`Container<K, V>`](container::Container), a key-unique map whose slots can
//!   hold an explicit absence, with compaction, lookup and merge helpers.
//! - [`text`]: case conversion, substring extraction and humanization of strings.
//!
//! Empty inputs, missing keys and out-of-range counts produce neutral values (`false`, empty
//! results, `None`). Only two things are reported as errors: numeric conversions that cannot
//! succeed ([`ConversionError`](sequence::ConversionError)) and malformed positions passed to
//! [`text::at`] ([`TextError`](text::TextError)).

pub mod container;
pub mod sequence;
pub mod text;

pub use container::{Container, DynamicContainer, Value};
pub use sequence::{ConversionError, PopStrategy, Sequence};
pub use text::{Position, TextError};
