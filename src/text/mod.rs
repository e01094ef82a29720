//! String helpers: case conversion, substring extraction and humanization.
//!
//! Every helper is a pure function over `&str`. Positions and counts are measured in characters,
//! which matches byte offsets for ASCII text and never splits a multi-byte character.

mod case;
mod position;
mod predicates;
mod slice;

pub use case::{camelize, capitalize, dasherize, humanize, snake_case};
pub use position::{at, Position, TextError};
pub use predicates::{blank, has_only_letters};
pub use slice::{first, first_n, from, insert, last, last_n, reverse};
