use super::predicates::blank;

// Counts and offsets below are in characters, never bytes.

/// The first character, or an empty string for empty text.
pub fn first(text: &str) -> String {
    first_n(text, 1)
}

/// Up to `count` leading characters.
pub fn first_n(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

/// The last character, or an empty string for empty text.
pub fn last(text: &str) -> String {
    last_n(text, 1)
}

/// Up to `count` trailing characters.
pub fn last_n(text: &str, count: usize) -> String {
    let len = text.chars().count();
    text.chars().skip(len.saturating_sub(count)).collect()
}

/// The rest of `text` from `position` onwards.
///
/// A negative position counts from the end: `-2` keeps the last two characters. Positive
/// positions past the end give an empty string; negative ones past the start give the whole text.
pub fn from(text: &str, position: isize) -> String {
    let len = text.chars().count();

    let skip = if position >= 0 {
        position.unsigned_abs()
    } else {
        len.saturating_sub(position.unsigned_abs())
    };

    text.chars().skip(skip).collect()
}

/// Splices `fragment` into `text` before the character at `index`.
///
/// An index past the end leaves `text` as is. Blank text is replaced by `fragment` outright.
pub fn insert(text: &str, index: usize, fragment: &str) -> String {
    let len = text.chars().count();
    if index > len {
        return text.to_string();
    }
    if blank(text) {
        return fragment.to_string();
    }

    let offset = text
        .char_indices()
        .nth(index)
        .map_or(text.len(), |(offset, _)| offset);

    let mut result = String::with_capacity(text.len() + fragment.len());
    result.push_str(&text[..offset]);
    result.push_str(fragment);
    result.push_str(&text[offset..]);
    result
}

pub fn reverse(text: &str) -> String {
    if blank(text) {
        return text.to_string();
    }
    text.chars().rev().collect()
}
