use crate::sequence::Sequence;

/// Underscore separated segments, empty ones dropped.
fn segments(text: &str) -> Sequence<String> {
    let mut words: Sequence<String> = text.split('_').map(str::to_string).collect();
    words.delete_all(&String::new());
    words
}

/// `test_string` becomes `TestString`.
pub fn camelize(text: &str) -> String {
    segments(text).iter().map(|word| capitalize(word)).collect()
}

/// Uppercases the first character only.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn dasherize(text: &str) -> String {
    text.replace('_', "-")
}

/// Turns an attribute name into a phrase: `employee_salary` becomes `Employee salary`.
///
/// An `id` segment following an underscore is dropped, so `author_id` becomes `Author`. A bare
/// `_id` is `Id`.
pub fn humanize(text: &str) -> String {
    if text == "_id" {
        return "Id".to_string();
    }

    let mut words: Sequence<String> = text
        .split('_')
        .enumerate()
        .filter(|(i, segment)| *i == 0 || *segment != "id")
        .map(|(_, segment)| segment.to_string())
        .collect();
    words.delete_all(&String::new());

    capitalize(&words.join(" "))
}

/// `HelloStrStr` becomes `hello_str_str`.
///
/// Every uppercase character after the first starts a new word; existing underscores are kept.
pub fn snake_case(text: &str) -> String {
    let mut words: Sequence<String> = Sequence::new();
    let mut word = String::new();

    for (i, c) in text.chars().enumerate() {
        if i != 0 && c.is_uppercase() {
            words.push(std::mem::take(&mut word));
        }
        word.extend(c.to_lowercase());
    }
    if !word.is_empty() {
        words.push(word);
    }

    words.join("_")
}
