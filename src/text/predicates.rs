/// Empty, or made only of ASCII spaces. Tabs and newlines are not blank.
pub fn blank(text: &str) -> bool {
    text.chars().all(|c| c == ' ')
}

pub fn has_only_letters(text: &str) -> bool {
    !blank(text) && text.chars().all(char::is_alphabetic)
}
