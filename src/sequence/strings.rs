use super::sequence::Sequence;

impl Sequence<String> {
    /// Drops empty and whitespace-only elements.
    pub fn compact(&mut self) {
        let kept: Vec<String> = std::mem::take(self)
            .into_iter()
            .filter(|el| !el.trim().is_empty())
            .collect();
        *self = Sequence::from(kept);
    }

    pub fn join(&self, separator: &str) -> String {
        self.as_slice().join(separator)
    }
}
