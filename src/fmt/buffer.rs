//! Ordered fragment storage with the space-or-newline join rule.

/// Fragments of one message, joined on render.
///
/// Before each fragment, one space is inserted unless nothing has been written
/// yet or the text so far ends in `'\n'`. The check looks at the last decoded
/// `char` of everything rendered so far, not at fragment boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBuffer {
    fragments: Vec<String>,
}

impl MessageBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Appends a new fragment.
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Concatenates onto the last fragment with no separator.
    ///
    /// With nothing buffered yet, the text becomes the first fragment.
    pub fn attach(&mut self, fragment: &str) {
        match self.fragments.last_mut() {
            Some(last) => last.push_str(fragment),
            None => self.fragments.push(fragment.to_string()),
        }
    }

    pub fn clear(&mut self) {
        self.fragments.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Joins all fragments. Rendering does not consume the buffer.
    #[must_use]
    pub fn render(&self) -> String {
        let capacity = self.fragments.iter().map(|s| s.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for fragment in &self.fragments {
            if out.chars().next_back().is_some_and(|c| c != '\n') {
                out.push(' ');
            }
            out.push_str(fragment);
        }
        out
    }
}
