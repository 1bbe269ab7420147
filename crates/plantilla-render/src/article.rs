//! The display region that views publish into.

/// A page region with a title and an HTML body.
///
/// Each update replaces both completely; there is no incremental patching.
pub trait Article {
    fn update(&mut self, title: &str, html_body: &str);
}

/// An [`Article`] that remembers every update, newest last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingArticle {
    pub updates: Vec<(String, String)>,
}

impl RecordingArticle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current `(title, body)`, if anything was ever shown.
    #[must_use]
    pub fn last(&self) -> Option<(&str, &str)> {
        self.updates
            .last()
            .map(|(title, body)| (title.as_str(), body.as_str()))
    }
}

impl Article for RecordingArticle {
    fn update(&mut self, title: &str, html_body: &str) {
        self.updates.push((title.to_string(), html_body.to_string()));
    }
}
