use crate::WordCount;

/// A stored book: its title and the ranked words saved with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub words: Vec<WordCount>,
}

impl Book {
    pub fn new(title: impl Into<String>, words: Vec<WordCount>) -> Self {
        Self {
            title: title.into(),
            words,
        }
    }
    pub fn get_title(&self) -> &str {
        &self.title
    }
    pub fn get_words(&self) -> &[WordCount] {
        &self.words
    }
}
