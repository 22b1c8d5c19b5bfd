use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[a-zA-Z]{4,}\b").expect("valid word pattern"));

/// default number of words kept per book.
pub const DEFAULT_TOP_WORDS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub frequency: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, frequency: usize) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

/// Returns the `n` most frequent words of four or more ascii letters, most frequent first.
///
/// Words with the same count keep the order in which they first appear in the text.
pub fn get_top_words(text: &str, n: usize) -> Vec<WordCount> {
    if n == 0 {
        return vec![];
    }
    let lowered = text.to_lowercase();
    let mut counts: Vec<WordCount> = vec![];
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for token in clean_and_tokenize(&lowered) {
        match positions.get(token) {
            Some(&i) => counts[i].frequency += 1,
            None => {
                positions.insert(token, counts.len());
                counts.push(WordCount::new(token, 1));
            }
        }
    }
    // stable sort, so first-seen order survives among equal counts
    counts.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    counts.truncate(n);
    counts
}

fn clean_and_tokenize(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_need_four_letters_and_word_boundaries() {
        let tokens: Vec<&str> = clean_and_tokenize("the cat sat; whale's ship2 boat don't").collect();
        assert_eq!(tokens, vec!["whale", "boat"]);
    }

    #[test]
    fn digits_glued_to_letters_block_the_match() {
        assert_eq!(clean_and_tokenize("abcd1 2abcd abcd").count(), 1);
    }
}
