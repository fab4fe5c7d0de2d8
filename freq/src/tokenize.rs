use std::collections::HashSet;

/// Splits text units into qualifying tokens: lower-cased, longer than
/// `min_len` characters, and not in the stopword set. The set is loaded
/// once and read-only afterwards, so a single filter can be shared by
/// any number of workers.
#[derive(Debug, Default)]
pub struct TokenFilter {
    stopwords: HashSet<String>,
    min_len: usize,
}

impl TokenFilter {
    pub fn new(stopwords: HashSet<String>, min_len: usize) -> Self {
        Self { stopwords, min_len }
    }

    /// Builds the filter from raw stopword lines. Each line is trimmed
    /// before insertion; blank lines are skipped.
    pub fn from_lines<I>(lines: I, min_len: usize) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let stopwords = lines
            .into_iter()
            .filter_map(|line| {
                let word = line.as_ref().trim();
                (!word.is_empty()).then(|| word.to_string())
            })
            .collect();
        Self { stopwords, min_len }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Lazy, one-pass token stream over one text unit. Empty or
    /// whitespace-only input yields nothing; nothing here can fail.
    pub fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.split_whitespace().filter_map(move |raw| {
            let word = raw.to_lowercase();
            if word.chars().count() > self.min_len && !self.stopwords.contains(&word) {
                Some(word)
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(stopwords: &[&str]) -> TokenFilter {
        TokenFilter::from_lines(stopwords, 6)
    }

    #[test]
    fn drops_stopwords_and_short_tokens() {
        let f = filter(&["the"]);
        let tokens: Vec<String> = f.tokens("the rapidly growing market").collect();
        // "the" is a stopword, "market" has only six characters
        assert_eq!(tokens, ["rapidly", "growing"]);
    }

    #[test]
    fn length_boundary_is_strict() {
        let f = filter(&[]);
        assert_eq!(f.tokens("growth").count(), 0);
        assert_eq!(f.tokens("growing").count(), 1);
    }

    #[test]
    fn tokens_are_case_folded_before_filtering() {
        let f = filter(&["the"]);
        let tokens: Vec<String> = f.tokens("THE Rapidly RAPIDLY").collect();
        assert_eq!(tokens, ["rapidly", "rapidly"]);
    }

    #[test]
    fn stopword_lines_are_trimmed_on_load() {
        let f = TokenFilter::from_lines(["  the\t", "", "   "], 6);
        assert!(f.is_stopword("the"));
        assert!(!f.is_stopword(""));
    }

    #[test]
    fn empty_input_yields_nothing() {
        let f = filter(&[]);
        assert_eq!(f.tokens("").count(), 0);
        assert_eq!(f.tokens("   \t  ").count(), 0);
    }
}
