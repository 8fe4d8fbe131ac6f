use std::collections::HashSet;
use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

pub struct StopWordFilter {
    pub stop_words: HashSet<String>,
}

impl StopWordFilter {
    pub fn new(stop_words: Vec<String>) -> Self {
        StopWordFilter {
            stop_words: stop_words.into_iter().collect(),
        }
    }

    pub fn english() -> Self {
        let words = vec![
            "a", "an", "and", "are", "as", "at", "be", "by", "for",
            "from", "has", "he", "in", "is", "it", "its", "of", "on",
            "that", "the", "to", "was", "will", "with"
        ].into_iter().map(String::from).collect();

        StopWordFilter::new(words)
    }

    pub fn portuguese() -> Self {
        let words = vec![
            "a", "à", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo",
            "as", "às", "até", "com", "como", "da", "das", "de", "dela", "delas",
            "dele", "deles", "depois", "do", "dos", "e", "é", "ela", "elas", "ele",
            "eles", "em", "entre", "era", "essa", "essas", "esse", "esses", "esta",
            "está", "estas", "este", "estes", "eu", "foi", "há", "isso", "isto", "já",
            "lhe", "lhes", "mais", "mas", "me", "mesmo", "meu", "minha", "muito",
            "na", "nas", "nem", "no", "nos", "nós", "não", "nossa", "nosso", "num",
            "numa", "o", "os", "ou", "para", "pela", "pelas", "pelo", "pelos",
            "por", "qual", "quando", "que", "quem", "se", "sem", "ser", "seu",
            "seus", "só", "sua", "suas", "também", "te", "tem", "um", "uma",
            "umas", "uns", "você", "vocês"
        ].into_iter().map(String::from).collect();

        StopWordFilter::new(words)
    }
}

impl StopWordFilter {
    /// Case-insensitive, so `The` is dropped even when case is preserved
    pub fn is_stop_word(&self, text: &str) -> bool {
        if text.chars().any(char::is_uppercase) {
            self.stop_words.contains(&text.to_lowercase())
        } else {
            self.stop_words.contains(text)
        }
    }
}

impl TokenFilter for StopWordFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .filter(|token| !self.is_stop_word(&token.text))
            .collect()
    }

    fn name(&self) -> &str {
        "stop_words"
    }
}
