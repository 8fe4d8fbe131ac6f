use crate::analysis::filter::TokenFilter;
use crate::analysis::token::{Token, TokenType};

/// Keeps pure-letter tokens; drops numbers and mixed tokens.
pub struct AlphabeticFilter;

impl TokenFilter for AlphabeticFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .filter(|token| token.token_type == TokenType::Word)
            .collect()
    }

    fn name(&self) -> &str {
        "alphabetic"
    }
}
