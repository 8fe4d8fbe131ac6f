use serde::{Serialize, Deserialize};

/// Token representation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,      // The token text
    pub position: u32,     // Ordinal position in the document
    pub offset: usize,     // Byte offset in original text
    pub length: usize,     // Token length in bytes
    pub token_type: TokenType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    Word,          // Letters only
    Number,        // Digits only
    Alphanumeric,  // Anything mixed, e.g. "mp3" or "o'neil"
}

impl TokenType {
    pub fn classify(text: &str) -> Self {
        if text.chars().all(char::is_alphabetic) {
            TokenType::Word
        } else if text.chars().all(char::is_numeric) {
            TokenType::Number
        } else {
            TokenType::Alphanumeric
        }
    }
}

impl Token {
    pub fn new(text: String, position: u32, offset: usize) -> Self {
        let length = text.len();
        let token_type = TokenType::classify(&text);
        Token {
            text,
            position,
            offset,
            length,
            token_type,
        }
    }
}
