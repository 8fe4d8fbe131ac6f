pub mod analyzer;
pub mod filter;
pub mod filters;
pub mod preprocessor;
pub mod token;
pub mod tokenizer;
