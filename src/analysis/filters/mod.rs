pub mod alphabetic;
pub mod stemmer;
pub mod stopword;
