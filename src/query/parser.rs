use crate::core::error::{Error, ErrorKind, Result};
use crate::query::ast::{AndGroup, Atom, Query};

/// Group separator; also splits tokens it is glued to (`cat|dog`)
pub const OR_SEPARATOR: char = '|';
pub const NEGATION: char = '!';

/// AND spelled out (`&`, `&&`, `&cat`) carries no meaning in this grammar
pub const AND_OPERATOR: char = '&';

/// Query parser for the OR-of-AND-groups grammar
///
/// - `cat dog`      -> cat AND dog
/// - `cat | dog`    -> cat OR dog
/// - `!cat dog`     -> (NOT cat) AND dog
/// - `! cat`        -> NOT cat
pub struct QueryParser {
    pub lowercase: bool,
}

impl QueryParser {
    pub fn new() -> Self {
        QueryParser { lowercase: true }
    }

    pub fn with_case(lowercase: bool) -> Self {
        QueryParser { lowercase }
    }

    /// Parse a query string into Query AST
    pub fn parse(&self, input: &str) -> Result<Query> {
        let mut groups = Vec::new();
        let mut atoms = Vec::new();
        // Negation parity waiting for its term, from a standalone `!`
        let mut pending: Option<bool> = None;

        for token in input.split_whitespace() {
            for (i, piece) in token.split(OR_SEPARATOR).enumerate() {
                if i > 0 {
                    self.close_group(&mut groups, &mut atoms, pending)?;
                }

                if piece.is_empty() {
                    continue;
                }

                let term = piece.trim_start_matches(NEGATION);
                let odd = (piece.len() - term.len()) % 2 == 1;

                if term.is_empty() {
                    pending = Some(pending.unwrap_or(false) ^ odd);
                    continue;
                }

                if term.starts_with(AND_OPERATOR) || term.ends_with(AND_OPERATOR) {
                    return Err(Error::new(
                        ErrorKind::DanglingOperator,
                        format!("'{}' is not an operator here; terms in a group are already ANDed", term),
                    ));
                }

                let negated = pending.take().unwrap_or(false) ^ odd;
                let term = if self.lowercase { term.to_lowercase() } else { term.to_string() };
                atoms.push(Atom { term, negated });
            }
        }

        self.close_group(&mut groups, &mut atoms, pending)?;
        Ok(Query::new(groups))
    }

    fn close_group(
        &self,
        groups: &mut Vec<AndGroup>,
        atoms: &mut Vec<Atom>,
        pending: Option<bool>,
    ) -> Result<()> {
        if pending.is_some() {
            return Err(Error::new(
                ErrorKind::DanglingNegation,
                "'!' must be followed by a term".to_string(),
            ));
        }

        if !atoms.is_empty() {
            groups.push(AndGroup::new(std::mem::take(atoms)));
        }
        Ok(())
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}
