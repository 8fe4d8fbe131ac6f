use std::fmt;
use serde::{Serialize, Deserialize};

/// A term reference, optionally negated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atom {
    pub term: String,
    pub negated: bool,
}

impl Atom {
    pub fn plain(term: &str) -> Self {
        Atom { term: term.to_string(), negated: false }
    }

    pub fn negated(term: &str) -> Self {
        Atom { term: term.to_string(), negated: true }
    }
}

/// Atoms joined by implicit AND
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndGroup {
    pub atoms: Vec<Atom>,
}

impl AndGroup {
    pub fn new(atoms: Vec<Atom>) -> Self {
        AndGroup { atoms }
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

/// Groups joined by implicit OR. No groups means nothing matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub groups: Vec<AndGroup>,
}

impl Query {
    pub fn new(groups: Vec<AndGroup>) -> Self {
        Query { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.groups.iter().flat_map(|group| group.atoms.iter())
    }

    /// Rewrite every atom's term, keeping structure and negation.
    pub fn map_terms<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        for atom in self.groups.iter_mut().flat_map(|group| group.atoms.iter_mut()) {
            atom.term = f(&atom.term);
        }
        self
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.negated {
            f.write_str("!")?;
        }
        f.write_str(&self.term)
    }
}

impl fmt::Display for AndGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, atom) in self.atoms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", atom)?;
        }
        Ok(())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}", group)?;
        }
        Ok(())
    }
}
