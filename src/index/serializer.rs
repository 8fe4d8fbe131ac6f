//! Flat-file form of the inverted index.
//!
//! One line per term, terms in case-insensitive order:
//!
//! ```text
//! bird: 2,1 3,1
//! cat: 1,1 3,2
//! ```

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::{char, digit1, space1};
use nom::combinator::{all_consuming, map, map_res};
use nom::multi::separated_list1;
use nom::sequence::separated_pair;
use nom::{IResult, Parser};
use tracing::info;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::DocId;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::{Posting, PostingList};

/// Whether `term` survives a write/read cycle: non-empty and free of
/// whitespace, which the line format uses as its separators.
pub fn is_storable_term(term: &str) -> bool {
    !term.is_empty() && !term.contains(char::is_whitespace)
}

/// `term: doc,freq doc,freq ...`
pub fn format_line(term: &str, list: &PostingList) -> String {
    let mut line = String::with_capacity(term.len() + 2 + list.len() * 6);
    line.push_str(term);
    line.push(':');
    for posting in &list.postings {
        let _ = write!(line, " {},{}", posting.doc_id, posting.term_freq);
    }
    line
}

pub fn write_index<W: Write>(index: &InvertedIndex, mut writer: W) -> Result<()> {
    for (term, list) in index.sorted_entries() {
        if list.is_empty() {
            continue;
        }
        writeln!(writer, "{}", format_line(term.as_str(), list))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_index(index: &InvertedIndex, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        Error::new(ErrorKind::Io, format!("index file {}: {}", path.display(), e))
    })?;
    write_index(index, BufWriter::new(file))?;
    info!(path = %path.display(), terms = index.len(), "index written");
    Ok(())
}

fn number(input: &str) -> IResult<&str, u32> {
    map_res(digit1, |digits: &str| digits.parse::<u32>()).parse(input)
}

fn posting(input: &str) -> IResult<&str, Posting> {
    map(
        separated_pair(number, char(','), number),
        |(doc, freq)| Posting::new(DocId::new(doc), freq),
    ).parse(input)
}

fn index_line(input: &str) -> IResult<&str, (&str, Vec<Posting>)> {
    separated_pair(take_until(": "), tag(": "), separated_list1(space1, posting)).parse(input)
}

/// Parse one serialized line back into its term and postings.
pub fn parse_line(line: &str) -> Option<(&str, Vec<Posting>)> {
    let (_, (term, postings)) = all_consuming(index_line).parse(line).ok()?;
    let valid = !term.is_empty()
        && postings.iter().all(|p| p.doc_id.value() >= 1 && p.term_freq >= 1)
        && postings.windows(2).all(|w| w[0].doc_id < w[1].doc_id);
    valid.then_some((term, postings))
}

/// Rebuild an index from its flat-file form. Blank lines are ignored.
pub fn read_index<R: BufRead>(reader: R) -> Result<InvertedIndex> {
    let mut index = InvertedIndex::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let (term, postings) = parse_line(line).ok_or_else(|| {
            Error::new(
                ErrorKind::Parse,
                format!("line {}: malformed index entry '{}'", line_no + 1, line),
            )
        })?;

        if index.contains_term(term) {
            return Err(Error::new(
                ErrorKind::Parse,
                format!("line {}: duplicate term '{}'", line_no + 1, term),
            ));
        }

        for posting in postings {
            index.doc_count = index.doc_count.max(posting.doc_id.value() as usize);
            index.total_tokens += posting.term_freq as usize;
            index.insert_posting(term, posting);
        }
    }

    Ok(index)
}

pub fn load_index(path: &Path) -> Result<InvertedIndex> {
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::Io, format!("index file {}: {}", path.display(), e))
    })?;
    read_index(BufReader::new(file))
}
