//! Finding quantities in text and reducing them to numbers

use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, QuantitySet, QuantityToken, Span};

mod matcher;
mod normalizer;

pub use matcher::*;
pub use normalizer::*;

/// Read a file and return an owned String. We pass that ownership back to
/// the caller so that the QuantitySet produced by scan() below can borrow
/// from it for the lifetime of the editing session.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Enumerate every quantity in the given text, left to right. Each hit is
/// normalized to its baseline value and recorded with absolute offsets;
/// scanning resumes after the hit. A match that cannot be normalized to a
/// finite value produces no token and scanning continues past it.
///
/// The surrounding text given to each token is the line the match sits on,
/// which is where a unit like "cups" or "tsp" would name it.
pub fn scan(text: &str) -> QuantitySet<'_> {
    let mut set = QuantitySet::new();
    let mut position = 0;

    while let Some(found) = best_match(&text[position..]) {
        let start = position + found.start;
        let end = position + found.end;
        position = end;

        let value = match normalize(found.text) {
            Some(value) => value,
            None => {
                debug!(matched = found.text, "skipping unparsable quantity");
                continue;
            }
        };

        let token = QuantityToken::new(
            &text[start..end],
            Span { start, end },
            value,
            surrounding_line(text, start, end),
        );
        set.insert(token);
    }

    debug!(
        "Found {} quantit{}",
        set.len(),
        if set.len() == 1 { "y" } else { "ies" }
    );

    set
}

/// The line of text containing the byte range, without its line ending.
fn surrounding_line(text: &str, start: usize, end: usize) -> &str {
    let from = text[..start]
        .rfind('\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    let to = text[end..]
        .find('\n')
        .map(|i| end + i)
        .unwrap_or(text.len());
    &text[from..to]
}
