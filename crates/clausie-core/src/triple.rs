//! Triple record model
//!
//! One `Triple` per line of ClausIE output, collected into a `Corpus`
//! in the order the tool emitted them. The decoder understands the two
//! TSV layouts the jar produces: four fields, or five when confidence
//! reporting (`-p`) was requested.

use serde::{Deserialize, Serialize};

use crate::{ClausieError, Result};

/// One subject-predicate-object extraction for one input sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    /// Identifier of the input sentence, kept as the tool printed it
    pub index: String,
    pub subject: String,
    pub predicate: String,
    pub object: String,
    /// Present iff the batch ran in confidence-reporting mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
}

/// Ordered collection of triples from one extraction run
///
/// Line order is the tool's emission order; the binding never re-sorts,
/// so output order is not guaranteed to match input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus(pub Vec<Triple>);

impl Corpus {
    /// Decode raw TSV output lines into triples.
    ///
    /// Each non-blank line must split on `\t` into exactly four fields,
    /// or five when `has_confidence` is set. Subject, predicate, object
    /// (and confidence) have one surrounding pair of double quotes
    /// stripped; unquoted fields pass through unchanged. Blank lines
    /// produce no record.
    pub fn from_tsv<I, S>(lines: I, has_confidence: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let expected = if has_confidence { 5 } else { 4 };
        let mut triples = Vec::new();

        for line in lines {
            let line = line.as_ref();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() != expected {
                return Err(ClausieError::MalformedRecord {
                    line: line.to_string(),
                    expected,
                    found: fields.len(),
                });
            }

            triples.push(Triple {
                index: fields[0].to_string(),
                subject: strip_quotes(fields[1]).to_string(),
                predicate: strip_quotes(fields[2]).to_string(),
                object: strip_quotes(fields[3]).to_string(),
                confidence: if has_confidence {
                    Some(strip_quotes(fields[4]).to_string())
                } else {
                    None
                },
            });
        }

        Ok(Self(triples))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.0.iter()
    }
}

impl IntoIterator for Corpus {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Strip at most one leading and one trailing double quote
fn strip_quotes(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}

// ============================================================================
// Tests
// ============================================================================
