//! Column schema of a collection.
use std::fmt;

use crate::error::Error;

use super::token::{FEATS, FORM, ID, LEMMA, UPOS, XPOS};

/// Columns of a plain CoNLL-U file, used when no schema is declared.
const CONLLU: [&str; 10] = [
    "ID", "FORM", "LEMMA", "UPOS", "XPOS", "FEATS", "HEAD", "DEPREL", "DEPS", "MISC",
];

/// Ordered column names, as declared by `# global.columns = ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns(Vec<String>);

impl Columns {
    /// Parse a whitespace-separated column declaration.
    ///
    /// Fails if one of the columns tokens are required to have is missing.
    pub fn parse(declaration: &str) -> Result<Self, Error> {
        let columns = Self(declaration.split_whitespace().map(String::from).collect());
        for required in [ID, FORM, LEMMA, UPOS, XPOS, FEATS] {
            if !columns.has(required) {
                return Err(Error::MissingColumn(required));
            }
        }
        Ok(columns)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name)
    }
}

impl Default for Columns {
    fn default() -> Self {
        Self(CONLLU.iter().map(|c| c.to_string()).collect())
    }
}

impl fmt::Display for Columns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}
