//! Lemma-keyed exceptions for particles.
use std::{
    collections::HashMap,
    fs::File,
    io::{Read, Write},
    path::Path,
};

use itertools::Itertools;

use crate::error::Error;

use super::{check_len, open, read_records, write_records};

/// Particle lemma to FEATS table.
///
/// On disk, lines are `lemma\txpos\tmarker\tfeats`. Only the lemma and the features are kept:
/// the UPOS is always the particle one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LemmaExceptions(HashMap<String, String>);

impl LemmaExceptions {
    /// Get the features for a particle lemma.
    pub fn get(&self, lemma: &str) -> Option<&str> {
        self.0.get(lemma).map(String::as_str)
    }

    pub fn insert(&mut self, lemma: String, feats: String) -> Option<String> {
        self.0.insert(lemma, feats)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn load<R: Read>(reader: R) -> Result<Self, Error> {
        let mut exceptions = Self::default();
        for (line, record) in read_records(reader, false)? {
            check_len(line, &record, 4, false)?;
            if exceptions
                .insert(record[0].to_string(), record[3].to_string())
                .is_some()
            {
                return Err(Error::DuplicateKey(record[0].to_string()));
            }
        }
        Ok(exceptions)
    }

    /// Write entries sorted by lemma, using `xpos` for both the xpos and marker columns.
    pub fn save<W: Write>(&self, writer: W, xpos: &str) -> Result<(), Error> {
        write_records(
            writer,
            self.0
                .iter()
                .sorted()
                .map(|(lemma, feats)| [lemma.as_str(), xpos, xpos, feats.as_str()]),
        )
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Self::load(open(path)?)
    }

    pub fn to_path(&self, path: &Path, xpos: &str) -> Result<(), Error> {
        self.save(File::create(path)?, xpos)
    }
}

impl FromIterator<(String, String)> for LemmaExceptions {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
