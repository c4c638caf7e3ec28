//! Hand-curated XPOS overrides.
use std::{
    collections::HashMap,
    fs::File,
    io::{Read, Write},
    path::Path,
};

use itertools::Itertools;

use crate::error::Error;

use super::{check_len, open, read_records, write_records, Tagging};

const HEADER: [&str; 3] = ["XPOS", "UPOS", "FEATS"];

/// XPOS to [Tagging] table.
///
/// The file starts with a header line that is ignored.
/// Other lines have at least three fields `xpos\tupos\tfeats`; extra fields (comments, counts...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualMapping(HashMap<String, Tagging>);

impl ManualMapping {
    pub fn get(&self, xpos: &str) -> Option<&Tagging> {
        self.0.get(xpos)
    }

    pub fn insert(&mut self, xpos: String, tagging: Tagging) -> Option<Tagging> {
        self.0.insert(xpos, tagging)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn load<R: Read>(reader: R) -> Result<Self, Error> {
        let mut mapping = Self::default();
        for (line, record) in read_records(reader, true)? {
            check_len(line, &record, 3, true)?;
            let tagging = Tagging::new(&record[1], &record[2]);
            if mapping.insert(record[0].to_string(), tagging).is_some() {
                return Err(Error::DuplicateKey(record[0].to_string()));
            }
        }
        Ok(mapping)
    }

    pub fn save<W: Write>(&self, writer: W) -> Result<(), Error> {
        let entries = self
            .0
            .iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
            .map(|(xpos, t)| [xpos.as_str(), t.upos.as_str(), t.feats.as_str()]);
        write_records(writer, std::iter::once(HEADER).chain(entries))
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Self::load(open(path)?)
    }

    pub fn to_path(&self, path: &Path) -> Result<(), Error> {
        self.save(File::create(path)?)
    }
}

impl FromIterator<(String, Tagging)> for ManualMapping {
    fn from_iter<T: IntoIterator<Item = (String, Tagging)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
