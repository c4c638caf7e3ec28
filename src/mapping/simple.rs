//! Key/value table.
use std::{
    collections::HashMap,
    fs::File,
    io::{Read, Write},
    path::Path,
};

use itertools::Itertools;

use crate::error::Error;

use super::{check_len, open, read_records, write_records};

/// XPOS to single value (UPOS or FEATS) table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleMapping(HashMap<String, String>);

impl SimpleMapping {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries sorted by key.
    pub fn sorted(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .sorted()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn load<R: Read>(reader: R) -> Result<Self, Error> {
        let mut mapping = Self::default();
        for (line, record) in read_records(reader, false)? {
            check_len(line, &record, 2, false)?;
            if mapping
                .insert(record[0].to_string(), record[1].to_string())
                .is_some()
            {
                return Err(Error::DuplicateKey(record[0].to_string()));
            }
        }
        Ok(mapping)
    }

    /// Write entries sorted by key, so that output is stable.
    pub fn save<W: Write>(&self, writer: W) -> Result<(), Error> {
        write_records(writer, self.sorted().map(|(k, v)| [k, v]))
    }

    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Self::load(open(path)?)
    }

    pub fn to_path(&self, path: &Path) -> Result<(), Error> {
        self.save(File::create(path)?)
    }
}

impl FromIterator<(String, String)> for SimpleMapping {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn mapping() -> SimpleMapping {
        [
            ("subst", "NOUN"),
            ("fin", "VERB"),
            ("qub", "PART"),
            ("interp", "PUNCT"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn save() {
        let mut out = Vec::new();
        mapping().save(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "fin\tVERB\ninterp\tPUNCT\nqub\tPART\nsubst\tNOUN\n"
        );
    }

    #[test]
    fn round_trip() {
        let m = mapping();
        let mut out = Vec::new();
        m.save(&mut out).unwrap();
        assert_eq!(SimpleMapping::load(Cursor::new(out)).unwrap(), m);
    }

    #[test]
    fn feats_with_quotes() {
        let content = "subst\tCase=Nom|Gender=Masc\nconj\t\"\n";
        let m = SimpleMapping::load(Cursor::new(content)).unwrap();
        assert_eq!(m.get("subst"), Some("Case=Nom|Gender=Masc"));
        assert_eq!(m.get("conj"), Some("\""));
    }

    #[test]
    fn malformed() {
        let content = "subst\tNOUN\nfin\tVERB\textra\n";
        match SimpleMapping::load(Cursor::new(content)) {
            Err(Error::MalformedLine { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn missing_value() {
        let content = "subst\n";
        assert!(matches!(
            SimpleMapping::load(Cursor::new(content)),
            Err(Error::MalformedLine { line: 1, .. })
        ));
    }

    #[test]
    fn duplicate() {
        let content = "subst\tNOUN\nsubst\tPROPN\n";
        assert!(matches!(
            SimpleMapping::load(Cursor::new(content)),
            Err(Error::DuplicateKey(k)) if k == "subst"
        ));
    }
}
