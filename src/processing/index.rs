//! Canonical ID to sentence lookup.
use std::collections::{hash_map::Entry, HashMap};

use crate::{error::Error, model::Sentence};

/// Sentences of a collection, indexed by canonical ID.
///
/// Canonical IDs have to be unique: building an index over a collection with duplicates fails.
#[derive(Debug, Default)]
pub struct SentenceIndex<'a> {
    by_id: HashMap<&'a str, &'a Sentence>,
}

impl<'a> SentenceIndex<'a> {
    pub fn new<I>(sentences: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a Sentence>,
    {
        let mut by_id = HashMap::new();
        for sentence in sentences {
            let id = sentence.canonical_id()?;
            match by_id.entry(id) {
                Entry::Occupied(_) => return Err(Error::DuplicateKey(id.to_string())),
                Entry::Vacant(e) => {
                    e.insert(sentence);
                }
            }
        }
        Ok(Self { by_id })
    }

    pub fn get(&self, id: &str) -> Option<&'a Sentence> {
        self.by_id.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Indexed IDs, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.by_id.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Metadata, ORIG_FILE_SENTENCE};

    fn sentence(orig: &str) -> Sentence {
        let mut metadata = Metadata::default();
        metadata.insert(ORIG_FILE_SENTENCE, Some(orig.to_string()));
        Sentence::new(metadata, vec![])
    }

    #[test]
    fn index() {
        let sentences = vec![sentence("s1#1"), sentence("s2#1"), sentence("s3")];
        let index = SentenceIndex::new(&sentences).unwrap();
        assert_eq!(index.len(), 3);
        assert!(std::ptr::eq(index.get("s2").unwrap(), &sentences[1]));
        assert!(index.get("s2#1").is_none());
        assert!(index.contains("s3"));
    }

    #[test]
    fn duplicate() {
        let sentences = vec![sentence("s1"), sentence("s1")];
        assert!(matches!(
            SentenceIndex::new(&sentences),
            Err(Error::DuplicateKey(id)) if id == "s1"
        ));
    }

    #[test]
    fn duplicate_canonical() {
        // same canonical ID, different original IDs
        let sentences = vec![sentence("s1#1"), sentence("s1#2")];
        assert!(SentenceIndex::new(&sentences).is_err());
    }

    #[test]
    fn missing_id() {
        let sentences = vec![sentence("s1"), Sentence::default()];
        assert!(matches!(
            SentenceIndex::new(&sentences),
            Err(Error::MissingMetadata(_))
        ));
    }
}
