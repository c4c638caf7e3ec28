//! A collection of sentences sharing a column schema.
use crate::error::Error;

use super::{Columns, Sentence};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    schema: Option<String>,
    columns: Columns,
    sentences: Vec<Sentence>,
}

impl Dataset {
    /// Create a dataset. `schema` is the raw `global.columns` declaration, if any.
    pub fn new(schema: Option<String>, sentences: Vec<Sentence>) -> Result<Self, Error> {
        let columns = match &schema {
            Some(decl) => Columns::parse(decl)?,
            None => Columns::default(),
        };
        Ok(Self {
            schema,
            columns,
            sentences,
        })
    }

    /// Create an empty dataset that shares the schema of `self`.
    pub fn empty_like(&self) -> Self {
        Self {
            schema: self.schema.clone(),
            columns: self.columns.clone(),
            sentences: Vec::new(),
        }
    }

    /// Append the sentences of `other`.
    ///
    /// Both datasets have to declare the same schema.
    pub fn extend(&mut self, other: Dataset) -> Result<(), Error> {
        if self.schema != other.schema {
            return Err(Error::Custom(format!(
                "schema mismatch: {:?} != {:?}",
                self.schema, other.schema
            )));
        }
        self.sentences.extend(other.sentences);
        Ok(())
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentences_mut(&mut self) -> &mut [Sentence] {
        &mut self.sentences
    }

    pub fn push(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    pub fn into_sentences(self) -> Vec<Sentence> {
        self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_same_schema() {
        let mut a = Dataset::new(None, vec![Sentence::default()]).unwrap();
        let b = Dataset::new(None, vec![Sentence::default(), Sentence::default()]).unwrap();
        a.extend(b).unwrap();
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn extend_other_schema() {
        let mut a = Dataset::new(None, vec![]).unwrap();
        let b = Dataset::new(
            Some("ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL DEPS MISC PARSEME:MWE".to_string()),
            vec![],
        )
        .unwrap();
        assert!(a.extend(b).is_err());
    }

    #[test]
    fn empty_like_keeps_schema() {
        let schema = "ID FORM LEMMA UPOS XPOS FEATS PARSEME:MWE".to_string();
        let d = Dataset::new(Some(schema.clone()), vec![Sentence::default()]).unwrap();
        let e = d.empty_like();
        assert!(e.is_empty());
        assert_eq!(e.schema(), Some(schema.as_str()));
        assert!(e.columns().has("PARSEME:MWE"));
    }
}
