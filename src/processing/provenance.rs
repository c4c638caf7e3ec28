/*! Provenance rewriting.

Before being written out, sentences get a `source_sent_id` that tells where they can be found in their original corpus:
`<corpus uri> <path in corpus> <id in file>`.

- External sentences keep their canonical ID, with a fixed path.
- PCC and residual sentences have IDs of the form `<file>_morph_<...>`: the file part is put into a path template,
  the `morph...` part is the ID in that file.

The sub-corpus specific `sent_id` is removed afterwards.
!*/
use std::fmt;

use log::debug;

use crate::{
    config::{CorpusLocation, ProvenanceConfig, FILE_PLACEHOLDER},
    error::Error,
    identifiers::Origin,
    model::{Sentence, SENT_ID, SOURCE_SENT_ID},
};

const MORPH: &str = "morph";

/// Location of a sentence in its original corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub uri: String,
    pub path: String,
    pub id: String,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.uri, self.path, self.id)
    }
}

/// Split `<file>_morph...` on the first underscore.
pub fn split_morph_id(id: &str) -> Result<(&str, &str), Error> {
    let (file, suffix) = id.split_once('_').ok_or_else(|| Error::MalformedId {
        id: id.to_string(),
        reason: "no underscore".to_string(),
    })?;
    if file.is_empty() {
        return Err(Error::MalformedId {
            id: id.to_string(),
            reason: "empty file identifier".to_string(),
        });
    }
    if !suffix.starts_with(MORPH) {
        return Err(Error::MalformedId {
            id: id.to_string(),
            reason: format!("{suffix:?} does not start with {MORPH:?}"),
        });
    }
    Ok((file, suffix))
}

pub struct ProvenanceRewriter {
    config: ProvenanceConfig,
}

impl ProvenanceRewriter {
    pub fn new(config: &ProvenanceConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn from_template(location: &CorpusLocation, id: &str) -> Result<Provenance, Error> {
        let (file, suffix) = split_morph_id(id)?;
        Ok(Provenance {
            uri: location.uri.clone(),
            path: location.path.replace(FILE_PLACEHOLDER, file),
            id: suffix.to_string(),
        })
    }

    /// Compute the provenance of the sentence with canonical ID `id`.
    pub fn provenance(&self, id: &str, origin: Origin) -> Result<Provenance, Error> {
        match origin {
            Origin::External => Ok(Provenance {
                uri: self.config.external.uri.clone(),
                path: self.config.external.path.clone(),
                id: id.to_string(),
            }),
            Origin::Pcc => Self::from_template(&self.config.pcc, id),
            Origin::Residual => Self::from_template(&self.config.residual, id),
        }
    }

    /// Set `source_sent_id` and drop `sent_id`.
    pub fn rewrite(&self, sentence: &mut Sentence, origin: Origin) -> Result<(), Error> {
        let provenance = self.provenance(sentence.canonical_id()?, origin)?;
        debug!("{} ({}) -> {}", provenance.id, origin, provenance);

        let metadata = sentence.metadata_mut();
        metadata.insert(SOURCE_SENT_ID, Some(provenance.to_string()));
        metadata.remove(SENT_ID);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Metadata, ORIG_FILE_SENTENCE};

    fn rewriter() -> ProvenanceRewriter {
        ProvenanceRewriter::new(&ProvenanceConfig::default())
    }

    #[test]
    fn split_pcc() {
        assert_eq!(split_morph_id("12_morph_7").unwrap(), ("12", "morph_7"));
        assert_eq!(
            split_morph_id("130-2-900001_morph_3.4-s").unwrap(),
            ("130-2-900001", "morph_3.4-s")
        );
    }

    #[test]
    fn split_bad_shapes() {
        for id in ["12", "12_7", "_morph_7", "12_Morph_1"] {
            assert!(
                matches!(split_morph_id(id), Err(Error::MalformedId { .. })),
                "{id}"
            );
        }
    }

    #[test]
    fn pcc_is_deterministic() {
        let r = rewriter();
        let a = r.provenance("12_morph_7", Origin::Pcc).unwrap();
        let b = r.provenance("12_morph_8", Origin::Pcc).unwrap();
        assert_eq!(a.path, "PCC/12/ann_morphosyntax.xml");
        assert_eq!(a.path, b.path);
        assert_eq!(a.id, "morph_7");
        assert_eq!(a.uri, ProvenanceConfig::default().pcc.uri);
    }

    #[test]
    fn residual() {
        let p = rewriter()
            .provenance("130-2-900001_morph_3.4-s", Origin::Residual)
            .unwrap();
        assert_eq!(p.path, "NKJP1M/130-2-900001/ann_morphosyntax.xml");
        assert_eq!(p.id, "morph_3.4-s");
    }

    #[test]
    fn external_keeps_id() {
        let p = rewriter().provenance("weird id", Origin::External).unwrap();
        assert_eq!(p.id, "weird id");
        assert_eq!(p.path, ProvenanceConfig::default().external.path);
    }

    #[test]
    fn rewrite() {
        let mut metadata = Metadata::default();
        metadata.insert(SENT_ID, Some("pcc-12-7".to_string()));
        metadata.insert(ORIG_FILE_SENTENCE, Some("12_morph_7#3".to_string()));
        let mut s = Sentence::new(metadata, vec![]);

        rewriter().rewrite(&mut s, Origin::Pcc).unwrap();
        assert!(!s.metadata().contains(SENT_ID));
        assert_eq!(
            s.metadata().get(SOURCE_SENT_ID),
            Some("http://zil.ipipan.waw.pl/PolishCoreferenceCorpus PCC/12/ann_morphosyntax.xml morph_7")
        );
        // original identifier is left as is
        assert_eq!(s.metadata().get(ORIG_FILE_SENTENCE), Some("12_morph_7#3"));
    }

    #[test]
    fn rewrite_wrong_shape() {
        let mut metadata = Metadata::default();
        metadata.insert(ORIG_FILE_SENTENCE, Some("130-2-900001".to_string()));
        let mut s = Sentence::new(metadata, vec![]);
        assert!(rewriter().rewrite(&mut s, Origin::Residual).is_err());
    }
}
