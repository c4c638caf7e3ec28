/*! External annotation

Morphosyntactic annotation (tokenization, tagging, parsing) is delegated to an external pipeline, seen through the [Annotator] trait.

Annotators do not know about the MWE column: [annotate_keeping_mwe] removes it before handing a sentence over,
and puts it back token by token on the result.
!*/
mod command;

pub use command::CommandAnnotator;

use crate::{error::Error, model::Sentence};

pub trait Annotator {
    /// Annotate raw text, which may yield several sentences.
    fn annotate_text(&self, text: &str) -> Result<Vec<Sentence>, Error>;

    /// Annotate an already tokenized sentence.
    ///
    /// Implementors have to return a sentence with the same number of tokens, or an error.
    fn annotate_sentence(&self, sentence: &Sentence) -> Result<Sentence, Error>;
}

/// Annotate a tokenized sentence, keeping its metadata and MWE annotations.
pub fn annotate_keeping_mwe<A>(annotator: &A, sentence: &Sentence) -> Result<Sentence, Error>
where
    A: Annotator + ?Sized,
{
    let mut stripped = sentence.clone();
    let mwes: Vec<Option<String>> = stripped
        .tokens_mut()
        .iter_mut()
        .map(|token| token.take_mwe())
        .collect();

    let (_, mut tokens) = annotator.annotate_sentence(&stripped)?.into_parts();
    if tokens.len() != mwes.len() {
        return Err(Error::Annotation(format!(
            "{} tokens sent, {} returned",
            mwes.len(),
            tokens.len()
        )));
    }

    for (token, mwe) in tokens.iter_mut().zip(mwes) {
        token.set_mwe(mwe);
    }
    Ok(Sentence::new(sentence.metadata().clone(), tokens))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::{Metadata, Token, MWE, TEXT};

    /// Tags every token as a noun, and refuses to see MWE annotations.
    pub struct NounAnnotator;

    impl Annotator for NounAnnotator {
        fn annotate_text(&self, text: &str) -> Result<Vec<Sentence>, Error> {
            let tokens = text
                .split_whitespace()
                .enumerate()
                .map(|(i, form)| Token::new(&(i + 1).to_string(), form).with("UPOS", "NOUN"))
                .collect();
            Ok(vec![Sentence::new(Metadata::default(), tokens)])
        }

        fn annotate_sentence(&self, sentence: &Sentence) -> Result<Sentence, Error> {
            if sentence.tokens().iter().any(|t| t.mwe().is_some()) {
                return Err(Error::Annotation("unexpected MWE column".to_string()));
            }
            let tokens = sentence
                .tokens()
                .iter()
                .map(|t| Token::new(t.id(), t.form()).with("UPOS", "NOUN"))
                .collect();
            Ok(Sentence::new(Metadata::default(), tokens))
        }
    }

    /// Drops the last token.
    struct LossyAnnotator;

    impl Annotator for LossyAnnotator {
        fn annotate_text(&self, _: &str) -> Result<Vec<Sentence>, Error> {
            Ok(vec![])
        }

        fn annotate_sentence(&self, sentence: &Sentence) -> Result<Sentence, Error> {
            let mut tokens = sentence.tokens().to_vec();
            tokens.pop();
            Ok(Sentence::new(Metadata::default(), tokens))
        }
    }

    fn sentence() -> Sentence {
        let mut metadata = Metadata::default();
        metadata.insert(TEXT, Some("Rzucił palenie".to_string()));
        Sentence::new(
            metadata,
            vec![
                Token::new("1", "Rzucił").with(MWE, "1:LVC.full"),
                Token::new("2", "palenie").with(MWE, "1"),
            ],
        )
    }

    #[test]
    fn keep_mwe() {
        let annotated = annotate_keeping_mwe(&NounAnnotator, &sentence()).unwrap();
        assert_eq!(annotated.text(), Some("Rzucił palenie"));
        let tokens = annotated.tokens();
        assert_eq!(tokens[0].upos(), "NOUN");
        assert_eq!(tokens[0].mwe(), Some("1:LVC.full"));
        assert_eq!(tokens[1].mwe(), Some("1"));
    }

    #[test]
    fn token_count_changed() {
        assert!(matches!(
            annotate_keeping_mwe(&LossyAnnotator, &sentence()),
            Err(Error::Annotation(_))
        ));
    }
}
