/*! Annotation of a corpus through an [Annotator].

Two modes are supported:

- tokenized: every sentence of the input collection is re-annotated, keeping its tokens, metadata and MWE annotations.
  The input schema is kept.
- raw: every non-empty line of the input files is a piece of text to tokenize and annotate.
  The output has no schema declaration.
!*/
use std::{io::BufRead, path::Path};

use log::{debug, info};

use crate::{
    annotate::{annotate_keeping_mwe, Annotator},
    error::Error,
    io::{collect_dataset, expand_paths, open, CuptWriter},
    model::{Dataset, Sentence, TEXT},
};

/// Re-annotate every sentence of `dataset`.
pub fn annotate_dataset<A>(dataset: &Dataset, annotator: &A) -> Result<Dataset, Error>
where
    A: Annotator + ?Sized,
{
    let mut annotated = dataset.empty_like();
    for sentence in dataset.sentences() {
        annotated.push(annotate_keeping_mwe(annotator, sentence)?);
    }
    Ok(annotated)
}

/// Annotate a piece of raw text.
///
/// Resulting sentences get the text as metadata if the annotator did not provide it.
pub fn annotate_text<A>(text: &str, annotator: &A) -> Result<Vec<Sentence>, Error>
where
    A: Annotator + ?Sized,
{
    let mut sentences = annotator.annotate_text(text)?;
    if let [sentence] = sentences.as_mut_slice() {
        if !sentence.metadata().contains(TEXT) {
            sentence.metadata_mut().insert(TEXT, Some(text.to_string()));
        }
    }
    Ok(sentences)
}

/// Annotate the `src` files, writing the annotated collection to `dst`.
///
/// Returns the number of written sentences.
pub fn parse<S, A>(src: &[S], dst: &Path, annotator: &A, raw: bool) -> Result<usize, Error>
where
    S: AsRef<str>,
    A: Annotator + ?Sized,
{
    let written = if raw {
        let mut writer = CuptWriter::new(dst, &Dataset::default())?;
        for path in expand_paths(src)? {
            debug!("[parse] reading {:?}", path);
            for line in open(&path)?.lines() {
                let line = line?;
                let text = line.trim();
                if text.is_empty() {
                    continue;
                }
                writer.write(&annotate_text(text, annotator)?)?;
            }
        }
        writer.finish()?
    } else {
        let dataset = collect_dataset(src)?;
        let annotated = annotate_dataset(&dataset, annotator)?;
        let mut writer = CuptWriter::new(dst, &annotated)?;
        writer.write(annotated.sentences())?;
        writer.finish()?
    };

    info!("[parse] {} sentences written to {:?}", written, dst);
    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::{annotate::tests::NounAnnotator, io::read_dataset};

    const CUPT: &str = "# global.columns = ID FORM LEMMA UPOS XPOS FEATS HEAD DEPREL DEPS MISC PARSEME:MWE
# orig_file_sentence = 130-2-900001#1
# text = Rzucił palenie
1\tRzucił\t_\t_\t_\t_\t_\t_\t_\t_\t1:LVC.full
2\tpalenie\t_\t_\t_\t_\t_\t_\t_\t_\t1

";

    #[test]
    fn tokenized() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.cupt");
        let dst = dir.path().join("out.cupt");
        std::fs::write(&src, CUPT).unwrap();

        let written = parse(&[src.to_str().unwrap()], &dst, &NounAnnotator, false).unwrap();
        assert_eq!(written, 1);

        let out = read_dataset(&dst).unwrap();
        assert!(out.schema().unwrap().ends_with("PARSEME:MWE"));
        let sentence = &out.sentences()[0];
        assert_eq!(sentence.canonical_id().unwrap(), "130-2-900001");
        assert_eq!(sentence.tokens()[0].upos(), "NOUN");
        assert_eq!(sentence.tokens()[0].mwe(), Some("1:LVC.full"));
    }

    #[test]
    fn raw() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("in.txt");
        let dst = dir.path().join("out.conllu");
        let mut f = std::fs::File::create(&src).unwrap();
        writeln!(f, "Ala ma kota\n\n  Kot ma Alę  ").unwrap();
        drop(f);

        let written = parse(&[src.to_str().unwrap()], &dst, &NounAnnotator, true).unwrap();
        assert_eq!(written, 2);

        let out = read_dataset(&dst).unwrap();
        assert_eq!(out.schema(), None);
        assert_eq!(out.sentences()[0].text(), Some("Ala ma kota"));
        assert_eq!(out.sentences()[1].text(), Some("Kot ma Alę"));
        assert_eq!(out.sentences()[1].tokens().len(), 3);
    }
}
