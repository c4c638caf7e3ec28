/*! splitting

Corpus splitting by source.

Each sentence goes to the file of the source its canonical ID belongs to (see [SourceIdentifier]).
A file is written for every known source, even if no sentence comes from it.
!*/
use std::{collections::HashMap, path::Path};

use log::info;

use crate::{
    config::SourceConfig,
    error::Error,
    identifiers::SourceIdentifier,
    io::{collect_dataset, CuptWriter},
    model::Sentence,
};

/// Group sentences by source tag, keeping their relative order.
///
/// Every tag of `sources` is a key of the result.
pub fn split_by_source<'a>(
    sentences: &'a [Sentence],
    sources: &SourceIdentifier,
) -> Result<HashMap<String, Vec<&'a Sentence>>, Error> {
    let mut groups: HashMap<String, Vec<&'a Sentence>> = sources
        .tags()
        .map(|tag| (tag.to_string(), Vec::new()))
        .collect();

    for sentence in sentences {
        let tag = sources.identify(sentence.canonical_id()?);
        groups
            .get_mut(tag)
            .ok_or_else(|| Error::Custom(format!("{tag} is not a known source")))?
            .push(sentence);
    }
    Ok(groups)
}

/// Split the `src` files into `<dst>/<source>.cupt` files.
///
/// `dst` is created if needed. Returns the number of sentences written for each source.
pub fn split<S: AsRef<str>>(
    src: &[S],
    dst: &Path,
    config: &SourceConfig,
) -> Result<HashMap<String, usize>, Error> {
    let dataset = collect_dataset(src)?;
    let sources = SourceIdentifier::new(config);
    let groups = split_by_source(dataset.sentences(), &sources)?;

    std::fs::create_dir_all(dst)?;

    let mut written = HashMap::with_capacity(groups.len());
    for (tag, sentences) in groups {
        let path = dst.join(format!("{tag}.cupt"));
        info!("[{}] writing {} sentences to {:?}", tag, sentences.len(), path);

        let mut writer = CuptWriter::new(&path, &dataset)?;
        writer.write(sentences)?;
        written.insert(tag, writer.finish()?);
    }
    Ok(written)
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
    fn groups() {
        let sources = SourceIdentifier::new(&SourceConfig::default());
        let sentences = vec![
            sentence("130-2-1_morph_1.1-s#1"),
            sentence("12_morph_7#1"),
            sentence("130-2-2_morph_1.1-s#1"),
            sentence("310-2-1_morph_3.1-s"),
        ];
        let groups = split_by_source(&sentences, &sources).unwrap();

        assert_eq!(groups.len(), 7);
        assert_eq!(groups["130-2"].len(), 2);
        assert!(std::ptr::eq(groups["130-2"][1], &sentences[2]));
        assert_eq!(groups["PCC"].len(), 1);
        assert_eq!(groups["310-"].len(), 1);
        assert!(groups["120-"].is_empty());
    }

    #[test]
    fn missing_id() {
        let sources = SourceIdentifier::new(&SourceConfig::default());
        let sentences = vec![Sentence::default()];
        assert!(split_by_source(&sentences, &sources).is_err());
    }
}
