/*! Alignment of two sentence collections

Destination sentences are matched to source sentences by canonical ID.
The source side is indexed once (and has to have unique IDs), then each destination sentence is looked up, in order.

Matched sentences whose `text` differ are reported as [Divergence]s, which do not stop the alignment.
Unmatched destination sentences are kept with no source: callers that need every sentence to be matched
use [Alignment::require_complete].

[reconcile] uses an alignment to bring a curated copy (e.g. the PARSEME corpus) in line with its sources.
!*/
use std::{collections::HashMap, path::Path};

use itertools::Itertools;
use log::{info, warn};

use crate::{
    config::{Config, SourceConfig},
    error::Error,
    identifiers::{Origin, OriginIdentifier, SourceIdentifier},
    io::{collect_dataset, CuptWriter},
    model::{Columns, Sentence, FORM, ID, MWE},
};

use super::{ProvenanceRewriter, SentenceIndex};

/// Text mismatch between aligned sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    pub id: String,
    pub source: Option<String>,
    pub destination: Option<String>,
}

/// Destination sentences paired with their (optional) source counterpart.
#[derive(Debug)]
pub struct Alignment<'s, 'd> {
    pairs: Vec<(Option<&'s Sentence>, &'d Sentence)>,
    divergences: Vec<Divergence>,
}

impl<'s, 'd> Alignment<'s, 'd> {
    /// Pairs, in destination order.
    pub fn pairs(&self) -> &[(Option<&'s Sentence>, &'d Sentence)] {
        &self.pairs
    }

    pub fn divergences(&self) -> &[Divergence] {
        &self.divergences
    }

    /// Number of destination sentences without source.
    pub fn nb_missing(&self) -> usize {
        self.pairs.iter().filter(|(src, _)| src.is_none()).count()
    }

    /// Fail on the first destination sentence that has no source.
    pub fn require_complete(&self) -> Result<(), Error> {
        match self.pairs.iter().find(|(src, _)| src.is_none()) {
            Some((_, dst)) => Err(Error::MissingSentence(dst.canonical_id()?.to_string())),
            None => Ok(()),
        }
    }

    pub fn into_pairs(self) -> Vec<(Option<&'s Sentence>, &'d Sentence)> {
        self.pairs
    }
}

/// Align `destination` against an already indexed source.
pub fn align_with<'s, 'd>(
    index: &SentenceIndex<'s>,
    destination: &'d [Sentence],
) -> Result<Alignment<'s, 'd>, Error> {
    let mut pairs = Vec::with_capacity(destination.len());
    let mut divergences = Vec::new();

    for dst in destination {
        let id = dst.canonical_id()?;
        let src = index.get(id);
        if let Some(src) = src {
            if src.text() != dst.text() {
                warn!(
                    "[{}] text mismatch:\n  source:      {:?}\n  destination: {:?}",
                    id,
                    src.text(),
                    dst.text()
                );
                divergences.push(Divergence {
                    id: id.to_string(),
                    source: src.text().map(String::from),
                    destination: dst.text().map(String::from),
                });
            }
        }
        pairs.push((src, dst));
    }

    Ok(Alignment { pairs, divergences })
}

/// Align `destination` against `source`.
///
/// Fails if `source` has duplicate canonical IDs, or if a sentence has no ID.
pub fn align<'s, 'd>(
    source: &'s [Sentence],
    destination: &'d [Sentence],
) -> Result<Alignment<'s, 'd>, Error> {
    let index = SentenceIndex::new(source)?;
    align_with(&index, destination)
}

/// Copy every column of `columns` but ID, FORM and MWE from `source` tokens to `destination` ones.
///
/// Nothing is done (and `false` is returned) if the sentences do not have the same token forms.
pub fn copy_morphosyntax(source: &Sentence, destination: &mut Sentence, columns: &Columns) -> bool {
    let same_forms = source.tokens().len() == destination.tokens().len()
        && source
            .tokens()
            .iter()
            .zip(destination.tokens())
            .all(|(s, d)| s.id() == d.id() && s.form() == d.form());
    if !same_forms {
        return false;
    }

    let copied: Vec<&String> = columns
        .names()
        .iter()
        .filter(|c| ![ID, FORM, MWE].contains(&c.as_str()))
        .collect();
    for (src, dst) in source.tokens().iter().zip(destination.tokens_mut()) {
        for column in &copied {
            if let Some(value) = src.get(column) {
                dst.set(column, value.to_string());
            }
        }
    }
    true
}

/// Figures of a [reconcile] run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub nb_sentences: usize,
    pub nb_missing: usize,
    pub nb_divergences: usize,
    /// Matched sentences whose morphosyntax was taken from the source.
    pub nb_copied: usize,
    pub by_origin: HashMap<Origin, usize>,
}

impl ReconcileSummary {
    /// Origin names and counts, most frequent first, then by name.
    pub fn origin_counts<'c>(&self, config: &'c SourceConfig) -> Vec<(&'c str, usize)> {
        self.by_origin
            .iter()
            .map(|(origin, count)| (origin.name(config), *count))
            .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)))
            .collect()
    }
}

/// Align `destination` files against `source` ones and write the reconciled destination to `dst`.
///
/// Destination sentences whose ID is in the source are external ones: when their tokens match, they get the
/// morphosyntax of the source. Every sentence then gets its provenance rewritten according to its origin.
/// With `strict`, every destination sentence has to be found in the source.
pub fn reconcile<S: AsRef<str>>(
    source: &[S],
    destination: &[S],
    dst: &Path,
    strict: bool,
    config: &Config,
) -> Result<ReconcileSummary, Error> {
    let source = collect_dataset(source)?;
    let destination = collect_dataset(destination)?;
    info!(
        "[align] {} source sentences, {} destination sentences",
        source.len(),
        destination.len()
    );

    let index = SentenceIndex::new(source.sentences())?;
    let alignment = align_with(&index, destination.sentences())?;
    if strict {
        alignment.require_complete()?;
    }

    let sources = SourceIdentifier::new(&config.sources);
    let origins = OriginIdentifier::new(&sources, index.ids());
    let rewriter = ProvenanceRewriter::new(&config.provenance);

    let mut summary = ReconcileSummary {
        nb_sentences: destination.len(),
        nb_missing: alignment.nb_missing(),
        nb_divergences: alignment.divergences().len(),
        ..Default::default()
    };

    let mut writer = CuptWriter::new(dst, &destination)?;
    for (src, dst_sentence) in alignment.pairs() {
        let mut sentence = (*dst_sentence).clone();
        let origin = origins.identify(sentence.canonical_id()?);
        *summary.by_origin.entry(origin).or_insert(0) += 1;

        if let (Origin::External, Some(src)) = (origin, src) {
            if copy_morphosyntax(src, &mut sentence, source.columns()) {
                summary.nb_copied += 1;
            } else {
                warn!(
                    "[{}] tokens differ, keeping destination morphosyntax",
                    sentence.canonical_id()?
                );
            }
        }

        rewriter.rewrite(&mut sentence, origin)?;
        writer.write_single(&sentence)?;
    }
    writer.finish()?;

    info!(
        "[align] {} sentences, {} without source, {} text mismatches, {} updated from source",
        summary.nb_sentences, summary.nb_missing, summary.nb_divergences, summary.nb_copied
    );
    for (name, count) in summary.origin_counts(&config.sources) {
        info!("[align] {}: {}", name, count);
    }
    Ok(summary)
}
