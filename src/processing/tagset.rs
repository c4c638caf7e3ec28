//! This module builds majority XPOS mappings from an annotated corpus.
//!
//! For every XPOS, it counts the UPOS and FEATS it occurs with, then keeps the most frequent of each.
//! Ties are broken by keeping the value that was seen first for that XPOS.

use std::{collections::HashMap, path::Path};

use itertools::Itertools;
use log::{debug, info};

use crate::{
    error::Error,
    io::collect_dataset,
    mapping::SimpleMapping,
    model::{Dataset, Sentence, Token},
};

/// Value counts, in first observation order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Counter {
    counts: Vec<(String, u64)>,
}

impl Counter {
    /// Add 1 to the count of `value`, creating the entry if it is not counted yet.
    #[inline]
    pub fn add(&mut self, value: &str) {
        match self.counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((value.to_string(), 1)),
        }
    }

    pub fn get(&self, value: &str) -> u64 {
        self.counts
            .iter()
            .find(|(v, _)| v == value)
            .map_or(0, |(_, count)| *count)
    }

    /// Most frequent value. On ties, the first observed one.
    pub fn majority(&self) -> Option<&str> {
        let mut best: Option<&(String, u64)> = None;
        for entry in &self.counts {
            match best {
                Some((_, best_count)) if entry.1 <= *best_count => (),
                _ => best = Some(entry),
            }
        }
        best.map(|(value, _)| value.as_str())
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

/// Key to [Counter] table.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable(HashMap<String, Counter>);

impl FrequencyTable {
    pub fn add(&mut self, key: &str, value: &str) {
        // avoid allocating a key for already seen tags
        match self.0.get_mut(key) {
            Some(counter) => counter.add(value),
            None => {
                let mut counter = Counter::default();
                counter.add(value);
                self.0.insert(key.to_string(), counter);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Counter> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reduce each counter to its majority value.
    pub fn majority(&self) -> SimpleMapping {
        self.0
            .iter()
            .filter_map(|(key, counter)| {
                counter
                    .majority()
                    .map(|value| (key.clone(), value.to_string()))
            })
            .collect()
    }
}

/// XPOS->UPOS and XPOS->FEATS observations.
#[derive(Debug, Default)]
pub struct TagsetStats {
    upos: FrequencyTable,
    feats: FrequencyTable,
    nb_tokens: u64,
}

impl TagsetStats {
    /// Record a token. Multiword ranges and empty nodes are ignored.
    pub fn add_token(&mut self, token: &Token) {
        if token.is_multiword() {
            return;
        }
        self.upos.add(token.xpos(), token.upos());
        self.feats.add(token.xpos(), token.feats());
        self.nb_tokens += 1;
    }

    pub fn add_sentence(&mut self, sentence: &Sentence) {
        sentence.words().for_each(|token| self.add_token(token));
    }

    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut stats = Self::default();
        for sentence in dataset.sentences() {
            stats.add_sentence(sentence);
        }
        stats
    }

    pub fn upos(&self) -> &FrequencyTable {
        &self.upos
    }

    pub fn feats(&self) -> &FrequencyTable {
        &self.feats
    }

    pub fn nb_tokens(&self) -> u64 {
        self.nb_tokens
    }

    /// Majority UPOS and majority FEATS mappings.
    pub fn majority(&self) -> (SimpleMapping, SimpleMapping) {
        (self.upos.majority(), self.feats.majority())
    }
}

/// Build majority tables from the `src` files, writing them to `upos_dst` and `feats_dst`.
pub fn tagset<S: AsRef<str>>(
    src: &[S],
    upos_dst: &Path,
    feats_dst: &Path,
) -> Result<TagsetStats, Error> {
    let dataset = collect_dataset(src)?;
    let stats = TagsetStats::from_dataset(&dataset);
    let (upos, feats) = stats.majority();

    // tags that are not always converted the same way
    for (xpos, counter) in stats.upos().0.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
        if counter.counts.len() > 1 {
            debug!(
                "[tagset] {} -> {}",
                xpos,
                counter
                    .counts
                    .iter()
                    .map(|(upos, count)| format!("{upos}:{count}"))
                    .join(" ")
            );
        }
    }

    upos.to_path(upos_dst)?;
    feats.to_path(feats_dst)?;
    info!(
        "[tagset] {} tokens, {} XPOS tags",
        stats.nb_tokens(),
        upos.len()
    );
    Ok(stats)
}
