/*! Token conversion.

The UPOS and FEATS of a token are computed from its XPOS (and sometimes its lemma) by a chain of [Lookup]s.
The first lookup that knows the token wins:

1. [ParticleLookup]: particles are converted depending on their lemma, with a fixed fallback.
2. [ManualLookup]: hand-curated XPOS overrides.
3. [MajorityLookup]: majority tables built by [super::tagset].

Tokens that no lookup knows get a fixed, easily greppable, unresolved tagging.
!*/
use std::{collections::HashMap, path::Path};

use itertools::Itertools;
use log::{debug, info};

use crate::{
    config::{Config, ConversionConfig},
    error::Error,
    io::{collect_dataset, write_to_path},
    mapping::{LemmaExceptions, ManualMapping, SimpleMapping, Tagging},
    model::{Sentence, Token},
};

/// A conversion strategy.
pub trait Lookup {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Returns `None` if the strategy has nothing to say about the token.
    fn lookup(&self, token: &Token) -> Option<Tagging>;
}

/// Lemma-based conversion of particles.
pub struct ParticleLookup {
    xpos: String,
    upos: String,
    default_feats: String,
    exceptions: LemmaExceptions,
}

impl ParticleLookup {
    pub fn new(config: &ConversionConfig, exceptions: LemmaExceptions) -> Self {
        Self {
            xpos: config.particle_xpos.clone(),
            upos: config.particle_upos.clone(),
            default_feats: config.particle_feats.clone(),
            exceptions,
        }
    }
}

impl Lookup for ParticleLookup {
    fn name(&self) -> &'static str {
        "particle"
    }

    /// Every particle is resolved here, known lemmas or not.
    fn lookup(&self, token: &Token) -> Option<Tagging> {
        if token.xpos() != self.xpos {
            return None;
        }
        let feats = self
            .exceptions
            .get(token.lemma())
            .unwrap_or(self.default_feats.as_str());
        Some(Tagging::new(&self.upos, feats))
    }
}

pub struct ManualLookup(ManualMapping);

impl ManualLookup {
    pub fn new(mapping: ManualMapping) -> Self {
        Self(mapping)
    }
}

impl Lookup for ManualLookup {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn lookup(&self, token: &Token) -> Option<Tagging> {
        self.0.get(token.xpos()).cloned()
    }
}

/// Majority UPOS and FEATS, which have to both know the XPOS.
pub struct MajorityLookup {
    upos: SimpleMapping,
    feats: SimpleMapping,
}

impl MajorityLookup {
    pub fn new(upos: SimpleMapping, feats: SimpleMapping) -> Self {
        Self { upos, feats }
    }
}

impl Lookup for MajorityLookup {
    fn name(&self) -> &'static str {
        "majority"
    }

    fn lookup(&self, token: &Token) -> Option<Tagging> {
        let upos = self.upos.get(token.xpos())?;
        let feats = self.feats.get(token.xpos())?;
        Some(Tagging::new(upos, feats))
    }
}

/// The four tables a standard [Converter] is built from.
#[derive(Debug, Default, Clone)]
pub struct Tables {
    pub majority_upos: SimpleMapping,
    pub majority_feats: SimpleMapping,
    pub lemmas: LemmaExceptions,
    pub manual: ManualMapping,
}

/// Paths of the files holding [Tables].
#[derive(Debug, Clone)]
pub struct TablePaths<'a> {
    pub majority_upos: &'a Path,
    pub majority_feats: &'a Path,
    pub lemmas: &'a Path,
    pub manual: &'a Path,
}

impl Tables {
    pub fn from_paths(paths: &TablePaths) -> Result<Self, Error> {
        let tables = Self {
            majority_upos: SimpleMapping::from_path(paths.majority_upos)?,
            majority_feats: SimpleMapping::from_path(paths.majority_feats)?,
            lemmas: LemmaExceptions::from_path(paths.lemmas)?,
            manual: ManualMapping::from_path(paths.manual)?,
        };
        debug!(
            "loaded {} majority UPOS, {} majority FEATS, {} lemma exceptions, {} manual entries",
            tables.majority_upos.len(),
            tables.majority_feats.len(),
            tables.lemmas.len(),
            tables.manual.len()
        );
        Ok(tables)
    }
}

/// Ordered chain of [Lookup]s, with a fallback.
pub struct Converter {
    chain: Vec<Box<dyn Lookup>>,
    unresolved: Tagging,
}

impl Converter {
    /// Converter without any lookup: everything is unresolved.
    pub fn new(unresolved: Tagging) -> Self {
        Self {
            chain: Vec::new(),
            unresolved,
        }
    }

    /// Append a lookup, with a lower priority than the ones already there.
    pub fn with<L: Lookup + 'static>(mut self, lookup: L) -> Self {
        self.chain.push(Box::new(lookup));
        self
    }

    /// particle > manual > majority.
    pub fn from_tables(tables: Tables, config: &ConversionConfig) -> Self {
        Self::new(Tagging::new(
            &config.unresolved_upos,
            &config.unresolved_feats,
        ))
        .with(ParticleLookup::new(config, tables.lemmas))
        .with(ManualLookup::new(tables.manual))
        .with(MajorityLookup::new(
            tables.majority_upos,
            tables.majority_feats,
        ))
    }

    /// Compute the tagging of `token`, returning `None` if no lookup knows it.
    pub fn resolve(&self, token: &Token) -> Option<Tagging> {
        self.chain.iter().find_map(|lookup| {
            let tagging = lookup.lookup(token)?;
            debug!("{} ({}) -> {:?}", token.xpos(), lookup.name(), tagging);
            Some(tagging)
        })
    }

    /// Overwrite UPOS and FEATS of `token`. Returns `false` if the unresolved tagging was used.
    pub fn convert(&self, token: &mut Token) -> bool {
        let (tagging, resolved) = match self.resolve(token) {
            Some(tagging) => (tagging, true),
            None => (self.unresolved.clone(), false),
        };
        token.set_upos(tagging.upos);
        token.set_feats(tagging.feats);
        resolved
    }

    /// Convert every word of `sentence`, returning the XPOS of unresolved ones.
    pub fn convert_sentence(&self, sentence: &mut Sentence) -> Vec<String> {
        let mut unresolved = Vec::new();
        for token in sentence.words_mut() {
            if !self.convert(token) {
                unresolved.push(token.xpos().to_string());
            }
        }
        unresolved
    }
}

/// Convert the `src` files using the tables at `paths`, writing the result to `dst`.
///
/// Returns the number of unresolved tokens for each unresolved XPOS.
pub fn convert<S: AsRef<str>>(
    src: &[S],
    dst: &Path,
    paths: &TablePaths,
    config: &Config,
) -> Result<HashMap<String, u64>, Error> {
    let tables = Tables::from_paths(paths)?;
    let converter = Converter::from_tables(tables, &config.conversion);

    let mut dataset = collect_dataset(src)?;
    let mut unresolved: HashMap<String, u64> = HashMap::new();
    for sentence in dataset.sentences_mut() {
        for xpos in converter.convert_sentence(sentence) {
            *unresolved.entry(xpos).or_insert(0) += 1;
        }
    }

    write_to_path(dst, &dataset)?;

    info!(
        "[convert] {} sentences, {} unresolved tokens",
        dataset.len(),
        unresolved.values().sum::<u64>()
    );
    for (xpos, count) in unresolved.iter().sorted_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0))) {
        info!("[convert] unresolved {}: {}", xpos, count);
    }
    Ok(unresolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> Tables {
        let majority_upos: SimpleMapping = [("qub", "ADV"), ("subst", "NOUN"), ("adja", "ADV")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let majority_feats: SimpleMapping = [("qub", "Foo=Bar"), ("subst", "_"), ("adja", "_")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let lemmas: LemmaExceptions = [("L", "F")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let manual: ManualMapping = [("adja", Tagging::new("ADJ", "Hyph=Yes"))]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        Tables {
            majority_upos,
            majority_feats,
            lemmas,
            manual,
        }
    }

    fn converter() -> Converter {
        Converter::from_tables(tables(), &ConversionConfig::default())
    }

    fn token(lemma: &str, xpos: &str) -> Token {
        Token::new("1", lemma)
            .with("LEMMA", lemma)
            .with("XPOS", xpos)
            .with("UPOS", "_")
            .with("HEAD", "0")
    }

    #[test]
    fn particle_lemma_beats_majority() {
        let mut t = token("L", "qub");
        assert!(converter().convert(&mut t));
        assert_eq!(t.upos(), "PART");
        assert_eq!(t.feats(), "F");
    }

    #[test]
    fn particle_unknown_lemma() {
        let mut t = token("nie", "qub");
        assert!(converter().convert(&mut t));
        assert_eq!(t.upos(), "PART");
        assert_eq!(t.feats(), "_");
    }

    #[test]
    fn manual_beats_majority() {
        let mut t = token("polsko", "adja");
        converter().convert(&mut t);
        assert_eq!(t.upos(), "ADJ");
        assert_eq!(t.feats(), "Hyph=Yes");
    }

    #[test]
    fn majority() {
        let mut t = token("kot", "subst");
        converter().convert(&mut t);
        assert_eq!(t.upos(), "NOUN");
        assert_eq!(t.feats(), "_");
    }

    #[test]
    fn unresolved() {
        let mut t = token("xyz", "ign");
        assert!(!converter().convert(&mut t));
        assert_eq!(t.upos(), "X");
        assert_eq!(t.feats(), "_");
    }

    #[test]
    fn majority_needs_both_tables() {
        let mut tables = tables();
        tables
            .majority_upos
            .insert("ppron12".to_string(), "PRON".to_string());
        let c = Converter::from_tables(tables, &ConversionConfig::default());
        assert_eq!(c.resolve(&token("ja", "ppron12")), None);
    }

    #[test]
    fn other_fields_untouched() {
        let mut t = token("kot", "subst").with("MISC", "SpaceAfter=No");
        converter().convert(&mut t);
        assert_eq!(t.lemma(), "kot");
        assert_eq!(t.xpos(), "subst");
        assert_eq!(t.get("HEAD"), Some("0"));
        assert_eq!(t.get("MISC"), Some("SpaceAfter=No"));
    }

    #[test]
    fn custom_chain() {
        struct Everything;
        impl Lookup for Everything {
            fn name(&self) -> &'static str {
                "everything"
            }
            fn lookup(&self, _: &Token) -> Option<Tagging> {
                Some(Tagging::new("NOUN", "_"))
            }
        }
        let c = Converter::new(Tagging::new("X", "_")).with(Everything);
        assert_eq!(c.resolve(&token("a", "qub")), Some(Tagging::new("NOUN", "_")));
        assert_eq!(Converter::new(Tagging::new("X", "_")).resolve(&token("a", "qub")), None);
    }

    #[test]
    fn sentence_skips_multiword() {
        let mut s = Sentence::new(
            Default::default(),
            vec![Token::new("1-2", "Gdzieś"), token("kot", "subst"), token("?", "ign")],
        );
        let unresolved = converter().convert_sentence(&mut s);
        assert_eq!(unresolved, vec!["ign".to_string()]);
        assert_eq!(s.tokens()[0].upos(), "_");
        assert_eq!(s.tokens()[1].upos(), "NOUN");
    }
}
