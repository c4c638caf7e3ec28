/*! Configuration

Every fixed value the processing relies on (source prefixes, origin names, corpus URIs and path templates, conversion tags)
lives in [Config], which is handed to the classifiers, the rewriter and the converter.

Defaults match the Polish PARSEME corpus. They can be overridden with a JSON file where every section and field is optional:

```json
{
  "sources": { "prefixes": ["130-2", "120-"] },
  "conversion": { "unresolved_upos": "X" }
}
```
!*/
use std::{fs::File, io::BufReader, path::Path};

use log::debug;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

/// Placeholder replaced by the file identifier in path templates.
pub const FILE_PLACEHOLDER: &str = "{file}";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sources: SourceConfig,
    pub provenance: ProvenanceConfig,
    pub conversion: ConversionConfig,
}

/// Sub-corpora identification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// ID prefixes that identify a source by themselves.
    pub prefixes: Vec<String>,
    /// Tag of sentences matching none of `prefixes`.
    pub pcc: String,
    /// Name of the external, ID-set identified origin.
    pub external: String,
    /// Name of the catch-all origin.
    pub residual: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            prefixes: ["130-2", "130-3", "130-5", "120-", "310-", "330-"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            pcc: "PCC".to_string(),
            external: "PDB".to_string(),
            residual: "NKJP".to_string(),
        }
    }
}

/// Where a sentence can be found in its original corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusLocation {
    pub uri: String,
    /// Path inside the corpus. May contain [FILE_PLACEHOLDER].
    pub path: String,
}

impl CorpusLocation {
    fn new(uri: &str, path: &str) -> Self {
        Self {
            uri: uri.to_string(),
            path: path.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvenanceConfig {
    pub external: CorpusLocation,
    pub pcc: CorpusLocation,
    pub residual: CorpusLocation,
}

impl Default for ProvenanceConfig {
    fn default() -> Self {
        Self {
            external: CorpusLocation::new(
                "http://zil.ipipan.waw.pl/PDB",
                "PDB-UD/pl_pdb-ud.conllu",
            ),
            pcc: CorpusLocation::new(
                "http://zil.ipipan.waw.pl/PolishCoreferenceCorpus",
                "PCC/{file}/ann_morphosyntax.xml",
            ),
            residual: CorpusLocation::new(
                "http://clip.ipipan.waw.pl/NationalCorpusOfPolish",
                "NKJP1M/{file}/ann_morphosyntax.xml",
            ),
        }
    }
}

/// Fixed values of the XPOS conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// XPOS for which the lemma exceptions apply.
    pub particle_xpos: String,
    pub particle_upos: String,
    /// FEATS of particles whose lemma is not in the exceptions.
    pub particle_feats: String,
    pub unresolved_upos: String,
    pub unresolved_feats: String,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            particle_xpos: "qub".to_string(),
            particle_upos: "PART".to_string(),
            particle_feats: "_".to_string(),
            unresolved_upos: "X".to_string(),
            unresolved_feats: "_".to_string(),
        }
    }
}

impl Config {
    /// Load a JSON configuration file, then validate it.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        let config: Config = serde_json::from_reader(reader)?;
        config.validate()?;
        debug!("loaded configuration {:#?}", config);
        Ok(config)
    }

    /// Load the configuration from `path` if there's one, or use the defaults.
    pub fn from_opt_path(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.sources.prefixes.is_empty() {
            return Err(Error::Config("no source prefixes".to_string()));
        }
        if self.sources.prefixes.iter().any(String::is_empty) {
            return Err(Error::Config("empty source prefix".to_string()));
        }

        let p = &self.provenance;
        for location in [&p.external, &p.pcc, &p.residual] {
            Url::parse(&location.uri)?;
        }
        for location in [&p.pcc, &p.residual] {
            if !location.path.contains(FILE_PLACEHOLDER) {
                return Err(Error::Config(format!(
                    "path template {:?} has no {} placeholder",
                    location.path, FILE_PLACEHOLDER
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn partial_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            r#"{{"sources": {{"prefixes": ["120-"]}}, "conversion": {{"unresolved_upos": "UNK"}}}}"#
        )
        .unwrap();

        let config = Config::from_path(f.path()).unwrap();
        assert_eq!(config.sources.prefixes, vec!["120-".to_string()]);
        assert_eq!(config.sources.pcc, "PCC");
        assert_eq!(config.conversion.unresolved_upos, "UNK");
        assert_eq!(config.conversion.particle_xpos, "qub");
        assert_eq!(config.provenance, ProvenanceConfig::default());
    }

    #[test]
    fn bad_uri() {
        let mut config = Config::default();
        config.provenance.external.uri = "not a uri".to_string();
        assert!(matches!(config.validate(), Err(Error::Url(_))));
    }

    #[test]
    fn template_without_placeholder() {
        let mut config = Config::default();
        config.provenance.pcc.path = "PCC/ann_morphosyntax.xml".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn no_prefixes() {
        let mut config = Config::default();
        config.sources.prefixes.clear();
        assert!(config.validate().is_err());
    }
}
