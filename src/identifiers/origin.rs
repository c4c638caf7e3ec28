//! Origin identification against an external set of IDs.
use std::{collections::HashSet, fmt};

use crate::config::SourceConfig;

use super::SourceIdentifier;

/// Sub-corpus a sentence was originally drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Known to an external, authoritative treebank.
    External,
    Pcc,
    /// Anything else.
    Residual,
}

impl Origin {
    /// Configured name of the origin.
    pub fn name<'c>(&self, config: &'c SourceConfig) -> &'c str {
        match self {
            Origin::External => &config.external,
            Origin::Pcc => &config.pcc,
            Origin::Residual => &config.residual,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Origin::External => "external",
            Origin::Pcc => "pcc",
            Origin::Residual => "residual",
        };
        write!(f, "{name}")
    }
}

/// Resolves origins by priority: membership in the external set, then PCC, then residual.
pub struct OriginIdentifier<'a> {
    sources: &'a SourceIdentifier,
    external: HashSet<String>,
}

impl<'a> OriginIdentifier<'a> {
    pub fn new<I, S>(sources: &'a SourceIdentifier, external: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sources,
            external: external.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of known external IDs.
    pub fn nb_external(&self) -> usize {
        self.external.len()
    }

    pub fn identify(&self, id: &str) -> Origin {
        if self.external.contains(id) {
            Origin::External
        } else if self.sources.is_pcc(id) {
            Origin::Pcc
        } else {
            Origin::Residual
        }
    }
}
