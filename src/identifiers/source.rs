//! Prefix-based source identification.
use crate::config::SourceConfig;

/// Identifies the source of a sentence by the prefix of its ID.
///
/// PCC sentences cannot be told from their IDs, so they are what remains when no prefix matches.
#[derive(Debug, Clone)]
pub struct SourceIdentifier {
    prefixes: Vec<String>,
    pcc: String,
}

impl SourceIdentifier {
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            prefixes: config.prefixes.clone(),
            pcc: config.pcc.clone(),
        }
    }

    /// `true` if `id` matches none of the prefixes.
    pub fn is_pcc(&self, id: &str) -> bool {
        !self.prefixes.iter().any(|p| id.starts_with(p.as_str()))
    }

    /// Returns the first matching prefix as-is, or the PCC tag.
    pub fn identify(&self, id: &str) -> &str {
        self.prefixes
            .iter()
            .find(|p| id.starts_with(p.as_str()))
            .map_or(self.pcc.as_str(), String::as_str)
    }

    /// The PCC tag.
    pub fn pcc(&self) -> &str {
        &self.pcc
    }

    /// Every tag [SourceIdentifier::identify] can return, prefixes first.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.prefixes
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.pcc.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identifier() -> SourceIdentifier {
        SourceIdentifier::new(&SourceConfig::default())
    }

    #[test]
    fn prefixes() {
        let ids = identifier();
        assert_eq!(ids.identify("130-2-900001_morph_3.4-s"), "130-2");
        assert_eq!(ids.identify("120-2-900001"), "120-");
        assert_eq!(ids.identify("330-1"), "330-");
    }

    #[test]
    fn pcc() {
        let ids = identifier();
        assert_eq!(ids.identify("12_morph_7"), "PCC");
        assert_eq!(ids.identify("130-4-1"), "PCC");
        assert_eq!(ids.identify(""), "PCC");
        assert!(ids.is_pcc("12_morph_7"));
        assert!(!ids.is_pcc("310-2-1"));
    }

    #[test]
    fn no_regex() {
        let config = SourceConfig {
            prefixes: vec!["1.0".to_string()],
            ..Default::default()
        };
        let ids = SourceIdentifier::new(&config);
        assert_eq!(ids.identify("1x0"), "PCC");
        assert_eq!(ids.identify("1.0-3"), "1.0");
    }

    #[test]
    fn tags() {
        let ids = identifier();
        let tags: Vec<&str> = ids.tags().collect();
        assert_eq!(tags.len(), 7);
        assert_eq!(tags.last(), Some(&"PCC"));
    }
}
