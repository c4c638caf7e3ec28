//! Sentence and sentence metadata.
use crate::error::Error;

use super::Token;

/// Original identifier of a sentence. The canonical ID is what comes before the first `#`.
pub const ORIG_FILE_SENTENCE: &str = "orig_file_sentence";
pub const TEXT: &str = "text";
/// Identifier assigned by a specific sub-corpus.
pub const SENT_ID: &str = "sent_id";
pub const SOURCE_SENT_ID: &str = "source_sent_id";
/// Schema declaration, found at the head of a file.
pub const GLOBAL_COLUMNS: &str = "global.columns";

/// Ordered `# key = value` comments.
///
/// Comments that have no value (`# newdoc`) are kept with a `None` value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata(Vec<(String, Option<String>)>);

impl Metadata {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Insert an entry, replacing in place the value of an existing key.
    pub fn insert(&mut self, key: &str, value: Option<String>) {
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.0.push((key.to_string(), value)),
        }
    }

    /// Append an entry, even if the key is already there.
    pub fn push(&mut self, key: &str, value: Option<String>) {
        self.0.push((key.to_string(), value));
    }

    pub fn remove(&mut self, key: &str) -> Option<Option<String>> {
        let pos = self.0.iter().position(|(k, _)| k == key)?;
        Some(self.0.remove(pos).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    metadata: Metadata,
    tokens: Vec<Token>,
}

impl Sentence {
    pub fn new(metadata: Metadata, tokens: Vec<Token>) -> Self {
        Self { metadata, tokens }
    }

    /// Canonical ID, taken from `orig_file_sentence`.
    ///
    /// Fails if the sentence has no `orig_file_sentence`.
    pub fn canonical_id(&self) -> Result<&str, Error> {
        self.metadata
            .get(ORIG_FILE_SENTENCE)
            .map(canonical)
            .ok_or(Error::MissingMetadata(ORIG_FILE_SENTENCE))
    }

    pub fn text(&self) -> Option<&str> {
        self.metadata.get(TEXT)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    /// Iterate over tokens that carry morphosyntax, skipping multiword ranges and empty nodes.
    pub fn words(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.is_multiword())
    }

    pub fn words_mut(&mut self) -> impl Iterator<Item = &mut Token> {
        self.tokens.iter_mut().filter(|t| !t.is_multiword())
    }

    pub fn into_parts(self) -> (Metadata, Vec<Token>) {
        (self.metadata, self.tokens)
    }
}

/// Keep what comes before the first `#`.
pub fn canonical(orig_file_sentence: &str) -> &str {
    orig_file_sentence
        .split_once('#')
        .map_or(orig_file_sentence, |(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_orig(orig: &str) -> Sentence {
        let mut metadata = Metadata::default();
        metadata.insert(ORIG_FILE_SENTENCE, Some(orig.to_string()));
        Sentence::new(metadata, vec![])
    }

    #[test]
    fn canonical_id() {
        let s = with_orig("130-2-900001_morph_3.4-s#2");
        assert_eq!(s.canonical_id().unwrap(), "130-2-900001_morph_3.4-s");
    }

    #[test]
    fn canonical_id_first_hash() {
        assert_eq!(canonical("a#b#c"), "a");
        assert_eq!(canonical("no-hash"), "no-hash");
        assert_eq!(canonical("#"), "");
    }

    #[test]
    fn canonical_id_missing() {
        let s = Sentence::default();
        assert!(matches!(
            s.canonical_id(),
            Err(Error::MissingMetadata(ORIG_FILE_SENTENCE))
        ));
    }

    #[test]
    fn metadata_order() {
        let mut m = Metadata::default();
        m.insert("sent_id", Some("1".to_string()));
        m.insert("text", Some("Ala ma kota.".to_string()));
        m.insert("newpar", None);
        m.insert("sent_id", Some("2".to_string()));

        let keys: Vec<&str> = m.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["sent_id", "text", "newpar"]);
        assert_eq!(m.get("sent_id"), Some("2"));
        assert_eq!(m.get("newpar"), None);
        assert!(m.contains("newpar"));

        assert_eq!(m.remove("sent_id"), Some(Some("2".to_string())));
        assert_eq!(m.len(), 2);
        assert_eq!(m.remove("sent_id"), None);
    }
}
