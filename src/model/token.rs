//! Token record.
use super::Columns;

pub const ID: &str = "ID";
pub const FORM: &str = "FORM";
pub const LEMMA: &str = "LEMMA";
pub const UPOS: &str = "UPOS";
pub const XPOS: &str = "XPOS";
pub const FEATS: &str = "FEATS";
/// PARSEME multiword expression annotation.
pub const MWE: &str = "PARSEME:MWE";

/// Placeholder for an empty field.
pub const NO_VALUE: &str = "_";

/// A single token line.
///
/// Fields that are read or rewritten by the processing steps are typed,
/// the remaining columns (HEAD, DEPREL, MISC...) are kept verbatim in `extra`, in reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    id: String,
    form: String,
    lemma: String,
    upos: String,
    xpos: String,
    feats: String,
    mwe: Option<String>,
    extra: Vec<(String, String)>,
}

impl Token {
    /// Create a token with every field but `ID` and `FORM` set to `_`.
    pub fn new(id: &str, form: &str) -> Self {
        Self {
            id: id.to_string(),
            form: form.to_string(),
            lemma: NO_VALUE.to_string(),
            upos: NO_VALUE.to_string(),
            xpos: NO_VALUE.to_string(),
            feats: NO_VALUE.to_string(),
            mwe: None,
            extra: Vec::new(),
        }
    }

    /// Build a token from the fields of a line.
    ///
    /// `fields` has to be as long as `columns`, which is checked by the reader.
    pub fn from_fields(columns: &Columns, fields: &[&str]) -> Self {
        let mut token = Token::new(NO_VALUE, NO_VALUE);
        for (column, value) in columns.names().iter().zip(fields) {
            token.set(column, value.to_string());
        }
        token
    }

    /// Convenience builder, mostly used to forge tokens in tests.
    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.set(column, value.to_string());
        self
    }

    /// Get the value of a column, if the token has one.
    pub fn get(&self, column: &str) -> Option<&str> {
        match column {
            ID => Some(&self.id),
            FORM => Some(&self.form),
            LEMMA => Some(&self.lemma),
            UPOS => Some(&self.upos),
            XPOS => Some(&self.xpos),
            FEATS => Some(&self.feats),
            MWE => self.mwe.as_deref(),
            other => self
                .extra
                .iter()
                .find(|(name, _)| name == other)
                .map(|(_, value)| value.as_str()),
        }
    }

    /// Set the value of a column. Unknown columns are appended to `extra`.
    pub fn set(&mut self, column: &str, value: String) {
        match column {
            ID => self.id = value,
            FORM => self.form = value,
            LEMMA => self.lemma = value,
            UPOS => self.upos = value,
            XPOS => self.xpos = value,
            FEATS => self.feats = value,
            MWE => self.mwe = Some(value),
            other => match self.extra.iter_mut().find(|(name, _)| name == other) {
                Some((_, v)) => *v = value,
                None => self.extra.push((other.to_string(), value)),
            },
        }
    }

    /// Values in `columns` order. Columns the token knows nothing about are `_`.
    pub fn fields<'a>(&'a self, columns: &'a Columns) -> impl Iterator<Item = &'a str> + 'a {
        columns
            .names()
            .iter()
            .map(move |column| self.get(column).unwrap_or(NO_VALUE))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn form(&self) -> &str {
        &self.form
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn upos(&self) -> &str {
        &self.upos
    }

    pub fn xpos(&self) -> &str {
        &self.xpos
    }

    pub fn feats(&self) -> &str {
        &self.feats
    }

    pub fn mwe(&self) -> Option<&str> {
        self.mwe.as_deref()
    }

    pub fn set_upos(&mut self, upos: String) {
        self.upos = upos;
    }

    pub fn set_feats(&mut self, feats: String) {
        self.feats = feats;
    }

    /// Remove the MWE annotation, returning it.
    pub fn take_mwe(&mut self) -> Option<String> {
        self.mwe.take()
    }

    pub fn set_mwe(&mut self, mwe: Option<String>) {
        self.mwe = mwe;
    }

    /// `true` for multiword ranges (`3-4`) and empty nodes (`5.1`),
    /// which carry no morphosyntax of their own.
    pub fn is_multiword(&self) -> bool {
        self.id.contains(['-', '.'])
    }
}
