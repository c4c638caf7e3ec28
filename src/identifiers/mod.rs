/*! Sentence source identification

Sentences of the corpus come from several sub-corpora, which can (mostly) be told apart by their canonical IDs:

- [SourceIdentifier] only looks at ID prefixes. PCC IDs have no distinctive prefix, so PCC is the fallback.
- [OriginIdentifier] first checks an external set of known IDs (e.g. the IDs of a reference treebank),
  then falls back to the PCC check, then to a residual origin.

Both are total: every ID gets a label.
!*/
mod origin;
mod source;

pub use origin::{Origin, OriginIdentifier};
pub use source::SourceIdentifier;
