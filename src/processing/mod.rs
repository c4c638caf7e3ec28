/*! Corpus processing

Each submodule holds the building blocks of a command, and the command itself as a function taking file paths:

- [split]: split a corpus by sentence source.
- [parse]: (re)annotate a corpus through an external annotator.
- [align]: align a corpus against a reference, fix morphosyntax and provenance.
- [tagset]: build majority XPOS mappings.
- [convert]: convert tokens using the mapping tables.
!*/
pub mod align;
pub mod convert;
pub mod index;
pub mod parse;
pub mod provenance;
pub mod split;
pub mod tagset;

pub use index::SentenceIndex;
pub use provenance::ProvenanceRewriter;
