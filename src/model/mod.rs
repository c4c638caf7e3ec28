/*! Record model

Sentences, tokens and the collection they live in.

A [Dataset] holds the column schema declared at the head of a `.cupt`/`.conllu` file,
so that it can be carried unchanged to any output produced from it.
[Sentence]s hold ordered [Metadata] and [Token]s, and [Token]s hold the fields
every operation relies on (LEMMA, XPOS, UPOS, FEATS) as typed fields, every other column being kept verbatim.
!*/
mod columns;
mod dataset;
mod sentence;
mod token;

pub use columns::Columns;
pub use dataset::Dataset;
pub use sentence::{Metadata, Sentence};
pub use sentence::{GLOBAL_COLUMNS, ORIG_FILE_SENTENCE, SENT_ID, SOURCE_SENT_ID, TEXT};
pub use token::Token;
pub use token::{FEATS, FORM, ID, LEMMA, MWE, NO_VALUE, UPOS, XPOS};
