/*! # parseme-pl

Tools to build the Polish PARSEME corpus from its sources:

- sentences are classified by source (from their `orig_file_sentence` ID) and origin (external treebank, PCC, residual NKJP),
- corpora are aligned against a reference treebank, and get their provenance metadata rewritten,
- XPOS tags are converted to UPOS and FEATS using majority, manual and lemma-based tables.

This project can be used both as a command line tool and as a lib.
!*/
pub mod annotate;
pub mod config;
pub mod error;
pub mod identifiers;
pub mod io;
pub mod mapping;
pub mod model;
pub mod processing;
