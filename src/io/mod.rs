/*!
# IO utilities

Reading and writing of `.cupt`/`.conllu` collections.

Files whose name ends in `.gz` are transparently decompressed on reading and compressed on writing.
!*/
pub mod reader;
pub mod writer;

use std::path::Path;

pub use reader::{collect_dataset, expand_paths, open, parse, read_dataset};
pub use writer::{write_dataset, write_to_path, CuptWriter};

/// `true` if the file should go through gzip.
fn is_gz(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}
