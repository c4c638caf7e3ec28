/*! Corpus reading.

Sentences are separated by blank lines. Inside a sentence, `#` lines are metadata and come before token lines,
which hold exactly one tab-separated field per declared column.

A `# global.columns = ...` comment at the very head of a file declares its schema.

Metadata keys and values are trimmed, and the writer emits them as `# key = value` (or `# key`):
comments such as `#sent_id=1` come out normalized as `# sent_id = 1`. Token lines are kept as they are.
!*/
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use flate2::read::MultiGzDecoder;
use log::{debug, error, info};

use crate::{
    error::Error,
    model::{Columns, Dataset, Metadata, Sentence, Token, GLOBAL_COLUMNS},
};

use super::is_gz;

/// Split a comment (without its `#`) into key and optional value.
fn parse_comment(comment: &str) -> (&str, Option<&str>) {
    let comment = comment.trim();
    match comment.split_once('=') {
        Some((key, value)) => (key.trim(), Some(value.trim())),
        None => (comment, None),
    }
}

/// Parse a whole collection.
pub fn parse<R: BufRead>(reader: R) -> Result<Dataset, Error> {
    let mut schema: Option<String> = None;
    let mut columns = Columns::default();
    let mut sentences = Vec::new();
    let mut metadata = Metadata::default();
    let mut tokens = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        let line_nb = idx as u64 + 1;

        if line.is_empty() {
            if !metadata.is_empty() || !tokens.is_empty() {
                sentences.push(Sentence::new(
                    std::mem::take(&mut metadata),
                    std::mem::take(&mut tokens),
                ));
            }
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            if !tokens.is_empty() {
                return Err(Error::MalformedLine {
                    line: line_nb,
                    reason: "comment after token lines".to_string(),
                });
            }
            let (key, value) = parse_comment(comment);
            if key == GLOBAL_COLUMNS {
                if schema.is_some() || !sentences.is_empty() || !metadata.is_empty() {
                    return Err(Error::MalformedLine {
                        line: line_nb,
                        reason: "column declaration is not at the head of the file".to_string(),
                    });
                }
                let declaration = value.unwrap_or_default();
                columns = Columns::parse(declaration)?;
                schema = Some(declaration.to_string());
            } else {
                metadata.push(key, value.map(String::from));
            }
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != columns.len() {
            return Err(Error::MalformedLine {
                line: line_nb,
                reason: format!(
                    "expected {} fields, found {}",
                    columns.len(),
                    fields.len()
                ),
            });
        }
        tokens.push(Token::from_fields(&columns, &fields));
    }

    // last sentence when the file does not end with a blank line
    if !metadata.is_empty() || !tokens.is_empty() {
        sentences.push(Sentence::new(metadata, tokens));
    }

    Dataset::new(schema, sentences)
}

/// Open a file for buffered reading, decompressing it if its name ends in `.gz`.
pub fn open(path: &Path) -> Result<Box<dyn BufRead>, Error> {
    let f = File::open(path)?;
    if is_gz(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(f))))
    } else {
        Ok(Box::new(BufReader::new(f)))
    }
}

/// Read a single `.cupt`/`.conllu` file, decompressing it if its name ends in `.gz`.
pub fn read_dataset(path: &Path) -> Result<Dataset, Error> {
    let dataset = parse(open(path)?).map_err(|e| {
        error!("[{}] {}", path.display(), e);
        e
    })?;

    debug!("[{}] {} sentences", path.display(), dataset.len());
    Ok(dataset)
}

/// Expand glob patterns into the list of matching files.
///
/// A pattern that matches nothing is an error.
pub fn expand_paths<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let matched = glob::glob(pattern)?.collect::<Result<Vec<PathBuf>, _>>()?;
        if matched.is_empty() {
            return Err(Error::Custom(format!("no file matches {pattern:?}")));
        }
        paths.extend(matched);
    }
    Ok(paths)
}

/// Collect the sentences of several files (or glob patterns) into a single [Dataset].
///
/// Files have to declare the same schema.
pub fn collect_dataset<S: AsRef<str>>(patterns: &[S]) -> Result<Dataset, Error> {
    let mut paths = expand_paths(patterns)?.into_iter();
    let mut dataset = match paths.next() {
        Some(path) => read_dataset(&path)?,
        None => return Err(Error::Custom("no input file".to_string())),
    };
    for path in paths {
        dataset.extend(read_dataset(&path)?)?;
    }
    info!("collected {} sentences", dataset.len());
    Ok(dataset)
}
