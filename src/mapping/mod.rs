/*! Tag mapping tables

Three tables are used to convert language-specific tags (XPOS) into universal ones (UPOS + FEATS):

- [SimpleMapping]: one `key\tvalue` line per entry. Majority UPOS and majority FEATS are stored in two independent files.
- [LemmaExceptions]: `lemma\txpos\tmarker\tfeats` lines, keyed by lemma. Only used for particles.
- [ManualMapping]: a header line, then `xpos\tupos\tfeats[\t...]` lines. Hand-curated overrides.

Tables are tab-separated, without any quoting. Lines with a wrong number of fields
and duplicate keys are errors.
!*/
mod lemma;
mod manual;
mod simple;

use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::Error;

pub use lemma::LemmaExceptions;
pub use manual::ManualMapping;
pub use simple::SimpleMapping;

/// UPOS and FEATS a XPOS converts to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tagging {
    pub upos: String,
    pub feats: String,
}

impl Tagging {
    pub fn new(upos: &str, feats: &str) -> Self {
        Self {
            upos: upos.to_string(),
            feats: feats.to_string(),
        }
    }
}

/// Read every non-empty line as a record, along with its (1-based) line number.
///
/// Field count is *not* checked here.
fn read_records<R: Read>(reader: R, skip_header: bool) -> Result<Vec<(u64, StringRecord)>, Error> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(skip_header)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut records = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line());
        records.push((line, record));
    }
    Ok(records)
}

/// Fail with a [Error::MalformedLine] if `record` does not have an acceptable number of fields.
fn check_len(line: u64, record: &StringRecord, expected: usize, at_least: bool) -> Result<(), Error> {
    let ok = if at_least {
        record.len() >= expected
    } else {
        record.len() == expected
    };
    if ok {
        Ok(())
    } else {
        Err(Error::MalformedLine {
            line,
            reason: format!(
                "expected {}{} fields, found {}",
                if at_least { "at least " } else { "" },
                expected,
                record.len()
            ),
        })
    }
}

fn write_records<W, I, R>(writer: W, records: I) -> Result<(), Error>
where
    W: Write,
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);
    for record in records {
        wtr.write_record(record)?;
    }
    wtr.flush()?;
    Ok(())
}

fn open(path: &Path) -> Result<BufReader<File>, Error> {
    Ok(BufReader::new(File::open(path)?))
}
