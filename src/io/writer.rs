/*! Corpus writing.

Mirror of [super::reader]: the schema declaration (if any) is written first, then sentences,
each one being followed by a blank line.
!*/
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use flate2::{write::GzEncoder, Compression};
use log::debug;

use crate::{
    error::Error,
    model::{Columns, Dataset, Sentence, GLOBAL_COLUMNS},
};

use super::is_gz;

/// Write a sentence: metadata in order, then tokens in `columns` order.
pub fn write_sentence<W: Write>(
    w: &mut W,
    columns: &Columns,
    sentence: &Sentence,
) -> Result<(), Error> {
    for (key, value) in sentence.metadata().iter() {
        match value {
            Some(value) => writeln!(w, "# {key} = {value}")?,
            None => writeln!(w, "# {key}")?,
        }
    }
    for token in sentence.tokens() {
        let mut fields = token.fields(columns);
        if let Some(first) = fields.next() {
            w.write_all(first.as_bytes())?;
        }
        for field in fields {
            w.write_all(b"\t")?;
            w.write_all(field.as_bytes())?;
        }
        w.write_all(b"\n")?;
    }
    w.write_all(b"\n")?;
    Ok(())
}

/// Write a whole collection to `w`.
pub fn write_dataset<W: Write>(w: &mut W, dataset: &Dataset) -> Result<(), Error> {
    if let Some(schema) = dataset.schema() {
        writeln!(w, "# {GLOBAL_COLUMNS} = {schema}")?;
    }
    for sentence in dataset.sentences() {
        write_sentence(w, dataset.columns(), sentence)?;
    }
    Ok(())
}

enum Sink {
    Plain(BufWriter<File>),
    Gz(GzEncoder<BufWriter<File>>),
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Sink::Plain(w) => w.write(buf),
            Sink::Gz(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Sink::Plain(w) => w.flush(),
            Sink::Gz(w) => w.flush(),
        }
    }
}

/// File writer for a collection.
///
/// The schema is written on creation. [CuptWriter::finish] has to be called once every write is done.
pub struct CuptWriter {
    handle: Sink,
    columns: Columns,
    nb_sentences: usize,
}

impl CuptWriter {
    /// Create (or truncate) the file at `dst`, writing the schema declaration of `like`.
    pub fn new(dst: &Path, like: &Dataset) -> Result<Self, Error> {
        let f = BufWriter::new(File::create(dst)?);
        let mut handle = if is_gz(dst) {
            Sink::Gz(GzEncoder::new(f, Compression::default()))
        } else {
            Sink::Plain(f)
        };
        if let Some(schema) = like.schema() {
            writeln!(handle, "# {GLOBAL_COLUMNS} = {schema}")?;
        }
        Ok(Self {
            handle,
            columns: like.columns().clone(),
            nb_sentences: 0,
        })
    }

    pub fn write_single(&mut self, sentence: &Sentence) -> Result<(), Error> {
        write_sentence(&mut self.handle, &self.columns, sentence)?;
        self.nb_sentences += 1;
        Ok(())
    }

    pub fn write<'a, I>(&mut self, sentences: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = &'a Sentence>,
    {
        for sentence in sentences {
            self.write_single(sentence)?;
        }
        Ok(())
    }

    /// Flush and close the file, returning the number of written sentences.
    pub fn finish(self) -> Result<usize, Error> {
        match self.handle {
            Sink::Plain(mut w) => w.flush()?,
            Sink::Gz(w) => w.finish()?.flush()?,
        }
        debug!("wrote {} sentences", self.nb_sentences);
        Ok(self.nb_sentences)
    }
}

/// Write `dataset` to the file at `dst`.
pub fn write_to_path(dst: &Path, dataset: &Dataset) -> Result<usize, Error> {
    let mut writer = CuptWriter::new(dst, dataset)?;
    writer.write(dataset.sentences())?;
    writer.finish()
}
