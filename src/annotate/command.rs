//! Annotation through an external command speaking CoNLL-U.
use std::{
    io::{Cursor, ErrorKind, Write},
    process::{Command, Stdio},
    thread,
};

use log::debug;

use crate::{
    error::Error,
    io::{parse, writer::write_sentence},
    model::{Columns, Sentence},
};

use super::Annotator;

/// Runs a program once per request, feeding it on stdin and reading CoNLL-U from its stdout.
///
/// Pre-tokenized sentences are sent as CoNLL-U with `args`, raw text is sent as is with `raw_args`.
/// A non-zero exit status is an error.
#[derive(Debug, Clone)]
pub struct CommandAnnotator {
    program: String,
    args: Vec<String>,
    raw_args: Vec<String>,
}

impl CommandAnnotator {
    pub fn new(program: &str, args: Vec<String>, raw_args: Vec<String>) -> Self {
        Self {
            program: program.to_string(),
            args,
            raw_args,
        }
    }

    fn run(&self, args: &[String], input: String) -> Result<Vec<Sentence>, Error> {
        debug!("running {} {:?}", self.program, args);
        let mut child = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // write from another thread so that a full stdout pipe can't block us
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| Error::Annotation("no stdin".to_string()))?;
        let feeder = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;
        let fed = feeder
            .join()
            .map_err(|_| Error::Annotation("stdin writer panicked".to_string()))?;

        // the exit status comes first: a failing annotator often stops reading early
        if !output.status.success() {
            return Err(Error::Annotation(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        match fed {
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                return Err(Error::Annotation(format!(
                    "{} did not read its whole input",
                    self.program
                )))
            }
            Err(e) => return Err(e.into()),
            Ok(()) => (),
        }

        parse(Cursor::new(output.stdout))
            .map(|dataset| dataset.into_sentences())
            .map_err(|e| Error::Annotation(format!("unreadable output of {}: {}", self.program, e)))
    }
}

impl Annotator for CommandAnnotator {
    fn annotate_text(&self, text: &str) -> Result<Vec<Sentence>, Error> {
        self.run(&self.raw_args, text.to_string())
    }

    fn annotate_sentence(&self, sentence: &Sentence) -> Result<Sentence, Error> {
        let mut input = Vec::new();
        write_sentence(&mut input, &Columns::default(), sentence)?;
        let input = String::from_utf8(input)
            .map_err(|e| Error::Annotation(format!("invalid input: {e}")))?;

        let mut sentences = self.run(&self.args, input)?;
        if sentences.len() != 1 {
            return Err(Error::Annotation(format!(
                "expected 1 sentence, got {}",
                sentences.len()
            )));
        }
        Ok(sentences.remove(0))
    }
}
