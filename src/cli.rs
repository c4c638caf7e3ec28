//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "parseme-pl", about = "Polish PARSEME corpus tools.")]
/// Holds every command that is callable by the `parseme-pl` command.
pub enum ParsemePl {
    #[structopt(about = "Split a corpus by sentence source")]
    Split(Split),
    #[structopt(about = "Annotate a corpus with an external annotator")]
    Parse(Parse),
    #[structopt(about = "Align a corpus against a reference and rewrite provenance")]
    Align(Align),
    #[structopt(about = "Build majority XPOS tables")]
    Tagset(Tagset),
    #[structopt(about = "Convert XPOS to UPOS and FEATS")]
    Convert(Convert),
}

#[derive(Debug, StructOpt)]
pub struct Split {
    #[structopt(short = "i", required = true, help = "source files (glob patterns allowed)")]
    pub src: Vec<String>,
    #[structopt(short = "o", parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(short = "c", long = "config", parse(from_os_str), help = "JSON configuration file")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Parse command and parameters.
///
/// The annotator is a program reading on stdin and writing CoNLL-U on stdout.
/// Pre-tokenized sentences are sent as CoNLL-U, with the `--arg` arguments.
/// With `--raw`, each non-empty input line is sent as text, with the `--raw-arg` arguments.
pub struct Parse {
    #[structopt(short = "i", required = true, help = "source files (glob patterns allowed)")]
    pub src: Vec<String>,
    #[structopt(short = "o", parse(from_os_str), help = "destination file")]
    pub dst: PathBuf,
    #[structopt(long = "annotator", help = "annotator program")]
    pub annotator: String,
    #[structopt(long = "arg", help = "annotator argument for tokenized input")]
    pub args: Vec<String>,
    #[structopt(long = "raw-arg", help = "annotator argument for raw text input")]
    pub raw_args: Vec<String>,
    #[structopt(long = "raw", help = "source files are raw text, one piece per line")]
    pub raw: bool,
}

#[derive(Debug, StructOpt)]
pub struct Align {
    #[structopt(short = "s", required = true, help = "reference (source) files")]
    pub source: Vec<String>,
    #[structopt(short = "d", required = true, help = "files to align (destination)")]
    pub destination: Vec<String>,
    #[structopt(short = "o", parse(from_os_str), help = "destination file")]
    pub dst: PathBuf,
    #[structopt(long = "strict", help = "fail if a sentence is not in the reference")]
    pub strict: bool,
    #[structopt(short = "c", long = "config", parse(from_os_str), help = "JSON configuration file")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub struct Tagset {
    #[structopt(short = "i", required = true, help = "annotated source files")]
    pub src: Vec<String>,
    #[structopt(long = "upos", parse(from_os_str), help = "XPOS->UPOS table destination")]
    pub upos: PathBuf,
    #[structopt(long = "feats", parse(from_os_str), help = "XPOS->FEATS table destination")]
    pub feats: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Convert {
    #[structopt(short = "i", required = true, help = "source files (glob patterns allowed)")]
    pub src: Vec<String>,
    #[structopt(short = "o", parse(from_os_str), help = "destination file")]
    pub dst: PathBuf,
    #[structopt(long = "upos", parse(from_os_str), help = "majority XPOS->UPOS table")]
    pub upos: PathBuf,
    #[structopt(long = "feats", parse(from_os_str), help = "majority XPOS->FEATS table")]
    pub feats: PathBuf,
    #[structopt(long = "lemmas", parse(from_os_str), help = "particle lemma exceptions table")]
    pub lemmas: PathBuf,
    #[structopt(long = "manual", parse(from_os_str), help = "manual XPOS table")]
    pub manual: PathBuf,
    #[structopt(short = "c", long = "config", parse(from_os_str), help = "JSON configuration file")]
    pub config: Option<PathBuf>,
}
