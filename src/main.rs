//! # parseme-pl
//!
//! Command line tools to build the Polish PARSEME corpus.
//!
//! ```sh
//! parseme-pl 0.1.0
//! Polish PARSEME corpus tools.
//!
//! USAGE:
//!     parseme-pl <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     align      Align a corpus against a reference and rewrite provenance
//!     convert    Convert XPOS to UPOS and FEATS
//!     help       Prints this message or the help of the given subcommand(s)
//!     parse      Annotate a corpus with an external annotator
//!     split      Split a corpus by sentence source
//!     tagset     Build majority XPOS tables
//! ```
//!
//! Logging is controlled through `RUST_LOG` (e.g. `RUST_LOG=parseme_pl=info`).
use structopt::StructOpt;

use parseme_pl::{
    annotate::CommandAnnotator,
    config::Config,
    error::Error,
    processing::{align, convert, parse, split, tagset},
};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::ParsemePl::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::ParsemePl::Split(s) => {
            let config = Config::from_opt_path(s.config.as_deref())?;
            let written = split::split(&s.src, &s.dst, &config.sources)?;
            for (tag, count) in written {
                info!("[split] {}: {}", tag, count);
            }
        }

        cli::ParsemePl::Parse(p) => {
            let annotator = CommandAnnotator::new(&p.annotator, p.args, p.raw_args);
            parse::parse(&p.src, &p.dst, &annotator, p.raw)?;
        }

        cli::ParsemePl::Align(a) => {
            let config = Config::from_opt_path(a.config.as_deref())?;
            let summary = align::reconcile(&a.source, &a.destination, &a.dst, a.strict, &config)?;
            if summary.nb_divergences > 0 {
                warn!("[align] {} sentences have a different text", summary.nb_divergences);
            }
        }

        cli::ParsemePl::Tagset(t) => {
            tagset::tagset(&t.src, &t.upos, &t.feats)?;
        }

        cli::ParsemePl::Convert(c) => {
            let config = Config::from_opt_path(c.config.as_deref())?;
            let paths = convert::TablePaths {
                majority_upos: &c.upos,
                majority_feats: &c.feats,
                lemmas: &c.lemmas,
                manual: &c.manual,
            };
            convert::convert(&c.src, &c.dst, &paths, &config)?;
        }
    };
    Ok(())
}
