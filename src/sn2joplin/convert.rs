//! Driving the conversion of a whole archive, one note at a time.

use std::path::Path;

use log::{debug, error, warn};

use crate::errors::Result;
use crate::frontmatter::synthesize;
use crate::note::NoteRecord;
use crate::prompt::{Decision, Operator, Prompter, Question};
use crate::utils::pretty_line;
use crate::writer::{write, ConversionOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    /// print each output file name
    pub verbose: bool,
    /// report what would be written, write nothing
    pub dry_run: bool,
    /// stop after this many notes
    pub limit: Option<usize>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            verbose: true,
            dry_run: false,
            limit: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub overwritten: usize,
    pub previewed: usize,
    pub failed: usize,
    pub aborted: bool,
}

impl Summary {
    fn record(&mut self, outcome: &ConversionOutcome) {
        match *outcome {
            ConversionOutcome::Written { overwritten, .. } => {
                self.written += 1;
                if overwritten {
                    self.overwritten += 1;
                }
            }
            ConversionOutcome::Previewed { .. } => self.previewed += 1,
            ConversionOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn print(&self, tty: bool) -> Result<()> {
        pretty_line("written: ", &format!("{}", self.written), tty)?;
        if self.overwritten > 0 {
            print!(" ({} overwritten)", self.overwritten);
        }
        println!();
        if self.previewed > 0 {
            pretty_line("previewed: ", &format!("{}\n", self.previewed), tty)?;
        }
        pretty_line("failed: ", &format!("{}\n", self.failed), tty)?;
        if self.aborted {
            pretty_line("aborted: ", "remaining notes were not converted\n", tty)?;
        }
        Ok(())
    }
}

/// convert a single note into a file under `output_dir`
fn convert_one<P: Prompter>(record: &NoteRecord,
                            output_dir: &Path,
                            options: &ConvertOptions,
                            operator: &mut Operator<P>)
                            -> ConversionOutcome {
    let note = match synthesize(record) {
        Ok(n) => n,
        Err(mut e) => {
            e.desc = format!("note {}: {}", record.id, e.desc);
            return ConversionOutcome::Failed(e);
        }
    };
    let target = output_dir.join(&note.filename);
    debug!("output path = {}", target.display());

    if options.verbose || options.dry_run {
        println!("{}", note.filename);
    }
    if !record.markdown {
        warn!("Format of \"{}\" is not markdown. Result is not known", note.filename);
    }

    write(&target, &note.render(), false, options.dry_run, operator)
}

/// Convert `records` in order.
///
/// Any failed note, whatever the cause, is logged and then put to the
/// operator; declining stops the run and leaves earlier files in place.
pub fn convert<'a, P, I>(records: I,
                         output_dir: &Path,
                         options: &ConvertOptions,
                         operator: &mut Operator<P>)
                         -> Result<Summary>
    where P: Prompter,
          I: IntoIterator<Item = &'a NoteRecord>
{
    let mut summary = Summary::default();
    let limit = options.limit.unwrap_or(usize::MAX);

    for (i, record) in records.into_iter().enumerate() {
        if i >= limit {
            debug!("limit of {} notes reached", limit);
            break;
        }
        let outcome = convert_one(record, output_dir, options, operator);
        summary.record(&outcome);

        if let ConversionOutcome::Failed(ref e) = outcome {
            error!("Error - {}", e);
            if operator.resolve(&Question::ContinueAfterFailure)? == Decision::Abort {
                println!("Program aborted!!!");
                summary.aborted = true;
                break;
            }
        }
    }
    Ok(summary)
}
