use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::convert::ConvertOptions;
use crate::prompt::Interaction;

#[derive(Parser, Debug, Clone)]
#[command(name = "sn2joplin")]
#[command(version)]
#[command(about = "Convert a Simplenote export into markdown files for Joplin", long_about = None)]
pub struct Cli {
    /// zip file exported from Simplenote
    pub input: PathBuf,

    /// output directory for the converted notes
    pub output_dir: PathBuf,

    /// Don't print the name of each converted file
    #[arg(short, long)]
    pub quiet: bool,

    /// Print file names only, write nothing
    #[arg(short, long)]
    pub dry_run: bool,

    /// Answer yes to every prompt (overwrite files, continue after errors)
    #[arg(short, long, conflicts_with = "non_interactive")]
    pub yes: bool,

    /// Never prompt: keep existing files and stop at the first error
    #[arg(short, long)]
    pub non_interactive: bool,

    /// Also convert notes from the archive's trash
    #[arg(long)]
    pub include_trash: bool,

    /// Convert at most this many notes
    #[arg(long)]
    pub limit: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, env = "SN2JOPLIN_LOG_LEVEL", default_value = "info")]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn interaction(&self) -> Interaction {
        if self.yes {
            Interaction::AssumeYes
        } else if self.non_interactive {
            Interaction::NonInteractive
        } else {
            Interaction::Ask
        }
    }

    pub fn options(&self) -> ConvertOptions {
        ConvertOptions {
            verbose: !self.quiet || self.dry_run,
            dry_run: self.dry_run,
            limit: self.limit,
        }
    }
}
