pub mod archive;
pub mod args;
pub mod convert;
pub mod errors;
pub mod frontmatter;
pub mod logging;
pub mod note;
pub mod prompt;
pub mod utils;
pub mod writer;

use clap::Parser;
use args::Cli;
use errors::Result;
use prompt::{Operator, TerminalPrompter};

pub fn r#run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level);

    let input_name = cli.input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.input.display().to_string());
    println!("Convert \"{}\" to markdown+front matter and save under {}",
             input_name,
             cli.output_dir.display());

    // nothing is converted if the archive can't be read
    let collection = archive::read_archive(&cli.input)?;
    let records = collection.records(cli.include_trash);

    if cli.dry_run {
        println!("Start file conversion ...... (Dry run) ......");
    } else {
        println!("Start file conversion......");
    }

    let mut operator = Operator::new(cli.interaction(), TerminalPrompter);
    let summary = convert::convert(records, &cli.output_dir, &cli.options(), &mut operator)?;
    summary.print(utils::stdout_is_tty())?;

    println!("End file conversion......");
    Ok(())
}
