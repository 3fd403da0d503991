//! Writing converted notes without silently clobbering anything.

use std::fs::{create_dir, remove_file, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::errors::{Error, ErrorKind};
use crate::prompt::{Decision, Operator, Prompter, Question};

/// Result of writing one note
#[derive(Debug)]
pub enum ConversionOutcome {
    Written { path: PathBuf, overwritten: bool },
    /// dry run, nothing touched
    Previewed { path: PathBuf },
    Failed(Error),
}

/// Each recoverable failure gets at most one retry: one overwrite prompt and
/// one directory creation per file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Attempting,
    NeedsOverwriteConfirm,
    NeedsParentDir,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn open_target(target: &Path, overwrite: bool) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true);
    if overwrite {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    options.open(target)
}

fn fill(mut file: File, content: &str) -> io::Result<()> {
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

fn io_failure(target: &Path, err: io::Error) -> ConversionOutcome {
    let desc = format!("can't write {}: {}", target.display(), err);
    ConversionOutcome::Failed(Error::new(ErrorKind::IoFailure(err), desc))
}

/// Write `content` to `target`.
///
/// Without `allow_overwrite` the file is created exclusively; if it already
/// exists the operator is asked whether to replace it. A missing parent
/// directory is created (one level only). With `dry_run` nothing is touched.
pub fn write<P: Prompter>(target: &Path,
                          content: &str,
                          allow_overwrite: bool,
                          dry_run: bool,
                          operator: &mut Operator<P>)
                          -> ConversionOutcome {
    if dry_run {
        return ConversionOutcome::Previewed { path: target.to_path_buf() };
    }

    let mut overwrite = allow_overwrite;
    let mut replaced = allow_overwrite && target.exists();
    let mut asked_overwrite = false;
    let mut made_parent = false;
    let mut state = State::Attempting;

    loop {
        debug!("{}: {:?} (overwrite = {})", target.display(), state, overwrite);
        state = match state {
            State::Attempting => match open_target(target, overwrite) {
                Ok(file) => {
                    return match fill(file, content) {
                        Ok(()) => ConversionOutcome::Written {
                            path: target.to_path_buf(),
                            overwritten: replaced,
                        },
                        Err(e) => {
                            // our own fresh file: don't leave half of it behind
                            if !overwrite {
                                if let Err(rm) = remove_file(target) {
                                    warn!("can't remove partial {}: {}", target.display(), rm);
                                }
                            }
                            io_failure(target, e)
                        }
                    };
                }
                Err(ref e) if e.kind() == io::ErrorKind::AlreadyExists && !asked_overwrite => {
                    State::NeedsOverwriteConfirm
                }
                Err(ref e) if e.kind() == io::ErrorKind::NotFound && !made_parent => {
                    State::NeedsParentDir
                }
                Err(e) => return io_failure(target, e),
            },
            State::NeedsOverwriteConfirm => {
                asked_overwrite = true;
                let question = Question::Overwrite { file_name: file_name(target) };
                match operator.resolve(&question) {
                    Ok(Decision::Retry) => {
                        info!("File \"{}\" will be overwritten.", file_name(target));
                        overwrite = true;
                        replaced = true;
                        State::Attempting
                    }
                    Ok(_) => {
                        let desc = format!("\"{}\" exists and was not overwritten",
                                           file_name(target));
                        return ConversionOutcome::Failed(
                            Error::new(ErrorKind::UserDeclinedOverwrite, desc));
                    }
                    Err(e) => return ConversionOutcome::Failed(e),
                }
            }
            State::NeedsParentDir => {
                made_parent = true;
                let parent = match target.parent() {
                    Some(p) if !p.as_os_str().is_empty() => p,
                    _ => {
                        let err = io::Error::new(io::ErrorKind::NotFound, "no parent directory");
                        return io_failure(target, err);
                    }
                };
                match create_dir(parent) {
                    Ok(()) => {
                        info!("created directory {}", parent.display());
                        State::Attempting
                    }
                    Err(e) => {
                        let desc = format!("can't create directory {}", parent.display());
                        return ConversionOutcome::Failed(
                            Error::new(ErrorKind::DirectoryCreateFailed, desc).with_detail(e));
                    }
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{Interaction, ScriptedPrompter};

    #[test]
    fn dry_run_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("note.md");
        let mut op = Operator::new(Interaction::Ask, ScriptedPrompter::new(&[]));
        let outcome = write(&target, "x", false, true, &mut op);
        assert!(matches!(outcome, ConversionOutcome::Previewed { .. }));
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn missing_parent_is_created_once() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out").join("note.md");
        let mut op = Operator::new(Interaction::Ask, ScriptedPrompter::new(&[]));
        let outcome = write(&target, "hello", false, false, &mut op);
        assert!(matches!(outcome, ConversionOutcome::Written { overwritten: false, .. }));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "hello");
    }

    #[test]
    fn only_one_directory_level_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a").join("b").join("note.md");
        let mut op = Operator::new(Interaction::Ask, ScriptedPrompter::new(&[]));
        match write(&target, "hello", false, false, &mut op) {
            ConversionOutcome::Failed(e) => {
                assert!(matches!(e.kind, ErrorKind::DirectoryCreateFailed))
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn explicit_overwrite_replaces_without_asking() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("note.md");
        std::fs::write(&target, "old").unwrap();
        let mut op = Operator::new(Interaction::Ask, ScriptedPrompter::new(&[]));
        let outcome = write(&target, "new", true, false, &mut op);
        assert!(matches!(outcome, ConversionOutcome::Written { overwritten: true, .. }));
        assert!(op.prompter.asked.is_empty());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
    }

    #[test]
    fn declined_overwrite_leaves_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("note.md");
        std::fs::write(&target, b"original bytes").unwrap();
        let mut op = Operator::new(Interaction::Ask, ScriptedPrompter::new(&[false]));
        match write(&target, "replacement", false, false, &mut op) {
            ConversionOutcome::Failed(e) => {
                assert!(matches!(e.kind, ErrorKind::UserDeclinedOverwrite))
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(std::fs::read(&target).unwrap(), b"original bytes");
        assert_eq!(op.prompter.asked, vec!["File \"note.md\" already exists. Overwrite?"]);
    }

    #[test]
    fn other_io_errors_are_not_retried() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("plain");
        std::fs::write(&not_a_dir, "x").unwrap();
        let target = not_a_dir.join("note.md");
        let mut op = Operator::new(Interaction::AssumeYes, ScriptedPrompter::new(&[]));
        match write(&target, "hello", false, false, &mut op) {
            ConversionOutcome::Failed(e) => {
                assert!(matches!(e.kind, ErrorKind::IoFailure(_)))
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(std::fs::read_to_string(&not_a_dir).unwrap(), "x");
    }
}
