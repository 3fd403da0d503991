//! Asking the operator before destructive or run-ending actions.
//!
//! What to do with an answer is decided by [`decide`]; where the answer
//! comes from is a [`Prompter`]. The conversion code only ever talks to an
//! [`Operator`], so tests can script the answers.

use std::collections::VecDeque;
use std::io::{stdin, stdout, BufRead, Write};

use log::debug;

use crate::errors::Result;

/// something that can answer a yes/no question
pub trait Prompter {
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Reads answers from stdin. Anything but `y`/`yes` (any case) is a no,
/// including end of input.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        print!("{} y/(n) ", question);
        stdout().flush()?;
        let mut input = String::new();
        stdin().lock().read_line(&mut input)?;
        Ok(is_affirmative(&input))
    }
}

/// Answers from a fixed list, then `no` once the list runs out.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<bool>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[bool]) -> ScriptedPrompter {
        ScriptedPrompter {
            answers: answers.iter().copied().collect(),
            asked: vec![],
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}

pub fn is_affirmative(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("y") || input.eq_ignore_ascii_case("yes")
}

/// how prompts are resolved for the whole run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// ask every time
    Ask,
    /// overwrite existing files and keep going after failures
    AssumeYes,
    /// keep existing files and stop at the first failure
    NonInteractive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Question {
    Overwrite { file_name: String },
    ContinueAfterFailure,
}

impl Question {
    pub fn text(&self) -> String {
        match *self {
            Question::Overwrite { ref file_name } => {
                format!("File \"{}\" already exists. Overwrite?", file_name)
            }
            Question::ContinueAfterFailure => "Error encountered. Continue?".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// try the same write again, replacing the existing file
    Retry,
    /// give up on this note, move to the next one
    Skip,
    /// stop processing the archive
    Abort,
}

/// map an operator answer to the action taken
pub fn decide(question: &Question, answer: bool) -> Decision {
    match (question, answer) {
        (&Question::Overwrite { .. }, true) => Decision::Retry,
        (&Question::Overwrite { .. }, false) => Decision::Skip,
        (&Question::ContinueAfterFailure, true) => Decision::Skip,
        (&Question::ContinueAfterFailure, false) => Decision::Abort,
    }
}

/// An interaction mode plus the prompter used when it says to ask
pub struct Operator<P: Prompter> {
    pub mode: Interaction,
    pub prompter: P,
}

impl<P: Prompter> Operator<P> {
    pub fn new(mode: Interaction, prompter: P) -> Operator<P> {
        Operator {
            mode: mode,
            prompter: prompter,
        }
    }

    pub fn resolve(&mut self, question: &Question) -> Result<Decision> {
        let answer = match self.mode {
            Interaction::Ask => self.prompter.confirm(&question.text())?,
            Interaction::AssumeYes => true,
            Interaction::NonInteractive => false,
        };
        let decision = decide(question, answer);
        debug!("{:?} -> answer {} -> {:?}", question, answer, decision);
        Ok(decision)
    }
}
