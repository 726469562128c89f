//! Interactive prompting.
//!
//! Everything that asks the user a question goes through [`Prompter`], so the
//! run can be driven by a terminal or by scripted answers.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Asks a question and returns the user's raw answer line.
pub trait Prompter {
    /// Shows `question` and reads one line of input, without the line ending.
    ///
    /// End of input yields an empty answer.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the terminal cannot be read or written.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Prompts on stdout and reads answers from stdin.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdioPrompter;

impl Prompter for StdioPrompter {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{question}")?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Replays a fixed list of answers; answers run out as empty strings.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    /// Creates a prompter that answers with `answers` in order.
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    #[must_use]
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// Returns true only for `yes` or `y`, case-insensitive, surrounding whitespace ignored.
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
}

/// Asks a yes/no question; anything but `yes`/`y` is a no.
///
/// # Errors
///
/// Returns an I/O error from the prompter.
pub fn confirm(prompter: &mut dyn Prompter, question: &str) -> io::Result<bool> {
    let answer = prompter.ask(&format!("{question} (yes/no): "))?;
    Ok(is_affirmative(&answer))
}

/// Asks for a value, falling back to `default` on an empty answer.
///
/// # Errors
///
/// Returns an I/O error from the prompter.
pub fn ask_with_default(
    prompter: &mut dyn Prompter,
    question: &str,
    default: Option<&str>,
) -> io::Result<String> {
    let question = match default {
        Some(value) => format!("{question} [{value}]: "),
        None => format!("{question}: "),
    };
    let answer = prompter.ask(&question)?;
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(default.unwrap_or_default().to_string())
    } else {
        Ok(answer.to_string())
    }
}
