use crate::{errors::TrackerError, traits::Prompt};
use anyhow::Result;
use std::io::{self, BufRead, Stdin, Write};

pub struct StdInPrompt {
    stdin: Stdin,
}

impl StdInPrompt {
    pub fn new() -> Self {
        StdInPrompt { stdin: io::stdin() }
    }
}

impl Prompt for StdInPrompt {
    fn ask(&mut self, message: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "{message}")?;
        stdout.flush()?;

        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Err(TrackerError::InputClosed.into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Replays canned answers in order, then reports closed input.
#[cfg(test)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn ask(&mut self, message: &str) -> Result<String> {
        self.asked.push(message.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => Err(TrackerError::InputClosed.into()),
        }
    }
}
