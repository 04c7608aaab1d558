use std::io::{stdout, Write};
use anyhow::Result;
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::base::InputRequest;

/// A validated operator answer, with the number of tries it took.
#[derive(Debug)]
pub struct Answer {
    pub text: String,
    pub attempts: u32,
}

/// Drives a single request against the console: render the prompt, read
/// a raw line, validate it, and re-prompt until the answer is accepted
/// or input ends. The retry loop lives here, not in the request.
pub trait InputHandler {
    /// Ask one question. `None` means the operator cancelled (Ctrl-C or
    /// end of input).
    fn ask(&mut self, request: &dyn InputRequest) -> Result<Option<Answer>>;

    /// Display a message to the operator
    fn display(&self, message: &str);
}

pub struct ConsolePrompt {
    editor: DefaultEditor,
}

impl ConsolePrompt {
    pub fn new() -> Self {
        Self {
            editor: DefaultEditor::new().expect("Failed to create editor"),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        // Check if we're in a terminal
        let in_terminal = atty::is(atty::Stream::Stdin);
        if !in_terminal {
            // If not in terminal, use standard input
            print!("{}", prompt);
            stdout().flush()?;
            let mut input = String::new();
            let read = std::io::stdin().read_line(&mut input)?;
            if read == 0 {
                return Ok(None);
            }
            // Strip the line terminator only. Leading and interior
            // whitespace is significant to validation.
            let line = input.strip_suffix('\n').unwrap_or(&input);
            let line = line.strip_suffix('\r').unwrap_or(line);
            return Ok(Some(line.to_string()));
        }

        match self.editor.readline(prompt) {
            Ok(line) => {
                self.editor.add_history_entry(&line)?;
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                Ok(None)
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                Ok(None)
            }
            Err(err) => Err(anyhow::anyhow!("Error reading line: {}", err)),
        }
    }
}

impl InputHandler for ConsolePrompt {
    fn ask(&mut self, request: &dyn InputRequest) -> Result<Option<Answer>> {
        let prompt = format!("{} ", request.prompt());
        let mut attempts = 0u32;

        loop {
            attempts += 1;
            let line = match self.read_line(&prompt)? {
                Some(line) => line,
                None => return Ok(None),
            };

            if request.is_valid(&line) {
                return Ok(Some(Answer {
                    text: line,
                    attempts,
                }));
            }

            self.display(&format!("{}", "Not a valid answer, try again.".yellow()));
        }
    }

    fn display(&self, message: &str) {
        println!("{}", message);
        stdout().flush().expect("Failed to flush stdout");
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}
