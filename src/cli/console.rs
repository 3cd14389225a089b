use log::{debug, error};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Interactive line source reading from the terminal. Ends when the user
/// presses Ctrl-C or Ctrl-D.
pub struct Console {
    editor: DefaultEditor,
    prompt: String,
}

impl Console {
    /// Returns a new console using the given prompt
    pub fn new(prompt: &str) -> Result<Console, ReadlineError> {
        Ok(Console {
            editor: DefaultEditor::new()?,
            prompt: prompt.to_string(),
        })
    }
}

impl Iterator for Console {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                    debug!("failed to add line to console history: {}", e);
                }
                Some(line)
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => None,
            Err(e) => {
                error!("failed to read from console: {}", e);
                None
            }
        }
    }
}
