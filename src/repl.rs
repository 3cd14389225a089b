use crate::calculator::{self, History, Number, Operands, Operator};
use crate::errors::{Error, Result};
use log::{debug, info, warn};

pub const BANNER: &str = "Type 'help' to see commands.";
pub const EMPTY_PROMPT: &str = "Please type a command. Try 'help'.";
pub const NO_HISTORY: &str = "No calculations yet.";
pub const FAREWELL: &str = "Goodbye!";

pub static HELP_TEXT: &str = "Commands:
  add a b        -> add two numbers
  sub a b        -> subtract b from a
  mul a b        -> multiply a and b (alias: multiply)
  div a b        -> divide a by b (alias: divide)
  history        -> show successful calculations
  help           -> show this help
  exit           -> quit";

/// Whether a session continues to accept commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Stopped,
}

/// A calculator session, owning the history of its successful calculations
#[derive(Debug, Default)]
pub struct Session {
    history: History,
}

impl Session {
    /// Returns a new session with an empty history
    pub fn new() -> Session {
        Session::default()
    }

    /// Returns the session's history
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Processes a single input line, returning the resulting state and the
    /// message to show the user
    pub fn handle_line(&mut self, line: &str) -> (State, String) {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return (State::Running, EMPTY_PROMPT.to_string());
        };
        let command = command.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        debug!("dispatching command '{}' with {} argument(s)", command, args.len());

        match command.as_str() {
            "help" => (State::Running, HELP_TEXT.to_string()),
            "history" => (State::Running, self.format_history()),
            "exit" => (State::Stopped, FAREWELL.to_string()),
            cmd if Operator::from_token(cmd).is_some() => match self.calculate(cmd, &args) {
                Ok(msg) => (State::Running, msg),
                Err(e) => {
                    warn!("rejected '{}': {}", line.trim(), e);
                    (State::Running, format!("Error: {}", e))
                }
            },
            cmd => (
                State::Running,
                format!("Unknown command: {}. Try 'help'.", cmd),
            ),
        }
    }

    /// Parses operands, evaluates an operation and records the result
    fn calculate(&mut self, command: &str, args: &[&str]) -> Result<String> {
        let [a, b] = args else {
            return Err(Error::Usage);
        };

        let (Some(x), Some(y)) = (Number::parse(a), Number::parse(b)) else {
            return Err(Error::InvalidNumbers(a.to_string(), b.to_string()));
        };

        let calc = calculator::create(command, Operands::new(x.value(), y.value()))?;
        let result = calc.evaluate()?;
        let expression = calc.describe(calc.symbol());

        debug!("recording '{}' = {}", expression, result);
        let msg = format!("{} = {}", expression, Number(result));
        self.history.record(expression, result);

        Ok(msg)
    }

    /// Formats the history as a numbered list
    fn format_history(&self) -> String {
        if self.history.is_empty() {
            return NO_HISTORY.to_string();
        }

        self.history
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{}. {} = {}", i + 1, e.expression, Number(e.result)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Runs a session over a source of input lines, passing the banner and one
/// message per processed line to the sink. Stops on 'exit' or when the
/// source is exhausted, and returns the finished session.
pub fn run<I, S, F>(source: I, mut sink: F) -> Session
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str),
{
    let mut session = Session::new();
    info!("session started");
    sink(BANNER);

    for line in source {
        let (state, msg) = session.handle_line(line.as_ref());
        sink(&msg);

        if state == State::Stopped {
            break;
        }
    }

    info!(
        "session finished with {} recorded calculation(s)",
        session.history.len()
    );
    session
}
