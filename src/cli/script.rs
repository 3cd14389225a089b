use log::error;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Line source reading commands from a file or other buffered reader. A read
/// error ends the input and is kept for the caller to collect with finish.
pub struct Script<R = BufReader<File>> {
    lines: Lines<R>,
    error: Option<std::io::Error>,
}

impl Script {
    /// Opens a script file
    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Script> {
        Ok(Script::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: BufRead> Script<R> {
    /// Returns a new script reading from a buffered reader
    pub fn new(reader: R) -> Script<R> {
        Script {
            lines: reader.lines(),
            error: None,
        }
    }

    /// Consumes the script, returning the read error that ended it, if any
    pub fn finish(self) -> std::io::Result<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<R: BufRead> Iterator for Script<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.error.is_some() {
            return None;
        }

        match self.lines.next()? {
            Ok(line) => Some(line),
            Err(e) => {
                error!("failed to read script: {}", e);
                self.error = Some(e);
                None
            }
        }
    }
}
