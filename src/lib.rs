pub mod calculator;
pub mod cli;
pub mod errors;
pub mod repl;

pub use repl::{run, Session, State};

#[cfg(test)]
mod test {
    use crate::errors::Result;

    /// Helper function to verify the text of an error
    pub fn assert_error_text<T: std::fmt::Debug>(result: Result<T>, want: &str) {
        match result {
            Err(e) => {
                assert_eq!(e.to_string(), want);
            }
            Ok(v) => {
                panic!("no error, got {:?}", v);
            }
        }
    }

    #[test]
    fn test_error_text() {
        use crate::calculator::{create, Operands};

        assert_error_text(
            create("pow", Operands::new(2.0, 8.0)),
            "Unsupported operation: pow",
        );
        assert_error_text(
            create("div", Operands::new(2.0, 0.0)).and_then(|c| c.evaluate()),
            "Division by zero is not allowed.",
        );
    }
}
