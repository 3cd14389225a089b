use super::calculation::{Calculation, Operands};
use crate::errors::{Error, Result};

/// An arithmetic operator selected by a command token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Every command token accepted by from_token
    pub const ALL_TOKENS: [&str; 6] = ["add", "sub", "mul", "multiply", "div", "divide"];

    /// Returns the operator named by a token, ignoring case and surrounding
    /// whitespace
    pub fn from_token(token: &str) -> Option<Operator> {
        match token.trim().to_lowercase().as_str() {
            "add" => Some(Operator::Add),
            "sub" => Some(Operator::Sub),
            "mul" | "multiply" => Some(Operator::Mul),
            "div" | "divide" => Some(Operator::Div),
            _ => None,
        }
    }

    /// Returns the display symbol for the operator
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "×",
            Operator::Div => "÷",
        }
    }

    /// Binds the operator to a pair of operands
    pub fn bind(self, operands: Operands) -> Calculation {
        match self {
            Operator::Add => Calculation::Add(operands),
            Operator::Sub => Calculation::Sub(operands),
            Operator::Mul => Calculation::Mul(operands),
            Operator::Div => Calculation::Div(operands),
        }
    }
}

/// Creates the calculation named by a command token
pub fn create(token: &str, operands: Operands) -> Result<Calculation> {
    let Some(op) = Operator::from_token(token) else {
        return Err(Error::UnsupportedOperation(token.trim().to_lowercase()));
    };

    Ok(op.bind(operands))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_create() -> Result<()> {
        let o = Operands::new(2.0, 3.0);

        assert_eq!(create("add", o)?, Calculation::Add(o));
        assert_eq!(create("sub", o)?, Calculation::Sub(o));
        assert_eq!(create("mul", o)?, Calculation::Mul(o));
        assert_eq!(create("div", o)?, Calculation::Div(o));
        assert_eq!(create("  ADD ", o)?, Calculation::Add(o));

        Ok(())
    }

    #[test]
    fn test_aliases() -> Result<()> {
        let o = Operands::new(8.0, 2.0);

        assert_eq!(create("mul", o)?, create("multiply", o)?);
        assert_eq!(create("div", o)?, create("divide", o)?);
        assert_eq!(create("Multiply", o)?.evaluate()?, 16.0);
        assert_eq!(create("DIVIDE", o)?.evaluate()?, 4.0);

        Ok(())
    }

    #[test]
    fn test_create_unsupported() {
        assert_eq!(
            create("Power", Operands::new(2.0, 3.0)),
            Err(Error::UnsupportedOperation(String::from("power")))
        );
        assert_eq!(
            create("", Operands::new(2.0, 3.0)),
            Err(Error::UnsupportedOperation(String::new()))
        );
    }

    #[test]
    fn test_all_tokens() {
        for token in Operator::ALL_TOKENS {
            let op = Operator::from_token(token).expect("token not recognized");
            assert_eq!(op.bind(Operands::new(1.0, 1.0)).symbol(), op.symbol());
        }
    }
}
