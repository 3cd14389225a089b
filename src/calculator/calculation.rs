use super::factory::Operator;
use super::operations;
use super::value::Number;
use crate::errors::Result;

/// A pair of operands bound to a calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub a: f64,
    pub b: f64,
}

impl Operands {
    /// Returns a new operand pair
    pub fn new(a: f64, b: f64) -> Operands {
        Operands { a, b }
    }
}

impl From<(f64, f64)> for Operands {
    fn from((a, b): (f64, f64)) -> Operands {
        Operands { a, b }
    }
}

/// A single binary arithmetic calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calculation {
    Add(Operands),
    Sub(Operands),
    Mul(Operands),
    Div(Operands),
}

impl Calculation {
    /// Evaluates the calculation
    pub fn evaluate(&self) -> Result<f64> {
        match *self {
            Calculation::Add(Operands { a, b }) => Ok(operations::add(a, b)),
            Calculation::Sub(Operands { a, b }) => Ok(operations::subtract(a, b)),
            Calculation::Mul(Operands { a, b }) => Ok(operations::multiply(a, b)),
            Calculation::Div(Operands { a, b }) => operations::divide(a, b),
        }
    }

    /// Renders the calculation as "a SYMBOL b"
    pub fn describe(&self, symbol: &str) -> String {
        let Operands { a, b } = self.operands();
        format!("{} {} {}", Number(a), symbol, Number(b))
    }

    /// Returns the operands bound to the calculation
    pub fn operands(&self) -> Operands {
        match *self {
            Calculation::Add(o)
            | Calculation::Sub(o)
            | Calculation::Mul(o)
            | Calculation::Div(o) => o,
        }
    }

    /// Returns the operator the calculation applies
    pub fn operator(&self) -> Operator {
        match self {
            Calculation::Add(_) => Operator::Add,
            Calculation::Sub(_) => Operator::Sub,
            Calculation::Mul(_) => Operator::Mul,
            Calculation::Div(_) => Operator::Div,
        }
    }

    /// Returns the display symbol for the calculation's operation
    pub fn symbol(&self) -> &'static str {
        self.operator().symbol()
    }
}
