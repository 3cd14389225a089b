use std::fmt;

/// Decimal exponents outside this range are displayed in scientific notation
const MIN_FIXED_EXPONENT: i32 = -4;
const MAX_FIXED_EXPONENT: i32 = 16;

/// A floating point operand or result. Displays using the shortest decimal
/// representation that round-trips, always keeping at least one fractional
/// digit in fixed notation, e.g. `3.0`, `0.25`, `1e+16`, `1e-05`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl Number {
    /// Parses a finite number from a token, returning None if the token is
    /// not numeric or names a non-finite value such as 'inf'
    pub fn parse(token: &str) -> Option<Number> {
        match token.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => Some(Number(f)),
            _ => None,
        }
    }

    /// Returns the underlying value
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Number {
    /// Formats a number as a string
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.0;
        if n.is_nan() {
            return write!(f, "nan");
        }
        if n.is_infinite() {
            return write!(f, "{}", if n < 0.0 { "-inf" } else { "inf" });
        }

        // LowerExp yields the shortest round-trip digits, e.g. "-1.25e-3"
        let sci = format!("{:e}", n);
        let Some((mantissa, exponent)) = sci.split_once('e') else {
            return write!(f, "{}", sci);
        };
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        let (sign, mantissa) = match mantissa.strip_prefix('-') {
            Some(m) => ("-", m),
            None => ("", mantissa),
        };

        if !(MIN_FIXED_EXPONENT..MAX_FIXED_EXPONENT).contains(&exponent) {
            let exp_sign = if exponent < 0 { '-' } else { '+' };
            return write!(
                f,
                "{}{}e{}{:02}",
                sign,
                mantissa,
                exp_sign,
                exponent.abs()
            );
        }

        let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
        write!(f, "{}{}", sign, fixed_notation(&digits, exponent))
    }
}

/// Places the decimal point in a string of significant digits, where the
/// first digit has the given decimal exponent
fn fixed_notation(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{}{}", zeros, digits);
    }

    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{}{}.0", digits, zeros)
    } else {
        format!("{}.{}", &digits[..int_len], &digits[int_len..])
    }
}
