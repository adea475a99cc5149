use std::fmt;

use serde::Serialize;

/// A strictly positive, finite monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Returns `None` for zero, negative, NaN or infinite values.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Plain notation between `1e-7` and `1e21`, exponent notation (`1e+21`,
/// `1.5e-7`) outside that range.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 >= 1e21 {
            let exp = format!("{:e}", self.0);
            f.write_str(&exp.replacen('e', "e+", 1))
        } else if self.0 < 1e-6 {
            write!(f, "{:e}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_values() {
        assert_eq!(Amount::new(100.0).map(Amount::get), Some(100.0));
        assert_eq!(Amount::new(0.01).map(Amount::get), Some(0.01));
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        for value in [0.0, -0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(Amount::new(value).is_none(), "{value} should be rejected");
        }
    }

    #[test]
    fn displays_without_trailing_zeroes() {
        assert_eq!(Amount::new(100.0).unwrap().to_string(), "100");
        assert_eq!(Amount::new(12.5).unwrap().to_string(), "12.5");
    }

    #[test]
    fn extreme_magnitudes_use_exponent_notation() {
        assert_eq!(Amount::new(1e21).unwrap().to_string(), "1e+21");
        assert_eq!(Amount::new(1.5e300).unwrap().to_string(), "1.5e+300");
        assert_eq!(Amount::new(1e20).unwrap().to_string(), "100000000000000000000");
        assert_eq!(Amount::new(1.5e-7).unwrap().to_string(), "1.5e-7");
        assert_eq!(Amount::new(0.000001).unwrap().to_string(), "0.000001");
    }
}
