use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Context, Error, Result, ensure};

/// Number of fixed-point units in one decimal unit
pub const SCALE: u64 = 100;

/// Number of fractional digits representable at [`SCALE`]
pub const FRACTION_DIGITS: usize = 2;

/// A non-negative decimal quantity stored as an integer number of hundredths.
/// Keeps the weights integer so they can index the DP table directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FixedPoint(pub u64);

impl FixedPoint {
    pub fn from_units(units: u64) -> Self {
        FixedPoint(units)
    }

    pub fn units(&self) -> u64 {
        self.0
    }
}

impl FromStr for FixedPoint {
    type Err = Error;

    /// Parses decimals such as `50`, `15.3` or `.5` without going through floating point.
    /// Fractional digits beyond [`FRACTION_DIGITS`] are truncated.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));

        ensure!(
            !(int_part.is_empty() && frac_part.is_empty()),
            "empty decimal: {s:?}"
        );
        ensure!(
            int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()),
            "invalid decimal: {s:?}"
        );

        let int = match int_part.is_empty() {
            true => 0,
            false => int_part
                .parse::<u64>()
                .with_context(|| format!("decimal out of range: {s:?}"))?,
        };
        let frac = frac_part
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(FRACTION_DIGITS)
            .fold(0, |acc, b| acc * 10 + (b - b'0') as u64);

        int.checked_mul(SCALE)
            .and_then(|units| units.checked_add(frac))
            .map(FixedPoint)
            .with_context(|| format!("decimal out of range: {s:?}"))
    }
}

impl Display for FixedPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / SCALE, self.0 % SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("50", 5000; "integer")]
    #[test_case("15.3", 1530; "one fractional digit")]
    #[test_case("53.38", 5338; "two fractional digits")]
    #[test_case("33.80", 3380; "trailing zero")]
    #[test_case("0.29", 29; "not representable in binary")]
    #[test_case(".5", 50; "no integer part")]
    #[test_case("7.", 700; "no fractional part")]
    #[test_case("1.239", 123; "truncated")]
    #[test_case(" 8 ", 800; "surrounding whitespace")]
    fn parse(input: &str, units: u64) {
        assert_eq!(input.parse::<FixedPoint>().unwrap(), FixedPoint(units));
    }

    #[test_case(""; "empty")]
    #[test_case("."; "lone point")]
    #[test_case("-5"; "negative")]
    #[test_case("1.2.3"; "two points")]
    #[test_case("1e3"; "exponent")]
    #[test_case("99999999999999999999"; "overflow")]
    fn parse_invalid(input: &str) {
        assert!(input.parse::<FixedPoint>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(FixedPoint(5000).to_string(), "50.00");
        assert_eq!(FixedPoint(1530).to_string(), "15.30");
        assert_eq!(FixedPoint(7).to_string(), "0.07");
    }
}
