use std::fmt;
use std::str::FromStr;

/// A monetary amount held as an exact count of cents.
///
/// Receipt totals and item prices arrive as decimal strings ("6.49") and are
/// parsed into integer cents so that the scoring rules can check divisibility
/// exactly, without floating-point residue.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cents(pub u64);

/// Error for a string that does not describe a non-negative decimal amount
/// with at most two fraction digits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid monetary amount: {0:?}")]
pub struct ParseMoneyError(pub String);

impl Cents {
    /// Whether the amount is a round dollar amount with no cents.
    pub fn is_round_dollar(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Whether the amount is an exact multiple of 0.25.
    pub fn is_quarter_multiple(&self) -> bool {
        self.0 % 25 == 0
    }
}

impl FromStr for Cents {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoneyError(s.to_string());
        let raw = s.trim();

        let (dollars, fraction) = match raw.split_once('.') {
            Some((dollars, fraction)) => (dollars, fraction),
            None => (raw, ""),
        };

        if dollars.is_empty() && fraction.is_empty() {
            return Err(err());
        }
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(dollars) || !all_digits(fraction) || fraction.len() > 2 {
            return Err(err());
        }

        let whole: u64 = if dollars.is_empty() {
            0
        } else {
            dollars.parse().map_err(|_| err())?
        };
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| err())? * 10,
            _ => fraction.parse().map_err(|_| err())?,
        };

        whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(cents))
            .map(Cents)
            .ok_or_else(err)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dollars_and_cents() {
        assert_eq!("6.49".parse(), Ok(Cents(649)));
        assert_eq!("2.50".parse(), Ok(Cents(250)));
        assert_eq!("0.25".parse(), Ok(Cents(25)));
    }

    #[test]
    fn test_parse_whole_dollars() {
        assert_eq!("9".parse(), Ok(Cents(900)));
        assert_eq!("12.00".parse(), Ok(Cents(1200)));
    }

    #[test]
    fn test_parse_single_fraction_digit() {
        // one fraction digit means tens of cents
        assert_eq!("9.5".parse(), Ok(Cents(950)));
    }

    #[test]
    fn test_parse_bare_fraction() {
        assert_eq!(".25".parse(), Ok(Cents(25)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Cents>().is_err());
        assert!(".".parse::<Cents>().is_err());
        assert!("-1.00".parse::<Cents>().is_err());
        assert!("+1.00".parse::<Cents>().is_err());
        assert!("1.005".parse::<Cents>().is_err());
        assert!("12,00".parse::<Cents>().is_err());
        assert!("abc".parse::<Cents>().is_err());
    }

    #[test]
    fn test_round_dollar() {
        assert!(Cents(1200).is_round_dollar());
        assert!(!Cents(250).is_round_dollar());
        assert!(!Cents(649).is_round_dollar());
    }

    #[test]
    fn test_quarter_multiple() {
        assert!(Cents(1200).is_quarter_multiple());
        assert!(Cents(250).is_quarter_multiple());
        assert!(Cents(1225).is_quarter_multiple());
        assert!(!Cents(649).is_quarter_multiple());
    }

    #[test]
    fn test_display() {
        assert_eq!(Cents(649).to_string(), "6.49");
        assert_eq!(Cents(900).to_string(), "9.00");
        assert_eq!(Cents(5).to_string(), "0.05");
    }
}
