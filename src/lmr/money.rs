use crate::Result;

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use thiserror::Error;

/// Number of decimal places totals are reported with
pub const CENTS_SCALE: u32 = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Decimal, Decimal),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Decimal, Decimal),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Parses a user supplied amount such as `"-12.50"`.
pub fn parse(string: &str) -> Result<Decimal> {
    let trimmed = string.trim();

    if trimmed.is_empty() {
        Err(MoneyError::Parse("Empty amount", string.to_string()))?
    }

    let amount = Decimal::from_str(trimmed)
        .map_err(|_| MoneyError::Parse("Not a decimal number", string.to_string()))?;

    return Ok(amount);
}

/// Rounds to whole cents, half away from zero, always carrying two decimal places.
pub fn round_cents(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CENTS_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CENTS_SCALE);

    return rounded;
}

/// `a + b`, or an error instead of a panic when the result leaves `Decimal`'s range.
pub fn add(a: Decimal, b: Decimal) -> std::result::Result<Decimal, MoneyError> {
    return match a.checked_add(b) {
        Some(sum) => Ok(sum),
        None if b.is_sign_negative() => Err(MoneyError::Underflow("add", a, b)),
        None => Err(MoneyError::Overflow("add", a, b)),
    };
}

/// Sum of the given amounts, rounded to cents.
pub fn total<I>(amounts: I) -> std::result::Result<Decimal, MoneyError>
where
    I: IntoIterator<Item = Decimal>,
{
    let sum = amounts.into_iter().try_fold(Decimal::ZERO, add)?;

    return Ok(round_cents(sum));
}

#[cfg(test)]
mod tests {
    use super::*;

    use rust_decimal_macros::dec;

    #[test]
    fn parse_accepts_signed_decimals() {
        assert_eq!(parse("12.50").unwrap(), dec!(12.50));
        assert_eq!(parse(" -3.1 ").unwrap(), dec!(-3.1));
        assert_eq!(parse("7").unwrap(), dec!(7));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse("").is_err());
        assert!(parse("   ").is_err());
        assert!(parse("12.5.0").is_err());
        assert!(parse("twelve").is_err());
    }

    #[test]
    fn round_cents_rounds_half_away_from_zero() {
        assert_eq!(round_cents(dec!(12.005)).to_string(), "12.01");
        assert_eq!(round_cents(dec!(-12.005)).to_string(), "-12.01");
        assert_eq!(round_cents(dec!(12.004)).to_string(), "12.00");
    }

    #[test]
    fn round_cents_pads_to_two_places() {
        assert_eq!(round_cents(dec!(12)).to_string(), "12.00");
        assert_eq!(round_cents(dec!(0.5)).to_string(), "0.50");
    }

    #[test]
    fn total_of_accounts() {
        assert_eq!(total(vec![dec!(10.005), dec!(2.00)]).unwrap().to_string(), "12.01");
        assert_eq!(total(Vec::<Decimal>::new()).unwrap().to_string(), "0.00");
    }

    #[test]
    fn add_reports_overflow_and_underflow() {
        assert_eq!(add(dec!(1.5), dec!(-0.25)), Ok(dec!(1.25)));
        assert_eq!(
            add(Decimal::MAX, dec!(1)),
            Err(MoneyError::Overflow("add", Decimal::MAX, dec!(1)))
        );
        assert_eq!(
            add(Decimal::MIN, dec!(-1)),
            Err(MoneyError::Underflow("add", Decimal::MIN, dec!(-1)))
        );
    }

    #[test]
    fn total_overflow_is_an_error() {
        assert!(matches!(
            total(vec![Decimal::MAX, Decimal::MAX]),
            Err(MoneyError::Overflow(..))
        ));
    }
}
