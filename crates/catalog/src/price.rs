use core::str::FromStr;

use serde::{Deserialize, Serialize};

use flowershop_core::{DomainError, DomainResult, ValueObject};

/// Price in smallest currency unit (cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Whole currency units; fails when the amount does not fit in cents.
    pub fn from_units(units: u64) -> DomainResult<Self> {
        units
            .checked_mul(100)
            .map(Price::from_cents)
            .ok_or_else(|| DomainError::validation(format!("price of {units} units is out of range")))
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

/// Accepts `30`, `25.2` and `10.50`; at most two fractional digits.
impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::validation(format!("invalid price: {s:?}"));

        let s = s.trim();
        let (units, fraction) = s.split_once('.').unwrap_or((s, ""));
        if units.is_empty()
            || fraction.len() > 2
            || !units.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: u64 = units.parse().map_err(|_| invalid())?;
        let fraction: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .map(Price::from_cents)
            .ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_prices() {
        assert_eq!("30".parse::<Price>().unwrap(), Price::from_units(30).unwrap());
        assert_eq!("25.2".parse::<Price>().unwrap(), Price::from_cents(2520));
        assert_eq!("10.50".parse::<Price>().unwrap(), Price::from_cents(1050));
        assert_eq!("0.05".parse::<Price>().unwrap(), Price::from_cents(5));
    }

    #[test]
    fn rejects_malformed_prices() {
        for input in ["", ".5", "-1", "1.234", "abc", "1.x", "99999999999999999999"] {
            let err = input.parse::<Price>().unwrap_err();
            match err {
                DomainError::Validation(_) => {}
                _ => panic!("Expected Validation error for {input:?}"),
            }
        }
    }

    #[test]
    fn from_units_rejects_amounts_beyond_cent_range() {
        assert_eq!(Price::from_units(u64::MAX / 100).unwrap().cents(), u64::MAX / 100 * 100);

        let err = Price::from_units(u64::MAX / 10).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for out-of-range price"),
        }
    }

    #[test]
    fn displays_two_decimal_places() {
        assert_eq!(Price::from_cents(2520).to_string(), "25.20");
        assert_eq!(Price::from_units(30).unwrap().to_string(), "30.00");
        assert_eq!(Price::from_cents(7).to_string(), "0.07");
    }
}
