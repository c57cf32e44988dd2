//! Ticket price type.

use std::fmt;
use std::ops::Add;

/// Error returned when parsing an invalid price.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price: {reason}")]
pub struct InvalidPrice {
    reason: &'static str,
}

impl InvalidPrice {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A non-negative ticket price, held exactly in hundredths.
///
/// Prices are summed along every candidate itinerary and compared for
/// exact equality to find ties, so they are stored as integers rather
/// than floating point.
///
/// # Examples
///
/// ```
/// use tour_planner::domain::Price;
///
/// let price = Price::parse("26.5").unwrap();
/// assert_eq!(price.minor_units(), 2650);
/// assert_eq!(price.to_string(), "26.50");
///
/// assert!(Price::parse("-1").is_err());
/// assert!(Price::parse("1.005").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    /// A price of zero.
    pub const ZERO: Price = Price(0);

    /// Largest price a catalog may hold: 10 000 000 000.00.
    ///
    /// Sums of millions of such prices still fit in a `u64`, so adding up
    /// the legs of any tour cannot overflow.
    pub const MAX: Price = Price(1_000_000_000_000);

    /// Create a price from hundredths of the currency unit.
    pub fn from_minor_units(units: u64) -> Self {
        Self(units)
    }

    /// Parse a decimal price with at most two fractional digits.
    pub fn parse(s: &str) -> Result<Self, InvalidPrice> {
        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));

        if whole.is_empty() && frac.is_empty() {
            return Err(InvalidPrice::new("cannot be empty"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(InvalidPrice::new("expected non-negative decimal digits"));
        }
        if frac.len() > 2 {
            return Err(InvalidPrice::new("at most two decimal places"));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| InvalidPrice::new("amount too large"))?
        };

        // "5" means 50 hundredths, "05" means 5
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => u64::from(frac.as_bytes()[0] - b'0') * 10,
            _ => u64::from(frac.as_bytes()[0] - b'0') * 10 + u64::from(frac.as_bytes()[1] - b'0'),
        };

        whole
            .checked_mul(100)
            .and_then(|w| w.checked_add(frac))
            .filter(|&units| units <= Self::MAX.0)
            .map(Self)
            .ok_or_else(|| InvalidPrice::new("amount too large"))
    }

    /// Returns the price in hundredths.
    pub fn minor_units(&self) -> u64 {
        self.0
    }

    /// Add two prices, returning `None` on overflow.
    pub fn checked_add(&self, other: Price) -> Option<Price> {
        self.0.checked_add(other.0).map(Price)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Price) -> Self::Output {
        self.checked_add(rhs).expect("price overflow")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_prices() {
        assert_eq!(Price::parse("0").unwrap(), Price::ZERO);
        assert_eq!(Price::parse("10").unwrap().minor_units(), 1000);
        assert_eq!(Price::parse("10.5").unwrap().minor_units(), 1050);
        assert_eq!(Price::parse("10.05").unwrap().minor_units(), 1005);
        assert_eq!(Price::parse(".75").unwrap().minor_units(), 75);
        assert_eq!(Price::parse("3.").unwrap().minor_units(), 300);
    }

    #[test]
    fn reject_invalid_prices() {
        assert!(Price::parse("").is_err());
        assert!(Price::parse(".").is_err());
        assert!(Price::parse("-2.00").is_err());
        assert!(Price::parse("1e3").is_err());
        assert!(Price::parse("1.2.3").is_err());
        assert!(Price::parse("12.345").is_err());
        assert!(Price::parse("99999999999999999999").is_err());
    }

    #[test]
    fn reject_prices_above_max() {
        assert_eq!(Price::parse("10000000000").unwrap(), Price::MAX);
        assert_eq!(
            Price::parse("10000000000.01").unwrap_err(),
            InvalidPrice::new("amount too large")
        );
        assert!(Price::parse("184467440737095516").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Price::from_minor_units(1500).to_string(), "15.00");
        assert_eq!(Price::from_minor_units(7).to_string(), "0.07");
    }

    #[test]
    fn addition_is_exact() {
        let a = Price::parse("0.10").unwrap();
        let b = Price::parse("0.20").unwrap();
        assert_eq!(a + b, Price::parse("0.30").unwrap());
    }

    #[test]
    fn checked_add_overflow() {
        let max = Price::from_minor_units(u64::MAX);
        assert!(max.checked_add(Price::from_minor_units(1)).is_none());
    }
}
