//! Calendar periods and tenors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{StrataError, StrataResult};

/// A date-based amount of time in years, months and days.
///
/// Periods are ISO 8601 based: `P5Y`, `P1Y2M`, `P3D`. Weeks are accepted
/// when parsing and stored as days.
///
/// # Example
///
/// ```rust
/// use strata_basics::types::Period;
///
/// let period: Period = "P1Y6M".parse().unwrap();
/// assert_eq!(period.total_months(), 18);
/// assert_eq!(period.to_string(), "P1Y6M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    years: i32,
    months: i32,
    days: i32,
}

impl Period {
    /// The zero period.
    pub const ZERO: Period = Period {
        years: 0,
        months: 0,
        days: 0,
    };

    /// Creates a period from years, months and days.
    #[must_use]
    pub const fn of(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Creates a period of a number of years.
    #[must_use]
    pub const fn of_years(years: i32) -> Self {
        Self::of(years, 0, 0)
    }

    /// Creates a period of a number of months.
    #[must_use]
    pub const fn of_months(months: i32) -> Self {
        Self::of(0, months, 0)
    }

    /// Creates a period of a number of weeks, stored as days.
    #[must_use]
    pub const fn of_weeks(weeks: i32) -> Self {
        Self::of(0, 0, weeks * 7)
    }

    /// Creates a period of a number of days.
    #[must_use]
    pub const fn of_days(days: i32) -> Self {
        Self::of(0, 0, days)
    }

    /// Returns the years component.
    #[must_use]
    pub fn years(&self) -> i32 {
        self.years
    }

    /// Returns the months component.
    #[must_use]
    pub fn months(&self) -> i32 {
        self.months
    }

    /// Returns the days component.
    #[must_use]
    pub fn days(&self) -> i32 {
        self.days
    }

    /// Returns the years and months components as a month count.
    #[must_use]
    pub fn total_months(&self) -> i64 {
        i64::from(self.years) * 12 + i64::from(self.months)
    }

    /// Returns true if every component is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Returns the period with every component negated.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::of(-self.years, -self.months, -self.days)
    }

    /// Returns the period with every component negated, or `None` if a
    /// component is `i32::MIN`.
    #[must_use]
    pub fn checked_negated(&self) -> Option<Self> {
        Some(Self::of(
            self.years.checked_neg()?,
            self.months.checked_neg()?,
            self.days.checked_neg()?,
        ))
    }

    /// Returns the period multiplied by a scalar.
    #[must_use]
    pub fn multiplied_by(&self, factor: i32) -> Self {
        Self::of(self.years * factor, self.months * factor, self.days * factor)
    }

    /// Parses an ISO 8601 period such as `P1Y2M3D` or `P2W`.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::Parse` if the text is not a valid period.
    pub fn parse(text: &str) -> StrataResult<Self> {
        let upper = text.trim().to_ascii_uppercase();
        let (negative, body) = match upper.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, upper.as_str()),
        };
        let body = body
            .strip_prefix('P')
            .ok_or_else(|| StrataError::parse("period", text))?;
        let period = parse_components(body).ok_or_else(|| StrataError::parse("period", text))?;
        if negative {
            period
                .checked_negated()
                .ok_or_else(|| StrataError::parse("period", text))
        } else {
            Ok(period)
        }
    }
}

/// Parses `1Y2M3W4D` style component lists; each unit may appear once, in order.
fn parse_components(body: &str) -> Option<Period> {
    if body.is_empty() {
        return None;
    }
    let mut period = Period::ZERO;
    let mut digits = String::new();
    let mut last_rank = 0;
    for ch in body.chars() {
        if ch.is_ascii_digit() || (ch == '-' && digits.is_empty()) {
            digits.push(ch);
            continue;
        }
        let value: i32 = digits.parse().ok()?;
        digits.clear();
        let rank = match ch {
            'Y' => 1,
            'M' => 2,
            'W' => 3,
            'D' => 4,
            _ => return None,
        };
        if rank <= last_rank {
            return None;
        }
        last_rank = rank;
        match ch {
            'Y' => period.years = value,
            'M' => period.months = value,
            'W' => period.days = period.days.checked_add(value.checked_mul(7)?)?,
            _ => period.days = period.days.checked_add(value)?,
        }
    }
    if digits.is_empty() {
        Some(period)
    } else {
        None
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "P0D");
        }
        write!(f, "P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}

impl FromStr for Period {
    type Err = StrataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::parse(s)
    }
}

impl TryFrom<String> for Period {
    type Error = StrataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Period::parse(&value)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

/// A market tenor such as `3M` or `10Y`.
///
/// A tenor is a non-negative [`Period`] written without the ISO `P` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tenor(Period);

impl Tenor {
    /// One month tenor.
    pub const TENOR_1M: Tenor = Tenor(Period::of_months(1));
    /// Three month tenor.
    pub const TENOR_3M: Tenor = Tenor(Period::of_months(3));
    /// Six month tenor.
    pub const TENOR_6M: Tenor = Tenor(Period::of_months(6));
    /// One year tenor.
    pub const TENOR_1Y: Tenor = Tenor(Period::of_years(1));
    /// Five year tenor.
    pub const TENOR_5Y: Tenor = Tenor(Period::of_years(5));
    /// Ten year tenor.
    pub const TENOR_10Y: Tenor = Tenor(Period::of_years(10));

    /// Creates a tenor from a period.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::InvalidInput` if any component is negative.
    pub fn of(period: Period) -> StrataResult<Self> {
        if period.years() < 0 || period.months() < 0 || period.days() < 0 {
            return Err(StrataError::invalid_input(format!(
                "Tenor must not be negative: {period}"
            )));
        }
        Ok(Self(period))
    }

    /// Returns the underlying period.
    #[must_use]
    pub fn period(&self) -> Period {
        self.0
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let iso = self.0.to_string();
        write!(f, "{}", &iso[1..])
    }
}

impl FromStr for Tenor {
    type Err = StrataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let iso = if trimmed.starts_with(['P', 'p']) {
            trimmed.to_string()
        } else {
            format!("P{trimmed}")
        };
        Period::parse(&iso)
            .map_err(|_| StrataError::parse("tenor", s))
            .and_then(Tenor::of)
    }
}

impl TryFrom<String> for Tenor {
    type Error = StrataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tenor> for String {
    fn from(tenor: Tenor) -> Self {
        tenor.to_string()
    }
}
