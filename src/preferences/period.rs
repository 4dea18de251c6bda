use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::PreferenceError;

/// Decade markers offered for selection.
pub const SUGGESTED_DECADES: [i32; 11] = [
    1920, 1930, 1940, 1950, 1960, 1970, 1980, 1990, 2000, 2010, 2020,
];

/// Ten consecutive years, inclusive, anchored at the marker year.
///
/// Stored as the bare start year. Loading a year that does not start a
/// decade fails with [`PreferenceError::InvalidDecade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Decade(i32);

impl Decade {
    pub fn new(start: i32) -> Self {
        Decade(start)
    }

    pub fn start(&self) -> i32 {
        self.0
    }

    pub fn end(&self) -> i32 {
        self.0 + 9
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.start() && year <= self.end()
    }
}

impl FromStr for Decade {
    type Err = PreferenceError;

    /// Accepts "1980" as well as "1980s". The year must start a decade.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('s').unwrap_or(trimmed);
        digits
            .parse::<i32>()
            .ok()
            .and_then(|y| Decade::try_from(y).ok())
            .ok_or_else(|| PreferenceError::InvalidDecade(s.to_string()))
    }
}

impl TryFrom<i32> for Decade {
    type Error = PreferenceError;

    fn try_from(start: i32) -> Result<Self, Self::Error> {
        if start < 0 || start % 10 != 0 {
            return Err(PreferenceError::InvalidDecade(start.to_string()));
        }
        Ok(Decade(start))
    }
}

impl From<Decade> for i32 {
    fn from(decade: Decade) -> Self {
        decade.0
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawYearRange")]
pub struct YearRange {
    pub from_year: Option<i32>,
    pub to_year: Option<i32>,
}

#[derive(Deserialize)]
struct RawYearRange {
    from_year: Option<i32>,
    to_year: Option<i32>,
}

impl TryFrom<RawYearRange> for YearRange {
    type Error = PreferenceError;

    fn try_from(raw: RawYearRange) -> Result<Self, Self::Error> {
        YearRange::new(raw.from_year, raw.to_year)
    }
}

impl YearRange {
    pub fn new(from_year: Option<i32>, to_year: Option<i32>) -> Result<Self, PreferenceError> {
        if let (Some(from), Some(to)) = (from_year, to_year) {
            if from > to {
                return Err(PreferenceError::InvertedYearRange { from, to });
            }
        }
        Ok(Self { from_year, to_year })
    }

    pub fn is_active(&self) -> bool {
        self.from_year.is_some() || self.to_year.is_some()
    }

    pub fn contains(&self, year: i32) -> bool {
        self.from_year.is_none_or(|from| year >= from) && self.to_year.is_none_or(|to| year <= to)
    }
}

/// Year prefix of a catalog release date ("1985", "1985-06" or "1985-06-01").
///
/// Returns `None` when the first four characters are not a number.
pub fn release_year(release_date: &str) -> Option<i32> {
    release_date.get(..4).and_then(|y| y.parse::<i32>().ok())
}
