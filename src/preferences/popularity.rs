use serde::{Deserialize, Serialize};

use super::PreferenceError;

/// Inclusive popularity band, both ends within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPopularityRange")]
pub struct PopularityRange {
    pub min: u8,
    pub max: u8,
}

#[derive(Deserialize)]
struct RawPopularityRange {
    min: u8,
    max: u8,
}

impl TryFrom<RawPopularityRange> for PopularityRange {
    type Error = PreferenceError;

    fn try_from(raw: RawPopularityRange) -> Result<Self, Self::Error> {
        PopularityRange::new(raw.min, raw.max)
    }
}

impl PopularityRange {
    pub fn new(min: u8, max: u8) -> Result<Self, PreferenceError> {
        if min > 100 {
            return Err(PreferenceError::PopularityOutOfRange(min));
        }
        if max > 100 {
            return Err(PreferenceError::PopularityOutOfRange(max));
        }
        if min > max {
            return Err(PreferenceError::InvertedPopularity { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, popularity: u8) -> bool {
        popularity >= self.min && popularity <= self.max
    }

    /// Moves both bounds by `delta`, clamped to 0..=100.
    pub fn shift(&self, delta: i16) -> Self {
        let clamp = |v: u8| (v as i16 + delta).clamp(0, 100) as u8;
        Self {
            min: clamp(self.min),
            max: clamp(self.max),
        }
    }
}

/// Popularity preference: either the slider level or an explicit band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, try_from = "RawPopularity")]
pub enum Popularity {
    Level(u8),
    Range(PopularityRange),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPopularity {
    Level(u8),
    Range(PopularityRange),
}

impl TryFrom<RawPopularity> for Popularity {
    type Error = PreferenceError;

    fn try_from(raw: RawPopularity) -> Result<Self, Self::Error> {
        match raw {
            RawPopularity::Level(value) => Popularity::level(value),
            RawPopularity::Range(range) => Ok(Popularity::Range(range)),
        }
    }
}

impl Popularity {
    pub fn level(value: u8) -> Result<Self, PreferenceError> {
        if value > 100 {
            return Err(PreferenceError::PopularityOutOfRange(value));
        }
        Ok(Popularity::Level(value))
    }

    /// Effective band. Levels map through fixed buckets:
    /// up to 30 is 0..=50, up to 60 is 30..=80, anything higher is 60..=100.
    pub fn range(&self) -> PopularityRange {
        match *self {
            Popularity::Level(v) if v <= 30 => PopularityRange { min: 0, max: 50 },
            Popularity::Level(v) if v <= 60 => PopularityRange { min: 30, max: 80 },
            Popularity::Level(_) => PopularityRange { min: 60, max: 100 },
            Popularity::Range(range) => range,
        }
    }
}

pub fn popularity_label(value: u8) -> &'static str {
    if value < 30 {
        "Deep cuts"
    } else if value < 60 {
        "Hidden gems"
    } else {
        "Stadium anthems"
    }
}
