use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{Popularity, PreferenceError, PreferenceSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodPreset {
    Debut,
    Fearless,
    SpeakNow,
    Red,
    #[serde(rename = "1989")]
    NineteenEightyNine,
    Reputation,
    Lover,
    Folklore,
    Evermore,
    Midnights,
    Ttpd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodCharacter {
    Intimate,
    Anthemic,
    Neutral,
}

impl MoodPreset {
    pub const ALL: [MoodPreset; 11] = [
        MoodPreset::Debut,
        MoodPreset::Fearless,
        MoodPreset::SpeakNow,
        MoodPreset::Red,
        MoodPreset::NineteenEightyNine,
        MoodPreset::Reputation,
        MoodPreset::Lover,
        MoodPreset::Folklore,
        MoodPreset::Evermore,
        MoodPreset::Midnights,
        MoodPreset::Ttpd,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MoodPreset::Debut => "debut",
            MoodPreset::Fearless => "fearless",
            MoodPreset::SpeakNow => "speaknow",
            MoodPreset::Red => "red",
            MoodPreset::NineteenEightyNine => "1989",
            MoodPreset::Reputation => "reputation",
            MoodPreset::Lover => "lover",
            MoodPreset::Folklore => "folklore",
            MoodPreset::Evermore => "evermore",
            MoodPreset::Midnights => "midnights",
            MoodPreset::Ttpd => "ttpd",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoodPreset::Debut => "Debut",
            MoodPreset::Fearless => "Fearless",
            MoodPreset::SpeakNow => "Speak Now",
            MoodPreset::Red => "Red",
            MoodPreset::NineteenEightyNine => "1989",
            MoodPreset::Reputation => "reputation",
            MoodPreset::Lover => "Lover",
            MoodPreset::Folklore => "folklore",
            MoodPreset::Evermore => "evermore",
            MoodPreset::Midnights => "Midnights",
            MoodPreset::Ttpd => "The Tortured Poets Department",
        }
    }

    /// Default (energy, valence, danceability, acousticness).
    pub fn values(&self) -> (u8, u8, u8, u8) {
        match self {
            MoodPreset::Debut => (60, 75, 55, 55),
            MoodPreset::Fearless => (70, 80, 60, 45),
            MoodPreset::SpeakNow => (65, 65, 55, 55),
            MoodPreset::Red => (70, 55, 60, 40),
            MoodPreset::NineteenEightyNine => (80, 75, 80, 25),
            MoodPreset::Reputation => (85, 40, 80, 20),
            MoodPreset::Lover => (70, 85, 75, 30),
            MoodPreset::Folklore => (40, 50, 35, 85),
            MoodPreset::Evermore => (35, 45, 30, 85),
            MoodPreset::Midnights => (65, 55, 70, 25),
            MoodPreset::Ttpd => (50, 35, 45, 60),
        }
    }

    pub fn character(&self) -> MoodCharacter {
        match self {
            MoodPreset::Folklore | MoodPreset::Evermore | MoodPreset::Ttpd => {
                MoodCharacter::Intimate
            }
            MoodPreset::NineteenEightyNine | MoodPreset::Reputation | MoodPreset::Lover => {
                MoodCharacter::Anthemic
            }
            _ => MoodCharacter::Neutral,
        }
    }
}

impl FromStr for MoodPreset {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        MoodPreset::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .ok_or_else(|| PreferenceError::UnknownMood(s.to_string()))
    }
}

impl fmt::Display for MoodPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mood descriptor. The four dimensions are informational only; they are
/// never sent to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    pub preset: Option<MoodPreset>,
    pub energy: u8,
    pub valence: u8,
    pub danceability: u8,
    pub acousticness: u8,
}

impl Default for Mood {
    fn default() -> Self {
        Self {
            preset: None,
            energy: 50,
            valence: 50,
            danceability: 50,
            acousticness: 50,
        }
    }
}

impl Mood {
    pub fn from_preset(preset: MoodPreset) -> Self {
        let (energy, valence, danceability, acousticness) = preset.values();
        Self {
            preset: Some(preset),
            energy,
            valence,
            danceability,
            acousticness,
        }
    }

    /// Overrides individual dimensions, keeping the preset key.
    pub fn tuned(
        mut self,
        energy: Option<u8>,
        valence: Option<u8>,
        danceability: Option<u8>,
        acousticness: Option<u8>,
    ) -> Result<Self, PreferenceError> {
        let checked = |name: &'static str, v: Option<u8>, current: u8| match v {
            Some(v) if v > 100 => Err(PreferenceError::MoodValueOutOfRange(name, v)),
            Some(v) => Ok(v),
            None => Ok(current),
        };
        self.energy = checked("energy", energy, self.energy)?;
        self.valence = checked("valence", valence, self.valence)?;
        self.danceability = checked("danceability", danceability, self.danceability)?;
        self.acousticness = checked("acousticness", acousticness, self.acousticness)?;
        Ok(self)
    }

    pub fn character(&self) -> MoodCharacter {
        self.preset
            .map(|p| p.character())
            .unwrap_or(MoodCharacter::Neutral)
    }
}

/// Biases the popularity band by the mood's character: intimate presets
/// move both bounds down by 10, anthemic presets move them up by 10.
/// A scalar popularity becomes its bucket range first. Without a popularity
/// preference, or with a neutral mood, the set is returned unchanged.
pub fn adjust(preferences: &PreferenceSet, mood: &Mood) -> PreferenceSet {
    let mut adjusted = preferences.clone();
    let delta = match mood.character() {
        MoodCharacter::Intimate => -10,
        MoodCharacter::Anthemic => 10,
        MoodCharacter::Neutral => return adjusted,
    };

    if let Some(popularity) = preferences.popularity {
        adjusted.popularity = Some(Popularity::Range(popularity.range().shift(delta)));
    }
    adjusted
}
