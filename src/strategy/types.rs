// Core data types for race sessions and tire stints

use std::fmt;

/// Tire compound fitted for a lap.
///
/// Labels are matched exactly. Anything that is not one of the five upper-case
/// compound names is kept verbatim in [`Compound::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Compound {
    Soft,
    Medium,
    Hard,
    Intermediate,
    Wet,
    Other(String),
}

impl Compound {
    pub fn label(&self) -> &str {
        match self {
            Compound::Soft => "SOFT",
            Compound::Medium => "MEDIUM",
            Compound::Hard => "HARD",
            Compound::Intermediate => "INTERMEDIATE",
            Compound::Wet => "WET",
            Compound::Other(label) => label,
        }
    }
}

impl From<&str> for Compound {
    fn from(value: &str) -> Self {
        match value {
            "SOFT" => Compound::Soft,
            "MEDIUM" => Compound::Medium,
            "HARD" => Compound::Hard,
            "INTERMEDIATE" => Compound::Intermediate,
            "WET" => Compound::Wet,
            _ => Compound::Other(value.to_string()),
        }
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverRecord {
    /// Three letter abbreviation, unique within a session
    pub code: String,
    pub number: u32,
    pub last_name: String,
    pub team_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LapRecord {
    pub driver_code: String,
    pub lap_number: u32,
    pub compound: Compound,
}

impl LapRecord {
    pub fn new(driver_code: &str, lap_number: u32, compound: impl Into<Compound>) -> Self {
        Self {
            driver_code: driver_code.to_string(),
            lap_number,
            compound: compound.into(),
        }
    }
}

/// A contiguous run of laps on one compound. Both ends are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stint {
    pub compound: Compound,
    pub start_lap: u32,
    pub end_lap: u32,
}

impl Stint {
    pub fn new(compound: impl Into<Compound>, start_lap: u32, end_lap: u32) -> Self {
        Self {
            compound: compound.into(),
            start_lap,
            end_lap,
        }
    }

    pub fn lap_count(&self) -> u32 {
        self.end_lap + 1 - self.start_lap
    }

    pub fn contains_lap(&self, lap_number: u32) -> bool {
        (self.start_lap..=self.end_lap).contains(&lap_number)
    }
}

/// Everything the chart needs from one session.
#[derive(Debug, Clone, Default)]
pub struct SessionData {
    /// Drivers sorted by classified position
    pub finish_order: Vec<DriverRecord>,
    /// All laps of the session, sorted by driver and lap number
    pub laps: Vec<LapRecord>,
}

impl SessionData {
    pub fn driver(&self, code: &str) -> Option<&DriverRecord> {
        self.finish_order.iter().find(|d| d.code == code)
    }

    pub fn laps_for(&self, code: &str) -> Vec<&LapRecord> {
        self.laps.iter().filter(|l| l.driver_code == code).collect()
    }

    pub fn max_lap(&self) -> u32 {
        self.laps.iter().map(|l| l.lap_number).max().unwrap_or(0)
    }
}
