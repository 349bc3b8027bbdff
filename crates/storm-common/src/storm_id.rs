//! NHC storm identifiers (`AL092025`, `ep142024`, ...).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::StormIdError;

/// Ocean basin of an NHC-tracked storm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basin {
    /// North Atlantic
    Atlantic,
    /// Eastern North Pacific
    EasternPacific,
    /// Central North Pacific
    CentralPacific,
}

impl Basin {
    /// Two-letter ATCF basin code (upper case).
    pub fn code(&self) -> &'static str {
        match self {
            Basin::Atlantic => "AL",
            Basin::EasternPacific => "EP",
            Basin::CentralPacific => "CP",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "AL" => Some(Basin::Atlantic),
            "EP" => Some(Basin::EasternPacific),
            "CP" => Some(Basin::CentralPacific),
            _ => None,
        }
    }
}

/// A validated storm identifier: basin, storm number and season year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StormId {
    pub basin: Basin,
    pub number: u8,
    pub year: u16,
}

impl StormId {
    /// Parse an identifier like `AL092025`, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, StormIdError> {
        let s = s.trim();
        if s.len() != 8 || !s.is_ascii() {
            return Err(StormIdError::InvalidLength(s.to_string()));
        }

        let basin = Basin::from_code(&s[0..2])
            .ok_or_else(|| StormIdError::UnknownBasin(s[0..2].to_string()))?;

        let number_str = &s[2..4];
        let number: u8 = number_str
            .parse()
            .ok()
            .filter(|n| (1..=99).contains(n) && number_str.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| StormIdError::InvalidNumber(number_str.to_string()))?;

        let year_str = &s[4..8];
        let year: u16 = year_str
            .parse()
            .ok()
            .filter(|y| *y >= 1850 && year_str.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| StormIdError::InvalidYear(year_str.to_string()))?;

        Ok(Self {
            basin,
            number,
            year,
        })
    }

    /// Upper-case form used by the storm graphics API (`AL092025`).
    pub fn upper(&self) -> String {
        format!("{}{:02}{}", self.basin.code(), self.number, self.year)
    }

    /// Lower-case form used by GIS and ATCF paths (`al092025`).
    pub fn lower(&self) -> String {
        self.upper().to_ascii_lowercase()
    }
}

impl fmt::Display for StormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.upper())
    }
}

impl FromStr for StormId {
    type Err = StormIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for StormId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.upper())
    }
}

impl<'de> Deserialize<'de> for StormId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        StormId::parse(&s).map_err(serde::de::Error::custom)
    }
}
