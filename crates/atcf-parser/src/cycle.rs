//! Model cycle timestamps (`YYYYMMDDHH`).

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AtcfError, Result};

/// A 10-digit cycle timestamp such as `2025090106`.
///
/// Zero-padded, so ordering the strings orders the cycles.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cycle(String);

impl Cycle {
    /// Accepts exactly 10 ASCII digits.
    pub fn parse(s: &str) -> Option<Self> {
        (s.len() == 10 && s.bytes().all(|b| b.is_ascii_digit())).then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Initialization time in UTC.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        let naive = NaiveDateTime::parse_from_str(&format!("{}00", self.0), "%Y%m%d%H%M")
            .map_err(|e| AtcfError::InvalidCycle(format!("{}: {}", self.0, e)))?;
        Ok(Utc.from_utc_datetime(&naive))
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
