use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Server-assigned identifier of a coaster record.
///
/// Serialized as a bare JSON string. Generated ids are decimal nanosecond
/// timestamps; the seed record uses a fixed literal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoasterId(pub String);

impl CoasterId {
    /// Creates a `CoasterId` from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the zero value (the empty string).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CoasterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CoasterId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CoasterId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Issues timestamp-derived ids that are strictly increasing.
///
/// A raw nanosecond clock can repeat (coarse clocks, two inserts in the same
/// tick) or step backwards. The generator remembers the last value it issued
/// and bumps by one whenever the clock has not moved past it, so every id it
/// hands out is distinct for the lifetime of the generator.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    /// Creates a generator that has not issued anything yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next id from the current wall clock.
    ///
    /// # Errors
    /// Returns [`CoreError::ClockOutOfRange`] if the clock cannot be expressed
    /// as `i64` nanoseconds, or if the counter would overflow.
    pub fn next_id(&mut self) -> Result<CoasterId, CoreError> {
        let now = Utc::now()
            .timestamp_nanos_opt()
            .ok_or(CoreError::ClockOutOfRange)?;
        self.next_at(now)
    }

    /// Issues the next id given an explicit clock reading in nanoseconds.
    ///
    /// # Errors
    /// Returns [`CoreError::ClockOutOfRange`] if bumping past the last issued
    /// value would overflow `i64`.
    pub fn next_at(&mut self, now_nanos: i64) -> Result<CoasterId, CoreError> {
        let value = match self.last {
            Some(last) if now_nanos <= last => {
                last.checked_add(1).ok_or(CoreError::ClockOutOfRange)?
            }
            _ => now_nanos,
        };
        self.last = Some(value);
        Ok(CoasterId(value.to_string()))
    }
}
