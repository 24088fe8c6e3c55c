//! Validated humidity readings.
//!
//! The decision table accepts any integer. This layer sits in front of it
//! for callers that want out-of-range or garbled input reported instead of
//! silently classified.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Why a raw reading was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadingError {
    #[error("Humidity {value}% is outside 0-100%")]
    OutOfRange { value: i64 },

    #[error("Cannot parse humidity from '{input}'")]
    Unparsable { input: String },
}

/// Humidity percentage known to lie within 0–100.
///
/// # Example
///
/// ```rust
/// use pumpwise::core::Humidity;
///
/// let h: Humidity = " 42 ".parse().unwrap();
/// assert_eq!(h.value(), 42);
///
/// assert!(Humidity::new(101).is_err());
/// assert!("wet".parse::<Humidity>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Humidity(i32);

impl Humidity {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;

    pub fn new(value: i32) -> Result<Self, ReadingError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ReadingError::OutOfRange {
                value: i64::from(value),
            })
        }
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Humidity {
    type Error = ReadingError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Humidity> for i32 {
    fn from(humidity: Humidity) -> Self {
        humidity.0
    }
}

impl FromStr for Humidity {
    type Err = ReadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed.parse().map_err(|_| ReadingError::Unparsable {
            input: s.to_string(),
        })?;
        let value = i32::try_from(value).map_err(|_| ReadingError::OutOfRange { value })?;
        Self::new(value)
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_inclusive_bounds() {
        assert_eq!(Humidity::new(0).unwrap().value(), 0);
        assert_eq!(Humidity::new(100).unwrap().value(), 100);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            Humidity::new(-1),
            Err(ReadingError::OutOfRange { value: -1 })
        );
        assert_eq!(
            Humidity::new(101),
            Err(ReadingError::OutOfRange { value: 101 })
        );
    }

    #[test]
    fn parses_trimmed_integers() {
        assert_eq!("55".parse::<Humidity>().unwrap().value(), 55);
        assert_eq!("\t7\n".parse::<Humidity>().unwrap().value(), 7);
    }

    #[test]
    fn rejects_garbage_and_huge_values() {
        assert!(matches!(
            "".parse::<Humidity>(),
            Err(ReadingError::Unparsable { .. })
        ));
        assert!(matches!(
            "45.5".parse::<Humidity>(),
            Err(ReadingError::Unparsable { .. })
        ));
        assert!(matches!(
            "99999999999".parse::<Humidity>(),
            Err(ReadingError::OutOfRange { value: 99_999_999_999 })
        ));
    }

    #[test]
    fn display_appends_percent() {
        assert_eq!(Humidity::new(42).unwrap().to_string(), "42%");
    }

    #[test]
    fn deserialization_validates_range() {
        let ok: Humidity = serde_json::from_str("30").unwrap();
        assert_eq!(ok.value(), 30);
        assert!(serde_json::from_str::<Humidity>("130").is_err());
    }
}
