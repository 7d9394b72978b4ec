use crate::core::constants::{SIXTEENTHS_PER_DEGREE, SIXTEENTHS_PER_MINUTE, SIXTEENTHS_PER_SECOND};
use serde::{Deserialize, Serialize};

/// A non-negative angle split into degrees, minutes, seconds and 16ths of a second.
///
/// Latitudes are decomposed after shifting by +90 degrees, so every angle
/// handled here is non-negative: `0..=180` degrees for latitude and
/// `0..360` degrees for longitude.
///
/// # Example
///
/// ```
/// use geoencode::Dms;
///
/// let dms = Dms::from_sixteenths(10 * 57600 + 7 * 960 + 5 * 16 + 7);
/// assert_eq!((dms.degrees, dms.minutes, dms.seconds, dms.sixteenths), (10, 7, 5, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dms {
    /// Whole degrees
    pub degrees: u32,
    /// Minutes of arc (0-59)
    pub minutes: u32,
    /// Seconds of arc (0-59)
    pub seconds: u32,
    /// 16ths of a second of arc (0-15)
    pub sixteenths: u32,
}

impl Dms {
    /// Splits an angle given as a count of 16ths of a second.
    pub fn from_sixteenths(units: u32) -> Self {
        let degrees = units / SIXTEENTHS_PER_DEGREE;
        let units = units % SIXTEENTHS_PER_DEGREE;
        let minutes = units / SIXTEENTHS_PER_MINUTE;
        let units = units % SIXTEENTHS_PER_MINUTE;

        Self {
            degrees,
            minutes,
            seconds: units / SIXTEENTHS_PER_SECOND,
            sixteenths: units % SIXTEENTHS_PER_SECOND,
        }
    }

    /// Recombines the parts into a count of 16ths of a second.
    pub fn to_sixteenths(&self) -> u32 {
        self.degrees * SIXTEENTHS_PER_DEGREE
            + self.minutes * SIXTEENTHS_PER_MINUTE
            + self.seconds * SIXTEENTHS_PER_SECOND
            + self.sixteenths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::{FULL_TURN_UNITS, NORTH_POLE_UNITS};
    use proptest::prelude::*;

    #[test]
    fn test_zero() {
        let dms = Dms::from_sixteenths(0);
        assert_eq!(
            dms,
            Dms {
                degrees: 0,
                minutes: 0,
                seconds: 0,
                sixteenths: 0
            }
        );
    }

    #[test]
    fn test_largest_longitude() {
        let dms = Dms::from_sixteenths(FULL_TURN_UNITS - 1);
        assert_eq!(dms.degrees, 359);
        assert_eq!(dms.minutes, 59);
        assert_eq!(dms.seconds, 59);
        assert_eq!(dms.sixteenths, 15);
    }

    #[test]
    fn test_north_pole() {
        let dms = Dms::from_sixteenths(NORTH_POLE_UNITS);
        assert_eq!(dms.degrees, 180);
        assert_eq!(dms.minutes, 0);
        assert_eq!(dms.seconds, 0);
        assert_eq!(dms.sixteenths, 0);
    }

    proptest! {
        #[test]
        fn prop_parts_recombine(units in 0..FULL_TURN_UNITS) {
            let dms = Dms::from_sixteenths(units);
            prop_assert_eq!(dms.to_sixteenths(), units);
            prop_assert!(dms.minutes < 60);
            prop_assert!(dms.seconds < 60);
            prop_assert!(dms.sixteenths < 16);
        }
    }
}
