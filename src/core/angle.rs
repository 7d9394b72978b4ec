use crate::core::constants::{FULL_TURN_UNITS, SIXTEENTHS_PER_DEGREE};

/// Wraps a longitude into the range `0 <= lon < 360`.
///
/// # Example
///
/// ```
/// use geoencode::wrap_longitude;
///
/// assert_eq!(wrap_longitude(-60.0), 300.0);
/// assert_eq!(wrap_longitude(720.0), 0.0);
/// ```
pub fn wrap_longitude(lon: f64) -> f64 {
    let wrapped = lon % 360.0;
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
    // Tiny negative inputs round up to exactly 360 after the shift.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Quantizes a latitude to 16ths of a second, shifted so 0 is the south pole.
///
/// The caller is expected to have range checked `lat`; the result is in
/// `0..=NORTH_POLE_UNITS` for latitudes in -90..=90.
pub fn quantize_latitude(lat: f64) -> u32 {
    ((lat + 90.0) * SIXTEENTHS_PER_DEGREE as f64).round() as u32
}

/// Quantizes a wrapped longitude to 16ths of a second.
///
/// Values which round up to a full turn wrap back to 0.
pub fn quantize_longitude(lon: f64) -> u32 {
    let units = (lon * SIXTEENTHS_PER_DEGREE as f64).round() as u32;
    if units == FULL_TURN_UNITS { 0 } else { units }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::NORTH_POLE_UNITS;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_longitude() {
        assert_eq!(wrap_longitude(0.0), 0.0);
        assert_eq!(wrap_longitude(359.5), 359.5);
        assert_eq!(wrap_longitude(360.0), 0.0);
        assert_eq!(wrap_longitude(-60.0), 300.0);
        assert_eq!(wrap_longitude(-360.0), 0.0);
        assert_eq!(wrap_longitude(-1e-20), 0.0);
    }

    #[test]
    fn test_quantize_latitude_poles() {
        assert_eq!(quantize_latitude(-90.0), 0);
        assert_eq!(quantize_latitude(90.0), NORTH_POLE_UNITS);
        assert_eq!(quantize_latitude(-89.9999999), 0);
        assert_eq!(quantize_latitude(89.9999999), NORTH_POLE_UNITS);
    }

    #[test]
    fn test_quantize_longitude_wraps_full_turn() {
        assert_eq!(quantize_longitude(359.9999999), 0);
        assert_eq!(quantize_longitude(1.0), SIXTEENTHS_PER_DEGREE);
    }

    proptest! {
        #[test]
        fn prop_wrap_range(lon in -1e6..1e6f64) {
            let wrapped = wrap_longitude(lon);
            prop_assert!(wrapped >= 0.0);
            prop_assert!(wrapped < 360.0);
        }

        #[test]
        fn prop_wrap_idempotent(lon in -1e6..1e6f64) {
            let once = wrap_longitude(lon);
            prop_assert_eq!(wrap_longitude(once), once);
        }
    }
}
