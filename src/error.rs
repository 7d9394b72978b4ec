use thiserror::Error;

/// Error type for geoencode operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoEncodeError {
    /// The latitude is outside the range -90 to 90 degrees.
    #[error("Latitude out of range: {0}")]
    OutOfRangeLatitude(f64),
    /// Failed to decode the Base64 text form of an encoded coordinate.
    #[error("Base64 decode error")]
    Base64DecodeError,
    /// An encoded coordinate is too short to decode.
    #[error("Invalid encoded length: {0}")]
    InvalidEncodedLength(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            GeoEncodeError::OutOfRangeLatitude(91.0).to_string(),
            "Latitude out of range: 91"
        );
        assert_eq!(
            GeoEncodeError::InvalidEncodedLength(1).to_string(),
            "Invalid encoded length: 1"
        );
    }
}
