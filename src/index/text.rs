use crate::coord::LatLon;
use crate::core::constants::MIN_DECODE_LEN;
use crate::error::GeoEncodeError;
use crate::index::codec::{decode, encode_to_array};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Encodes a coordinate as URL-safe Base64 text (no padding).
///
/// The 6 encoded bytes become an 8 character string, suitable for use in
/// URLs, CSV columns or JSON documents.
///
/// # Example
/// ```
/// use geoencode::{decode_base64, encode_base64};
///
/// let text = encode_base64(10.0, 96.0).unwrap();
/// assert_eq!(text, "REQAAAAA");
///
/// let coord = decode_base64(&text).unwrap();
/// assert_eq!((coord.lat, coord.lon), (10.0, 96.0));
/// ```
pub fn encode_base64(lat: f64, lon: f64) -> Result<String, GeoEncodeError> {
    let bytes = encode_to_array(lat, lon)?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Decodes the Base64 text form back into a coordinate.
///
/// As with binary decoding, shorter values decode at lower precision.
///
/// # Errors
///
/// - [`GeoEncodeError::Base64DecodeError`] - Invalid Base64 encoding
/// - [`GeoEncodeError::InvalidEncodedLength`] - Fewer than 2 bytes were decoded
pub fn decode_base64(text: &str) -> Result<LatLon, GeoEncodeError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(text)
        .map_err(|_| GeoEncodeError::Base64DecodeError)?;

    if bytes.len() < MIN_DECODE_LEN {
        return Err(GeoEncodeError::InvalidEncodedLength(bytes.len()));
    }

    Ok(decode(&bytes))
}
