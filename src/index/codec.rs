use crate::coord::{Coordinate, LatLon};
use crate::core::angle::{quantize_latitude, quantize_longitude, wrap_longitude};
use crate::core::constants::{ENCODED_LEN, LAT_DEGREE_RADIX, NORTH_POLE_UNITS};
use crate::core::dms::Dms;
use crate::error::GeoEncodeError;

/// Encodes a coordinate into its 6-byte binary form.
///
/// # Binary Format
///
/// Latitude is shifted by +90 degrees and both axes are quantized to 16ths
/// of a second, then split into degrees, minutes, seconds and 16ths. The
/// parts are packed most significant first so that the leading bytes alone
/// give a coarser version of the coordinate:
///
/// | Offset | Bits | Contents                                                    |
/// |--------|------|-------------------------------------------------------------|
/// | 0      | 16   | `lat_degrees + lon_degrees * 181`, big-endian               |
/// | 2      | 4+4  | `lat_minutes / 4`, `lon_minutes / 4`                        |
/// | 3      | 2+2  | `lat_minutes % 4`, `lon_minutes % 4`                        |
/// | 3      | 2+2  | `lat_seconds / 15`, `lon_seconds / 15`                      |
/// | 4      | 4+4  | `lat_seconds % 15`, `lon_seconds % 15`                      |
/// | 5      | 4+4  | `lat_sixteenths`, `lon_sixteenths`                          |
///
/// Longitudes are wrapped into `0..360` first. A latitude which rounds to
/// either pole is stored with a longitude of 0.
///
/// # Example
/// ```
/// use geoencode::encode_to_array;
///
/// let bytes = encode_to_array(10.0, 96.0).unwrap();
/// assert_eq!(bytes, [0x44, 0x44, 0, 0, 0, 0]);
/// ```
///
/// # Errors
///
/// - [`GeoEncodeError::OutOfRangeLatitude`] - `lat` is not within -90..=90
pub fn encode_to_array(lat: f64, lon: f64) -> Result<[u8; ENCODED_LEN], GeoEncodeError> {
    if !(-90.0..=90.0).contains(&lat) {
        log::warn!("Rejecting coordinate with out of range latitude {}", lat);
        return Err(GeoEncodeError::OutOfRangeLatitude(lat));
    }

    let lat_units = quantize_latitude(lat);
    let lon_units = if lat_units == 0 || lat_units == NORTH_POLE_UNITS {
        0
    } else {
        quantize_longitude(wrap_longitude(lon))
    };

    let lat_dms = Dms::from_sixteenths(lat_units);
    let lon_dms = Dms::from_sixteenths(lon_units);

    // dd is in range 0..=180 + 359 * 181, so fits in 16 bits.
    let dd = lat_dms.degrees + lon_dms.degrees * LAT_DEGREE_RADIX;

    Ok([
        (dd >> 8) as u8,
        (dd & 0xff) as u8,
        (((lat_dms.minutes / 4) << 4) | (lon_dms.minutes / 4)) as u8,
        (((lat_dms.minutes % 4) << 6)
            | ((lon_dms.minutes % 4) << 4)
            | ((lat_dms.seconds / 15) << 2)
            | (lon_dms.seconds / 15)) as u8,
        (((lat_dms.seconds % 15) << 4) | (lon_dms.seconds % 15)) as u8,
        ((lat_dms.sixteenths << 4) | lon_dms.sixteenths) as u8,
    ])
}

/// Encodes a coordinate and appends the 6 bytes to `result`.
///
/// Existing contents of `result` are kept. On error nothing is written.
///
/// # Example
/// ```
/// use geoencode::{decode, encode};
///
/// let mut buf = Vec::new();
/// encode(51.5, -0.125, &mut buf).unwrap();
/// assert_eq!(buf.len(), 6);
///
/// let coord = decode(&buf);
/// assert!((coord.lat - 51.5).abs() < 1e-8);
/// assert!((coord.lon - 359.875).abs() < 1e-8);
/// ```
pub fn encode(lat: f64, lon: f64, result: &mut Vec<u8>) -> Result<(), GeoEncodeError> {
    let bytes = encode_to_array(lat, lon)?;
    result.extend_from_slice(&bytes);
    Ok(())
}

/// Encodes anything implementing [`Coordinate`], appending to `result`.
pub fn encode_coord(coord: &impl Coordinate, result: &mut Vec<u8>) -> Result<(), GeoEncodeError> {
    encode(coord.lat(), coord.lon(), result)
}

/// Decodes an encoded coordinate.
///
/// Any prefix of at least 2 bytes may be given; precision drops to whole
/// degrees with 2 bytes and reaches 16ths of a second with all 6. Bytes after
/// the 6th are ignored. Decoding never fails: malformed input produces some
/// coordinate, possibly out of the usual range. Input shorter than 2 bytes is
/// read as though the missing bytes were zero.
///
/// # Example
/// ```
/// use geoencode::{decode, encode_to_array};
///
/// let bytes = encode_to_array(10.5, 20.25).unwrap();
///
/// let coarse = decode(&bytes[..2]);
/// assert_eq!((coarse.lat, coarse.lon), (10.0, 20.0));
///
/// let full = decode(&bytes);
/// assert_eq!((full.lat, full.lon), (10.5, 20.25));
/// ```
pub fn decode(value: &[u8]) -> LatLon {
    let high = value.first().copied().unwrap_or(0) as u32;
    let low = value.get(1).copied().unwrap_or(0) as u32;
    let dd = (high << 8) | low;

    let mut lat = (dd % LAT_DEGREE_RADIX) as f64;
    let mut lon = (dd / LAT_DEGREE_RADIX) as f64;

    if let Some(&minutes) = value.get(2) {
        let mut lat_m = ((minutes >> 4) as u32 * 4) as f64;
        let mut lon_m = ((minutes & 0xf) as u32 * 4) as f64;

        if let Some(&mixed) = value.get(3) {
            lat_m += ((mixed >> 6) & 3) as f64;
            lon_m += ((mixed >> 4) & 3) as f64;
            let mut lat_s = (((mixed >> 2) & 3) as u32 * 15) as f64;
            let mut lon_s = ((mixed & 3) as u32 * 15) as f64;

            if let Some(&seconds) = value.get(4) {
                lat_s += (seconds >> 4) as f64;
                lon_s += (seconds & 0xf) as f64;

                if let Some(&sixteenths) = value.get(5) {
                    lat_s += (sixteenths >> 4) as f64 / 16.0;
                    lon_s += (sixteenths & 0xf) as f64 / 16.0;
                }
            }

            lat_m += lat_s / 60.0;
            lon_m += lon_s / 60.0;
        }

        lat += lat_m / 60.0;
        lon += lon_m / 60.0;
    }

    LatLon::new(lat - 90.0, lon)
}
