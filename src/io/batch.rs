use crate::coord::{Coordinate, LatLon};
use crate::core::constants::{ENCODED_LEN, MIN_DECODE_LEN};
use crate::error::GeoEncodeError;
use crate::index::bbox::BoundingBoxFilter;
use crate::index::codec::{decode, encode_to_array};
use rayon::prelude::*;

/// Trait for encoding collections of coordinates into one packed buffer.
///
/// Implemented for slices and `Vec`s of any [`Coordinate`], such as
/// [`LatLon`], `geo_types::Point<f64>` or `(lon, lat)` tuples.
pub trait EncodeAll {
    /// Appends `6 * len` bytes to `result`, one encoded value per coordinate.
    ///
    /// If any coordinate fails to encode, `result` is left unmodified.
    fn encode_all(&self, result: &mut Vec<u8>) -> Result<(), GeoEncodeError>;
}

impl<T: Coordinate> EncodeAll for [T] {
    fn encode_all(&self, result: &mut Vec<u8>) -> Result<(), GeoEncodeError> {
        let mut packed = Vec::with_capacity(self.len() * ENCODED_LEN);
        for (i, coord) in self.iter().enumerate() {
            let bytes = encode_to_array(coord.lat(), coord.lon()).inspect_err(|e| {
                log::warn!("Batch encode stopped at coordinate {}: {}", i, e);
            })?;
            packed.extend_from_slice(&bytes);
        }

        result.append(&mut packed);
        Ok(())
    }
}

impl<T: Coordinate> EncodeAll for Vec<T> {
    fn encode_all(&self, result: &mut Vec<u8>) -> Result<(), GeoEncodeError> {
        self.as_slice().encode_all(result)
    }
}

/// Trait for decoding collections of fixed-size encoded values in parallel.
///
/// Implemented for `[[u8; 6]]` and `Vec<[u8; 6]>`.
pub trait DecodeAll {
    /// Decodes every value, preserving order.
    fn decode_all(&self) -> Vec<LatLon>;
    /// Decodes only the values inside `filter`, preserving order.
    fn filter_all(&self, filter: &BoundingBoxFilter) -> Vec<LatLon>;
}

impl DecodeAll for [[u8; ENCODED_LEN]] {
    fn decode_all(&self) -> Vec<LatLon> {
        self.par_iter().map(|value| decode(value)).collect()
    }

    fn filter_all(&self, filter: &BoundingBoxFilter) -> Vec<LatLon> {
        self.par_iter().filter_map(|value| filter.decode(value)).collect()
    }
}

impl DecodeAll for Vec<[u8; ENCODED_LEN]> {
    fn decode_all(&self) -> Vec<LatLon> {
        self.as_slice().decode_all()
    }

    fn filter_all(&self, filter: &BoundingBoxFilter) -> Vec<LatLon> {
        self.as_slice().filter_all(filter)
    }
}

/// Decodes a packed buffer of back-to-back 6-byte values, as written by [`EncodeAll`].
///
/// A trailing partial value of 2 or more bytes is decoded at reduced
/// precision; a single trailing byte is ignored.
pub fn decode_packed(packed: &[u8]) -> Vec<LatLon> {
    packed
        .par_chunks(ENCODED_LEN)
        .filter(|chunk| chunk.len() >= MIN_DECODE_LEN)
        .map(decode)
        .collect()
}

/// Decodes the values of a packed buffer which lie inside `filter`.
pub fn filter_packed(packed: &[u8], filter: &BoundingBoxFilter) -> Vec<LatLon> {
    packed
        .par_chunks(ENCODED_LEN)
        .filter(|chunk| chunk.len() >= MIN_DECODE_LEN)
        .filter_map(|chunk| filter.decode(chunk))
        .collect()
}
