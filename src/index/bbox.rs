use crate::coord::LatLon;
use crate::core::angle::{quantize_latitude, wrap_longitude};
use crate::core::constants::{LAT_DEGREE_RADIX, NORTH_POLE_UNITS, SIXTEENTHS_PER_DEGREE};
use crate::index::codec::decode;
use geo_types::Rect;

/// A decoder which only returns coordinates inside a latitude/longitude box.
///
/// Construction wraps both longitudes into `0..360` and works out the range
/// of leading bytes that encoded values inside the box can have. Decoding
/// then rejects most values outside the box by looking at the first byte
/// alone, and only fully decodes the rest.
///
/// The longitude range runs eastwards from `lon1` to `lon2`. If `lon1` is
/// greater than `lon2` after wrapping, the range crosses the 0/360 meridian.
///
/// # Example
///
/// ```
/// use geoencode::{BoundingBoxFilter, encode_to_array};
///
/// // Everything from 60W to 50E, south of 10N
/// let filter = BoundingBoxFilter::new(-90.0, -60.0, 10.0, 50.0);
///
/// assert!(filter.decode(&encode_to_array(0.0, 49.0).unwrap()).is_some());
/// assert!(filter.decode(&encode_to_array(0.0, 300.0).unwrap()).is_some());
/// assert!(filter.decode(&encode_to_array(0.0, 51.0).unwrap()).is_none());
/// assert!(filter.decode(&encode_to_array(20.0, 0.0).unwrap()).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBoxFilter {
    min_lat: f64,
    max_lat: f64,
    lon1: f64,
    lon2: f64,
    start1: u8,
    start2: u8,
    include_poles: bool,
    discontinuous: bool,
}

/// Leading encoded byte for a box corner, and whether the corner is a pole.
///
/// Unlike encoding, a longitude rounding up to a full turn is not wrapped
/// back to 0 here, so the corner stays at the top of the byte range.
fn corner_leading_byte(lat: f64, lon: f64) -> (u8, bool) {
    let lat_units = quantize_latitude(lat);
    let lon_units = (lon * SIXTEENTHS_PER_DEGREE as f64).round() as u32;
    let dd = lat_units / SIXTEENTHS_PER_DEGREE
        + (lon_units / SIXTEENTHS_PER_DEGREE) * LAT_DEGREE_RADIX;
    // Corners beyond either pole still take in that pole.
    let is_pole = lat_units == 0 || lat_units >= NORTH_POLE_UNITS;

    ((dd >> 8) as u8, is_pole)
}

impl BoundingBoxFilter {
    /// Creates a filter for the box from `(lat1, lon1)` to `(lat2, lon2)`.
    ///
    /// `lat1` must not be greater than `lat2`; this is not checked. The
    /// longitudes may have any value and are wrapped into `0..360`.
    pub fn new(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Self {
        let lon1 = wrap_longitude(lon1);
        let lon2 = wrap_longitude(lon2);

        let (start1, pole1) = corner_leading_byte(lat1, lon1);
        let (start2, pole2) = corner_leading_byte(lat2, lon2);

        let filter = Self {
            min_lat: lat1,
            max_lat: lat2,
            lon1,
            lon2,
            start1,
            start2,
            include_poles: pole1 || pole2,
            discontinuous: lon1 > lon2,
        };

        log::debug!(
            "Bounding box filter lat {}..{} lon {}..{}: leading bytes {}..{}, poles={}, discontinuous={}",
            filter.min_lat,
            filter.max_lat,
            filter.lon1,
            filter.lon2,
            filter.start1,
            filter.start2,
            filter.include_poles,
            filter.discontinuous
        );

        filter
    }

    /// Creates a filter from a `geo_types::Rect` with x as longitude and y as latitude.
    ///
    /// A `Rect` always has `min.x <= max.x`, so the resulting longitude range
    /// only crosses the 0/360 meridian if wrapping puts the minimum above
    /// the maximum.
    pub fn from_rect(rect: &Rect<f64>) -> Self {
        Self::new(rect.min().y, rect.min().x, rect.max().y, rect.max().x)
    }

    /// Returns the `(min, max)` latitude of the box.
    pub fn lat_range(&self) -> (f64, f64) {
        (self.min_lat, self.max_lat)
    }

    /// Returns the wrapped `(from, to)` longitudes of the box.
    pub fn lon_range(&self) -> (f64, f64) {
        (self.lon1, self.lon2)
    }

    /// Returns true if the longitude range crosses the 0/360 meridian.
    pub fn is_discontinuous(&self) -> bool {
        self.discontinuous
    }

    /// Returns true if either corner latitude rounds to a pole.
    pub fn includes_poles(&self) -> bool {
        self.include_poles
    }

    /// Returns the leading encoded bytes of the two corners.
    pub fn leading_bytes(&self) -> (u8, u8) {
        (self.start1, self.start2)
    }

    /// Cheap test on the first byte of an encoded value.
    ///
    /// Returns false only if no value starting with `start` can lie in the
    /// box. A true result may still turn out to be outside once decoded.
    pub fn may_contain(&self, start: u8) -> bool {
        let outside = if self.discontinuous {
            // start must be outside (start2..start1), exclusive of ends
            self.start2 < start && start < self.start1
        } else {
            // start must be inside [start1..start2], inclusive of ends
            start < self.start1 || self.start2 < start
        };

        // Both poles encode with a leading byte of 0.
        !outside || (self.include_poles && start == 0)
    }

    /// Exact test of a decoded coordinate against the box.
    ///
    /// `coord.lon` is expected to be in `0..360`, as returned by [`decode`].
    pub fn contains(&self, coord: &LatLon) -> bool {
        if coord.lat < self.min_lat || coord.lat > self.max_lat {
            return false;
        }
        if coord.is_pole() {
            return true;
        }

        if self.discontinuous {
            !(self.lon2 < coord.lon && coord.lon < self.lon1)
        } else {
            !(coord.lon < self.lon1 || self.lon2 < coord.lon)
        }
    }

    /// Decodes `value` if it lies inside the box.
    ///
    /// Returns `None` for values outside the box. As with [`decode`], a
    /// prefix of at least 2 bytes may be given.
    pub fn decode(&self, value: &[u8]) -> Option<LatLon> {
        let start = value.first().copied().unwrap_or(0);
        if !self.may_contain(start) {
            return None;
        }

        let decoded = decode(value);
        self.contains(&decoded).then_some(decoded)
    }
}
