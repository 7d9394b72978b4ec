//! # geoencode
//!
//! A compact binary encoding for latitude/longitude coordinates. Each
//! coordinate packs into 6 bytes at a resolution of 1/16th of a second of
//! arc (about 1.9 m at the equator), with the whole-degree parts of both
//! axes in the leading bytes.
//!
//! There are currently three main entry points.
//!
//! ### 1. `encode` / `decode` - Single Coordinates
//!
//! ```
//! use geoencode::{decode, encode};
//!
//! # fn main() -> Result<(), geoencode::GeoEncodeError> {
//! let mut buf = Vec::new();
//! encode(53.481, -2.248, &mut buf)?;
//!
//! let coord = decode(&buf);
//! println!("{}, {}", coord.lat, coord.lon); // longitude is wrapped to 0..360
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `BoundingBoxFilter` - Decoding Within a Region
//!
//! ```
//! use geoencode::{BoundingBoxFilter, encode_to_array};
//!
//! # fn main() -> Result<(), geoencode::GeoEncodeError> {
//! let filter = BoundingBoxFilter::new(49.9, -8.2, 60.9, 1.8);
//!
//! let manchester = encode_to_array(53.481, -2.248)?;
//! let paris = encode_to_array(48.857, 2.352)?;
//!
//! assert!(filter.decode(&manchester).is_some());
//! assert!(filter.decode(&paris).is_none());
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `EncodeAll` / `DecodeAll` - Collections
//!
//! ```
//! use geoencode::{BoundingBoxFilter, EncodeAll, LatLon, filter_packed};
//!
//! # fn main() -> Result<(), geoencode::GeoEncodeError> {
//! let coords = vec![LatLon::new(53.481, -2.248), LatLon::new(48.857, 2.352)];
//!
//! let mut packed = Vec::new();
//! coords.encode_all(&mut packed)?;
//!
//! let filter = BoundingBoxFilter::new(49.9, -8.2, 60.9, 1.8);
//! assert_eq!(filter_packed(&packed, &filter).len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod coord;
pub mod core;
pub mod error;
pub mod index;
pub mod io;

pub use coord::{Coordinate, LatLon};
pub use crate::core::{
    Dms, ENCODED_LEN, LAT_DEGREE_RADIX, MIN_DECODE_LEN, SIXTEENTHS_PER_DEGREE, wrap_longitude,
};
pub use error::GeoEncodeError;
pub use index::{
    BoundingBoxFilter, decode, decode_base64, encode, encode_base64, encode_coord, encode_to_array,
};
pub use io::{DecodeAll, EncodeAll, decode_packed, filter_packed};

pub use geo_types;
