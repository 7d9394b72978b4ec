pub mod angle;
pub mod constants;
pub mod dms;

pub use angle::{quantize_latitude, quantize_longitude, wrap_longitude};
pub use constants::{ENCODED_LEN, LAT_DEGREE_RADIX, MIN_DECODE_LEN, SIXTEENTHS_PER_DEGREE};
pub use dms::Dms;
