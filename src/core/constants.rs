/// Number of 1/16-second quantization units in one degree.
pub const SIXTEENTHS_PER_DEGREE: u32 = 3600 * 16;

/// Number of 1/16-second quantization units in one minute of arc.
pub const SIXTEENTHS_PER_MINUTE: u32 = 60 * 16;

/// Number of 1/16-second quantization units in one second of arc.
pub const SIXTEENTHS_PER_SECOND: u32 = 16;

/// Quantized latitude of the north pole (latitudes are shifted so 0 is the south pole).
pub const NORTH_POLE_UNITS: u32 = 180 * SIXTEENTHS_PER_DEGREE;

/// Quantized value of a full turn of longitude, which wraps back to 0.
pub const FULL_TURN_UNITS: u32 = 360 * SIXTEENTHS_PER_DEGREE;

/// Number of distinct whole latitude degrees (0..=180), used as the radix
/// when packing latitude and longitude degrees into one 16-bit value.
pub const LAT_DEGREE_RADIX: u32 = 181;

/// Length in bytes of a fully encoded coordinate.
pub const ENCODED_LEN: usize = 6;

/// Shortest prefix of an encoded coordinate that carries both degree values.
pub const MIN_DECODE_LEN: usize = 2;
