pub mod batch;

pub use batch::{DecodeAll, EncodeAll, decode_packed, filter_packed};
