pub mod bbox;
pub mod codec;
pub mod text;

pub use bbox::BoundingBoxFilter;
pub use codec::{decode, encode, encode_coord, encode_to_array};
pub use text::{decode_base64, encode_base64};
