pub mod catalog;
pub mod constants;
pub mod errors;
pub mod transform;

// 公開API
pub use catalog::{DEFAULT_SIZE_OPTIONS, SizeCatalog, SizeOption};
pub use constants::{DEFAULT_SIZE_TOKEN, JPEG_QUALITY, MAX_PIXELS};
pub use errors::{MediaError, SizeError, TransformError};
pub use transform::{
    calculate_bounded_dimensions, decode_image, encode_jpeg, resize_image, to_grayscale,
};
