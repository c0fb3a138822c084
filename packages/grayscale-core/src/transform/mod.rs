pub mod decode;
pub mod dimensions;
pub mod encode;
pub mod grayscale;
pub mod resize;

pub use decode::decode_image;
pub use dimensions::calculate_bounded_dimensions;
pub use encode::encode_jpeg;
pub use grayscale::to_grayscale;
pub use resize::resize_image;
