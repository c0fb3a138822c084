mod types;

pub use types::{MediaError, SizeError, TransformError};
