//! I/O operations for decoding uploaded media

mod decode;

pub use decode::{read_image, read_image_from_buffer};
