pub mod colour;
pub mod escape_result;
pub mod pixel_buffer;
pub mod viewport;
