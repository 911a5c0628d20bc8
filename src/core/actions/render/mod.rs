pub mod chunked;
#[allow(clippy::module_inception)]
pub mod render;
mod scanline;

pub use chunked::{ChunkProgress, ChunkedRender};
pub use render::{RenderError, render, render_cancelable, render_into, render_serial};
