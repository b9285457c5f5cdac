pub mod color;
pub mod surface;
pub mod variants;
pub mod recorder;
pub mod painter;

pub use surface::{Ink, Surface, SurfaceSize};
