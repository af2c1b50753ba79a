mod format;
mod frame;
mod null_encoder;
mod primitives;

pub use format::OutputFormat;
pub use frame::RenderFrame;
pub use null_encoder::NullEncoder;
pub use primitives::{Color, LinePrimitive, MarkerPrimitive, TextHAlign, TextPrimitive, TextVAlign};

use crate::error::QuadrantResult;

/// Contract implemented by any encoding backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` and
/// return the encoded bytes for one output format, so drawing code stays
/// isolated from chart layout logic. A render either completes or fails
/// synchronously; encoders never retry.
pub trait FrameEncoder {
    fn encode(&mut self, frame: &RenderFrame, format: OutputFormat) -> QuadrantResult<Vec<u8>>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoEncodeStats, CairoEncoder};
