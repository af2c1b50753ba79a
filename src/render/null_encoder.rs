use crate::error::QuadrantResult;
use crate::render::{FrameEncoder, OutputFormat, RenderFrame};

/// No-op encoder used by tests and headless pipeline usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a real backend, and returns a small deterministic placeholder
/// payload per format so downstream packaging stays testable.
#[derive(Debug, Default)]
pub struct NullEncoder {
    pub last_line_count: usize,
    pub last_marker_count: usize,
    pub last_text_count: usize,
}

impl FrameEncoder for NullEncoder {
    fn encode(&mut self, frame: &RenderFrame, format: OutputFormat) -> QuadrantResult<Vec<u8>> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_marker_count = frame.markers.len();
        self.last_text_count = frame.texts.len();
        Ok(format!("null-encoder:{format}").into_bytes())
    }
}
