use serde::{Deserialize, Serialize};

use crate::core::{Point, Viewport, sample_points};
use crate::error::{QuadrantError, QuadrantResult};
use crate::render::OutputFormat;

pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 800,
    height: 600,
};

/// One chart invocation: the points to plot plus title, axis-end captions,
/// output format and canvas size.
///
/// The type is serializable so embedding applications can accept the request
/// as a JSON body without inventing their own ad-hoc format. All caption
/// strings default to empty, which renders nothing rather than a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    /// Points defaulting to `sample_points()` when the JSON body omits them,
    /// matching the behavior callers observe on the POST route.
    #[serde(default = "sample_points")]
    pub points: Vec<Point>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x_left: String,
    #[serde(default)]
    pub x_right: String,
    #[serde(default)]
    pub y_bottom: String,
    #[serde(default)]
    pub y_top: String,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
}

impl ChartRequest {
    /// Creates a request with empty captions, PNG output and the default
    /// 800x600 canvas.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            title: String::new(),
            x_left: String::new(),
            x_right: String::new(),
            y_bottom: String::new(),
            y_top: String::new(),
            format: OutputFormat::default(),
            viewport: default_viewport(),
        }
    }

    /// Sets the title centered above the plot.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets all four axis-end captions at once, in
    /// left / right / bottom / top order.
    #[must_use]
    pub fn with_axis_captions(
        mut self,
        x_left: impl Into<String>,
        x_right: impl Into<String>,
        y_bottom: impl Into<String>,
        y_top: impl Into<String>,
    ) -> Self {
        self.x_left = x_left.into();
        self.x_right = x_right.into();
        self.y_bottom = y_bottom.into();
        self.y_top = y_top.into();
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the canvas size in pixels (PDF output reads it as points).
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Serializes the request to pretty JSON.
    pub fn to_json_pretty(&self) -> QuadrantResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| QuadrantError::InvalidData(format!("failed to serialize request: {e}")))
    }

    /// Deserializes a request from JSON, applying the documented defaults for
    /// absent fields (`points` falls back to `sample_points()`).
    pub fn from_json_str(input: &str) -> QuadrantResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| QuadrantError::InvalidData(format!("failed to parse request: {e}")))
    }
}

fn default_viewport() -> Viewport {
    DEFAULT_VIEWPORT
}
