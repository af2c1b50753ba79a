use crate::error::{QuadrantError, QuadrantResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> QuadrantResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(QuadrantError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> QuadrantResult<()> {
        ensure_finite("line x1", self.x1)?;
        ensure_finite("line y1", self.y1)?;
        ensure_finite("line x2", self.x2)?;
        ensure_finite("line y2", self.y2)?;
        ensure_positive("line stroke width", self.stroke_width)?;
        self.color.validate()
    }
}

/// Draw command for one filled circular point marker in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

impl MarkerPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, radius: f64, color: Color) -> Self {
        Self {
            x,
            y,
            radius,
            color,
        }
    }

    pub fn validate(self) -> QuadrantResult<()> {
        ensure_finite("marker x", self.x)?;
        ensure_finite("marker y", self.y)?;
        ensure_positive("marker radius", self.radius)?;
        self.color.validate()
    }
}

/// Horizontal text anchoring relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text anchoring relative to `TextPrimitive::y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

/// Draw command for one text block in pixel space.
///
/// `text` is rendered verbatim; embedded line breaks produce multi-line
/// blocks aligned according to `h_align`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
        v_align: TextVAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
            v_align,
        }
    }

    pub fn validate(&self) -> QuadrantResult<()> {
        if self.text.is_empty() {
            return Err(QuadrantError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        ensure_finite("text x", self.x)?;
        ensure_finite("text y", self.y)?;
        ensure_positive("font size", self.font_size_px)?;
        self.color.validate()
    }
}

fn ensure_finite(name: &str, value: f64) -> QuadrantResult<()> {
    if !value.is_finite() {
        return Err(QuadrantError::InvalidData(format!(
            "{name} must be finite"
        )));
    }
    Ok(())
}

fn ensure_positive(name: &str, value: f64) -> QuadrantResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(QuadrantError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}
