use serde::{Deserialize, Serialize};

use crate::error::{QuadrantError, QuadrantResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One labeled sample in normalized plot-fraction coordinates.
///
/// `x` and `y` are expected in `[0.0, 1.0]`. Out-of-range values are accepted
/// and render outside the unit square; choosing coordinates that stay inside
/// is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }

    pub fn validate(&self) -> QuadrantResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(QuadrantError::InvalidData(format!(
                "point `{}` coordinates must be finite",
                self.label
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_inside_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}
