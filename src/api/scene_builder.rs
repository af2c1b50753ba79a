use tracing::{debug, warn};

use crate::api::{ChartRequest, ChartStyle};
use crate::error::{QuadrantError, QuadrantResult};
use crate::render::{
    LinePrimitive, MarkerPrimitive, RenderFrame, TextHAlign, TextPrimitive, TextVAlign,
};

/// Builds the quadrant scene for one request using the default style.
///
/// The plot area is the largest square fitting the viewport minus the style
/// margins, centered in the remaining space. Unit coordinates map linearly
/// onto it — `(0, 0)` is the bottom-left plot corner, `(1, 1)` the top-right;
/// the builder never rescales data. Identical request and style produce an
/// identical frame.
pub fn build_render_frame(request: &ChartRequest) -> QuadrantResult<RenderFrame> {
    build_render_frame_with_style(request, &ChartStyle::default())
}

/// Builds the quadrant scene for one request with an explicit style.
pub fn build_render_frame_with_style(
    request: &ChartRequest,
    style: &ChartStyle,
) -> QuadrantResult<RenderFrame> {
    let viewport = request.viewport;
    if !viewport.is_valid() {
        return Err(QuadrantError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    let plot = PlotArea::fit(viewport.width, viewport.height, style)?;

    let mut frame = RenderFrame::new(viewport);
    append_quadrant_frame(&mut frame, plot, style);
    append_captions(&mut frame, request, plot, style);
    append_points(&mut frame, request, plot, style)?;

    debug!(
        lines = frame.lines.len(),
        markers = frame.markers.len(),
        texts = frame.texts.len(),
        "built quadrant frame"
    );
    Ok(frame)
}

/// Square plot region in pixel space, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlotArea {
    left: f64,
    top: f64,
    side: f64,
}

impl PlotArea {
    fn fit(width: u32, height: u32, style: &ChartStyle) -> QuadrantResult<Self> {
        let avail_width = f64::from(width) - style.margin_left - style.margin_right;
        let avail_height = f64::from(height) - style.margin_top - style.margin_bottom;
        let side = avail_width.min(avail_height);
        if side <= 0.0 {
            return Err(QuadrantError::InvalidData(format!(
                "viewport {width}x{height} leaves no room for the plot area inside its margins"
            )));
        }

        Ok(Self {
            left: style.margin_left + (avail_width - side) / 2.0,
            top: style.margin_top + (avail_height - side) / 2.0,
            side,
        })
    }

    fn right(self) -> f64 {
        self.left + self.side
    }

    fn bottom(self) -> f64 {
        self.top + self.side
    }

    fn center_x(self) -> f64 {
        self.left + self.side / 2.0
    }

    fn center_y(self) -> f64 {
        self.top + self.side / 2.0
    }

    /// Maps a unit-square coordinate to pixel space.
    fn project(self, x: f64, y: f64) -> (f64, f64) {
        (self.left + x * self.side, self.bottom() - y * self.side)
    }
}

fn append_quadrant_frame(frame: &mut RenderFrame, plot: PlotArea, style: &ChartStyle) {
    let (left, top) = (plot.left, plot.top);
    let (right, bottom) = (plot.right(), plot.bottom());
    let border = |x1, y1, x2, y2| {
        LinePrimitive::new(x1, y1, x2, y2, style.border_stroke_width, style.border_color)
    };

    frame.lines.push(border(left, top, right, top));
    frame.lines.push(border(left, bottom, right, bottom));
    frame.lines.push(border(left, top, left, bottom));
    frame.lines.push(border(right, top, right, bottom));

    // Midlines split the square into its four quadrants.
    frame.lines.push(LinePrimitive::new(
        plot.center_x(),
        top,
        plot.center_x(),
        bottom,
        style.midline_stroke_width,
        style.midline_color,
    ));
    frame.lines.push(LinePrimitive::new(
        left,
        plot.center_y(),
        right,
        plot.center_y(),
        style.midline_stroke_width,
        style.midline_color,
    ));
}

fn append_captions(
    frame: &mut RenderFrame,
    request: &ChartRequest,
    plot: PlotArea,
    style: &ChartStyle,
) {
    let mut push_text = |text: &str, x: f64, y: f64, size: f64, color, h_align, v_align| {
        // Empty captions render nothing rather than an empty placeholder.
        if text.is_empty() {
            return;
        }
        frame
            .texts
            .push(TextPrimitive::new(text, x, y, size, color, h_align, v_align));
    };

    push_text(
        &request.title,
        plot.center_x(),
        plot.top - style.title_gap,
        style.title_font_size_px,
        style.title_color,
        TextHAlign::Center,
        TextVAlign::Bottom,
    );

    let caption_y = plot.bottom() + style.caption_gap;
    push_text(
        &request.x_left,
        plot.left + plot.side * 0.25,
        caption_y,
        style.caption_font_size_px,
        style.caption_color,
        TextHAlign::Center,
        TextVAlign::Top,
    );
    push_text(
        &request.x_right,
        plot.left + plot.side * 0.75,
        caption_y,
        style.caption_font_size_px,
        style.caption_color,
        TextHAlign::Center,
        TextVAlign::Top,
    );

    let caption_x = plot.left - style.caption_gap;
    push_text(
        &request.y_bottom,
        caption_x,
        plot.bottom() - plot.side * 0.25,
        style.caption_font_size_px,
        style.caption_color,
        TextHAlign::Right,
        TextVAlign::Middle,
    );
    push_text(
        &request.y_top,
        caption_x,
        plot.top + plot.side * 0.25,
        style.caption_font_size_px,
        style.caption_color,
        TextHAlign::Right,
        TextVAlign::Middle,
    );
}

fn append_points(
    frame: &mut RenderFrame,
    request: &ChartRequest,
    plot: PlotArea,
    style: &ChartStyle,
) -> QuadrantResult<()> {
    for point in &request.points {
        point.validate()?;
        if !point.is_inside_unit_square() {
            warn!(
                label = %point.label,
                x = point.x,
                y = point.y,
                "point outside the unit square renders outside the plot area"
            );
        }

        let (px, py) = plot.project(point.x, point.y);
        frame
            .markers
            .push(MarkerPrimitive::new(px, py, style.marker_radius, style.marker_color));

        // Labels sit right of the marker so they never obscure it; text is
        // rendered verbatim, embedded line breaks included.
        if !point.label.is_empty() {
            frame.texts.push(TextPrimitive::new(
                &point.label,
                px + style.marker_radius + style.label_gap,
                py,
                style.label_font_size_px,
                style.label_color,
                TextHAlign::Left,
                TextVAlign::Middle,
            ));
        }
    }
    Ok(())
}
