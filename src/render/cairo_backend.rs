use std::f64::consts::TAU;
use std::fmt::Display;

use cairo::{Context, Format, ImageSurface, PdfSurface};
use pango::FontDescription;

use crate::error::{QuadrantError, QuadrantResult};
use crate::render::{Color, FrameEncoder, OutputFormat, RenderFrame, TextHAlign, TextVAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoEncodeStats {
    pub lines_drawn: usize,
    pub markers_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo encoder backend.
///
/// PNG output rasterizes the frame onto an offscreen ARGB32 image surface at
/// one pixel per frame unit; PDF output replays the same primitives onto a
/// vector surface sized in PostScript points. Surfaces are created per call,
/// so one encoder per request keeps concurrent pipelines independent.
#[derive(Debug)]
pub struct CairoEncoder {
    clear_color: Color,
    last_stats: CairoEncodeStats,
}

impl Default for CairoEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl CairoEncoder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            last_stats: CairoEncodeStats::default(),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    /// Background color painted before drawing. Defaults to opaque white.
    pub fn set_clear_color(&mut self, color: Color) -> QuadrantResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoEncodeStats {
        self.last_stats
    }

    fn encode_png(&mut self, frame: &RenderFrame) -> QuadrantResult<Vec<u8>> {
        let width = i32::try_from(frame.viewport.width)
            .map_err(|err| map_backend_error("viewport width exceeds surface limit", err))?;
        let height = i32::try_from(frame.viewport.height)
            .map_err(|err| map_backend_error("viewport height exceeds surface limit", err))?;

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create image surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.draw_frame(&context, frame)?;
        drop(context);

        let mut bytes = Vec::new();
        surface
            .write_to_png(&mut bytes)
            .map_err(|err| map_backend_error("failed to write png stream", err))?;
        Ok(bytes)
    }

    fn encode_pdf(&mut self, frame: &RenderFrame) -> QuadrantResult<Vec<u8>> {
        let surface = PdfSurface::for_stream(
            f64::from(frame.viewport.width),
            f64::from(frame.viewport.height),
            Vec::<u8>::new(),
        )
        .map_err(|err| map_backend_error("failed to create pdf surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.draw_frame(&context, frame)?;
        drop(context);

        surface.flush();
        let stream = surface
            .finish_output_stream()
            .map_err(|err| map_backend_error("failed to finish pdf stream", err.error))?;
        stream
            .downcast::<Vec<u8>>()
            .map(|bytes| *bytes)
            .map_err(|_| QuadrantError::Encoding("pdf stream yielded a foreign buffer".to_owned()))
    }

    fn draw_frame(&mut self, context: &Context, frame: &RenderFrame) -> QuadrantResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color());
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoEncodeStats::default();

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for marker in &frame.markers {
            apply_color(context, marker.color);
            context.new_sub_path();
            context.arc(marker.x, marker.y, marker.radius, 0.0, TAU);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill marker", err))?;
            stats.markers_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_alignment(match text.h_align {
                TextHAlign::Left => pango::Alignment::Left,
                TextHAlign::Center => pango::Alignment::Center,
                TextHAlign::Right => pango::Alignment::Right,
            });
            layout.set_text(&text.text);

            let (text_width, text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };
            let y = match text.v_align {
                TextVAlign::Top => text.y,
                TextVAlign::Middle => text.y - f64::from(text_height) / 2.0,
                TextVAlign::Bottom => text.y - f64::from(text_height),
            };

            apply_color(context, text.color);
            context.move_to(x, y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl FrameEncoder for CairoEncoder {
    fn encode(&mut self, frame: &RenderFrame, format: OutputFormat) -> QuadrantResult<Vec<u8>> {
        match format {
            OutputFormat::Png => self.encode_png(frame),
            OutputFormat::Pdf => self.encode_pdf(frame),
        }
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: impl Display) -> QuadrantError {
    QuadrantError::Encoding(format!("{prefix}: {err}"))
}
