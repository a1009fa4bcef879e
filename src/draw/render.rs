//! Cairo-based drawing primitives.
//!
//! These functions draw directly onto a Cairo context and are used by
//! [`CairoCanvas`](super::CairoCanvas). Every function leaves the context's
//! source, line width and operator in an unspecified state; callers create a
//! fresh context per operation.

use super::canvas::{LineCap, PaintMode};
use super::color::Color;
use super::font::FontDescriptor;
use crate::util::Point;

/// Fills the whole surface with `color`, replacing whatever was there.
pub fn render_background(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.paint()
}

/// Renders a single straight segment.
///
/// A zero-length segment with a round cap leaves a dot of diameter `width`.
pub fn render_segment(
    ctx: &cairo::Context,
    from: Point,
    to: Point,
    color: Color,
    width: f64,
    cap: LineCap,
) -> Result<(), cairo::Error> {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cap.into());
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke()
}

/// Renders a rectangle outline or fill.
///
/// Negative sizes are normalised so the rectangle may be dragged in any direction.
pub fn render_rect(
    ctx: &cairo::Context,
    origin: Point,
    size: (f64, f64),
    mode: PaintMode,
    color: Color,
    width: f64,
) -> Result<(), cairo::Error> {
    let end = Point::new(origin.x + size.0, origin.y + size.1);
    let (x, y, w, h) = crate::util::normalized_rect(origin, end);

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.rectangle(x, y, w, h);

    match mode {
        PaintMode::Fill => ctx.fill(),
        PaintMode::Stroke => {
            ctx.set_line_width(width);
            ctx.set_line_join(cairo::LineJoin::Miter);
            ctx.stroke()
        }
    }
}

/// Renders a circle outline or fill.
pub fn render_circle(
    ctx: &cairo::Context,
    center: Point,
    radius: f64,
    mode: PaintMode,
    color: Color,
    width: f64,
) -> Result<(), cairo::Error> {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.new_path();
    ctx.arc(center.x, center.y, radius.max(0.0), 0.0, std::f64::consts::PI * 2.0);

    match mode {
        PaintMode::Fill => ctx.fill(),
        PaintMode::Stroke => {
            ctx.set_line_width(width);
            ctx.stroke()
        }
    }
}

/// Renders a run of text with its first baseline at `origin`.
///
/// Uses Pango so that the configured family, weight and style resolve against
/// installed system fonts. Newlines start additional lines below the first.
pub fn render_text(
    ctx: &cairo::Context,
    origin: Point,
    text: &str,
    color: Color,
    size: f64,
    font: &FontDescriptor,
) -> Result<(), cairo::Error> {
    ctx.save()?;

    // Gray antialiasing avoids color fringes on an RGBA image surface
    ctx.set_antialias(cairo::Antialias::Gray);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    // Pango positions layouts by their top-left corner
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(origin.x, origin.y - baseline);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore()
}
