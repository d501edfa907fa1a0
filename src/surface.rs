//! Collaborators a graphics context hands work to.
//!
//! The context owns coordinate spaces, clipping and state. Rasterizing
//! primitives, shaping text and storing pixels belong to the types behind
//! these traits. Every coordinate passed to a [`RenderTarget`] is already in
//! device space and every call carries the visible clip as device rectangles.

use crate::geometry::{PointF, RectF, SizeF};
use crate::graphics::TextRenderingHint;
use crate::{Color, Pen};

/// Receives primitives in device coordinates.
pub trait RenderTarget {
    fn fill_polygon(&mut self, points: &[PointF], color: Color, clip: &[RectF]);

    /// Strokes connected segments. `closed` joins the last point to the first.
    fn stroke_polyline(&mut self, points: &[PointF], pen: &Pen, closed: bool, clip: &[RectF]);

    /// Strokes cubic Béziers: a start point followed by three points per segment.
    fn stroke_beziers(&mut self, points: &[PointF], pen: &Pen, clip: &[RectF]);

    /// Strokes a cardinal spline through every point.
    fn stroke_curve(&mut self, points: &[PointF], pen: &Pen, tension: f32, clip: &[RectF]);
}

/// Font selection passed through to a [`TextMeasurer`].
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    /// Em size in points.
    pub size: f32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringAlignment {
    /// Align text to the start of the layout area.
    #[default]
    Near,
    Center,
    /// Align text to the end of the layout area.
    Far,
}

/// Layout flags for measuring text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringFormat {
    pub alignment: StringAlignment,
    pub line_alignment: StringAlignment,
    /// Keep the text on a single line even if it overflows the layout width.
    pub no_wrap: bool,
}

/// Result of a text measurement, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub size: SizeF,
    pub characters_fitted: usize,
    pub lines_filled: usize,
}

pub trait TextMeasurer {
    fn measure_string(
        &mut self,
        text: &str,
        font: &FontSpec,
        layout_area: SizeF,
        format: &StringFormat,
        hint: TextRenderingHint,
    ) -> TextMetrics;
}

/// A raster a context can be created for.
pub trait PixelSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn get_pixel(&self, x: u32, y: u32) -> Option<Color>;
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// One call received by a [`RecordingTarget`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCommand {
    FillPolygon {
        points: Vec<PointF>,
        color: Color,
        clip: Vec<RectF>,
    },
    StrokePolyline {
        points: Vec<PointF>,
        pen: Pen,
        closed: bool,
        clip: Vec<RectF>,
    },
    StrokeBeziers {
        points: Vec<PointF>,
        pen: Pen,
        clip: Vec<RectF>,
    },
    StrokeCurve {
        points: Vec<PointF>,
        pen: Pen,
        tension: f32,
        clip: Vec<RectF>,
    },
}

impl RecordedCommand {
    pub fn points(&self) -> &[PointF] {
        match self {
            RecordedCommand::FillPolygon { points, .. }
            | RecordedCommand::StrokePolyline { points, .. }
            | RecordedCommand::StrokeBeziers { points, .. }
            | RecordedCommand::StrokeCurve { points, .. } => points,
        }
    }

    pub fn clip(&self) -> &[RectF] {
        match self {
            RecordedCommand::FillPolygon { clip, .. }
            | RecordedCommand::StrokePolyline { clip, .. }
            | RecordedCommand::StrokeBeziers { clip, .. }
            | RecordedCommand::StrokeCurve { clip, .. } => clip,
        }
    }
}

/// A [`RenderTarget`] that keeps every call it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    pub commands: Vec<RecordedCommand>,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderTarget for RecordingTarget {
    fn fill_polygon(&mut self, points: &[PointF], color: Color, clip: &[RectF]) {
        self.commands.push(RecordedCommand::FillPolygon {
            points: points.to_vec(),
            color,
            clip: clip.to_vec(),
        });
    }

    fn stroke_polyline(&mut self, points: &[PointF], pen: &Pen, closed: bool, clip: &[RectF]) {
        self.commands.push(RecordedCommand::StrokePolyline {
            points: points.to_vec(),
            pen: *pen,
            closed,
            clip: clip.to_vec(),
        });
    }

    fn stroke_beziers(&mut self, points: &[PointF], pen: &Pen, clip: &[RectF]) {
        self.commands.push(RecordedCommand::StrokeBeziers {
            points: points.to_vec(),
            pen: *pen,
            clip: clip.to_vec(),
        });
    }

    fn stroke_curve(&mut self, points: &[PointF], pen: &Pen, tension: f32, clip: &[RectF]) {
        self.commands.push(RecordedCommand::StrokeCurve {
            points: points.to_vec(),
            pen: *pen,
            tension,
            clip: clip.to_vec(),
        });
    }
}
