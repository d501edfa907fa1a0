//! Coordinate transforms and clip regions for a 2D drawing context.
//!
//! ```
//! use clipframe::{CombineMode, ContextConfig, GraphicsContext, RectF};
//!
//! let mut context = GraphicsContext::new(ContextConfig::new(16, 16));
//! context.set_clip_rect(RectF::new(0.0, 0.0, 8.0, 8.0), CombineMode::Replace);
//! context.translate_transform(8.0, 8.0);
//! assert_eq!(context.clip_bounds()?, RectF::new(-8.0, -8.0, 8.0, 8.0));
//! # Ok::<(), clipframe::GraphicsError>(())
//! ```

mod color;
mod coordinate_space;
mod error;
mod geometry;
mod graphics;
mod matrix;
mod pen;
mod region;
mod surface;

pub use color::Color;
pub use coordinate_space::{CoordinateSpace, CoordinateSpaceStack, GraphicsUnit};
pub use error::{GraphicsError, Result};
pub use geometry::{PointF, RectF, SizeF};
pub use graphics::{
    CompositingMode, CompositingQuality, ContextConfig, GraphicsContainer, GraphicsContext,
    GraphicsState, InterpolationMode, PixelOffsetMode, RenderingModes, SmoothingMode,
    TextRenderingHint, DEFAULT_DPI, MAX_TEXT_CONTRAST,
};
pub use matrix::{Matrix2D, MatrixOrder};
pub use pen::Pen;
pub use region::{CombineMode, Region, INFINITE_BOUNDS, INFINITE_MIN, INFINITE_SIZE};
pub use surface::{
    FontSpec, PixelSurface, RecordedCommand, RecordingTarget, RenderTarget, StringAlignment,
    StringFormat, TextMeasurer, TextMetrics,
};
