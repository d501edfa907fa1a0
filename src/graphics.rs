use std::sync::Arc;

use tracing::{debug, warn};

use crate::coordinate_space::{CoordinateSpace, CoordinateSpaceStack, GraphicsUnit};
use crate::error::{GraphicsError, Result};
use crate::geometry::{PointF, RectF, SizeF};
use crate::matrix::{Matrix2D, MatrixOrder};
use crate::region::{CombineMode, Region};
use crate::surface::{
    FontSpec, PixelSurface, RenderTarget, StringFormat, TextMeasurer, TextMetrics,
};
use crate::{Color, Pen};

mod clip;
mod drawing;
mod modes;
mod state;
mod transform;

pub use modes::{
    CompositingMode, CompositingQuality, InterpolationMode, PixelOffsetMode, RenderingModes,
    SmoothingMode, TextRenderingHint, MAX_TEXT_CONTRAST,
};
pub use state::{GraphicsContainer, GraphicsState};

/// Default resolution of a context in dots per inch.
pub const DEFAULT_DPI: f32 = 96.0;

/// Construction parameters of a [`GraphicsContext`].
///
/// ```
/// use clipframe::{ContextConfig, GraphicsContext};
///
/// let context = GraphicsContext::new(ContextConfig::new(640, 480).with_dpi(120.0, 120.0));
/// assert_eq!(context.dpi(), (120.0, 120.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextConfig {
    pub width: u32,
    pub height: u32,
    pub dpi_x: f32,
    pub dpi_y: f32,
}

impl ContextConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            dpi_x: DEFAULT_DPI,
            dpi_y: DEFAULT_DPI,
        }
    }

    /// Sizes the context after an existing raster.
    pub fn for_surface(surface: &dyn PixelSurface) -> Self {
        Self::new(surface.width(), surface.height())
    }

    pub fn with_dpi(mut self, dpi_x: f32, dpi_y: f32) -> Self {
        self.dpi_x = dpi_x;
        self.dpi_y = dpi_y;
        self
    }

    /// The surface rectangle in device pixels.
    pub fn device_bounds(&self) -> RectF {
        RectF::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}

/// Identity of a context, shared with the tokens it hands out.
#[derive(Debug)]
pub(crate) struct ContextKey;

/// Drawing state for one surface: transforms, clipping and rendering modes.
///
/// Geometry passed in is in world space. The clip is kept in device space so
/// that later transform changes move the reported clip bounds rather than the
/// clipped pixels.
#[derive(Debug)]
pub struct GraphicsContext {
    key: Arc<ContextKey>,
    config: ContextConfig,
    space: CoordinateSpaceStack,
    /// Clip in device space.
    clip: Region,
    /// Clip inherited from enclosing containers, in device space. Infinite
    /// outside any container.
    container_clip: Region,
    modes: RenderingModes,
}

impl GraphicsContext {
    pub fn new(config: ContextConfig) -> Self {
        debug!(
            width = config.width,
            height = config.height,
            dpi_x = config.dpi_x,
            dpi_y = config.dpi_y,
            "creating graphics context"
        );
        Self {
            key: Arc::new(ContextKey),
            config,
            space: CoordinateSpaceStack::new(config.dpi_x, config.dpi_y),
            clip: Region::new(),
            container_clip: Region::new(),
            modes: RenderingModes::default(),
        }
    }

    pub fn config(&self) -> &ContextConfig {
        &self.config
    }

    pub fn dpi(&self) -> (f32, f32) {
        self.space.dpi()
    }

    pub fn coordinate_space(&self) -> &CoordinateSpaceStack {
        &self.space
    }

    pub fn modes(&self) -> &RenderingModes {
        &self.modes
    }

    pub fn page_unit(&self) -> GraphicsUnit {
        self.space.page_unit()
    }

    /// Fails for [`GraphicsUnit::World`].
    pub fn set_page_unit(&mut self, unit: GraphicsUnit) -> Result<()> {
        self.space.set_page_unit(unit)
    }

    pub fn page_scale(&self) -> f32 {
        self.space.page_scale()
    }

    /// Fails unless `scale` is positive and finite.
    pub fn set_page_scale(&mut self, scale: f32) -> Result<()> {
        self.space.set_page_scale(scale)
    }

    pub fn compositing_mode(&self) -> CompositingMode {
        self.modes.compositing_mode
    }

    pub fn set_compositing_mode(&mut self, mode: CompositingMode) {
        self.modes.compositing_mode = mode;
    }

    pub fn compositing_quality(&self) -> CompositingQuality {
        self.modes.compositing_quality
    }

    pub fn set_compositing_quality(&mut self, quality: CompositingQuality) {
        self.modes.compositing_quality = quality;
    }

    pub fn interpolation_mode(&self) -> InterpolationMode {
        self.modes.interpolation_mode
    }

    pub fn set_interpolation_mode(&mut self, mode: InterpolationMode) {
        self.modes.interpolation_mode = mode;
    }

    pub fn smoothing_mode(&self) -> SmoothingMode {
        self.modes.smoothing_mode
    }

    pub fn set_smoothing_mode(&mut self, mode: SmoothingMode) {
        self.modes.smoothing_mode = mode;
    }

    pub fn pixel_offset_mode(&self) -> PixelOffsetMode {
        self.modes.pixel_offset_mode
    }

    pub fn set_pixel_offset_mode(&mut self, mode: PixelOffsetMode) {
        self.modes.pixel_offset_mode = mode;
    }

    pub fn text_rendering_hint(&self) -> TextRenderingHint {
        self.modes.text_rendering_hint
    }

    pub fn set_text_rendering_hint(&mut self, hint: TextRenderingHint) {
        self.modes.text_rendering_hint = hint;
    }

    pub fn text_contrast(&self) -> u32 {
        self.modes.text_contrast
    }

    /// Gamma correction for antialiased text, `0..=12`.
    pub fn set_text_contrast(&mut self, contrast: u32) -> Result<()> {
        if contrast > MAX_TEXT_CONTRAST {
            return Err(GraphicsError::invalid(
                "contrast",
                format!("text contrast must be at most {MAX_TEXT_CONTRAST}, got {contrast}"),
            ));
        }
        self.modes.text_contrast = contrast;
        Ok(())
    }

    pub fn rendering_origin(&self) -> (i32, i32) {
        self.modes.rendering_origin
    }

    pub fn set_rendering_origin(&mut self, origin: (i32, i32)) {
        self.modes.rendering_origin = origin;
    }

    /// Converts `points` in place between coordinate spaces.
    pub fn transform_points(
        &self,
        destination: CoordinateSpace,
        source: CoordinateSpace,
        points: &mut [PointF],
    ) -> Result<()> {
        self.space.transform_points(destination, source, points)
    }

    /// Clip, container clip and surface bounds intersected, in device space.
    fn visible_device_region(&self) -> Region {
        let mut visible = Region::from_rect(self.config.device_bounds());
        visible.intersect(&self.container_clip);
        visible.intersect(&self.clip);
        visible
    }

    fn owns(&self, key: &Arc<ContextKey>) -> bool {
        Arc::ptr_eq(&self.key, key)
    }
}
