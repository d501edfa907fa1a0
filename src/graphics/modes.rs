//! Rendering mode properties. The context stores them and hands them to its
//! collaborators; it never interprets them itself.

/// Largest accepted text contrast value.
pub const MAX_TEXT_CONTRAST: u32 = 12;

const DEFAULT_TEXT_CONTRAST: u32 = 4;

/// How drawn pixels combine with the pixels already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositingMode {
    #[default]
    SourceOver,
    SourceCopy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositingQuality {
    #[default]
    Default,
    HighSpeed,
    HighQuality,
    GammaCorrected,
    AssumeLinear,
}

/// Filter used when images are scaled or rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    Default,
    Low,
    High,
    #[default]
    Bilinear,
    Bicubic,
    NearestNeighbor,
    HighQualityBilinear,
    HighQualityBicubic,
}

/// Antialiasing of lines, curves and filled edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmoothingMode {
    Default,
    HighSpeed,
    HighQuality,
    #[default]
    None,
    AntiAlias,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelOffsetMode {
    #[default]
    Default,
    HighSpeed,
    HighQuality,
    None,
    /// Pixels are offset by half a unit.
    Half,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextRenderingHint {
    #[default]
    SystemDefault,
    SingleBitPerPixelGridFit,
    SingleBitPerPixel,
    AntiAliasGridFit,
    AntiAlias,
    ClearTypeGridFit,
}

/// Every mode property of a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderingModes {
    pub compositing_mode: CompositingMode,
    pub compositing_quality: CompositingQuality,
    pub interpolation_mode: InterpolationMode,
    pub smoothing_mode: SmoothingMode,
    pub pixel_offset_mode: PixelOffsetMode,
    pub text_rendering_hint: TextRenderingHint,
    pub text_contrast: u32,
    /// Origin for dither and hatch patterns, in device pixels.
    pub rendering_origin: (i32, i32),
}

impl Default for RenderingModes {
    fn default() -> Self {
        Self {
            compositing_mode: CompositingMode::default(),
            compositing_quality: CompositingQuality::default(),
            interpolation_mode: InterpolationMode::default(),
            smoothing_mode: SmoothingMode::default(),
            pixel_offset_mode: PixelOffsetMode::default(),
            text_rendering_hint: TextRenderingHint::default(),
            text_contrast: DEFAULT_TEXT_CONTRAST,
            rendering_origin: (0, 0),
        }
    }
}

impl RenderingModes {
    /// Defaults for a new container: everything resets except the rendering
    /// origin.
    pub(crate) fn for_container(&self) -> Self {
        Self {
            rendering_origin: self.rendering_origin,
            ..Self::default()
        }
    }
}
