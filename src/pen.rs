use crate::Color;

/// Outline style for lines, polygons and curves.
///
/// The width is in world units and is scaled by the world transform like any
/// other geometry. A width of zero still strokes a one-pixel hairline.
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Pen {
    pub width: f32,
    pub color: Color,
}

impl Pen {
    pub fn new(width: f32, color: impl Into<Color>) -> Self {
        Self {
            width,
            color: color.into(),
        }
    }

    /// A zero-width pen.
    pub fn hairline(color: impl Into<Color>) -> Self {
        Self::new(0.0, color)
    }

    /// Whether strokes made with this pen leave no mark.
    pub fn is_invisible(&self) -> bool {
        self.color.is_transparent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hairline_pens_are_visible() {
        assert!(!Pen::hairline(Color::BLACK).is_invisible());
        assert!(Pen::new(3.0, Color::TRANSPARENT).is_invisible());
    }
}
