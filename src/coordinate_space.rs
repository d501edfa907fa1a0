//! World, page and device coordinate systems and the transforms between them.
//!
//! Points given by callers live in world space. The world transform maps them
//! into the container's frame, the container base transform (identity outside
//! any container) maps that frame into page space, and the page unit and scale
//! map page space onto device pixels:
//!
//! ```text
//! world --(world · container_base)--> page --(unit · scale)--> device
//! ```
//!
//! The clip region is stored in device space. Bounds queries re-project it
//! through the inverse of the current world→device transform, so changing the
//! transform changes the reported bounds without touching the stored region.

use crate::error::{GraphicsError, Result};
use crate::geometry::{PointF, RectF};
use crate::matrix::{Matrix2D, MatrixOrder};
use crate::region::{Region, INFINITE_BOUNDS};

/// A coordinate system a set of points can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateSpace {
    World,
    Page,
    Device,
}

/// Units for page coordinates and container source rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphicsUnit {
    /// World units; not a valid page or container unit.
    World,
    /// The display unit of the surface, one device pixel for raster targets.
    #[default]
    Display,
    Pixel,
    /// 1/72 inch.
    Point,
    Inch,
    /// 1/300 inch.
    Document,
    Millimeter,
}

impl GraphicsUnit {
    /// Device pixels per unit at the given resolution, or `None` for `World`.
    pub fn pixels_per_unit(self, dpi: f32) -> Option<f32> {
        match self {
            GraphicsUnit::World => None,
            GraphicsUnit::Display | GraphicsUnit::Pixel => Some(1.0),
            GraphicsUnit::Point => Some(dpi / 72.0),
            GraphicsUnit::Inch => Some(dpi),
            GraphicsUnit::Document => Some(dpi / 300.0),
            GraphicsUnit::Millimeter => Some(dpi / 25.4),
        }
    }
}

/// The transform chain of a graphics context.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSpaceStack {
    world: Matrix2D,
    container_base: Matrix2D,
    page_unit: GraphicsUnit,
    page_scale: f32,
    dpi: (f32, f32),
}

impl CoordinateSpaceStack {
    pub fn new(dpi_x: f32, dpi_y: f32) -> Self {
        Self {
            world: Matrix2D::identity(),
            container_base: Matrix2D::identity(),
            page_unit: GraphicsUnit::Display,
            page_scale: 1.0,
            dpi: (dpi_x, dpi_y),
        }
    }

    pub fn world(&self) -> &Matrix2D {
        &self.world
    }

    /// Replaces the world transform. Callers are expected to have checked
    /// invertibility.
    pub(crate) fn set_world(&mut self, world: Matrix2D) {
        self.world = world;
    }

    pub fn container_base(&self) -> &Matrix2D {
        &self.container_base
    }

    pub fn page_unit(&self) -> GraphicsUnit {
        self.page_unit
    }

    pub fn page_scale(&self) -> f32 {
        self.page_scale
    }

    pub fn dpi(&self) -> (f32, f32) {
        self.dpi
    }

    pub fn set_page_unit(&mut self, unit: GraphicsUnit) -> Result<()> {
        if unit == GraphicsUnit::World {
            return Err(GraphicsError::invalid(
                "unit",
                "World is not a valid page unit",
            ));
        }
        self.page_unit = unit;
        Ok(())
    }

    pub fn set_page_scale(&mut self, scale: f32) -> Result<()> {
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(GraphicsError::invalid(
                "scale",
                format!("page scale must be positive and finite, got {scale}"),
            ));
        }
        self.page_scale = scale;
        Ok(())
    }

    /// Opens a nested coordinate system: `container` is applied to points
    /// before everything currently in effect, and the world transform and page
    /// settings go back to their defaults.
    pub(crate) fn enter_container(&mut self, container: &Matrix2D) {
        let outer = self.world_to_page();
        self.container_base = container.compose(&outer, MatrixOrder::Append);
        self.world = Matrix2D::identity();
        self.page_unit = GraphicsUnit::Display;
        self.page_scale = 1.0;
    }

    pub fn world_to_page(&self) -> Matrix2D {
        self.world.compose(&self.container_base, MatrixOrder::Append)
    }

    pub fn page_to_device(&self) -> Matrix2D {
        // Display units ignore the page scale.
        let scale = match self.page_unit {
            GraphicsUnit::Display => 1.0,
            _ => self.page_scale,
        };
        let sx = self.page_unit.pixels_per_unit(self.dpi.0).unwrap_or(1.0) * scale;
        let sy = self.page_unit.pixels_per_unit(self.dpi.1).unwrap_or(1.0) * scale;
        Matrix2D::scaling(sx, sy)
    }

    pub fn world_to_device(&self) -> Matrix2D {
        self.world_to_page()
            .compose(&self.page_to_device(), MatrixOrder::Append)
    }

    pub fn device_to_world(&self) -> Result<Matrix2D> {
        self.world_to_device().inverse()
    }

    /// The matrix taking points from `source` space to `destination` space.
    pub fn conversion(
        &self,
        destination: CoordinateSpace,
        source: CoordinateSpace,
    ) -> Result<Matrix2D> {
        use CoordinateSpace::{Device, Page, World};
        match (source, destination) {
            (World, World) | (Page, Page) | (Device, Device) => Ok(Matrix2D::identity()),
            (World, Page) => Ok(self.world_to_page()),
            (World, Device) => Ok(self.world_to_device()),
            (Page, Device) => Ok(self.page_to_device()),
            (Page, World) => self.world_to_page().inverse(),
            (Device, World) => self.device_to_world(),
            (Device, Page) => self.page_to_device().inverse(),
        }
    }

    /// Converts `points` in place from `source` to `destination` space.
    pub fn transform_points(
        &self,
        destination: CoordinateSpace,
        source: CoordinateSpace,
        points: &mut [PointF],
    ) -> Result<()> {
        if points.is_empty() {
            return Err(GraphicsError::invalid("points", "at least one point is required"));
        }
        if destination == source {
            return Ok(());
        }
        self.conversion(destination, source)?
            .transform_points(points);
        Ok(())
    }

    /// Expresses a world-space region in device space.
    pub fn region_to_device(&self, region: &Region) -> Region {
        let mut device = region.clone();
        device.transform(&self.world_to_device());
        device
    }

    /// Expresses a device-space region in the current world space.
    pub fn region_from_device(&self, region: &Region) -> Result<Region> {
        if region.is_infinite() {
            return Ok(region.clone());
        }
        let inverse = self.device_to_world()?;
        let mut world = region.clone();
        world.transform(&inverse);
        Ok(world)
    }

    pub fn rect_to_device(&self, rect: &RectF) -> RectF {
        self.world_to_device().transform_rect_bounds(rect)
    }

    /// Bounds of a device-space clip in the current world space: every stored
    /// rectangle corner goes through the inverse transform and the enclosing box
    /// of the results is returned.
    pub fn clip_bounds_in_current_space(&self, device_clip: &Region) -> Result<RectF> {
        if device_clip.is_infinite() {
            return Ok(INFINITE_BOUNDS);
        }
        if device_clip.is_empty() {
            return Ok(RectF::default());
        }
        let inverse = self.device_to_world()?;
        let corners: Vec<PointF> = device_clip
            .rects()
            .iter()
            .flat_map(|rect| rect.corners())
            .map(|corner| inverse.transform_point(corner))
            .collect();
        Ok(RectF::enclosing(&corners))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_close(actual: RectF, expected: RectF) -> bool {
        (actual.x - expected.x).abs() <= 1.0
            && (actual.y - expected.y).abs() <= 1.0
            && (actual.width - expected.width).abs() <= 1.0
            && (actual.height - expected.height).abs() <= 1.0
    }

    fn with_world(world: Matrix2D) -> CoordinateSpaceStack {
        let mut stack = CoordinateSpaceStack::new(96.0, 96.0);
        stack.set_world(world);
        stack
    }

    #[test]
    fn points_between_spaces_with_display_unit() {
        let mut stack = with_world(Matrix2D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
        stack.set_page_scale(10.0).unwrap();

        let mut points = [PointF::new(1.0, 1.0), PointF::new(2.0, 2.0)];
        stack
            .transform_points(CoordinateSpace::Device, CoordinateSpace::World, &mut points)
            .unwrap();
        assert_eq!(points, [PointF::new(9.0, 12.0), PointF::new(13.0, 18.0)]);

        let mut points = [PointF::new(1.0, 1.0), PointF::new(2.0, 2.0)];
        stack
            .transform_points(CoordinateSpace::World, CoordinateSpace::Device, &mut points)
            .unwrap();
        assert!((points[0].x - 0.5).abs() < 1e-5 && (points[0].y + 1.5).abs() < 1e-5);
        assert!(points[1].x.abs() < 1e-5 && (points[1].y + 1.0).abs() < 1e-5);

        let mut points = [PointF::new(1.0, 1.0)];
        stack
            .transform_points(CoordinateSpace::Device, CoordinateSpace::Page, &mut points)
            .unwrap();
        assert_eq!(points, [PointF::new(1.0, 1.0)]);
    }

    #[test]
    fn empty_point_list_is_rejected() {
        let stack = CoordinateSpaceStack::new(96.0, 96.0);
        assert_eq!(
            stack.transform_points(CoordinateSpace::Page, CoordinateSpace::Page, &mut []),
            Err(GraphicsError::invalid("points", "at least one point is required"))
        );
    }

    #[test]
    fn inch_page_unit_scales_by_dpi() {
        let mut stack = CoordinateSpaceStack::new(96.0, 72.0);
        stack.set_page_unit(GraphicsUnit::Inch).unwrap();
        stack.set_page_scale(2.0).unwrap();
        let device = stack.world_to_device().transform_point(PointF::new(1.0, 1.0));
        assert_eq!(device, PointF::new(192.0, 144.0));
    }

    #[test]
    fn invalid_page_settings_are_rejected() {
        let mut stack = CoordinateSpaceStack::new(96.0, 96.0);
        assert!(stack.set_page_unit(GraphicsUnit::World).is_err());
        assert!(stack.set_page_scale(0.0).is_err());
        assert!(stack.set_page_scale(f32::NAN).is_err());
        assert_eq!(stack.page_unit(), GraphicsUnit::Display);
        assert_eq!(stack.page_scale(), 1.0);
    }

    #[test]
    fn clip_bounds_use_the_inverse_transform() {
        let clip = Region::from_rect(RectF::new(0.0, 0.0, 8.0, 8.0));

        let rotated = with_world(Matrix2D::rotation(90.0));
        assert!(rect_close(
            rotated.clip_bounds_in_current_space(&clip).unwrap(),
            RectF::new(0.0, -8.0, 8.0, 8.0)
        ));

        let scaled = with_world(Matrix2D::scaling(0.25, 0.5));
        assert!(rect_close(
            scaled.clip_bounds_in_current_space(&clip).unwrap(),
            RectF::new(0.0, 0.0, 32.0, 16.0)
        ));

        let translated = with_world(Matrix2D::translation(8.0, 8.0));
        assert!(rect_close(
            translated.clip_bounds_in_current_space(&clip).unwrap(),
            RectF::new(-8.0, -8.0, 8.0, 8.0)
        ));
    }

    #[test]
    fn infinite_clip_reports_sentinel_in_any_space() {
        let stack = with_world(Matrix2D::scaling(0.5, 0.25));
        assert_eq!(
            stack.clip_bounds_in_current_space(&Region::new()).unwrap(),
            INFINITE_BOUNDS
        );
    }

    #[test]
    fn degenerate_world_fails_projection() {
        let stack = with_world(Matrix2D::new(123.0, 24.0, 82.0, 16.0, 47.0, 30.0));
        let clip = Region::from_rect(RectF::new(0.0, 0.0, 8.0, 8.0));
        assert_eq!(
            stack.clip_bounds_in_current_space(&clip),
            Err(GraphicsError::DegenerateMatrix)
        );
    }

    #[test]
    fn container_folds_outer_transform_into_base() {
        let mut stack = with_world(Matrix2D::translation(10.0, 0.0));
        stack.enter_container(&Matrix2D::scaling(2.0, 2.0));
        assert!(stack.world().is_identity());
        let device = stack.world_to_device().transform_point(PointF::new(1.0, 1.0));
        assert_eq!(device, PointF::new(12.0, 2.0));
    }
}
