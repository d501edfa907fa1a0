//! 2×3 affine matrices in the row-vector convention used by GDI+.
//!
//! A point is transformed as `[x' y'] = [x y] · [m11 m12; m21 m22] + [dx dy]`.
//! The storage is a euclid `Transform2D`, whose `m31`/`m32` fields are the
//! translation row and whose `then` composes in the same left-to-right order.

use euclid::default::{Transform2D, Vector2D};
use euclid::Angle;

use crate::error::{GraphicsError, Result};
use crate::geometry::{PointF, RectF};

pub(crate) type RawTransform = Transform2D<f32>;

/// Which side of the existing matrix a new operation is multiplied on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixOrder {
    /// `result = operation · existing`: the operation applies to points first.
    #[default]
    Prepend,
    /// `result = existing · operation`: the operation applies to points last.
    Append,
}

/// A 2D affine transform.
///
/// ```
/// use clipframe::{Matrix2D, MatrixOrder};
///
/// let mut prepend = Matrix2D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
/// prepend.translate(3.0, -3.0, MatrixOrder::Prepend);
/// assert_eq!(prepend.elements(), [1.0, 2.0, 3.0, 4.0, -1.0, 0.0]);
///
/// let mut append = Matrix2D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
/// append.translate(3.0, -3.0, MatrixOrder::Append);
/// assert_eq!(append.elements(), [1.0, 2.0, 3.0, 4.0, 8.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2D {
    raw: RawTransform,
}

impl Default for Matrix2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix2D {
    pub fn new(m11: f32, m12: f32, m21: f32, m22: f32, dx: f32, dy: f32) -> Self {
        Self {
            raw: RawTransform::new(m11, m12, m21, m22, dx, dy),
        }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub fn from_elements(elements: [f32; 6]) -> Self {
        let [m11, m12, m21, m22, dx, dy] = elements;
        Self::new(m11, m12, m21, m22, dx, dy)
    }

    pub fn translation(dx: f32, dy: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, dx, dy)
    }

    pub fn scaling(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Clockwise rotation (in a y-down coordinate system) by `angle_degrees`.
    pub fn rotation(angle_degrees: f32) -> Self {
        let (sin, cos) = Angle::degrees(angle_degrees).get().sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    pub fn shearing(shear_x: f32, shear_y: f32) -> Self {
        Self::new(1.0, shear_y, shear_x, 1.0, 0.0, 0.0)
    }

    pub(crate) fn from_raw(raw: RawTransform) -> Self {
        Self { raw }
    }

    /// The six coefficients as `[m11, m12, m21, m22, dx, dy]`.
    pub fn elements(&self) -> [f32; 6] {
        let m = &self.raw;
        [m.m11, m.m12, m.m21, m.m22, m.m31, m.m32]
    }

    pub fn offset_x(&self) -> f32 {
        self.raw.m31
    }

    pub fn offset_y(&self) -> f32 {
        self.raw.m32
    }

    pub fn determinant(&self) -> f32 {
        self.raw.determinant()
    }

    pub fn is_identity(&self) -> bool {
        self.elements() == [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]
    }

    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det != 0.0 && det.is_finite()
    }

    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Returns `other` combined with `self` in the given order, leaving `self`
    /// untouched.
    pub fn compose(&self, other: &Matrix2D, order: MatrixOrder) -> Matrix2D {
        let raw = match order {
            MatrixOrder::Prepend => other.raw.then(&self.raw),
            MatrixOrder::Append => self.raw.then(&other.raw),
        };
        Matrix2D::from_raw(raw)
    }

    pub fn multiply(&mut self, other: &Matrix2D, order: MatrixOrder) {
        *self = self.compose(other, order);
    }

    pub fn translate(&mut self, dx: f32, dy: f32, order: MatrixOrder) {
        self.multiply(&Matrix2D::translation(dx, dy), order);
    }

    pub fn scale(&mut self, sx: f32, sy: f32, order: MatrixOrder) {
        self.multiply(&Matrix2D::scaling(sx, sy), order);
    }

    pub fn rotate(&mut self, angle_degrees: f32, order: MatrixOrder) {
        self.multiply(&Matrix2D::rotation(angle_degrees), order);
    }

    /// Rotates around `center` instead of the origin.
    pub fn rotate_at(&mut self, angle_degrees: f32, center: PointF, order: MatrixOrder) {
        let around = Matrix2D::translation(-center.x, -center.y)
            .compose(&Matrix2D::rotation(angle_degrees), MatrixOrder::Append)
            .compose(&Matrix2D::translation(center.x, center.y), MatrixOrder::Append);
        self.multiply(&around, order);
    }

    pub fn shear(&mut self, shear_x: f32, shear_y: f32, order: MatrixOrder) {
        self.multiply(&Matrix2D::shearing(shear_x, shear_y), order);
    }

    /// The inverse transform, or `DegenerateMatrix` when the determinant is zero.
    pub fn inverse(&self) -> Result<Matrix2D> {
        if !self.is_invertible() {
            return Err(GraphicsError::DegenerateMatrix);
        }
        self.raw
            .inverse()
            .map(Matrix2D::from_raw)
            .ok_or(GraphicsError::DegenerateMatrix)
    }

    /// Inverts in place. On failure the matrix is left unchanged.
    pub fn invert(&mut self) -> Result<()> {
        *self = self.inverse()?;
        Ok(())
    }

    pub fn transform_point(&self, point: PointF) -> PointF {
        if self.is_identity() {
            return point;
        }
        PointF::from_euclid(self.raw.transform_point(point.to_euclid()))
    }

    pub fn transform_points(&self, points: &mut [PointF]) {
        if self.is_identity() {
            return;
        }
        for point in points.iter_mut() {
            *point = self.transform_point(*point);
        }
    }

    /// Like [`Matrix2D::transform_points`] but ignores the translation row.
    pub fn transform_vectors(&self, vectors: &mut [PointF]) {
        for vector in vectors.iter_mut() {
            let v = self.raw.transform_vector(Vector2D::new(vector.x, vector.y));
            *vector = PointF::new(v.x, v.y);
        }
    }

    /// Bounding box of the four transformed corners of `rect`.
    pub fn transform_rect_bounds(&self, rect: &RectF) -> RectF {
        if self.is_identity() {
            return *rect;
        }
        let mut corners = rect.corners();
        self.transform_points(&mut corners);
        RectF::enclosing(&corners)
    }

    /// True when axis-aligned rectangles stay axis-aligned under this matrix,
    /// i.e. the linear part is a scale, possibly combined with a quarter turn.
    pub fn preserves_axes(&self) -> bool {
        let [m11, m12, m21, m22, _, _] = self.elements();
        let eps = 1e-6;
        (m12.abs() <= eps && m21.abs() <= eps) || (m11.abs() <= eps && m22.abs() <= eps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: [f32; 6], expected: [f32; 6]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-3, "got {actual:?}, expected {expected:?}");
        }
    }

    #[test]
    fn translate_order_matches_row_vector_convention() {
        let base = Matrix2D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);

        let mut prepend = base;
        prepend.translate(3.0, -3.0, MatrixOrder::Prepend);
        assert_eq!(prepend.elements(), [1.0, 2.0, 3.0, 4.0, -1.0, 0.0]);

        let mut append = base;
        append.translate(3.0, -3.0, MatrixOrder::Append);
        assert_eq!(append.elements(), [1.0, 2.0, 3.0, 4.0, 8.0, 3.0]);

        let mut default_order = base;
        default_order.translate(3.0, -3.0, MatrixOrder::default());
        assert_eq!(default_order, prepend);
    }

    #[test]
    fn degenerate_matrix_cannot_be_inverted() {
        let mut matrix = Matrix2D::new(123.0, 24.0, 82.0, 16.0, 47.0, 30.0);
        assert!(!matrix.is_invertible());
        assert_eq!(matrix.invert(), Err(GraphicsError::DegenerateMatrix));
        assert_eq!(matrix.elements(), [123.0, 24.0, 82.0, 16.0, 47.0, 30.0]);
    }

    #[test]
    fn inverse_undoes_transform() {
        let matrix = Matrix2D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let inverse = matrix.inverse().unwrap();
        let point = inverse.transform_point(matrix.transform_point(PointF::new(7.0, -2.0)));
        assert!((point.x - 7.0).abs() < 1e-4);
        assert!((point.y + 2.0).abs() < 1e-4);
        assert_close(
            matrix.compose(&inverse, MatrixOrder::Append).elements(),
            Matrix2D::identity().elements(),
        );
    }

    #[test]
    fn rotation_by_45_degrees() {
        let mut matrix = Matrix2D::identity();
        matrix.rotate(45.0, MatrixOrder::Prepend);
        assert_close(matrix.elements(), [0.707, 0.707, -0.707, 0.707, 0.0, 0.0]);
    }

    #[test]
    fn quarter_turn_maps_x_axis_to_y_axis() {
        let point = Matrix2D::rotation(90.0).transform_point(PointF::new(1.0, 0.0));
        assert!(point.x.abs() < 1e-6);
        assert!((point.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotate_at_keeps_center_fixed() {
        let mut matrix = Matrix2D::identity();
        let center = PointF::new(10.0, 5.0);
        matrix.rotate_at(30.0, center, MatrixOrder::Prepend);
        let mapped = matrix.transform_point(center);
        assert!((mapped.x - 10.0).abs() < 1e-4);
        assert!((mapped.y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn vectors_ignore_translation() {
        let matrix = Matrix2D::new(2.0, 0.0, 0.0, 3.0, 100.0, 100.0);
        let mut vectors = [PointF::new(1.0, 1.0)];
        matrix.transform_vectors(&mut vectors);
        assert_eq!(vectors[0], PointF::new(2.0, 3.0));
    }

    #[test]
    fn identity_is_a_no_op() {
        let mut points = [PointF::new(1.25, -3.5), PointF::new(1e6, 0.0)];
        let original = points;
        Matrix2D::identity().transform_points(&mut points);
        assert_eq!(points, original);
    }

    #[test]
    fn quarter_turn_preserves_axes() {
        assert!(Matrix2D::rotation(90.0).preserves_axes());
        assert!(Matrix2D::scaling(0.25, 0.5).preserves_axes());
        assert!(!Matrix2D::rotation(45.0).preserves_axes());
    }
}
