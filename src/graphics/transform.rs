use super::*;

impl GraphicsContext {
    /// A copy of the world transform. Mutating it does not affect the context.
    pub fn transform(&self) -> Matrix2D {
        *self.space.world()
    }

    /// Replaces the world transform. Non-invertible matrices are rejected and
    /// the current transform is kept.
    pub fn set_transform(&mut self, matrix: &Matrix2D) -> Result<()> {
        ensure_invertible(matrix)?;
        self.space.set_world(*matrix);
        Ok(())
    }

    pub fn reset_transform(&mut self) {
        self.space.set_world(Matrix2D::identity());
    }

    pub fn translate_transform(&mut self, dx: f32, dy: f32) {
        self.translate_transform_ordered(dx, dy, MatrixOrder::Prepend);
    }

    pub fn translate_transform_ordered(&mut self, dx: f32, dy: f32, order: MatrixOrder) {
        let mut world = *self.space.world();
        world.translate(dx, dy, order);
        self.space.set_world(world);
    }

    /// Fails when either factor is zero.
    pub fn scale_transform(&mut self, sx: f32, sy: f32) -> Result<()> {
        self.scale_transform_ordered(sx, sy, MatrixOrder::Prepend)
    }

    pub fn scale_transform_ordered(&mut self, sx: f32, sy: f32, order: MatrixOrder) -> Result<()> {
        let mut world = *self.space.world();
        world.scale(sx, sy, order);
        if !world.is_invertible() {
            warn!(sx, sy, "rejecting scale that makes the world transform singular");
            return Err(GraphicsError::invalid(
                "scale",
                format!("scale ({sx}, {sy}) makes the transform non-invertible"),
            ));
        }
        self.space.set_world(world);
        Ok(())
    }

    pub fn rotate_transform(&mut self, angle_degrees: f32) {
        self.rotate_transform_ordered(angle_degrees, MatrixOrder::Prepend);
    }

    pub fn rotate_transform_ordered(&mut self, angle_degrees: f32, order: MatrixOrder) {
        let mut world = *self.space.world();
        world.rotate(angle_degrees, order);
        self.space.set_world(world);
    }

    pub fn multiply_transform(&mut self, matrix: &Matrix2D) -> Result<()> {
        self.multiply_transform_ordered(matrix, MatrixOrder::Prepend)
    }

    /// Composes `matrix` with the world transform. Non-invertible matrices are
    /// rejected and the current transform is kept.
    pub fn multiply_transform_ordered(
        &mut self,
        matrix: &Matrix2D,
        order: MatrixOrder,
    ) -> Result<()> {
        ensure_invertible(matrix)?;
        let world = self.space.world().compose(matrix, order);
        self.space.set_world(world);
        Ok(())
    }
}

fn ensure_invertible(matrix: &Matrix2D) -> Result<()> {
    if matrix.is_invertible() {
        return Ok(());
    }
    warn!(elements = ?matrix.elements(), "rejecting non-invertible transform");
    Err(GraphicsError::invalid(
        "matrix",
        "transform must be invertible",
    ))
}
