use super::*;

/// Everything a token restores.
#[derive(Debug, Clone)]
pub(super) struct Snapshot {
    space: CoordinateSpaceStack,
    clip: Region,
    container_clip: Region,
    modes: RenderingModes,
}

/// A saved graphics state, produced by [`GraphicsContext::save`].
///
/// Tokens are immutable snapshots of their own. Any token can be restored at
/// any time, in any order, as many times as needed.
#[derive(Debug, Clone)]
pub struct GraphicsState {
    owner: Arc<ContextKey>,
    snapshot: Arc<Snapshot>,
}

/// The state saved when a container was opened, produced by
/// [`GraphicsContext::begin_container`].
#[derive(Debug, Clone)]
pub struct GraphicsContainer {
    state: GraphicsState,
}

impl GraphicsContext {
    fn snapshot(&self) -> GraphicsState {
        GraphicsState {
            owner: Arc::clone(&self.key),
            snapshot: Arc::new(Snapshot {
                space: self.space.clone(),
                clip: self.clip.clone(),
                container_clip: self.container_clip.clone(),
                modes: self.modes,
            }),
        }
    }

    pub fn save(&self) -> GraphicsState {
        debug!(
            transform = ?self.space.world().elements(),
            infinite_clip = self.clip.is_infinite(),
            "saving graphics state"
        );
        self.snapshot()
    }

    /// Reinstates every property captured by `state`.
    pub fn restore(&mut self, state: &GraphicsState) -> Result<()> {
        if !self.owns(&state.owner) {
            return Err(GraphicsError::invalid(
                "state",
                "state was saved by a different graphics context",
            ));
        }
        let snapshot = &state.snapshot;
        self.space = snapshot.space.clone();
        self.clip = snapshot.clip.clone();
        self.container_clip = snapshot.container_clip.clone();
        self.modes = snapshot.modes;
        debug!(
            transform = ?self.space.world().elements(),
            infinite_clip = self.clip.is_infinite(),
            "restored graphics state"
        );
        Ok(())
    }

    /// Opens a container with the current coordinate system.
    pub fn begin_container(&mut self) -> GraphicsContainer {
        self.open_container(&Matrix2D::identity())
    }

    /// Opens a container mapping `src`, measured in `unit`, onto `dst` in the
    /// current world space.
    pub fn begin_container_with(
        &mut self,
        dst: RectF,
        src: RectF,
        unit: GraphicsUnit,
    ) -> Result<GraphicsContainer> {
        let (dpi_x, dpi_y) = self.space.dpi();
        let scales = match unit {
            GraphicsUnit::Display => None,
            _ => unit.pixels_per_unit(dpi_x).zip(unit.pixels_per_unit(dpi_y)),
        };
        let Some((unit_x, unit_y)) = scales else {
            return Err(GraphicsError::invalid(
                "unit",
                format!("{unit:?} is not a valid container unit"),
            ));
        };
        if src.width == 0.0 || src.height == 0.0 {
            return Err(GraphicsError::invalid(
                "src",
                "source rectangle must have a non-zero size",
            ));
        }
        if dst.width == 0.0 || dst.height == 0.0 {
            return Err(GraphicsError::invalid(
                "dst",
                "destination rectangle must have a non-zero size",
            ));
        }
        // Inner world coordinates are pixels, so the source is measured in pixels too.
        let src = RectF::new(
            src.x * unit_x,
            src.y * unit_y,
            src.width * unit_x,
            src.height * unit_y,
        );
        let mapping = Matrix2D::translation(-src.x, -src.y)
            .compose(
                &Matrix2D::scaling(dst.width / src.width, dst.height / src.height),
                MatrixOrder::Append,
            )
            .compose(&Matrix2D::translation(dst.x, dst.y), MatrixOrder::Append);
        Ok(self.open_container(&mapping))
    }

    /// Closes a container, restoring the state from when it was opened.
    pub fn end_container(&mut self, container: &GraphicsContainer) -> Result<()> {
        debug!("ending container");
        self.restore(&container.state)
    }

    fn open_container(&mut self, mapping: &Matrix2D) -> GraphicsContainer {
        let state = self.snapshot();
        let mut outer_clip = self.clip.clone();
        outer_clip.intersect(&self.container_clip);

        self.space.enter_container(mapping);
        self.container_clip = outer_clip;
        self.clip = Region::new();
        self.modes = self.modes.for_container();
        debug!(
            base = ?self.space.container_base().elements(),
            infinite_container_clip = self.container_clip.is_infinite(),
            "began container"
        );
        GraphicsContainer { state }
    }
}
