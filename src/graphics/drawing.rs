use super::*;

impl GraphicsContext {
    /// Fills `rect` on `target`. Rectangles with no area draw nothing.
    pub fn fill_rectangle(
        &self,
        target: &mut dyn RenderTarget,
        color: Color,
        rect: RectF,
    ) -> Result<()> {
        if rect.is_empty() {
            return Ok(());
        }
        let Some(clip) = self.device_clip_rects() else {
            return Ok(());
        };
        let mut corners = rect.corners();
        self.space.world_to_device().transform_points(&mut corners);
        target.fill_polygon(&corners, color, &clip);
        Ok(())
    }

    pub fn fill_rectangles(
        &self,
        target: &mut dyn RenderTarget,
        color: Color,
        rects: &[RectF],
    ) -> Result<()> {
        if rects.is_empty() {
            return Err(GraphicsError::invalid("rects", "at least one rectangle is required"));
        }
        for rect in rects {
            self.fill_rectangle(target, color, *rect)?;
        }
        Ok(())
    }

    pub fn fill_polygon(
        &self,
        target: &mut dyn RenderTarget,
        color: Color,
        points: &[PointF],
    ) -> Result<()> {
        check_point_count(points, 2)?;
        let Some(clip) = self.device_clip_rects() else {
            return Ok(());
        };
        target.fill_polygon(&self.to_device(points), color, &clip);
        Ok(())
    }

    /// Strokes connected line segments through `points`.
    pub fn draw_lines(
        &self,
        target: &mut dyn RenderTarget,
        pen: &Pen,
        points: &[PointF],
    ) -> Result<()> {
        self.stroke_polyline(target, pen, points, false)
    }

    pub fn draw_polygon(
        &self,
        target: &mut dyn RenderTarget,
        pen: &Pen,
        points: &[PointF],
    ) -> Result<()> {
        self.stroke_polyline(target, pen, points, true)
    }

    /// Strokes cubic Béziers. `points` holds a start point and three points per
    /// segment, so its length must be `4 + 3n`.
    pub fn draw_beziers(
        &self,
        target: &mut dyn RenderTarget,
        pen: &Pen,
        points: &[PointF],
    ) -> Result<()> {
        check_point_count(points, 4)?;
        if (points.len() - 1) % 3 != 0 {
            return Err(GraphicsError::invalid(
                "points",
                format!("bezier point count must be 4 + 3n, got {}", points.len()),
            ));
        }
        let Some(clip) = self.stroke_clip_rects(pen) else {
            return Ok(());
        };
        target.stroke_beziers(&self.to_device(points), pen, &clip);
        Ok(())
    }

    pub fn draw_curve(
        &self,
        target: &mut dyn RenderTarget,
        pen: &Pen,
        points: &[PointF],
        tension: f32,
    ) -> Result<()> {
        check_point_count(points, 2)?;
        let Some(clip) = self.stroke_clip_rects(pen) else {
            return Ok(());
        };
        target.stroke_curve(&self.to_device(points), pen, tension, &clip);
        Ok(())
    }

    /// Strokes `segments` segments of the curve through `points`, starting at
    /// the point at `offset`.
    pub fn draw_curve_segment(
        &self,
        target: &mut dyn RenderTarget,
        pen: &Pen,
        points: &[PointF],
        offset: usize,
        segments: usize,
        tension: f32,
    ) -> Result<()> {
        check_point_count(points, 2)?;
        if segments == 0 {
            return Err(GraphicsError::invalid(
                "segments",
                "at least one segment is required",
            ));
        }
        let end = offset.saturating_add(segments);
        if end >= points.len() {
            return Err(GraphicsError::invalid(
                "offset",
                format!(
                    "offset {offset} with {segments} segments exceeds {} points",
                    points.len()
                ),
            ));
        }
        let Some(clip) = self.stroke_clip_rects(pen) else {
            return Ok(());
        };
        target.stroke_curve(&self.to_device(&points[offset..=end]), pen, tension, &clip);
        Ok(())
    }

    /// Measures `text` laid out in `layout_area` (world units). Empty text
    /// measures as zero without consulting `measurer`.
    pub fn measure_string(
        &self,
        measurer: &mut dyn TextMeasurer,
        text: &str,
        font: &FontSpec,
        layout_area: SizeF,
        format: &StringFormat,
    ) -> Result<TextMetrics> {
        if font.family.is_empty() {
            return Err(GraphicsError::null("font.family"));
        }
        if !(font.size > 0.0 && font.size.is_finite()) {
            return Err(GraphicsError::invalid(
                "font",
                format!("font size must be positive, got {}", font.size),
            ));
        }
        if text.is_empty() {
            return Ok(TextMetrics::default());
        }
        Ok(measurer.measure_string(text, font, layout_area, format, self.text_rendering_hint()))
    }

    fn stroke_polyline(
        &self,
        target: &mut dyn RenderTarget,
        pen: &Pen,
        points: &[PointF],
        closed: bool,
    ) -> Result<()> {
        check_point_count(points, 2)?;
        let Some(clip) = self.stroke_clip_rects(pen) else {
            return Ok(());
        };
        target.stroke_polyline(&self.to_device(points), pen, closed, &clip);
        Ok(())
    }

    fn to_device(&self, points: &[PointF]) -> Vec<PointF> {
        let mut device = points.to_vec();
        self.space.world_to_device().transform_points(&mut device);
        device
    }

    /// The visible clip as device rectangles, or `None` when nothing can be
    /// drawn.
    fn device_clip_rects(&self) -> Option<Vec<RectF>> {
        let visible = self.visible_device_region();
        if visible.is_empty() {
            return None;
        }
        Some(visible.rects())
    }

    /// Like [`Self::device_clip_rects`], but also `None` for an invisible pen.
    fn stroke_clip_rects(&self, pen: &Pen) -> Option<Vec<RectF>> {
        if pen.is_invisible() {
            return None;
        }
        self.device_clip_rects()
    }
}

fn check_point_count(points: &[PointF], minimum: usize) -> Result<()> {
    if points.len() < minimum {
        return Err(GraphicsError::invalid(
            "points",
            format!("at least {minimum} points are required, got {}", points.len()),
        ));
    }
    Ok(())
}
