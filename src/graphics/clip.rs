use super::*;

impl GraphicsContext {
    /// The clip expressed in the current world space.
    pub fn clip(&self) -> Result<Region> {
        self.space.region_from_device(&self.clip)
    }

    /// Replaces the clip with `region`, interpreted in the current world space.
    pub fn set_clip(&mut self, region: &Region) {
        self.set_clip_region(region, CombineMode::Replace);
    }

    /// Combines `rect` into the clip. A negative width or height is normalized.
    pub fn set_clip_rect(&mut self, rect: RectF, mode: CombineMode) {
        let device = self
            .space
            .region_to_device(&Region::from_rect(rect.normalized()));
        self.combine_device_clip(&device, mode);
    }

    pub fn set_clip_region(&mut self, region: &Region, mode: CombineMode) {
        let device = self.space.region_to_device(region);
        self.combine_device_clip(&device, mode);
    }

    /// Combines with the clip of another context. Both clips are in device
    /// space, so no conversion takes place.
    pub fn set_clip_from(&mut self, other: &GraphicsContext, mode: CombineMode) {
        let device = other.clip.clone();
        self.combine_device_clip(&device, mode);
    }

    pub fn intersect_clip(&mut self, rect: RectF) {
        self.set_clip_rect(rect, CombineMode::Intersect);
    }

    pub fn intersect_clip_region(&mut self, region: &Region) {
        self.set_clip_region(region, CombineMode::Intersect);
    }

    pub fn exclude_clip(&mut self, rect: RectF) {
        self.set_clip_rect(rect, CombineMode::Exclude);
    }

    pub fn exclude_clip_region(&mut self, region: &Region) {
        self.set_clip_region(region, CombineMode::Exclude);
    }

    pub fn reset_clip(&mut self) {
        self.clip.make_infinite();
    }

    /// Moves the clip by a world-space offset.
    pub fn translate_clip(&mut self, dx: f32, dy: f32) {
        let mut offset = [PointF::new(dx, dy)];
        self.space.world_to_device().transform_vectors(&mut offset);
        self.clip.translate(offset[0].x, offset[0].y);
    }

    /// Bounds of the clip in the current world space. The infinite clip
    /// reports the sentinel rectangle.
    pub fn clip_bounds(&self) -> Result<RectF> {
        self.space.clip_bounds_in_current_space(&self.clip)
    }

    /// Bounds of the part of the surface drawing can reach, in world space.
    pub fn visible_clip_bounds(&self) -> Result<RectF> {
        self.space
            .clip_bounds_in_current_space(&self.visible_device_region())
    }

    pub fn is_clip_empty(&self) -> bool {
        self.clip.is_empty()
    }

    pub fn is_visible_clip_empty(&self) -> bool {
        self.visible_device_region().is_empty()
    }

    /// True when the world-space point lands inside the visible clip.
    pub fn is_visible_point(&self, point: PointF) -> bool {
        let device = self.space.world_to_device().transform_point(point);
        self.visible_device_region().is_visible_point(device)
    }

    /// True when any part of the world-space rectangle lands inside the
    /// visible clip.
    pub fn is_visible_rect(&self, rect: RectF) -> bool {
        let device = self.space.rect_to_device(&rect);
        self.visible_device_region().is_visible_rect(device)
    }

    fn combine_device_clip(&mut self, device: &Region, mode: CombineMode) {
        self.clip.combine(device, mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::INFINITE_BOUNDS;

    fn context() -> GraphicsContext {
        GraphicsContext::new(ContextConfig::new(16, 16))
    }

    #[test]
    fn clip_bounds_follow_transform_changes() {
        let mut context = context();
        context.set_clip(&Region::from_rect(RectF::new(0.0, 0.0, 8.0, 8.0)));
        context.translate_transform(8.0, 8.0);
        assert_eq!(context.clip_bounds().unwrap(), RectF::new(-8.0, -8.0, 8.0, 8.0));
        context.reset_transform();
        assert_eq!(context.clip_bounds().unwrap(), RectF::new(0.0, 0.0, 8.0, 8.0));
    }

    #[test]
    fn clip_is_stored_in_device_space() {
        let mut context = context();
        context.translate_transform(-16.0, -16.0);
        context.set_clip_rect(RectF::new(0.0, 0.0, 8.0, 8.0), CombineMode::Replace);
        assert_eq!(context.clip_bounds().unwrap(), RectF::new(0.0, 0.0, 8.0, 8.0));
        context.reset_transform();
        assert_eq!(context.clip_bounds().unwrap(), RectF::new(-16.0, -16.0, 8.0, 8.0));
    }

    #[test]
    fn reset_clip_restores_sentinel_bounds() {
        let mut context = context();
        context.intersect_clip(RectF::new(1.0, 2.0, 3.0, 4.0));
        assert!(!context.clip().unwrap().is_infinite());
        context.reset_clip();
        assert!(context.clip().unwrap().is_infinite());
        assert_eq!(context.clip_bounds().unwrap(), INFINITE_BOUNDS);
    }

    #[test]
    fn exclude_from_infinite_keeps_sentinel_bounds() {
        let mut context = context();
        context.exclude_clip(RectF::new(4.0, 4.0, 4.0, 4.0));
        let clip = context.clip().unwrap();
        assert!(!clip.is_infinite());
        assert_eq!(context.clip_bounds().unwrap(), INFINITE_BOUNDS);
        assert!(!context.is_visible_point(PointF::new(5.0, 5.0)));
        assert!(context.is_visible_point(PointF::new(1.0, 1.0)));
    }

    #[test]
    fn returned_clip_is_a_copy() {
        let mut context = context();
        context.set_clip_rect(RectF::new(0.0, 0.0, 8.0, 8.0), CombineMode::Replace);
        let mut copy = context.clip().unwrap();
        copy.make_empty();
        assert!(!context.is_clip_empty());
    }

    #[test]
    fn visible_clip_is_limited_to_the_surface() {
        let mut context = context();
        assert_eq!(
            context.visible_clip_bounds().unwrap(),
            RectF::new(0.0, 0.0, 16.0, 16.0)
        );
        context.set_clip_rect(RectF::new(8.0, 8.0, 100.0, 100.0), CombineMode::Replace);
        assert_eq!(
            context.visible_clip_bounds().unwrap(),
            RectF::new(8.0, 8.0, 8.0, 8.0)
        );
        context.set_clip_rect(RectF::new(20.0, 20.0, 5.0, 5.0), CombineMode::Replace);
        assert!(!context.is_clip_empty());
        assert!(context.is_visible_clip_empty());
    }

    #[test]
    fn translate_clip_uses_world_units() {
        let mut context = context();
        context.scale_transform(2.0, 2.0).unwrap();
        context.set_clip_rect(RectF::new(0.0, 0.0, 2.0, 2.0), CombineMode::Replace);
        context.translate_clip(1.0, 1.0);
        assert_eq!(context.clip_bounds().unwrap(), RectF::new(1.0, 1.0, 2.0, 2.0));
    }

    #[test]
    fn clip_can_be_copied_between_contexts() {
        let mut source = context();
        source.set_clip_rect(RectF::new(2.0, 2.0, 4.0, 4.0), CombineMode::Replace);
        let mut target = context();
        target.set_clip_rect(RectF::new(0.0, 0.0, 4.0, 4.0), CombineMode::Replace);
        target.set_clip_from(&source, CombineMode::Union);
        let rects = target.clip().unwrap().rects();
        assert_eq!(
            rects,
            vec![
                RectF::new(0.0, 0.0, 4.0, 2.0),
                RectF::new(0.0, 2.0, 6.0, 2.0),
                RectF::new(2.0, 4.0, 4.0, 2.0),
            ]
        );
    }

    #[test]
    fn visibility_checks_use_world_coordinates() {
        let mut context = context();
        context.set_clip_rect(RectF::new(0.0, 0.0, 4.0, 4.0), CombineMode::Replace);
        context.translate_transform(-4.0, -4.0);
        assert!(context.is_visible_point(PointF::new(5.0, 5.0)));
        assert!(!context.is_visible_point(PointF::new(1.0, 1.0)));
        assert!(context.is_visible_rect(RectF::new(7.0, 7.0, 4.0, 4.0)));
        assert!(!context.is_visible_rect(RectF::new(9.0, 9.0, 4.0, 4.0)));
    }

    #[test]
    fn negative_clip_rectangles_are_normalized() {
        let mut context = context();
        context.intersect_clip(RectF::new(5.0, 5.0, -10.0, -10.0));
        assert_eq!(context.clip_bounds().unwrap(), RectF::new(-5.0, -5.0, 10.0, 10.0));

        context.set_clip_rect(RectF::new(8.0, 8.0, -4.0, -4.0), CombineMode::Replace);
        assert_eq!(context.clip_bounds().unwrap(), RectF::new(4.0, 4.0, 4.0, 4.0));

        context.exclude_clip(RectF::new(8.0, 8.0, -2.0, -2.0));
        assert!(!context.is_visible_point(PointF::new(7.0, 7.0)));
        assert!(context.is_visible_point(PointF::new(5.0, 5.0)));
    }
}
