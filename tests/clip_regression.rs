/// Clip and transform regression tests for clipframe.
///
/// These tests drive scripted scenes against a graphics context and validate
/// the clip bounds reported after every step.
///
/// Run with:   cargo test --test clip_regression
use clipframe::{
    CombineMode, CoordinateSpace, GraphicsContext, GraphicsError, GraphicsUnit, Matrix2D,
    MatrixOrder, PointF, RectF, Region, INFINITE_BOUNDS,
};
use clipframe_test_scenes::{
    build_clip_combine_scene, build_container_scene, build_cumulative_transform_scene,
    build_page_unit_scene, canvas_context, check_bounds, run_scene, SceneStep,
};

fn assert_scene(steps: &[SceneStep]) {
    let mut context = canvas_context();
    let observations = run_scene(&mut context, steps);
    let failures = check_bounds(&observations);
    if !failures.is_empty() {
        let message = format!(
            "{} bounds expectation(s) failed:\n{}",
            failures.len(),
            failures.join("\n"),
        );
        panic!("{message}");
    }
}

#[test]
fn cumulative_transform_scene() {
    assert_scene(&build_cumulative_transform_scene());
}

#[test]
fn clip_combine_scene() {
    assert_scene(&build_clip_combine_scene());
}

#[test]
fn container_scene() {
    assert_scene(&build_container_scene());
}

#[test]
fn page_unit_scene() {
    assert_scene(&build_page_unit_scene());
}

/// Regression test — exclusion produces the canonical banded rectangles.
#[test]
fn exclude_tie_break_rectangles() {
    let mut context = canvas_context();
    context.set_clip_rect(RectF::new(10.0, 10.0, 100.0, 100.0), CombineMode::Replace);
    context.exclude_clip(RectF::new(40.0, 60.0, 100.0, 20.0));

    let rects = context.clip().unwrap().scans(&Matrix2D::identity());
    assert_eq!(
        rects,
        vec![
            RectF::new(10.0, 10.0, 100.0, 50.0),
            RectF::new(10.0, 60.0, 30.0, 20.0),
            RectF::new(10.0, 80.0, 100.0, 30.0),
        ]
    );
}

#[test]
fn intersecting_reset_clip_yields_the_rectangle() {
    let mut context = canvas_context();
    context.intersect_clip(RectF::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(context.clip_bounds().unwrap(), RectF::new(1.0, 2.0, 3.0, 4.0));
    context.reset_clip();
    assert!(context.clip().unwrap().is_infinite());
    assert_eq!(context.clip_bounds().unwrap(), INFINITE_BOUNDS);
}

#[test]
fn region_queries_in_context_space() {
    let mut context = canvas_context();
    context.scale_transform(2.0, 2.0).unwrap();
    context.set_clip(&Region::from_rect(RectF::new(1.0, 1.0, 2.0, 2.0)));

    let clip = context.clip().unwrap();
    assert_eq!(clip.bounds_in(&context), RectF::new(1.0, 1.0, 2.0, 2.0));
    assert!(!clip.is_empty_in(&context));
    assert!(!clip.is_infinite_in(&context));
    assert!(Region::new().is_infinite_in(&context));
    assert!(Region::empty().is_empty_in(&context));
}

#[test]
fn older_state_restores_after_newer_one() {
    let mut context = canvas_context();
    context.set_clip_rect(RectF::new(0.0, 0.0, 8.0, 8.0), CombineMode::Replace);
    let outer = context.save();

    context.rotate_transform(90.0);
    context.set_page_unit(GraphicsUnit::Pixel).unwrap();
    let inner = context.save();

    context.reset_clip();
    context.restore(&inner).unwrap();
    assert_eq!(context.page_unit(), GraphicsUnit::Pixel);
    assert!(!context.clip().unwrap().is_infinite());

    context.restore(&outer).unwrap();
    assert!(context.transform().is_identity());
    assert_eq!(context.page_unit(), GraphicsUnit::Display);
    assert_eq!(context.clip_bounds().unwrap(), RectF::new(0.0, 0.0, 8.0, 8.0));
}

#[test]
fn end_container_restores_outer_state() {
    let mut context = canvas_context();
    context.translate_transform(3.0, 3.0);
    context.set_clip_rect(RectF::new(0.0, 0.0, 10.0, 10.0), CombineMode::Replace);

    let container = context
        .begin_container_with(
            RectF::new(0.0, 0.0, 20.0, 20.0),
            RectF::new(0.0, 0.0, 10.0, 10.0),
            GraphicsUnit::Point,
        )
        .unwrap();
    assert!(context.transform().is_identity());
    assert!(context.clip().unwrap().is_infinite());

    context.end_container(&container).unwrap();
    assert_eq!(context.transform().elements(), [1.0, 0.0, 0.0, 1.0, 3.0, 3.0]);
    assert_eq!(context.clip_bounds().unwrap(), RectF::new(0.0, 0.0, 10.0, 10.0));
}

#[test]
fn rejected_transforms_leave_state_untouched() {
    let mut context = canvas_context();
    context.set_clip_rect(RectF::new(0.0, 0.0, 8.0, 8.0), CombineMode::Replace);
    context.rotate_transform(90.0);
    let before = context.transform();

    let singular = Matrix2D::new(123.0, 24.0, 82.0, 16.0, 47.0, 30.0);
    assert!(matches!(
        context.set_transform(&singular),
        Err(GraphicsError::InvalidArgument { .. })
    ));
    assert!(context.multiply_transform(&singular).is_err());
    assert!(context.scale_transform(0.0, 0.0).is_err());
    assert_eq!(context.transform(), before);
    assert_eq!(
        Matrix2D::new(123.0, 24.0, 82.0, 16.0, 47.0, 30.0).invert(),
        Err(GraphicsError::DegenerateMatrix)
    );
}

#[test]
fn translate_transform_order() {
    let base = Matrix2D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);

    let mut context = canvas_context();
    context.set_transform(&base).unwrap();
    context.translate_transform_ordered(3.0, -3.0, MatrixOrder::Prepend);
    assert_eq!(context.transform().elements(), [1.0, 2.0, 3.0, 4.0, -1.0, 0.0]);

    context.set_transform(&base).unwrap();
    context.translate_transform_ordered(3.0, -3.0, MatrixOrder::Append);
    assert_eq!(context.transform().elements(), [1.0, 2.0, 3.0, 4.0, 8.0, 3.0]);
}

#[test]
fn reset_transform_is_idempotent() {
    let mut context = canvas_context();
    context.multiply_transform(&Matrix2D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0)).unwrap();
    context.reset_transform();
    let once = context.transform();
    context.reset_transform();
    assert_eq!(context.transform(), once);
    assert_eq!(once, Matrix2D::identity());
}

#[test]
fn transform_points_between_world_and_device() {
    let mut context: GraphicsContext = canvas_context();
    context
        .set_transform(&Matrix2D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0))
        .unwrap();
    context.set_page_scale(10.0).unwrap();

    let mut points = [PointF::new(1.0, 1.0), PointF::new(2.0, 2.0)];
    context
        .transform_points(CoordinateSpace::Device, CoordinateSpace::World, &mut points)
        .unwrap();
    assert_eq!(points, [PointF::new(9.0, 12.0), PointF::new(13.0, 18.0)]);
}

#[test]
fn region_clone_is_independent() {
    let mut original = Region::from_rect(RectF::new(0.0, 0.0, 10.0, 10.0));
    let copy = original.clone();
    original.exclude_rect(RectF::new(0.0, 0.0, 5.0, 10.0));
    assert_eq!(copy.bounds(), RectF::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(original.bounds(), RectF::new(5.0, 0.0, 5.0, 10.0));
}
