use clipframe::{
    CombineMode, ContextConfig, GraphicsContext, GraphicsUnit, RectF, Region, Result,
};

use crate::expectations::BoundsExpectation;

pub const CANVAS_WIDTH: u32 = 128;
pub const CANVAS_HEIGHT: u32 = 128;

/// Which bounds a step reads back after running its action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsQuery {
    /// [`GraphicsContext::clip_bounds`].
    Clip,
    /// [`GraphicsContext::visible_clip_bounds`].
    VisibleClip,
}

/// One scripted mutation of a context followed by a bounds check.
pub struct SceneStep {
    pub action: fn(&mut GraphicsContext) -> Result<()>,
    pub query: BoundsQuery,
    pub expectation: BoundsExpectation,
}

impl SceneStep {
    pub fn clip(
        action: fn(&mut GraphicsContext) -> Result<()>,
        expectation: BoundsExpectation,
    ) -> Self {
        Self {
            action,
            query: BoundsQuery::Clip,
            expectation,
        }
    }

    pub fn visible_clip(
        action: fn(&mut GraphicsContext) -> Result<()>,
        expectation: BoundsExpectation,
    ) -> Self {
        Self {
            action,
            query: BoundsQuery::VisibleClip,
            expectation,
        }
    }
}

/// A new context sized for the test canvas.
pub fn canvas_context() -> GraphicsContext {
    GraphicsContext::new(ContextConfig::new(CANVAS_WIDTH, CANVAS_HEIGHT))
}

/// Runs every step in order on `context` and pairs each expectation with the
/// bounds observed right after its action. A failing action is reported in
/// place of the bounds.
pub fn run_scene(
    context: &mut GraphicsContext,
    steps: &[SceneStep],
) -> Vec<(BoundsExpectation, Result<RectF>)> {
    steps
        .iter()
        .map(|step| {
            let observed = (step.action)(context).and_then(|()| match step.query {
                BoundsQuery::Clip => context.clip_bounds(),
                BoundsQuery::VisibleClip => context.visible_clip_bounds(),
            });
            (step.expectation, observed)
        })
        .collect()
}

fn set_clip_8x8(context: &mut GraphicsContext) -> Result<()> {
    context.set_clip(&Region::from_rect(RectF::new(0.0, 0.0, 8.0, 8.0)));
    Ok(())
}

/// Transform calls accumulate on an 8×8 clip while the stored clip stays put.
pub fn build_cumulative_transform_scene() -> Vec<SceneStep> {
    vec![
        SceneStep::clip(set_clip_8x8, BoundsExpectation::new(0.0, 0.0, 8.0, 8.0, "clip_set")),
        SceneStep::clip(
            |g| {
                g.rotate_transform(90.0);
                Ok(())
            },
            BoundsExpectation::new(0.0, -8.0, 8.0, 8.0, "rotate_90"),
        ),
        SceneStep::clip(
            |g| g.scale_transform(0.25, 0.5),
            BoundsExpectation::new(0.0, -16.0, 32.0, 16.0, "then_scale"),
        ),
        SceneStep::clip(
            |g| {
                g.translate_transform(8.0, 8.0);
                Ok(())
            },
            BoundsExpectation::new(-8.0, -24.0, 32.0, 16.0, "then_translate"),
        ),
        SceneStep::clip(
            |g| {
                let current = g.transform();
                g.multiply_transform(&current)
            },
            BoundsExpectation::new(-104.0, -56.0, 64.0, 64.0, "then_multiply_self"),
        ),
        SceneStep::clip(
            |g| {
                g.reset_transform();
                Ok(())
            },
            BoundsExpectation::new(0.0, 0.0, 8.0, 8.0, "reset"),
        ),
    ]
}

/// Boolean clip operations under the identity transform.
pub fn build_clip_combine_scene() -> Vec<SceneStep> {
    vec![
        SceneStep::clip(
            |g| {
                g.set_clip_rect(RectF::new(10.0, 10.0, 100.0, 100.0), CombineMode::Replace);
                Ok(())
            },
            BoundsExpectation::new(10.0, 10.0, 100.0, 100.0, "replace"),
        ),
        SceneStep::clip(
            |g| {
                g.exclude_clip(RectF::new(40.0, 60.0, 100.0, 20.0));
                Ok(())
            },
            BoundsExpectation::new(10.0, 10.0, 100.0, 100.0, "exclude_band"),
        ),
        SceneStep::clip(
            |g| {
                g.intersect_clip(RectF::new(0.0, 0.0, 50.0, 50.0));
                Ok(())
            },
            BoundsExpectation::new(10.0, 10.0, 40.0, 40.0, "intersect"),
        ),
        SceneStep::clip(
            |g| {
                g.set_clip_rect(RectF::new(60.0, 60.0, 10.0, 10.0), CombineMode::Union);
                Ok(())
            },
            BoundsExpectation::new(10.0, 10.0, 60.0, 60.0, "union"),
        ),
        SceneStep::clip(
            |g| {
                g.set_clip_rect(RectF::new(10.0, 10.0, 40.0, 40.0), CombineMode::Xor);
                Ok(())
            },
            BoundsExpectation::new(60.0, 60.0, 10.0, 10.0, "xor"),
        ),
        SceneStep::clip(
            |g| {
                g.set_clip_rect(RectF::new(0.0, 0.0, 100.0, 100.0), CombineMode::Complement);
                Ok(())
            },
            BoundsExpectation::new(0.0, 0.0, 100.0, 100.0, "complement"),
        ),
        SceneStep::clip(
            |g| {
                g.reset_clip();
                Ok(())
            },
            BoundsExpectation::infinite("reset"),
        ),
        SceneStep::clip(
            |g| {
                g.exclude_clip(RectF::new(4.0, 4.0, 4.0, 4.0));
                Ok(())
            },
            BoundsExpectation::infinite("exclude_from_infinite"),
        ),
    ]
}

/// Nested containers inherit the outer clip as their visible limit.
pub fn build_container_scene() -> Vec<SceneStep> {
    vec![
        SceneStep::clip(set_clip_8x8, BoundsExpectation::new(0.0, 0.0, 8.0, 8.0, "outer_clip")),
        SceneStep::clip(
            |g| {
                g.translate_transform(4.0, 4.0);
                Ok(())
            },
            BoundsExpectation::new(-4.0, -4.0, 8.0, 8.0, "outer_translated"),
        ),
        SceneStep::clip(
            |g| {
                let _container = g.begin_container();
                Ok(())
            },
            BoundsExpectation::infinite("container_clip_is_infinite"),
        ),
        SceneStep::visible_clip(
            |_| Ok(()),
            BoundsExpectation::new(-4.0, -4.0, 8.0, 8.0, "container_visible_clip"),
        ),
        SceneStep::clip(
            |g| {
                g.intersect_clip(RectF::new(0.0, 0.0, 2.0, 2.0));
                Ok(())
            },
            BoundsExpectation::new(0.0, 0.0, 2.0, 2.0, "inner_clip"),
        ),
        SceneStep::visible_clip(
            |g| {
                g.begin_container_with(
                    RectF::new(0.0, 0.0, 4.0, 4.0),
                    RectF::new(0.0, 0.0, 2.0, 2.0),
                    GraphicsUnit::Pixel,
                )
                .map(|_| ())
            },
            BoundsExpectation::new(0.0, 0.0, 1.0, 1.0, "scaled_container_visible_clip"),
        ),
    ]
}

/// Page units and scales rescale the reported bounds of a device clip.
pub fn build_page_unit_scene() -> Vec<SceneStep> {
    vec![
        SceneStep::clip(
            |g| {
                g.set_clip_rect(RectF::new(0.0, 0.0, 96.0, 96.0), CombineMode::Replace);
                Ok(())
            },
            BoundsExpectation::new(0.0, 0.0, 96.0, 96.0, "display_clip"),
        ),
        SceneStep::clip(
            |g| g.set_page_unit(GraphicsUnit::Inch),
            BoundsExpectation::new(0.0, 0.0, 1.0, 1.0, "inch").with_tolerance(0.01),
        ),
        SceneStep::clip(
            |g| g.set_page_scale(0.5),
            BoundsExpectation::new(0.0, 0.0, 2.0, 2.0, "half_inch").with_tolerance(0.01),
        ),
        SceneStep::clip(
            |g| g.set_page_unit(GraphicsUnit::Millimeter),
            BoundsExpectation::new(0.0, 0.0, 50.8, 50.8, "half_millimeter").with_tolerance(0.01),
        ),
        SceneStep::clip(
            |g| g.set_page_unit(GraphicsUnit::Display),
            BoundsExpectation::new(0.0, 0.0, 96.0, 96.0, "display_ignores_scale"),
        ),
        SceneStep::clip(
            |g| {
                g.set_page_unit(GraphicsUnit::Point)?;
                g.set_page_scale(1.0)
            },
            BoundsExpectation::new(0.0, 0.0, 72.0, 72.0, "point"),
        ),
    ]
}
