pub mod expectations;
pub mod scene;

pub use expectations::{check_bounds, BoundsExpectation};
pub use scene::{
    build_clip_combine_scene, build_container_scene, build_cumulative_transform_scene,
    build_page_unit_scene, canvas_context, run_scene, BoundsQuery, SceneStep, CANVAS_HEIGHT,
    CANVAS_WIDTH,
};
