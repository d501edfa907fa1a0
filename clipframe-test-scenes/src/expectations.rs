use clipframe::RectF;

/// A clip-bounds expectation to validate after a scene step.
#[derive(Debug, Clone, Copy)]
pub struct BoundsExpectation {
    pub expected: RectF,
    /// Per-edge tolerance for comparison (default 1).
    pub tolerance: f32,
    /// Human-readable label for failure messages.
    pub label: &'static str,
}

impl BoundsExpectation {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: &'static str) -> Self {
        Self {
            expected: RectF::new(x, y, width, height),
            tolerance: 1.0,
            label,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Convenience: expect the infinite sentinel rectangle.
    pub fn infinite(label: &'static str) -> Self {
        let bounds = clipframe::INFINITE_BOUNDS;
        Self::new(bounds.x, bounds.y, bounds.width, bounds.height, label)
    }

    pub fn matches(&self, actual: &RectF) -> bool {
        let close = |a: f32, e: f32| (a - e).abs() <= self.tolerance;
        close(actual.x, self.expected.x)
            && close(actual.y, self.expected.y)
            && close(actual.width, self.expected.width)
            && close(actual.height, self.expected.height)
    }
}

/// Validates observed bounds against their expectations.
///
/// Returns a list of human-readable failure descriptions. An empty list means
/// all expectations passed.
pub fn check_bounds(observations: &[(BoundsExpectation, clipframe::Result<RectF>)]) -> Vec<String> {
    let mut failures = Vec::new();

    for (expectation, actual) in observations {
        match actual {
            Ok(actual) if expectation.matches(actual) => {}
            Ok(actual) => failures.push(format!(
                "[{}] expected bounds {} ±{} but got {}",
                expectation.label, expectation.expected, expectation.tolerance, actual,
            )),
            Err(error) => failures.push(format!(
                "[{}] expected bounds {} but the query failed: {}",
                expectation.label, expectation.expected, error,
            )),
        }
    }

    failures
}
