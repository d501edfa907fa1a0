//! Regions: point sets made of non-overlapping axis-aligned rectangles.
//!
//! A finite region is kept in y-x banded form. Bands are horizontal slabs sorted
//! top to bottom; every band holds the x-spans it covers, sorted left to right.
//! The representation is normalized after every operation:
//!
//! - spans inside a band never touch or overlap (touching spans are merged),
//! - vertically adjacent bands never carry identical spans (they are coalesced),
//! - empty bands are dropped.
//!
//! Normalization makes the flattened rectangle list (`scans`) deterministic and
//! lets structural equality double as point-set equality.
//!
//! Boolean operations sweep the union of both operands' band edges and combine
//! the span lists of each slab with the same sweep along x.

use smallvec::SmallVec;

use crate::geometry::{PointF, RectF};
use crate::graphics::GraphicsContext;
use crate::matrix::Matrix2D;

/// Lower edge of the infinite sentinel on both axes (`-2^22`).
pub const INFINITE_MIN: f32 = -4_194_304.0;
/// Extent of the infinite sentinel on both axes (`2^23`).
pub const INFINITE_SIZE: f32 = 8_388_608.0;
/// Bounds reported for the infinite region.
pub const INFINITE_BOUNDS: RectF =
    RectF::new(INFINITE_MIN, INFINITE_MIN, INFINITE_SIZE, INFINITE_SIZE);

/// How two regions are combined into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombineMode {
    /// The result is the other region.
    #[default]
    Replace,
    Intersect,
    Union,
    /// Points in exactly one of the two regions.
    Xor,
    /// Points of this region that are not in the other one.
    Exclude,
    /// Points of the other region that are not in this one.
    Complement,
}

impl CombineMode {
    fn keeps(self, in_self: bool, in_other: bool) -> bool {
        match self {
            CombineMode::Replace => in_other,
            CombineMode::Intersect => in_self && in_other,
            CombineMode::Union => in_self || in_other,
            CombineMode::Xor => in_self != in_other,
            CombineMode::Exclude => in_self && !in_other,
            CombineMode::Complement => in_other && !in_self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Span {
    left: f32,
    right: f32,
}

type Spans = SmallVec<[Span; 4]>;

#[derive(Debug, Clone, PartialEq)]
struct Band {
    top: f32,
    bottom: f32,
    spans: Spans,
}

#[derive(Debug, Clone, PartialEq)]
enum Coverage {
    Infinite,
    Bands(Vec<Band>),
}

/// A clip region.
///
/// ```
/// use clipframe::{RectF, Region};
///
/// let mut region = Region::from_rect(RectF::new(10.0, 10.0, 100.0, 100.0));
/// region.exclude_rect(RectF::new(40.0, 60.0, 100.0, 20.0));
/// assert_eq!(
///     region.rects(),
///     vec![
///         RectF::new(10.0, 10.0, 100.0, 50.0),
///         RectF::new(10.0, 60.0, 30.0, 20.0),
///         RectF::new(10.0, 80.0, 100.0, 30.0),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    coverage: Coverage,
}

impl Default for Region {
    fn default() -> Self {
        Self::new()
    }
}

impl Region {
    /// The infinite region.
    pub fn new() -> Self {
        Self {
            coverage: Coverage::Infinite,
        }
    }

    pub fn empty() -> Self {
        Self {
            coverage: Coverage::Bands(Vec::new()),
        }
    }

    /// A region covering `rect`. Rectangles with a non-positive width or height
    /// produce the empty region; anything covering the sentinel bounds is infinite.
    pub fn from_rect(rect: RectF) -> Self {
        let Some(clamped) = rect.intersect(&INFINITE_BOUNDS) else {
            return Self::empty();
        };
        Self::from_bands(vec![Band::from_rect(&clamped)])
    }

    /// Union of all `rects`.
    pub fn from_rects(rects: &[RectF]) -> Self {
        let mut region = Self::empty();
        for rect in rects {
            region.union_rect(*rect);
        }
        region
    }

    fn from_bands(bands: Vec<Band>) -> Self {
        let is_sentinel = matches!(
            bands.as_slice(),
            [band] if band.covers_sentinel()
        );
        let coverage = if is_sentinel {
            Coverage::Infinite
        } else {
            Coverage::Bands(bands)
        };
        Self { coverage }
    }

    fn bands(&self) -> std::borrow::Cow<'_, [Band]> {
        match &self.coverage {
            Coverage::Infinite => std::borrow::Cow::Owned(vec![Band::from_rect(&INFINITE_BOUNDS)]),
            Coverage::Bands(bands) => std::borrow::Cow::Borrowed(bands),
        }
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self.coverage, Coverage::Infinite)
    }

    pub fn is_empty(&self) -> bool {
        matches!(&self.coverage, Coverage::Bands(bands) if bands.is_empty())
    }

    /// Reports emptiness as seen through `context`. Regions handed out by a
    /// context are already expressed in its world space, and emptiness does not
    /// depend on the space, so this agrees with [`Region::is_empty`].
    pub fn is_empty_in(&self, _context: &GraphicsContext) -> bool {
        self.is_empty()
    }

    /// See [`Region::is_empty_in`].
    pub fn is_infinite_in(&self, _context: &GraphicsContext) -> bool {
        self.is_infinite()
    }

    /// Bounds as reported through `context`; equal to the context's
    /// `clip_bounds()` for a region obtained from `context.clip()`.
    pub fn bounds_in(&self, _context: &GraphicsContext) -> RectF {
        self.bounds()
    }

    pub fn make_empty(&mut self) {
        self.coverage = Coverage::Bands(Vec::new());
    }

    pub fn make_infinite(&mut self) {
        self.coverage = Coverage::Infinite;
    }

    /// Smallest rectangle enclosing the region. The infinite region reports the
    /// sentinel bounds and the empty region reports an empty rectangle.
    pub fn bounds(&self) -> RectF {
        match &self.coverage {
            Coverage::Infinite => INFINITE_BOUNDS,
            Coverage::Bands(bands) => {
                let (Some(first), Some(last)) = (bands.first(), bands.last()) else {
                    return RectF::default();
                };
                let left = bands
                    .iter()
                    .filter_map(|band| band.spans.first())
                    .map(|span| span.left)
                    .fold(f32::INFINITY, f32::min);
                let right = bands
                    .iter()
                    .filter_map(|band| band.spans.last())
                    .map(|span| span.right)
                    .fold(f32::NEG_INFINITY, f32::max);
                RectF::from_ltrb(left, first.top, right, last.bottom)
            }
        }
    }

    /// Flattened rectangles, top to bottom then left to right.
    pub fn rects(&self) -> Vec<RectF> {
        self.bands()
            .iter()
            .flat_map(|band| {
                band.spans
                    .iter()
                    .map(move |span| RectF::from_ltrb(span.left, band.top, span.right, band.bottom))
            })
            .collect()
    }

    /// Flattened rectangles of the region after applying `matrix`.
    pub fn scans(&self, matrix: &Matrix2D) -> Vec<RectF> {
        if matrix.is_identity() {
            return self.rects();
        }
        let mut transformed = self.clone();
        transformed.transform(matrix);
        transformed.rects()
    }

    /// Combines `other` into this region.
    pub fn combine(&mut self, other: &Region, mode: CombineMode) {
        let combined = match (mode, &self.coverage, &other.coverage) {
            (CombineMode::Replace, _, _) => other.clone(),
            (CombineMode::Intersect, Coverage::Infinite, _) => other.clone(),
            (CombineMode::Intersect, _, Coverage::Infinite) => return,
            (CombineMode::Union, Coverage::Infinite, _)
            | (CombineMode::Union, _, Coverage::Infinite) => Region::new(),
            _ => Region::from_bands(combine_bands(&self.bands(), &other.bands(), mode)),
        };
        tracing::trace!(
            ?mode,
            rects = combined.band_rect_count(),
            infinite = combined.is_infinite(),
            "combined region"
        );
        *self = combined;
    }

    /// Combines a rectangle operand into this region. Unlike [`Region::from_rect`],
    /// a rectangle with a negative width or height is normalized first.
    pub fn combine_rect(&mut self, rect: RectF, mode: CombineMode) {
        self.combine(&Region::from_rect(rect.normalized()), mode);
    }

    pub fn intersect(&mut self, other: &Region) {
        self.combine(other, CombineMode::Intersect);
    }

    pub fn intersect_rect(&mut self, rect: RectF) {
        self.combine_rect(rect, CombineMode::Intersect);
    }

    pub fn union(&mut self, other: &Region) {
        self.combine(other, CombineMode::Union);
    }

    pub fn union_rect(&mut self, rect: RectF) {
        self.combine_rect(rect, CombineMode::Union);
    }

    pub fn xor(&mut self, other: &Region) {
        self.combine(other, CombineMode::Xor);
    }

    pub fn xor_rect(&mut self, rect: RectF) {
        self.combine_rect(rect, CombineMode::Xor);
    }

    pub fn exclude(&mut self, other: &Region) {
        self.combine(other, CombineMode::Exclude);
    }

    pub fn exclude_rect(&mut self, rect: RectF) {
        self.combine_rect(rect, CombineMode::Exclude);
    }

    pub fn complement(&mut self, other: &Region) {
        self.combine(other, CombineMode::Complement);
    }

    pub fn complement_rect(&mut self, rect: RectF) {
        self.combine_rect(rect, CombineMode::Complement);
    }

    /// Offsets every rectangle. The infinite region is unaffected.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        if let Coverage::Infinite = self.coverage {
            return;
        }
        let moved: Vec<RectF> = self.rects().iter().map(|r| r.offset(dx, dy)).collect();
        *self = Region::from_rects(&moved);
    }

    /// Maps the region through `matrix`.
    ///
    /// Every rectangle is replaced by the bounding box of its transformed corners,
    /// which is exact for matrices that keep rectangles axis-aligned (scales,
    /// translations and quarter turns). The infinite region stays infinite.
    pub fn transform(&mut self, matrix: &Matrix2D) {
        if self.is_infinite() || matrix.is_identity() {
            return;
        }
        let mapped: Vec<RectF> = self
            .rects()
            .iter()
            .map(|rect| matrix.transform_rect_bounds(rect))
            .collect();
        *self = Region::from_rects(&mapped);
    }

    pub fn is_visible_point(&self, point: PointF) -> bool {
        match &self.coverage {
            Coverage::Infinite => INFINITE_BOUNDS.contains_point(point),
            Coverage::Bands(bands) => bands
                .iter()
                .find(|band| point.y >= band.top && point.y < band.bottom)
                .is_some_and(|band| {
                    band.spans
                        .iter()
                        .any(|span| point.x >= span.left && point.x < span.right)
                }),
        }
    }

    /// True if any part of `rect` lies inside the region.
    pub fn is_visible_rect(&self, rect: RectF) -> bool {
        let mut overlap = Region::from_rect(rect);
        overlap.intersect(self);
        !overlap.is_empty()
    }

    fn band_rect_count(&self) -> usize {
        match &self.coverage {
            Coverage::Infinite => 1,
            Coverage::Bands(bands) => bands.iter().map(|band| band.spans.len()).sum(),
        }
    }
}

impl From<RectF> for Region {
    fn from(rect: RectF) -> Self {
        Region::from_rect(rect)
    }
}

impl Band {
    fn from_rect(rect: &RectF) -> Self {
        let mut spans = Spans::new();
        spans.push(Span {
            left: rect.left(),
            right: rect.right(),
        });
        Self {
            top: rect.top(),
            bottom: rect.bottom(),
            spans,
        }
    }

    fn covers_sentinel(&self) -> bool {
        let max = INFINITE_MIN + INFINITE_SIZE;
        self.top <= INFINITE_MIN
            && self.bottom >= max
            && matches!(
                self.spans.as_slice(),
                [span] if span.left <= INFINITE_MIN && span.right >= max
            )
    }
}

fn sorted_edges(values: impl Iterator<Item = f32>) -> Vec<f32> {
    let mut edges: Vec<f32> = values.collect();
    edges.sort_by(f32::total_cmp);
    edges.dedup();
    edges
}

/// Spans of the band covering the slab that starts at `top`, advancing `cursor`
/// past bands that end above it. Slab edges include every band edge, so a band
/// that starts at or above `top` covers the whole slab.
fn spans_covering<'a>(bands: &'a [Band], cursor: &mut usize, top: f32) -> &'a [Span] {
    while *cursor < bands.len() && bands[*cursor].bottom <= top {
        *cursor += 1;
    }
    match bands.get(*cursor) {
        Some(band) if band.top <= top => &band.spans,
        _ => &[],
    }
}

fn covered(spans: &[Span], cursor: &mut usize, x: f32) -> bool {
    while *cursor < spans.len() && spans[*cursor].right <= x {
        *cursor += 1;
    }
    spans.get(*cursor).is_some_and(|span| span.left <= x)
}

fn combine_spans(first: &[Span], second: &[Span], mode: CombineMode) -> Spans {
    let edges = sorted_edges(
        first
            .iter()
            .chain(second)
            .flat_map(|span| [span.left, span.right]),
    );
    let mut result = Spans::new();
    let (mut first_cursor, mut second_cursor) = (0, 0);
    for window in edges.windows(2) {
        let (left, right) = (window[0], window[1]);
        let in_first = covered(first, &mut first_cursor, left);
        let in_second = covered(second, &mut second_cursor, left);
        if !mode.keeps(in_first, in_second) {
            continue;
        }
        match result.last_mut() {
            Some(last) if last.right == left => last.right = right,
            _ => result.push(Span { left, right }),
        }
    }
    result
}

fn combine_bands(first: &[Band], second: &[Band], mode: CombineMode) -> Vec<Band> {
    let edges = sorted_edges(
        first
            .iter()
            .chain(second)
            .flat_map(|band| [band.top, band.bottom]),
    );
    let mut result: Vec<Band> = Vec::new();
    let (mut first_cursor, mut second_cursor) = (0, 0);
    for window in edges.windows(2) {
        let (top, bottom) = (window[0], window[1]);
        let first_spans = spans_covering(first, &mut first_cursor, top);
        let second_spans = spans_covering(second, &mut second_cursor, top);
        let spans = combine_spans(first_spans, second_spans, mode);
        if spans.is_empty() {
            continue;
        }
        match result.last_mut() {
            Some(last) if last.bottom == top && last.spans == spans => last.bottom = bottom,
            _ => result.push(Band { top, bottom, spans }),
        }
    }
    result
}
