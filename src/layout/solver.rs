use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::foundation::core::{Canvas, Point, Rect};
use crate::layout::measure::TextMeasure;
use crate::style::lexicon;
use crate::style::tables::Typography;
use crate::words::meta::WordMetaEntry;
use crate::words::phrase::{MAX_GROUP_WORDS, PhraseGroup};

const SINGLE_FILLER_SCALE: f64 = 0.9;
const SINGLE_SCALE: f64 = 1.2;
const ANCHOR_SCALE: f64 = 1.35;
const ANCHOR_EMPHASIS_STEP: f64 = 0.06;
const SUPPORT_SCALE: f64 = 0.72;
/// Gap between the anchor and the support baseline, in support font sizes.
const SUPPORT_GAP: f64 = 0.35;
const MIN_FONT_PX: f64 = 1.0;

/// Anchor slots as canvas ratios, cycled by group sequence number.
///
/// Consecutive slots alternate between the upper and lower third, so a group entering while its
/// predecessor exits lands in the other band.
pub const ANCHOR_PRESETS: [(f64, f64); 6] = [
    (0.5, 0.28),
    (0.5, 0.62),
    (0.34, 0.3),
    (0.66, 0.6),
    (0.66, 0.28),
    (0.34, 0.62),
];
/// Clearance in pixels between boxes of groups that share the screen.
const GROUP_GAP_PX: f64 = 12.0;
/// Fallback grid searched after the presets.
const SCAN_ROWS: usize = 9;
const SCAN_COLUMNS: [f64; 3] = [0.5, 0.3, 0.7];
/// Size factors tried in order when every slot collides at full size.
const SHRINK_STEPS: [f64; 4] = [1.0, 0.85, 0.7, 0.55];

#[derive(Clone, Copy, Debug, PartialEq)]
/// Fixed inputs of the layout pass.
pub struct LayoutParams {
    pub canvas: Canvas,
    /// Minimum distance in pixels between any glyph box and the canvas edge.
    pub margin: f64,
    pub base_font_size: f64,
}

impl LayoutParams {
    fn available_width(&self) -> f64 {
        (self.canvas.width_f64() - 2.0 * self.margin).max(MIN_FONT_PX)
    }

    fn available_height(&self) -> f64 {
        (self.canvas.height_f64() - 2.0 * self.margin).max(MIN_FONT_PX)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Cache key of one group layout.
pub struct LayoutKey {
    pub line: usize,
    /// Group position within the line.
    pub group: usize,
}

impl LayoutKey {
    pub fn of(group: &PhraseGroup) -> Self {
        Self {
            line: group.line,
            group: group.index_in_line,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Resolved on-canvas placement of one word.
pub struct WordPlacement {
    /// Index into the word metadata list.
    pub word: usize,
    /// Center of the word's box.
    pub center: Point,
    pub font_size: f64,
    /// Measured advance width at `font_size`.
    pub width: f64,
}

impl WordPlacement {
    /// Resting glyph box: advance width by font size, around `center`.
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.center, (self.width, self.font_size))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Placements for every word of a group, in group order.
pub struct GroupLayout {
    pub placements: SmallVec<[WordPlacement; MAX_GROUP_WORDS]>,
}

impl GroupLayout {
    pub fn placement_of(&self, word: usize) -> Option<&WordPlacement> {
        self.placements.iter().find(|p| p.word == word)
    }

    fn clear_of(&self, taken: &[Rect]) -> bool {
        self.placements.iter().all(|p| {
            let padded = p.rect().inflate(GROUP_GAP_PX, GROUP_GAP_PX);
            taken.iter().all(|r| padded.intersect(*r).area() <= 0.0)
        })
    }
}

pub type LayoutCache = BTreeMap<LayoutKey, GroupLayout>;

/// Screen time of a laid-out group and the boxes it holds meanwhile.
struct Occupied {
    from: f64,
    until: f64,
    boxes: SmallVec<[Rect; MAX_GROUP_WORDS]>,
}

/// Lay out every group once.
///
/// `typography_for` picks the typography in effect for a group (it may change per chapter).
/// `clears_at` is the time a group has fully left the screen (its end plus the exit tail). Groups
/// whose screen time overlaps never get intersecting boxes, unless even the smallest size step
/// finds no free slot.
#[tracing::instrument(skip_all, fields(groups = groups.len()))]
pub fn layout_all<'t>(
    groups: &[PhraseGroup],
    meta: &[WordMetaEntry],
    mut typography_for: impl FnMut(&PhraseGroup) -> &'t Typography,
    mut clears_at: impl FnMut(&PhraseGroup) -> f64,
    params: &LayoutParams,
    measure: &mut dyn TextMeasure,
) -> LayoutCache {
    let mut cache = LayoutCache::new();
    let mut occupied: Vec<Occupied> = Vec::with_capacity(groups.len());
    for g in groups {
        let until = clears_at(g).max(g.end);
        let taken: Vec<Rect> = occupied
            .iter()
            .filter(|o| o.from < until && g.start < o.until)
            .flat_map(|o| o.boxes.iter().copied())
            .collect();

        let typography = typography_for(g);
        let layout = place_clear_of(g, meta, typography, params, measure, &taken);
        occupied.push(Occupied {
            from: g.start,
            until,
            boxes: layout.placements.iter().map(WordPlacement::rect).collect(),
        });
        cache.insert(LayoutKey::of(g), layout);
    }
    cache
}

/// Place one group's words in its preferred slot at full size.
///
/// A single word sits at the canvas center. Otherwise the anchor goes to a preset picked by the
/// group's sequence number and the remaining words share one baseline below it. Everything is
/// shrunk to fit and clamped inside the margin.
pub fn layout_group(
    group: &PhraseGroup,
    meta: &[WordMetaEntry],
    typography: &Typography,
    params: &LayoutParams,
    measure: &mut dyn TextMeasure,
) -> GroupLayout {
    place_clear_of(group, meta, typography, params, measure, &[])
}

/// Candidate anchor points in preference order.
///
/// The presets come first, then a coarse scan of the canvas for when the presets are taken.
fn slots(group: &PhraseGroup, params: &LayoutParams) -> Vec<Point> {
    let n = ANCHOR_PRESETS.len();
    let presets = (0..n).map(|k| {
        let (rx, ry) = ANCHOR_PRESETS[(group.sequence + k) % n];
        params.canvas.at_ratio(rx, ry)
    });
    let scan = (1..=SCAN_ROWS).flat_map(|row| {
        let ry = row as f64 / (SCAN_ROWS + 1) as f64;
        SCAN_COLUMNS
            .iter()
            .map(move |&rx| params.canvas.at_ratio(rx, ry))
    });
    let center = (group.words.len() == 1).then(|| params.canvas.center());
    center.into_iter().chain(presets).chain(scan).collect()
}

/// First slot, at the largest size step, whose boxes keep clear of `taken`.
fn place_clear_of(
    group: &PhraseGroup,
    meta: &[WordMetaEntry],
    typography: &Typography,
    params: &LayoutParams,
    measure: &mut dyn TextMeasure,
    taken: &[Rect],
) -> GroupLayout {
    let slots = slots(group, params);
    let mut last = GroupLayout::default();
    for shrink in SHRINK_STEPS {
        for &slot in &slots {
            last = place_at(group, meta, typography, params, measure, slot, shrink);
            if last.clear_of(taken) {
                return last;
            }
        }
    }
    tracing::debug!(
        line = group.line,
        group = group.index_in_line,
        "no free slot, group overlaps one on screen"
    );
    last
}

fn place_at(
    group: &PhraseGroup,
    meta: &[WordMetaEntry],
    typography: &Typography,
    params: &LayoutParams,
    measure: &mut dyn TextMeasure,
    slot: Point,
    shrink: f64,
) -> GroupLayout {
    let base = params.base_font_size * typography.size_scale * shrink;
    let mut placements = SmallVec::new();

    if let [only] = group.words.as_slice() {
        let w = &meta[*only];
        let scale = if lexicon::is_filler(&w.key) {
            SINGLE_FILLER_SCALE
        } else {
            SINGLE_SCALE
        };
        let (font_size, width) = fit(&w.text, base * scale, typography, params, measure);
        let center = clamp_center(slot, width, font_size, params);
        placements.push(WordPlacement {
            word: *only,
            center,
            font_size,
            width,
        });
        return GroupLayout { placements };
    }

    let anchor_word = group.anchor_word();
    let anchor_meta = &meta[anchor_word];
    let emphasis = f64::from(anchor_meta.directive.emphasis.max(1) - 1);
    let anchor_size = base * ANCHOR_SCALE * (1.0 + ANCHOR_EMPHASIS_STEP * emphasis);
    let (anchor_size, anchor_width) =
        fit(&anchor_meta.text, anchor_size, typography, params, measure);
    let anchor_center = clamp_center(slot, anchor_width, anchor_size, params);

    let support: SmallVec<[usize; MAX_GROUP_WORDS]> = group
        .words
        .iter()
        .copied()
        .filter(|&w| w != anchor_word)
        .collect();
    let mut support_size = base * SUPPORT_SCALE;
    let mut widths = measure_row(&support, meta, support_size, typography, measure);
    let mut space = measure.text_width(" ", support_size, typography);
    let row_width = |widths: &[f64], space: f64| {
        widths.iter().sum::<f64>() + space * widths.len().saturating_sub(1) as f64
    };
    let total = row_width(&widths[..], space);
    if total > params.available_width() {
        support_size = (support_size * params.available_width() / total).max(MIN_FONT_PX);
        widths = measure_row(&support, meta, support_size, typography, measure);
        space = measure.text_width(" ", support_size, typography);
    }
    let total = row_width(&widths[..], space);

    let baseline_y = anchor_center.y + 0.5 * anchor_size + (0.5 + SUPPORT_GAP) * support_size;
    let row_center = clamp_center(
        Point::new(anchor_center.x, baseline_y),
        total,
        support_size,
        params,
    );

    let mut x = row_center.x - 0.5 * total;
    let mut row = widths.iter().zip(&support).map(|(&width, &word)| {
        let center = Point::new(x + 0.5 * width, row_center.y);
        x += width + space;
        WordPlacement {
            word,
            center: clamp_center(center, width, support_size, params),
            font_size: support_size,
            width,
        }
    });

    for &w in &group.words {
        if w == anchor_word {
            placements.push(WordPlacement {
                word: w,
                center: anchor_center,
                font_size: anchor_size,
                width: anchor_width,
            });
        } else if let Some(p) = row.next() {
            placements.push(p);
        }
    }
    GroupLayout { placements }
}

fn measure_row(
    words: &[usize],
    meta: &[WordMetaEntry],
    font_size: f64,
    typography: &Typography,
    measure: &mut dyn TextMeasure,
) -> SmallVec<[f64; MAX_GROUP_WORDS]> {
    words
        .iter()
        .map(|&w| measure.text_width(&meta[w].text, font_size, typography))
        .collect()
}

/// Shrink `font_size` until `text` fits the available box; returns `(font_size, width)`.
fn fit(
    text: &str,
    font_size: f64,
    typography: &Typography,
    params: &LayoutParams,
    measure: &mut dyn TextMeasure,
) -> (f64, f64) {
    let mut size = font_size
        .min(params.available_height())
        .max(MIN_FONT_PX);
    let mut width = measure.text_width(text, size, typography);
    let avail = params.available_width();
    if width > avail {
        size = (size * avail / width).max(MIN_FONT_PX);
        width = measure.text_width(text, size, typography).min(avail);
    }
    (size, width)
}

/// Keep a `width` x `height` box centered at `p` inside the margin.
fn clamp_center(p: Point, width: f64, height: f64, params: &LayoutParams) -> Point {
    let clamp_axis = |v: f64, extent: f64, size: f64| {
        let lo = params.margin + 0.5 * size;
        let hi = extent - params.margin - 0.5 * size;
        if lo > hi {
            0.5 * extent
        } else {
            v.clamp(lo, hi)
        }
    };
    Point::new(
        clamp_axis(p.x, params.canvas.width_f64(), width),
        clamp_axis(p.y, params.canvas.height_f64(), height),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
