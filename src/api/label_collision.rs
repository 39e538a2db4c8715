use serde::{Deserialize, Serialize};

use crate::core::Bounds;

use super::SlopeGeometry;

/// Label flags of one slope after collision elimination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelVisibility {
    pub has_left_label: bool,
    pub has_right_label: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LabelSide {
    Left,
    Right,
}

impl LabelVisibility {
    fn get(self, side: LabelSide) -> bool {
        match side {
            LabelSide::Left => self.has_left_label,
            LabelSide::Right => self.has_right_label,
        }
    }

    fn hide(&mut self, side: LabelSide) {
        match side {
            LabelSide::Left => self.has_left_label = false,
            LabelSide::Right => self.has_right_label = false,
        }
    }
}

fn label_bounds(slope: &SlopeGeometry, side: LabelSide) -> Bounds {
    match side {
        LabelSide::Left => slope.left_label_bounds,
        LabelSide::Right => slope.right_label_bounds,
    }
}

/// Whether `s1` may suppress `s2` when their labels on `side` overlap.
///
/// Focused slopes are never suppressed by unfocused ones, thinner slopes yield
/// to thicker ones, and on the right side a slope that already lost its left
/// label yields to one that kept it.
fn has_priority(
    s1: (&SlopeGeometry, LabelVisibility),
    s2: (&SlopeGeometry, LabelVisibility),
    side: LabelSide,
) -> bool {
    let (slope1, flags1) = s1;
    let (slope2, flags2) = s2;
    if !slope1.is_focused && slope2.is_focused {
        false
    } else if slope1.size < slope2.size {
        false
    } else {
        !(side == LabelSide::Right && !flags1.has_left_label && flags2.has_left_label)
    }
}

fn sweep(slopes: &[SlopeGeometry], visibility: &mut [LabelVisibility], side: LabelSide) {
    for i in 0..slopes.len() {
        for j in 0..slopes.len() {
            if i == j || !visibility[i].get(side) || !visibility[j].get(side) {
                continue;
            }
            if !has_priority((&slopes[i], visibility[i]), (&slopes[j], visibility[j]), side) {
                continue;
            }
            if label_bounds(&slopes[i], side).intersects(label_bounds(&slopes[j], side)) {
                visibility[j].hide(side);
            }
        }
    }
}

/// Decides which labels stay visible, left side first, then right side.
///
/// The input is not modified. Flags are updated while sweeping, so a label
/// that was already suppressed cannot suppress another one; on a full
/// priority tie the later slope loses.
#[must_use]
pub fn resolve_label_visibility(slopes: &[SlopeGeometry]) -> Vec<LabelVisibility> {
    let mut visibility: Vec<LabelVisibility> = slopes
        .iter()
        .map(|slope| LabelVisibility {
            has_left_label: slope.has_left_label,
            has_right_label: slope.has_right_label,
        })
        .collect();

    sweep(slopes, &mut visibility, LabelSide::Left);
    sweep(slopes, &mut visibility, LabelSide::Right);
    visibility
}

#[must_use]
pub fn apply_label_visibility(
    slopes: Vec<SlopeGeometry>,
    visibility: &[LabelVisibility],
) -> Vec<SlopeGeometry> {
    slopes
        .into_iter()
        .zip(visibility.iter().copied())
        .map(|(mut slope, flags)| {
            slope.has_left_label = flags.has_left_label;
            slope.has_right_label = flags.has_right_label;
            slope
        })
        .collect()
}

/// Orders slopes for drawing: thin first, the focused slope last (on top).
#[must_use]
pub fn sort_draw_order(mut slopes: Vec<SlopeGeometry>) -> Vec<SlopeGeometry> {
    slopes.sort_by(|a, b| a.size.total_cmp(&b.size));
    slopes.sort_by_key(|slope| slope.is_focused);
    slopes
}
