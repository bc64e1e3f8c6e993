//! Splitting of chart points into continuous line segments.
//!
//! A segment ends where the approval class changes or where two consecutive
//! points are further apart than the gap threshold.

use serde::{Deserialize, Serialize};

use crate::data_types::ChartPoint;

/// Longest time gap (ms) a line is drawn across: two years.
pub const MAX_LINE_POINT_GAP: i64 = 1000 * 60 * 60 * 24 * 365 * 2;

/// Approval class flags of a segment. Within a segment exactly one is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentClasses {
    pub approved: bool,
    pub provisional: bool,
}

impl SegmentClasses {
    pub fn of(point: &ChartPoint) -> Self {
        Self {
            approved: point.approved,
            provisional: !point.approved,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineSegment {
    pub classes: SegmentClasses,
    pub points: Vec<ChartPoint>,
}

/// Splits points with the default two-year gap threshold.
pub fn line_segments(points: &[ChartPoint]) -> Vec<LineSegment> {
    line_segments_with_gap(points, MAX_LINE_POINT_GAP)
}

/// Single forward pass: a point either extends the last segment or opens a new one.
pub fn line_segments_with_gap(points: &[ChartPoint], max_gap: i64) -> Vec<LineSegment> {
    let mut segments: Vec<LineSegment> = Vec::new();

    for point in points {
        let classes = SegmentClasses::of(point);
        let extends_last = segments.last().is_some_and(|segment| {
            segment.classes == classes
                && segment
                    .points
                    .last()
                    .is_some_and(|last| point.date_time - last.date_time <= max_gap)
        });

        match segments.last_mut() {
            Some(segment) if extends_last => segment.points.push(*point),
            _ => segments.push(LineSegment {
                classes,
                points: vec![*point],
            }),
        }
    }

    segments
}
