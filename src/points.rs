//! Time-series transforms from raw samples to chart points and value domains.

use crate::data_types::{ApprovalStatus, ChartPoint, Sample, Timestamp, WaterLevelSeries};
use crate::gaps::SegmentClasses;

/// A point located by [`nearest_point`] together with its position in the sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestPoint {
    pub datum: ChartPoint,
    pub index: usize,
}

/// Converts the samples of a series into chart points sorted by time.
///
/// The sort is stable: samples sharing a timestamp keep their input order.
pub fn chart_points(series: &WaterLevelSeries) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = series.samples.iter().map(to_chart_point).collect();
    points.sort_by_key(|p| p.date_time);
    points
}

fn to_chart_point(sample: &Sample) -> ChartPoint {
    ChartPoint {
        date_time: sample.time,
        value: sample.value,
        approved: sample.qualifier == ApprovalStatus::Approved,
    }
}

/// Time extent of an ascending point sequence.
pub fn domain_x(points: &[ChartPoint]) -> Option<(Timestamp, Timestamp)> {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => Some((first.date_time, last.date_time)),
        _ => None,
    }
}

/// Raw value extent, ignoring non-finite values.
pub fn domain_y(points: &[ChartPoint]) -> Option<(f64, f64)> {
    points
        .iter()
        .map(|p| p.value)
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((f64::min(min, v), f64::max(max, v))),
        })
}

/// Value extent widened by `padding` times its span on both sides.
///
/// The lower bound is floored at zero when every raw value is non-negative.
/// Empty input yields `(0, 0)`.
pub fn padded_domain_y(points: &[ChartPoint], padding: f64) -> (f64, f64) {
    let Some((min, max)) = domain_y(points) else {
        return (0.0, 0.0);
    };
    let pad = padding * (max - min);
    let lower = min - pad;
    let upper = max + pad;
    if min >= 0.0 {
        (lower.max(0.0), upper)
    } else {
        (lower, upper)
    }
}

/// Point closest in time to `time`; on a tie the later point wins.
pub fn nearest_point(points: &[ChartPoint], time: f64) -> Option<NearestPoint> {
    if points.is_empty() {
        return None;
    }

    // Bisect left, never below 1, so that `index - 1` is always a valid left neighbour.
    let mut lo = 1;
    let mut hi = points.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if (points[mid].date_time as f64) < time {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    let left = lo - 1;
    let index = match points.get(lo) {
        Some(right) => {
            let to_left = time - points[left].date_time as f64;
            let to_right = right.date_time as f64 - time;
            if to_left >= to_right {
                lo
            } else {
                left
            }
        }
        None => left,
    };

    Some(NearestPoint {
        datum: points[index],
        index,
    })
}

/// Which approval classes occur in the points, used for the legend.
pub fn active_classes(points: &[ChartPoint]) -> SegmentClasses {
    SegmentClasses {
        approved: points.iter().any(|p| p.approved),
        provisional: points.iter().any(|p| !p.approved),
    }
}

/// Unit of the first sample of the series.
pub fn series_unit(series: &WaterLevelSeries) -> Option<String> {
    series.samples.first().map(|s| s.unit.clone())
}
