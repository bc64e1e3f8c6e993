use groundwater_chart::data_types::{ApprovalStatus, ChartPoint, Sample, WaterLevelSeries};
use groundwater_chart::points::{
    active_classes, chart_points, domain_x, domain_y, nearest_point, padded_domain_y, series_unit,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const JAN_1_2010: i64 = 1_262_304_000_000;
const DAY: i64 = 86_400_000;

fn sample(time: i64, value: f64, approved: bool) -> Sample {
    let qualifier = if approved {
        ApprovalStatus::Approved
    } else {
        ApprovalStatus::Provisional
    };
    Sample::new(time, value, qualifier, "ft")
}

fn point(date_time: i64, value: f64) -> ChartPoint {
    ChartPoint {
        date_time,
        value,
        approved: true,
    }
}

#[test]
fn test_two_day_series() {
    let series = WaterLevelSeries::new(vec![
        sample(JAN_1_2010, 10.0, true),
        sample(JAN_1_2010 + DAY, 11.0, true),
    ]);
    let points = chart_points(&series);
    assert_eq!(
        points,
        vec![
            ChartPoint { date_time: JAN_1_2010, value: 10.0, approved: true },
            ChartPoint { date_time: JAN_1_2010 + DAY, value: 11.0, approved: true },
        ]
    );
}

#[test]
fn test_chart_points_sorted_and_stable() {
    // Several samples share each timestamp; their values record the input order.
    let mut samples: Vec<Sample> = (0..200)
        .map(|i| sample(JAN_1_2010 + (i % 20) * DAY, i as f64, i % 3 == 0))
        .collect();
    let mut rng = StdRng::seed_from_u64(42);
    samples.shuffle(&mut rng);

    let points = chart_points(&WaterLevelSeries::new(samples.clone()));
    assert_eq!(points.len(), samples.len());
    assert!(points.windows(2).all(|w| w[0].date_time <= w[1].date_time));

    for day in 0..20 {
        let time = JAN_1_2010 + day * DAY;
        let input: Vec<f64> = samples.iter().filter(|s| s.time == time).map(|s| s.value).collect();
        let output: Vec<f64> = points.iter().filter(|p| p.date_time == time).map(|p| p.value).collect();
        assert_eq!(input, output, "equal timestamps must keep their input order");
    }
}

#[test]
fn test_provisional_qualifier() {
    let series = WaterLevelSeries::new(vec![sample(JAN_1_2010, 3.0, false)]);
    assert!(!chart_points(&series)[0].approved);
}

#[test]
fn test_domain_x() {
    assert_eq!(domain_x(&[]), None);
    let points = [point(5, 1.0), point(9, 2.0), point(30, 0.0)];
    assert_eq!(domain_x(&points), Some((5, 30)));
}

#[test]
fn test_domain_y_is_raw_extent() {
    assert_eq!(domain_y(&[]), None);
    let points = [point(0, 15.0), point(1, 10.0), point(2, 20.0)];
    assert_eq!(domain_y(&points), Some((10.0, 20.0)));
}

#[test]
fn test_padded_domain_y() {
    let points = [point(0, 10.0), point(1, 15.0), point(2, 20.0)];
    assert_eq!(padded_domain_y(&points, 0.2), (8.0, 22.0));
}

#[test]
fn test_padded_domain_y_floors_at_zero() {
    let points = [point(0, 1.0), point(1, 101.0)];
    assert_eq!(padded_domain_y(&points, 0.2), (0.0, 121.0));
}

#[test]
fn test_padded_domain_y_negative_values_are_not_floored() {
    let all_negative = [point(0, -20.0), point(1, -10.0)];
    assert_eq!(padded_domain_y(&all_negative, 0.2), (-22.0, -8.0));

    let mixed = [point(0, -5.0), point(1, 5.0)];
    assert_eq!(padded_domain_y(&mixed, 0.2), (-7.0, 7.0));
}

#[test]
fn test_padded_domain_y_empty() {
    assert_eq!(padded_domain_y(&[], 0.2), (0.0, 0.0));
}

#[test]
fn test_nearest_point_empty() {
    assert!(nearest_point(&[], 100.0).is_none());
}

#[test]
fn test_nearest_point_single() {
    let points = [point(100, 1.0)];
    for time in [-1e12, 0.0, 100.0, 1e12] {
        let nearest = nearest_point(&points, time).unwrap();
        assert_eq!(nearest.index, 0);
        assert_eq!(nearest.datum, points[0]);
    }
}

#[test]
fn test_nearest_point_tie_picks_later() {
    let points = [point(0, 1.0), point(10, 2.0)];
    assert_eq!(nearest_point(&points, 5.0).unwrap().index, 1);
}

#[test]
fn test_nearest_point_neighbours() {
    let points = [point(0, 1.0), point(10, 2.0), point(20, 3.0)];
    assert_eq!(nearest_point(&points, 3.0).unwrap().index, 0);
    assert_eq!(nearest_point(&points, 7.0).unwrap().index, 1);
    assert_eq!(nearest_point(&points, 10.0).unwrap().index, 1);
    assert_eq!(nearest_point(&points, -5.0).unwrap().index, 0);
    assert_eq!(nearest_point(&points, 25.0).unwrap().index, 2);
}

#[test]
fn test_active_classes() {
    let approved_only = [point(0, 1.0)];
    let classes = active_classes(&approved_only);
    assert!(classes.approved);
    assert!(!classes.provisional);

    let classes = active_classes(&[]);
    assert!(!classes.approved && !classes.provisional);
}

#[test]
fn test_series_unit() {
    assert_eq!(series_unit(&WaterLevelSeries::default()), None);
    let series = WaterLevelSeries::new(vec![sample(0, 1.0, true)]);
    assert_eq!(series_unit(&series).as_deref(), Some("ft"));
}
