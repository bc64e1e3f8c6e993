use std::sync::Arc;

use groundwater_chart::data_types::{
    ApprovalStatus, AxisBBox, ChartOptions, ChartType, ConstructionItem, ContainerSize, InstanceId,
    LithologyEntry, Sample, SiteKey, Viewport, WaterLevelSeries, WellLog,
};
use groundwater_chart::selectors::{ConstructionKind, Selectors};
use groundwater_chart::store::{Action, Store};

const JAN_1_2010: i64 = 1_262_304_000_000;
const DAY: i64 = 86_400_000;

fn options() -> ChartOptions {
    ChartOptions::new(InstanceId(1), SiteKey::new("USGS", "430406089232901"))
}

fn series() -> WaterLevelSeries {
    WaterLevelSeries::new(vec![
        Sample::new(JAN_1_2010 + 2 * DAY, 20.0, ApprovalStatus::Provisional, "ft"),
        Sample::new(JAN_1_2010, 10.0, ApprovalStatus::Approved, "ft"),
        Sample::new(JAN_1_2010 + DAY, 15.0, ApprovalStatus::Approved, "ft"),
    ])
}

fn well_log() -> WellLog {
    let entry = |start: f64, end: f64, title: &str| LithologyEntry {
        depth_start: start,
        depth_end: end,
        material_codes: vec![title.to_uppercase()],
        colors: vec!["#ccc".into()],
        title: title.into(),
    };
    let item = |start: f64, end: f64, diameter: f64, id: &str| ConstructionItem {
        depth_start: start,
        depth_end: end,
        diameter,
        id: id.into(),
    };
    WellLog {
        entries: vec![entry(0.0, 30.0, "sand"), entry(30.0, 50.0, "clay")],
        casings: vec![item(0.0, 30.0, 10.0, "casing-1")],
        screens: vec![item(30.0, 40.0, 5.0, "screen-1")],
        ..Default::default()
    }
}

fn store_with_data() -> Store {
    let mut store = Store::new();
    let options = options();
    store.dispatch(Action::SetSeries {
        site: options.site_key.clone(),
        series: Arc::new(series()),
    });
    store.dispatch(Action::SetWellLog {
        site: options.site_key.clone(),
        log: Arc::new(well_log()),
    });
    store.dispatch(Action::SetContainerSize {
        id: options.id,
        size: ContainerSize::new(500.0, 250.0),
    });
    store
}

#[test]
fn test_selectors_are_idempotent() {
    let store = store_with_data();
    let selectors = Selectors::default();
    let state = store.state();
    let options = options();

    for chart_type in ChartType::ALL {
        assert!(Arc::ptr_eq(
            &selectors.scale_x(&state, &options, chart_type),
            &selectors.scale_x(&state, &options, chart_type)
        ));
        assert!(Arc::ptr_eq(
            &selectors.scale_y(&state, &options, chart_type),
            &selectors.scale_y(&state, &options, chart_type)
        ));
        assert!(Arc::ptr_eq(
            &selectors.view_box(&state, options.id, chart_type),
            &selectors.view_box(&state, options.id, chart_type)
        ));
    }
    assert!(Arc::ptr_eq(
        &selectors.line_segments(&state, &options.site_key),
        &selectors.line_segments(&state, &options.site_key)
    ));
    assert!(Arc::ptr_eq(
        &selectors.cursor_tooltip(&state, &options),
        &selectors.cursor_tooltip(&state, &options)
    ));
}

#[test]
fn test_unrelated_change_keeps_derived_values() {
    let mut store = store_with_data();
    let selectors = Selectors::default();
    let options = options();

    let before = store.state();
    let points = selectors.chart_points(&before, &options.site_key);
    let scale = selectors.scale_x(&before, &options, ChartType::Main);

    store.dispatch(Action::SetCursor {
        id: options.id,
        cursor: Some(JAN_1_2010 as f64),
    });
    let after = store.state();
    assert!(Arc::ptr_eq(&points, &selectors.chart_points(&after, &options.site_key)));
    assert!(Arc::ptr_eq(&scale, &selectors.scale_x(&after, &options, ChartType::Main)));
    assert_eq!(selectors.chart_points_version(&options.site_key), 1);
    assert_eq!(selectors.scale_x_version(&options, ChartType::Main), 1);
}

#[test]
fn test_viewport_only_moves_main_chart() {
    let mut store = store_with_data();
    let selectors = Selectors::default();
    let options = options();

    let brush_before = selectors.scale_x(&store.state(), &options, ChartType::Brush);
    let start = (JAN_1_2010 + DAY / 2) as f64;
    let end = (JAN_1_2010 + DAY) as f64;
    store.dispatch(Action::SetViewport {
        id: options.id,
        viewport: Viewport::new(start, end),
    });
    let state = store.state();

    assert_eq!(selectors.scale_x(&state, &options, ChartType::Main).domain(), (start, end));
    let brush_after = selectors.scale_x(&state, &options, ChartType::Brush);
    assert!(Arc::ptr_eq(&brush_before, &brush_after));
    assert_eq!(
        brush_after.domain(),
        (JAN_1_2010 as f64, (JAN_1_2010 + 2 * DAY) as f64)
    );
}

#[test]
fn test_memoized_per_instance() {
    let mut store = store_with_data();
    let selectors = Selectors::default();
    let first = options();
    let second = ChartOptions::new(InstanceId(2), first.site_key.clone());
    store.dispatch(Action::SetContainerSize {
        id: second.id,
        size: ContainerSize::new(200.0, 100.0),
    });
    let state = store.state();

    let a = selectors.chart_position(&state, first.id, ChartType::Main);
    let b = selectors.chart_position(&state, second.id, ChartType::Main);
    assert_ne!(a.width, b.width);
    assert!(Arc::ptr_eq(&a, &selectors.chart_position(&state, first.id, ChartType::Main)));
    assert!(Arc::ptr_eq(&b, &selectors.chart_position(&state, second.id, ChartType::Main)));

    // The series is shared by both instances.
    assert!(Arc::ptr_eq(
        &selectors.domain_x(&state, &first, ChartType::Brush),
        &selectors.domain_x(&state, &first, ChartType::Brush)
    ));
    assert_eq!(
        *selectors.domain_x(&state, &first, ChartType::Brush),
        *selectors.domain_x(&state, &second, ChartType::Brush)
    );
}

#[test]
fn test_absent_data_yields_empty_records() {
    let store = Store::new();
    let selectors = Selectors::default();
    let state = store.state();
    let options = options();

    assert!(selectors.chart_points(&state, &options.site_key).is_empty());
    assert!(selectors.line_segments(&state, &options.site_key).is_empty());
    assert_eq!(*selectors.domain_x(&state, &options, ChartType::Main), (0.0, 0.0));
    assert_eq!(*selectors.domain_y(&state, &options, ChartType::Main), (0.0, 0.0));
    assert_eq!(
        selectors.scale_x(&state, &options, ChartType::Main).domain(),
        (-0.5, 0.5)
    );
    assert!(selectors.cursor_point(&state, &options, ChartType::Main).is_none());
    assert!(selectors.cursor_tooltip(&state, &options).is_none());
    assert!(selectors.lithology_rects(&state, &options, ChartType::Lithology).is_empty());
    assert!(selectors
        .construction_elements(&state, &options, ChartType::Construction)
        .is_empty());
    assert!(selectors
        .well_water_level(&state, &options, ChartType::Construction)
        .is_none());
    assert_eq!(*selectors.well_log_extent_y(&state, &options.site_key), (0.0, 0.0));
    assert_eq!(*selectors.series_unit(&state, &options.site_key), None);
}

#[test]
fn test_segments_and_legend() {
    let store = store_with_data();
    let selectors = Selectors::default();
    let state = store.state();
    let site = options().site_key;

    let segments = selectors.line_segments(&state, &site);
    assert_eq!(segments.len(), 2);
    assert!(segments[0].classes.approved);
    assert!(segments[1].classes.provisional);

    let classes = selectors.active_classes(&state, &site);
    assert!(classes.approved && classes.provisional);
    assert_eq!(selectors.series_unit(&state, &site).as_deref(), Some("ft"));
}

#[test]
fn test_domain_y_by_chart_type() {
    let store = store_with_data();
    let selectors = Selectors::default();
    let state = store.state();
    let options = options();

    assert_eq!(*selectors.domain_y(&state, &options, ChartType::Main), (8.0, 22.0));
    assert_eq!(*selectors.domain_y(&state, &options, ChartType::Brush), (8.0, 22.0));
    assert_eq!(*selectors.domain_y(&state, &options, ChartType::Lithology), (0.0, 50.0));
    assert_eq!(*selectors.well_log_extent_y(&state, &options.site_key), (0.0, 50.0));
}

#[test]
fn test_scales_are_chart_local() {
    let store = store_with_data();
    let selectors = Selectors::default();
    let state = store.state();
    let options = options();

    let position = selectors.chart_position(&state, options.id, ChartType::Main);
    let x = selectors.scale_x(&state, &options, ChartType::Main);
    let y = selectors.scale_y(&state, &options, ChartType::Main);
    assert_eq!(x.range(), (0.0, position.width));
    assert_eq!(y.range(), (position.height, 0.0));
    // Larger values plot higher.
    assert!(y.map(22.0) < y.map(8.0));
}

#[test]
fn test_lithology_rects() {
    let store = store_with_data();
    let selectors = Selectors::default();
    let state = store.state();
    let options = options();

    let position = selectors.chart_position(&state, options.id, ChartType::Lithology);
    let y = selectors.scale_y(&state, &options, ChartType::Lithology);
    let rects = selectors.lithology_rects(&state, &options, ChartType::Lithology);
    assert_eq!(rects.len(), 2);
    for rect in rects.iter() {
        assert_eq!(rect.rect.x, 0.0);
        assert_eq!(rect.rect.width, position.width);
        assert!(rect.rect.height >= 0.0);
        let expected = (y.map(rect.entry.depth_end) - y.map(rect.entry.depth_start)).abs();
        assert!((rect.rect.height - expected).abs() < 1e-9);
    }
    assert_eq!(rects[1].entry.title, "clay");
}

#[test]
fn test_construction_elements() {
    let store = store_with_data();
    let selectors = Selectors::default();
    let state = store.state();
    let options = options();

    let width = selectors
        .chart_position(&state, options.id, ChartType::Construction)
        .width;
    let elements = selectors.construction_elements(&state, &options, ChartType::Construction);
    assert_eq!(elements.len(), 2);

    let casing = &elements[0];
    assert_eq!(casing.kind, ConstructionKind::Casing);
    assert_eq!(casing.id, "casing-1");
    assert!((casing.rect.width - width).abs() < 1e-9);
    assert!(casing.rect.x.abs() < 1e-9);

    let screen = &elements[1];
    assert_eq!(screen.kind, ConstructionKind::Screen);
    assert!((screen.rect.width - width / 2.0).abs() < 1e-9);
    assert!((screen.rect.x - width / 4.0).abs() < 1e-9);
}

#[test]
fn test_well_water_level_follows_cursor() {
    let mut store = store_with_data();
    let selectors = Selectors::default();
    let options = options();

    // Without a cursor the latest point (20 ft) is used.
    let state = store.state();
    let y = selectors.scale_y(&state, &options, ChartType::Construction);
    let level = selectors
        .well_water_level(&state, &options, ChartType::Construction)
        .expect("water level");
    let expected = (y.map(20.0) - y.map(40.0)).abs();
    assert!((level.height - expected).abs() < 1e-9);

    store.dispatch(Action::SetCursor {
        id: options.id,
        cursor: Some((JAN_1_2010 + 1) as f64),
    });
    let state = store.state();
    let level = selectors
        .well_water_level(&state, &options, ChartType::Construction)
        .expect("water level");
    let expected = (y.map(10.0) - y.map(40.0)).abs();
    assert!((level.height - expected).abs() < 1e-9);
}

#[test]
fn test_cursor_point_defaults_to_latest() {
    let mut store = store_with_data();
    let selectors = Selectors::default();
    let options = options();

    let point = selectors.cursor_point(&store.state(), &options, ChartType::Main);
    assert_eq!(point.unwrap().index, 2);

    store.dispatch(Action::SetCursor {
        id: options.id,
        cursor: Some((JAN_1_2010 + DAY - 1000) as f64),
    });
    let point = selectors.cursor_point(&store.state(), &options, ChartType::Main);
    assert_eq!(point.unwrap().datum.value, 15.0);
}

#[test]
fn test_cursor_focus() {
    let mut store = store_with_data();
    let selectors = Selectors::default();
    let options = options();

    let focus = selectors.cursor_focus(&store.state(), &options, ChartType::Main);
    assert!(focus.line_x.is_none());
    assert!(focus.circle.is_some());

    let cursor = (JAN_1_2010 + DAY) as f64;
    store.dispatch(Action::SetCursor {
        id: options.id,
        cursor: Some(cursor),
    });
    let state = store.state();
    let x = selectors.scale_x(&state, &options, ChartType::Main);
    let y = selectors.scale_y(&state, &options, ChartType::Main);
    let focus = selectors.cursor_focus(&state, &options, ChartType::Main);
    assert_eq!(focus.line_x, Some(x.map(cursor)));
    assert_eq!(focus.circle, Some((x.map(cursor), y.map(15.0))));
}

#[test]
fn test_cursor_tooltip() {
    let store = store_with_data();
    let selectors = Selectors::default();
    let tooltip = selectors.cursor_tooltip(&store.state(), &options());
    assert_eq!(tooltip.as_deref(), Some("20 ft - 2010-01-03 00:00:00"));
}

#[test]
fn test_cursor_tooltip_without_value_part_for_zero() {
    let mut store = Store::new();
    store.dispatch(Action::SetSeries {
        site: options().site_key,
        series: Arc::new(WaterLevelSeries::new(vec![Sample::new(
            JAN_1_2010,
            0.0,
            ApprovalStatus::Approved,
            "ft",
        )])),
    });
    let selectors = Selectors::default();
    let tooltip = selectors.cursor_tooltip(&store.state(), &options());
    assert_eq!(tooltip.as_deref(), Some("2010-01-01 00:00:00"));
}

#[test]
fn test_visible_construction_ids_selector() {
    let mut store = store_with_data();
    let selectors = Selectors::default();
    let site = options().site_key;
    assert!(selectors.visible_construction_ids(&store.state(), &site).is_none());

    store.dispatch(Action::SetVisibleConstructionIds {
        site: site.clone(),
        ids: Some(vec!["screen-1".into()]),
    });
    let state = store.state();
    let ids = selectors.visible_construction_ids(&state, &site);
    assert_eq!(ids.as_deref().map(|ids| ids.len()), Some(1));
    assert!(Arc::ptr_eq(
        &ids.unwrap(),
        &selectors.visible_construction_ids(&state, &site).unwrap()
    ));
}

#[test]
fn test_axis_ticks() {
    let mut store = store_with_data();
    store.dispatch(Action::SetAxisBBox {
        id: options().id,
        bbox: AxisBBox::new(-30.0, 0.0, 30.0, 200.0),
    });
    let selectors = Selectors::default();
    let state = store.state();
    let options = options();

    let position = selectors.chart_position(&state, options.id, ChartType::Main);
    let y_ticks = selectors.axis_y_ticks(&state, &options, ChartType::Main);
    assert!(!y_ticks.is_empty());
    for tick in y_ticks.iter() {
        assert!(tick.position >= 0.0 && tick.position <= position.height);
        assert!(!tick.label.is_empty());
    }
    assert_eq!(y_ticks[0].label, "8");

    let x_ticks = selectors.axis_x_ticks(&state, &options, ChartType::Main);
    assert!(!x_ticks.is_empty());
    assert!(x_ticks.windows(2).all(|w| w[0].position < w[1].position));
    assert!(x_ticks.iter().all(|t| t.label.contains("Jan")));
}
