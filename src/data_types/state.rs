use serde::{Deserialize, Serialize};
use std::fmt;

use super::series::{SiteKey, Timestamp};

/// Identifier of one chart instance on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct InstanceId(pub u32);

/// Named sub-view of a chart instance, each with its own geometry policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    Main,
    /// Overview chart carrying the brush ("panner").
    Brush,
    Lithology,
    Construction,
}

impl ChartType {
    pub const ALL: [ChartType; 4] = [
        ChartType::Main,
        ChartType::Brush,
        ChartType::Lithology,
        ChartType::Construction,
    ];

    pub fn is_well_diagram(self) -> bool {
        matches!(self, ChartType::Lithology | ChartType::Construction)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartType::Main => "main",
            ChartType::Brush => "brush",
            ChartType::Lithology => "lithology",
            ChartType::Construction => "construction",
        };
        f.write_str(name)
    }
}

/// A chart instance and the site it displays.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartOptions {
    pub id: InstanceId,
    pub site_key: SiteKey,
}

impl ChartOptions {
    pub fn new(id: InstanceId, site_key: SiteKey) -> Self {
        Self { id, site_key }
    }
}

/// Displayed time sub-range, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub start: f64,
    pub end: f64,
}

impl Viewport {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// Lifecycle of a service request. Only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Started,
    Done,
}

/// Derived point of the water-level chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date_time: Timestamp,
    pub value: f64,
    pub approved: bool,
}
