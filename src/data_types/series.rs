use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds since the Unix epoch (UTC).
pub type Timestamp = i64;

/// Composite site identifier, rendered as `agency:site`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SiteKey {
    pub agency_code: String,
    pub site_id: String,
}

impl SiteKey {
    pub fn new(agency_code: impl Into<String>, site_id: impl Into<String>) -> Self {
        Self {
            agency_code: agency_code.into(),
            site_id: site_id.into(),
        }
    }
}

impl fmt::Display for SiteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.agency_code, self.site_id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Approved,
    #[default]
    Provisional,
}

/// One raw water-level measurement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: Timestamp,
    /// Depth of the water level below the elevation datum.
    pub value: f64,
    pub qualifier: ApprovalStatus,
    pub unit: String,
}

impl Sample {
    pub fn new(time: Timestamp, value: f64, qualifier: ApprovalStatus, unit: impl Into<String>) -> Self {
        Self {
            time,
            value,
            qualifier,
            unit: unit.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ElevationReference {
    pub elevation: f64,
    pub datum: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub message: String,
}

/// Water-level samples of a site, replaced wholesale on every fetch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WaterLevelSeries {
    pub samples: Vec<Sample>,
    pub elevation_reference: ElevationReference,
    #[serde(default)]
    pub error: Option<ErrorInfo>,
}

impl WaterLevelSeries {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self {
            samples,
            ..Default::default()
        }
    }

    /// Error-flagged empty series, stored when a fetch fails.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(ErrorInfo {
                message: message.into(),
            }),
            ..Default::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
