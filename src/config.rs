use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

/// Tunable constants of the layout and segmentation pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Largest time gap (ms) bridged by a single line segment.
    pub gap_threshold_ms: i64,
    pub padding: f64,
    pub focus_circle_radius: f64,
    /// Share of the view box height given to the main chart; the brush gets the rest.
    pub main_height_ratio: f64,
    /// Fraction of the value span added on each side of the y domain.
    pub domain_padding: f64,
    /// Height / width ratio of the lithology and construction diagrams.
    pub well_aspect_ratio: f64,
    pub tick_count_x: usize,
    pub tick_count_y: usize,
    pub min_zoom_scale: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            gap_threshold_ms: crate::gaps::MAX_LINE_POINT_GAP,
            padding: crate::layout::PADDING,
            focus_circle_radius: crate::layout::FOCUS_CIRCLE_RADIUS,
            main_height_ratio: 0.8,
            domain_padding: 0.2,
            well_aspect_ratio: 4.0,
            tick_count_x: 5,
            tick_count_y: 5,
            min_zoom_scale: 1.0,
        }
    }
}

impl ChartConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).wrap_err("failed to parse chart configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize chart configuration")
    }

    fn validate(&self) -> Result<()> {
        if self.gap_threshold_ms <= 0 {
            eyre::bail!("gap_threshold_ms must be positive, got {}", self.gap_threshold_ms);
        }
        if !(0.0..=1.0).contains(&self.main_height_ratio) {
            eyre::bail!(
                "main_height_ratio must lie in [0, 1], got {}",
                self.main_height_ratio
            );
        }
        if !self.domain_padding.is_finite() || self.domain_padding < 0.0 {
            eyre::bail!("domain_padding must be a non-negative number");
        }
        if !self.well_aspect_ratio.is_finite() || self.well_aspect_ratio <= 0.0 {
            eyre::bail!("well_aspect_ratio must be positive, got {}", self.well_aspect_ratio);
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            eyre::bail!("padding must be a non-negative number");
        }
        if !self.focus_circle_radius.is_finite() || self.focus_circle_radius < 0.0 {
            eyre::bail!("focus_circle_radius must be a non-negative number");
        }
        if !self.min_zoom_scale.is_finite() || self.min_zoom_scale <= 0.0 {
            eyre::bail!("min_zoom_scale must be positive");
        }
        Ok(())
    }
}
