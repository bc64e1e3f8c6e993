use serde::{Deserialize, Serialize};

use crate::scales::LinearScale;

/// Horizontal zoom state of the main chart: a uniform scale `k` followed by a
/// translation `x`, both in pixels. A point `p` is displayed at `p * k + x`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ZoomTransform {
    pub const fn identity() -> Self {
        Self { k: 1.0, x: 0.0 }
    }

    pub fn new(k: f64, x: f64) -> Self {
        Self { k, x }
    }

    pub fn is_identity(&self) -> bool {
        self.k == 1.0 && self.x == 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.k.is_finite() && self.x.is_finite() && self.k > 0.0
    }

    /// Multiplies the scale, keeping the translation.
    pub fn scale(self, k: f64) -> Self {
        Self {
            k: self.k * k,
            x: self.x,
        }
    }

    /// Translates by `tx` in the untransformed coordinate system.
    pub fn translate(self, tx: f64) -> Self {
        Self {
            k: self.k,
            x: self.x + self.k * tx,
        }
    }

    pub fn apply_x(&self, x: f64) -> f64 {
        x * self.k + self.x
    }

    pub fn invert_x(&self, x: f64) -> f64 {
        (x - self.x) / self.k
    }

    /// The transform that stretches the pixel range `selection` over `width`.
    /// `None` for an empty or inverted selection.
    pub fn scaled_to_selection(selection: (f64, f64), width: f64) -> Option<Self> {
        let span = selection.1 - selection.0;
        if span.is_nan() || span <= 0.0 || !width.is_finite() {
            return None;
        }
        Some(Self::identity().scale(width / span).translate(-selection.0))
    }

    /// Domain shown through this transform by a chart drawn with `scale`.
    pub fn rescale(&self, scale: &LinearScale) -> (f64, f64) {
        let (r0, r1) = scale.range();
        (
            scale.invert(self.invert_x(r0)),
            scale.invert(self.invert_x(r1)),
        )
    }

    /// Keeps the viewport `extent` inside `translate_extent` and the scale at
    /// or above `min_scale`.
    pub fn constrain(self, extent: (f64, f64), translate_extent: (f64, f64), min_scale: f64) -> Self {
        let clamped = Self {
            k: self.k.max(min_scale),
            x: self.x,
        };
        let dx0 = clamped.invert_x(extent.0) - translate_extent.0;
        let dx1 = clamped.invert_x(extent.1) - translate_extent.1;
        let shift = if dx1 > dx0 {
            (dx0 + dx1) / 2.0
        } else if dx0 < 0.0 {
            dx0
        } else {
            dx1.max(0.0)
        };
        clamped.translate(shift)
    }
}

/// Gesture math of the zoom widget, independent of any event source.
pub struct ViewController;

impl ViewController {
    /// Zoom factor for a wheel delta; a positive delta zooms out.
    pub fn compute_zoom_factor(delta: f64, sensitivity: f64) -> f64 {
        if sensitivity <= 0.0 {
            return 1.0;
        }
        let factor = 1.0 + delta.abs() / sensitivity;
        if delta > 0.0 {
            1.0 / factor
        } else {
            factor
        }
    }

    /// Scales around `pivot_px` so the content under the pivot stays put.
    pub fn zoom_at(transform: ZoomTransform, pivot_px: f64, factor: f64) -> ZoomTransform {
        let k = transform.k * factor;
        if !k.is_finite() || k <= 0.0 {
            return transform;
        }
        let anchor = transform.invert_x(pivot_px);
        ZoomTransform::new(k, pivot_px - anchor * k)
    }

    /// Drags the content by `delta_px`.
    pub fn pan(transform: ZoomTransform, delta_px: f64) -> ZoomTransform {
        ZoomTransform::new(transform.k, transform.x + delta_px)
    }
}
