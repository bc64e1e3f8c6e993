use serde::{Deserialize, Serialize};

/// One lithology interval of a well log. Depths are below land surface.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LithologyEntry {
    pub depth_start: f64,
    pub depth_end: f64,
    pub material_codes: Vec<String>,
    pub colors: Vec<String>,
    pub title: String,
}

/// A casing or a screen of the well construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstructionItem {
    pub depth_start: f64,
    pub depth_end: f64,
    pub diameter: f64,
    pub id: String,
}

pub type Casing = ConstructionItem;
pub type Screen = ConstructionItem;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WellElevation {
    pub scheme: String,
    pub unit: String,
    pub value: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WellLog {
    pub entries: Vec<LithologyEntry>,
    pub casings: Vec<Casing>,
    pub screens: Vec<Screen>,
    pub elevation: WellElevation,
}

impl WellLog {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.casings.is_empty() && self.screens.is_empty()
    }

    /// `[min depth_start, max depth_end]` over the lithology entries, `[0, 0]` when empty.
    pub fn extent_y(&self) -> (f64, f64) {
        if self.entries.is_empty() {
            return (0.0, 0.0);
        }
        let min = self
            .entries
            .iter()
            .map(|e| e.depth_start)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .entries
            .iter()
            .map(|e| e.depth_end)
            .fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }

    /// Deepest point reached by any casing or screen.
    pub fn construction_depth(&self) -> Option<f64> {
        self.casings
            .iter()
            .chain(self.screens.iter())
            .map(|item| item.depth_start.max(item.depth_end))
            .fold(None, |acc: Option<f64>, d| Some(acc.map_or(d, |a| a.max(d))))
    }
}
