//! groundwater_chart: state, selector and interaction engine for groundwater
//! hydrographs and well diagrams.

pub mod binding;
pub mod config;
pub mod cursor;
pub mod data_types;
pub mod error;
pub mod gaps;
pub mod layout;
pub mod memo;
pub mod navigator;
pub mod points;
pub mod scales;
pub mod selectors;
pub mod services;
pub mod store;
pub mod transform;
pub mod utils;
pub mod view_controller;

pub use binding::{BindingId, Bindings};
pub use config::ChartConfig;
pub use cursor::CursorTracker;
pub use data_types::{ChartOptions, ChartPoint, ChartType, InstanceId, SiteKey, Viewport};
pub use error::FetchError;
pub use gaps::{LineSegment, SegmentClasses};
pub use navigator::{BrushZoomController, Origin, Widget};
pub use scales::LinearScale;
pub use selectors::Selectors;
pub use services::DataService;
pub use store::{Action, State, Store};
pub use transform::PlotTransform;
pub use view_controller::{ViewController, ZoomTransform};
