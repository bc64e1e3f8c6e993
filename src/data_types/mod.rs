pub mod geometry;
pub mod series;
pub mod state;
pub mod well_log;

pub use geometry::*;
pub use series::*;
pub use state::*;
pub use well_log::*;
