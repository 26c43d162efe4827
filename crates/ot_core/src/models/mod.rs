pub mod player;
pub mod report;

pub use player::{PlayerProfile, Surface, SurfaceStats};
pub use report::{ExperimentReport, SweepPoint};
