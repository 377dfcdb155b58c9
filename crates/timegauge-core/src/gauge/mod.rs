mod boundary;
mod interval;
mod render;

pub use boundary::DayBoundary;
pub use interval::{DurationParts, TimeGauge};
pub use render::Directive;
