// Domain models (ported from the shared JS component)

mod event;
mod gauges;

pub use event::{EventKind, MetricEvent, Stat};
pub use gauges::{DerivedGauges, DiskGauge, Severity};
