mod cycle;
mod scheduler;
mod target;

pub use cycle::{CycleReport, Monitor};
pub use scheduler::MonitorLoop;
pub use target::{Target, TargetKey};
