//! Time sources and fixed-rate tick pacing.

pub mod clock;
pub mod scheduler;

pub use clock::{Clock, ManualClock, SystemClock};
pub use scheduler::TickScheduler;
