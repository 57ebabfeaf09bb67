//! Counter and history values.
//!
//! Everything here is plain data: operations return new values and never
//! touch storage or the terminal.

pub mod clock;
pub mod counter;
pub mod history;

pub use clock::{Clock, FixedClock, SystemClock};
pub use counter::Counter;
pub use history::{CopyFormat, History, HistoryEntry};
