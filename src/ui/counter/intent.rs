use chrono::NaiveTime;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    /// Increment and record an entry stamped `at`.
    Tap { at: NaiveTime },
    /// Ask to decrement. Ignored unless the count is positive.
    RequestMinus,
    /// Ask to reset count and history.
    RequestClear,
    /// Apply whatever the open dialog asked for.
    Confirm,
    Dismiss,
    ScrollUp,
    ScrollDown,
}

impl Intent for CounterIntent {}
