use crate::model::{Counter, History};
use crate::store::Snapshot;
use crate::ui::mvi::UiState;

/// Pending confirmation. Only one can be open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmDialog {
    #[default]
    Hidden,
    ReduceCount,
    ClearAll,
}

impl ConfirmDialog {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Hidden => "",
            Self::ReduceCount => "Reduce Count",
            Self::ClearAll => "Clear all",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: Counter,
    pub history: History,
    pub dialog: ConfirmDialog,
    /// Index of the first visible history row.
    pub scroll_offset: usize,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            count: snapshot.count,
            history: snapshot.history,
            ..Self::default()
        }
    }

    /// The persisted part of the state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            count: self.count,
            history: self.history.clone(),
        }
    }

    /// Whether the persisted part differs from `other`.
    pub fn snapshot_differs(&self, other: &Self) -> bool {
        self.count != other.count || self.history != other.history
    }

    /// Minus is offered only while the count is positive.
    pub fn minus_offered(&self) -> bool {
        self.count.can_decrement()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_and_hidden() {
        let state = CounterState::default();
        assert_eq!(state.count.value(), 0);
        assert!(state.history.is_empty());
        assert!(!state.dialog.is_visible());
        assert!(!state.minus_offered());
    }

    #[test]
    fn view_fields_do_not_affect_snapshot() {
        let a = CounterState::default();
        let b = CounterState {
            dialog: ConfirmDialog::ClearAll,
            scroll_offset: 3,
            ..CounterState::default()
        };
        assert!(!a.snapshot_differs(&b));
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
