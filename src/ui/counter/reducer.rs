use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::{ConfirmDialog, CounterState};
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // Dialogs are modal: only an answer gets through.
        if state.dialog.is_visible() {
            return match intent {
                CounterIntent::Confirm => apply_confirmation(state),
                CounterIntent::Dismiss => CounterState {
                    dialog: ConfirmDialog::Hidden,
                    ..state
                },
                _ => state,
            };
        }

        match intent {
            CounterIntent::Tap { at } => {
                let count = state.count.increment();
                let history = state.history.append(count, at);
                CounterState {
                    count,
                    history,
                    dialog: ConfirmDialog::Hidden,
                    scroll_offset: 0,
                }
            }
            CounterIntent::RequestMinus if state.minus_offered() => CounterState {
                dialog: ConfirmDialog::ReduceCount,
                ..state
            },
            CounterIntent::RequestMinus => state,
            CounterIntent::RequestClear => CounterState {
                dialog: ConfirmDialog::ClearAll,
                ..state
            },
            CounterIntent::Confirm | CounterIntent::Dismiss => state,
            CounterIntent::ScrollUp => CounterState {
                scroll_offset: state.scroll_offset.saturating_sub(1),
                ..state
            },
            CounterIntent::ScrollDown => {
                let max = state.history.len().saturating_sub(1);
                CounterState {
                    scroll_offset: (state.scroll_offset + 1).min(max),
                    ..state
                }
            }
        }
    }
}

fn apply_confirmation(state: CounterState) -> CounterState {
    match state.dialog {
        ConfirmDialog::Hidden => state,
        // History is unchanged by a decrement.
        ConfirmDialog::ReduceCount => CounterState {
            count: state.count.decrement(),
            dialog: ConfirmDialog::Hidden,
            ..state
        },
        ConfirmDialog::ClearAll => CounterState {
            count: state.count.reset(),
            history: state.history.clear(),
            dialog: ConfirmDialog::Hidden,
            scroll_offset: 0,
        },
    }
}
