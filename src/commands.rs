//! Headless operations behind the CLI subcommands.
//!
//! Each one drives the same session and reducer as the interactive UI, so
//! confirmation rules and persistence behave identically.

use std::io::Write;
use thiserror::Error;

use crate::clipboard::ClipboardSink;
use crate::model::{Clock, CopyFormat};
use crate::session::CounterSession;
use crate::ui::counter::CounterIntent;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Refusing to {action} without --yes")]
    NotConfirmed { action: &'static str },

    #[error("Count is {count}; nothing to subtract")]
    NothingToSubtract { count: i64 },

    #[error(transparent)]
    Store(#[from] crate::store::StoreError),

    #[error(transparent)]
    Clipboard(#[from] crate::clipboard::ClipboardError),

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub fn tap(
    session: &mut CounterSession,
    clock: &dyn Clock,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let at = clock.now();
    let state = session.dispatch(CounterIntent::Tap { at })?;
    if let Some(entry) = state.history.entries().first() {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}

pub fn minus(
    session: &mut CounterSession,
    confirmed: bool,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let state = session.state();
    if !state.minus_offered() {
        return Err(CommandError::NothingToSubtract {
            count: state.count.value(),
        });
    }
    if !confirmed {
        return Err(CommandError::NotConfirmed { action: "subtract" });
    }

    session.dispatch(CounterIntent::RequestMinus)?;
    let state = session.dispatch(CounterIntent::Confirm)?;
    writeln!(out, "{}", state.count)?;
    Ok(())
}

pub fn clear(
    session: &mut CounterSession,
    confirmed: bool,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    if !confirmed {
        return Err(CommandError::NotConfirmed { action: "clear" });
    }

    session.dispatch(CounterIntent::RequestClear)?;
    session.dispatch(CounterIntent::Confirm)?;
    writeln!(out, "Cleared")?;
    Ok(())
}

pub fn show(session: &CounterSession, json: bool, out: &mut impl Write) -> Result<(), CommandError> {
    let state = session.state();
    if json {
        writeln!(out, "{}", serde_json::to_string(&state.snapshot())?)?;
        return Ok(());
    }

    writeln!(out, "Count: {}", state.count)?;
    for entry in state.history.iter() {
        writeln!(out, "  {}", entry)?;
    }
    Ok(())
}

pub fn copy(
    session: &CounterSession,
    clipboard: &mut dyn ClipboardSink,
    format: CopyFormat,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let history = &session.state().history;
    clipboard.set_text(&history.render(format))?;
    writeln!(out, "Copied {} entries", history.len())?;
    Ok(())
}
