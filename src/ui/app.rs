use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::clipboard::ClipboardSink;
use crate::model::{Clock, CopyFormat};
use crate::session::CounterSession;
use crate::ui::counter::{CounterIntent, CounterState};
use crate::ui::input::InputAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line feedback shown under the history until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    shown_at: Instant,
}

pub struct App {
    should_quit: bool,
    session: CounterSession,
    clock: Box<dyn Clock>,
    /// `None` when the system clipboard could not be opened.
    clipboard: Option<Box<dyn ClipboardSink>>,
    copy_format: CopyFormat,
    status: Option<StatusMessage>,
    status_timeout: Duration,
    /// Set by the session subscription and by status changes; cleared on draw.
    needs_redraw: Arc<AtomicBool>,
}

impl App {
    pub fn new(mut session: CounterSession, clock: Box<dyn Clock>) -> Self {
        let needs_redraw = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&needs_redraw);
        session.subscribe(move |_| flag.store(true, Ordering::Relaxed));
        Self {
            needs_redraw,
            should_quit: false,
            session,
            clock,
            clipboard: None,
            copy_format: CopyFormat::default(),
            status: None,
            status_timeout: Duration::from_secs(2),
        }
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn with_copy_format(mut self, format: CopyFormat) -> Self {
        self.copy_format = format;
        self
    }

    pub fn with_status_timeout(mut self, timeout: Duration) -> Self {
        self.status_timeout = timeout;
        self
    }

    pub fn state(&self) -> &CounterState {
        self.session.state()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Force the next [`App::take_redraw`] to return true, e.g. after a resize.
    pub fn mark_dirty(&self) {
        self.needs_redraw.store(true, Ordering::Relaxed);
    }

    /// Whether anything visible changed since the last call.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.swap(false, Ordering::Relaxed)
    }

    /// Save failures are already logged by the session; the screen keeps
    /// showing the in-memory state.
    fn dispatch(&mut self, intent: CounterIntent) {
        let _ = self.session.dispatch(intent);
    }

    pub fn perform(&mut self, action: InputAction) {
        match action {
            InputAction::None => {}
            InputAction::Quit => self.request_quit(),
            InputAction::Tap => {
                let at = self.clock.now();
                self.dispatch(CounterIntent::Tap { at });
            }
            InputAction::Minus => {
                self.dispatch(CounterIntent::RequestMinus);
            }
            InputAction::Clear => {
                self.dispatch(CounterIntent::RequestClear);
            }
            InputAction::Confirm => {
                self.dispatch(CounterIntent::Confirm);
            }
            InputAction::Dismiss => {
                self.dispatch(CounterIntent::Dismiss);
            }
            InputAction::ScrollUp => {
                self.dispatch(CounterIntent::ScrollUp);
            }
            InputAction::ScrollDown => {
                self.dispatch(CounterIntent::ScrollDown);
            }
            InputAction::Copy => self.copy_history(),
        }
    }

    /// Put the rendered history on the clipboard and report the outcome.
    pub fn copy_history(&mut self) {
        let history = &self.session.state().history;
        let text = history.render(self.copy_format);
        let entries = history.len();

        let result = match self.clipboard.as_mut() {
            Some(clipboard) => clipboard.set_text(&text).map_err(|err| err.to_string()),
            None => Err("Clipboard unavailable".to_string()),
        };

        match result {
            Ok(()) => {
                tracing::debug!("Copied {} history entries", entries);
                self.set_status(format!("Copied {} entries", entries), StatusKind::Info);
            }
            Err(err) => {
                tracing::warn!("Copy failed: {}", err);
                self.set_status(err, StatusKind::Error);
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.expire_status(Instant::now());
    }

    fn set_status(&mut self, text: String, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text,
            kind,
            shown_at: Instant::now(),
        });
        self.mark_dirty();
    }

    fn expire_status(&mut self, now: Instant) {
        let timeout = self.status_timeout;
        let expired = self
            .status
            .as_ref()
            .is_some_and(|status| now.saturating_duration_since(status.shown_at) >= timeout);
        if expired {
            self.status = None;
            self.mark_dirty();
        }
    }
}
