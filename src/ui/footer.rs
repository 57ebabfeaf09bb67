use crate::ui::counter::CounterState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SEPARATOR: &str = " │ ";

/// Bottom bar: key hints for whatever the current screen accepts, version on the right.
pub struct Footer<'a> {
    state: &'a CounterState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a CounterState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.state.dialog.is_visible() {
            return vec![("y/Enter", "Yes"), ("n/Esc", "No")];
        }
        let mut hints = vec![("Space/Enter/t", "Tap")];
        if self.state.minus_offered() {
            hints.push(("m/-", "Minus"));
        }
        hints.extend([
            ("x/Del", "Clear"),
            ("c", "Copy"),
            ("↑/↓", "Scroll"),
            ("q/Esc", "Quit"),
        ]);
        hints
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let key_style = Style::default().fg(ACCENT);
        let label_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let separator_style = Style::default().fg(MUTED_TEXT);

        let mut spans = vec![Span::raw(" ")];
        let mut used = 1;
        for (index, (key, label)) in self.hints().into_iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(SEPARATOR, separator_style));
                used += SEPARATOR.chars().count();
            }
            let label = format!(": {label}");
            used += key.chars().count() + label.chars().count();
            spans.push(Span::styled(key, key_style));
            spans.push(Span::styled(label, label_style));
        }

        let version = format!("v{VERSION} ");
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, label_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
