use crate::ui::app::{App, StatusKind};
use crate::ui::confirm::render_confirm_dialog;
use crate::ui::counter::CounterState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    frame.render_widget(Header::new().widget(state), header);
    frame.render_widget(Clear, body);

    let (count_area, actions_area, history_area) = body_regions(body);
    frame.render_widget(count_widget(state), count_area);
    frame.render_widget(actions_widget(state), actions_area);
    render_history(frame, state, history_area);

    if let Some(status) = app.status() {
        if history_area.height > 0 {
            let color = match status.kind {
                StatusKind::Info => STATUS_OK,
                StatusKind::Error => STATUS_ERROR,
            };
            let line_area = Rect {
                y: history_area.y + history_area.height - 1,
                height: 1,
                ..history_area
            };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!(" {} ", status.text),
                    Style::default().fg(color),
                ))
                .alignment(Alignment::Right),
                line_area,
            );
        }
    }

    frame.render_widget(Footer::new(state).widget(footer), footer);

    render_confirm_dialog(frame, state.dialog, body);
}

fn count_widget(state: &CounterState) -> Paragraph<'static> {
    let style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(state.count.to_string(), style)),
    ])
    .alignment(Alignment::Center)
}

fn actions_widget(state: &CounterState) -> Paragraph<'static> {
    let key = Style::default().fg(ACCENT);
    let label = Style::default().fg(HEADER_TEXT);
    let disabled = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);
    let (minus_key, minus_label) = if state.minus_offered() {
        (key, label)
    } else {
        (disabled, disabled)
    };

    Paragraph::new(Line::from(vec![
        Span::styled("[space]", key),
        Span::styled(" Tap   ", label),
        Span::styled("[c]", key),
        Span::styled(" Copy   ", label),
        Span::styled("[m]", minus_key),
        Span::styled(" Minus   ", minus_label),
        Span::styled("[x]", key),
        Span::styled(" Clear", label),
    ]))
    .alignment(Alignment::Center)
}

fn render_history(frame: &mut Frame<'_>, state: &CounterState, area: Rect) {
    if area.height == 0 {
        return;
    }

    let block = Block::default()
        .title(Span::styled(
            format!(" History ({}) ", state.history.len()),
            Style::default().fg(HEADER_TEXT),
        ))
        .borders(Borders::TOP)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let visible_rows = block.inner(area).height as usize;

    let lines: Vec<Line> = if state.history.is_empty() {
        vec![Line::from(Span::styled(
            "No taps yet",
            Style::default().fg(MUTED_TEXT),
        ))]
    } else {
        state
            .history
            .iter()
            .skip(state.scroll_offset)
            .take(visible_rows)
            .map(|entry| {
                Line::from(Span::styled(
                    entry.to_string(),
                    Style::default().fg(HEADER_TEXT),
                ))
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}
