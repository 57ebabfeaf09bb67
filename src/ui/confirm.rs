//! Yes/no popup for destructive actions.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::counter::ConfirmDialog;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK};

const DIALOG_WIDTH: u16 = 34;
const DIALOG_HEIGHT: u16 = 6;

pub fn render_confirm_dialog(frame: &mut Frame, dialog: ConfirmDialog, area: Rect) {
    if !dialog.is_visible() {
        return;
    }

    let area = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", dialog.title()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let question = match dialog {
        ConfirmDialog::ReduceCount => "Subtract one from the count?",
        ConfirmDialog::ClearAll => "Reset the count and history?",
        ConfirmDialog::Hidden => "",
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(question, Style::default().fg(HEADER_TEXT))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Yes", Style::default().fg(STATUS_OK)),
            Span::raw("    "),
            Span::styled("[n] No", Style::default().fg(STATUS_ERROR)),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
