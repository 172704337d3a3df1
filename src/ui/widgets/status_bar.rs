// src/ui/widgets/status_bar.rs
//! Bottom status line.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status message (or the key hints when there is none).
pub fn render_status_bar(
    f: &mut Frame<'_>,
    area: Rect,
    message: Option<&str>,
    entry_count: usize,
    can_go_back: bool,
) {
    let left = match message {
        Some(msg) => Span::styled(msg.to_string(), Style::default().fg(Color::Yellow)),
        None => {
            let back = if can_go_back { " ←:back" } else { "" };
            Span::styled(
                format!("↵:open{} p:pin r:refresh q:quit", back),
                Style::default().fg(Color::DarkGray),
            )
        }
    };

    let line = Line::from(vec![left, Span::raw(format!("  [{}]", entry_count))]);
    f.render_widget(Paragraph::new(line), area);
}
