// src/ui/widgets/details.rs
//! Details panel for the selected entry.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::fs::{Entry, FileCategory};
use crate::open::OpenAction;
use crate::ui::icons::kind_label;

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<8}", label), Style::default().fg(Color::Cyan)),
        Span::raw(value),
    ])
}

/// Render what is known about `entry` and what Enter would do with it.
pub fn render_details(
    f: &mut Frame<'_>,
    area: Rect,
    entry: Option<&Entry>,
    category: Option<FileCategory>,
    mime: Option<&str>,
    action: Option<&OpenAction>,
) {
    let block = Block::default().borders(Borders::ALL).title("2: Details");

    let Some(entry) = entry else {
        f.render_widget(Paragraph::new("Nothing here").block(block), area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            entry.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        field(
            "Kind",
            kind_label(entry, category.unwrap_or(FileCategory::Binary)),
        ),
        field("Path", entry.path.display().to_string()),
    ];
    if let Some(mime) = mime {
        lines.push(field("MIME", mime.to_string()));
    }

    match action {
        Some(OpenAction::Navigate { .. }) => {
            lines.push(field("Enter", "browse folder".to_string()));
        }
        Some(OpenAction::ViewExternally { new_task, .. }) => {
            let how = if *new_task {
                "open in viewer (detached)"
            } else {
                "open in viewer (foreground)"
            };
            lines.push(field("Enter", how.to_string()));
        }
        None => {}
    }

    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
